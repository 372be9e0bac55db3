//! Not-found page; also the target of forbidden-route redirects.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist or you do not have access to it."</p>
            <a class="btn" href="/">
                "Back to Home"
            </a>
        </div>
    }
}
