//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Find your next role, or your next hire"</h1>
            <p class="home-page__tagline">
                "Search open positions from companies that are hiring now, or post your own openings."
            </p>
            <div class="home-page__actions">
                <a class="btn btn--primary" href="/jobs">
                    "Find Jobs"
                </a>
                <a class="btn" href="/register">
                    "Sign Up"
                </a>
            </div>
        </div>
    }
}
