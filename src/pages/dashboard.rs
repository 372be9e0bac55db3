//! Authenticated landing page with role-aware shortcuts.

use leptos::prelude::*;

use crate::state::session::Session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let greeting = move || {
        session
            .user()
            .map(|user| format!("Welcome, {}", user.display_name()))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <h1>{greeting}</h1>
            <div class="dashboard-page__links">
                <Show
                    when=move || session.is_employer()
                    fallback=|| {
                        view! {
                            <a class="btn btn--primary" href="/jobs">
                                "Browse Jobs"
                            </a>
                        }
                    }
                >
                    <a class="btn btn--primary" href="/post-job">
                        "Post a Job"
                    </a>
                </Show>
                <a class="btn" href="/profile">
                    "Edit Profile"
                </a>
            </div>
        </div>
    }
}
