//! Top navigation bar.
//!
//! Reads the session's derived flags to decide which links to show; the
//! only action it triggers is logout, after which it navigates home. No
//! state of its own.

use leptos::prelude::*;

use crate::state::session::Session;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<Session>();

    let display_name = move || {
        session
            .user()
            .map(|user| user.display_name().to_owned())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session.logout();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        <header class="header">
            <a class="header__brand" href="/">
                "JobBoard"
            </a>
            <nav class="header__nav">
                <a class="header__link" href="/">
                    "Home"
                </a>
                <a class="header__link" href="/jobs">
                    "Find Jobs"
                </a>
                <Show when=move || session.is_employer()>
                    <a class="header__link" href="/post-job">
                        "Post a Job"
                    </a>
                </Show>
            </nav>
            <span class="header__spacer"></span>
            <nav class="header__account">
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="btn header__login" href="/login">
                                "Login"
                            </a>
                            <a class="btn btn--primary header__signup" href="/register">
                                "Sign Up"
                            </a>
                        }
                    }
                >
                    <span class="header__self">{display_name}</span>
                    <a class="header__link" href="/profile">
                        "Profile"
                    </a>
                    <a class="header__link" href="/dashboard">
                        "Dashboard"
                    </a>
                    <button class="btn header__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
