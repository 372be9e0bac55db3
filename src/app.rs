//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::route_guard::RouteGuard;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, jobs::JobsPage, login::LoginPage, not_found::NotFoundPage,
    post_job::PostJobPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::session::Session;
use crate::util::guard::{AUTH_ONLY, EMPLOYER_ONLY};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, kicks off startup reconciliation, and sets
/// up client-side routing with per-route access requirements.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    provide_context(session);

    // Turn any persisted token into a live session before guards settle.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.reconcile_on_startup().await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/jobboard.css"/>
        <Title text="JobBoard"/>

        <Router>
            <Header/>
            <main class="main-content">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("jobs") view=JobsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("profile")
                        view=|| {
                            view! {
                                <RouteGuard requirement=AUTH_ONLY>
                                    <ProfilePage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <RouteGuard requirement=AUTH_ONLY>
                                    <DashboardPage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("post-job")
                        view=|| {
                            view! {
                                <RouteGuard requirement=EMPLOYER_ONLY>
                                    <PostJobPage/>
                                </RouteGuard>
                            }
                        }
                    />
                    <Route path=StaticSegment("404") view=NotFoundPage/>
                </Routes>
            </main>
        </Router>
    }
}
