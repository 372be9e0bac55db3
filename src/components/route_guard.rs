//! Declarative wrapper gating a view behind a route requirement.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route in `app` wraps its page in [`RouteGuard`]. The
//! access decision itself lives in `util::guard`; this component only
//! applies it: render the children, show a neutral pending view while the
//! session is still reconciling, or navigate away.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::guard::{GuardDecision, RouteRequirement, decide};

/// Gate `children` behind `requirement`, re-evaluating against the latest
/// session state on every change. Redirects never fire while the session is
/// loading.
#[component]
pub fn RouteGuard(requirement: RouteRequirement, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let decision = move || {
        let snapshot = session.snapshot();
        decide(snapshot.loading, snapshot.user_type(), &requirement)
    };

    Effect::new(move || match decision() {
        GuardDecision::RedirectToLogin => navigate("/login", NavigateOptions::default()),
        GuardDecision::RedirectToForbidden => navigate("/404", NavigateOptions::default()),
        GuardDecision::Pending | GuardDecision::Render => {}
    });

    view! {
        <Show
            when=move || decision() == GuardDecision::Render
            fallback=move || {
                view! {
                    <p class="route-guard__pending">
                        {move || if session.loading() { "Loading..." } else { "Redirecting..." }}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}
