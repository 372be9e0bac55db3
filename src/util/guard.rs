//! Route-protection decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::route_guard` wraps protected views and applies the decision
//! computed here against the latest session state. Keeping the decision a
//! pure function makes every gate unit-testable without a UI harness.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::UserType;

/// Declarative access constraint attached to a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRequirement {
    /// Whether an authenticated session is required at all.
    pub requires_auth: bool,
    /// Roles allowed to render the view; empty means any authenticated role.
    pub allowed_roles: &'static [UserType],
}

/// Requires a session but accepts any role.
pub const AUTH_ONLY: RouteRequirement = RouteRequirement {
    requires_auth: true,
    allowed_roles: &[],
};

/// Requires an authenticated employer account.
pub const EMPLOYER_ONLY: RouteRequirement = RouteRequirement {
    requires_auth: true,
    allowed_roles: &[UserType::Employer],
};

/// Outcome of evaluating a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session is still reconciling; show a neutral pending view and
    /// re-evaluate once loading resolves.
    Pending,
    /// Render the requested view.
    Render,
    /// No session where one is required.
    RedirectToLogin,
    /// Session present but its role is not allowed here.
    RedirectToForbidden,
}

/// Evaluate a route requirement against the current session.
///
/// `user_type` is the authenticated user's role tag, or `None` when no user
/// is present. Unrecognized tags ([`UserType::Unknown`]) never satisfy a
/// role list, so role-gated routes deny them.
pub fn decide(loading: bool, user_type: Option<UserType>, requirement: &RouteRequirement) -> GuardDecision {
    if loading {
        return GuardDecision::Pending;
    }
    if requirement.requires_auth && user_type.is_none() {
        return GuardDecision::RedirectToLogin;
    }
    if !requirement.allowed_roles.is_empty() {
        let allowed = user_type.is_some_and(|role| requirement.allowed_roles.contains(&role));
        if !allowed {
            return GuardDecision::RedirectToForbidden;
        }
    }
    GuardDecision::Render
}
