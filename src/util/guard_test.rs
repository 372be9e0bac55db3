use super::*;

// =============================================================
// Loading window
// =============================================================

#[test]
fn loading_session_is_pending_regardless_of_requirement() {
    assert_eq!(decide(true, None, &AUTH_ONLY), GuardDecision::Pending);
    assert_eq!(
        decide(true, Some(UserType::Employer), &EMPLOYER_ONLY),
        GuardDecision::Pending
    );
}

// =============================================================
// Authentication gate
// =============================================================

#[test]
fn unauthenticated_on_protected_route_redirects_to_login() {
    assert_eq!(decide(false, None, &AUTH_ONLY), GuardDecision::RedirectToLogin);
}

#[test]
fn authenticated_any_role_renders_auth_only_route() {
    assert_eq!(
        decide(false, Some(UserType::JobSeeker), &AUTH_ONLY),
        GuardDecision::Render
    );
    assert_eq!(
        decide(false, Some(UserType::Employer), &AUTH_ONLY),
        GuardDecision::Render
    );
}

#[test]
fn unknown_role_still_satisfies_auth_only_route() {
    assert_eq!(
        decide(false, Some(UserType::Unknown), &AUTH_ONLY),
        GuardDecision::Render
    );
}

// =============================================================
// Role gate
// =============================================================

#[test]
fn wrong_role_redirects_to_forbidden_not_login() {
    assert_eq!(
        decide(false, Some(UserType::JobSeeker), &EMPLOYER_ONLY),
        GuardDecision::RedirectToForbidden
    );
}

#[test]
fn matching_role_renders_role_gated_route() {
    assert_eq!(
        decide(false, Some(UserType::Employer), &EMPLOYER_ONLY),
        GuardDecision::Render
    );
}

#[test]
fn unknown_role_is_denied_on_role_gated_route() {
    assert_eq!(
        decide(false, Some(UserType::Unknown), &EMPLOYER_ONLY),
        GuardDecision::RedirectToForbidden
    );
}

#[test]
fn unauthenticated_on_auth_required_role_route_goes_to_login_first() {
    assert_eq!(decide(false, None, &EMPLOYER_ONLY), GuardDecision::RedirectToLogin);
}
