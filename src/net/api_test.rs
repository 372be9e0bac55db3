use super::*;

// =============================================================
// Request plumbing helpers
// =============================================================

#[test]
fn bearer_value_formats_authorization_header() {
    assert_eq!(bearer_value("T1"), "Bearer T1");
}

#[test]
fn job_save_endpoint_formats_expected_path() {
    assert_eq!(job_save_endpoint(42), "/api/jobs/42/save/");
}

#[test]
fn jobs_query_pairs_skips_empty_fields() {
    let filters = JobFilters {
        search: "rust".to_owned(),
        job_type: String::new(),
        experience_level: "senior".to_owned(),
        location: String::new(),
    };
    assert_eq!(
        jobs_query_pairs(&filters),
        vec![("search", "rust".to_owned()), ("experience_level", "senior".to_owned())]
    );
}

#[test]
fn jobs_query_pairs_empty_for_default_filters() {
    assert!(jobs_query_pairs(&JobFilters::default()).is_empty());
}

// =============================================================
// Error message extraction
// =============================================================

#[test]
fn error_message_prefers_server_detail() {
    let err = ApiError::Response {
        status: 401,
        body: serde_json::json!({ "detail": "Invalid credentials" }),
    };
    assert_eq!(error_message(&err, "Login failed"), "Invalid credentials");
}

#[test]
fn error_message_flattens_field_errors() {
    let err = ApiError::Response {
        status: 400,
        body: serde_json::json!({
            "password": ["Password fields didn't match."],
            "username": ["A user with that username already exists."]
        }),
    };
    assert_eq!(
        error_message(&err, "Registration failed"),
        "password: Password fields didn't match.; username: A user with that username already exists."
    );
}

#[test]
fn error_message_handles_string_valued_fields() {
    let err = ApiError::Response {
        status: 400,
        body: serde_json::json!({ "email": "Enter a valid email address." }),
    };
    assert_eq!(error_message(&err, "x"), "email: Enter a valid email address.");
}

#[test]
fn error_message_falls_back_for_unusable_payloads() {
    let err = ApiError::Response {
        status: 500,
        body: serde_json::Value::Null,
    };
    assert_eq!(error_message(&err, "Login failed"), "Login failed");

    let err = ApiError::Response {
        status: 400,
        body: serde_json::json!({ "fields": { "nested": true } }),
    };
    assert_eq!(error_message(&err, "Login failed"), "Login failed");
}

#[test]
fn error_message_falls_back_for_transport_failures() {
    assert_eq!(
        error_message(&ApiError::Network("timed out".to_owned()), "Update failed"),
        "Update failed"
    );
    assert_eq!(
        error_message(&ApiError::Decode("bad json".to_owned()), "Update failed"),
        "Update failed"
    );
}
