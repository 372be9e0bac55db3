use super::*;

// =============================================================
// Helpers
// =============================================================

fn job_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": "Backend Engineer",
        "description": "Build APIs.",
        "company": 7,
        "company_name": "Acme",
        "category_name": "Engineering",
        "job_type": "full_time",
        "experience_level": "mid",
        "location": "Remote",
        "salary_min": "90000.00",
        "salary_max": "120000.00",
        "is_active": true,
        "is_expired": false,
        "created_at": "2024-05-01T12:00:00Z",
        "application_deadline": null,
        "applications_count": 3
    })
}

fn make_user(user_type: UserType) -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        user_type,
        first_name: String::new(),
        last_name: String::new(),
        phone_number: String::new(),
        profile_picture: None,
        bio: String::new(),
        company_name: String::new(),
        company_website: String::new(),
        location: String::new(),
        skills: String::new(),
    }
}

// =============================================================
// UserType serde
// =============================================================

#[test]
fn user_type_deserializes_from_snake_case() {
    assert_eq!(
        serde_json::from_str::<UserType>("\"job_seeker\"").unwrap(),
        UserType::JobSeeker
    );
    assert_eq!(
        serde_json::from_str::<UserType>("\"employer\"").unwrap(),
        UserType::Employer
    );
}

#[test]
fn user_type_unknown_tag_falls_back_to_unknown() {
    assert_eq!(
        serde_json::from_str::<UserType>("\"recruiter\"").unwrap(),
        UserType::Unknown
    );
}

#[test]
fn user_type_serializes_to_snake_case() {
    assert_eq!(serde_json::to_string(&UserType::JobSeeker).unwrap(), "\"job_seeker\"");
    assert_eq!(serde_json::to_string(&UserType::Employer).unwrap(), "\"employer\"");
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_with_missing_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 9,
        "username": "bob",
        "user_type": "employer"
    }))
    .unwrap();
    assert_eq!(user.id, 9);
    assert_eq!(user.user_type, UserType::Employer);
    assert!(user.email.is_empty());
    assert!(user.profile_picture.is_none());
}

#[test]
fn display_name_prefers_first_name() {
    let mut user = make_user(UserType::JobSeeker);
    assert_eq!(user.display_name(), "alice");
    user.first_name = "Alice".to_owned();
    assert_eq!(user.display_name(), "Alice");
}

#[test]
fn profile_update_from_user_copies_editable_fields() {
    let mut user = make_user(UserType::Employer);
    user.company_name = "Acme".to_owned();
    user.bio = "We hire.".to_owned();
    let update = ProfileUpdate::from_user(&user);
    assert_eq!(update.email, "alice@example.com");
    assert_eq!(update.company_name, "Acme");
    assert_eq!(update.bio, "We hire.");
}

// =============================================================
// AuthResponse
// =============================================================

#[test]
fn auth_response_deserializes_without_refresh() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "access": "T1",
        "user": { "id": 1, "username": "alice", "user_type": "job_seeker" }
    }))
    .unwrap();
    assert_eq!(resp.access, "T1");
    assert!(resp.refresh.is_none());
    assert_eq!(resp.user.username, "alice");
}

// =============================================================
// Job list extraction
// =============================================================

#[test]
fn extract_jobs_handles_paginated_envelope() {
    let body = serde_json::json!({ "count": 2, "results": [job_json(1), job_json(2)] });
    let jobs = extract_jobs(body);
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].id, 1);
    assert_eq!(jobs[1].salary_max.as_deref(), Some("120000.00"));
}

#[test]
fn extract_jobs_handles_bare_array() {
    let jobs = extract_jobs(serde_json::json!([job_json(5)]));
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].company_name, "Acme");
}

#[test]
fn extract_jobs_skips_malformed_entries() {
    let jobs = extract_jobs(serde_json::json!([job_json(1), {"id": "not-a-number"}]));
    assert_eq!(jobs.len(), 1);
}

#[test]
fn extract_jobs_empty_for_unexpected_shapes() {
    assert!(extract_jobs(serde_json::json!("nope")).is_empty());
    assert!(extract_jobs(serde_json::json!({ "detail": "error" })).is_empty());
}

// =============================================================
// JobDraft serialization
// =============================================================

#[test]
fn job_draft_omits_unset_optional_fields() {
    let draft = JobDraft {
        title: "Role".to_owned(),
        description: "Desc".to_owned(),
        job_type: "contract".to_owned(),
        experience_level: "senior".to_owned(),
        location: "Berlin".to_owned(),
        ..JobDraft::default()
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert!(value.get("salary_min").is_none());
    assert!(value.get("application_deadline").is_none());
    assert_eq!(value["job_type"], "contract");
}
