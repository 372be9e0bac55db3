use super::*;

fn make_job(id: i64) -> Job {
    Job {
        id,
        title: "Backend Engineer".to_owned(),
        description: "Build APIs.".to_owned(),
        company: Some(7),
        company_name: "Acme".to_owned(),
        category_name: None,
        job_type: "full_time".to_owned(),
        experience_level: "mid".to_owned(),
        location: "Remote".to_owned(),
        salary_min: None,
        salary_max: None,
        is_active: true,
        is_expired: false,
        created_at: String::new(),
        application_deadline: None,
        applications_count: 0,
    }
}

#[test]
fn begin_fetch_sets_loading_and_clears_error() {
    let mut state = JobsState {
        error: Some("Failed to fetch jobs".to_owned()),
        ..JobsState::default()
    };
    state.begin_fetch();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_results_replaces_items_and_resolves_loading() {
    let mut state = JobsState::default();
    state.begin_fetch();
    state.apply_results(vec![make_job(1), make_job(2)]);
    assert_eq!(state.items.len(), 2);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_error_keeps_previous_items() {
    let mut state = JobsState::default();
    state.apply_results(vec![make_job(1)]);
    state.begin_fetch();
    state.apply_error("Failed to fetch jobs".to_owned());
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch jobs"));
}
