//! Employer posting form.
//!
//! The route is employer-gated in `app`; the server enforces the role again
//! on the create call, so a stale session cannot post.

#[cfg(test)]
#[path = "post_job_test.rs"]
mod post_job_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::JobDraft;
use crate::state::session::Session;

/// Raw form values before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct JobDraftInput {
    title: String,
    description: String,
    job_type: String,
    experience_level: String,
    location: String,
    salary_min: String,
    salary_max: String,
    application_deadline: String,
}

/// Local sanity checks before the draft goes to the server.
fn validate_job_draft(input: &JobDraftInput) -> Result<JobDraft, &'static str> {
    let title = input.title.trim();
    let description = input.description.trim();
    let location = input.location.trim();
    if title.is_empty() || description.is_empty() || location.is_empty() {
        return Err("Title, description, and location are required.");
    }
    if input.job_type.is_empty() || input.experience_level.is_empty() {
        return Err("Select a job type and experience level.");
    }
    let salary_min = parse_salary(&input.salary_min)?;
    let salary_max = parse_salary(&input.salary_max)?;
    if let (Some(min), Some(max)) = (&salary_min, &salary_max) {
        let min: f64 = min.parse().unwrap_or(0.0);
        let max: f64 = max.parse().unwrap_or(0.0);
        if min > max {
            return Err("Minimum salary exceeds maximum.");
        }
    }
    let deadline = input.application_deadline.trim();
    Ok(JobDraft {
        title: title.to_owned(),
        description: description.to_owned(),
        job_type: input.job_type.clone(),
        experience_level: input.experience_level.clone(),
        location: location.to_owned(),
        salary_min,
        salary_max,
        application_deadline: if deadline.is_empty() { None } else { Some(deadline.to_owned()) },
    })
}

/// Empty string means "not published"; anything else must be a
/// non-negative number.
fn parse_salary(raw: &str) -> Result<Option<String>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value >= 0.0 => Ok(Some(raw.to_owned())),
        _ => Err("Salary bounds must be non-negative numbers."),
    }
}

#[component]
pub fn PostJobPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let job_type = RwSignal::new("full_time".to_owned());
    let experience_level = RwSignal::new("entry".to_owned());
    let location = RwSignal::new(String::new());
    let salary_min = RwSignal::new(String::new());
    let salary_max = RwSignal::new(String::new());
    let application_deadline = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = JobDraftInput {
            title: title.get(),
            description: description.get(),
            job_type: job_type.get(),
            experience_level: experience_level.get(),
            location: location.get(),
            salary_min: salary_min.get(),
            salary_max: salary_max.get(),
            application_deadline: application_deadline.get(),
        };
        let draft = match validate_job_draft(&input) {
            Ok(draft) => draft,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        let Some(access) = session.token_untracked() else {
            error.set("Not signed in.".to_owned());
            return;
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::create_job(&access, &draft).await {
                Ok(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard");
                    }
                }
                Err(err) => {
                    error.set(api::error_message(&err, "Failed to post job"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (access, draft);
        }
    };

    view! {
        <div class="post-job-page">
            <h1>"Post a Job"</h1>
            <form class="post-job-form" on:submit=on_submit>
                <input
                    class="post-job-input"
                    type="text"
                    placeholder="Job title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="post-job-input post-job-input--description"
                    placeholder="Describe the role, responsibilities, and requirements..."
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <div class="post-job-form__row">
                    <select
                        class="post-job-input"
                        on:change=move |ev| job_type.set(event_target_value(&ev))
                    >
                        <option value="full_time">"Full Time"</option>
                        <option value="part_time">"Part Time"</option>
                        <option value="contract">"Contract"</option>
                        <option value="internship">"Internship"</option>
                        <option value="remote">"Remote"</option>
                    </select>
                    <select
                        class="post-job-input"
                        on:change=move |ev| experience_level.set(event_target_value(&ev))
                    >
                        <option value="entry">"Entry Level"</option>
                        <option value="mid">"Mid Level"</option>
                        <option value="senior">"Senior Level"</option>
                        <option value="executive">"Executive"</option>
                    </select>
                </div>
                <input
                    class="post-job-input"
                    type="text"
                    placeholder="Location"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <div class="post-job-form__row">
                    <input
                        class="post-job-input"
                        type="number"
                        placeholder="Salary min (optional)"
                        prop:value=move || salary_min.get()
                        on:input=move |ev| salary_min.set(event_target_value(&ev))
                    />
                    <input
                        class="post-job-input"
                        type="number"
                        placeholder="Salary max (optional)"
                        prop:value=move || salary_max.get()
                        on:input=move |ev| salary_max.set(event_target_value(&ev))
                    />
                </div>
                <label class="post-job-form__deadline">
                    "Application deadline (optional)"
                    <input
                        class="post-job-input"
                        type="date"
                        prop:value=move || application_deadline.get()
                        on:input=move |ev| application_deadline.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary post-job-submit" type="submit" disabled=move || busy.get()>
                    "Publish"
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="post-job-error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
