//! Card component for a single job posting in list views.
//!
//! DESIGN
//! ======
//! Pure formatting (salary range, tag labels) is factored out of the view so
//! the display rules are unit-testable. The save action is only offered to
//! authenticated job seekers; everyone else gets a read-only card.

#[cfg(test)]
#[path = "job_card_test.rs"]
mod job_card_test;

use leptos::prelude::*;

use crate::net::types::Job;
use crate::state::session::Session;

/// Human label for a server-side tag such as `"full_time"` or `"entry"`.
///
/// Unknown tags pass through unchanged rather than hide the posting.
fn tag_label(tag: &str) -> String {
    match tag {
        "full_time" => "Full Time".to_owned(),
        "part_time" => "Part Time".to_owned(),
        "contract" => "Contract".to_owned(),
        "internship" => "Internship".to_owned(),
        "remote" => "Remote".to_owned(),
        "entry" => "Entry Level".to_owned(),
        "mid" => "Mid Level".to_owned(),
        "senior" => "Senior Level".to_owned(),
        "executive" => "Executive".to_owned(),
        other => other.to_owned(),
    }
}

/// Displayable salary range, or `None` when the posting publishes neither
/// bound.
fn salary_label(salary_min: Option<&str>, salary_max: Option<&str>) -> Option<String> {
    match (salary_min, salary_max) {
        (Some(min), Some(max)) => Some(format!("${min} - ${max}")),
        (Some(min), None) => Some(format!("From ${min}")),
        (None, Some(max)) => Some(format!("Up to ${max}")),
        (None, None) => None,
    }
}

/// A job posting summary card.
#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    let session = expect_context::<Session>();

    let saved = RwSignal::new(false);
    let save_error = RwSignal::new(None::<String>);
    let job_id = job.id;

    let on_save = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(access) = session.token_untracked() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::toggle_save_job(&access, job_id).await {
                    Ok(()) => {
                        saved.update(|s| *s = !*s);
                        save_error.set(None);
                    }
                    Err(err) => {
                        save_error.set(Some(crate::net::api::error_message(&err, "Could not save job")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = job_id;
        }
    };

    let salary = salary_label(job.salary_min.as_deref(), job.salary_max.as_deref());
    let type_label = tag_label(&job.job_type);
    let level_label = tag_label(&job.experience_level);
    let Job {
        title,
        description,
        company_name,
        location,
        ..
    } = job;

    view! {
        <div class="job-card">
            <div class="job-card__head">
                <h3 class="job-card__title">{title}</h3>
                <Show when=move || session.is_authenticated() && session.is_job_seeker()>
                    <button class="btn job-card__save" on:click=on_save>
                        {move || if saved.get() { "Saved" } else { "Save" }}
                    </button>
                </Show>
            </div>
            <p class="job-card__company">{company_name}</p>
            <p class="job-card__meta">
                <span class="badge job-card__type">{type_label}</span>
                " "
                <span class="badge job-card__level">{level_label}</span>
                " "
                <span class="job-card__location">{location}</span>
            </p>
            {salary.map(|range| view! { <p class="job-card__salary">{range}</p> })}
            <p class="job-card__description">{description}</p>
            <Show when=move || save_error.get().is_some()>
                <p class="job-card__error">{move || save_error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
