//! Job search page: free-text search, tag filters, and the result list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browsing is public; the session only influences the save affordance on
//! individual cards. Every filter change triggers a refetch, with the
//! free-text input debounced so typing does not flood the API.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::net::api;
use crate::net::types::JobFilters;
use crate::state::jobs::JobsState;

/// Result-count line above the list.
fn results_label(count: usize) -> String {
    if count == 1 {
        "Found 1 job".to_owned()
    } else {
        format!("Found {count} jobs")
    }
}

#[component]
pub fn JobsPage() -> impl IntoView {
    let filters = RwSignal::new(JobFilters::default());
    let jobs = RwSignal::new(JobsState::default());
    let search_input = RwSignal::new(String::new());
    let search_seq = RwSignal::new(0_u64);

    // Refetch whenever the effective filters change. Effects only run in
    // the browser, so SSR renders the initial loading state.
    Effect::new(move || {
        let current = filters.get();
        jobs.update(JobsState::begin_fetch);
        leptos::task::spawn_local(async move {
            match api::fetch_jobs(&current).await {
                Ok(items) => jobs.update(|s| s.apply_results(items)),
                Err(err) => {
                    jobs.update(|s| s.apply_error(api::error_message(&err, "Failed to fetch jobs")));
                }
            }
        });
    });

    let on_search_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        search_input.set(value.clone());
        #[cfg(feature = "hydrate")]
        {
            let seq = search_seq.get_untracked() + 1;
            search_seq.set(seq);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(300)).await;
                // Only the latest keystroke applies its value.
                if search_seq.get_untracked() == seq {
                    filters.update(|f| f.search = value);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (value, search_seq);
        }
    };

    view! {
        <div class="jobs-page">
            <h1>"Find Your Dream Job"</h1>
            <div class="jobs-page__layout">
                <aside class="jobs-page__filters">
                    <label class="filter__label">
                        "Job Type"
                        <select
                            class="filter__select"
                            on:change=move |ev| filters.update(|f| f.job_type = event_target_value(&ev))
                        >
                            <option value="">"Any"</option>
                            <option value="full_time">"Full Time"</option>
                            <option value="part_time">"Part Time"</option>
                            <option value="contract">"Contract"</option>
                            <option value="internship">"Internship"</option>
                            <option value="remote">"Remote"</option>
                        </select>
                    </label>
                    <label class="filter__label">
                        "Experience Level"
                        <select
                            class="filter__select"
                            on:change=move |ev| filters.update(|f| f.experience_level = event_target_value(&ev))
                        >
                            <option value="">"Any"</option>
                            <option value="entry">"Entry Level"</option>
                            <option value="mid">"Mid Level"</option>
                            <option value="senior">"Senior Level"</option>
                            <option value="executive">"Executive"</option>
                        </select>
                    </label>
                    <label class="filter__label">
                        "Location"
                        <input
                            class="filter__input"
                            type="text"
                            placeholder="City or region"
                            on:change=move |ev| filters.update(|f| f.location = event_target_value(&ev))
                        />
                    </label>
                </aside>
                <section class="jobs-page__results">
                    <input
                        class="jobs-page__search"
                        type="text"
                        placeholder="Search jobs by title, company, or keyword..."
                        prop:value=move || search_input.get()
                        on:input=on_search_input
                    />
                    <Show when=move || jobs.get().error.is_some()>
                        <p class="jobs-page__error">{move || jobs.get().error.unwrap_or_default()}</p>
                    </Show>
                    <Show
                        when=move || !jobs.get().loading
                        fallback=|| view! { <p class="jobs-page__loading">"Loading jobs..."</p> }
                    >
                        <Show
                            when=move || !jobs.get().items.is_empty()
                            fallback=|| {
                                view! {
                                    <p class="jobs-page__empty">
                                        "No jobs found. Try different search criteria."
                                    </p>
                                }
                            }
                        >
                            <p class="jobs-page__count">{move || results_label(jobs.get().items.len())}</p>
                            <div class="jobs-page__list">
                                {move || {
                                    jobs.get()
                                        .items
                                        .into_iter()
                                        .map(|job| view! { <JobCard job=job/> })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </Show>
                </section>
            </div>
        </div>
    }
}
