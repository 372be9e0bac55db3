//! Profile page: view and edit the authenticated user's details.
//!
//! Reached only through the auth-gated route, so a user is present by the
//! time this renders. Username and account type are server-side read-only
//! and shown as plain text.

use leptos::prelude::*;

use crate::net::types::ProfileUpdate;
use crate::state::session::Session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();

    let initial = session
        .user()
        .map(|user| ProfileUpdate::from_user(&user))
        .unwrap_or_default();

    let email = RwSignal::new(initial.email);
    let first_name = RwSignal::new(initial.first_name);
    let last_name = RwSignal::new(initial.last_name);
    let phone_number = RwSignal::new(initial.phone_number);
    let bio = RwSignal::new(initial.bio);
    let company_name = RwSignal::new(initial.company_name);
    let company_website = RwSignal::new(initial.company_website);
    let location = RwSignal::new(initial.location);
    let skills = RwSignal::new(initial.skills);
    let info = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let username = move || session.user().map(|u| u.username).unwrap_or_default();
    let account_type = move || {
        if session.is_employer() {
            "Employer"
        } else {
            "Job Seeker"
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let update = ProfileUpdate {
            email: email.get().trim().to_owned(),
            first_name: first_name.get().trim().to_owned(),
            last_name: last_name.get().trim().to_owned(),
            phone_number: phone_number.get().trim().to_owned(),
            bio: bio.get(),
            company_name: company_name.get().trim().to_owned(),
            company_website: company_website.get().trim().to_owned(),
            location: location.get().trim().to_owned(),
            skills: skills.get(),
        };
        busy.set(true);
        info.set(String::new());
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.update_profile(update).await {
                Ok(()) => info.set("Profile updated.".to_owned()),
                Err(err) => error.set(err.message),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, update);
        }
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <p class="profile-page__identity">
                <span class="profile-page__username">{username}</span>
                " ("
                <span class="profile-page__type">{account_type}</span>
                ")"
            </p>
            <form class="profile-form" on:submit=on_submit>
                <input
                    class="profile-input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <div class="profile-form__row">
                    <input
                        class="profile-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="profile-input"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </div>
                <input
                    class="profile-input"
                    type="tel"
                    placeholder="Phone number"
                    prop:value=move || phone_number.get()
                    on:input=move |ev| phone_number.set(event_target_value(&ev))
                />
                <input
                    class="profile-input"
                    type="text"
                    placeholder="Location"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <textarea
                    class="profile-input profile-input--bio"
                    placeholder="About you"
                    prop:value=move || bio.get()
                    on:input=move |ev| bio.set(event_target_value(&ev))
                ></textarea>
                <Show when=move || session.is_employer()>
                    <input
                        class="profile-input"
                        type="text"
                        placeholder="Company name"
                        prop:value=move || company_name.get()
                        on:input=move |ev| company_name.set(event_target_value(&ev))
                    />
                    <input
                        class="profile-input"
                        type="url"
                        placeholder="Company website"
                        prop:value=move || company_website.get()
                        on:input=move |ev| company_website.set(event_target_value(&ev))
                    />
                </Show>
                <Show when=move || session.is_job_seeker()>
                    <textarea
                        class="profile-input profile-input--skills"
                        placeholder="Skills (comma separated)"
                        prop:value=move || skills.get()
                        on:input=move |ev| skills.set(event_target_value(&ev))
                    ></textarea>
                </Show>
                <button class="btn btn--primary profile-submit" type="submit" disabled=move || busy.get()>
                    "Save Changes"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="profile-page__info">{move || info.get()}</p>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <p class="profile-page__error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
