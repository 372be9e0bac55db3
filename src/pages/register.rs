//! Registration page for job-seeker and employer accounts.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::types::{Registration, UserType};
use crate::state::session::Session;

/// Raw form values before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegistrationInput {
    username: String,
    email: String,
    password: String,
    password2: String,
    user_type: String,
    first_name: String,
    last_name: String,
    phone_number: String,
}

/// Check required fields and the password confirmation locally; the server
/// still runs its own validation and may reject with field errors.
fn validate_registration_input(input: &RegistrationInput) -> Result<Registration, &'static str> {
    let username = input.username.trim();
    let email = input.email.trim();
    if username.is_empty() || email.is_empty() || input.password.is_empty() {
        return Err("Username, email, and password are required.");
    }
    if input.password != input.password2 {
        return Err("Passwords do not match.");
    }
    let user_type = match input.user_type.as_str() {
        "job_seeker" => UserType::JobSeeker,
        "employer" => UserType::Employer,
        _ => return Err("Select an account type."),
    };
    Ok(Registration {
        username: username.to_owned(),
        email: email.to_owned(),
        password: input.password.clone(),
        password2: input.password2.clone(),
        user_type,
        first_name: input.first_name.trim().to_owned(),
        last_name: input.last_name.trim().to_owned(),
        phone_number: input.phone_number.trim().to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password2 = RwSignal::new(String::new());
    let user_type = RwSignal::new("job_seeker".to_owned());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = RegistrationInput {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            password2: password2.get(),
            user_type: user_type.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
            phone_number: phone_number.get(),
        };
        let registration = match validate_registration_input(&input) {
            Ok(registration) => registration,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match session.register(registration).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(err) => {
                    error.set(err.message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, registration);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign Up"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <select
                        class="auth-input"
                        on:change=move |ev| user_type.set(event_target_value(&ev))
                    >
                        <option value="job_seeker" selected=move || user_type.get() == "job_seeker">
                            "I am looking for a job"
                        </option>
                        <option value="employer" selected=move || user_type.get() == "employer">
                            "I am hiring"
                        </option>
                    </select>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || password2.get()
                        on:input=move |ev| password2.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="First name (optional)"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Last name (optional)"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="tel"
                        placeholder="Phone number (optional)"
                        prop:value=move || phone_number.get()
                        on:input=move |ev| phone_number.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-submit" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <p class="auth-alt">
                    "Already registered? "
                    <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
