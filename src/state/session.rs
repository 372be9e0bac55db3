//! Session state and the manager that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Session`] is provided once from `App` via context and is the sole
//! writer of [`SessionState`]. Pages and components read the derived flags
//! reactively and trigger the credential operations; the route guard
//! consults the same state to gate protected views.
//!
//! DESIGN
//! ======
//! Every lifecycle step is a pure transition on `SessionState`, applied
//! inside a single `update` call so readers always observe a complete
//! `(token, user, loading)` tuple. The async methods only do I/O at the
//! edges: call the REST adapter, then apply one transition. Role flags are
//! recomputed from `user` on every read and never cached.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use thiserror::Error;

use crate::net::api::{self, ApiError};
use crate::net::types::{Credentials, ProfileUpdate, Registration, User, UserType};
use crate::util::{storage, token};

/// Displayable failure from a credential or profile operation.
///
/// Carries the server-supplied message when one exists, or the operation's
/// generic fallback. Never a crash path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    fn from_api(err: &ApiError, fallback: &str) -> Self {
        Self {
            message: api::error_message(err, fallback),
        }
    }
}

/// The session tuple: persisted-token copy, hydrated user, and the startup
/// reconciliation flag.
///
/// Invariant: `user` is present only while `token` is present. The converse
/// may transiently not hold (token persisted, profile fetch still in
/// flight). `loading` is true only during the startup reconciliation window
/// and resolves to false exactly once per run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// State at application start, before reconciliation has resolved.
    pub fn reconciling() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }

    /// Whether a user is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Role tag of the current user, if any.
    pub fn user_type(&self) -> Option<UserType> {
        self.user.as_ref().map(|u| u.user_type)
    }

    /// Whether the current user is an employer.
    pub fn is_employer(&self) -> bool {
        self.user_type() == Some(UserType::Employer)
    }

    /// Whether the current user is a job seeker.
    pub fn is_job_seeker(&self) -> bool {
        self.user_type() == Some(UserType::JobSeeker)
    }

    /// Install a fresh credential pair after login or registration.
    pub fn apply_auth_success(&mut self, access: String, user: User) {
        self.token = Some(access);
        self.user = Some(user);
    }

    /// Reset to the logged-out idle state.
    pub fn apply_logout(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// Install a reconciled session and resolve the loading window.
    pub fn apply_reconciled(&mut self, access: String, user: User) {
        self.token = Some(access);
        self.user = Some(user);
        self.loading = false;
    }

    /// Resolve the loading window without touching credentials.
    pub fn resolve_loading(&mut self) {
        self.loading = false;
    }

    /// Overwrite the profile after a successful update.
    pub fn apply_profile(&mut self, user: User) {
        self.user = Some(user);
    }
}

/// Network-free first phase of startup reconciliation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReconcilePlan {
    /// No persisted token; resolve straight to logged-out idle.
    ResolveIdle,
    /// Persisted token is expired or undecodable; clear it locally without
    /// a server round-trip.
    Discard,
    /// Persisted token looks live; fetch the profile with it.
    FetchProfile(String),
}

/// Decide what startup reconciliation should do with the persisted token
/// before any network traffic happens.
pub fn plan_reconcile(stored: Option<String>, now_secs: i64) -> ReconcilePlan {
    match stored {
        None => ReconcilePlan::ResolveIdle,
        Some(tok) if token::is_expired(&tok, now_secs) => ReconcilePlan::Discard,
        Some(tok) => ReconcilePlan::FetchProfile(tok),
    }
}

/// Whether an in-flight reconciliation result may still be applied.
///
/// A logout (or a newer login) during the profile fetch rewrites the token
/// store; the stale result must then be discarded rather than resurrect the
/// old session.
pub fn should_apply_reconcile(stored: Option<&str>, fetched_with: &str) -> bool {
    stored == Some(fetched_with)
}

/// Owning handle over the session signal; the only component that mutates
/// session state.
///
/// `Copy` so event handlers and spawned futures can capture it freely, like
/// any other `RwSignal` handle.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Fresh handle in the reconciling state. `App` provides exactly one
    /// via context and then runs [`Session::reconcile_on_startup`].
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::reconciling()),
        }
    }

    /// Reactive read of the full session tuple.
    pub fn snapshot(&self) -> SessionState {
        self.state.get()
    }

    /// Reactive read of the current user.
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    /// Reactive read of the startup-reconciliation flag.
    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Reactive read of the authentication flag.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Reactive read of the employer role flag.
    pub fn is_employer(&self) -> bool {
        self.state.with(SessionState::is_employer)
    }

    /// Reactive read of the job-seeker role flag.
    pub fn is_job_seeker(&self) -> bool {
        self.state.with(SessionState::is_job_seeker)
    }

    /// Current bearer token without registering a reactive dependency; for
    /// request plumbing, not rendering.
    pub fn token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    /// Authenticate and install the returned session.
    ///
    /// On success the token is persisted and `(token, user)` land in state
    /// atomically before this returns. On failure state is untouched.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] with the server's `detail` or
    /// `"Login failed"`.
    pub async fn login(self, credentials: Credentials) -> Result<(), AuthError> {
        match api::login(&credentials).await {
            Ok(resp) => {
                storage::save_token(&resp.access);
                self.state.update(|s| s.apply_auth_success(resp.access, resp.user));
                Ok(())
            }
            Err(err) => Err(AuthError::from_api(&err, "Login failed")),
        }
    }

    /// Create an account and install the returned session; same contract as
    /// [`Session::login`].
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] with the flattened validation payload or
    /// `"Registration failed"`.
    pub async fn register(self, registration: Registration) -> Result<(), AuthError> {
        match api::register(&registration).await {
            Ok(resp) => {
                storage::save_token(&resp.access);
                self.state.update(|s| s.apply_auth_success(resp.access, resp.user));
                Ok(())
            }
            Err(err) => Err(AuthError::from_api(&err, "Registration failed")),
        }
    }

    /// Clear the persisted token and reset session state. Idempotent; no
    /// server round-trip.
    pub fn logout(self) {
        storage::clear_token();
        self.state.update(SessionState::apply_logout);
    }

    /// Send a partial profile update and overwrite the hydrated user on
    /// success. On failure the previously held user is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] with the server payload or `"Update failed"`;
    /// also fails locally when no session is active.
    pub async fn update_profile(self, update: ProfileUpdate) -> Result<(), AuthError> {
        let Some(access) = self.token_untracked() else {
            return Err(AuthError {
                message: "Not signed in".to_owned(),
            });
        };
        match api::update_profile(&access, &update).await {
            Ok(user) => {
                self.state.update(|s| s.apply_profile(user));
                Ok(())
            }
            Err(err) => Err(AuthError::from_api(&err, "Update failed")),
        }
    }

    /// Turn the persisted token into a live session, or discard it.
    ///
    /// Runs once at application start. Empty store resolves to logged-out
    /// idle; an expired or undecodable token is cleared locally without a
    /// network call; otherwise the profile is fetched with the stored token
    /// and any fetch failure degrades to logout. Every branch resolves the
    /// loading flag exactly once.
    pub async fn reconcile_on_startup(self) {
        let stored = match plan_reconcile(storage::read_token(), token::now_secs()) {
            ReconcilePlan::ResolveIdle => {
                self.state.update(SessionState::resolve_loading);
                return;
            }
            ReconcilePlan::Discard => {
                self.logout();
                return;
            }
            ReconcilePlan::FetchProfile(stored) => stored,
        };
        let fetched = api::fetch_profile(&stored).await;
        // A logout or fresh login while the fetch was in flight wins over
        // the stale result.
        if !should_apply_reconcile(storage::read_token().as_deref(), &stored) {
            self.state.update(SessionState::resolve_loading);
            return;
        }
        match fetched {
            Ok(user) => {
                self.state.update(|s| s.apply_reconciled(stored, user));
            }
            Err(err) => {
                leptos::logging::warn!("session reconcile failed: {err}");
                self.logout();
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
