//! REST adapter for the job-board API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! inert stubs, since every endpoint is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses surface as [`ApiError::Response`] with the server's
//! payload carried verbatim; transport and decode failures map to their own
//! variants. Callers turn these into displayable messages with
//! [`error_message`]; nothing in this module panics.
//!
//! The bearer token is an explicit parameter on authenticated calls. There
//! is no ambient default header; the session manager passes its current
//! token, so credential state and request capability can never diverge.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{AuthResponse, Credentials, Job, JobDraft, JobFilters, ProfileUpdate, Registration, User};

/// Failure of a single API request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Server answered with a non-2xx status; `body` is the error payload
    /// exactly as received (or `null` when the body was not JSON).
    #[error("request failed with status {status}")]
    Response { status: u16, body: serde_json::Value },
    /// Request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Response arrived but its body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Extract a displayable message from an API failure.
///
/// Prefers the server's `detail` string; field-error objects (as Django
/// validation returns) are flattened to `"field: message"` segments. When
/// the payload offers nothing usable, `fallback` is returned.
pub fn error_message(err: &ApiError, fallback: &str) -> String {
    if let ApiError::Response { body, .. } = err {
        if let Some(detail) = body.get("detail").and_then(serde_json::Value::as_str) {
            return detail.to_owned();
        }
        if let Some(flattened) = flatten_field_errors(body) {
            return flattened;
        }
    }
    fallback.to_owned()
}

fn flatten_field_errors(body: &serde_json::Value) -> Option<String> {
    let map = body.as_object()?;
    let mut parts = Vec::new();
    for (field, value) in map {
        match value {
            serde_json::Value::String(message) => parts.push(format!("{field}: {message}")),
            serde_json::Value::Array(messages) => {
                for message in messages.iter().filter_map(serde_json::Value::as_str) {
                    parts.push(format!("{field}: {message}"));
                }
            }
            _ => {}
        }
    }
    if parts.is_empty() { None } else { Some(parts.join("; ")) }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn job_save_endpoint(job_id: i64) -> String {
    format!("/api/jobs/{job_id}/save/")
}

/// Non-empty filter fields as query pairs, in a stable order.
#[cfg(any(test, feature = "hydrate"))]
fn jobs_query_pairs(filters: &JobFilters) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if !filters.search.is_empty() {
        pairs.push(("search", filters.search.clone()));
    }
    if !filters.job_type.is_empty() {
        pairs.push(("job_type", filters.job_type.clone()));
    }
    if !filters.experience_level.is_empty() {
        pairs.push(("experience_level", filters.experience_level.clone()));
    }
    if !filters.location.is_empty() {
        pairs.push(("location", filters.location.clone()));
    }
    pairs
}

#[cfg(feature = "hydrate")]
async fn parse_response<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if resp.ok() {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let body = resp
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);
        Err(ApiError::Response { status, body })
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}

/// Authenticate with username/password via `POST /api/login/`.
///
/// # Errors
///
/// Returns an [`ApiError`] carrying the rejection payload or transport
/// failure.
pub async fn login(credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/login/")
            .json(credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        server_stub()
    }
}

/// Create an account via `POST /api/register/`.
///
/// # Errors
///
/// Returns an [`ApiError`]; validation failures carry the field-error
/// payload verbatim.
pub async fn register(registration: &Registration) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/register/")
            .json(registration)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = registration;
        server_stub()
    }
}

/// Fetch the authenticated user's profile via `GET /api/profile/`.
///
/// # Errors
///
/// Returns an [`ApiError`]; an invalid or revoked token surfaces as a
/// `Response` with a 401 payload.
pub async fn fetch_profile(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/profile/")
            .header("Authorization", &bearer_value(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Update the authenticated user's profile via `PUT /api/profile/`.
///
/// # Errors
///
/// Returns an [`ApiError`]; the previous profile remains authoritative on
/// failure.
pub async fn update_profile(token: &str, update: &ProfileUpdate) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put("/api/profile/")
            .header("Authorization", &bearer_value(token))
            .json(update)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, update);
        server_stub()
    }
}

/// List active postings via `GET /api/jobs/`, applying any non-empty
/// filters. Public endpoint; no token required.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or decode fails.
pub async fn fetch_jobs(filters: &JobFilters) -> Result<Vec<Job>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/jobs/")
            .query(jobs_query_pairs(filters))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: serde_json::Value = parse_response(resp).await?;
        Ok(super::types::extract_jobs(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filters;
        server_stub()
    }
}

/// Create a posting via `POST /api/jobs/`. Employer accounts only; the
/// server enforces the role.
///
/// # Errors
///
/// Returns an [`ApiError`]; validation failures carry the field-error
/// payload verbatim.
pub async fn create_job(token: &str, draft: &JobDraft) -> Result<Job, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/jobs/")
            .header("Authorization", &bearer_value(token))
            .json(draft)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        server_stub()
    }
}

/// Toggle the saved flag on a posting via `POST /api/jobs/{id}/save/`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn toggle_save_job(token: &str, job_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&job_save_endpoint(job_id))
            .header("Authorization", &bearer_value(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            let status = resp.status();
            let body = resp
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            Err(ApiError::Response { status, body })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, job_id);
        server_stub()
    }
}
