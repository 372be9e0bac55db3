//! Wire DTOs for the job-board REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field-for-field so serde
//! handles the boundary and page code never touches raw JSON. Numeric salary
//! bounds arrive as decimal strings and are kept as strings; the client only
//! displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account category attached to every user.
///
/// Role-gated routes and actions key off this tag. Tags this client does not
/// recognize deserialize to [`UserType::Unknown`], which matches no role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// Account that browses and applies to postings.
    #[default]
    JobSeeker,
    /// Account that creates and manages postings.
    Employer,
    /// Unrecognized server-side tag; grants no role.
    #[serde(other)]
    Unknown,
}

/// An authenticated user's profile as returned by `/api/profile/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login name; immutable after registration.
    pub username: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Account category gating role-specific routes.
    pub user_type: UserType,
    /// Given name; may be empty.
    #[serde(default)]
    pub first_name: String,
    /// Family name; may be empty.
    #[serde(default)]
    pub last_name: String,
    /// Contact phone number; may be empty.
    #[serde(default)]
    pub phone_number: String,
    /// Uploaded avatar URL, if any.
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// Free-form self description.
    #[serde(default)]
    pub bio: String,
    /// Employer company name; empty for job seekers.
    #[serde(default)]
    pub company_name: String,
    /// Employer company site; empty for job seekers.
    #[serde(default)]
    pub company_website: String,
    /// Free-form location string.
    #[serde(default)]
    pub location: String,
    /// Comma-separated skills list.
    #[serde(default)]
    pub skills: String,
}

impl User {
    /// Name shown in the header: first name when set, username otherwise.
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            &self.username
        } else {
            &self.first_name
        }
    }
}

/// Successful response from `/api/login/` and `/api/register/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent authenticated requests.
    pub access: String,
    /// Refresh token issued alongside; the client has no refresh flow and
    /// never persists it.
    #[serde(default)]
    pub refresh: Option<String>,
    /// Profile of the account that just authenticated.
    pub user: User,
}

/// Login request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Server rejects the registration unless this matches `password`.
    pub password2: String,
    pub user_type: UserType,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// Partial profile update for `PUT /api/profile/`.
///
/// `username` and `user_type` are server-side read-only and intentionally
/// absent here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub bio: String,
    pub company_name: String,
    pub company_website: String,
    pub location: String,
    pub skills: String,
}

impl ProfileUpdate {
    /// Pre-fill the update form from the current profile.
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone_number: user.phone_number.clone(),
            bio: user.bio.clone(),
            company_name: user.company_name.clone(),
            company_website: user.company_website.clone(),
            location: user.location.clone(),
            skills: user.skills.clone(),
        }
    }
}

/// A job posting as returned by `/api/jobs/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique posting identifier.
    pub id: i64,
    /// Posting headline.
    pub title: String,
    /// Full description text.
    pub description: String,
    /// Owning employer's user id.
    #[serde(default)]
    pub company: Option<i64>,
    /// Employer's company name; may be empty.
    #[serde(default)]
    pub company_name: String,
    /// Category label, if the posting is categorized.
    #[serde(default)]
    pub category_name: Option<String>,
    /// Employment type tag (e.g. `"full_time"`, `"remote"`).
    pub job_type: String,
    /// Seniority tag (e.g. `"entry"`, `"senior"`).
    pub experience_level: String,
    /// Free-form location string.
    pub location: String,
    /// Lower salary bound as a decimal string, if published.
    #[serde(default)]
    pub salary_min: Option<String>,
    /// Upper salary bound as a decimal string, if published.
    #[serde(default)]
    pub salary_max: Option<String>,
    /// Whether the posting is open; inactive postings are server-filtered
    /// from list responses.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Whether the application deadline has passed.
    #[serde(default)]
    pub is_expired: bool,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// ISO 8601 application deadline, if set.
    #[serde(default)]
    pub application_deadline: Option<String>,
    /// Number of applications received so far.
    #[serde(default)]
    pub applications_count: i64,
}

fn default_true() -> bool {
    true
}

/// Query parameters accepted by the jobs list endpoint.
///
/// Empty fields are omitted from the query string entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobFilters {
    /// Free-text search over title, description, and company name.
    pub search: String,
    /// Employment type tag filter.
    pub job_type: String,
    /// Seniority tag filter.
    pub experience_level: String,
    /// Location substring filter.
    pub location: String,
}

/// New posting request body for `POST /api/jobs/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub job_type: String,
    pub experience_level: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
}

/// Unwrap a jobs list response body.
///
/// The server returns either a paginated envelope `{ "results": [...] }` or a
/// bare array depending on pagination settings; accept both.
pub fn extract_jobs(body: serde_json::Value) -> Vec<Job> {
    let items = match body {
        serde_json::Value::Object(mut map) => match map.remove("results") {
            Some(serde_json::Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        serde_json::Value::Array(items) => items,
        _ => return Vec::new(),
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}
