//! Job-list state for the search page.
//!
//! DESIGN
//! ======
//! Keeps fetched postings and their load/error status separate from the
//! session so browsing works identically for anonymous and authenticated
//! visitors.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use crate::net::types::Job;

/// Shared job list state backed by the REST adapter.
#[derive(Clone, Debug, Default)]
pub struct JobsState {
    pub items: Vec<Job>,
    pub loading: bool,
    pub error: Option<String>,
}

impl JobsState {
    /// Begin a fetch: mark loading and drop any stale error.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Install a fetched page of postings.
    pub fn apply_results(&mut self, items: Vec<Job>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch; previously shown postings stay visible.
    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}
