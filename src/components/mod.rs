//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read session state from the Leptos context provider; only the
//! header triggers a session action (logout).

pub mod header;
pub mod job_card;
pub mod route_guard;
