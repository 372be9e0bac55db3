//! # jobboard-client
//!
//! Leptos + WASM client for the job-board platform, backed by a separate
//! REST API. The session subsystem (`state::session`, `util::token`,
//! `util::storage`, `util::guard`) owns authentication state and route
//! protection; pages and components read from it and render.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/console logging and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
