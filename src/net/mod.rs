//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema. The
//! bearer token is always an explicit parameter; no module here keeps
//! credential state.

pub mod api;
pub mod types;
