//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `jobs`) so individual components can
//! depend on small focused models. The session module is the only one with
//! a writer type; everything else reads derived flags.

pub mod jobs;
pub mod session;
