//! Durable single-slot token persistence over browser localStorage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager is the only caller: it saves on login/register,
//! clears on logout, and reads during startup reconciliation. No validation
//! happens here; this module is storage only. SSR paths no-op so server
//! rendering stays deterministic.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";

/// Read the persisted bearer token, if any.
///
/// A missing key is an ordinary absent result, never an error.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer token, replacing any previous value.
pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted bearer token. Safe to call when none is stored.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
