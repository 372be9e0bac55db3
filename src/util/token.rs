//! Client-side bearer-token expiry inspection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup reconciliation decodes the persisted token's embedded expiry
//! before spending a network round-trip on it. This is advisory only: the
//! payload is read without signature verification, and authorization is
//! enforced server-side on every request.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;

/// Failure to read the expiry claim out of a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token is not a three-segment JWT.
    #[error("token is not in JWT form")]
    Malformed,
    /// Payload segment is not valid base64url or not JSON.
    #[error("token payload is undecodable")]
    Payload,
    /// Payload decoded but carries no numeric `exp` claim.
    #[error("token payload has no exp claim")]
    MissingExp,
}

/// Decode the `exp` claim (Unix seconds) from a JWT-shaped bearer token.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token does not split into three
/// segments, the payload segment fails base64url/JSON decoding, or the
/// payload has no numeric `exp`.
pub fn decode_exp(token: &str) -> Result<i64, TokenError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(TokenError::Malformed),
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Payload)?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).map_err(|_| TokenError::Payload)?;
    let exp = claims.get("exp").ok_or(TokenError::MissingExp)?;
    #[allow(clippy::cast_possible_truncation)]
    let fractional = exp.as_f64().map(|f| f as i64);
    exp.as_i64().or(fractional).ok_or(TokenError::MissingExp)
}

/// Whether a persisted token should be treated as expired at `now_secs`.
///
/// Undecodable tokens count as expired so reconciliation degrades them to a
/// logged-out session without a profile fetch.
pub fn is_expired(token: &str, now_secs: i64) -> bool {
    match decode_exp(token) {
        Ok(exp) => exp <= now_secs,
        Err(_) => true,
    }
}

/// Current wall-clock time in Unix seconds.
///
/// Reconciliation only runs in the browser; the SSR stub keeps the crate
/// compiling for server rendering and is never consulted there.
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            (js_sys::Date::now() / 1000.0) as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
