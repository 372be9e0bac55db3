use super::*;

// =============================================================
// Helpers
// =============================================================

fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\",\"typ\":\"JWT\"}");
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap());
    format!("{header}.{body}.signature")
}

// =============================================================
// decode_exp
// =============================================================

#[test]
fn decode_exp_reads_integer_claim() {
    let token = token_with_payload(&serde_json::json!({ "sub": "alice", "exp": 1_700_000_000 }));
    assert_eq!(decode_exp(&token), Ok(1_700_000_000));
}

#[test]
fn decode_exp_accepts_fractional_claim() {
    let token = token_with_payload(&serde_json::json!({ "exp": 1_700_000_000.5 }));
    assert_eq!(decode_exp(&token), Ok(1_700_000_000));
}

#[test]
fn decode_exp_rejects_wrong_segment_count() {
    assert_eq!(decode_exp("not-a-jwt"), Err(TokenError::Malformed));
    assert_eq!(decode_exp("one.two"), Err(TokenError::Malformed));
    assert_eq!(decode_exp("a.b.c.d"), Err(TokenError::Malformed));
}

#[test]
fn decode_exp_rejects_bad_base64_payload() {
    assert_eq!(decode_exp("head.$$$$.sig"), Err(TokenError::Payload));
}

#[test]
fn decode_exp_rejects_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode(b"not json");
    assert_eq!(decode_exp(&format!("head.{payload}.sig")), Err(TokenError::Payload));
}

#[test]
fn decode_exp_requires_numeric_exp() {
    let token = token_with_payload(&serde_json::json!({ "sub": "alice" }));
    assert_eq!(decode_exp(&token), Err(TokenError::MissingExp));
    let token = token_with_payload(&serde_json::json!({ "exp": "soon" }));
    assert_eq!(decode_exp(&token), Err(TokenError::MissingExp));
}

// =============================================================
// is_expired
// =============================================================

#[test]
fn is_expired_false_before_expiry() {
    let token = token_with_payload(&serde_json::json!({ "exp": 2_000 }));
    assert!(!is_expired(&token, 1_999));
}

#[test]
fn is_expired_true_at_and_after_expiry() {
    let token = token_with_payload(&serde_json::json!({ "exp": 2_000 }));
    assert!(is_expired(&token, 2_000));
    assert!(is_expired(&token, 2_001));
}

#[test]
fn is_expired_true_for_undecodable_token() {
    assert!(is_expired("garbage", 0));
}
