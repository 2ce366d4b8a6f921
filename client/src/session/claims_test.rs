use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use crate::session::test_support::{NOW_MS, NOW_SECS, token_for, token_with_payload};

#[test]
fn decodes_role_name_and_expiry() {
    let claims = decode_claims(&token_for("Teacher", 3600)).unwrap();
    assert_eq!(claims.role, Some(Role::Teacher));
    assert_eq!(claims.display_name.as_deref(), Some("jdoe"));
    assert_eq!(claims.expires_at, NOW_SECS + 3600);
}

#[test]
fn unknown_role_decodes_without_role() {
    let claims = decode_claims(&token_for("Janitor", 3600)).unwrap();
    assert_eq!(claims.role, None);
}

#[test]
fn missing_role_and_username_are_optional() {
    let token = token_with_payload(&serde_json::json!({ "exp": NOW_SECS }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.role, None);
    assert_eq!(claims.display_name, None);
}

#[test]
fn blank_username_is_dropped() {
    let token = token_with_payload(&serde_json::json!({ "exp": NOW_SECS, "username": "  " }));
    assert_eq!(decode_claims(&token).unwrap().display_name, None);
}

#[test]
fn fractional_exp_is_truncated() {
    let token = token_with_payload(&serde_json::json!({ "exp": 1_700_000_000.75 }));
    assert_eq!(decode_claims(&token).unwrap().expires_at, 1_700_000_000);
}

#[test]
fn padded_payload_is_accepted() {
    let token = token_for("Student", 10);
    let mut parts: Vec<String> = token.split('.').map(str::to_owned).collect();
    parts[1].push_str("==");
    let padded = parts.join(".");
    assert_eq!(decode_claims(&padded).unwrap().role, Some(Role::Student));
}

#[test]
fn plain_string_is_rejected() {
    assert_eq!(decode_claims("not-a-jwt"), Err(ClaimsError::SegmentCount(1)));
}

#[test]
fn empty_string_is_rejected() {
    assert!(matches!(decode_claims(""), Err(ClaimsError::SegmentCount(1))));
}

#[test]
fn too_many_segments_is_rejected() {
    assert_eq!(decode_claims("a.b.c.d"), Err(ClaimsError::SegmentCount(4)));
}

#[test]
fn non_base64_payload_is_rejected() {
    assert!(matches!(decode_claims("aaa.!!!.ccc"), Err(ClaimsError::Base64(_))));
}

#[test]
fn non_json_payload_is_rejected() {
    let payload = URL_SAFE_NO_PAD.encode("hello");
    let token = format!("h.{payload}.s");
    assert!(matches!(decode_claims(&token), Err(ClaimsError::Payload(_))));
}

#[test]
fn missing_exp_is_rejected() {
    let token = token_with_payload(&serde_json::json!({ "role_name": "Student" }));
    assert!(matches!(decode_claims(&token), Err(ClaimsError::Payload(_))));
}

#[test]
fn string_exp_is_rejected() {
    let token = token_with_payload(&serde_json::json!({ "role_name": "Student", "exp": "soon" }));
    assert!(matches!(decode_claims(&token), Err(ClaimsError::Payload(_))));
}

#[test]
fn expiry_boundary_is_exclusive() {
    let claims = Claims { role: None, display_name: None, expires_at: NOW_SECS };
    assert!(claims.is_expired(NOW_MS));
    assert!(!claims.is_expired(NOW_MS - 1));
}

#[test]
fn expires_at_millis_saturates() {
    let claims = Claims { role: None, display_name: None, expires_at: i64::MAX };
    assert_eq!(claims.expires_at_millis(), i64::MAX);
    assert!(!claims.is_expired(NOW_MS));
}
