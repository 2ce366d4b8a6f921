//! Token builders shared by session tests.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

pub(crate) const NOW_MS: i64 = 1_750_000_000_000;
pub(crate) const NOW_SECS: i64 = NOW_MS / 1000;

/// Unsigned token with the given JSON payload.
pub(crate) fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.c2lnbmF0dXJl")
}

/// Token for `role` expiring `offset_secs` from [`NOW_SECS`].
pub(crate) fn token_for(role: &str, offset_secs: i64) -> String {
    token_with_payload(&serde_json::json!({
        "role_name": role,
        "username": "jdoe",
        "exp": NOW_SECS + offset_secs,
    }))
}
