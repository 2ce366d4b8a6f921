//! Unverified claims reader for the access token.
//!
//! The token is `base64url(header).base64url(payload).signature`. Only the
//! payload is decoded; the signature is never checked here.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use super::role::Role;

/// Errors produced while decoding a token's claims.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimsError {
    /// The token is not three dot-separated segments.
    #[error("expected 3 token segments, found {0}")]
    SegmentCount(usize),

    /// The payload segment is not base64url.
    #[error("token payload is not base64url: {0}")]
    Base64(String),

    /// The payload is not a JSON object with a numeric `exp`.
    #[error("token payload is not a claims object: {0}")]
    Payload(String),
}

/// Claims the client reads from the access token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claims {
    /// `None` when `role_name` is missing or not a known role.
    pub role: Option<Role>,
    /// `username` claim, shown in the navbar greeting.
    pub display_name: Option<String>,
    /// `exp` claim, seconds since the Unix epoch.
    pub expires_at: i64,
}

impl Claims {
    #[must_use]
    pub fn expires_at_millis(&self) -> i64 {
        self.expires_at.saturating_mul(1000)
    }

    /// A session is live only while `exp * 1000 > now`.
    #[must_use]
    pub fn is_expired(&self, now_millis: i64) -> bool {
        self.expires_at_millis() <= now_millis
    }
}

#[derive(Deserialize)]
struct WireClaims {
    #[serde(default)]
    role_name: Option<String>,
    #[serde(default)]
    username: Option<String>,
    exp: serde_json::Number,
}

/// Decode the payload of `token` into [`Claims`].
///
/// # Errors
///
/// Returns [`ClaimsError`] for any structurally malformed token.
pub fn decode_claims(token: &str) -> Result<Claims, ClaimsError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(ClaimsError::SegmentCount(segments.len()));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ClaimsError::Base64(e.to_string()))?;
    let wire: WireClaims = serde_json::from_slice(&bytes).map_err(|e| ClaimsError::Payload(e.to_string()))?;

    let expires_at = exp_seconds(&wire.exp)
        .ok_or_else(|| ClaimsError::Payload(format!("exp is not a finite number: {}", wire.exp)))?;

    Ok(Claims {
        role: wire.role_name.as_deref().and_then(Role::parse),
        display_name: wire.username.filter(|name| !name.trim().is_empty()),
        expires_at,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn exp_seconds(exp: &serde_json::Number) -> Option<i64> {
    exp.as_i64()
        .or_else(|| exp.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
}
