//! Session authorization gate.
//!
//! ARCHITECTURE
//! ============
//! `authorize` runs on route entry and may evict the stored credential when it
//! is malformed or expired. `chrome_visible` and `current_claims` run on every
//! render and only read. Every refusal folds into a redirect; the reason is
//! logged, never shown.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use super::claims::{Claims, ClaimsError, decode_claims};
use super::clock::Clock;
use super::role::Role;
use super::routes::{ENTRY_POINT, is_entry_point};
use super::store::SessionStore;

/// Outcome of a route authorization check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(&'static str),
}

/// Why a session was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Denial {
    #[error("no credential stored")]
    NoCredential,

    #[error("malformed credential: {0}")]
    MalformedCredential(#[from] ClaimsError),

    #[error("credential expired at {expires_at}")]
    ExpiredCredential { expires_at: i64 },

    /// `role` is `None` when the claim carried no recognized role.
    #[error("role {role:?} may not open this route")]
    UnauthorizedRole { role: Option<Role> },
}

impl Denial {
    /// Whether whatever is stored is unusable and must be dropped. A missing
    /// access token also drops a leftover refresh token.
    #[must_use]
    pub fn evicts_session(&self) -> bool {
        !matches!(self, Self::UnauthorizedRole { .. })
    }

    #[must_use]
    pub fn redirect_target(&self) -> &'static str {
        match self {
            Self::UnauthorizedRole { role: Some(role) } => role.home().path(),
            _ => ENTRY_POINT,
        }
    }
}

/// Decode and expiry-check the stored credential without touching the store.
///
/// # Errors
///
/// Returns the [`Denial`] describing why no live session exists.
pub fn valid_claims<S, C>(store: &S, clock: &C) -> Result<Claims, Denial>
where
    S: SessionStore + ?Sized,
    C: Clock + ?Sized,
{
    let token = store.get().ok_or(Denial::NoCredential)?;
    let claims = decode_claims(&token)?;
    if claims.is_expired(clock.now_millis()) {
        return Err(Denial::ExpiredCredential { expires_at: claims.expires_at });
    }
    Ok(claims)
}

fn check<S, C>(store: &S, clock: &C, required: &[Role]) -> Result<Claims, Denial>
where
    S: SessionStore + ?Sized,
    C: Clock + ?Sized,
{
    let claims = valid_claims(store, clock)?;
    match claims.role {
        Some(role) if required.contains(&role) => Ok(claims),
        role => Err(Denial::UnauthorizedRole { role }),
    }
}

/// Decide whether the current session may open a route requiring `required`.
///
/// A missing, malformed or expired credential empties `store` before the
/// redirect is returned.
pub fn authorize<S, C>(store: &S, clock: &C, required: &[Role]) -> Decision
where
    S: SessionStore + ?Sized,
    C: Clock + ?Sized,
{
    match check(store, clock, required) {
        Ok(_) => Decision::Allow,
        Err(denial) => {
            if denial.evicts_session() {
                store.clear();
                leptos::logging::warn!("session evicted: {denial}");
            } else {
                leptos::logging::log!("route refused: {denial}");
            }
            Decision::Redirect(denial.redirect_target())
        }
    }
}

/// Whether the navigation shell should render on `path`. Read-only.
pub fn chrome_visible<S, C>(path: &str, store: &S, clock: &C) -> bool
where
    S: SessionStore + ?Sized,
    C: Clock + ?Sized,
{
    !is_entry_point(path) && valid_claims(store, clock).is_ok()
}

/// Claims of the live session, if any. Read-only.
pub fn current_claims<S, C>(store: &S, clock: &C) -> Option<Claims>
where
    S: SessionStore + ?Sized,
    C: Clock + ?Sized,
{
    match valid_claims(store, clock) {
        Ok(claims) => Some(claims),
        Err(_) => None,
    }
}

/// End the session by dropping both stored tokens.
pub fn logout<S>(store: &S)
where
    S: SessionStore + ?Sized,
{
    store.clear();
}
