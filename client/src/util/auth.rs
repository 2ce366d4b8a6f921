//! Shared handling for API failures that may end the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page routes request errors through `surface_error`, so a rejected
//! credential clears the store and returns to the login page the same way
//! everywhere.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::session::{BrowserSessionStore, ENTRY_POINT, SessionStore, logout};

/// What a page should do with a failed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    /// The credential was rejected; the session is over.
    SessionEnded,
    /// Show this message and stay.
    Show(String),
}

/// Classify `err`, using `fallback` when the server gave no message.
#[must_use]
pub fn failure_for(err: &ApiError, fallback: &str) -> Failure {
    if err.is_unauthorized() {
        return Failure::SessionEnded;
    }
    Failure::Show(err.user_message(fallback))
}

/// Clear `store` and leave for the login page with a full reload.
pub fn end_session<S: SessionStore + ?Sized>(store: &S) {
    logout(store);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(ENTRY_POINT) {
                leptos::logging::warn!("redirect to {ENTRY_POINT} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("session ended; next navigation lands on {ENTRY_POINT}");
    }
}

/// Report `err`: end the session on `Unauthorized`, else write the message
/// into `error`.
pub fn surface_error(err: &ApiError, fallback: &str, error: impl Fn(String)) {
    leptos::logging::warn!("request failed: {err}");
    match failure_for(err, fallback) {
        Failure::SessionEnded => end_session(&BrowserSessionStore),
        Failure::Show(message) => error(message),
    }
}

/// [`surface_error`] writing into a signal holding `Option<String>`.
pub fn surface_into(err: &ApiError, fallback: &str, error: RwSignal<Option<String>>) {
    surface_error(err, fallback, |message| error.set(Some(message)));
}

/// [`surface_error`] that keeps every field message of a validation failure.
pub fn surface_detailed(err: &ApiError, fallback: &str, error: impl Fn(String)) {
    if err.is_unauthorized() {
        surface_error(err, fallback, error);
        return;
    }
    leptos::logging::warn!("request failed: {err}");
    error(err.detailed_message(fallback));
}
