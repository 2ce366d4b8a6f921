//! Credential store: the access and refresh tokens written at login.
//!
//! `clear` removes exactly the keys `set` writes, so logout and eviction
//! leave no stale credential behind and leave unrelated storage alone.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Process-wide credential storage.
///
/// Empty strings read back as absent.
pub trait SessionStore {
    /// Current access token.
    fn get(&self) -> Option<String>;
    /// Refresh token stored next to the access token. Never exchanged.
    fn refresh_token(&self) -> Option<String>;
    fn set(&self, access: &str, refresh: &str);
    fn clear(&self);
}

/// `localStorage`-backed store. Reads as empty outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            leptos::logging::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn read_key(key: &str) -> Option<String> {
    match local_storage()?.get_item(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            leptos::logging::warn!("failed to read {key}: {e:?}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn write_key(storage: &web_sys::Storage, key: &str, value: &str) {
    if let Err(e) = storage.set_item(key, value) {
        leptos::logging::warn!("failed to write {key}: {e:?}");
    }
}

#[cfg(feature = "hydrate")]
fn remove_key(storage: &web_sys::Storage, key: &str) {
    if let Err(e) = storage.remove_item(key) {
        leptos::logging::warn!("failed to remove {key}: {e:?}");
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            read_key(ACCESS_TOKEN_KEY)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn refresh_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            read_key(REFRESH_TOKEN_KEY)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn set(&self, access: &str, refresh: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                write_key(&storage, ACCESS_TOKEN_KEY, access);
                write_key(&storage, REFRESH_TOKEN_KEY, refresh);
            }
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                remove_key(&storage, ACCESS_TOKEN_KEY);
                remove_key(&storage, REFRESH_TOKEN_KEY);
            }
        }
    }
}

/// In-memory store for tests and non-browser renders.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    access: RefCell<Option<String>>,
    refresh: RefCell<Option<String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with an access token and no refresh token.
    #[must_use]
    pub fn with_access(token: &str) -> Self {
        Self { access: RefCell::new(Some(token.to_owned())), refresh: RefCell::new(None) }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access.borrow().is_none() && self.refresh.borrow().is_none()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.access.borrow().clone().filter(|t| !t.is_empty())
    }

    fn refresh_token(&self) -> Option<String> {
        self.refresh.borrow().clone().filter(|t| !t.is_empty())
    }

    fn set(&self, access: &str, refresh: &str) {
        *self.access.borrow_mut() = Some(access.to_owned());
        *self.refresh.borrow_mut() = Some(refresh.to_owned());
    }

    fn clear(&self) {
        self.access.borrow_mut().take();
        self.refresh.borrow_mut().take();
    }
}
