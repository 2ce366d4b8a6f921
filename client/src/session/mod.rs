//! Client-side session handling and route authorization.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access token issued by the REST API is a self-contained signed token.
//! This module decodes its claims without verifying the signature and uses
//! them only to pick which screen to render. Every API request is still
//! authorized by the server, which answers `401` independently.
//!
//! DESIGN
//! ======
//! Storage and time are injected (`SessionStore`, `Clock`) so the gate can be
//! exercised without a browser.

pub mod claims;
pub mod clock;
pub mod gate;
pub mod role;
pub mod routes;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use claims::{Claims, ClaimsError, decode_claims};
pub use clock::{Clock, FixedClock, SystemClock};
pub use gate::{Decision, Denial, authorize, chrome_visible, current_claims, logout, valid_claims};
pub use role::Role;
pub use routes::{ENTRY_POINT, NavItem, Page, sidebar};
pub use store::{BrowserSessionStore, MemorySessionStore, SessionStore};
