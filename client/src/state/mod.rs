//! Page state held in `RwSignal`s.
//!
//! DESIGN
//! ======
//! Plain structs with pure transition methods; pages own the signals and the
//! async calls, so every transition here is testable without a browser.

pub mod banner;
pub mod internships;
pub mod queue;
pub mod reports;
pub mod users;
