//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages assume the route guard already admitted the user.

pub mod dashboards;
pub mod login;
pub mod pending_internships;
pub mod pending_invitations;
pub mod profile;
pub mod reports;
pub mod user_management;
