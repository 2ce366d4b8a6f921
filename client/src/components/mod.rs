//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guarding and navigation chrome sit above every page; the remaining
//! components are dialogs and banners shared by several pages.

pub mod add_internship_modal;
pub mod alert;
pub mod confirm_modal;
pub mod invite_teacher_modal;
pub mod navbar;
pub mod password_modal;
pub mod protected_route;
pub mod student_internships;
pub mod user_dialogs;
pub mod user_stats;
