//! Client-side form checks run before a request is sent.
//!
//! Each check returns the first message to show, in field order.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use super::files::PickedFile;
use crate::net::types::{NewInternship, PasswordChange, PasswordReset, UserDraft};

pub const MIN_PASSWORD_LEN: usize = 8;

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Login submits only with both fields filled.
#[must_use]
pub fn can_submit_login(username: &str, password: &str, busy: bool) -> bool {
    !busy && !blank(username) && !password.is_empty()
}

/// # Errors
///
/// Returns the first problem with the draft or the missing document.
pub fn check_internship(draft: &NewInternship, document: Option<&PickedFile>) -> Result<(), &'static str> {
    if blank(&draft.title) {
        return Err("Title is required");
    }
    if blank(&draft.company_name) {
        return Err("Company name is required");
    }
    if draft.start_date.is_empty() || draft.end_date.is_empty() {
        return Err("Both start and end dates are required");
    }
    // ISO dates from <input type="date"> order lexicographically.
    if draft.start_date >= draft.end_date {
        return Err("End date must be after start date");
    }
    if blank(&draft.description) {
        return Err("Description is required");
    }
    if document.is_none() {
        return Err("Cahier de charges document is required");
    }
    Ok(())
}

/// # Errors
///
/// Returns a message when no teacher is selected.
pub fn check_invitation(teacher: Option<i64>) -> Result<i64, &'static str> {
    teacher.ok_or("Please select a teacher")
}

/// # Errors
///
/// Returns the first problem with the change request.
pub fn check_password_change(change: &PasswordChange) -> Result<(), &'static str> {
    if change.old_password.is_empty() || change.new_password.is_empty() || change.confirm_password.is_empty() {
        return Err("All fields are required");
    }
    if change.new_password != change.confirm_password {
        return Err("New passwords do not match");
    }
    if change.new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters long");
    }
    Ok(())
}

/// # Errors
///
/// Returns the first problem with a new account.
pub fn check_new_user(draft: &UserDraft) -> Result<(), &'static str> {
    if blank(&draft.username) {
        return Err("Username is required");
    }
    if blank(&draft.email) {
        return Err("Email is required");
    }
    if draft.password.is_empty() {
        return Err("Password is required");
    }
    if draft.password != draft.password_confirm {
        return Err("Passwords do not match");
    }
    if draft.role.is_empty() {
        return Err("Role is required");
    }
    Ok(())
}

/// # Errors
///
/// Returns the first problem with an edited account.
pub fn check_user_update(draft: &UserDraft) -> Result<(), &'static str> {
    if blank(&draft.email) {
        return Err("Email is required");
    }
    if draft.role.is_empty() {
        return Err("Role is required");
    }
    Ok(())
}

/// # Errors
///
/// Returns the first problem with an administrator password reset.
pub fn check_password_reset(reset: &PasswordReset) -> Result<(), &'static str> {
    if reset.new_password.is_empty() || reset.new_password_confirm.is_empty() {
        return Err("All fields are required");
    }
    if reset.new_password != reset.new_password_confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}
