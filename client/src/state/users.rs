//! User-management page state.
//!
//! DESIGN
//! ======
//! At most one dialog is open at a time; `UserDialog` carries the row it
//! acts on. Filter changes refetch the list, so the filter fields mirror
//! `net::api::UserQuery` directly.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::banner::Banner;
use crate::net::api::UserQuery;
use crate::net::types::{PasswordReset, RoleOption, UserDraft, UserRecord, UserStats};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserDialog {
    Create,
    Edit(UserRecord),
    Delete(UserRecord),
    ResetPassword(UserRecord),
    Detail(UserRecord),
}

impl UserDialog {
    #[must_use]
    pub fn target(&self) -> Option<&UserRecord> {
        match self {
            Self::Create => None,
            Self::Edit(user) | Self::Delete(user) | Self::ResetPassword(user) | Self::Detail(user) => Some(user),
        }
    }
}

/// Value of the status `<select>` as a query flag.
#[must_use]
pub fn parse_status_filter(value: &str) -> Option<bool> {
    match value {
        "active" => Some(true),
        "inactive" => Some(false),
        _ => None,
    }
}

#[must_use]
pub fn status_filter_value(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "active",
        Some(false) => "inactive",
        None => "",
    }
}

#[derive(Clone, Debug)]
pub struct UserManagementState {
    pub users: Vec<UserRecord>,
    pub roles: Vec<RoleOption>,
    pub stats: Option<UserStats>,
    pub query: UserQuery,
    pub loading: bool,
    pub error: Option<String>,
    pub banner: Banner,
    pub busy: bool,
    pub dialog: Option<UserDialog>,
    pub draft: UserDraft,
    pub reset: PasswordReset,
}

impl Default for UserManagementState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            roles: Vec::new(),
            stats: None,
            query: UserQuery::default(),
            loading: true,
            error: None,
            banner: Banner::default(),
            busy: false,
            dialog: None,
            draft: UserDraft::default(),
            reset: PasswordReset::default(),
        }
    }
}

impl UserManagementState {
    pub fn loaded(&mut self, result: Result<Vec<UserRecord>, String>) {
        self.loading = false;
        match result {
            Ok(users) => self.users = users,
            Err(message) => self.error = Some(message),
        }
    }

    /// Open `dialog`, resetting the form it uses.
    pub fn open(&mut self, dialog: UserDialog) {
        self.error = None;
        self.draft = match &dialog {
            UserDialog::Edit(user) => UserDraft::from_record(user),
            _ => UserDraft::default(),
        };
        self.reset = PasswordReset::default();
        self.dialog = Some(dialog);
    }

    pub fn close(&mut self) {
        self.dialog = None;
        self.draft = UserDraft::default();
        self.reset = PasswordReset::default();
    }

    /// Claim the action slot. `false` while another action runs.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        self.banner.clear();
        true
    }

    /// Action finished; close the dialog and announce `message`.
    pub fn succeeded(&mut self, message: String) -> u64 {
        self.busy = false;
        self.close();
        self.banner.show(message)
    }

    pub fn failed(&mut self, message: String) {
        self.busy = false;
        self.error = Some(message);
    }

    /// Role name for a role id, used by the detail dialog.
    #[must_use]
    pub fn role_name(&self, id: i64) -> Option<&str> {
        self.roles.iter().find(|role| role.id == id).map(|role| role.name.as_str())
    }
}
