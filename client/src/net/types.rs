//! JSON payloads exchanged with the internship backend.
//!
//! DESIGN
//! ======
//! Response types are lenient: optional and defaulted fields absorb the
//! backend's sparse rows. Request types expose `form_fields` when the
//! endpoint takes multipart, so the field list stays testable without a
//! browser.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH / PROFILE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The signed-in user as returned by `auth/get-user/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    /// Media path relative to the API base.
    pub profile_picture: Option<String>,
    pub role_name: Option<String>,
}

impl UserProfile {
    /// "First Last", or the username when both names are blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }

    #[must_use]
    pub fn initials(&self) -> String {
        let first = self.first_name.trim().chars().next();
        let last = self.last_name.trim().chars().next();
        let initials: String = first.into_iter().chain(last).collect();
        if initials.is_empty() {
            self.username.chars().next().map(String::from).unwrap_or_default().to_uppercase()
        } else {
            initials.to_uppercase()
        }
    }

    /// Editable subset, pre-filled from this profile.
    #[must_use]
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone().unwrap_or_default(),
        }
    }
}

/// Multipart body for `auth/profile/update/`. The picture is appended separately.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ProfileUpdate {
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("first_name", self.first_name.clone()),
            ("last_name", self.last_name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Optional `{ "message": ... }` acknowledgement body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiMessage {
    pub message: Option<String>,
}

impl ApiMessage {
    #[must_use]
    pub fn or(&self, fallback: &str) -> String {
        self.message.clone().filter(|m| !m.trim().is_empty()).unwrap_or_else(|| fallback.to_owned())
    }
}

// =============================================================================
// INTERNSHIPS
// =============================================================================

/// Lifecycle of an internship, carried on the wire as an integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum InternshipStatus {
    PendingApproval,
    Approved,
    Rejected,
    InProgress,
    Completed,
    Unknown(i64),
}

impl From<i64> for InternshipStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::PendingApproval,
            1 => Self::Approved,
            2 => Self::Rejected,
            3 => Self::InProgress,
            4 => Self::Completed,
            other => Self::Unknown(other),
        }
    }
}

impl From<InternshipStatus> for i64 {
    fn from(status: InternshipStatus) -> Self {
        match status {
            InternshipStatus::PendingApproval => 0,
            InternshipStatus::Approved => 1,
            InternshipStatus::Rejected => 2,
            InternshipStatus::InProgress => 3,
            InternshipStatus::Completed => 4,
            InternshipStatus::Unknown(code) => code,
        }
    }
}

impl InternshipStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PendingApproval => "Pending Admin Approval",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Unknown(_) => "Unknown",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::PendingApproval => "status-pending",
            Self::Approved => "status-approved",
            Self::Rejected => "status-rejected",
            Self::InProgress => "status-progress",
            Self::Completed => "status-completed",
            Self::Unknown(_) => "status-unknown",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::PendingApproval => "Your internship is awaiting admin approval",
            Self::Approved => "Approved! You can now invite a teacher",
            Self::Rejected => "Your internship was rejected",
            Self::InProgress => "Your internship is currently in progress",
            Self::Completed => "Your internship has been completed",
            Self::Unknown(_) => "Status unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internship {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub type_display: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub status: InternshipStatus,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    /// Requirements document path relative to the API base.
    #[serde(default)]
    pub cahier_de_charges: Option<String>,
}

impl Internship {
    /// Approved internships without a supervisor may invite one.
    #[must_use]
    pub fn can_invite_teacher(&self) -> bool {
        self.status == InternshipStatus::Approved && self.teacher_id.is_none()
    }
}

/// Multipart body for `internship/create/`. The document is appended separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewInternship {
    pub title: String,
    /// Internship type code; the only one offered is `PFE`.
    pub kind: String,
    pub company_name: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Default for NewInternship {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: "PFE".to_owned(),
            company_name: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

impl NewInternship {
    /// Field name of the attached requirements document.
    pub const DOCUMENT_FIELD: &'static str = "cahier_de_charges";

    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.trim().to_owned()),
            ("type", self.kind.clone()),
            ("company_name", self.company_name.trim().to_owned()),
            ("start_date", self.start_date.clone()),
            ("end_date", self.end_date.clone()),
            ("description", self.description.trim().to_owned()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl Teacher {
    /// Case-insensitive match on name or email. An empty term matches all.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        [&self.full_name, &self.email]
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(&term))
    }
}

// =============================================================================
// INVITATIONS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewInvitation {
    pub internship: i64,
    pub teacher: i64,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Rejected,
    Other(i64),
}

impl From<i64> for InvitationStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::Pending,
            1 => Self::Accepted,
            2 => Self::Rejected,
            other => Self::Other(other),
        }
    }
}

impl From<InvitationStatus> for i64 {
    fn from(status: InvitationStatus) -> Self {
        match status {
            InvitationStatus::Pending => 0,
            InvitationStatus::Accepted => 1,
            InvitationStatus::Rejected => 2,
            InvitationStatus::Other(code) => code,
        }
    }
}

impl InvitationStatus {
    /// Badge text; unrecognized codes render as pending.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::Pending | Self::Other(_) => "Pending",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Accepted => "status-accepted",
            Self::Rejected => "status-rejected",
            Self::Pending | Self::Other(_) => "status-pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: i64,
    #[serde(default)]
    pub internship_title: String,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub message: Option<String>,
    pub status: InvitationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InvitationResponse {
    pub status: InvitationStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub reason: String,
}

// =============================================================================
// ADMINISTRATION
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    /// Role id, matching [`RoleOption::id`].
    pub role: Option<i64>,
    pub role_name: Option<String>,
    pub is_active: bool,
    pub date_joined: Option<String>,
    pub profile_picture: Option<String>,
}

impl UserRecord {
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleOption {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStats {
    pub total_users: u64,
    pub active_users: u64,
    pub inactive_users: u64,
    pub users_by_role: BTreeMap<String, u64>,
}

/// Create/edit form for an account managed by an administrator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    /// Role id as chosen in the select; empty when unset.
    pub role: String,
    pub is_active: bool,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            password_confirm: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            role: String::new(),
            is_active: true,
        }
    }
}

impl UserDraft {
    /// Field name of the optional profile picture.
    pub const PICTURE_FIELD: &'static str = "profile_picture";

    /// Pre-filled edit form. Password fields start blank.
    #[must_use]
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            role: user.role.map(|id| id.to_string()).unwrap_or_default(),
            is_active: user.is_active,
            ..Self::default()
        }
    }

    /// Fields for `administrator/users/create/`, blanks omitted.
    #[must_use]
    pub fn create_fields(&self) -> Vec<(&'static str, String)> {
        non_blank(vec![
            ("username", self.username.trim().to_owned()),
            ("email", self.email.trim().to_owned()),
            ("password", self.password.clone()),
            ("password_confirm", self.password_confirm.clone()),
            ("first_name", self.first_name.trim().to_owned()),
            ("last_name", self.last_name.trim().to_owned()),
            ("phone", self.phone.trim().to_owned()),
            ("role", self.role.clone()),
            ("is_active", self.is_active.to_string()),
        ])
    }

    /// Fields for `administrator/users/{id}/update/`. Never carries the
    /// username or any password.
    #[must_use]
    pub fn update_fields(&self) -> Vec<(&'static str, String)> {
        non_blank(vec![
            ("email", self.email.trim().to_owned()),
            ("first_name", self.first_name.trim().to_owned()),
            ("last_name", self.last_name.trim().to_owned()),
            ("phone", self.phone.trim().to_owned()),
            ("role", self.role.clone()),
            ("is_active", self.is_active.to_string()),
        ])
    }
}

fn non_blank(fields: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
    fields.into_iter().filter(|(_, value)| !value.is_empty()).collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PasswordReset {
    pub new_password: String,
    pub new_password_confirm: String,
}

// =============================================================================
// REPORTS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    /// `completed`, `pending` or `archived`; absent reads as archived.
    pub status: Option<String>,
    pub file_type: Option<String>,
    pub file_path: Option<String>,
    pub created_at: Option<String>,
}
