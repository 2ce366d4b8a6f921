//! REST client for the internship backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! access token read from the session store at call time.
//! Server-side (SSR): stubs returning `ApiError::Transport`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; see `net::error` for how
//! statuses are classified. Callers decide whether to surface or evict.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    ApiMessage, Internship, Invitation, InvitationStatus, LoginRequest, NewInternship,
    NewInvitation, PasswordChange, PasswordReset, ProfileUpdate, Rejection, Report, RoleOption, Teacher,
    TokenPair, UserDraft, UserProfile, UserRecord, UserStats,
};
use crate::util::files::PickedFile;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Backend origin, fixed at compile time by `INTERNFLOW_API_URL`.
#[must_use]
pub fn base_url() -> &'static str {
    option_env!("INTERNFLOW_API_URL").unwrap_or(DEFAULT_API_URL)
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn endpoint(path: &str) -> String {
    join(base_url(), path)
}

/// Absolute URL for a media path the backend returned relative to its origin.
#[must_use]
pub fn media_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_owned()
    } else {
        endpoint(path)
    }
}

/// Filters accepted by `administrator/users/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub search: String,
    /// Role id; empty for all roles.
    pub role: String,
    pub is_active: Option<bool>,
}

impl UserQuery {
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.role.is_empty() {
            pairs.push(("role", self.role.clone()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_owned()));
        }
        if let Some(active) = self.is_active {
            pairs.push(("is_active", active.to_string()));
        }
        pairs
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn internship_path(id: i64) -> String {
    format!("internship/{id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn respond_path(invitation_id: i64) -> String {
    format!("internship/invitation/{invitation_id}/respond/")
}

#[cfg(any(test, feature = "hydrate"))]
fn approve_path(internship_id: i64) -> String {
    format!("internship/admin/{internship_id}/approve/")
}

#[cfg(any(test, feature = "hydrate"))]
fn reject_path(internship_id: i64) -> String {
    format!("internship/admin/{internship_id}/reject/")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_path(user_id: i64, action: &str) -> String {
    if action.is_empty() {
        format!("administrator/users/{user_id}/")
    } else {
        format!("administrator/users/{user_id}/{action}/")
    }
}

#[cfg(feature = "hydrate")]
mod transport {
    //! Request plumbing shared by every endpoint.

    use gloo_net::http::{Request, RequestBuilder};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::super::error::{ApiError, classify_failure, decode_success};
    use crate::session::{BrowserSessionStore, SessionStore};
    use crate::util::files::PickedFile;

    fn transport_error(e: impl std::fmt::Display) -> ApiError {
        ApiError::Transport(e.to_string())
    }

    /// Attach the bearer token, if one is stored.
    pub(super) fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match BrowserSessionStore.get() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    pub(super) async fn send<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
        let url = request.url();
        let method = request.method();
        let resp = request.send().await.map_err(|e| {
            leptos::logging::warn!("{method:?} {url} failed: {e}");
            transport_error(e)
        })?;
        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;
        if (200..300).contains(&status) {
            decode_success(&body)
        } else {
            leptos::logging::warn!("{method:?} {url} -> {status}");
            Err(classify_failure(status, &body))
        }
    }

    pub(super) async fn send_empty<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        send(authorized(builder).build().map_err(transport_error)?).await
    }

    pub(super) async fn send_json<B, T>(builder: RequestBuilder, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        send(authorized(builder).json(body).map_err(transport_error)?).await
    }

    /// Multipart body from text fields and at most one attached file.
    pub(super) async fn send_form<T: DeserializeOwned>(
        builder: RequestBuilder,
        fields: &[(&str, String)],
        file: Option<(&str, &PickedFile)>,
    ) -> Result<T, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| transport_error(format!("{e:?}")))?;
        for (name, value) in fields {
            form.append_with_str(name, value)
                .map_err(|e| transport_error(format!("{e:?}")))?;
        }
        if let Some((name, picked)) = file {
            form.append_with_blob_and_filename(name, &picked.file, &picked.name)
                .map_err(|e| transport_error(format!("{e:?}")))?;
        }
        send(authorized(builder).body(form).map_err(transport_error)?).await
    }
}

#[cfg(feature = "hydrate")]
use gloo_net::http::Request;

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("not available on server".to_owned()))
}

/// Expands to the hydrate body or the SSR stub.
macro_rules! browser_only {
    ($body:block) => {{
        #[cfg(feature = "hydrate")]
        $body
        #[cfg(not(feature = "hydrate"))]
        {
            unavailable()
        }
    }};
}

// =============================================================================
// AUTH / PROFILE
// =============================================================================

/// Exchange credentials for a token pair via `POST auth/login/`.
///
/// # Errors
///
/// Any [`ApiError`]; bad credentials arrive as `Unauthorized`, `Forbidden` or `Validation`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn login(credentials: &LoginRequest) -> Result<TokenPair, ApiError> {
    browser_only!({
        let request = Request::post(&endpoint("auth/login/"))
            .json(credentials)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        transport::send(request).await
    })
}

/// # Errors
///
/// Any [`ApiError`].
pub async fn current_user() -> Result<UserProfile, ApiError> {
    browser_only!({ transport::send_empty(Request::get(&endpoint("auth/get-user/"))).await })
}

/// Update the signed-in user's profile, optionally replacing the picture.
///
/// # Errors
///
/// Any [`ApiError`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn update_profile(update: &ProfileUpdate, picture: Option<&PickedFile>) -> Result<UserProfile, ApiError> {
    browser_only!({
        let file = picture.map(|p| ("profile_picture", p));
        transport::send_form(Request::put(&endpoint("auth/profile/update/")), &update.form_fields(), file).await
    })
}

/// # Errors
///
/// Any [`ApiError`]; a wrong current password arrives as `Validation`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn change_password(change: &PasswordChange) -> Result<ApiMessage, ApiError> {
    browser_only!({ transport::send_json(Request::post(&endpoint("auth/password/change/")), change).await })
}

// =============================================================================
// REPORTS
// =============================================================================

/// # Errors
///
/// Any [`ApiError`].
pub async fn reports() -> Result<Vec<Report>, ApiError> {
    browser_only!({ transport::send_empty(Request::get(&endpoint("student/reports/"))).await })
}

// =============================================================================
// INTERNSHIPS
// =============================================================================

/// Submit a new internship with its specification document.
///
/// # Errors
///
/// Any [`ApiError`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn create_internship(draft: &NewInternship, document: &PickedFile) -> Result<Internship, ApiError> {
    browser_only!({
        transport::send_form(
            Request::post(&endpoint("internship/create/")),
            &draft.form_fields(),
            Some((NewInternship::DOCUMENT_FIELD, document)),
        )
        .await
    })
}

/// # Errors
///
/// Any [`ApiError`].
pub async fn my_internships() -> Result<Vec<Internship>, ApiError> {
    browser_only!({ transport::send_empty(Request::get(&endpoint("internship/my-internships/"))).await })
}

/// # Errors
///
/// Any [`ApiError`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn internship(id: i64) -> Result<Internship, ApiError> {
    browser_only!({ transport::send_empty(Request::get(&endpoint(&internship_path(id)))).await })
}

/// # Errors
///
/// Any [`ApiError`].
pub async fn teachers() -> Result<Vec<Teacher>, ApiError> {
    browser_only!({ transport::send_empty(Request::get(&endpoint("internship/teachers/"))).await })
}

/// # Errors
///
/// Any [`ApiError`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn invite_teacher(invitation: &NewInvitation) -> Result<ApiMessage, ApiError> {
    browser_only!({ transport::send_json(Request::post(&endpoint("internship/invite/")), invitation).await })
}

/// Invitations sent by the signed-in student.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn my_invitations() -> Result<Vec<Invitation>, ApiError> {
    browser_only!({ transport::send_empty(Request::get(&endpoint("internship/invitations/"))).await })
}

/// Invitations addressed to the signed-in teacher.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn teacher_invitations() -> Result<Vec<Invitation>, ApiError> {
    browser_only!({ transport::send_empty(Request::get(&endpoint("internship/teacher/invitations/"))).await })
}

/// Accept or decline an invitation.
///
/// # Errors
///
/// Any [`ApiError`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn respond_to_invitation(invitation_id: i64, status: InvitationStatus) -> Result<ApiMessage, ApiError> {
    browser_only!({
        let body = super::types::InvitationResponse { status };
        transport::send_json(Request::patch(&endpoint(&respond_path(invitation_id))), &body).await
    })
}

/// # Errors
///
/// Any [`ApiError`].
pub async fn pending_internships() -> Result<Vec<Internship>, ApiError> {
    browser_only!({ transport::send_empty(Request::get(&endpoint("internship/admin/pending/"))).await })
}

/// # Errors
///
/// Any [`ApiError`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn approve_internship(internship_id: i64) -> Result<ApiMessage, ApiError> {
    browser_only!({
        let body = serde_json::json!({});
        transport::send_json(Request::patch(&endpoint(&approve_path(internship_id))), &body).await
    })
}

/// Reject with an optional reason; an empty reason is sent as `""`.
///
/// # Errors
///
/// Any [`ApiError`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn reject_internship(internship_id: i64, rejection: &Rejection) -> Result<ApiMessage, ApiError> {
    browser_only!({ transport::send_json(Request::patch(&endpoint(&reject_path(internship_id))), rejection).await })
}

// =============================================================================
// ADMINISTRATION
// =============================================================================

/// # Errors
///
/// Any [`ApiError`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn users(query: &UserQuery) -> Result<Vec<UserRecord>, ApiError> {
    browser_only!({
        let pairs = query.pairs();
        let builder = Request::get(&endpoint("administrator/users/"))
            .query(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        transport::send_empty(builder).await
    })
}

/// # Errors
///
/// Any [`ApiError`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn user(user_id: i64) -> Result<UserRecord, ApiError> {
    browser_only!({ transport::send_empty(Request::get(&endpoint(&user_path(user_id, "")))).await })
}

/// # Errors
///
/// Any [`ApiError`]; field problems arrive as `Validation`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn create_user(draft: &UserDraft, picture: Option<&PickedFile>) -> Result<ApiMessage, ApiError> {
    browser_only!({
        let file = picture.map(|p| (UserDraft::PICTURE_FIELD, p));
        transport::send_form(Request::post(&endpoint("administrator/users/create/")), &draft.create_fields(), file)
            .await
    })
}

/// # Errors
///
/// Any [`ApiError`]; field problems arrive as `Validation`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn update_user(user_id: i64, draft: &UserDraft, picture: Option<&PickedFile>) -> Result<ApiMessage, ApiError> {
    browser_only!({
        let file = picture.map(|p| (UserDraft::PICTURE_FIELD, p));
        transport::send_form(Request::patch(&endpoint(&user_path(user_id, "update"))), &draft.update_fields(), file)
            .await
    })
}

/// # Errors
///
/// Any [`ApiError`].
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn delete_user(user_id: i64) -> Result<ApiMessage, ApiError> {
    browser_only!({ transport::send_empty(Request::delete(&endpoint(&user_path(user_id, "delete")))).await })
}

/// # Errors
///
/// Any [`ApiError`]; field problems arrive as `Validation`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub async fn reset_user_password(user_id: i64, reset: &PasswordReset) -> Result<ApiMessage, ApiError> {
    browser_only!({
        transport::send_json(Request::post(&endpoint(&user_path(user_id, "reset-password"))), reset).await
    })
}

/// # Errors
///
/// Any [`ApiError`].
pub async fn roles() -> Result<Vec<RoleOption>, ApiError> {
    browser_only!({ transport::send_empty(Request::get(&endpoint("administrator/roles/"))).await })
}

/// # Errors
///
/// Any [`ApiError`].
pub async fn user_stats() -> Result<UserStats, ApiError> {
    browser_only!({ transport::send_empty(Request::get(&endpoint("administrator/stats/"))).await })
}
