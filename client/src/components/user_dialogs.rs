//! Create/edit, password-reset and detail dialogs for user management.
//!
//! The dialogs only edit `UserManagementState`; the page performs the
//! requests through the `on_submit` callbacks.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::net::api::media_url;
use crate::net::types::{UserDraft, UserRecord};
use crate::state::users::UserManagementState;
use crate::util::files::{ACCOUNT_PICTURE, PickedFile, pick_into};

type DraftGet = fn(&UserDraft) -> String;
type DraftSet = fn(&mut UserDraft, String);

#[component]
pub fn UserFormModal(
    state: RwSignal<UserManagementState>,
    picture: RwSignal<Option<PickedFile>, LocalStorage>,
    /// Editing hides the username and password fields.
    editing: bool,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let busy = move || state.with(|s| s.busy);
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let picture_error = RwSignal::new(None::<String>);

    let text_field = move |name: &'static str, label: &'static str, kind: &'static str, get: DraftGet, set: DraftSet| {
        view! {
            <div class="form-group">
                <label for=name>{label}</label>
                <input
                    id=name
                    type=kind
                    prop:value=move || state.with(|s| get(&s.draft))
                    on:input=move |ev| state.update(|s| set(&mut s.draft, event_target_value(&ev)))
                />
            </div>
        }
    };

    let roles = Memo::new(move |_| state.with(|s| s.roles.clone()));
    let role_options = move || {
        roles
            .get()
            .into_iter()
            .map(|role| view! { <option value=role.id.to_string()>{role.name}</option> })
            .collect_view()
    };

    let close = move || {
        if !state.with_untracked(|s| s.busy) {
            on_close.run(());
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| close()>
            <div class="modal-content large" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{if editing { "Edit User" } else { "Create New User" }}</h2>
                    <button class="modal-close" on:click=move |_| close()>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <Alert kind=AlertKind::Error message=error/>
                <Alert kind=AlertKind::Error message=picture_error/>
                <form
                    class="user-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    {(!editing).then(|| text_field("username", "Username *", "text", |d| d.username.clone(), |d, v| d.username = v))}
                    {text_field("email", "Email *", "email", |d| d.email.clone(), |d, v| d.email = v)}
                    <div class="form-row">
                        {text_field("first_name", "First Name", "text", |d| d.first_name.clone(), |d, v| d.first_name = v)}
                        {text_field("last_name", "Last Name", "text", |d| d.last_name.clone(), |d, v| d.last_name = v)}
                    </div>
                    {(!editing).then(|| view! {
                        <div class="form-row">
                            {text_field("password", "Password *", "password", |d| d.password.clone(), |d, v| d.password = v)}
                            {text_field("password_confirm", "Confirm Password *", "password", |d| d.password_confirm.clone(), |d, v| {
                                d.password_confirm = v;
                            })}
                        </div>
                    })}
                    {text_field("phone", "Phone", "tel", |d| d.phone.clone(), |d, v| d.phone = v)}
                    <div class="form-group">
                        <label for="role">"Role *"</label>
                        <select
                            id="role"
                            prop:value=move || state.with(|s| s.draft.role.clone())
                            on:change=move |ev| state.update(|s| s.draft.role = event_target_value(&ev))
                        >
                            <option value="">"Select Role"</option>
                            {role_options}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="profile_picture">"Profile Picture (JPEG, PNG, GIF - max 5MB)"</label>
                        <input
                            id="profile_picture"
                            type="file"
                            accept="image/jpeg,image/png,image/gif"
                            on:change=move |ev| pick_into(&ev, &ACCOUNT_PICTURE, picture, picture_error)
                        />
                        {move || picture.with(|p| p.as_ref().map(|p| view! { <p class="file-name">{p.name.clone()}</p> }))}
                    </div>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.draft.is_active)
                            on:change=move |ev| state.update(|s| s.draft.is_active = event_target_checked(&ev))
                        />
                        " Active"
                    </label>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" disabled=busy on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=busy>
                            {move || match (busy(), editing) {
                                (true, _) => "Saving...",
                                (false, true) => "Update User",
                                (false, false) => "Create User",
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn ResetPasswordModal(
    state: RwSignal<UserManagementState>,
    user: UserRecord,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let busy = move || state.with(|s| s.busy);
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let close = move || {
        if !state.with_untracked(|s| s.busy) {
            on_close.run(());
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| close()>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"Reset Password"</h2>
                    <button class="modal-close" on:click=move |_| close()>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <p>"Reset password for " <strong>{user.display_name().to_owned()}</strong></p>
                <Alert kind=AlertKind::Error message=error/>
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }>
                    <div class="form-group">
                        <label for="new_password">"New Password *"</label>
                        <input
                            id="new_password"
                            type="password"
                            prop:value=move || state.with(|s| s.reset.new_password.clone())
                            on:input=move |ev| state.update(|s| s.reset.new_password = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="new_password_confirm">"Confirm New Password *"</label>
                        <input
                            id="new_password_confirm"
                            type="password"
                            prop:value=move || state.with(|s| s.reset.new_password_confirm.clone())
                            on:input=move |ev| state.update(|s| s.reset.new_password_confirm = event_target_value(&ev))
                        />
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" disabled=busy on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=busy>
                            {move || if busy() { "Resetting..." } else { "Reset Password" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn UserDetailModal(user: UserRecord, role: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let status = if user.is_active { "Active" } else { "Inactive" };
    let row = |label: &'static str, value: String| {
        view! {
            <div class="detail-row">
                <span class="detail-label">{label}</span>
                <span class="detail-value">{value}</span>
            </div>
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"User Details"</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div class="user-detail">
                    {user.profile_picture.as_deref().map(|path| view! {
                        <img class="detail-avatar" src=media_url(path) alt=user.username.clone()/>
                    })}
                    {row("Name", user.display_name().to_owned())}
                    {row("Username", format!("@{}", user.username))}
                    {row("Email", user.email.clone())}
                    {row("Phone", user.phone.clone().unwrap_or_else(|| "-".to_owned()))}
                    {row("Role", role.or_else(|| user.role_name.clone()).unwrap_or_else(|| "-".to_owned()))}
                    {row("Status", status.to_owned())}
                    {row("Joined", user.date_joined.clone().unwrap_or_else(|| "-".to_owned()))}
                </div>
                <div class="modal-footer">
                    <button class="btn btn-primary" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
