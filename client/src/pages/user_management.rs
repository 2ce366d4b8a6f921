//! Administrator user management: filters, stats, and account dialogs.
//!
//! Every mutation reloads the list and the stats so the totals stay in step.

#[cfg(test)]
#[path = "user_management_test.rs"]
mod user_management_test;

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::user_dialogs::{ResetPasswordModal, UserDetailModal, UserFormModal};
use crate::components::user_stats::UserStatsGrid;
use crate::net::api::{self, UserQuery};
use crate::net::error::ApiError;
use crate::net::types::{ApiMessage, UserRecord};
use crate::state::users::{UserDialog, UserManagementState, parse_status_filter, status_filter_value};
use crate::util::auth::{surface_detailed, surface_error};
use crate::util::files::PickedFile;
use crate::util::forms::{check_new_user, check_password_reset, check_user_update};
use crate::util::timers::{ADMIN_BANNER_TTL, expire_banner};

type State = RwSignal<UserManagementState>;

/// Filters the page is showing, or `None` once the page has been left.
fn current_query(state: State) -> Option<UserQuery> {
    state.try_with_untracked(|s| s.query.clone())
}

/// Whether the dialog has closed. A page that has been left counts as open,
/// so nothing is touched after disposal.
fn dialog_closed(state: State) -> bool {
    state.try_with_untracked(|s| s.dialog.is_none()).unwrap_or(false)
}

fn load_overview(state: State) {
    leptos::task::spawn_local(async move {
        match api::roles().await {
            Ok(roles) => state.update(|s| s.roles = roles),
            Err(e) => surface_error(&e, "Failed to load roles", move |m| state.update(|s| s.error = Some(m))),
        }
        match api::user_stats().await {
            Ok(stats) => state.update(|s| s.stats = Some(stats)),
            Err(e) => surface_error(&e, "Failed to load statistics", move |m| state.update(|s| s.error = Some(m))),
        }
    });
}

fn load_users(state: State, query: UserQuery) {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });
    leptos::task::spawn_local(async move {
        let result = api::users(&query).await;
        // A newer filter owns the list.
        if current_query(state).as_ref() != Some(&query) {
            return;
        }
        match result {
            Ok(users) => state.update(|s| s.loaded(Ok(users))),
            Err(e) => surface_error(&e, "Failed to load users", move |m| state.update(|s| s.loaded(Err(m)))),
        }
    });
}

/// Apply the outcome of a dialog action.
fn finish(state: State, result: Result<ApiMessage, ApiError>, success: &str, failure: &str) {
    match result {
        Ok(ack) => {
            if let Some(seq) = state.try_update(|s| s.succeeded(ack.or(success))) {
                expire_banner(state, ADMIN_BANNER_TTL, seq, |s| &mut s.banner);
            }
            if let Some(query) = current_query(state) {
                load_users(state, query);
                load_overview(state);
            }
        }
        Err(e) => surface_detailed(&e, failure, move |m| state.update(|s| s.failed(m))),
    }
}

fn claim(state: State) -> bool {
    state.try_update(UserManagementState::begin).unwrap_or(false)
}

fn submit_form(state: State, picture: RwSignal<Option<PickedFile>, LocalStorage>) {
    let (dialog, draft) = state.with_untracked(|s| (s.dialog.clone(), s.draft.clone()));
    let editing = match dialog {
        Some(UserDialog::Create) => None,
        Some(UserDialog::Edit(user)) => Some(user.id),
        _ => return,
    };
    let checked = match editing {
        None => check_new_user(&draft),
        Some(_) => check_user_update(&draft),
    };
    if let Err(message) = checked {
        state.update(|s| s.error = Some(message.to_owned()));
        return;
    }
    if !claim(state) {
        return;
    }
    let file = picture.get_untracked();
    leptos::task::spawn_local(async move {
        match editing {
            None => {
                let result = api::create_user(&draft, file.as_ref()).await;
                finish(state, result, "User created successfully!", "Failed to create user");
            }
            Some(id) => {
                let result = api::update_user(id, &draft, file.as_ref()).await;
                finish(state, result, "User updated successfully!", "Failed to update user");
            }
        }
        if dialog_closed(state) {
            picture.set(None);
        }
    });
}

fn submit_reset(state: State, user_id: i64) {
    let reset = state.with_untracked(|s| s.reset.clone());
    if let Err(message) = check_password_reset(&reset) {
        state.update(|s| s.error = Some(message.to_owned()));
        return;
    }
    if !claim(state) {
        return;
    }
    leptos::task::spawn_local(async move {
        let result = api::reset_user_password(user_id, &reset).await;
        finish(state, result, "Password reset successfully!", "Failed to reset password");
    });
}

fn submit_delete(state: State, user_id: i64) {
    if !claim(state) {
        return;
    }
    leptos::task::spawn_local(async move {
        let result = api::delete_user(user_id).await;
        finish(state, result, "User deleted successfully!", "Failed to delete user");
    });
}

fn show_detail(state: State, user_id: i64) {
    leptos::task::spawn_local(async move {
        match api::user(user_id).await {
            Ok(user) => state.update(|s| s.open(UserDialog::Detail(user))),
            Err(e) => surface_error(&e, "Failed to load user details", move |m| state.update(|s| s.error = Some(m))),
        }
    });
}

#[component]
pub fn UserManagementPage() -> impl IntoView {
    let state = RwSignal::new(UserManagementState::default());
    let picture = RwSignal::new_local(None::<PickedFile>);
    let query = Memo::new(move |_| state.with(|s| s.query.clone()));
    let dialog = Memo::new(move |_| state.with(|s| s.dialog.clone()));
    let users = Memo::new(move |_| state.with(|s| s.users.clone()));
    let stats = Memo::new(move |_| state.with(|s| s.stats.clone()));

    Effect::new(move || load_overview(state));
    Effect::new(move || load_users(state, query.get()));

    let error = Signal::derive(move || state.with(|s| if s.dialog.is_some() { None } else { s.error.clone() }));
    let success = Signal::derive(move || state.with(|s| s.banner.message().map(str::to_owned)));
    let filtered = move || query.with(|q| !q.search.is_empty() || !q.role.is_empty() || q.is_active.is_some());

    let open = move |dialog: UserDialog| {
        picture.set(None);
        state.update(|s| s.open(dialog));
    };
    let on_close = Callback::new(move |()| {
        picture.set(None);
        state.update(UserManagementState::close);
    });

    let row = move |user: UserRecord| {
        let id = user.id;
        let role = user.role_name.clone().unwrap_or_else(|| "-".to_owned());
        let (status_class, status_label) =
            if user.is_active { ("status-badge active", "Active") } else { ("status-badge inactive", "Inactive") };
        let edit_target = user.clone();
        let reset_target = user.clone();
        let delete_target = user.clone();
        view! {
            <tr>
                <td class="user-cell">
                    <div class="user-name">{user.display_name().to_owned()}</div>
                    <div class="user-username">"@"{user.username.clone()}</div>
                </td>
                <td>{user.email.clone()}</td>
                <td><span class="role-badge">{role}</span></td>
                <td><span class=status_class>{status_label}</span></td>
                <td class="actions-cell">
                    <button class="btn-icon" title="View" on:click=move |_| show_detail(state, id)>
                        <i class="fas fa-eye"></i>
                    </button>
                    <button class="btn-icon" title="Edit" on:click=move |_| open(UserDialog::Edit(edit_target.clone()))>
                        <i class="fas fa-edit"></i>
                    </button>
                    <button
                        class="btn-icon"
                        title="Reset Password"
                        on:click=move |_| open(UserDialog::ResetPassword(reset_target.clone()))
                    >
                        <i class="fas fa-key"></i>
                    </button>
                    <button
                        class="btn-icon btn-danger"
                        title="Delete"
                        on:click=move |_| open(UserDialog::Delete(delete_target.clone()))
                    >
                        <i class="fas fa-trash"></i>
                    </button>
                </td>
            </tr>
        }
    };

    let dialog_view = move || {
        dialog.get().map(|dialog| match dialog {
            UserDialog::Create | UserDialog::Edit(_) => {
                let editing = matches!(dialog, UserDialog::Edit(_));
                view! {
                    <UserFormModal
                        state=state
                        picture=picture
                        editing=editing
                        on_submit=Callback::new(move |()| submit_form(state, picture))
                        on_close=on_close
                    />
                }
                .into_any()
            }
            UserDialog::ResetPassword(user) => {
                let id = user.id;
                view! {
                    <ResetPasswordModal
                        state=state
                        user=user
                        on_submit=Callback::new(move |()| submit_reset(state, id))
                        on_close=on_close
                    />
                }
                .into_any()
            }
            UserDialog::Delete(user) => {
                let id = user.id;
                view! {
                    <ConfirmModal
                        title="Delete User"
                        confirm_label="Delete".to_owned()
                        danger=true
                        busy=Signal::derive(move || state.with(|s| s.busy))
                        on_confirm=Callback::new(move |()| submit_delete(state, id))
                        on_cancel=on_close
                    >
                        <Alert kind=AlertKind::Error message=Signal::derive(move || state.with(|s| s.error.clone()))/>
                        <p>"Are you sure you want to delete " <strong>{user.display_name().to_owned()}</strong> "?"</p>
                        <p class="warning-text">"This action cannot be undone."</p>
                    </ConfirmModal>
                }
                .into_any()
            }
            UserDialog::Detail(user) => {
                let role = user.role.and_then(|id| state.with_untracked(|s| s.role_name(id).map(str::to_owned)));
                view! { <UserDetailModal user=user role=role on_close=on_close/> }.into_any()
            }
        })
    };

    let roles = Memo::new(move |_| state.with(|s| s.roles.clone()));
    let role_filters = move || {
        roles
            .get()
            .into_iter()
            .map(|role| view! { <option value=role.id.to_string()>{role.name}</option> })
            .collect_view()
    };

    view! {
        <div class="user-management-container">
            <div class="page-header">
                <div>
                    <h1><i class="fas fa-users-cog"></i>" User Management"</h1>
                    <p>"Manage user accounts, roles and permissions"</p>
                </div>
                <button class="btn btn-primary" on:click=move |_| open(UserDialog::Create)>
                    <i class="fas fa-user-plus"></i>" Add New User"
                </button>
            </div>

            <Alert kind=AlertKind::Error message=error/>
            <Alert kind=AlertKind::Success message=success/>

            {move || stats.get().map(|stats| view! { <UserStatsGrid stats=stats/> })}

            <div class="filters-section">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by username, email, or name..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| state.update(|s| s.query.search = event_target_value(&ev))
                />
                <select
                    prop:value=move || query.with(|q| q.role.clone())
                    on:change=move |ev| state.update(|s| s.query.role = event_target_value(&ev))
                >
                    <option value="">"All Roles"</option>
                    {role_filters}
                </select>
                <select
                    prop:value=move || query.with(|q| status_filter_value(q.is_active))
                    on:change=move |ev| state.update(|s| s.query.is_active = parse_status_filter(&event_target_value(&ev)))
                >
                    <option value="">"All Status"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>
                <Show when=filtered>
                    <button class="btn btn-secondary" on:click=move |_| state.update(|s| s.query = UserQuery::default())>
                        <i class="fas fa-times"></i>" Clear Filters"
                    </button>
                </Show>
            </div>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <div class="loading-spinner"><p>"Loading users..."</p></div> }
            >
                {move || {
                    let list = users.get();
                    if list.is_empty() {
                        view! {
                            <div class="empty-state">
                                <i class="fas fa-users"></i>
                                <h3>"No users found"</h3>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <table class="users-table">
                                <thead>
                                    <tr>
                                        <th>"User"</th>
                                        <th>"Email"</th>
                                        <th>"Role"</th>
                                        <th>"Status"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>{list.into_iter().map(row).collect_view()}</tbody>
                            </table>
                        }
                        .into_any()
                    }
                }}
            </Show>

            {dialog_view}
        </div>
    }
}
