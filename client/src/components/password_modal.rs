//! Change-password dialog opened from the profile page.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::PasswordChange;
use crate::util::auth::surface_error;
use crate::util::forms::check_password_change;
use crate::util::timers::after;

const CLOSE_DELAY: Duration = Duration::from_secs(2);

/// Server message for a rejected change: the general message, else the
/// first complaint about the current password.
fn change_failure_message(err: &ApiError) -> Option<String> {
    match err {
        ApiError::Validation(errors) => errors
            .message
            .clone()
            .or_else(|| errors.field("old_password").and_then(|m| m.first().cloned())),
        _ => None,
    }
}

#[component]
pub fn PasswordModal(on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(PasswordChange::default());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let change = form.get_untracked();
        error.set(None);
        success.set(None);
        if let Err(m) = check_password_change(&change) {
            error.set(Some(m.to_owned()));
            return;
        }
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::change_password(&change).await {
                Ok(ack) => {
                    success.set(Some(ack.or("Password changed successfully!")));
                    after(CLOSE_DELAY, move || on_close.run(()));
                }
                Err(e) => {
                    let fallback = change_failure_message(&e)
                        .unwrap_or_else(|| "Failed to change password. Please try again.".to_owned());
                    surface_error(&e, &fallback, move |m| error.set(Some(m)));
                }
            }
            busy.set(false);
        });
    };

    let close = move || {
        if !busy.get_untracked() {
            on_close.run(());
        }
    };

    let field = move |id: &'static str, label: &'static str, get: fn(&PasswordChange) -> String, set: fn(&mut PasswordChange, String)| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    id=id
                    type="password"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| close()>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2><i class="fas fa-key"></i>" Change Password"</h2>
                    <button class="modal-close" on:click=move |_| close()>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <Alert kind=AlertKind::Error message=error/>
                <Alert kind=AlertKind::Success message=success/>
                <form class="password-form" on:submit=on_submit>
                    {field("old_password", "Current Password", |f| f.old_password.clone(), |f, v| f.old_password = v)}
                    {field("new_password", "New Password", |f| f.new_password.clone(), |f, v| f.new_password = v)}
                    {field("confirm_password", "Confirm New Password", |f| f.confirm_password.clone(), |f, v| {
                        f.confirm_password = v;
                    })}
                    <small class="form-hint">"Password must be at least 8 characters long"</small>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" disabled=move || busy.get() on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Changing..." } else { "Change Password" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
