//! Profile page: view and edit the signed-in account.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::password_modal::PasswordModal;
use crate::components::student_internships::StudentInternships;
use crate::net::api;
use crate::net::types::{ProfileUpdate, UserProfile};
use crate::session::{BrowserSessionStore, Role, SystemClock, current_claims};
use crate::util::auth::{surface_error, surface_into};
use crate::util::files::{PROFILE_PICTURE, PickedFile, pick_into, preview_url, revoke_preview};
use crate::util::timers::after;

const SUCCESS_TTL: std::time::Duration = std::time::Duration::from_secs(3);

type FieldGet = fn(&ProfileUpdate) -> String;
type FieldSet = fn(&mut ProfileUpdate, String);

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = RwSignal::new(None::<UserProfile>);
    let form = RwSignal::new(ProfileUpdate::default());
    let editing = RwSignal::new(false);
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let picture = RwSignal::new_local(None::<PickedFile>);
    let preview = RwSignal::new(None::<String>);
    let password_open = RwSignal::new(false);
    let role = RwSignal::new(None::<Role>);

    Effect::new(move || {
        role.set(current_claims(&BrowserSessionStore, &SystemClock).and_then(|c| c.role));
        leptos::task::spawn_local(async move {
            match api::current_user().await {
                Ok(user) => {
                    form.set(user.to_update());
                    profile.set(Some(user));
                }
                Err(e) => surface_into(&e, "Failed to fetch user data", error),
            }
            loading.set(false);
        });
    });

    // One object URL at a time.
    Effect::new(move || {
        let next = picture.with(|p| p.as_ref().and_then(preview_url));
        if let Some(old) = preview.get_untracked() {
            revoke_preview(&old);
        }
        preview.set(next);
    });
    on_cleanup(move || {
        if let Some(url) = preview.get_untracked() {
            revoke_preview(&url);
        }
    });

    let start_edit = move |_| {
        editing.set(true);
        error.set(None);
        success.set(None);
    };
    let cancel_edit = move |_| {
        editing.set(false);
        picture.set(None);
        error.set(None);
        if let Some(user) = profile.get_untracked() {
            form.set(user.to_update());
        }
    };
    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        error.set(None);
        success.set(None);
        let update = form.get_untracked();
        let file = picture.get_untracked();
        leptos::task::spawn_local(async move {
            match api::update_profile(&update, file.as_ref()).await {
                Ok(user) => {
                    form.set(user.to_update());
                    profile.set(Some(user));
                    editing.set(false);
                    picture.set(None);
                    success.set(Some("Profile updated successfully!".to_owned()));
                    after(SUCCESS_TTL, move || success.set(None));
                }
                Err(e) => surface_error(&e, "Failed to update profile", move |m| error.set(Some(m))),
            }
            saving.set(false);
        });
    };

    let field = move |name: &'static str, label: &'static str, kind: &'static str, get: FieldGet, set: FieldSet| {
        view! {
            <div class="form-group">
                <label for=name>{label}</label>
                <input
                    id=name
                    type=kind
                    disabled=move || !editing.get()
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    let avatar = move || {
        let (initials, stored) = profile.with(|p| {
            p.as_ref().map_or((String::new(), None), |u| (u.initials(), u.profile_picture.clone()))
        });
        match preview.get().or_else(|| stored.map(|path| api::media_url(&path))) {
            Some(src) => view! { <img class="profile-avatar" src=src alt="Profile picture"/> }.into_any(),
            None => view! { <div class="profile-avatar profile-avatar--initials">{initials}</div> }.into_any(),
        }
    };

    view! {
        <div class="profile-container">
            <div class="profile-header">
                <h1>"Profile Settings"</h1>
                <div class="header-actions">
                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            <button class="btn btn-primary" on:click=start_edit>
                                <i class="fas fa-edit"></i>" Edit Profile"
                            </button>
                            <button class="btn btn-secondary" on:click=move |_| password_open.set(true)>
                                <i class="fas fa-key"></i>" Change Password"
                            </button>
                        }
                    >
                        <button class="btn btn-success" disabled=move || saving.get() on:click=save>
                            {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                        <button class="btn btn-secondary" disabled=move || saving.get() on:click=cancel_edit>
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </div>

            <Alert kind=AlertKind::Error message=error/>
            <Alert kind=AlertKind::Success message=success/>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-state"><p>"Loading profile..."</p></div> }
            >
                <div class="profile-card">
                    <div class="profile-summary">
                        {avatar}
                        <Show when=move || editing.get()>
                            <label class="avatar-upload">
                                <i class="fas fa-camera"></i>" Change Photo"
                                <input
                                    type="file"
                                    accept="image/jpeg,image/png,image/gif,image/webp"
                                    on:change=move |ev| pick_into(&ev, &PROFILE_PICTURE, picture, error)
                                />
                            </label>
                        </Show>
                        <h2>{move || profile.with(|p| p.as_ref().map(UserProfile::display_name).unwrap_or_default())}</h2>
                        <p class="profile-username">
                            {move || profile.with(|p| p.as_ref().map(|u| format!("@{}", u.username)).unwrap_or_default())}
                        </p>
                        {move || role.get().map(|r| view! { <span class=r.badge_class()>{r.as_str()}</span> })}
                    </div>
                    <div class="profile-details">
                        <h3>"Personal Information"</h3>
                        <div class="form-row">
                            {field("first_name", "First Name", "text", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                            {field("last_name", "Last Name", "text", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                        </div>
                        {field("email", "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                        {field("phone", "Phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                    </div>
                </div>
            </Show>

            <Show when=move || role.get() == Some(Role::Student)>
                <StudentInternships/>
            </Show>

            <Show when=move || password_open.get()>
                <PasswordModal on_close=Callback::new(move |()| password_open.set(false))/>
            </Show>
        </div>
    }
}
