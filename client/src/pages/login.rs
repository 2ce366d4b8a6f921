//! Login page: username + password against the REST API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertKind};
use crate::net::api;
use crate::net::types::LoginRequest;
use crate::session::{BrowserSessionStore, Page, SessionStore, SystemClock, current_claims, decode_claims};
use crate::util::forms::can_submit_login;

const INVALID_ROLE: &str = "Invalid role. Please contact support.";

/// Landing page for a freshly issued access token.
///
/// # Errors
///
/// Returns the message to show when the token does not name a known role.
pub fn landing_page(access: &str) -> Result<Page, &'static str> {
    match decode_claims(access) {
        Ok(claims) => claims.role.map(|role| role.home()).ok_or(INVALID_ROLE),
        Err(e) => {
            leptos::logging::warn!("issued token unreadable: {e}");
            Err(INVALID_ROLE)
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    // A live session skips the form.
    let go_home = navigate.clone();
    Effect::new(move || {
        if let Some(role) = current_claims(&BrowserSessionStore, &SystemClock).and_then(|c| c.role) {
            go_home(role.home().path(), NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginRequest {
            username: username.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
        };
        if !can_submit_login(&credentials.username, &credentials.password, busy.get_untracked()) {
            return;
        }
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&credentials).await {
                Ok(tokens) => match landing_page(&tokens.access) {
                    Ok(page) => {
                        BrowserSessionStore.set(&tokens.access, &tokens.refresh);
                        leptos::logging::log!("signed in; landing on {}", page.path());
                        navigate(page.path(), NavigateOptions::default());
                    }
                    Err(message) => error.set(Some(message.to_owned())),
                },
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    error.set(Some(e.user_message("Invalid username or password")));
                }
            }
            busy.set(false);
        });
    };

    let disabled = move || !can_submit_login(&username.get(), &password.get(), busy.get());

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <h1><i class="fas fa-graduation-cap"></i>" InternFlow"</h1>
                    <p class="login-card__subtitle">"Sign in to manage your internships"</p>
                </div>
                <Alert kind=AlertKind::Error message=error/>
                <form class="login-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            id="username"
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <div class="password-input">
                            <input
                                id="password"
                                class="login-input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                autocomplete="current-password"
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="password-toggle"
                                aria-label="Toggle password visibility"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                <i class=move || if show_password.get() { "fas fa-eye-slash" } else { "fas fa-eye" }></i>
                            </button>
                        </div>
                    </div>
                    <button class="login-button" type="submit" disabled=disabled>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
