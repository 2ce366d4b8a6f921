//! Route guard wrapping every page that requires a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential lives in browser storage, so the decision is made in an
//! effect after hydration. Until it allows, the guard renders a placeholder
//! instead of the page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::{BrowserSessionStore, Decision, Page, SystemClock, authorize};

/// Render `children` only when the stored session may open `page`;
/// otherwise replace the history entry with the redirect target.
#[component]
pub fn ProtectedRoute(page: Page, children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    let allowed = RwSignal::new(false);
    let required = page.required_roles().unwrap_or_default();

    Effect::new(move || match authorize(&BrowserSessionStore, &SystemClock, required) {
        Decision::Allow => allowed.set(true),
        Decision::Redirect(target) => {
            allowed.set(false);
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <div class="route-pending"><p>"Checking session..."</p></div> }
        >
            {children()}
        </Show>
    }
}
