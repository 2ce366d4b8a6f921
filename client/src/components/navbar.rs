//! Navigation chrome: top bar, role sidebar and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::{
    BrowserSessionStore, Claims, ENTRY_POINT, SystemClock, chrome_visible, current_claims, logout, sidebar,
};

/// Shows the [`Navbar`] on every route where a live session exists,
/// except the login page. Re-evaluated on each navigation.
#[component]
pub fn AppChrome() -> impl IntoView {
    let location = use_location();
    let claims = RwSignal::new(None::<Claims>);

    Effect::new(move || {
        let path = location.pathname.get();
        let visible = chrome_visible(&path, &BrowserSessionStore, &SystemClock);
        claims.set(if visible { current_claims(&BrowserSessionStore, &SystemClock) } else { None });
    });

    view! {
        <Show when=move || claims.with(Option::is_some)>
            <Navbar claims=claims/>
        </Show>
    }
}

#[component]
fn Navbar(claims: RwSignal<Option<Claims>>) -> impl IntoView {
    let navigate = use_navigate();
    let sidebar_open = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    let greeting = move || {
        let name = claims.with(|c| c.as_ref().and_then(|c| c.display_name.clone()));
        format!("Hello, {}", name.unwrap_or_else(|| "User".to_owned()))
    };

    let items = move || {
        claims
            .with(|c| c.as_ref().and_then(|c| c.role))
            .map(sidebar)
            .unwrap_or_default()
            .iter()
            .map(|item| {
                view! {
                    <li class="nav-text">
                        <A href=item.page.path()>
                            <span>{item.title}</span>
                        </A>
                    </li>
                }
            })
            .collect_view()
    };

    let on_logout = move |_| {
        logout(&BrowserSessionStore);
        claims.set(None);
        menu_open.set(false);
        navigate(ENTRY_POINT, NavigateOptions::default());
    };

    view! {
        <div class="navbar">
            <button class="menu-bars" title="Menu" on:click=move |_| sidebar_open.update(|o| *o = !*o)>
                <i class="fas fa-bars"></i>
            </button>
            <div class="navbar-right">
                <div class="user-dropdown">
                    <button class="user-dropdown-toggle" on:click=move |_| menu_open.update(|o| *o = !*o)>
                        <span class="user-name">{greeting}</span>
                        <i class="fas fa-chevron-down"></i>
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="user-dropdown-menu">
                            <button id="logout-button" class="logout-item" on:click=on_logout.clone()>
                                <i class="fas fa-sign-out-alt"></i>
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
        <nav class=move || if sidebar_open.get() { "nav-menu active" } else { "nav-menu" }>
            <ul class="nav-menu-items" on:click=move |_| sidebar_open.set(false)>
                {items}
            </ul>
        </nav>
    }
}
