//! Inline error and success banners.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "alert alert-error",
            Self::Success => "alert alert-success",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Error => "fas fa-exclamation-circle",
            Self::Success => "fas fa-check-circle",
        }
    }
}

/// Banner shown while `message` holds text. Multi-line messages keep their breaks.
#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class=kind.class() role="alert">
                <i class=kind.icon()></i>
                <span class="alert__text">{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
