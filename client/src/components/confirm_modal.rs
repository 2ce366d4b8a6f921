//! Generic confirm/cancel dialog.

use leptos::prelude::*;

/// Modal with a body, a cancel button and a confirm button that is
/// disabled while `busy`.
#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] confirm_label: Signal<String>,
    #[prop(optional)] danger: bool,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    let confirm_class = if danger { "btn btn-danger" } else { "btn btn-primary" };
    let close = move || {
        if !busy.get_untracked() {
            on_cancel.run(());
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| close()>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button class="modal-close" on:click=move |_| close()>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
                <div class="modal-footer">
                    <button class="btn btn-secondary" disabled=move || busy.get() on:click=move |_| close()>
                        "Cancel"
                    </button>
                    <button class=confirm_class disabled=move || busy.get() on:click=move |_| on_confirm.run(())>
                        {move || if busy.get() { "Processing...".to_owned() } else { confirm_label.get() }}
                    </button>
                </div>
            </div>
        </div>
    }
}
