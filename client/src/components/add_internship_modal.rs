//! Dialog for submitting a new internship with its requirements document (cahier de charges).

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::net::api;
use crate::net::types::NewInternship;
use crate::util::auth::surface_error;
use crate::util::files::{DOCUMENT, PickedFile, format_size, pick_into};
use crate::util::forms::check_internship;
use crate::util::timers::{MODAL_CLOSE_DELAY, after};

#[component]
pub fn AddInternshipModal(on_close: Callback<()>, on_success: Callback<()>) -> impl IntoView {
    let draft = RwSignal::new(NewInternship::default());
    let document = RwSignal::new_local(None::<PickedFile>);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = draft.get_untracked();
        let file = document.get_untracked();
        if let Err(message) = check_internship(&form, file.as_ref()) {
            error.set(Some(message.to_owned()));
            return;
        }
        let Some(file) = file else {
            return;
        };
        busy.set(true);
        error.set(None);
        success.set(None);
        leptos::task::spawn_local(async move {
            match api::create_internship(&form, &file).await {
                Ok(_) => {
                    success.set(Some("Internship created successfully! Waiting for admin approval.".to_owned()));
                    after(MODAL_CLOSE_DELAY, move || on_success.run(()));
                }
                Err(e) => surface_error(&e, "Failed to create internship. Please try again.", move |m| {
                    error.set(Some(m));
                }),
            }
            busy.set(false);
        });
    };

    let close = move || {
        if !busy.get_untracked() {
            on_close.run(());
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| close()>
            <div class="modal-content large" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2><i class="fas fa-plus-circle"></i>" Add New Internship"</h2>
                    <button class="modal-close" on:click=move |_| close()>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                <Alert kind=AlertKind::Error message=error/>
                <Alert kind=AlertKind::Success message=success/>

                <form class="internship-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="title">"Title *"</label>
                        <input
                            id="title"
                            type="text"
                            placeholder="e.g. Backend developer internship"
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.title = event_target_value(&ev));
                                error.set(None);
                            }
                        />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="type">"Type *"</label>
                            <select
                                id="type"
                                prop:value=move || draft.with(|d| d.kind.clone())
                                on:change=move |ev| draft.update(|d| d.kind = event_target_value(&ev))
                            >
                                <option value="PFE">"PFE - Projet de Fin d'Etudes"</option>
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="company_name">"Company *"</label>
                            <input
                                id="company_name"
                                type="text"
                                prop:value=move || draft.with(|d| d.company_name.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.company_name = event_target_value(&ev));
                                    error.set(None);
                                }
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="start_date">"Start Date *"</label>
                            <input
                                id="start_date"
                                type="date"
                                prop:value=move || draft.with(|d| d.start_date.clone())
                                on:input=move |ev| draft.update(|d| d.start_date = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="end_date">"End Date *"</label>
                            <input
                                id="end_date"
                                type="date"
                                prop:value=move || draft.with(|d| d.end_date.clone())
                                on:input=move |ev| draft.update(|d| d.end_date = event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="description">"Description *"</label>
                        <textarea
                            id="description"
                            rows="4"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.description = event_target_value(&ev));
                                error.set(None);
                            }
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="cahier_de_charges">"Cahier de charges * (PDF, DOC, DOCX - max 10MB)"</label>
                        <input
                            id="cahier_de_charges"
                            type="file"
                            accept=".pdf,.doc,.docx"
                            on:change=move |ev| pick_into(&ev, &DOCUMENT, document, error)
                        />
                        <Show when=move || document.with(Option::is_some)>
                            <p class="file-name">
                                <i class="fas fa-file"></i>
                                {move || {
                                    document
                                        .with(|f| f.as_ref().map(|f| format!(" {} ({})", f.name, format_size(f.size))))
                                        .unwrap_or_default()
                                }}
                            </p>
                        </Show>
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" disabled=move || busy.get() on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating..." } else { "Create Internship" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
