//! The signed-in student's internships, with add and invite dialogs.

use leptos::prelude::*;

use crate::components::add_internship_modal::AddInternshipModal;
use crate::components::alert::{Alert, AlertKind};
use crate::components::invite_teacher_modal::InviteTeacherModal;
use crate::net::api;
use crate::net::types::Internship;
use crate::state::internships::MyInternshipsState;
use crate::util::auth::surface_error;

fn period(internship: &Internship) -> String {
    match (&internship.start_date, &internship.end_date) {
        (Some(start), Some(end)) => format!("{start} - {end}"),
        (Some(start), None) => start.clone(),
        _ => "Not set".to_owned(),
    }
}

#[component]
pub fn StudentInternships() -> impl IntoView {
    let state = RwSignal::new(MyInternshipsState::default());
    let loading = Memo::new(move |_| state.with(|s| s.loading));

    Effect::new(move || {
        if !loading.get() {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::my_internships().await {
                Ok(items) => state.update(|s| s.loaded(Ok(items))),
                Err(e) => surface_error(&e, "Failed to load internships", move |m| {
                    state.update(|s| s.loaded(Err(m)));
                }),
            }
        });
    });

    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let open_add = move |_| state.update(|s| s.adding = true);
    let on_dialog_close = Callback::new(move |()| {
        state.update(|s| {
            s.adding = false;
            s.inviting = None;
        });
    });
    let on_dialog_success = Callback::new(move |()| state.update(MyInternshipsState::dialog_succeeded));

    let card = move |internship: Internship| {
        let id = internship.id;
        let status = internship.status;
        let expanded = move || state.with(|s| s.expanded == Some(id));
        let can_invite = internship.can_invite_teacher();
        let invite_target = internship.clone();
        view! {
            <div class=move || if expanded() { "internship-card expanded" } else { "internship-card" }>
                <div class="card-header" on:click=move |_| state.update(|s| s.toggle(id))>
                    <div class="card-title">
                        <h3>{internship.title.clone()}</h3>
                        <p class="company"><i class="fas fa-building"></i>" "{internship.company_name.clone()}</p>
                    </div>
                    <span class=format!("status-badge {}", status.css_class())>{status.label()}</span>
                </div>
                <Show when=expanded>
                    <div class="card-body">
                        <p class="status-description">{status.description()}</p>
                        <div class="info-grid">
                            <div class="info-item">
                                <span class="info-label">"Type"</span>
                                <span class="info-value">{internship.type_display.clone().unwrap_or_default()}</span>
                            </div>
                            <div class="info-item">
                                <span class="info-label">"Period"</span>
                                <span class="info-value">{period(&internship)}</span>
                            </div>
                            {internship.teacher_name.clone().map(|name| view! {
                                <div class="info-item">
                                    <span class="info-label">"Supervisor"</span>
                                    <span class="info-value">{name}</span>
                                </div>
                            })}
                        </div>
                        {internship.description.clone().map(|text| view! {
                            <div class="description"><h4>"Description"</h4><p>{text}</p></div>
                        })}
                        <div class="card-actions">
                            {can_invite.then(|| {
                                let target = invite_target.clone();
                                view! {
                                    <button
                                        class="btn btn-primary btn-sm"
                                        on:click=move |_| {
                                            let target = target.clone();
                                            state.update(|s| {
                                                s.invite(&target);
                                            });
                                        }
                                    >
                                        <i class="fas fa-user-plus"></i>" Invite Teacher"
                                    </button>
                                }
                            })}
                            {internship.cahier_de_charges.clone().map(|path| view! {
                                <a class="btn btn-secondary btn-sm" href=api::media_url(&path) target="_blank" rel="noopener noreferrer">
                                    <i class="fas fa-file-download"></i>" View Document"
                                </a>
                            })}
                        </div>
                    </div>
                </Show>
            </div>
        }
    };

    view! {
        <div class="student-internships">
            <div class="section-header">
                <div>
                    <h2><i class="fas fa-briefcase"></i>" My Internships"</h2>
                    <p class="section-description">"Track and manage your internships"</p>
                </div>
                <button id="add-internship-button" class="btn btn-primary btn-sm" on:click=open_add>
                    <i class="fas fa-plus"></i>" Add Internship"
                </button>
            </div>

            <Alert kind=AlertKind::Error message=error/>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-state"><p>"Loading internships..."</p></div> }
            >
                {move || {
                    let items = state.with(|s| s.items.clone());
                    if items.is_empty() {
                        view! {
                            <div class="empty-state">
                                <h3>"No internships yet"</h3>
                                <p>"Start by adding your first internship"</p>
                                <button class="btn btn-primary" on:click=open_add>"Add Your First Internship"</button>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! { <div class="internships-list">{items.into_iter().map(card).collect_view()}</div> }.into_any()
                    }
                }}
            </Show>

            <Show when=move || state.with(|s| s.adding)>
                <AddInternshipModal on_close=on_dialog_close on_success=on_dialog_success/>
            </Show>
            {move || {
                state.with(|s| s.inviting.clone()).map(|internship| view! {
                    <InviteTeacherModal internship=internship on_close=on_dialog_close on_success=on_dialog_success/>
                })
            }}
        </div>
    }
}
