//! Administrator queue of internships awaiting approval.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::confirm_modal::ConfirmModal;
use crate::net::api;
use crate::net::types::{Internship, Rejection};
use crate::state::queue::{ReviewQueue, Reviewable, Verdict};
use crate::util::auth::surface_error;
use crate::util::timers::{ADMIN_BANNER_TTL, expire_banner};

type Queue = ReviewQueue<Internship>;

fn decide(state: RwSignal<Queue>) {
    let Some((internship, verdict)) = state.try_update(Queue::begin).flatten() else {
        return;
    };
    let reason = state.with_untracked(|s| s.note.trim().to_owned());
    leptos::task::spawn_local(async move {
        let result = match verdict {
            Verdict::Approve => api::approve_internship(internship.id).await,
            Verdict::Reject => api::reject_internship(internship.id, &Rejection { reason }).await,
        };
        match result {
            Ok(_) => {
                if let Some(seq) = state.try_update(|s| s.resolved(&internship, verdict)) {
                    expire_banner(state, ADMIN_BANNER_TTL, seq, |s| &mut s.banner);
                }
            }
            Err(e) => surface_error(&e, Internship::failure_message(verdict), move |m| {
                state.update(|s| s.failed(m));
            }),
        }
    });
}

#[component]
pub fn PendingInternshipsPage() -> impl IntoView {
    let state = RwSignal::new(Queue::default());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::pending_internships().await {
                Ok(items) => state.update(|s| s.loaded(Ok(items))),
                Err(e) => surface_error(&e, "Failed to load pending internships", move |m| {
                    state.update(|s| s.loaded(Err(m)));
                }),
            }
        });
    });

    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let success = Signal::derive(move || state.with(|s| s.banner.message().map(str::to_owned)));

    let row = move |internship: Internship| {
        let id = internship.id;
        let busy = move || state.with(|s| s.is_busy(id));
        let approve_target = internship.clone();
        let reject_target = internship.clone();
        view! {
            <div class="internship-card">
                <div class="card-header">
                    <div>
                        <h3>{internship.title.clone()}</h3>
                        <p class="company"><i class="fas fa-building"></i>" "{internship.company_name.clone()}</p>
                    </div>
                    <span class="type-badge">{internship.type_display.clone().unwrap_or_default()}</span>
                </div>
                <div class="card-body">
                    <div class="info-grid">
                        <div class="info-item">
                            <span class="info-label">"Student"</span>
                            <span class="info-value">{internship.student_name.clone().unwrap_or_default()}</span>
                        </div>
                        <div class="info-item">
                            <span class="info-label">"Start"</span>
                            <span class="info-value">{internship.start_date.clone().unwrap_or_default()}</span>
                        </div>
                        <div class="info-item">
                            <span class="info-label">"End"</span>
                            <span class="info-value">{internship.end_date.clone().unwrap_or_default()}</span>
                        </div>
                    </div>
                    {internship.description.clone().map(|text| view! { <p class="description">{text}</p> })}
                    {internship.cahier_de_charges.clone().map(|path| view! {
                        <a class="document-link" href=api::media_url(&path) target="_blank" rel="noopener noreferrer">
                            <i class="fas fa-file-pdf"></i>" View Cahier de Charges"
                        </a>
                    })}
                </div>
                <div class="card-actions">
                    <button
                        class="btn btn-approve"
                        disabled=busy
                        on:click=move |_| {
                            let target = approve_target.clone();
                            state.update(|s| s.confirm(target, Verdict::Approve));
                        }
                    >
                        <i class="fas fa-check"></i>" Approve"
                    </button>
                    <button
                        class="btn btn-reject"
                        disabled=busy
                        on:click=move |_| {
                            let target = reject_target.clone();
                            state.update(|s| s.confirm(target, Verdict::Reject));
                        }
                    >
                        <i class="fas fa-times"></i>" Reject"
                    </button>
                </div>
            </div>
        }
    };

    let confirm_dialog = move || {
        state.with(|s| s.confirming.clone()).map(|(internship, verdict)| {
            let (title, label) = match verdict {
                Verdict::Approve => ("Approve Internship", "Approve"),
                Verdict::Reject => ("Reject Internship", "Reject"),
            };
            view! {
                <ConfirmModal
                    title=title
                    confirm_label=label.to_owned()
                    danger=verdict == Verdict::Reject
                    busy=Signal::derive(move || state.with(|s| s.in_flight.is_some()))
                    on_confirm=Callback::new(move |()| decide(state))
                    on_cancel=Callback::new(move |()| state.update(Queue::cancel))
                >
                    <div class="internship-summary">
                        <p><strong>"Student: "</strong>{internship.student_name.clone().unwrap_or_default()}</p>
                        <p><strong>"Title: "</strong>{internship.title.clone()}</p>
                        <p><strong>"Company: "</strong>{internship.company_name.clone()}</p>
                        <p><strong>"Type: "</strong>{internship.type_display.clone().unwrap_or_default()}</p>
                    </div>
                    {match verdict {
                        Verdict::Approve => view! {
                            <p class="confirm-message">"Are you sure you want to approve this internship?"</p>
                        }
                        .into_any(),
                        Verdict::Reject => view! {
                            <p class="confirm-message">"Are you sure you want to reject this internship?"</p>
                            <div class="form-group">
                                <label for="reason">"Reason (Optional)"</label>
                                <textarea
                                    id="reason"
                                    rows="3"
                                    placeholder="Provide a reason for rejection..."
                                    prop:value=move || state.with(|s| s.note.clone())
                                    on:input=move |ev| state.update(|s| s.note = event_target_value(&ev))
                                ></textarea>
                            </div>
                        }
                        .into_any(),
                    }}
                </ConfirmModal>
            }
        })
    };

    view! {
        <div class="pending-internships-container">
            <div class="page-header">
                <div>
                    <h1><i class="fas fa-clock"></i>" Pending Internships"</h1>
                    <p>"Review and manage internship requests"</p>
                </div>
                <div class="stats-badge">
                    <span class="count">{move || state.with(|s| s.items.len())}</span>
                    <span class="label">"Pending"</span>
                </div>
            </div>
            <Alert kind=AlertKind::Error message=error/>
            <Alert kind=AlertKind::Success message=success/>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <div class="loading-spinner"><p>"Loading pending internships..."</p></div> }
            >
                {move || {
                    let items = state.with(|s| s.items.clone());
                    if items.is_empty() {
                        view! {
                            <div class="empty-state">
                                <i class="fas fa-check-circle"></i>
                                <h3>"No Pending Internships"</h3>
                                <p>"All internships have been reviewed"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! { <div class="internships-grid">{items.into_iter().map(row).collect_view()}</div> }.into_any()
                    }
                }}
            </Show>
            {confirm_dialog}
        </div>
    }
}
