//! Teacher queue of supervision requests.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::confirm_modal::ConfirmModal;
use crate::net::api;
use crate::net::types::Invitation;
use crate::state::queue::{ReviewQueue, Reviewable, Verdict, pending_invitations};
use crate::util::auth::surface_error;
use crate::util::timers::{INVITATION_BANNER_TTL, expire_banner};

type Queue = ReviewQueue<Invitation>;

fn respond(state: RwSignal<Queue>) {
    let Some((invitation, verdict)) = state.try_update(Queue::begin).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        match api::respond_to_invitation(invitation.id, verdict.invitation_status()).await {
            Ok(_) => {
                if let Some(seq) = state.try_update(|s| s.resolved(&invitation, verdict)) {
                    expire_banner(state, INVITATION_BANNER_TTL, seq, |s| &mut s.banner);
                }
            }
            Err(e) => surface_error(&e, Invitation::failure_message(verdict), move |m| {
                state.update(|s| s.failed(m));
            }),
        }
    });
}

#[component]
pub fn PendingInvitationsPage() -> impl IntoView {
    let state = RwSignal::new(Queue::default());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::teacher_invitations().await {
                Ok(all) => state.update(|s| s.loaded(Ok(pending_invitations(all)))),
                Err(e) => surface_error(&e, "Failed to load invitations", move |m| {
                    state.update(|s| s.loaded(Err(m)));
                }),
            }
        });
    });

    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let success = Signal::derive(move || state.with(|s| s.banner.message().map(str::to_owned)));
    let count = move || state.with(|s| s.items.len());

    let card = move |invitation: Invitation| {
        let id = invitation.id;
        let status = invitation.status;
        let expanded = move || state.with(|s| s.expanded == Some(id));
        let busy = move || state.with(|s| s.is_busy(id));
        let accept_target = invitation.clone();
        let decline_target = invitation.clone();
        view! {
            <div class=move || if expanded() { "invitation-card expanded" } else { "invitation-card" }>
                <div class="card-header" on:click=move |_| state.update(|s| s.toggle(id))>
                    <div class="header-left">
                        <h3>{invitation.internship_title.clone()}</h3>
                        <div class="student-info">
                            <i class="fas fa-user"></i>
                            <span>"From: "{invitation.student_name.clone()}</span>
                        </div>
                    </div>
                    <span class=format!("status-badge {}", status.css_class())>{status.label()}</span>
                </div>
                <Show when=expanded>
                    <div class="card-body">
                        {invitation.message.clone().filter(|m| !m.is_empty()).map(|message| view! {
                            <div class="message-section">
                                <h4><i class="fas fa-comment"></i>" Message from Student"</h4>
                                <p class="message-text">{message}</p>
                            </div>
                        })}
                        <div class="info-grid">
                            <div class="info-item">
                                <span class="info-label">"Student"</span>
                                <span class="info-value">{invitation.student_name.clone()}</span>
                            </div>
                            <div class="info-item">
                                <span class="info-label">"Received On"</span>
                                <span class="info-value">{invitation.created_at.clone().unwrap_or_default()}</span>
                            </div>
                        </div>
                        <div class="card-actions">
                            <button
                                class="btn btn-accept"
                                disabled=busy
                                on:click={
                                    let target = accept_target.clone();
                                    move |ev| {
                                        ev.stop_propagation();
                                        let target = target.clone();
                                        state.update(|s| s.confirm(target, Verdict::Approve));
                                    }
                                }
                            >
                                <i class="fas fa-check"></i>" Accept Invitation"
                            </button>
                            <button
                                class="btn btn-decline"
                                disabled=busy
                                on:click={
                                    let target = decline_target.clone();
                                    move |ev| {
                                        ev.stop_propagation();
                                        let target = target.clone();
                                        state.update(|s| s.confirm(target, Verdict::Reject));
                                    }
                                }
                            >
                                <i class="fas fa-times"></i>" Decline"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        }
    };

    let confirm_dialog = move || {
        state.with(|s| s.confirming.clone()).map(|(invitation, verdict)| {
            let (title, label, text) = match verdict {
                Verdict::Approve => (
                    "Accept Invitation",
                    "Accept",
                    "By accepting this invitation, you agree to supervise this student's internship.",
                ),
                Verdict::Reject => (
                    "Decline Invitation",
                    "Decline",
                    "Are you sure you want to decline this supervision request?",
                ),
            };
            view! {
                <ConfirmModal
                    title=title
                    confirm_label=label.to_owned()
                    danger=verdict == Verdict::Reject
                    busy=Signal::derive(move || state.with(|s| s.in_flight.is_some()))
                    on_confirm=Callback::new(move |()| respond(state))
                    on_cancel=Callback::new(move |()| state.update(Queue::cancel))
                >
                    <div class="invitation-summary">
                        <p><strong>"Student: "</strong>{invitation.student_name.clone()}</p>
                        <p><strong>"Internship: "</strong>{invitation.internship_title.clone()}</p>
                    </div>
                    <p class="confirm-message">{text}</p>
                </ConfirmModal>
            }
        })
    };

    view! {
        <div class="pending-invitations-container">
            <div class="page-header">
                <div>
                    <h1><i class="fas fa-envelope"></i>" Pending Invitations"</h1>
                    <p>"Review internship supervision requests from students"</p>
                </div>
                <div class="stats-badge">
                    <span class="count">{count}</span>
                    <span class="label">"Pending"</span>
                </div>
            </div>
            <Alert kind=AlertKind::Error message=error/>
            <Alert kind=AlertKind::Success message=success/>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <div class="loading-spinner"><p>"Loading invitations..."</p></div> }
            >
                {move || {
                    let items = state.with(|s| s.items.clone());
                    if items.is_empty() {
                        view! {
                            <div class="empty-state">
                                <i class="fas fa-inbox"></i>
                                <h3>"No Pending Invitations"</h3>
                                <p>"You don't have any pending supervision requests at the moment"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! { <div class="invitations-grid">{items.into_iter().map(card).collect_view()}</div> }.into_any()
                    }
                }}
            </Show>
            {confirm_dialog}
        </div>
    }
}
