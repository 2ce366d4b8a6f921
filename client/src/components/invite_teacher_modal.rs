//! Dialog for inviting a supervising teacher to an approved internship.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::net::api;
use crate::net::types::{Internship, NewInvitation, Teacher};
use crate::util::auth::surface_error;
use crate::util::forms::check_invitation;
use crate::util::timers::{MODAL_CLOSE_DELAY, after};

#[component]
pub fn InviteTeacherModal(internship: Internship, on_close: Callback<()>, on_success: Callback<()>) -> impl IntoView {
    let teachers = RwSignal::new(Vec::<Teacher>::new());
    let fetching = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<i64>);
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::teachers().await {
            Ok(list) => teachers.set(list),
            Err(e) => surface_error(&e, "Failed to load teachers", move |m| error.set(Some(m))),
        }
        fetching.set(false);
    });

    let internship_id = internship.id;
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let teacher = match check_invitation(selected.get_untracked()) {
            Ok(id) => id,
            Err(m) => {
                error.set(Some(m.to_owned()));
                return;
            }
        };
        let invitation = NewInvitation { internship: internship_id, teacher, message: message.get_untracked() };
        busy.set(true);
        error.set(None);
        success.set(None);
        leptos::task::spawn_local(async move {
            match api::invite_teacher(&invitation).await {
                Ok(_) => {
                    success.set(Some("Invitation sent successfully!".to_owned()));
                    after(MODAL_CLOSE_DELAY, move || on_success.run(()));
                }
                Err(e) => surface_error(&e, "Failed to send invitation. Please try again.", move |m| {
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

    let visible_teachers = move || {
        let term = search.get();
        teachers.with(|all| all.iter().filter(|t| t.matches(&term)).cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="modal-overlay" on:click=move |_| close()>
            <div class="modal-content large" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2><i class="fas fa-paper-plane"></i>" Invite Teacher"</h2>
                    <button class="modal-close" on:click=move |_| close()>
                        <i class="fas fa-times"></i>
                    </button>
                </div>

                <Alert kind=AlertKind::Error message=error/>
                <Alert kind=AlertKind::Success message=success/>

                <div class="internship-info">
                    <h3>{internship.title.clone()}</h3>
                    <p><i class="fas fa-building"></i>" "{internship.company_name.clone()}</p>
                </div>

                <Show
                    when=move || !fetching.get()
                    fallback=|| view! { <div class="loading-state"><p>"Loading teachers..."</p></div> }
                >
                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="teacher-search">"Search Teacher"</label>
                            <input
                                id="teacher-search"
                                type="text"
                                placeholder="Search by name or email..."
                                prop:value=move || search.get()
                                on:input=move |ev| search.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="teachers-list">
                            {move || {
                                let list = visible_teachers();
                                if list.is_empty() {
                                    return view! { <p class="no-teachers">"No teachers found"</p> }.into_any();
                                }
                                list.into_iter()
                                    .map(|teacher| {
                                        let id = teacher.id;
                                        view! {
                                            <div
                                                class=move || {
                                                    if selected.get() == Some(id) { "teacher-card selected" } else { "teacher-card" }
                                                }
                                                on:click=move |_| {
                                                    selected.set(Some(id));
                                                    error.set(None);
                                                }
                                            >
                                                <h4>{teacher.full_name.clone().unwrap_or_default()}</h4>
                                                <p>{teacher.email.clone().unwrap_or_default()}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </div>
                        <div class="form-group">
                            <label for="invite-message">"Message (Optional)"</label>
                            <textarea
                                id="invite-message"
                                rows="3"
                                placeholder="Add a personal message to the teacher..."
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" disabled=move || busy.get() on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || busy.get() || selected.get().is_none()
                            >
                                {move || if busy.get() { "Sending..." } else { "Send Invitation" }}
                            </button>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}
