use super::*;
use crate::net::types::InternshipStatus;

// =============================================================
// Helpers
// =============================================================

fn internship(id: i64, title: &str) -> Internship {
    Internship {
        id,
        title: title.to_owned(),
        company_name: "Acme".to_owned(),
        type_display: None,
        start_date: None,
        end_date: None,
        description: None,
        status: InternshipStatus::PendingApproval,
        student_name: Some("Sami".to_owned()),
        teacher_id: None,
        teacher_name: None,
        cahier_de_charges: None,
    }
}

fn invitation(id: i64, status: InvitationStatus) -> Invitation {
    Invitation {
        id,
        internship_title: format!("Internship {id}"),
        student_name: "Sami".to_owned(),
        message: None,
        status,
        created_at: None,
    }
}

fn loaded_queue() -> ReviewQueue<Internship> {
    let mut queue = ReviewQueue::default();
    queue.loaded(Ok(vec![internship(1, "Parser"), internship(2, "Linker")]));
    queue
}

// =============================================================
// Loading
// =============================================================

#[test]
fn starts_loading_and_settles() {
    let mut queue = ReviewQueue::<Internship>::default();
    assert!(queue.loading);
    queue.loaded(Err("Failed to load pending internships".to_owned()));
    assert!(!queue.loading);
    assert_eq!(queue.error.as_deref(), Some("Failed to load pending internships"));
}

#[test]
fn pending_filter_keeps_status_zero_only() {
    let all = vec![
        invitation(1, InvitationStatus::Pending),
        invitation(2, InvitationStatus::Accepted),
        invitation(3, InvitationStatus::Other(5)),
        invitation(4, InvitationStatus::Pending),
    ];
    let ids: Vec<i64> = pending_invitations(all).iter().map(|i| i.id).collect();
    assert_eq!(ids, [1, 4]);
}

// =============================================================
// Confirm / begin / resolve
// =============================================================

#[test]
fn begin_requires_confirmation() {
    let mut queue = loaded_queue();
    assert!(queue.begin().is_none());
}

#[test]
fn begin_guards_against_double_submit() {
    let mut queue = loaded_queue();
    queue.confirm(internship(1, "Parser"), Verdict::Approve);
    assert!(queue.begin().is_some());
    assert!(queue.is_busy(1));
    assert!(queue.begin().is_none());
}

#[test]
fn resolved_removes_row_and_sets_banner() {
    let mut queue = loaded_queue();
    let row = internship(1, "Parser");
    queue.confirm(row.clone(), Verdict::Approve);
    queue.begin();
    queue.resolved(&row, Verdict::Approve);
    assert_eq!(queue.items.len(), 1);
    assert_eq!(queue.in_flight, None);
    assert!(queue.confirming.is_none());
    assert_eq!(queue.banner.message(), Some("Internship \"Parser\" approved successfully!"));
}

#[test]
fn failure_keeps_row_and_dialog() {
    let mut queue = loaded_queue();
    let row = internship(2, "Linker");
    queue.confirm(row, Verdict::Reject);
    queue.note = "Out of scope".to_owned();
    queue.begin();
    queue.failed("Failed to reject internship".to_owned());
    assert_eq!(queue.items.len(), 2);
    assert!(queue.confirming.is_some());
    assert_eq!(queue.note, "Out of scope");
    assert!(!queue.is_busy(2));
}

#[test]
fn confirm_resets_note() {
    let mut queue = loaded_queue();
    queue.note = "stale".to_owned();
    queue.confirm(internship(1, "Parser"), Verdict::Reject);
    assert!(queue.note.is_empty());
}

#[test]
fn toggle_expands_one_row() {
    let mut queue = loaded_queue();
    queue.toggle(1);
    assert_eq!(queue.expanded, Some(1));
    queue.toggle(2);
    assert_eq!(queue.expanded, Some(2));
    queue.toggle(2);
    assert_eq!(queue.expanded, None);
}

// =============================================================
// Messages
// =============================================================

#[test]
fn invitation_messages() {
    let inv = invitation(7, InvitationStatus::Pending);
    assert_eq!(
        inv.outcome_message(Verdict::Approve),
        "Invitation accepted! You are now supervising \"Internship 7\""
    );
    assert_eq!(inv.outcome_message(Verdict::Reject), "Invitation declined.");
    assert_eq!(Invitation::failure_message(Verdict::Approve), "Failed to accept invitation");
}

#[test]
fn internship_rejection_message() {
    assert_eq!(internship(1, "Parser").outcome_message(Verdict::Reject), "Internship \"Parser\" rejected.");
    assert_eq!(Internship::failure_message(Verdict::Reject), "Failed to reject internship");
}

#[test]
fn verdict_maps_to_invitation_status() {
    assert_eq!(i64::from(Verdict::Approve.invitation_status()), 1);
    assert_eq!(i64::from(Verdict::Reject.invitation_status()), 2);
}
