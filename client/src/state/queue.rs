//! Approve/decline work queues.
//!
//! DESIGN
//! ======
//! Pending internships (administrator) and pending invitations (teacher)
//! share one shape: a list, a confirm dialog for one row, and at most one
//! request in flight. `begin` is the guard; it refuses while a row is busy.

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

use super::banner::Banner;
use crate::net::types::{Internship, Invitation, InvitationStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Approve,
    Reject,
}

/// A row that can be approved or declined.
pub trait Reviewable: Clone {
    fn key(&self) -> i64;
    fn outcome_message(&self, verdict: Verdict) -> String;
    fn failure_message(verdict: Verdict) -> &'static str;
}

impl Reviewable for Internship {
    fn key(&self) -> i64 {
        self.id
    }

    fn outcome_message(&self, verdict: Verdict) -> String {
        match verdict {
            Verdict::Approve => format!("Internship \"{}\" approved successfully!", self.title),
            Verdict::Reject => format!("Internship \"{}\" rejected.", self.title),
        }
    }

    fn failure_message(verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Approve => "Failed to approve internship",
            Verdict::Reject => "Failed to reject internship",
        }
    }
}

impl Reviewable for Invitation {
    fn key(&self) -> i64 {
        self.id
    }

    fn outcome_message(&self, verdict: Verdict) -> String {
        match verdict {
            Verdict::Approve => {
                format!("Invitation accepted! You are now supervising \"{}\"", self.internship_title)
            }
            Verdict::Reject => "Invitation declined.".to_owned(),
        }
    }

    fn failure_message(verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Approve => "Failed to accept invitation",
            Verdict::Reject => "Failed to reject invitation",
        }
    }
}

impl Verdict {
    /// Wire status sent when a teacher answers an invitation.
    #[must_use]
    pub fn invitation_status(self) -> InvitationStatus {
        match self {
            Self::Approve => InvitationStatus::Accepted,
            Self::Reject => InvitationStatus::Rejected,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ReviewQueue<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub banner: Banner,
    /// Key of the row whose request is running.
    pub in_flight: Option<i64>,
    /// Row awaiting confirmation.
    pub confirming: Option<(T, Verdict)>,
    /// Optional note sent with a rejection.
    pub note: String,
    pub expanded: Option<i64>,
}

impl<T> Default for ReviewQueue<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            banner: Banner::default(),
            in_flight: None,
            confirming: None,
            note: String::new(),
            expanded: None,
        }
    }
}

impl<T: Reviewable> ReviewQueue<T> {
    pub fn loaded(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    pub fn confirm(&mut self, item: T, verdict: Verdict) {
        self.confirming = Some((item, verdict));
        self.note.clear();
    }

    pub fn cancel(&mut self) {
        self.confirming = None;
        self.note.clear();
    }

    /// Claim the confirmed row for a request. `None` while another is running.
    pub fn begin(&mut self) -> Option<(T, Verdict)> {
        if self.in_flight.is_some() {
            return None;
        }
        let (item, verdict) = self.confirming.clone()?;
        self.in_flight = Some(item.key());
        self.error = None;
        self.banner.clear();
        Some((item, verdict))
    }

    /// Drop the row and show its outcome. Returns the banner sequence.
    pub fn resolved(&mut self, item: &T, verdict: Verdict) -> u64 {
        let key = item.key();
        self.items.retain(|row| row.key() != key);
        self.in_flight = None;
        self.cancel();
        self.banner.show(item.outcome_message(verdict))
    }

    pub fn failed(&mut self, message: String) {
        self.in_flight = None;
        self.error = Some(message);
    }

    #[must_use]
    pub fn is_busy(&self, key: i64) -> bool {
        self.in_flight == Some(key)
    }

    pub fn toggle(&mut self, key: i64) {
        self.expanded = if self.expanded == Some(key) { None } else { Some(key) };
    }
}

/// Only invitations still awaiting an answer.
#[must_use]
pub fn pending_invitations(all: Vec<Invitation>) -> Vec<Invitation> {
    all.into_iter().filter(|inv| inv.status == InvitationStatus::Pending).collect()
}
