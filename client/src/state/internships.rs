//! Student internship list state.

#[cfg(test)]
#[path = "internships_test.rs"]
mod internships_test;

use crate::net::types::Internship;

#[derive(Clone, Debug)]
pub struct MyInternshipsState {
    pub items: Vec<Internship>,
    pub loading: bool,
    pub error: Option<String>,
    pub expanded: Option<i64>,
    pub adding: bool,
    /// Internship whose invite-teacher dialog is open.
    pub inviting: Option<Internship>,
}

impl Default for MyInternshipsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, expanded: None, adding: false, inviting: None }
    }
}

impl MyInternshipsState {
    pub fn reload(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, result: Result<Vec<Internship>, String>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
    }

    pub fn toggle(&mut self, id: i64) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }

    /// Open the invite dialog, only for internships that accept one.
    pub fn invite(&mut self, internship: &Internship) -> bool {
        if !internship.can_invite_teacher() {
            return false;
        }
        self.inviting = Some(internship.clone());
        true
    }

    /// A dialog finished successfully; close both and refetch.
    pub fn dialog_succeeded(&mut self) {
        self.adding = false;
        self.inviting = None;
        self.reload();
    }
}
