//! Archived-report filtering.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use crate::net::types::Report;

/// Status shown for reports without one.
pub const DEFAULT_REPORT_STATUS: &str = "archived";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
    Archived,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [Self::All, Self::Completed, Self::Pending, Self::Archived];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Archived => "archived",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Archived => "Archived",
        }
    }

    /// Unknown select values fall back to `All`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.value() == value).unwrap_or_default()
    }

    fn admits(self, report: &Report) -> bool {
        match self {
            Self::All => true,
            other => report_status(report) == other.value(),
        }
    }
}

#[must_use]
pub fn report_status(report: &Report) -> &str {
    report.status.as_deref().filter(|s| !s.is_empty()).unwrap_or(DEFAULT_REPORT_STATUS)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl ReportFilter {
    /// Case-insensitive name search. Unnamed reports only match an empty search.
    #[must_use]
    pub fn admits(&self, report: &Report) -> bool {
        let term = self.search.trim().to_lowercase();
        let name_ok = term.is_empty()
            || report.name.as_deref().is_some_and(|name| name.to_lowercase().contains(&term));
        name_ok && self.status.admits(report)
    }

    #[must_use]
    pub fn apply(&self, reports: &[Report]) -> Vec<Report> {
        reports.iter().filter(|r| self.admits(r)).cloned().collect()
    }
}
