#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use serde::{Deserialize, Serialize};

use super::routes::Page;

/// Account role carried in the `role_name` claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Teacher,
    Administrator,
    Company,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Student, Role::Teacher, Role::Administrator, Role::Company];

    /// Wire name, identical to the claim value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
            Self::Administrator => "Administrator",
            Self::Company => "Company",
        }
    }

    /// Parse a claim value. Matching is exact; anything else is unrecognized.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == raw)
    }

    /// Default landing page for the role.
    #[must_use]
    pub fn home(self) -> Page {
        match self {
            Self::Student => Page::StudentDashboard,
            Self::Teacher => Page::TeacherDashboard,
            Self::Administrator => Page::AdminDashboard,
            Self::Company => Page::CompanyDashboard,
        }
    }

    /// CSS modifier used for role badges.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Student => "badge badge--student",
            Self::Teacher => "badge badge--teacher",
            Self::Administrator => "badge badge--admin",
            Self::Company => "badge badge--company",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
