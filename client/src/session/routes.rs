//! Static route table: every navigable page, its path, and who may open it.
//!
//! Only the entry point is public. The table is fixed at compile time and
//! never mutated.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use super::role::Role;

/// Unauthenticated landing route (login).
pub const ENTRY_POINT: &str = "/";

const STUDENT: &[Role] = &[Role::Student];
const TEACHER: &[Role] = &[Role::Teacher];
const ADMINISTRATOR: &[Role] = &[Role::Administrator];
const COMPANY: &[Role] = &[Role::Company];
const ACADEMIC: &[Role] = &[Role::Administrator, Role::Teacher, Role::Student];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    StudentDashboard,
    TeacherDashboard,
    PendingInvitations,
    CompanyDashboard,
    AdminDashboard,
    PendingInternships,
    UserManagement,
    ArchivedReports,
    Profile,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::Login,
        Page::StudentDashboard,
        Page::TeacherDashboard,
        Page::PendingInvitations,
        Page::CompanyDashboard,
        Page::AdminDashboard,
        Page::PendingInternships,
        Page::UserManagement,
        Page::ArchivedReports,
        Page::Profile,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => ENTRY_POINT,
            Self::StudentDashboard => "/student-dashboard",
            Self::TeacherDashboard => "/teacher-dashboard",
            Self::PendingInvitations => "/pending-invitations",
            Self::CompanyDashboard => "/company-dashboard",
            Self::AdminDashboard => "/admin-dashboard",
            Self::PendingInternships => "/pending-internships",
            Self::UserManagement => "/user-management",
            // Path spelling is part of the published URL set; keep it.
            Self::ArchivedReports => "/archieved-reports",
            Self::Profile => "/profile",
        }
    }

    /// Router segment: the path without its leading slash.
    #[must_use]
    pub fn segment(self) -> &'static str {
        &self.path()[1..]
    }

    /// Roles allowed to open the page, `None` for the public entry point.
    #[must_use]
    pub fn required_roles(self) -> Option<&'static [Role]> {
        match self {
            Self::Login => None,
            Self::StudentDashboard => Some(STUDENT),
            Self::TeacherDashboard | Self::PendingInvitations => Some(TEACHER),
            Self::CompanyDashboard => Some(COMPANY),
            Self::AdminDashboard | Self::PendingInternships | Self::UserManagement => Some(ADMINISTRATOR),
            Self::ArchivedReports | Self::Profile => Some(ACADEMIC),
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::StudentDashboard | Self::TeacherDashboard | Self::CompanyDashboard | Self::AdminDashboard => {
                "Dashboard"
            }
            Self::PendingInvitations => "Pending Invitations",
            Self::PendingInternships => "Pending Internships",
            Self::UserManagement => "User Management",
            Self::ArchivedReports => "Archived Reports",
            Self::Profile => "Profile",
        }
    }

    /// Look up a page by browser path. A single trailing slash is tolerated.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        Self::ALL.into_iter().find(|page| page.path() == normalized)
    }
}

/// Roles required by `path`, `None` when public or unknown.
#[must_use]
pub fn required_roles(path: &str) -> Option<&'static [Role]> {
    Page::from_path(path).and_then(Page::required_roles)
}

/// Whether `path` is the unauthenticated entry point.
#[must_use]
pub fn is_entry_point(path: &str) -> bool {
    Page::from_path(path) == Some(Page::Login)
}

/// Sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub page: Page,
}

const fn nav(title: &'static str, page: Page) -> NavItem {
    NavItem { title, page }
}

const STUDENT_NAV: &[NavItem] = &[
    nav("Dashboard", Page::StudentDashboard),
    nav("Archived Reports", Page::ArchivedReports),
    nav("Profile", Page::Profile),
];

const TEACHER_NAV: &[NavItem] = &[
    nav("Dashboard", Page::TeacherDashboard),
    nav("Archived Reports", Page::ArchivedReports),
    nav("Profile", Page::Profile),
    nav("Pending Invitations", Page::PendingInvitations),
];

const ADMINISTRATOR_NAV: &[NavItem] = &[
    nav("Dashboard", Page::AdminDashboard),
    nav("Archived Reports", Page::ArchivedReports),
    nav("Profile", Page::Profile),
    nav("Pending Internships", Page::PendingInternships),
    nav("User Management", Page::UserManagement),
];

const COMPANY_NAV: &[NavItem] = &[nav("Dashboard", Page::CompanyDashboard)];

/// Sidebar entries shown to `role`.
#[must_use]
pub fn sidebar(role: Role) -> &'static [NavItem] {
    match role {
        Role::Student => STUDENT_NAV,
        Role::Teacher => TEACHER_NAV,
        Role::Administrator => ADMINISTRATOR_NAV,
        Role::Company => COMPANY_NAV,
    }
}
