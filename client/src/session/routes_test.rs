use super::*;

#[test]
fn entry_point_is_the_only_public_page() {
    for page in Page::ALL {
        if page == Page::Login {
            assert!(page.required_roles().is_none());
        } else {
            let roles = page.required_roles().unwrap_or_default();
            assert!(!roles.is_empty(), "{page:?} has no required roles");
        }
    }
}

#[test]
fn paths_are_unique() {
    for (i, a) in Page::ALL.iter().enumerate() {
        for (j, b) in Page::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.path(), b.path());
            }
        }
    }
}

#[test]
fn from_path_inverts_path() {
    for page in Page::ALL {
        assert_eq!(Page::from_path(page.path()), Some(page));
    }
}

#[test]
fn from_path_tolerates_trailing_slash() {
    assert_eq!(Page::from_path("/profile/"), Some(Page::Profile));
    assert_eq!(Page::from_path("/"), Some(Page::Login));
}

#[test]
fn from_path_rejects_unknown_paths() {
    assert_eq!(Page::from_path("/nowhere"), None);
    assert_eq!(Page::from_path(""), None);
}

#[test]
fn segment_strips_leading_slash() {
    assert_eq!(Page::UserManagement.segment(), "user-management");
    assert_eq!(Page::Login.segment(), "");
}

#[test]
fn required_roles_by_path() {
    assert_eq!(required_roles("/pending-invitations"), Some(&[Role::Teacher][..]));
    assert_eq!(
        required_roles("/profile"),
        Some(&[Role::Administrator, Role::Teacher, Role::Student][..])
    );
    assert_eq!(required_roles("/"), None);
    assert_eq!(required_roles("/unknown"), None);
}

#[test]
fn company_cannot_open_shared_academic_pages() {
    for page in [Page::Profile, Page::ArchivedReports] {
        let roles = page.required_roles().unwrap_or_default();
        assert!(!roles.contains(&Role::Company));
    }
}

#[test]
fn is_entry_point_only_for_login() {
    assert!(is_entry_point("/"));
    assert!(!is_entry_point("/profile"));
    assert!(!is_entry_point("/unknown"));
}

#[test]
fn sidebar_links_are_reachable_by_their_role() {
    for role in Role::ALL {
        for item in sidebar(role) {
            let roles = item.page.required_roles().unwrap_or_default();
            assert!(roles.contains(&role), "{role} sidebar links to {:?}", item.page);
        }
    }
}

#[test]
fn sidebar_starts_with_home_dashboard() {
    for role in Role::ALL {
        assert_eq!(sidebar(role).first().map(|item| item.page), Some(role.home()));
    }
}
