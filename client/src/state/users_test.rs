use super::*;

fn record(id: i64) -> UserRecord {
    UserRecord {
        id,
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        first_name: "Lina".to_owned(),
        role: Some(1),
        is_active: true,
        ..UserRecord::default()
    }
}

#[test]
fn status_filter_round_trips_select_values() {
    assert_eq!(parse_status_filter("active"), Some(true));
    assert_eq!(parse_status_filter("inactive"), Some(false));
    assert_eq!(parse_status_filter(""), None);
    assert_eq!(status_filter_value(parse_status_filter("inactive")), "inactive");
}

#[test]
fn opening_edit_prefills_draft_without_password() {
    let mut state = UserManagementState::default();
    state.draft.password = "leftover".to_owned();
    state.open(UserDialog::Edit(record(4)));
    assert_eq!(state.draft.username, "user4");
    assert_eq!(state.draft.role, "1");
    assert!(state.draft.password.is_empty());
}

#[test]
fn opening_create_resets_draft() {
    let mut state = UserManagementState::default();
    state.open(UserDialog::Edit(record(4)));
    state.open(UserDialog::Create);
    assert_eq!(state.draft, UserDraft::default());
    assert!(state.dialog.as_ref().and_then(UserDialog::target).is_none());
}

#[test]
fn begin_blocks_concurrent_actions() {
    let mut state = UserManagementState::default();
    assert!(state.begin());
    assert!(!state.begin());
    state.failed("Failed to delete user".to_owned());
    assert!(state.begin());
}

#[test]
fn success_closes_dialog_and_shows_banner() {
    let mut state = UserManagementState::default();
    state.open(UserDialog::Delete(record(2)));
    state.begin();
    state.succeeded("User deleted successfully!".to_owned());
    assert!(state.dialog.is_none());
    assert!(!state.busy);
    assert_eq!(state.banner.message(), Some("User deleted successfully!"));
}

#[test]
fn failure_keeps_dialog_open() {
    let mut state = UserManagementState::default();
    state.open(UserDialog::ResetPassword(record(2)));
    state.begin();
    state.failed("new_password: too short".to_owned());
    assert!(matches!(state.dialog, Some(UserDialog::ResetPassword(_))));
}

#[test]
fn role_name_lookup() {
    let state = UserManagementState {
        roles: vec![RoleOption { id: 1, name: "Student".to_owned() }],
        ..UserManagementState::default()
    };
    assert_eq!(state.role_name(1), Some("Student"));
    assert_eq!(state.role_name(9), None);
}
