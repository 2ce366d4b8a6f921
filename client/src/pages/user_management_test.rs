use super::*;

#[test]
fn current_query_follows_the_filters() {
    let state = RwSignal::new(UserManagementState::default());
    assert_eq!(current_query(state), Some(UserQuery::default()));
    state.update(|s| s.query.search = "ana".into());
    assert_eq!(current_query(state).map(|q| q.search), Some("ana".to_owned()));
}

#[test]
fn left_page_has_no_query() {
    let state = RwSignal::new(UserManagementState::default());
    state.dispose();
    assert_eq!(current_query(state), None);
}

#[test]
fn dialog_closed_tracks_the_open_dialog() {
    let state = RwSignal::new(UserManagementState::default());
    assert!(dialog_closed(state));
    state.update(|s| s.open(UserDialog::Create));
    assert!(!dialog_closed(state));
}

#[test]
fn left_page_keeps_the_picture() {
    let state = RwSignal::new(UserManagementState::default());
    state.dispose();
    assert!(!dialog_closed(state));
}
