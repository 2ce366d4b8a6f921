use super::*;
use crate::net::error::ValidationErrors;
use crate::session::MemorySessionStore;

#[test]
fn unauthorized_ends_session() {
    let err = ApiError::Unauthorized { message: Some("Token expired".to_owned()) };
    assert_eq!(failure_for(&err, "Failed to load users"), Failure::SessionEnded);
}

#[test]
fn forbidden_shows_message_without_ending_session() {
    let err = ApiError::Forbidden { message: Some("Administrators only".to_owned()) };
    assert_eq!(failure_for(&err, "Failed to load users"), Failure::Show("Administrators only".to_owned()));
    let err = ApiError::Forbidden { message: None };
    assert_eq!(failure_for(&err, "Failed to load users"), Failure::Show("Failed to load users".to_owned()));
}

#[test]
fn other_errors_show_message_or_fallback() {
    assert_eq!(
        failure_for(&ApiError::NotFound, "Failed to load user details"),
        Failure::Show("Failed to load user details".to_owned())
    );
    let err = ApiError::Server { status: 500, message: Some("db down".to_owned()) };
    assert_eq!(failure_for(&err, "x"), Failure::Show("db down".to_owned()));
    let err = ApiError::Validation(ValidationErrors::from_body(r#"{"error": "Already invited"}"#));
    assert_eq!(failure_for(&err, "x"), Failure::Show("Already invited".to_owned()));
}

#[test]
fn end_session_clears_store() {
    let store = MemorySessionStore::new();
    store.set("a.b.c", "refresh");
    end_session(&store);
    assert!(store.is_empty());
}

#[test]
fn surface_error_passes_message_through() {
    let seen = std::cell::RefCell::new(None);
    surface_error(&ApiError::Transport("offline".to_owned()), "Failed to load reports", |m| {
        *seen.borrow_mut() = Some(m);
    });
    assert_eq!(seen.into_inner().as_deref(), Some("Failed to load reports"));
}

#[test]
fn surface_detailed_lists_every_field() {
    let seen = std::cell::RefCell::new(None);
    let err = ApiError::Validation(ValidationErrors::from_body(
        r#"{"username": ["already taken"], "email": ["invalid", "required"]}"#,
    ));
    surface_detailed(&err, "Failed to create user", |m| *seen.borrow_mut() = Some(m));
    assert_eq!(seen.into_inner().as_deref(), Some("email: invalid, required\nusername: already taken"));
}

#[test]
fn surface_detailed_falls_back_without_fields() {
    let seen = std::cell::RefCell::new(None);
    surface_detailed(&ApiError::NotFound, "Failed to delete user", |m| *seen.borrow_mut() = Some(m));
    assert_eq!(seen.into_inner().as_deref(), Some("Failed to delete user"));
}
