use super::*;
use crate::net::types::{ApiMessage, TokenPair};

// =============================================================
// classify_failure
// =============================================================

#[test]
fn rejected_credential_is_unauthorized() {
    assert_eq!(classify_failure(401, ""), ApiError::Unauthorized { message: None });
    assert!(classify_failure(401, "{}").is_unauthorized());
}

#[test]
fn permission_refusal_keeps_the_session() {
    let err = classify_failure(403, r#"{"detail": "You do not have permission to perform this action."}"#);
    assert!(!err.is_unauthorized());
    assert!(!err.is_retryable());
    assert_eq!(err.user_message("fallback"), "You do not have permission to perform this action.");
    assert_eq!(classify_failure(403, ""), ApiError::Forbidden { message: None });
}

#[test]
fn unauthorized_keeps_server_message() {
    let err = classify_failure(401, r#"{"detail": "Given token not valid"}"#);
    assert_eq!(err.user_message("fallback"), "Given token not valid");
}

#[test]
fn bad_request_collects_field_errors() {
    let err = classify_failure(
        400,
        r#"{"email": ["Enter a valid email address."], "username": ["already exists", "too short"]}"#,
    );
    let ApiError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.message, None);
    assert_eq!(errors.field("username"), Some(&["already exists".to_owned(), "too short".to_owned()][..]));
    assert_eq!(
        errors.to_string(),
        "email: Enter a valid email address.\nusername: already exists, too short"
    );
}

#[test]
fn unprocessable_entity_is_validation() {
    assert!(matches!(classify_failure(422, r#"{"x": "bad"}"#), ApiError::Validation(_)));
}

#[test]
fn message_keys_become_general_message() {
    let errors = ValidationErrors::from_body(r#"{"error": "Dates overlap", "title": "required"}"#);
    assert_eq!(errors.message.as_deref(), Some("Dates overlap"));
    assert_eq!(errors.field("title"), Some(&["required".to_owned()][..]));
    assert_eq!(errors.field("error"), None);
}

#[test]
fn non_object_validation_body_is_empty() {
    let errors = ValidationErrors::from_body("<html>Bad Request</html>");
    assert!(errors.is_empty());
    assert_eq!(errors.to_string(), "invalid request");
}

#[test]
fn not_found_and_server_statuses() {
    assert_eq!(classify_failure(404, ""), ApiError::NotFound);
    assert_eq!(
        classify_failure(500, r#"{"message": "boom"}"#),
        ApiError::Server { status: 500, message: Some("boom".to_owned()) }
    );
    assert_eq!(classify_failure(409, "conflict"), ApiError::Server { status: 409, message: None });
}

// =============================================================
// Messages
// =============================================================

#[test]
fn summary_prefers_general_message_then_first_field() {
    let errors = ValidationErrors::from_body(r#"{"old_password": ["Wrong password."]}"#);
    assert_eq!(errors.summary().as_deref(), Some("Wrong password."));
    let errors = ValidationErrors::from_body(r#"{"message": "Nope", "old_password": ["Wrong password."]}"#);
    assert_eq!(errors.summary().as_deref(), Some("Nope"));
}

#[test]
fn user_message_falls_back() {
    assert_eq!(ApiError::NotFound.user_message("Failed to load"), "Failed to load");
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message("Failed"), "Failed");
    assert_eq!(
        ApiError::Validation(ValidationErrors::default()).user_message("Failed"),
        "Failed"
    );
}

#[test]
fn detailed_message_lists_fields() {
    let err = classify_failure(400, r#"{"password": ["too common"], "phone": "invalid"}"#);
    assert_eq!(err.detailed_message("Failed"), "password: too common\nphone: invalid");
    assert_eq!(ApiError::NotFound.detailed_message("Failed"), "Failed");
}

#[test]
fn retryable_only_for_transport_and_5xx() {
    assert!(ApiError::Transport("reset".to_owned()).is_retryable());
    assert!(ApiError::Server { status: 503, message: None }.is_retryable());
    assert!(!ApiError::Server { status: 409, message: None }.is_retryable());
    assert!(!ApiError::Unauthorized { message: None }.is_retryable());
    assert!(!ApiError::NotFound.is_retryable());
}

// =============================================================
// decode_success
// =============================================================

#[test]
fn decode_success_parses_typed_body() {
    let pair: TokenPair = decode_success(r#"{"access": "a.b.c", "refresh": "r"}"#).unwrap();
    assert_eq!(pair.access, "a.b.c");
}

#[test]
fn empty_body_decodes_as_null() {
    let message: Option<ApiMessage> = decode_success("").unwrap();
    assert_eq!(message, None);
    assert!(decode_success::<()>("  ").is_ok());
}

#[test]
fn empty_body_acknowledges_without_message() {
    let ack: ApiMessage = decode_success("").unwrap();
    assert_eq!(ack.or("User deleted successfully!"), "User deleted successfully!");
}

#[test]
fn mismatched_body_is_transport_error() {
    let err = decode_success::<TokenPair>(r#"{"access": 1}"#).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn error_key_wins_over_detail() {
    let errors = ValidationErrors::from_body(r#"{"detail": "second", "error": "first"}"#);
    assert_eq!(errors.message.as_deref(), Some("first"));
    assert!(errors.fields.is_empty());
}
