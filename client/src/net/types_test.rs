use super::*;

// =============================================================
// Helpers
// =============================================================

fn internship_json(status: i64, teacher_id: Option<i64>) -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "title": "Compiler internship",
        "company_name": "Acme",
        "type_display": "PFE",
        "start_date": "2025-02-01",
        "end_date": "2025-07-31",
        "description": "Write a parser",
        "status": status,
        "teacher_id": teacher_id,
        "cahier_de_charges": "/media/docs/brief.pdf",
    })
}

fn user_record() -> UserRecord {
    UserRecord {
        id: 3,
        username: "amina".to_owned(),
        email: "amina@example.com".to_owned(),
        first_name: "Amina".to_owned(),
        last_name: "Ben".to_owned(),
        full_name: Some("Amina Ben".to_owned()),
        phone: None,
        role: Some(2),
        role_name: Some("Teacher".to_owned()),
        is_active: false,
        date_joined: None,
        profile_picture: None,
    }
}

// =============================================================
// Internship status
// =============================================================

#[test]
fn internship_status_codes_map_to_labels() {
    let labels: Vec<&str> = (0..=5).map(|c| InternshipStatus::from(c).label()).collect();
    assert_eq!(
        labels,
        ["Pending Admin Approval", "Approved", "Rejected", "In Progress", "Completed", "Unknown"]
    );
    assert_eq!(InternshipStatus::from(-1).css_class(), "status-unknown");
}

#[test]
fn internship_parses_and_keeps_unknown_code() {
    let internship: Internship = serde_json::from_value(internship_json(9, None)).unwrap();
    assert_eq!(internship.status, InternshipStatus::Unknown(9));
    assert_eq!(serde_json::to_value(internship.status).unwrap(), 9);
}

#[test]
fn invite_allowed_only_when_approved_without_teacher() {
    let approved: Internship = serde_json::from_value(internship_json(1, None)).unwrap();
    let supervised: Internship = serde_json::from_value(internship_json(1, Some(4))).unwrap();
    let pending: Internship = serde_json::from_value(internship_json(0, None)).unwrap();
    assert!(approved.can_invite_teacher());
    assert!(!supervised.can_invite_teacher());
    assert!(!pending.can_invite_teacher());
}

#[test]
fn sparse_internship_row_parses() {
    let internship: Internship =
        serde_json::from_value(serde_json::json!({ "id": 1, "title": "T", "status": 0 })).unwrap();
    assert_eq!(internship.company_name, "");
    assert_eq!(internship.cahier_de_charges, None);
}

#[test]
fn new_internship_fields_use_wire_names() {
    let draft = NewInternship {
        title: " Parser ".to_owned(),
        company_name: "Acme".to_owned(),
        start_date: "2025-02-01".to_owned(),
        end_date: "2025-03-01".to_owned(),
        description: "desc".to_owned(),
        ..NewInternship::default()
    };
    let fields = draft.form_fields();
    assert_eq!(fields[0], ("title", "Parser".to_owned()));
    assert!(fields.contains(&("type", "PFE".to_owned())));
    assert_eq!(fields.len(), 6);
}

// =============================================================
// Teachers and invitations
// =============================================================

#[test]
fn teacher_matches_name_or_email_case_insensitively() {
    let teacher = Teacher {
        id: 1,
        full_name: Some("Karim Haddad".to_owned()),
        email: Some("k.haddad@uni.tn".to_owned()),
        profile_picture: None,
    };
    assert!(teacher.matches("karim"));
    assert!(teacher.matches("UNI.TN"));
    assert!(teacher.matches("  "));
    assert!(!teacher.matches("sami"));
}

#[test]
fn teacher_without_name_or_email_only_matches_empty_term() {
    let teacher = Teacher { id: 1, full_name: None, email: None, profile_picture: None };
    assert!(teacher.matches(""));
    assert!(!teacher.matches("a"));
}

#[test]
fn invitation_status_unknown_renders_as_pending() {
    assert_eq!(InvitationStatus::from(1).label(), "Accepted");
    assert_eq!(InvitationStatus::from(2).css_class(), "status-rejected");
    assert_eq!(InvitationStatus::from(7).label(), "Pending");
    assert_ne!(InvitationStatus::from(7), InvitationStatus::Pending);
}

#[test]
fn invitation_response_serializes_code() {
    let body = serde_json::to_value(InvitationResponse { status: InvitationStatus::Accepted }).unwrap();
    assert_eq!(body, serde_json::json!({ "status": 1 }));
}

// =============================================================
// Users
// =============================================================

#[test]
fn user_display_name_falls_back_to_username() {
    let mut user = user_record();
    assert_eq!(user.display_name(), "Amina Ben");
    user.full_name = Some("  ".to_owned());
    assert_eq!(user.display_name(), "amina");
}

#[test]
fn edit_draft_never_sends_username_or_password() {
    let mut draft = UserDraft::from_record(&user_record());
    draft.password = "secret123".to_owned();
    let names: Vec<&str> = draft.update_fields().iter().map(|(k, _)| *k).collect();
    assert_eq!(names, ["email", "first_name", "last_name", "role", "is_active"]);
    assert!(draft.update_fields().contains(&("is_active", "false".to_owned())));
}

#[test]
fn create_draft_omits_blank_fields() {
    let draft = UserDraft {
        username: "new".to_owned(),
        email: "n@example.com".to_owned(),
        password: "pw123456".to_owned(),
        password_confirm: "pw123456".to_owned(),
        role: "1".to_owned(),
        ..UserDraft::default()
    };
    let names: Vec<&str> = draft.create_fields().iter().map(|(k, _)| *k).collect();
    assert_eq!(names, ["username", "email", "password", "password_confirm", "role", "is_active"]);
}

#[test]
fn stats_parse_role_breakdown() {
    let stats: UserStats = serde_json::from_value(serde_json::json!({
        "total_users": 10,
        "active_users": 8,
        "inactive_users": 2,
        "users_by_role": { "Student": 6, "Teacher": 3 },
    }))
    .unwrap();
    assert_eq!(stats.users_by_role.get("Student"), Some(&6));
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_display_name_and_initials() {
    let profile = UserProfile {
        username: "jdoe".to_owned(),
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        ..UserProfile::default()
    };
    assert_eq!(profile.display_name(), "Jane Doe");
    assert_eq!(profile.initials(), "JD");

    let bare = UserProfile { username: "jdoe".to_owned(), ..UserProfile::default() };
    assert_eq!(bare.display_name(), "jdoe");
    assert_eq!(bare.initials(), "J");
}

#[test]
fn profile_update_carries_contact_fields() {
    let profile = UserProfile { email: "a@b.c".to_owned(), phone: None, ..UserProfile::default() };
    let fields = profile.to_update().form_fields();
    assert!(fields.contains(&("email", "a@b.c".to_owned())));
    assert!(fields.contains(&("phone", String::new())));
}

#[test]
fn api_message_fallback() {
    assert_eq!(ApiMessage { message: Some("Done".to_owned()) }.or("x"), "Done");
    assert_eq!(ApiMessage::default().or("User deleted successfully!"), "User deleted successfully!");
}
