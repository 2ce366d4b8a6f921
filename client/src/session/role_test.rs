use super::*;

#[test]
fn parse_accepts_every_wire_name() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn parse_is_case_sensitive() {
    assert_eq!(Role::parse("student"), None);
    assert_eq!(Role::parse("ADMINISTRATOR"), None);
}

#[test]
fn parse_rejects_unknown_roles() {
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn home_routes_match_role_dashboards() {
    assert_eq!(Role::Student.home().path(), "/student-dashboard");
    assert_eq!(Role::Teacher.home().path(), "/teacher-dashboard");
    assert_eq!(Role::Administrator.home().path(), "/admin-dashboard");
    assert_eq!(Role::Company.home().path(), "/company-dashboard");
}

#[test]
fn every_home_route_admits_its_own_role() {
    for role in Role::ALL {
        let required = role.home().required_roles().unwrap_or_default();
        assert!(required.contains(&role), "{role} cannot open its own home page");
    }
}

#[test]
fn display_uses_wire_name() {
    assert_eq!(Role::Administrator.to_string(), "Administrator");
}
