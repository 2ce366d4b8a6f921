use super::*;

#[test]
fn welcome_uses_display_name() {
    assert_eq!(welcome(Some("jdoe")), "Welcome back, jdoe!");
    assert_eq!(welcome(Some("  ana ")), "Welcome back, ana!");
}

#[test]
fn welcome_without_name() {
    assert_eq!(welcome(None), "Welcome back!");
    assert_eq!(welcome(Some("   ")), "Welcome back!");
}

#[test]
fn percent_rounds_down_and_handles_empty_totals() {
    assert_eq!(percent(0, 0), 0);
    assert_eq!(percent(3, 4), 75);
    assert_eq!(percent(2, 3), 66);
    assert_eq!(percent(5, 5), 100);
}
