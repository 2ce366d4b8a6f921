use super::*;

#[test]
fn show_then_expire_clears() {
    let mut banner = Banner::default();
    let seq = banner.show("Saved");
    assert_eq!(banner.message(), Some("Saved"));
    assert!(banner.expire(seq));
    assert_eq!(banner.message(), None);
}

#[test]
fn stale_expiry_keeps_newer_message() {
    let mut banner = Banner::default();
    let first = banner.show("Invitation declined.");
    let second = banner.show("Invitation accepted!");
    assert!(!banner.expire(first));
    assert_eq!(banner.message(), Some("Invitation accepted!"));
    assert!(banner.expire(second));
}

#[test]
fn expire_after_manual_clear_is_noop() {
    let mut banner = Banner::default();
    let seq = banner.show("x");
    banner.clear();
    assert!(!banner.expire(seq));
}
