use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemorySessionStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get(), None);
    assert_eq!(store.refresh_token(), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemorySessionStore::new();
    store.set("access-1", "refresh-1");
    assert_eq!(store.get().as_deref(), Some("access-1"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
}

#[test]
fn memory_store_set_replaces_previous_tokens() {
    let store = MemorySessionStore::new();
    store.set("a1", "r1");
    store.set("a2", "r2");
    assert_eq!(store.get().as_deref(), Some("a2"));
    assert_eq!(store.refresh_token().as_deref(), Some("r2"));
}

#[test]
fn memory_store_clear_removes_both_tokens() {
    let store = MemorySessionStore::new();
    store.set("a", "r");
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemorySessionStore::with_access("a");
    store.clear();
    store.clear();
    assert!(store.is_empty());
}

#[test]
fn empty_token_reads_as_absent() {
    let store = MemorySessionStore::with_access("");
    assert_eq!(store.get(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_outside_browser() {
    let store = BrowserSessionStore;
    store.set("a", "r");
    assert_eq!(store.get(), None);
    assert_eq!(store.refresh_token(), None);
    store.clear();
}

#[test]
fn storage_keys_match_login_writes() {
    assert_eq!(ACCESS_TOKEN_KEY, "accessToken");
    assert_eq!(REFRESH_TOKEN_KEY, "refreshToken");
}
