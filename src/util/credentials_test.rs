use super::*;
use crate::util::storage::MemoryStore;

fn ada() -> User {
    User { id: "u1".to_owned(), name: "Ada".to_owned(), email: "ada@example.com".to_owned() }
}

#[test]
fn persist_writes_token_and_serialized_user() {
    let store = MemoryStore::new();
    let credentials = CredentialStore::new(store.clone());
    credentials.persist("tok-1", &ada());

    assert_eq!(store.get_item(TOKEN_KEY).as_deref(), Some("tok-1"));
    let raw = store.get_item(USER_KEY).unwrap();
    assert!(raw.contains("\"email\":\"ada@example.com\""));
    assert_eq!(credentials.user(), Some(ada()));
    assert!(credentials.has_token());
}

#[test]
fn empty_token_counts_as_absent() {
    let store = MemoryStore::new();
    store.set_item(TOKEN_KEY, "");
    assert!(!CredentialStore::new(store).has_token());
}

#[test]
fn clear_token_keeps_profile() {
    let store = MemoryStore::new();
    let credentials = CredentialStore::new(store.clone());
    credentials.persist("tok-1", &ada());
    credentials.clear_token();

    assert!(!credentials.has_token());
    assert_eq!(credentials.user(), Some(ada()));
}

#[test]
fn clear_all_removes_both_entries() {
    let store = MemoryStore::new();
    let credentials = CredentialStore::new(store.clone());
    credentials.persist("tok-1", &ada());
    credentials.clear_all();

    assert!(store.is_empty());
    assert!(credentials.user().is_none());
}

#[test]
fn unrelated_keys_survive_clear_all() {
    let store = MemoryStore::new();
    store.set_item("other", "x");
    let credentials = CredentialStore::new(store.clone());
    credentials.persist("tok-1", &ada());
    credentials.clear_all();

    assert_eq!(store.get_item("other").as_deref(), Some("x"));
}
