use super::*;
use crate::state::notices::NoticeLevel;
use crate::util::credentials::{TOKEN_KEY, USER_KEY};
use crate::util::storage::MemoryStore;

fn ada() -> User {
    User { id: "u1".to_owned(), name: "Ada".to_owned(), email: "ada@example.com".to_owned() }
}

fn auth_response(message: Option<&str>) -> AuthResponse {
    AuthResponse { user: ada(), token: "tok-1".to_owned(), message: message.map(str::to_owned) }
}

fn signed_in() -> (MemoryStore, SessionGuard<MemoryStore>, SessionState, NoticeState) {
    let store = MemoryStore::new();
    let guard = SessionGuard::new(store.clone());
    let mut state = SessionState::default();
    let mut notices = NoticeState::default();
    guard.resolve(&mut state);
    guard.sign_in(&mut state, &mut notices, &auth_response(None), "Signin successful");
    (store, guard, state, notices)
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_reads_token_and_profile_from_storage() {
    let store = MemoryStore::new();
    CredentialStore::new(store.clone()).persist("tok", &ada());
    let guard = SessionGuard::new(store);

    let mut state = SessionState::default();
    assert!(guard.resolve(&mut state));
    assert!(state.is_authenticated());
    assert_eq!(state.user, Some(ada()));
    assert!(!guard.resolve(&mut state));
}

#[test]
fn resolve_without_token_is_signed_out() {
    let guard = SessionGuard::new(MemoryStore::new());
    let mut state = SessionState::default();
    guard.resolve(&mut state);
    assert!(state.is_resolved());
    assert!(!state.is_authenticated());
}

// =============================================================
// Route checks
// =============================================================

#[test]
fn unresolved_session_never_redirects() {
    let guard = SessionGuard::new(MemoryStore::new());
    let mut state = SessionState::default();
    assert_eq!(guard.check_route(&mut state, "/articles"), None);
    assert!(!state.is_resolved());
}

#[test]
fn protected_route_without_token_redirects_to_sign_in() {
    let guard = SessionGuard::new(MemoryStore::new());
    let mut state = SessionState::default();
    guard.resolve(&mut state);
    assert_eq!(guard.check_route(&mut state, "/articles/9/edit"), Some(PUBLIC_LANDING));
}

#[test]
fn public_route_with_token_redirects_to_article_list() {
    let (_store, guard, mut state, _) = signed_in();
    assert_eq!(guard.check_route(&mut state, "/"), Some(PROTECTED_LANDING));
    assert_eq!(guard.check_route(&mut state, "/signup"), Some(PROTECTED_LANDING));
    assert_eq!(guard.check_route(&mut state, "/articles"), None);
}

#[test]
fn check_route_resyncs_stale_flag() {
    let (store, guard, mut state, _) = signed_in();
    store.remove_item(TOKEN_KEY);

    assert_eq!(guard.check_route(&mut state, "/articles"), Some(PUBLIC_LANDING));
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

// =============================================================
// Sign-in
// =============================================================

#[test]
fn sign_in_persists_and_lands_on_article_list() {
    let store = MemoryStore::new();
    let guard = SessionGuard::new(store.clone());
    let mut state = SessionState::default();
    let mut notices = NoticeState::default();
    guard.resolve(&mut state);

    let landing = guard.sign_in(&mut state, &mut notices, &auth_response(Some("Welcome back")), "Signin successful");

    assert_eq!(landing, PROTECTED_LANDING);
    assert_eq!(store.get_item(TOKEN_KEY).as_deref(), Some("tok-1"));
    assert!(store.get_item(USER_KEY).is_some());
    assert!(state.is_authenticated());
    let notice = notices.latest().unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.text, "Welcome back");
}

#[test]
fn sign_in_uses_fallback_message_when_backend_sends_none() {
    let (_store, _guard, _state, notices) = signed_in();
    assert_eq!(notices.latest().unwrap().text, "Signin successful");
}

#[test]
fn sign_in_treats_blank_message_as_missing() {
    let guard = SessionGuard::new(MemoryStore::new());
    let mut state = SessionState::default();
    let mut notices = NoticeState::default();
    guard.sign_in(&mut state, &mut notices, &auth_response(Some("  ")), "Signup successful");
    assert_eq!(notices.latest().unwrap().text, "Signup successful");
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_storage_flag_and_lands_on_sign_in() {
    let (store, guard, mut state, mut notices) = signed_in();

    let landing = guard.logout(&mut state, &mut notices);

    assert_eq!(landing, PUBLIC_LANDING);
    assert!(store.get_item(TOKEN_KEY).is_none());
    assert!(store.get_item(USER_KEY).is_none());
    assert!(!state.is_authenticated());
    assert!(state.is_resolved());
    assert_eq!(notices.latest().unwrap().text, LOGOUT_NOTICE);
}

#[test]
fn logout_twice_matches_logout_once() {
    let (store_once, guard_once, mut state_once, mut notices_once) = signed_in();
    let (store_twice, guard_twice, mut state_twice, mut notices_twice) = signed_in();

    let once = guard_once.logout(&mut state_once, &mut notices_once);
    guard_twice.logout(&mut state_twice, &mut notices_twice);
    let twice = guard_twice.logout(&mut state_twice, &mut notices_twice);

    assert_eq!(once, twice);
    assert_eq!(state_once, state_twice);
    assert_eq!(store_once.len(), store_twice.len());
    assert!(store_twice.is_empty());
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn expire_drops_token_and_announces() {
    let (store, guard, mut state, mut notices) = signed_in();

    let landing = guard.expire(&mut state, &mut notices);

    assert_eq!(landing, PUBLIC_LANDING);
    assert!(store.get_item(TOKEN_KEY).is_none());
    assert!(!state.is_authenticated());
    let notice = notices.latest().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.text, SESSION_EXPIRED_NOTICE);
    assert_eq!(guard.check_route(&mut state, "/articles"), Some(PUBLIC_LANDING));
}

// =============================================================
// Failure notices
// =============================================================

#[test]
fn notify_failure_shows_fallback_only() {
    let mut notices = NoticeState::default();
    let error = ApiError::Transport { message: "Something went wrong".to_owned() };
    notify_failure(&mut notices, &error, "Failed to fetch articles", false);
    assert_eq!(notices.items.len(), 1);
    assert_eq!(notices.items[0].text, "Failed to fetch articles");
}

#[test]
fn notify_failure_detailed_adds_backend_message() {
    let mut notices = NoticeState::default();
    let error = ApiError::Status { status: 403, message: "Not your article".to_owned() };
    notify_failure(&mut notices, &error, "Failed to delete article", true);
    let texts: Vec<_> = notices.items.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, ["Failed to delete article", "Not your article"]);
}

#[test]
fn notify_failure_is_silent_for_unauthorized() {
    let mut notices = NoticeState::default();
    let error = ApiError::Unauthorized { message: "jwt expired".to_owned() };
    notify_failure(&mut notices, &error, "Failed to fetch articles", true);
    assert!(notices.items.is_empty());
}
