use super::*;

fn ada() -> User {
    User { id: "u1".to_owned(), name: "Ada".to_owned(), email: "ada@example.com".to_owned() }
}

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn default_is_unresolved_and_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.is_resolved());
    assert!(!state.is_authenticated());
}

#[test]
fn resolve_happens_once() {
    let mut state = SessionState::default();
    assert!(state.resolve(true, Some(ada())));
    assert!(state.is_authenticated());

    assert!(!state.resolve(false, None));
    assert!(state.is_authenticated());
    assert_eq!(state.user, Some(ada()));
}

#[test]
fn resolve_without_token_drops_stale_profile() {
    let mut state = SessionState::default();
    state.resolve(false, Some(ada()));
    assert_eq!(state.phase, SessionPhase::Resolved { authenticated: false });
    assert!(state.user.is_none());
}

#[test]
fn flag_flips_both_ways_after_resolution() {
    let mut state = SessionState::default();
    state.resolve(false, None);
    state.sign_in(ada());
    assert!(state.is_authenticated());
    state.sign_out();
    assert!(!state.is_authenticated());
    assert!(state.is_resolved());
    state.sign_in(ada());
    assert!(state.is_authenticated());
}

// =============================================================
// Sync with storage
// =============================================================

#[test]
fn sync_is_ignored_while_unresolved() {
    let mut state = SessionState::default();
    state.sync(true, Some(ada()));
    assert_eq!(state, SessionState::default());
}

#[test]
fn sync_clears_flag_when_token_disappears() {
    let mut state = SessionState::default();
    state.resolve(true, Some(ada()));
    state.sync(false, None);
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn sync_leaves_consistent_state_untouched() {
    let mut state = SessionState::default();
    state.resolve(true, Some(ada()));
    let before = state.clone();
    state.sync(true, None);
    assert_eq!(state, before);
}

// =============================================================
// Ownership
// =============================================================

#[test]
fn owns_matches_signed_in_user_id() {
    let mut state = SessionState::default();
    state.resolve(true, Some(ada()));
    assert!(state.owns("u1"));
    assert!(!state.owns("u2"));
    assert!(!state.owns(""));
}

#[test]
fn owns_is_false_when_signed_out() {
    let state = SessionState::default();
    assert!(!state.owns("u1"));
}
