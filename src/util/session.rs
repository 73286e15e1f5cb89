//! Session guard operations and the reactive session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionGuard`] holds the rules (resolve, route check, sign-in, logout,
//! expiry) over any [`KeyValueStore`], so they run natively in tests.
//! [`SessionContext`] is the `Copy` handle views receive through Leptos
//! context; it applies the same rules to browser storage and publishes the
//! result through signals.
//!
//! INVARIANT
//! =========
//! After every operation the authenticated flag equals "storage holds a
//! token". Signals are only written when the state actually changed, so the
//! route guard effect can call back into the context without looping.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::gateway::ApiError;
use crate::net::types::{AuthResponse, User};
use crate::state::notices::NoticeState;
use crate::state::session::SessionState;
use crate::util::credentials::CredentialStore;
use crate::util::guard::{PROTECTED_LANDING, PUBLIC_LANDING, redirect_for};
use crate::util::storage::{KeyValueStore, LocalStorage};

pub const LOGOUT_NOTICE: &str = "Logout successful";
pub const SESSION_EXPIRED_NOTICE: &str = "Session expired. Please log in again.";

/// Session rules over a concrete store.
#[derive(Clone, Debug, Default)]
pub struct SessionGuard<S> {
    credentials: CredentialStore<S>,
}

impl<S: KeyValueStore> SessionGuard<S> {
    pub fn new(store: S) -> Self {
        Self { credentials: CredentialStore::new(store) }
    }

    pub fn credentials(&self) -> &CredentialStore<S> {
        &self.credentials
    }

    /// Initial storage read; `Unresolved -> Resolved`. Later calls do nothing.
    pub fn resolve(&self, state: &mut SessionState) -> bool {
        state.resolve(self.credentials.has_token(), self.credentials.user())
    }

    /// Re-read the token for a navigation to `path` and return the redirect
    /// target, if any. Unresolved sessions never redirect.
    pub fn check_route(&self, state: &mut SessionState, path: &str) -> Option<&'static str> {
        if !state.is_resolved() {
            return None;
        }
        let token_present = self.credentials.has_token();
        state.sync(token_present, self.credentials.user());
        redirect_for(token_present, path)
    }

    /// Store a successful sign-in/sign-up and return the landing route.
    pub fn sign_in(
        &self,
        state: &mut SessionState,
        notices: &mut NoticeState,
        response: &AuthResponse,
        fallback_message: &str,
    ) -> &'static str {
        self.credentials.persist(&response.token, &response.user);
        state.sign_in(response.user.clone());
        let message = response
            .message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback_message);
        notices.success(message);
        PROTECTED_LANDING
    }

    /// Local-only logout. Safe to repeat.
    pub fn logout(&self, state: &mut SessionState, notices: &mut NoticeState) -> &'static str {
        self.credentials.clear_all();
        state.sign_out();
        notices.success(LOGOUT_NOTICE);
        PUBLIC_LANDING
    }

    /// Backend rejected the credential.
    pub fn expire(&self, state: &mut SessionState, notices: &mut NoticeState) -> &'static str {
        self.credentials.clear_token();
        state.sign_out();
        notices.error(SESSION_EXPIRED_NOTICE);
        PUBLIC_LANDING
    }
}

/// Show `fallback` (and the normalized message, when `detailed`) for a failed
/// call. Unauthorized failures stay silent; the gateway already reported them.
pub fn notify_failure(notices: &mut NoticeState, error: &ApiError, fallback: &str, detailed: bool) {
    if error.is_unauthorized() {
        return;
    }
    notices.error(fallback);
    if detailed {
        notices.error(error.message());
    }
}

/// Reactive session handle shared through context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
    pub notices: RwSignal<NoticeState>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            notices: RwSignal::new(NoticeState::default()),
        }
    }

    fn guard() -> SessionGuard<LocalStorage> {
        SessionGuard::new(LocalStorage)
    }

    /// Run `f` against copies of both states and publish whichever changed.
    fn apply<R>(self, f: impl FnOnce(&mut SessionState, &mut NoticeState) -> R) -> R {
        let before_state = self.state.get_untracked();
        let before_notices = self.notices.get_untracked();
        let mut state = before_state.clone();
        let mut notices = before_notices.clone();
        let out = f(&mut state, &mut notices);
        if state != before_state {
            self.state.set(state);
        }
        if notices != before_notices {
            self.notices.set(notices);
        }
        out
    }

    pub fn resolve(self) {
        let resolved = self.apply(|state, _| Self::guard().resolve(state));
        if resolved {
            leptos::logging::log!(
                "session resolved: authenticated={}",
                self.state.with_untracked(SessionState::is_authenticated)
            );
        }
    }

    pub fn check_route(self, path: &str) -> Option<&'static str> {
        self.apply(|state, _| Self::guard().check_route(state, path))
    }

    pub fn sign_in(self, response: &AuthResponse, fallback_message: &str) -> &'static str {
        self.apply(|state, notices| Self::guard().sign_in(state, notices, response, fallback_message))
    }

    pub fn logout(self) -> &'static str {
        self.apply(|state, notices| Self::guard().logout(state, notices))
    }

    /// Clear the token, announce expiry and force a full reload of the public landing.
    pub fn expire(self) {
        let target = self.apply(|state, notices| Self::guard().expire(state, notices));
        leptos::logging::warn!("session expired; redirecting to {target}");
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(target);
            }
        }
    }

    pub fn has_token(self) -> bool {
        Self::guard().credentials().has_token()
    }

    pub fn user(self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn owns(self, author_id: &str) -> bool {
        self.state.with(|s| s.owns(author_id))
    }

    pub fn notify_success(self, text: &str) {
        self.notices.update(|n| {
            n.success(text);
        });
    }

    pub fn notify_error(self, text: &str) {
        self.notices.update(|n| {
            n.error(text);
        });
    }

    pub fn notify_failure(self, error: &ApiError, fallback: &str, detailed: bool) {
        self.apply(|_, notices| notify_failure(notices, error, fallback, detailed));
    }

    pub fn dismiss(self, id: u64) {
        self.notices.update(|n| n.dismiss(id));
    }
}
