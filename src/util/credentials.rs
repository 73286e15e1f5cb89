//! Persisted identity: the credential token and the cached user profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only code that touches the `token` and `authUser` storage keys.
//! Views read identity through the session context, never from storage.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::net::types::User;
use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "authUser";

#[derive(Clone, Debug, Default)]
pub struct CredentialStore<S> {
    store: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored token, if any. Empty strings count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn user(&self) -> Option<User> {
        load_json(&self.store, USER_KEY)
    }

    pub fn persist(&self, token: &str, user: &User) {
        self.store.set_item(TOKEN_KEY, token);
        save_json(&self.store, USER_KEY, user);
    }

    pub fn clear_token(&self) {
        self.store.remove_item(TOKEN_KEY);
    }

    pub fn clear_all(&self) {
        self.store.remove_item(TOKEN_KEY);
        self.store.remove_item(USER_KEY);
    }
}
