//! Authentication state for the current browser tab.
//!
//! DESIGN
//! ======
//! Two phases. `Unresolved` holds until storage has been read once after page
//! load; from then on the state is `Resolved` and only the authenticated flag
//! moves. There is no way back to `Unresolved`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Storage has not been read yet; views show a loader.
    #[default]
    Unresolved,
    Resolved { authenticated: bool },
}

/// Session flag plus the cached profile of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_resolved(&self) -> bool {
        matches!(self.phase, SessionPhase::Resolved { .. })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Resolved { authenticated: true })
    }

    /// First storage read. Returns `false` if the state was already resolved.
    pub fn resolve(&mut self, token_present: bool, user: Option<User>) -> bool {
        if self.is_resolved() {
            return false;
        }
        self.phase = SessionPhase::Resolved { authenticated: token_present };
        self.user = if token_present { user } else { None };
        true
    }

    pub fn sign_in(&mut self, user: User) {
        self.phase = SessionPhase::Resolved { authenticated: true };
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.phase = SessionPhase::Resolved { authenticated: false };
        self.user = None;
    }

    /// Bring the flag back in line with storage. No-op while unresolved.
    pub fn sync(&mut self, token_present: bool, user: Option<User>) {
        if !self.is_resolved() || self.is_authenticated() == token_present {
            return;
        }
        if token_present {
            self.phase = SessionPhase::Resolved { authenticated: true };
            self.user = user;
        } else {
            self.sign_out();
        }
    }

    /// Whether `author_id` is the signed-in user.
    pub fn owns(&self, author_id: &str) -> bool {
        self.user.as_ref().is_some_and(|u| !u.id.is_empty() && u.id == author_id)
    }
}
