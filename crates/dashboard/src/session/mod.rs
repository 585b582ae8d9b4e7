//! Session persistence and reactive auth state.
//!
//! The [`SessionStore`] is the single source of truth for the bearer token
//! and the logged-in user record. Both the route guard and the navigation
//! filter consume it (directly or via a [`SessionWatcher`]); every mutation
//! broadcasts a same-process change signal so reactive observers update
//! without polling.

mod backing;
mod guard;
mod watcher;

pub use backing::{FileBacking, MemoryBacking, SessionBacking};
pub use guard::{GuardOutcome, LOGIN_PATH, RouteGuard};
pub use watcher::{AuthState, SessionWatcher};

use std::sync::Arc;

use secrecy::SecretString;
use tokio::sync::broadcast;
use tracing::warn;

use crate::models::UserRecord;

/// Storage keys for session state.
pub mod keys {
    /// Key holding the opaque bearer token.
    pub const AUTH_TOKEN: &str = "luxeboard.authToken";

    /// Key holding the JSON-serialized user record.
    pub const AUTH_USER: &str = "luxeboard.authUser";
}

/// Which session key a change notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    Token,
    User,
}

/// Capacity of the change broadcast channel. Observers that fall this far
/// behind re-read the store on the next signal anyway.
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// Persisted session state with change broadcasting.
///
/// Token and user are stored independently; the logout path clears both,
/// but each clear fires its own notification - there is no atomicity
/// across the two keys.
#[derive(Clone)]
pub struct SessionStore {
    backing: Arc<dyn SessionBacking>,
    changes: broadcast::Sender<SessionKey>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create a store over the given backing.
    #[must_use]
    pub fn new(backing: Arc<dyn SessionBacking>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self { backing, changes }
    }

    /// Create a store over a fresh in-memory backing.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBacking::new()))
    }

    /// Subscribe to change notifications from this store's setters.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionKey> {
        self.changes.subscribe()
    }

    /// The stored bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.backing
            .get(keys::AUTH_TOKEN)
            .map(SecretString::from)
    }

    /// Store the bearer token and notify observers.
    pub fn set_token(&self, token: &str) {
        self.backing.set(keys::AUTH_TOKEN, token);
        self.notify(SessionKey::Token);
    }

    /// Clear the bearer token and notify observers.
    pub fn clear_token(&self) {
        self.backing.remove(keys::AUTH_TOKEN);
        self.notify(SessionKey::Token);
    }

    /// The stored user record, if any.
    ///
    /// Malformed persisted JSON self-heals: the corrupted value is removed
    /// (without a change notification) and `None` is returned. A second
    /// read also returns `None`.
    #[must_use]
    pub fn user(&self) -> Option<UserRecord> {
        let raw = self.backing.get(keys::AUTH_USER)?;
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => Some(UserRecord::from_value(&value)),
            Err(e) => {
                warn!(error = %e, "Corrupted session user record, clearing");
                self.backing.remove(keys::AUTH_USER);
                None
            }
        }
    }

    /// Store the user record (or remove it when `None`) and notify
    /// observers.
    pub fn set_user(&self, user: Option<&UserRecord>) {
        match user {
            Some(user) => match serde_json::to_string(user) {
                Ok(raw) => self.backing.set(keys::AUTH_USER, &raw),
                Err(e) => {
                    warn!(error = %e, "Failed to serialize session user record");
                    return;
                }
            },
            None => self.backing.remove(keys::AUTH_USER),
        }
        self.notify(SessionKey::User);
    }

    /// Clear the user record and notify observers.
    pub fn clear_user(&self) {
        self.backing.remove(keys::AUTH_USER);
        self.notify(SessionKey::User);
    }

    fn notify(&self, key: SessionKey) {
        // No receivers is fine; the store works without observers.
        let _ = self.changes.send(key);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use luxeboard_core::RecordIdentity;

    fn sample_user() -> UserRecord {
        UserRecord {
            identity: RecordIdentity::new("US-01"),
            name: "Nora Summers".to_owned(),
            email: "nora@luxehost.com".to_owned(),
            role: "Admin".to_owned(),
            permissions: vec!["properties".to_owned()],
            status: "Active".to_owned(),
        }
    }

    #[test]
    fn test_token_reflects_latest_mutation() {
        use secrecy::ExposeSecret;

        let store = SessionStore::in_memory();
        assert!(store.token().is_none());

        store.set_token("tok-1");
        store.set_token("tok-2");
        assert_eq!(store.token().unwrap().expose_secret(), "tok-2");

        store.clear_token();
        assert!(store.token().is_none());
    }

    #[test]
    fn test_every_mutation_broadcasts_once() {
        let store = SessionStore::in_memory();
        let mut changes = store.subscribe();

        store.set_token("tok");
        store.clear_token();
        store.set_user(Some(&sample_user()));
        store.clear_user();
        store.set_user(None);

        let expected = [
            SessionKey::Token,
            SessionKey::Token,
            SessionKey::User,
            SessionKey::User,
            SessionKey::User,
        ];
        for key in expected {
            assert_eq!(changes.try_recv().unwrap(), key);
        }
        assert!(changes.try_recv().is_err());
    }

    #[test]
    fn test_user_roundtrip() {
        let store = SessionStore::in_memory();
        store.set_user(Some(&sample_user()));
        let user = store.user().unwrap();
        assert_eq!(user.name, "Nora Summers");
        assert_eq!(user.identity.canonical(), Some("US-01"));
    }

    #[test]
    fn test_corrupted_user_self_heals() {
        let backing = Arc::new(MemoryBacking::new());
        backing.set(keys::AUTH_USER, "{not json");
        let store = SessionStore::new(backing.clone());
        let mut changes = store.subscribe();

        assert!(store.user().is_none());
        // Key removed, no broadcast for the self-heal.
        assert_eq!(backing.get(keys::AUTH_USER), None);
        assert!(changes.try_recv().is_err());

        // Idempotent: a second read also returns None without error.
        assert!(store.user().is_none());
    }
}
