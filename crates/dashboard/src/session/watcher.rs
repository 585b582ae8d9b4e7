//! Reactive view over the session store.

use secrecy::SecretString;
use tokio::sync::{broadcast, watch};
use tracing::debug;

use super::{SessionKey, SessionStore};
use crate::models::UserRecord;

/// Snapshot of the current authentication state.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    /// The bearer token, when logged in.
    pub token: Option<SecretString>,
    /// The logged-in user record, when the API returned one.
    pub user: Option<UserRecord>,
    /// True until the first store read completes.
    pub loading: bool,
}

impl AuthState {
    /// A present token alone implies an authenticated session; the user
    /// record is optional.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The role name of the logged-in user, if known.
    #[must_use]
    pub fn role_name(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.role.as_str())
    }
}

/// Reactive session observer with login/logout mutators.
///
/// On construction it subscribes to the store's change broadcast, then
/// reads both keys once and publishes the resulting state with
/// `loading = false` on a watch channel. [`SessionWatcher::listen`] keeps
/// the published state in sync with other same-process writers; dropping
/// the watcher unsubscribes everything.
#[derive(Debug)]
pub struct SessionWatcher {
    store: SessionStore,
    state: watch::Sender<AuthState>,
    changes: broadcast::Receiver<SessionKey>,
}

impl SessionWatcher {
    /// Create a watcher over `store` and perform the initial read.
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        // Subscribe before the initial read so no mutation between the two
        // is lost.
        let changes = store.subscribe();
        let (state, _) = watch::channel(AuthState {
            token: None,
            user: None,
            loading: true,
        });
        let watcher = Self {
            store,
            state,
            changes,
        };
        watcher.refresh();
        watcher
    }

    /// A receiver for observing state snapshots.
    #[must_use]
    pub fn state(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// The current state snapshot.
    #[must_use]
    pub fn current(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Re-read the store and publish a fresh snapshot.
    ///
    /// Also the hook for backings mutated externally (another process over
    /// the same state directory), which produce no in-process signal.
    pub fn refresh(&self) {
        let snapshot = AuthState {
            token: self.store.token(),
            user: self.store.user(),
            loading: false,
        };
        self.state.send_replace(snapshot);
    }

    /// Apply store change notifications as they arrive.
    ///
    /// Runs until the surrounding task is dropped; spawn it alongside the
    /// consumers of [`SessionWatcher::state`]. A lagged receiver is not an
    /// error here since every signal triggers a full re-read.
    pub async fn listen(&mut self) {
        loop {
            match self.changes.recv().await {
                Ok(key) => {
                    debug!(?key, "Session change observed");
                    self.refresh();
                }
                Err(broadcast::error::RecvError::Lagged(_)) => self.refresh(),
                Err(broadcast::error::RecvError::Closed) => return,
            }
        }
    }

    /// Drain any change notifications that have already arrived.
    ///
    /// Useful for callers driving the watcher from a synchronous loop
    /// instead of [`SessionWatcher::listen`].
    pub fn poll_changes(&mut self) {
        let mut dirty = false;
        while self.changes.try_recv().is_ok() {
            dirty = true;
        }
        if dirty {
            self.refresh();
        }
    }

    /// Write the token (and user, if provided) through the store, then
    /// mirror into the published state immediately.
    pub fn login(&self, token: &str, user: Option<&UserRecord>) {
        self.store.set_token(token);
        if let Some(user) = user {
            self.store.set_user(Some(user));
        }
        self.refresh();
    }

    /// Clear both session keys and publish the logged-out state.
    pub fn logout(&self) {
        self.store.clear_token();
        self.store.clear_user();
        self.refresh();
    }

    /// The store this watcher observes.
    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }
}
