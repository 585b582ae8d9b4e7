//! Pluggable key/value backings for the session store.
//!
//! Production uses [`FileBacking`] (one file per key under the configured
//! state directory, surviving restarts); tests use [`MemoryBacking`].
//! Backings are deliberately infallible at the call site: write failures
//! are logged and swallowed, matching the fire-and-forget semantics of a
//! browser's per-origin storage.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

/// Synchronous string key/value storage for session state.
pub trait SessionBacking: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// In-memory backing for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBacking {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBacking {
    /// Create an empty in-memory backing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBacking for MemoryBacking {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .map_or(None, |entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Durable backing storing one file per key under a state directory.
#[derive(Debug)]
pub struct FileBacking {
    dir: PathBuf,
}

impl FileBacking {
    /// Create a backing rooted at `dir`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Keys contain dots (`luxeboard.authToken`); keep them filesystem-safe.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        self.dir.join(name)
    }
}

impl SessionBacking for FileBacking {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            warn!(error = %e, dir = %self.dir.display(), "Failed to create session state dir");
            return;
        }
        if let Err(e) = std::fs::write(self.path_for(key), value) {
            warn!(error = %e, key, "Failed to persist session value");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(e) = std::fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(error = %e, key, "Failed to remove session value");
            }
        }
    }
}
