//! Durable session storage.
//!
//! The session persists two string keys, `token` and `user` (JSON-encoded),
//! read at startup and written/cleared on login/logout. Access is
//! synchronous and local - the browser build keeps these in `localStorage`,
//! this one in a flat JSON file. Writes are best-effort: persistence
//! failures are logged, never surfaced to the auth flow.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{error, warn};

/// Storage keys used by the session.
pub mod keys {
    /// Bearer token, stored as the raw string.
    pub const TOKEN: &str = "token";

    /// User profile, JSON-encoded.
    pub const USER: &str = "user";
}

/// String key/value storage for session data.
pub trait SessionStorage: Send + Sync {
    /// Read a key, `None` when absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a key.
    fn set(&self, key: &str, value: &str);

    /// Delete a key. Deleting an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// File-backed storage: one flat JSON object of string keys.
///
/// The file is read once at open; a missing or malformed file starts empty
/// rather than failing, so a corrupted session can never block startup.
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or start) the storage file at `path`.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(path = %path.display(), "ignoring malformed session file: {err}");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        let Ok(raw) = serde_json::to_string_pretty(entries) else {
            return;
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(err) = fs::create_dir_all(parent)
        {
            error!(path = %self.path.display(), "failed to create session dir: {err}");
            return;
        }
        if let Err(err) = fs::write(&self.path, raw) {
            error!(path = %self.path.display(), "failed to persist session: {err}");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.lock();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.lock();
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}
