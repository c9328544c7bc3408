// SPDX-License-Identifier: MIT

//! Session persistence.
//!
//! The original platform keeps its session in browser localStorage; here the
//! store is an explicit object injected into the client at construction, so
//! the interceptor-era ambient global becomes an ordinary dependency.
//!
//! Reads are deliberately forgiving: a missing or corrupt store behaves like
//! an empty one. Write failures are logged and swallowed so a broken disk
//! never turns a successful login into an error.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Whether a session token is currently held.
///
/// Published on the client's watch channel so the UI layer can react to
/// expiry (e.g. navigate to the login view) without the data layer knowing
/// anything about navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticated,
    Unauthenticated,
}

/// Durable key-value session storage.
///
/// Two logical entries: the bearer token and the cached user profile. All
/// methods are infallible by contract; implementations map their own I/O
/// failures to "nothing stored".
pub trait SessionStore: Send + Sync {
    /// Stored access token, if any.
    fn token(&self) -> Option<String>;

    /// Cached user profile, if any.
    fn user(&self) -> Option<User>;

    /// Persist a token and the user it belongs to.
    fn store(&self, token: &str, user: Option<&User>);

    /// Replace only the cached user profile, keeping the token.
    fn update_user(&self, user: &User);

    /// Remove both entries. Idempotent.
    fn clear(&self);
}

/// In-memory session store for tests and short-lived tools.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: RwLock<SessionData>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.inner.read().ok()?.access_token.clone()
    }

    fn user(&self) -> Option<User> {
        self.inner.read().ok()?.user.clone()
    }

    fn store(&self, token: &str, user: Option<&User>) {
        if let Ok(mut data) = self.inner.write() {
            data.access_token = Some(token.to_string());
            if let Some(user) = user {
                data.user = Some(user.clone());
            }
        }
    }

    fn update_user(&self, user: &User) {
        if let Ok(mut data) = self.inner.write() {
            data.user = Some(user.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut data) = self.inner.write() {
            *data = SessionData::default();
        }
    }
}

/// On-disk serialization of a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionData {
    access_token: Option<String>,
    user: Option<User>,
}

/// File-backed session store, the durable analogue of localStorage.
///
/// The whole session lives in one JSON file; every write rewrites it.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> SessionData {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return SessionData::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Corrupt session file, treating as empty"
            );
            SessionData::default()
        })
    }

    fn write(&self, data: &SessionData) {
        let raw = match serde_json::to_string_pretty(data) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize session");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, raw) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist session");
        }
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.read().access_token
    }

    fn user(&self) -> Option<User> {
        self.read().user
    }

    fn store(&self, token: &str, user: Option<&User>) {
        let mut data = self.read();
        data.access_token = Some(token.to_string());
        if let Some(user) = user {
            data.user = Some(user.clone());
        }
        self.write(&data);
    }

    fn update_user(&self, user: &User) {
        let mut data = self.read();
        data.user = Some(user.clone());
        self.write(&data);
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove session file"
                );
            }
        }
    }
}
