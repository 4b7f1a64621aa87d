//! Persisted credentials
//!
//! The token and the cached profile live in one file so they are always
//! written and cleared together. The cached profile is for instant display
//! only; the remote profile wins whenever it can be fetched.

use std::fmt;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::file_io::{read_json, remove_if_exists, write_json_atomic};
use crate::error::EconomyResult;
use crate::models::UserProfile;

/// What is persisted between runs
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl StoredSession {
    pub fn new(token: impl Into<String>, user: Option<UserProfile>) -> Self {
        Self {
            token: Some(token.into()),
            user,
        }
    }

    /// The token, if present and non-empty
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

impl fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredSession")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .finish()
    }
}

/// Storage for the token and cached profile
///
/// Implementations must treat `save`/`clear` as all-or-nothing.
pub trait CredentialStore: Send + Sync {
    /// Read the persisted session (empty if nothing is stored)
    fn load(&self) -> EconomyResult<StoredSession>;

    /// Replace the persisted session
    fn save(&self, session: &StoredSession) -> EconomyResult<()>;

    /// Remove token and profile
    fn clear(&self) -> EconomyResult<()>;

    /// Clear only if `token` is still the stored token.
    ///
    /// Returns `true` when something was cleared.
    fn clear_if_token(&self, token: &str) -> EconomyResult<bool>;

    /// Current token, if any
    fn token(&self) -> EconomyResult<Option<String>> {
        Ok(self.load()?.token().map(str::to_string))
    }

    /// Replace the cached profile, keeping the token
    fn save_user(&self, user: Option<&UserProfile>) -> EconomyResult<()> {
        let mut session = self.load()?;
        session.user = user.cloned();
        self.save(&session)
    }
}

/// JSON-file backed store (`session.json`)
pub struct FileCredentialStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> EconomyResult<StoredSession> {
        let _guard = self.lock.lock();
        read_json(&self.path)
    }

    fn save(&self, session: &StoredSession) -> EconomyResult<()> {
        let _guard = self.lock.lock();
        write_json_atomic(&self.path, session)
    }

    fn clear(&self) -> EconomyResult<()> {
        let _guard = self.lock.lock();
        remove_if_exists(&self.path)
    }

    fn clear_if_token(&self, token: &str) -> EconomyResult<bool> {
        let _guard = self.lock.lock();
        let session: StoredSession = read_json(&self.path)?;
        if session.token() != Some(token) {
            return Ok(false);
        }
        remove_if_exists(&self.path)?;
        Ok(true)
    }
}

/// In-memory store, used when nothing should touch disk
#[derive(Default)]
pub struct MemoryCredentialStore {
    session: Mutex<StoredSession>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: StoredSession) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> EconomyResult<StoredSession> {
        Ok(self.session.lock().clone())
    }

    fn save(&self, session: &StoredSession) -> EconomyResult<()> {
        *self.session.lock() = session.clone();
        Ok(())
    }

    fn clear(&self) -> EconomyResult<()> {
        *self.session.lock() = StoredSession::default();
        Ok(())
    }

    fn clear_if_token(&self, token: &str) -> EconomyResult<bool> {
        let mut session = self.session.lock();
        if session.token() != Some(token) {
            return Ok(false);
        }
        *session = StoredSession::default();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn profile() -> UserProfile {
        UserProfile::new("Maria", "maria@example.com")
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("session.json"));

        assert_eq!(store.load().unwrap(), StoredSession::default());

        store
            .save(&StoredSession::new("tok-1", Some(profile())))
            .unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.token(), Some("tok-1"));
        assert_eq!(loaded.user, Some(profile()));
    }

    #[test]
    fn test_clear_removes_token_and_profile() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("session.json"));

        store
            .save(&StoredSession::new("tok-1", Some(profile())))
            .unwrap();
        store.clear().unwrap();

        let loaded = store.load().unwrap();
        assert!(!loaded.has_token());
        assert!(loaded.user.is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_clear_if_token_only_matches_current() {
        let store = MemoryCredentialStore::with_session(StoredSession::new("tok-2", None));

        assert!(!store.clear_if_token("tok-1").unwrap());
        assert_eq!(store.token().unwrap().as_deref(), Some("tok-2"));

        assert!(store.clear_if_token("tok-2").unwrap());
        assert!(!store.clear_if_token("tok-2").unwrap());
    }

    #[test]
    fn test_file_clear_if_token() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("session.json"));
        store.save(&StoredSession::new("tok-1", None)).unwrap();

        assert!(store.clear_if_token("tok-1").unwrap());
        assert!(!store.clear_if_token("tok-1").unwrap());
    }

    #[test]
    fn test_save_user_keeps_token() {
        let store = MemoryCredentialStore::with_session(StoredSession::new("tok-1", None));
        store.save_user(Some(&profile())).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.token(), Some("tok-1"));
        assert_eq!(loaded.user, Some(profile()));
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let session = StoredSession::new("   ", None);
        assert!(!session.has_token());
    }

    #[test]
    fn test_debug_hides_token() {
        let session = StoredSession::new("super-secret", None);
        assert!(!format!("{:?}", session).contains("super-secret"));
    }
}
