//! Session state observed by the CLI and tests

use serde::Serialize;

use crate::models::UserProfile;

/// Authentication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Persisted state not read yet
    Initializing,
    Authenticated,
    Unauthenticated,
}

/// Snapshot of the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub status: SessionStatus,
    pub user: Option<UserProfile>,
    /// An auth operation is in flight
    pub loading: bool,
}

impl Session {
    pub fn initializing() -> Self {
        Self {
            status: SessionStatus::Initializing,
            user: None,
            loading: true,
        }
    }

    pub fn authenticated(user: Option<UserProfile>) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            user,
            loading: false,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            user: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub fn is_initializing(&self) -> bool {
        self.status == SessionStatus::Initializing
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::initializing()
    }
}
