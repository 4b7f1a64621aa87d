//! Storage layer for economy-cli
//!
//! Local persistence is limited to the session (token + cached profile) and
//! the settings file, both written atomically as JSON.

pub mod credentials;
pub mod file_io;

pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore, StoredSession};
pub use file_io::{read_json, remove_if_exists, write_json_atomic};
