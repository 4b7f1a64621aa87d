//! Path management for economy-cli
//!
//! ## Path Resolution Order
//!
//! 1. `ECONOMY_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/economy-cli` on Linux,
//!    `~/Library/Application Support/economy-cli` on macOS,
//!    `%APPDATA%\economy-cli` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::EconomyError;

/// Manages all paths used by economy-cli
#[derive(Debug, Clone)]
pub struct EconomyPaths {
    /// Base directory for all economy-cli data
    base_dir: PathBuf,
}

impl EconomyPaths {
    /// Create a new EconomyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, EconomyError> {
        let base_dir = if let Ok(custom) = std::env::var("ECONOMY_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create EconomyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted session (token + cached profile)
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), EconomyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EconomyError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, EconomyError> {
    ProjectDirs::from("", "", "economy-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| EconomyError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EconomyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.session_file(), temp_dir.path().join("session.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("economy");
        let paths = EconomyPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
