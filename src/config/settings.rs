//! User settings for economy-cli
//!
//! Holds the optional backend URL override and HTTP preferences.

use serde::{Deserialize, Serialize};

use super::paths::EconomyPaths;
use crate::error::EconomyError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Backend base URL used when no override is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// User settings for economy-cli
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Custom backend base URL (always ends in `/api`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_currency() -> String {
    "R$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: None,
            request_timeout_secs: default_request_timeout_secs(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &EconomyPaths) -> Result<Self, EconomyError> {
        read_json(paths.settings_file())
            .map_err(|e| EconomyError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EconomyPaths) -> Result<(), EconomyError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// The backend base URL in effect
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    /// Whether a custom backend URL is configured
    pub fn has_custom_api_url(&self) -> bool {
        self.api_base_url.is_some()
    }

    /// Set a custom backend URL; an empty string removes the override
    pub fn set_api_url(&mut self, url: &str) -> Result<(), EconomyError> {
        let url = url.trim();
        if url.is_empty() {
            self.api_base_url = None;
            return Ok(());
        }
        self.api_base_url = Some(normalize_api_url(url)?);
        Ok(())
    }

    /// Drop the custom backend URL
    pub fn reset_api_url(&mut self) {
        self.api_base_url = None;
    }

    /// Set the symbol printed before amounts
    pub fn set_currency_symbol(&mut self, symbol: &str) -> Result<(), EconomyError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(EconomyError::Validation("Currency symbol cannot be empty".into()));
        }
        self.currency_symbol = symbol.to_string();
        Ok(())
    }
}

/// Validate a backend URL and make sure it ends with `/api`
pub fn normalize_api_url(url: &str) -> Result<String, EconomyError> {
    let url = url.trim().trim_end_matches('/');

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(EconomyError::Validation(
            "URL must start with http:// or https://".into(),
        ));
    }

    if url.ends_with("/api") {
        Ok(url.to_string())
    } else {
        Ok(format!("{}/api", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(settings.request_timeout_secs, 10);
        assert!(!settings.has_custom_api_url());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EconomyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.set_api_url("http://192.168.1.100:8080").unwrap();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.api_base_url(), "http://192.168.1.100:8080/api");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_normalize_api_url() {
        assert_eq!(
            normalize_api_url("http://10.0.2.2:8080").unwrap(),
            "http://10.0.2.2:8080/api"
        );
        assert_eq!(
            normalize_api_url("https://example.com/api/").unwrap(),
            "https://example.com/api"
        );
        assert!(normalize_api_url("ftp://example.com").unwrap_err().is_validation());
    }

    #[test]
    fn test_currency_symbol() {
        let mut settings = Settings::default();
        assert_eq!(settings.currency_symbol, "R$");
        settings.set_currency_symbol(" US$ ").unwrap();
        assert_eq!(settings.currency_symbol, "US$");
        assert!(settings.set_currency_symbol("  ").is_err());
        assert_eq!(settings.currency_symbol, "US$");
    }

    #[test]
    fn test_empty_url_resets() {
        let mut settings = Settings::default();
        settings.set_api_url("http://example.com").unwrap();
        settings.set_api_url("  ").unwrap();
        assert!(!settings.has_custom_api_url());
    }
}
