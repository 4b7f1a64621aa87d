//! Application wiring
//!
//! Builds the object graph once: credential store → [`ApiClient`] →
//! services → [`SessionController`]. Everything is handed down through
//! constructors; there is no global state.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::{EconomyPaths, Settings};
use crate::error::{EconomyError, EconomyResult};
use crate::services::{AuthService, ExpenseService, LimitService};
use crate::session::SessionController;
use crate::storage::{CredentialStore, FileCredentialStore};

pub struct App {
    pub paths: EconomyPaths,
    pub settings: Settings,
    pub client: Arc<ApiClient>,
    pub auth: Arc<AuthService>,
    pub expenses: ExpenseService,
    pub limits: LimitService,
    pub session: SessionController,
}

impl App {
    /// Wire the application from on-disk settings
    ///
    /// `api_url` overrides the configured backend for this run only.
    pub fn build(paths: EconomyPaths, settings: Settings, api_url: Option<&str>) -> EconomyResult<Self> {
        paths.ensure_directories()?;
        let store: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::new(paths.session_file()));
        Self::with_store(paths, settings, api_url, store)
    }

    /// Wire the application around an explicit credential store
    pub fn with_store(
        paths: EconomyPaths,
        mut settings: Settings,
        api_url: Option<&str>,
        store: Arc<dyn CredentialStore>,
    ) -> EconomyResult<Self> {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            settings
                .set_api_url(url)
                .map_err(|e| EconomyError::Config(format!("Invalid API URL '{}': {}", url, e.user_message())))?;
        }

        let client = Arc::new(ApiClient::from_settings(&settings, Arc::clone(&store))?);
        tracing::debug!(base_url = client.base_url(), "API client ready");

        let auth = Arc::new(AuthService::new(Arc::clone(&client)));
        let expenses = ExpenseService::new(Arc::clone(&client));
        let limits = LimitService::new(Arc::clone(&client));

        let session = SessionController::new(auth.clone(), store);
        session.attach(&client);

        Ok(Self {
            paths,
            settings,
            client,
            auth,
            expenses,
            limits,
            session,
        })
    }

    /// Fail unless there is a session backed by a stored token
    ///
    /// A live session whose token vanished from the store is logged out.
    pub fn require_login(&self) -> EconomyResult<()> {
        let authenticated = if self.session.is_authenticated() {
            self.session.ensure_consistent()
        } else {
            self.session.restore().is_authenticated()
        };
        if authenticated {
            Ok(())
        } else {
            Err(EconomyError::Unauthorized(
                "Not logged in. Run `economy login` first".into(),
            ))
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.session.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryCredentialStore, StoredSession};
    use tempfile::TempDir;

    #[test]
    fn test_override_url_is_normalized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EconomyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let app = App::with_store(
            paths,
            Settings::default(),
            Some("http://10.0.2.2:8080"),
            Arc::new(MemoryCredentialStore::new()),
        )
        .unwrap();

        assert_eq!(app.client.base_url(), "http://10.0.2.2:8080/api");
        assert_eq!(app.client.hooks().len(), 1);
    }

    #[test]
    fn test_bad_override_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EconomyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let result = App::with_store(
            paths,
            Settings::default(),
            Some("localhost:8080"),
            Arc::new(MemoryCredentialStore::new()),
        );
        assert!(matches!(result, Err(EconomyError::Config(_))));
    }

    #[test]
    fn test_require_login() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EconomyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Arc::new(MemoryCredentialStore::new());
        let app = App::with_store(paths, Settings::default(), None, store.clone()).unwrap();
        assert!(app.require_login().unwrap_err().is_unauthorized());

        store.save(&StoredSession::new("tok", None)).unwrap();
        assert!(app.require_login().is_ok());
    }

    #[test]
    fn test_require_login_drops_session_without_token() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EconomyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Arc::new(MemoryCredentialStore::new());
        store.save(&StoredSession::new("tok", None)).unwrap();
        let app = App::with_store(paths, Settings::default(), None, store.clone()).unwrap();
        assert!(app.require_login().is_ok());
        assert!(app.session.is_authenticated());

        store.clear().unwrap();
        assert!(app.require_login().unwrap_err().is_unauthorized());
        assert!(!app.session.is_authenticated());
    }
}
