//! Session controller
//!
//! Owns the authentication state machine:
//!
//! ```text
//! Initializing ──► Authenticated ◄──► Unauthenticated
//!        └──────────────────────────────► ┘
//! ```
//!
//! There is no way back to `Initializing`. State is published on a
//! `tokio::sync::watch` channel; receivers may be dropped at any time.
//! Token and profile are always persisted and cleared together through the
//! [`CredentialStore`].

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use super::state::Session;
use crate::api::{endpoints, ApiClient, HookGuard};
use crate::error::{EconomyError, EconomyResult};
use crate::models::{Credentials, SignupRequest, UserProfile};
use crate::services::AuthBackend;
use crate::storage::{CredentialStore, StoredSession};

/// Outcome of a sign-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The backend returned a token; the session is now authenticated
    LoggedIn(UserProfile),
    /// Account created; the user still has to log in
    Created { message: Option<String> },
}

/// Owns authentication status, the current user and the token lifecycle
pub struct SessionController {
    auth: Arc<dyn AuthBackend>,
    store: Arc<dyn CredentialStore>,
    state: Arc<watch::Sender<Session>>,
    hook: Mutex<Option<HookGuard>>,
}

impl SessionController {
    /// Create a controller in the `Initializing` state
    pub fn new(auth: Arc<dyn AuthBackend>, store: Arc<dyn CredentialStore>) -> Self {
        let (state, _) = watch::channel(Session::initializing());
        Self {
            auth,
            store,
            state: Arc::new(state),
            hook: Mutex::new(None),
        }
    }

    /// Current session snapshot
    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Receive every future session change
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Register the forced-logout observer on the HTTP client
    ///
    /// Replaces any previous registration.
    pub fn attach(&self, client: &ApiClient) {
        let state = Arc::clone(&self.state);
        let guard = client.on_unauthorized(move || {
            tracing::warn!("Session invalidated by the backend");
            state.send_replace(Session::unauthenticated());
        });
        *self.hook.lock() = Some(guard);
    }

    /// Remove the forced-logout observer
    pub fn detach(&self) {
        if let Some(guard) = self.hook.lock().take() {
            guard.unregister();
        }
    }

    /// Read the persisted session without contacting the backend
    ///
    /// A token makes the session `Authenticated` with the cached profile.
    /// An unreadable session file is treated as corrupted and cleared.
    pub fn restore(&self) -> Session {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(error = %e, "Persisted session is corrupted; clearing it");
                self.clear_store();
                return self.set(Session::unauthenticated());
            }
        };

        if stored.has_token() {
            self.set(Session::authenticated(stored.user))
        } else {
            if stored.user.is_some() || stored.token.is_some() {
                tracing::warn!("Persisted profile without a token; clearing it");
                self.clear_store();
            }
            self.set(Session::unauthenticated())
        }
    }

    /// Restore the persisted session, then re-validate it remotely
    ///
    /// An authorization failure ends the session. Connectivity or malformed
    /// responses leave it authenticated with the cached profile.
    pub async fn initialize(&self) -> Session {
        let session = self.restore();
        if !session.is_authenticated() {
            return session;
        }

        self.state.send_modify(|s| s.loading = true);
        match self.auth.profile().await {
            Ok(profile) => {
                if let Err(e) = self.store.save_user(Some(&profile)) {
                    tracing::warn!(error = %e, "Could not cache refreshed profile");
                }
                self.set(Session::authenticated(Some(profile)))
            }
            Err(e) if e.should_deauthenticate() => {
                tracing::info!("Stored token rejected during start-up");
                self.force_logout();
                self.session()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not re-validate session; keeping cached profile");
                self.state.send_modify(|s| s.loading = false);
                self.session()
            }
        }
    }

    /// Sign in and persist token and profile as one unit
    ///
    /// If the backend omits the profile it is fetched with the new token
    /// first. Any failure leaves the session `Unauthenticated` and nothing
    /// persisted.
    pub async fn login(&self, credentials: &Credentials) -> EconomyResult<UserProfile> {
        self.state.send_modify(|s| s.loading = true);
        match self.try_login(credentials).await {
            Ok(user) => Ok(user),
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                self.set(Session::unauthenticated());
                Err(e)
            }
        }
    }

    async fn try_login(&self, credentials: &Credentials) -> EconomyResult<UserProfile> {
        let response = self.auth.signin(credentials).await?;
        let token = response
            .token()
            .ok_or_else(|| EconomyError::MalformedResponse {
                endpoint: endpoints::SIGNIN.to_string(),
                detail: "response has no token".into(),
            })?
            .to_string();
        self.establish(token, response.user).await
    }

    /// Create an account; logs in when the backend hands back a token
    pub async fn register(&self, request: &SignupRequest) -> EconomyResult<RegisterOutcome> {
        self.state.send_modify(|s| s.loading = true);
        let response = match self.auth.signup(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Sign-up failed");
                self.set(Session::unauthenticated());
                return Err(e);
            }
        };

        match response.token() {
            Some(token) => {
                let token = token.to_string();
                match self.establish(token, response.user).await {
                    Ok(user) => Ok(RegisterOutcome::LoggedIn(user)),
                    Err(e) => {
                        self.set(Session::unauthenticated());
                        Err(e)
                    }
                }
            }
            None => {
                self.set(Session::unauthenticated());
                Ok(RegisterOutcome::Created {
                    message: response.message,
                })
            }
        }
    }

    async fn establish(&self, token: String, user: Option<UserProfile>) -> EconomyResult<UserProfile> {
        let user = match user {
            Some(user) => user,
            None => {
                tracing::debug!("Auth response had no profile; fetching it");
                self.auth.profile_with_token(&token).await?
            }
        };

        self.store.save(&StoredSession::new(token, Some(user.clone())))?;
        self.set(Session::authenticated(Some(user.clone())));
        tracing::info!(email = %user.email, "Logged in");
        Ok(user)
    }

    /// End the session locally, whatever the backend says
    pub async fn logout(&self) -> EconomyResult<()> {
        if let Err(e) = self.auth.signout().await {
            tracing::warn!(error = %e, "Remote sign-out failed; clearing local session anyway");
        }
        let cleared = self.store.clear();
        self.set(Session::unauthenticated());
        cleared
    }

    /// Re-fetch the profile and update the cache
    ///
    /// An authorization failure forces a logout; other failures leave the
    /// cached profile untouched.
    pub async fn refresh_profile(&self) -> EconomyResult<UserProfile> {
        match self.auth.profile().await {
            Ok(profile) => {
                self.update_user(profile.clone())?;
                Ok(profile)
            }
            Err(e) => {
                if e.should_deauthenticate() {
                    self.force_logout();
                } else {
                    tracing::warn!(error = %e, "Profile refresh failed; keeping cached profile");
                }
                Err(e)
            }
        }
    }

    /// Replace the cached profile locally
    pub fn update_user(&self, profile: UserProfile) -> EconomyResult<()> {
        self.store.save_user(Some(&profile))?;
        self.state.send_modify(|s| s.user = Some(profile));
        Ok(())
    }

    /// Enforce "authenticated implies a persisted token"
    ///
    /// Returns `false` (after logging out) when the invariant was broken.
    pub fn ensure_consistent(&self) -> bool {
        if !self.is_authenticated() {
            return true;
        }
        match self.store.token() {
            Ok(Some(_)) => true,
            Ok(None) => {
                tracing::warn!("Authenticated without a stored token; logging out");
                self.force_logout();
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored session unreadable; logging out");
                self.force_logout();
                false
            }
        }
    }

    fn force_logout(&self) {
        self.clear_store();
        self.set(Session::unauthenticated());
    }

    fn clear_store(&self) {
        if let Err(e) = self.store.clear() {
            tracing::error!(error = %e, "Failed to clear stored credentials");
        }
    }

    fn set(&self, session: Session) -> Session {
        if session.status != self.state.borrow().status {
            tracing::debug!(status = ?session.status, "Session status changed");
        }
        self.state.send_replace(session.clone());
        session
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("session", &*self.state.borrow())
            .field("attached", &self.hook.lock().is_some())
            .finish()
    }
}
