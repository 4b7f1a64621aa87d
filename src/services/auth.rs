//! Authentication service
//!
//! Maps the `/auth/*` endpoints to typed calls and rewrites backend failures
//! into messages that make sense for each action.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{endpoints, ApiClient};
use crate::error::{EconomyError, EconomyResult};
use crate::models::{AuthResponse, Credentials, SignupRequest, UserProfile};

/// The authentication operations the session controller depends on
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for a token (and usually the profile)
    async fn signin(&self, credentials: &Credentials) -> EconomyResult<AuthResponse>;

    /// Create an account
    async fn signup(&self, request: &SignupRequest) -> EconomyResult<AuthResponse>;

    /// Profile for the stored token
    async fn profile(&self) -> EconomyResult<UserProfile>;

    /// Profile for a token that has not been stored yet
    async fn profile_with_token(&self, token: &str) -> EconomyResult<UserProfile>;

    /// End the session remotely. The backend has no revoke endpoint.
    async fn signout(&self) -> EconomyResult<()> {
        Ok(())
    }
}

/// Service for the `/auth` endpoints
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn profile_error(err: EconomyError) -> EconomyError {
        match err {
            EconomyError::Unauthorized(_) => err.with_context_message("Invalid or expired token"),
            EconomyError::NotFound(_) => err.with_context_message("User not found"),
            other => other,
        }
    }
}

fn require_body<T>(body: Option<T>, endpoint: &str) -> EconomyResult<T> {
    body.ok_or_else(|| EconomyError::MalformedResponse {
        endpoint: endpoint.to_string(),
        detail: "empty response body".into(),
    })
}

#[async_trait]
impl AuthBackend for AuthService {
    async fn signin(&self, credentials: &Credentials) -> EconomyResult<AuthResponse> {
        tracing::debug!(email = %credentials.email, "Signing in");
        let response = self
            .client
            .post::<_, AuthResponse>(endpoints::SIGNIN, credentials)
            .await
            .map_err(|e| match e {
                EconomyError::Unauthorized(_) => {
                    e.with_context_message("Incorrect email or password")
                }
                other => other,
            })?;
        require_body(response, endpoints::SIGNIN)
    }

    async fn signup(&self, request: &SignupRequest) -> EconomyResult<AuthResponse> {
        tracing::debug!(email = %request.email, "Signing up");
        let response = self
            .client
            .post::<_, AuthResponse>(endpoints::SIGNUP, request)
            .await
            .map_err(|e| match e {
                EconomyError::Conflict(_) => e.with_context_message("Email is already in use"),
                other => other,
            })?;
        Ok(response.unwrap_or_default())
    }

    async fn profile(&self) -> EconomyResult<UserProfile> {
        let profile = self
            .client
            .get::<UserProfile>(endpoints::PROFILE)
            .await
            .map_err(Self::profile_error)?;
        require_body(profile, endpoints::PROFILE)
    }

    async fn profile_with_token(&self, token: &str) -> EconomyResult<UserProfile> {
        let profile = self
            .client
            .get_with_token::<UserProfile>(endpoints::PROFILE, token)
            .await
            .map_err(Self::profile_error)?;
        require_body(profile, endpoints::PROFILE)
    }

    async fn signout(&self) -> EconomyResult<()> {
        tracing::debug!("Signing out (local only)");
        Ok(())
    }
}
