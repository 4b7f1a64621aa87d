//! HTTP client for the backend REST API.
//!
//! Wraps `reqwest` and adds the behavior every call shares:
//! - the stored token is sent as a bearer credential when present
//! - transport failures are split into construction errors and connectivity
//!   errors, and error responses are mapped by status
//! - a 401 (outside the profile check) clears the stored token and notifies
//!   the registered [`UnauthorizedHooks`]

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::endpoints;
use super::hooks::{HookGuard, UnauthorizedHooks};
use crate::config::Settings;
use crate::error::{EconomyError, EconomyResult};
use crate::storage::CredentialStore;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Which credential a request carries
#[derive(Debug, Clone, Copy)]
enum Bearer<'a> {
    /// Whatever token is persisted right now (possibly none)
    Stored,
    /// A token that has not been persisted yet
    Explicit(&'a str),
}

/// Backend API client shared by all domain services
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn CredentialStore>,
    hooks: Arc<UnauthorizedHooks>,
}

impl ApiClient {
    /// Create a client with the default timeout
    pub fn new(base_url: impl Into<String>, store: Arc<dyn CredentialStore>) -> EconomyResult<Self> {
        Self::with_timeout(base_url, store, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        store: Arc<dyn CredentialStore>,
        timeout: Duration,
    ) -> EconomyResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("economy-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| EconomyError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
            hooks: UnauthorizedHooks::new(),
        })
    }

    /// Create a client from user settings
    pub fn from_settings(settings: &Settings, store: Arc<dyn CredentialStore>) -> EconomyResult<Self> {
        Self::with_timeout(
            settings.api_base_url(),
            store,
            Duration::from_secs(settings.request_timeout_secs.max(1)),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn hooks(&self) -> &Arc<UnauthorizedHooks> {
        &self.hooks
    }

    /// Register a listener for rejected credentials
    pub fn on_unauthorized<F>(&self, listener: F) -> HookGuard
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.hooks.register(listener)
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET` a path; `Ok(None)` means 204/no body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> EconomyResult<Option<T>> {
        self.execute(Method::GET, path, None, Bearer::Stored).await
    }

    /// `GET` a path with a token that is not persisted yet
    pub async fn get_with_token<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> EconomyResult<Option<T>> {
        self.execute(Method::GET, path, None, Bearer::Explicit(token))
            .await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> EconomyResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.execute(Method::POST, path, Some(body), Bearer::Stored)
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> EconomyResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(body)?;
        self.execute(Method::PUT, path, Some(body), Bearer::Stored)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> EconomyResult<Option<T>> {
        self.execute(Method::DELETE, path, None, Bearer::Stored)
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        bearer: Bearer<'_>,
    ) -> EconomyResult<Option<T>> {
        let url = self.url(path);

        let token = match bearer {
            Bearer::Stored => self.store.token().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Could not read stored token; sending unauthenticated");
                None
            }),
            Bearer::Explicit(token) => Some(token.to_string()),
        };

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, authenticated = token.is_some(), "Sending request");

        let response = request.send().await.map_err(|e| {
            let err = classify_transport_error(&e);
            tracing::warn!(%method, %url, error = %e, "Request failed before a response arrived");
            err
        })?;

        let status = response.status();
        tracing::debug!(%method, %url, status = status.as_u16(), "Received response");

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let is_json = content_type.as_deref().map(is_json_content_type).unwrap_or(false);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| EconomyError::Connectivity(format!("Failed to read response body: {}", e)))?;

        if status == StatusCode::UNAUTHORIZED {
            let message = if is_json { error_message(&bytes) } else { String::new() };
            if path != endpoints::PROFILE {
                if let (Bearer::Stored, Some(token)) = (bearer, token.as_deref()) {
                    self.invalidate(token);
                }
            }
            return Err(EconomyError::Unauthorized(message));
        }

        if !is_json {
            tracing::warn!(%url, status = status.as_u16(), content_type = ?content_type, "Non-JSON response");
            return Err(EconomyError::MalformedResponse {
                endpoint: url,
                detail: format!(
                    "expected JSON, got {} (HTTP {})",
                    content_type.as_deref().unwrap_or("no content type"),
                    status.as_u16()
                ),
            });
        }

        if !status.is_success() {
            let err = status_error(status, error_message(&bytes));
            tracing::warn!(%method, %url, status = status.as_u16(), error = %err, "Backend returned an error");
            return Err(err);
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| EconomyError::MalformedResponse {
                endpoint: url,
                detail: e.to_string(),
            })
    }

    /// Clear a rejected token and tell the listeners, once per token
    fn invalidate(&self, token: &str) {
        match self.store.clear_if_token(token) {
            Ok(true) => {
                tracing::warn!("Backend rejected the stored token; credentials cleared");
                self.hooks.notify();
            }
            Ok(false) => {
                tracing::debug!("Rejected token was already replaced or cleared");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to compare stored token; clearing unconditionally");
                if let Err(e) = self.store.clear() {
                    tracing::error!(error = %e, "Failed to clear stored credentials");
                }
                self.hooks.notify();
            }
        }
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> EconomyResult<serde_json::Value> {
    serde_json::to_value(body)
        .map_err(|e| EconomyError::Request(format!("Failed to encode request body: {}", e)))
}

/// Split transport failures into "never sent" and "sent, no answer"
fn classify_transport_error(err: &reqwest::Error) -> EconomyError {
    if err.is_builder() {
        EconomyError::Request(err.to_string())
    } else {
        EconomyError::Connectivity(err.to_string())
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Pull `error` (or `message`) out of a JSON error body
fn error_message(bytes: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(bytes)
        .ok()
        .and_then(|body| body.error.or(body.message))
        .unwrap_or_default()
}

fn status_error(status: StatusCode, message: String) -> EconomyError {
    match status.as_u16() {
        400 => EconomyError::BadRequest(message),
        401 => EconomyError::Unauthorized(message),
        404 => EconomyError::NotFound(message),
        409 => EconomyError::Conflict(message),
        code @ 500..=599 => EconomyError::Server {
            status: code,
            message,
        },
        code => EconomyError::UnexpectedStatus {
            status: code,
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryCredentialStore;

    #[test]
    fn test_json_content_type() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("application/problem+json"));
        assert!(!is_json_content_type("text/html; charset=utf-8"));
        assert!(!is_json_content_type(""));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(r#"{"error": "ID inválido"}"#.as_bytes()), "ID inválido");
        assert_eq!(error_message(br#"{"message": "nada"}"#), "nada");
        assert_eq!(error_message(b"<html></html>"), "");
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(StatusCode::CONFLICT, String::new()),
            EconomyError::Conflict(_)
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, String::new()),
            EconomyError::Server { status: 502, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::IM_A_TEAPOT, String::new()),
            EconomyError::UnexpectedStatus { status: 418, .. }
        ));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new(
            "http://localhost:8080/api/",
            Arc::new(MemoryCredentialStore::new()),
        )
        .unwrap();
        assert_eq!(client.url("/despesas"), "http://localhost:8080/api/despesas");
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_request_error() {
        let client = ApiClient::new("not a url", Arc::new(MemoryCredentialStore::new())).unwrap();
        let err = client.get::<serde_json::Value>("/despesas").await.unwrap_err();
        assert!(matches!(err, EconomyError::Request(_)));
    }
}
