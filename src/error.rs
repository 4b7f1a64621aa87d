//! Custom error types for economy-cli
//!
//! One enum covers both local failures (config, storage, validation) and the
//! remote failure classes seen at the HTTP boundary. Every variant renders a
//! message fit to show to the user; only `Unauthorized` ends a session.

use thiserror::Error;

/// The main error type for economy-cli operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Persisted session/settings errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Client-side validation, raised before any request is sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// 401 from the backend
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 404 from the backend
    #[error("Not found: {0}")]
    NotFound(String),

    /// 409 from the backend (e.g. duplicate email)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 400 from the backend
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 5xx from the backend
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Any other non-success status
    #[error("Unexpected response ({status}): {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// The request was sent but no response came back
    #[error("Connection error: {0}")]
    Connectivity(String),

    /// The backend answered with something that is not the expected JSON
    #[error("Malformed response from {endpoint}: {detail}")]
    MalformedResponse { endpoint: String, detail: String },

    /// The request could not be built
    #[error("Request error: {0}")]
    Request(String),
}

impl EconomyError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Error returned for update/delete calls on records without an id
    pub fn invalid_id(entity_type: &str) -> Self {
        Self::Validation(format!("Invalid {} ID", entity_type))
    }

    /// Check if this is an authorization failure
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Check if the backend could not be reached
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this failure must end the current session.
    ///
    /// Connectivity and malformed-response errors never do.
    pub fn should_deauthenticate(&self) -> bool {
        self.is_unauthorized()
    }

    /// HTTP status carried by this error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::BadRequest(_) => Some(400),
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message for display
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Unauthorized(msg) => non_empty_or(msg, "Invalid credentials or expired token"),
            Self::NotFound(msg) => non_empty_or(msg, "Resource not found"),
            Self::Conflict(msg) => non_empty_or(msg, "Email is already in use"),
            Self::BadRequest(msg) => non_empty_or(msg, "Invalid data sent to the server"),
            Self::Server { message, .. } => {
                non_empty_or(message, "Internal server error. Check the backend logs")
            }
            Self::UnexpectedStatus { status, message } => {
                non_empty_or(message, &format!("Unexpected response from server (HTTP {})", status))
            }
            Self::Connectivity(_) => {
                "Connection error. Check your internet connection and that the backend is running"
                    .to_string()
            }
            Self::MalformedResponse { endpoint, .. } => format!(
                "Backend not found. Check that the server is running and reachable at {}",
                endpoint
            ),
            Self::Request(msg) => format!("Could not build request: {}", msg),
            Self::Config(_) | Self::Io(_) | Self::Json(_) | Self::Storage(_) => self.to_string(),
        }
    }

    /// Replace the message of a response error with a context-specific one.
    ///
    /// The variant (and therefore the deauthentication decision) is kept.
    pub fn with_context_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::Unauthorized(_) => Self::Unauthorized(message),
            Self::NotFound(_) => Self::NotFound(message),
            Self::Conflict(_) => Self::Conflict(message),
            Self::BadRequest(_) => Self::BadRequest(message),
            Self::Server { status, .. } => Self::Server { status, message },
            Self::UnexpectedStatus { status, .. } => Self::UnexpectedStatus { status, message },
            other => other,
        }
    }
}

fn non_empty_or(msg: &str, fallback: &str) -> String {
    if msg.trim().is_empty() {
        fallback.to_string()
    } else {
        msg.to_string()
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for EconomyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EconomyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for economy-cli operations
pub type EconomyResult<T> = Result<T, EconomyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EconomyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_only_unauthorized_deauthenticates() {
        assert!(EconomyError::Unauthorized(String::new()).should_deauthenticate());
        assert!(!EconomyError::Connectivity("timeout".into()).should_deauthenticate());
        assert!(!EconomyError::MalformedResponse {
            endpoint: "/despesas".into(),
            detail: "text/html".into(),
        }
        .should_deauthenticate());
        assert!(!EconomyError::Server {
            status: 500,
            message: String::new(),
        }
        .should_deauthenticate());
    }

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = EconomyError::BadRequest("O valor deve ser maior que zero".into());
        assert_eq!(err.user_message(), "O valor deve ser maior que zero");

        let err = EconomyError::BadRequest(String::new());
        assert_eq!(err.user_message(), "Invalid data sent to the server");
    }

    #[test]
    fn test_malformed_response_names_endpoint() {
        let err = EconomyError::MalformedResponse {
            endpoint: "http://localhost:8080/api/despesas".into(),
            detail: "content-type text/html".into(),
        };
        assert!(err
            .user_message()
            .contains("http://localhost:8080/api/despesas"));
    }

    #[test]
    fn test_context_message_keeps_variant() {
        let err = EconomyError::Unauthorized("token expired".into())
            .with_context_message("Incorrect email or password");
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Incorrect email or password");

        let err = EconomyError::Connectivity("refused".into()).with_context_message("ignored");
        assert!(err.is_connectivity());
    }

    #[test]
    fn test_status() {
        assert_eq!(EconomyError::Conflict(String::new()).status(), Some(409));
        assert_eq!(EconomyError::Connectivity(String::new()).status(), None);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EconomyError = io_err.into();
        assert!(matches!(err, EconomyError::Io(_)));
    }
}
