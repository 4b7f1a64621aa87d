//! Authentication payloads
//!
//! Request types hold passwords, so they zeroize their buffers on drop and
//! redact them from `Debug` output.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::UserProfile;

/// Sign-in request body
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Sign-up request body
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct SignupRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    /// ISO date (`AAAA-MM-DD`)
    #[serde(rename = "dataNascimento")]
    pub birth_date: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "confirmacaoSenha")]
    pub password_confirmation: String,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("birth_date", &self.birth_date)
            .finish_non_exhaustive()
    }
}

/// Response from signin/signup
///
/// Signin returns `{token, user?}`; signup may return only `{message}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    /// The token, if present and non-empty
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_wire_names() {
        let creds = Credentials::new("a@b.com", "secret1");
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["senha"], "secret1");
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("a@b.com", "secret1");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("secret1"));
    }

    #[test]
    fn test_signup_wire_names() {
        let req = SignupRequest {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            birth_date: "1999-12-31".into(),
            password: "abcdef".into(),
            password_confirmation: "abcdef".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["nome"], "Ana");
        assert_eq!(json["dataNascimento"], "1999-12-31");
        assert_eq!(json["confirmacaoSenha"], "abcdef");
    }

    #[test]
    fn test_auth_response_variants() {
        let with_user: AuthResponse = serde_json::from_str(
            r#"{"token": "abc", "user": {"nome": "Ana", "email": "ana@example.com"}}"#,
        )
        .unwrap();
        assert_eq!(with_user.token(), Some("abc"));
        assert!(with_user.user.is_some());

        let message_only: AuthResponse =
            serde_json::from_str(r#"{"message": "Usuário criado com sucesso"}"#).unwrap();
        assert_eq!(message_only.token(), None);

        let empty_token: AuthResponse = serde_json::from_str(r#"{"token": ""}"#).unwrap();
        assert_eq!(empty_token.token(), None);
    }
}
