//! User profile as returned by the backend

use serde::{Deserialize, Serialize};

/// The logged-in user's profile
///
/// The backend speaks Portuguese field names; `name`/`birthDate` are accepted
/// too since the profile endpoint has shipped both spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "nome", alias = "name", default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(
        rename = "dataNascimento",
        alias = "birthDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            birth_date: None,
        }
    }

    /// First word of the name, used for greetings
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}
