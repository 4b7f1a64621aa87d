//! HTTP access to the backend
//!
//! [`ApiClient`] is the single entry point; services build typed calls on
//! top of it and never talk to `reqwest` directly.

pub mod client;
pub mod endpoints;
pub mod hooks;

pub use client::{ApiClient, DEFAULT_TIMEOUT};
pub use hooks::{HookGuard, UnauthorizedHooks};

use serde::Deserialize;

/// Update responses come as `{message, data}`; older handlers return the
/// record bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Wrapped<T> {
    Envelope {
        data: T,
        #[serde(default)]
        message: Option<String>,
    },
    Bare(T),
}

impl<T> Wrapped<T> {
    pub fn into_inner(self) -> T {
        match self {
            Wrapped::Envelope { data, .. } => data,
            Wrapped::Bare(data) => data,
        }
    }
}

/// `{message}` body returned by deletes and plain acknowledgements
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
