//! Service layer for economy-cli
//!
//! Services map backend endpoints to typed calls on top of [`ApiClient`]
//! and turn every failure into an [`EconomyError`] with a user-facing
//! message.
//!
//! [`ApiClient`]: crate::api::ApiClient
//! [`EconomyError`]: crate::error::EconomyError

pub mod auth;
pub mod expense;
pub mod limit;
pub mod status;

pub use auth::{AuthBackend, AuthService};
pub use expense::ExpenseService;
pub use limit::LimitService;
pub use status::{classify, SpendingStatus, StatusKind};
