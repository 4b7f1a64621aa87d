//! Core data models for economy-cli
//!
//! Wire types for the backend (expenses, limits, auth payloads, profile) plus
//! the value types they are built from (money, reference month).

pub mod auth;
pub mod expense;
pub mod limit;
pub mod money;
pub mod month;
pub mod user;

pub use auth::{AuthResponse, Credentials, SignupRequest};
pub use expense::{total_spent, Expense, ExpenseUpdate, NewExpense};
pub use limit::{Limit, LimitUpdate, NewLimit};
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthParseError};
pub use user::UserProfile;
