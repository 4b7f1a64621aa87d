//! CLI command handlers
//!
//! Bridges clap argument parsing with the session controller and the
//! service layer.

pub mod auth;
pub mod config;
pub mod expense;
pub mod limit;
pub mod status;

pub use auth::{handle_login, handle_logout, handle_signup, handle_whoami, LoginArgs, SignupArgs};
pub use config::{handle_config_command, ConfigCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use limit::{handle_limit_command, LimitCommands};
pub use status::handle_status_command;
