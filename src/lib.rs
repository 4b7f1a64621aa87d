//! economy-cli - monthly expense tracking against a spending limit
//!
//! Client library and terminal front-end for the economy REST backend. Users
//! sign up, log in, record expenses per reference month (`YYYY-MM`), set a
//! monthly limit and see how their spending compares.
//!
//! # Architecture
//!
//! - `config`: data directory and user settings
//! - `error`: the crate-wide error type
//! - `models`: wire records, money (integer cents) and reference months
//! - `storage`: atomic JSON files and the persisted session
//! - `api`: HTTP client, endpoint paths and the forced-logout hooks
//! - `services`: auth/expense/limit calls and status classification
//! - `session`: the authentication state machine
//! - `format` / `forms`: input masks, validation and form state
//! - `display` / `cli`: terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use economy_cli::app::App;
//! use economy_cli::config::{EconomyPaths, Settings};
//!
//! let paths = EconomyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let app = App::build(paths, settings, None)?;
//! let session = app.session.initialize().await;
//! ```

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod format;
pub mod forms;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{EconomyError, EconomyResult};
