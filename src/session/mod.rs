//! Session state and its controller

pub mod controller;
pub mod state;

pub use controller::{RegisterOutcome, SessionController};
pub use state::{Session, SessionStatus};
