//! Configuration module for economy-cli
//!
//! - Platform path resolution
//! - User settings persistence (backend URL override, timeouts)

pub mod paths;
pub mod settings;

pub use paths::EconomyPaths;
pub use settings::{Settings, DEFAULT_API_BASE_URL};
