//! cgpa-config
//!
//! User preferences for the calculator shell.
//! Owns the Config data structure plus disk persistence helpers. Course data
//! is never stored here.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, CONFIG_KEYS};
