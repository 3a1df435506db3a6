//! Persistent engine preferences and their on-disk management.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::AppConfig;
