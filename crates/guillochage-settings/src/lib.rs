//! Guillochage Settings Crate
//!
//! Handles application configuration: engine tunables, export defaults and
//! the recent files list, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, EngineSettings, ExportSettings, MAX_RECENT_FILES};
pub use error::{ConfigError, SettingsError, SettingsResult};
