//! ShapeKit Settings Crate
//!
//! Handles configuration persistence for the resize engine and logging.

pub mod config;
pub mod error;

pub use config::{Config, LoggingSettings, ResizeSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
