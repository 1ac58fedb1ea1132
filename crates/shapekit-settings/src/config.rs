//! Persistent ShapeKit configuration.
//!
//! Settings are stored as JSON or TOML, chosen by file extension. The
//! default location is `shapekit/config.toml` under the platform config
//! directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use shapekit_core::angle::PRECISION;
use shapekit_core::{ResizeMode, SelectionHandle};
use shapekit_designer::ResizeOptions;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Defaults applied to every resize request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeSettings {
    /// Handle assumed when the caller does not name one
    pub default_handle: SelectionHandle,
    /// Resize mode assumed when the caller does not name one
    pub default_mode: ResizeMode,
    /// Skip the shape types' start and end callbacks
    pub skip_start_and_end_callbacks: bool,
    /// Tolerance in radians for treating rotations as aligned
    pub angle_tolerance: f64,
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self {
            default_handle: SelectionHandle::BottomRight,
            default_mode: ResizeMode::ScaleShape,
            skip_start_and_end_callbacks: false,
            angle_tolerance: PRECISION,
        }
    }
}

impl ResizeSettings {
    /// Fills these defaults into a resize request.
    pub fn apply_to(&self, options: ResizeOptions) -> ResizeOptions {
        let mut options = options
            .with_handle(self.default_handle)
            .with_mode(self.default_mode)
            .with_angle_tolerance(self.angle_tolerance);
        options.skip_start_and_end_callbacks |= self.skip_start_and_end_callbacks;
        options
    }
}

/// Log output preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `shapekit_designer=debug`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete ShapeKit configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Resize defaults
    pub resize: ResizeSettings,
    /// Logging preferences
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("none").to_string()).into()),
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "logging.level".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let tolerance = self.resize.angle_tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "resize.angle_tolerance".to_string(),
                value: tolerance.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// `shapekit/config.toml` under the platform config directory.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("shapekit").join("config.toml"))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()).into()
            })
    }

    /// Loads the config at [`default_path`](Self::default_path), or the
    /// defaults when there is no file yet.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
