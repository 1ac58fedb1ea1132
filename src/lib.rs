//! # ShapeKit
//!
//! Shape resize engine for infinite-canvas editors. Given a shape, a scale
//! factor and the context of the resize gesture (origin, scale axis, parent
//! transforms) it computes the shape's new position, size and orientation.
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Identifiers, geometry primitives, angle helpers, errors
//! 2. **shapekit-designer** - Shape model, shape type capabilities, documents
//!    and the resize engine
//! 3. **shapekit-settings** - Configuration persistence
//! 4. **shapekit** - This crate: re-exports, logging setup and the CLI
//!
//! ## Features
//!
//! - **Aligned resize**: shapes whose rotation matches the scale axes are
//!   resized by their type's handler, or repositioned when they have none
//! - **Unaligned resize**: skewed shapes are scaled uniformly and moved so
//!   their centre follows the requested scale, without shearing
//! - **Nested shapes**: transforms compose through any depth of rotated parents
//! - **Mirror flips**: a single negative axis produces a true mirror image

pub mod cli;

pub use shapekit_core::{
    Bounds, DocumentError, Error, ParentId, Point, ResizeError, ResizeMode, Result, Scale,
    SelectionHandle, ShapeId, Transform,
};

pub use shapekit_designer::{
    resize_shape, scale_page_point, Document, DocumentFile, GeoKind, GeoProps, Geometry,
    ImageProps, LineProps, NoteProps, ResizeHandler, ResizeInfo, ResizeOptions, ShapeGraph,
    ShapeKind, ShapePartial, ShapeProps, ShapeRecord, ShapeUtil, ShapeUtilRegistry, TextProps,
};

pub use shapekit_settings::{Config, LoggingSettings, ResizeSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(&LoggingSettings::default())
}

/// Initialize logging from the logging section of the config.
///
/// `RUST_LOG` takes precedence over `settings.level`. Output goes to stderr so
/// command output on stdout stays machine-readable.
pub fn init_logging_with(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&settings.level))?;

    if settings.json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_names(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
