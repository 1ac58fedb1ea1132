//! Command-line front end.
//!
//! Usage:
//!   shapekit resize <DOCUMENT> --shape <ID> --scale <SX,SY> [OPTIONS]
//!   shapekit inspect <DOCUMENT> [--shape <ID>]
//!
//! Commands return their stdout text so they can be driven from tests.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use shapekit_core::{Bounds, Point, ResizeMode, Scale, SelectionHandle, ShapeId};
use shapekit_designer::{Document, ResizeOptions, ShapeGraph, ShapeKind};
use shapekit_settings::Config;

#[derive(Debug, Parser)]
#[command(name = "shapekit")]
#[command(about = "Resize shapes in a page document", version)]
pub struct Cli {
    /// Config file (JSON or TOML); defaults to the platform config directory
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resize one shape and print its new record
    Resize(ResizeArgs),
    /// Print page transforms and bounds
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
pub struct ResizeArgs {
    /// Page document (JSON)
    pub document: PathBuf,

    /// Shape to resize, e.g. `3` or `shape:3`
    #[arg(short, long)]
    pub shape: ShapeId,

    /// Scale factors along the scale axes, e.g. `2,1` or `-1,1`
    #[arg(long, allow_hyphen_values = true)]
    pub scale: Scale,

    /// Page point that stays fixed, e.g. `0,0`; defaults to the shape's centre
    #[arg(long, allow_hyphen_values = true)]
    pub origin: Option<Point>,

    /// Rotation of the scale axes in degrees; defaults to the shape's page rotation
    #[arg(long, allow_hyphen_values = true)]
    pub axis_deg: Option<f64>,

    /// Handle being dragged (overrides the config default)
    #[arg(long)]
    pub handle: Option<SelectionHandle>,

    /// Resize mode: scale_shape or resize_bounds (overrides the config default)
    #[arg(long)]
    pub mode: Option<ResizeMode>,

    /// Force the aspect-ratio lock on or off
    #[arg(long)]
    pub lock_aspect: Option<bool>,

    /// Write the resized shape back to the document
    #[arg(short, long)]
    pub write: bool,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Page document (JSON)
    pub document: PathBuf,

    /// Only report this shape
    #[arg(short, long)]
    pub shape: Option<ShapeId>,
}

/// Page-space summary of one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeReport {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub page_x: f64,
    pub page_y: f64,
    pub page_rotation_deg: f64,
    pub page_bounds: Option<Bounds>,
}

/// Loads the config named on the command line, or the user's config.
///
/// A missing or unreadable user config falls back to the defaults; an
/// explicit `--config` must load.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(Config::load_or_default().unwrap_or_else(|e| {
            warn!("Ignoring user config: {}", e);
            Config::default()
        })),
    }
}

pub fn run(command: &Command, config: &Config) -> anyhow::Result<String> {
    match command {
        Command::Resize(args) => resize(args, config),
        Command::Inspect(args) => inspect(args),
    }
}

fn load_document(path: &Path) -> anyhow::Result<Document> {
    Document::load_from_file(path)
        .with_context(|| format!("Failed to load document {}", path.display()))
}

/// Builds the resize request from config defaults and command-line overrides.
pub fn resize_options(args: &ResizeArgs, config: &Config) -> ResizeOptions {
    let mut options = config.resize.apply_to(ResizeOptions::new());
    if let Some(handle) = args.handle {
        options = options.with_handle(handle);
    }
    if let Some(mode) = args.mode {
        options = options.with_mode(mode);
    }
    if let Some(origin) = args.origin {
        options = options.with_scale_origin(origin);
    }
    if let Some(degrees) = args.axis_deg {
        options = options.with_scale_axis_rotation(degrees.to_radians());
    }
    if let Some(locked) = args.lock_aspect {
        options = options.with_aspect_ratio_locked(locked);
    }
    options
}

/// Resizes a shape and returns its new record as pretty JSON.
pub fn resize(args: &ResizeArgs, config: &Config) -> anyhow::Result<String> {
    let mut document = load_document(&args.document)?;
    let options = resize_options(args, config);

    let record = if args.write {
        let record = document
            .resize(args.shape, args.scale, &options)
            .with_context(|| format!("Failed to resize {}", args.shape))?;
        document.save_to_file(&args.document)?;
        info!("Wrote {} back to {}", args.shape, args.document.display());
        record
    } else {
        shapekit_designer::resize_shape(document.graph(), args.shape, args.scale, &options)
            .with_context(|| format!("Failed to resize {}", args.shape))?
    };

    Ok(serde_json::to_string_pretty(&record)?)
}

/// Reports page transforms and bounds as pretty JSON.
pub fn inspect(args: &InspectArgs) -> anyhow::Result<String> {
    let document = load_document(&args.document)?;
    let graph = document.graph();

    let reports = match args.shape {
        Some(id) => {
            let report =
                shape_report(graph, id).with_context(|| format!("No such shape: {}", id))?;
            vec![report]
        }
        None => document
            .shapes()
            .filter_map(|shape| shape_report(graph, shape.id))
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&reports)?)
}

pub fn shape_report(graph: &dyn ShapeGraph, id: ShapeId) -> Option<ShapeReport> {
    let shape = graph.shape(id)?;
    let transform = graph.page_transform(id)?;
    let origin = transform.translation();
    Some(ShapeReport {
        id,
        kind: shape.kind(),
        page_x: origin.x,
        page_y: origin.y,
        page_rotation_deg: transform.rotation().to_degrees(),
        page_bounds: graph.page_bounds(id),
    })
}
