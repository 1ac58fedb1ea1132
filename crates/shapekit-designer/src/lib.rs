//! # ShapeKit Designer
//!
//! Shape model, shape type capabilities and the resize engine.
//!
//! A [`Document`] holds the shapes of a page and exposes them through the
//! read-only [`ShapeGraph`] view. [`resize_shape`] computes the record a
//! shape should have after a scale gesture; the caller decides whether to
//! write it back (see [`Document::apply`] and [`Document::resize`]).
//!
//! ```no_run
//! use shapekit_core::{Point, Scale, ShapeId};
//! use shapekit_designer::{resize_shape, Document, ResizeOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = Document::load_from_file("page.json")?;
//! let options = ResizeOptions::new().with_scale_origin(Point::new(50.0, 50.0));
//! let resized = resize_shape(doc.graph(), ShapeId(1), Scale::new(2.0, 1.0), &options)?;
//! println!("{} is now at {}, {}", resized.id, resized.x, resized.y);
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod geometry;
pub mod model;
pub mod resize;
pub mod shape_graph;
pub mod shape_util;

pub use document::{Document, DocumentFile};
pub use geometry::Geometry;
pub use model::{
    GeoKind, GeoProps, ImageProps, LineProps, NoteProps, ShapeKind, ShapePartial, ShapeProps,
    ShapeRecord, TextProps,
};
pub use resize::{resize_shape, scale_page_point, ResizeOptions};
pub use shape_graph::ShapeGraph;
pub use shape_util::{ResizeHandler, ResizeInfo, ShapeUtil, ShapeUtilRegistry};
