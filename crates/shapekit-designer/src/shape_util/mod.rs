//! Shape type capabilities.
//!
//! Every [`ShapeKind`] has a [`ShapeUtil`] describing its outline and how it
//! takes part in a resize. Types that compute their own new dimensions also
//! expose a [`ResizeHandler`]; the resize engine only repositions the others.

mod geo;
mod group;
mod image;
mod line;
mod note;
mod registry;
mod resize_helpers;
mod text;

pub use geo::GeoShapeUtil;
pub use group::GroupShapeUtil;
pub use image::ImageShapeUtil;
pub use line::LineShapeUtil;
pub use note::{NoteShapeUtil, NOTE_SIZE};
pub use registry::ShapeUtilRegistry;
pub use resize_helpers::{resize_box, resize_scaled, ResizedBox, MIN_SIZE};
pub use text::TextShapeUtil;

use shapekit_core::{Bounds, Point, ResizeMode, SelectionHandle};

use crate::geometry::Geometry;
use crate::model::{ShapeKind, ShapePartial, ShapeRecord};
use crate::shape_graph::ShapeGraph;

/// Everything a resize handler needs to know about the gesture.
#[derive(Debug, Clone)]
pub struct ResizeInfo<'a> {
    /// New position of the shape's origin, in parent space.
    pub new_point: Point,
    pub handle: SelectionHandle,
    pub mode: ResizeMode,
    /// Scale along the shape's own X axis.
    pub scale_x: f64,
    /// Scale along the shape's own Y axis.
    pub scale_y: f64,
    /// Local bounds of the shape when the gesture started.
    pub initial_bounds: Bounds,
    pub initial_shape: &'a ShapeRecord,
    /// Whether the scale was locked to the shape's aspect ratio.
    pub is_aspect_ratio_locked: bool,
}

/// Type-specific resize callback.
pub trait ResizeHandler: Send + Sync {
    /// Returns the fields that change when `shape` is resized as described by
    /// `info`. `shape` sits at the pre-resize position.
    fn on_resize(&self, shape: &ShapeRecord, info: &ResizeInfo<'_>) -> ShapePartial;

    /// Called once before `on_resize`.
    fn on_resize_start(&self, _shape: &ShapeRecord) -> Option<ShapePartial> {
        None
    }

    /// Called once after `on_resize` with the snapshot and the resized record.
    fn on_resize_end(
        &self,
        _initial: &ShapeRecord,
        _current: &ShapeRecord,
    ) -> Option<ShapePartial> {
        None
    }
}

pub trait ShapeUtil: Send + Sync {
    fn kind(&self) -> ShapeKind;

    /// Outline of `shape` in its local space.
    fn geometry(&self, shape: &ShapeRecord, graph: &dyn ShapeGraph) -> Geometry;

    fn is_aspect_ratio_locked(&self, _shape: &ShapeRecord) -> bool {
        false
    }

    fn can_resize(&self, _shape: &ShapeRecord) -> bool {
        true
    }

    /// The type's resize callback, if it has one.
    fn resize_handler(&self) -> Option<&dyn ResizeHandler> {
        None
    }
}
