//! Shape resize engine.
//!
//! [`resize_shape`] computes the record a shape should have after being
//! scaled about a page-space origin along a (possibly rotated) pair of axes.
//! It only reads from the [`ShapeGraph`] and returns a new record; merging it
//! back into the document is up to the caller.
//!
//! Shapes whose page rotation is a multiple of 90° away from the scale axis
//! are resized directly ([`aligned`]). Any other shape would shear under a
//! non-uniform scale, so it is scaled uniformly and then moved so its centre
//! lands where the requested scale puts it ([`unaligned`]).

mod aligned;
mod options;
mod scale_point;
mod unaligned;

pub use options::ResizeOptions;
pub use scale_point::scale_page_point;

use tracing::{debug, warn};

use shapekit_core::angle::angles_compatible_within;
use shapekit_core::{Bounds, Point, ResizeError, Scale, ShapeId, Transform};

use crate::model::ShapeRecord;
use crate::shape_graph::ShapeGraph;

/// Resizes shape `id` by `scale`.
///
/// Fails when the document is read-only, the shape is missing, or its page
/// transform, bounds or parent cannot be resolved. Non-finite scale
/// components are treated as `1`.
pub fn resize_shape(
    graph: &dyn ShapeGraph,
    id: ShapeId,
    scale: Scale,
    options: &ResizeOptions,
) -> Result<ShapeRecord, ResizeError> {
    if graph.is_read_only() {
        return Err(ResizeError::ReadOnly);
    }

    let scale = sanitize_scale(id, scale);
    let current = graph.shape(id).ok_or(ResizeError::ShapeNotFound { id })?;
    let snapshot = Snapshot::resolve(graph, id, current, options)?;

    if !angles_compatible_within(
        snapshot.page_rotation,
        snapshot.scale_axis_rotation,
        options.angle_tolerance,
    ) {
        debug!(
            "Resizing {} unaligned: page rotation {:.4} vs scale axis {:.4}",
            id, snapshot.page_rotation, snapshot.scale_axis_rotation
        );
        return unaligned::resize_unaligned(graph, id, &snapshot, scale, options);
    }

    aligned::resize_aligned(graph, id, &snapshot, scale, options)
}

fn sanitize_scale(id: ShapeId, scale: Scale) -> Scale {
    if scale.is_finite() {
        return scale;
    }
    let sanitized = scale.sanitized();
    warn!("Non-finite scale {} for {}; using {}", scale, id, sanitized);
    sanitized
}

/// State of the shape when the gesture began, with every default resolved.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    pub initial_shape: ShapeRecord,
    pub initial_bounds: Bounds,
    pub initial_page_transform: Transform,
    pub page_rotation: f64,
    pub scale_origin: Point,
    pub scale_axis_rotation: f64,
}

impl Snapshot {
    fn resolve(
        graph: &dyn ShapeGraph,
        id: ShapeId,
        current: &ShapeRecord,
        options: &ResizeOptions,
    ) -> Result<Self, ResizeError> {
        let initial_shape = options
            .initial_shape
            .clone()
            .unwrap_or_else(|| current.clone());

        let initial_page_transform = match options.initial_page_transform {
            Some(transform) => transform,
            None => graph
                .page_transform(id)
                .ok_or(ResizeError::PageTransformNotFound { id })?,
        };
        if !initial_page_transform.is_finite() {
            return Err(ResizeError::PageTransformNotFound { id });
        }
        let page_rotation = initial_page_transform.rotation();

        let initial_bounds = match options.initial_bounds {
            Some(bounds) => bounds,
            None => graph
                .util_for(&initial_shape)
                .geometry(&initial_shape, graph)
                .bounds()
                .ok_or(ResizeError::PageBoundsNotFound { id })?,
        };

        let scale_origin = match options.scale_origin {
            Some(origin) => origin,
            None => initial_page_bounds(graph, id, &initial_shape, &initial_page_transform)?
                .center(),
        };

        Ok(Self {
            scale_axis_rotation: options.scale_axis_rotation.unwrap_or(page_rotation),
            initial_shape,
            initial_bounds,
            initial_page_transform,
            page_rotation,
            scale_origin,
        })
    }

    /// Transform of the space the shape's coordinates are expressed in.
    fn parent_transform(
        &self,
        graph: &dyn ShapeGraph,
        id: ShapeId,
    ) -> Result<Transform, ResizeError> {
        let parent = self.initial_shape.parent;
        graph
            .parent_space_transform(parent)
            .ok_or(ResizeError::ParentNotFound { id, parent })
    }
}

/// Page-space bounds of `shape` placed by `page_transform`.
fn initial_page_bounds(
    graph: &dyn ShapeGraph,
    id: ShapeId,
    shape: &ShapeRecord,
    page_transform: &Transform,
) -> Result<Bounds, ResizeError> {
    graph
        .util_for(shape)
        .geometry(shape, graph)
        .transformed_bounds(page_transform)
        .ok_or(ResizeError::PageBoundsNotFound { id })
}
