use tracing::{debug, trace};

use shapekit_core::{ResizeError, Scale, ShapeId, Transform};

use super::{initial_page_bounds, resize_shape, scale_page_point, ResizeOptions, Snapshot};
use crate::model::ShapeRecord;
use crate::shape_graph::ShapeGraph;

/// Resizes a shape that is skewed relative to the scale axes.
///
/// The shape is scaled uniformly by the smaller of the two magnitudes so it
/// never outgrows the selection, mirrored by rotation when exactly one axis
/// flips, and finally translated so its page centre ends up where the full
/// scale would have put it.
pub(super) fn resize_unaligned(
    graph: &dyn ShapeGraph,
    id: ShapeId,
    snapshot: &Snapshot,
    scale: Scale,
    options: &ResizeOptions,
) -> Result<ShapeRecord, ResizeError> {
    let shape_scale = scale.locked_to_smaller();
    let initial_page_center = initial_page_bounds(
        graph,
        id,
        &snapshot.initial_shape,
        &snapshot.initial_page_transform,
    )?
    .center();
    trace!("Unaligned scale {} for {} normalized to {}", scale, id, shape_scale);

    // scaling about its own centre along its own axes is always aligned
    let inner = ResizeOptions {
        initial_shape: Some(snapshot.initial_shape.clone()),
        initial_bounds: Some(snapshot.initial_bounds),
        initial_page_transform: Some(snapshot.initial_page_transform),
        scale_origin: Some(initial_page_center),
        scale_axis_rotation: Some(snapshot.page_rotation),
        is_aspect_ratio_locked: options.is_aspect_ratio_locked,
        skip_start_and_end_callbacks: options.skip_start_and_end_callbacks,
        angle_tolerance: options.angle_tolerance,
        ..ResizeOptions::default()
    };
    let mut result = resize_shape(graph, id, shape_scale, &inner)?;

    let parent = snapshot.parent_transform(graph, id)?;

    if scale.is_mirror() {
        // reflect the page rotation across the scale axis
        let page_rotation = 2.0 * snapshot.scale_axis_rotation - snapshot.page_rotation;
        result.rotation = page_rotation - parent.rotation();
        debug!(
            "Mirroring {}: rotation {:.4} -> {:.4}",
            id, snapshot.initial_shape.rotation, result.rotation
        );
    }

    // the graph still holds the old record, so compose the new placement here
    let live = parent.then_local(&Transform::new(result.x, result.y, result.rotation));
    let actual_center = graph
        .util_for(&result)
        .geometry(&result, graph)
        .transformed_bounds(&live)
        .ok_or(ResizeError::PageBoundsNotFound { id })?
        .center();

    let desired_center = scale_page_point(
        initial_page_center,
        snapshot.scale_origin,
        scale,
        snapshot.scale_axis_rotation,
    );

    let page_origin = live.translation() + (desired_center - actual_center);
    if !page_origin.is_finite() {
        return Err(ResizeError::PageTransformNotFound { id });
    }
    let local_origin = parent.apply_inverse(page_origin);
    result.x = local_origin.x;
    result.y = local_origin.y;
    Ok(result)
}
