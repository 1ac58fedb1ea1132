use tracing::{debug, trace};

use shapekit_core::angle::axes_parallel_within;
use shapekit_core::{ResizeError, Scale, ShapeId};

use super::{scale_page_point, ResizeOptions, Snapshot};
use crate::model::ShapeRecord;
use crate::shape_graph::ShapeGraph;
use crate::shape_util::{ResizeHandler, ResizeInfo};

/// Resizes a shape whose rotation lines up with the scale axes.
pub(super) fn resize_aligned(
    graph: &dyn ShapeGraph,
    id: ShapeId,
    snapshot: &Snapshot,
    scale: Scale,
    options: &ResizeOptions,
) -> Result<ShapeRecord, ResizeError> {
    let util = graph.util_for(&snapshot.initial_shape);

    let locked = options
        .is_aspect_ratio_locked
        .unwrap_or_else(|| util.is_aspect_ratio_locked(&snapshot.initial_shape));
    let scale = if locked {
        let clamped = scale.locked_to_larger();
        trace!("Aspect lock on {}: scale {} -> {}", id, scale, clamped);
        clamped
    } else {
        scale
    };

    match util.resize_handler() {
        Some(handler) if util.can_resize(&snapshot.initial_shape) => {
            debug!("Resizing {} with its {} resize handler", id, util.kind());
            resize_with_handler(graph, id, snapshot, handler, scale, locked, options)
        }
        _ => {
            debug!("Repositioning {} without resizing", id);
            reposition(graph, id, snapshot, scale)
        }
    }
}

fn resize_with_handler(
    graph: &dyn ShapeGraph,
    id: ShapeId,
    snapshot: &Snapshot,
    handler: &dyn ResizeHandler,
    scale: Scale,
    locked: bool,
    options: &ResizeOptions,
) -> Result<ShapeRecord, ResizeError> {
    let parent = snapshot.parent_transform(graph, id)?;
    let initial = &snapshot.initial_shape;

    let initial_page_point = snapshot.initial_page_transform.translation();
    let new_page_point = scale_page_point(
        initial_page_point,
        snapshot.scale_origin,
        scale,
        snapshot.scale_axis_rotation,
    );
    let new_local_point = parent.apply_inverse(new_page_point);

    // the shape's own axes are a quarter turn off the scale axes
    let shape_scale = if axes_parallel_within(
        snapshot.page_rotation,
        snapshot.scale_axis_rotation,
        options.angle_tolerance,
    ) {
        scale
    } else {
        scale.swapped()
    };

    // handlers measure from where the shape started, even if the parent has
    // moved since
    let baseline_point = parent.apply_inverse(initial_page_point);
    let mut baseline = initial.clone();
    baseline.x = baseline_point.x;
    baseline.y = baseline_point.y;

    let info = ResizeInfo {
        new_point: new_local_point,
        handle: options.handle,
        mode: options.mode,
        scale_x: shape_scale.x,
        scale_y: shape_scale.y,
        initial_bounds: snapshot.initial_bounds,
        initial_shape: initial,
        is_aspect_ratio_locked: locked,
    };

    let mut result = initial.clone();
    if !options.skip_start_and_end_callbacks {
        if let Some(partial) = handler.on_resize_start(initial) {
            result.apply_partial(&partial);
        }
    }

    result.x = new_local_point.x;
    result.y = new_local_point.y;
    let partial = handler.on_resize(&baseline, &info);
    result.apply_partial(&partial);

    if !options.skip_start_and_end_callbacks {
        if let Some(partial) = handler.on_resize_end(initial, &result) {
            result.apply_partial(&partial);
        }
    }

    Ok(result)
}

/// Moves the shape so its centre follows the scale. Its size is unchanged.
fn reposition(
    graph: &dyn ShapeGraph,
    id: ShapeId,
    snapshot: &Snapshot,
    scale: Scale,
) -> Result<ShapeRecord, ResizeError> {
    let parent = snapshot.parent_transform(graph, id)?;

    let initial_page_center = snapshot
        .initial_page_transform
        .apply(snapshot.initial_bounds.center());
    let new_page_center = scale_page_point(
        initial_page_center,
        snapshot.scale_origin,
        scale,
        snapshot.scale_axis_rotation,
    );
    let delta = parent.apply_inverse(new_page_center) - parent.apply_inverse(initial_page_center);

    let mut result = snapshot.initial_shape.clone();
    result.x += delta.x;
    result.y += delta.y;
    Ok(result)
}
