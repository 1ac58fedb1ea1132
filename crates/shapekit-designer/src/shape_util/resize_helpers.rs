//! Resize math shared by the box-like shape types.

use shapekit_core::{Point, SelectionHandle};

use super::ResizeInfo;
use crate::model::ShapeRecord;

/// Smallest width or height a box shape is resized to.
pub const MIN_SIZE: f64 = 1.0;

/// Smallest multiplier [`resize_scaled`] applies.
const MIN_SCALE_DELTA: f64 = 0.01;

/// Placement and size of a box after [`resize_box`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizedBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Scales a `w` × `h` box by the gesture's scale.
///
/// A negative scale flips the box: it keeps a positive size and its origin is
/// shifted back along the shape's rotated axes so it covers the mirrored area.
/// Sizes below [`MIN_SIZE`] are clamped, anchored at the edge opposite the
/// dragged handle. With the aspect ratio locked both sides grow by the same
/// factor until the shorter one reaches [`MIN_SIZE`].
pub fn resize_box(shape: &ShapeRecord, size: (f64, f64), info: &ResizeInfo<'_>) -> ResizedBox {
    let (min_w, min_h) = min_box(size, info.is_aspect_ratio_locked);
    let (w, offset_x) = clamp_axis(
        size.0 * info.scale_x,
        min_w,
        info.handle.is_left_side(),
        info.handle.is_vertical_edge(),
    );
    let (h, offset_y) = clamp_axis(
        size.1 * info.scale_y,
        min_h,
        info.handle.is_top_side(),
        info.handle.is_horizontal_edge(),
    );

    let origin = info.new_point + Point::new(offset_x, offset_y).rotate(shape.rotation);
    ResizedBox {
        x: origin.x,
        y: origin.y,
        w,
        h,
    }
}

/// Smallest size each side may shrink to.
fn min_box(size: (f64, f64), aspect_locked: bool) -> (f64, f64) {
    let shorter = size.0.min(size.1);
    if !aspect_locked || !shorter.is_finite() || shorter <= 0.0 {
        return (MIN_SIZE, MIN_SIZE);
    }
    let factor = MIN_SIZE / shorter;
    (size.0 * factor, size.1 * factor)
}

/// Returns the clamped size along one axis and the origin offset it needs.
///
/// `leading` is set when the handle sits on the axis' near edge (left or
/// top), `centered` when it is the middle handle of a perpendicular edge.
/// A zero scale counts as unflipped.
fn clamp_axis(scaled: f64, min: f64, leading: bool, centered: bool) -> (f64, f64) {
    if scaled >= 0.0 {
        if scaled >= min {
            return (scaled, 0.0);
        }
        let offset = if leading {
            scaled - min
        } else if centered {
            (scaled - min) / 2.0
        } else {
            0.0
        };
        return (min, offset);
    }

    let size = -scaled;
    if size >= min {
        return (size, scaled);
    }
    let offset = if leading { -size } else { size - min };
    (min, offset)
}

/// Uniform multiplier for shapes that scale as a whole rather than resizing
/// their box, and the origin that keeps the scaled box under the gesture.
///
/// Edge handles use the scale along their own axis, corners the larger of
/// the two.
pub fn resize_scaled(shape: &ShapeRecord, info: &ResizeInfo<'_>) -> (Point, f64) {
    let delta = match info.handle {
        SelectionHandle::Left | SelectionHandle::Right => info.scale_x.abs(),
        SelectionHandle::Top | SelectionHandle::Bottom => info.scale_y.abs(),
        _ => info.scale_x.abs().max(info.scale_y.abs()),
    }
    .max(MIN_SCALE_DELTA);

    let mut offset = Point::ORIGIN;
    if info.scale_x < 0.0 {
        offset.x = info.initial_bounds.width * delta;
    }
    if info.scale_y < 0.0 {
        offset.y = info.initial_bounds.height * delta;
    }

    (info.new_point - offset.rotate(shape.rotation), delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GeoKind, GeoProps, ShapeProps};
    use shapekit_core::{Bounds, ResizeMode, ShapeId};
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn square() -> ShapeRecord {
        ShapeRecord::new(
            ShapeId(1),
            0.0,
            0.0,
            ShapeProps::Geo(GeoProps {
                geo: GeoKind::Rectangle,
                w: 100.0,
                h: 100.0,
            }),
        )
    }

    fn info(shape: &ShapeRecord, sx: f64, sy: f64, handle: SelectionHandle) -> ResizeInfo<'_> {
        ResizeInfo {
            new_point: Point::new(10.0, 20.0),
            handle,
            mode: ResizeMode::ScaleShape,
            scale_x: sx,
            scale_y: sy,
            initial_bounds: Bounds::new(0.0, 0.0, 100.0, 100.0),
            initial_shape: shape,
            is_aspect_ratio_locked: false,
        }
    }

    fn locked_info(shape: &ShapeRecord, s: f64, handle: SelectionHandle) -> ResizeInfo<'_> {
        ResizeInfo {
            is_aspect_ratio_locked: true,
            ..info(shape, s, s, handle)
        }
    }

    #[test]
    fn test_resize_box_scales_size() {
        let shape = square();
        let info = info(&shape, 2.0, 0.5, SelectionHandle::BottomRight);
        let out = resize_box(&shape, (100.0, 100.0), &info);
        assert_eq!(
            out,
            ResizedBox {
                x: 10.0,
                y: 20.0,
                w: 200.0,
                h: 50.0
            }
        );
    }

    #[test]
    fn test_resize_box_flip_offsets_origin() {
        let shape = square();
        let info = info(&shape, -1.0, 1.0, SelectionHandle::Left);
        let out = resize_box(&shape, (100.0, 100.0), &info);
        assert_eq!(out.w, 100.0);
        assert_eq!(out.x, -90.0);
        assert_eq!(out.y, 20.0);
    }

    #[test]
    fn test_resize_box_flip_follows_rotation() {
        let shape = square().with_rotation(FRAC_PI_2);
        let info = info(&shape, -1.0, 1.0, SelectionHandle::Right);
        let out = resize_box(&shape, (100.0, 100.0), &info);
        // the shape's X axis points down the page
        assert!((out.x - 10.0).abs() < EPSILON);
        assert!((out.y - -80.0).abs() < EPSILON);
    }

    #[test]
    fn test_resize_box_clamps_to_min_size() {
        let shape = square();
        let left = info(&shape, 0.001, 1.0, SelectionHandle::Left);
        let out = resize_box(&shape, (100.0, 100.0), &left);
        assert_eq!(out.w, MIN_SIZE);
        assert!((out.x - (10.0 + 0.1 - MIN_SIZE)).abs() < EPSILON);

        let right = info(&shape, 0.001, 1.0, SelectionHandle::Right);
        let out = resize_box(&shape, (100.0, 100.0), &right);
        assert_eq!(out.w, MIN_SIZE);
        assert_eq!(out.x, 10.0);
    }

    #[test]
    fn test_resize_box_zero_scale_does_not_flip() {
        let shape = square();
        let zero = info(&shape, 0.0, -0.0, SelectionHandle::BottomRight);
        let out = resize_box(&shape, (100.0, 100.0), &zero);
        let tiny = info(&shape, 1e-6, 1e-6, SelectionHandle::BottomRight);
        let near = resize_box(&shape, (100.0, 100.0), &tiny);
        assert_eq!(out, near);
        assert_eq!((out.x, out.y), (10.0, 20.0));
    }

    #[test]
    fn test_locked_resize_box_keeps_ratio_when_clamped() {
        let shape = square();
        for s in [0.005, 0.0, -0.004] {
            let info = locked_info(&shape, s, SelectionHandle::BottomRight);
            let out = resize_box(&shape, (100.0, 50.0), &info);
            assert!((out.w - 2.0).abs() < EPSILON, "width {} at scale {}", out.w, s);
            assert!((out.h - 1.0).abs() < EPSILON, "height {} at scale {}", out.h, s);
        }
    }

    #[test]
    fn test_locked_resize_box_anchors_opposite_edge() {
        let shape = square();
        let info = locked_info(&shape, 0.001, SelectionHandle::TopLeft);
        let out = resize_box(&shape, (100.0, 50.0), &info);
        // the far corner stays where the tiny box would have ended
        assert!((out.x + out.w - (10.0 + 0.1)).abs() < EPSILON);
        assert!((out.y + out.h - (20.0 + 0.05)).abs() < EPSILON);
    }

    #[test]
    fn test_locked_resize_box_ignores_degenerate_size() {
        let shape = square();
        let info = locked_info(&shape, 0.0, SelectionHandle::BottomRight);
        let out = resize_box(&shape, (0.0, 50.0), &info);
        assert_eq!((out.w, out.h), (MIN_SIZE, MIN_SIZE));
    }

    #[test]
    fn test_resize_scaled_picks_delta_by_handle() {
        let shape = square();
        let (_, delta) = resize_scaled(&shape, &info(&shape, 2.0, 3.0, SelectionHandle::Right));
        assert_eq!(delta, 2.0);
        let (_, delta) = resize_scaled(&shape, &info(&shape, 2.0, 3.0, SelectionHandle::Bottom));
        assert_eq!(delta, 3.0);
        let (_, delta) = resize_scaled(&shape, &info(&shape, 2.0, -3.0, SelectionHandle::TopLeft));
        assert_eq!(delta, 3.0);
    }

    #[test]
    fn test_resize_scaled_flip_moves_origin_back() {
        let shape = square();
        let info = info(&shape, -2.0, 2.0, SelectionHandle::BottomLeft);
        let (point, delta) = resize_scaled(&shape, &info);
        assert_eq!(delta, 2.0);
        assert_eq!(point, Point::new(10.0 - 200.0, 20.0));
    }
}
