use shapekit_core::{Point, Scale};

/// Maps a page-space point through a scale anchored at `origin` and applied
/// along axes rotated by `axis_rotation`.
///
/// The point is rotated about the origin into the scale axes, scaled relative
/// to the origin, then rotated back. The steps do not commute.
pub fn scale_page_point(point: Point, origin: Point, scale: Scale, axis_rotation: f64) -> Point {
    let aligned = point.rotate_with(origin, -axis_rotation);
    let scaled = (aligned - origin).mul_components(scale.as_point()) + origin;
    scaled.rotate_with(origin, axis_rotation)
}
