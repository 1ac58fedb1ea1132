//! Geometry primitives: points, axis-aligned bounds, rigid transforms and
//! per-axis scale factors.

mod bounds;
mod point;
mod scale;
mod transform;

pub use bounds::Bounds;
pub use point::Point;
pub use scale::Scale;
pub use transform::Transform;
