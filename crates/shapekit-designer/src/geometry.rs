//! Shape outlines in local space.

use std::f64::consts::TAU;

use shapekit_core::{Bounds, Point, Transform};

/// Number of vertices used to approximate an ellipse outline.
pub const ELLIPSE_SEGMENTS: usize = 64;

/// Outline of a shape as a list of vertices in the shape's local space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geometry {
    pub vertices: Vec<Point>,
    pub closed: bool,
}

impl Geometry {
    pub fn polygon(vertices: Vec<Point>) -> Self {
        Self {
            vertices,
            closed: true,
        }
    }

    pub fn polyline(vertices: Vec<Point>) -> Self {
        Self {
            vertices,
            closed: false,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Axis-aligned `w` × `h` box with its top-left corner at the local origin.
    pub fn rectangle(w: f64, h: f64) -> Self {
        Self::polygon(Bounds::new(0.0, 0.0, w, h).corners().to_vec())
    }

    pub fn ellipse(w: f64, h: f64) -> Self {
        let (rx, ry) = (w / 2.0, h / 2.0);
        let vertices = (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let t = TAU * i as f64 / ELLIPSE_SEGMENTS as f64;
                Point::new(rx + rx * t.cos(), ry + ry * t.sin())
            })
            .collect();
        Self::polygon(vertices)
    }

    /// Isosceles triangle with its apex at the top-centre of the box.
    pub fn triangle(w: f64, h: f64) -> Self {
        Self::polygon(vec![
            Point::new(w / 2.0, 0.0),
            Point::new(w, h),
            Point::new(0.0, h),
        ])
    }

    pub fn diamond(w: f64, h: f64) -> Self {
        Self::polygon(vec![
            Point::new(w / 2.0, 0.0),
            Point::new(w, h / 2.0),
            Point::new(w / 2.0, h),
            Point::new(0.0, h / 2.0),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Local-space bounds, `None` when empty or not finite.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.vertices.iter().copied())
    }

    /// The same outline with every vertex mapped through `transform`.
    pub fn transformed(&self, transform: &Transform) -> Geometry {
        Geometry {
            vertices: self.vertices.iter().map(|v| transform.apply(*v)).collect(),
            closed: self.closed,
        }
    }

    /// Bounds of this outline after mapping it through `transform`.
    pub fn transformed_bounds(&self, transform: &Transform) -> Option<Bounds> {
        Bounds::from_points(self.vertices.iter().map(|v| transform.apply(*v)))
    }

    pub fn extend(&mut self, other: Geometry) {
        self.vertices.extend(other.vertices);
    }
}
