//! Rigid page transforms.
//!
//! A shape's page transform maps its local space into page space. It is the
//! product of every ancestor's local transform, and each local transform is a
//! translation by the record's `(x, y)` followed by its `rotation`. There is no
//! scale or shear, so the composition is an isometry and is represented with
//! `nalgebra::Isometry2`.

use nalgebra::{Isometry2, Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

use super::Point;

/// Translation × rotation transform from a local space into its parent space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "TransformRepr", into = "TransformRepr")]
pub struct Transform {
    iso: Isometry2<f64>,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            iso: Isometry2::identity(),
        }
    }

    /// Local transform of a record placed at `(x, y)` with `rotation` radians.
    pub fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self {
            iso: Isometry2::new(Vector2::new(x, y), rotation),
        }
    }

    pub fn from_isometry(iso: Isometry2<f64>) -> Self {
        Self { iso }
    }

    pub fn isometry(&self) -> &Isometry2<f64> {
        &self.iso
    }

    /// Where the local origin lands.
    pub fn translation(&self) -> Point {
        self.iso.translation.vector.into()
    }

    /// Rotation in radians, in `(-π, π]`.
    pub fn rotation(&self) -> f64 {
        self.iso.rotation.angle()
    }

    /// Maps a local point into the target space.
    pub fn apply(&self, point: Point) -> Point {
        self.iso.transform_point(&Point2::from(point)).into()
    }

    /// Maps a point from the target space back into local space.
    pub fn apply_inverse(&self, point: Point) -> Point {
        self.iso.inverse_transform_point(&Point2::from(point)).into()
    }

    pub fn inverse(&self) -> Self {
        Self {
            iso: self.iso.inverse(),
        }
    }

    /// `self` applied after `local`: the page transform of a child whose local
    /// transform is `local` and whose parent's page transform is `self`.
    pub fn then_local(&self, local: &Transform) -> Self {
        Self {
            iso: self.iso * local.iso,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.translation().is_finite() && self.rotation().is_finite()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.then_local(&rhs)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct TransformRepr {
    x: f64,
    y: f64,
    rotation: f64,
}

impl From<TransformRepr> for Transform {
    fn from(repr: TransformRepr) -> Self {
        Transform::new(repr.x, repr.y, repr.rotation)
    }
}

impl From<Transform> for TransformRepr {
    fn from(t: Transform) -> Self {
        let origin = t.translation();
        TransformRepr {
            x: origin.x,
            y: origin.y,
            rotation: t.rotation(),
        }
    }
}
