//! Read-only view of a shape hierarchy.
//!
//! The resize engine only ever reads through [`ShapeGraph`]. Implementors
//! provide record lookup and type capabilities; the derived queries (page
//! transforms, bounds, parent-space conversion) are defined once on
//! `dyn ShapeGraph` and recomputed on every call.

use std::collections::HashSet;

use shapekit_core::{Bounds, ParentId, Point, ShapeId, Transform};

use crate::geometry::Geometry;
use crate::model::{ShapeKind, ShapeRecord};
use crate::shape_util::ShapeUtil;

pub trait ShapeGraph {
    /// Whether the document currently rejects edits.
    fn is_read_only(&self) -> bool;

    fn shape(&self, id: ShapeId) -> Option<&ShapeRecord>;

    /// Capabilities of a shape type.
    fn util(&self, kind: ShapeKind) -> &dyn ShapeUtil;

    /// Direct children of `id`, in draw order.
    fn children(&self, id: ShapeId) -> Vec<ShapeId>;
}

impl dyn ShapeGraph + '_ {
    pub fn util_for(&self, shape: &ShapeRecord) -> &dyn ShapeUtil {
        self.util(shape.kind())
    }

    /// Transform from the shape's local space into page space.
    ///
    /// `None` when the shape or one of its ancestors is missing, or the
    /// parent chain loops back on itself.
    pub fn page_transform(&self, id: ShapeId) -> Option<Transform> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = id;

        loop {
            if !visited.insert(current) {
                tracing::warn!("Parent chain of {} contains a cycle at {}", id, current);
                return None;
            }
            let shape = self.shape(current)?;
            chain.push(shape.local_transform());
            match shape.parent {
                ParentId::Page => break,
                ParentId::Shape(parent) => current = parent,
            }
        }

        Some(
            chain
                .iter()
                .rev()
                .fold(Transform::identity(), |acc, local| acc.then_local(local)),
        )
    }

    /// Page transform of the space a `parent` reference points into.
    pub fn parent_space_transform(&self, parent: ParentId) -> Option<Transform> {
        match parent {
            ParentId::Page => Some(Transform::identity()),
            ParentId::Shape(parent_id) => self.page_transform(parent_id),
        }
    }

    /// Page transform of the shape's parent (identity for top-level shapes).
    pub fn parent_transform(&self, id: ShapeId) -> Option<Transform> {
        let shape = self.shape(id)?;
        self.parent_space_transform(shape.parent)
    }

    /// Accumulated rotation of the shape in page space.
    pub fn page_rotation(&self, id: ShapeId) -> Option<f64> {
        self.page_transform(id).map(|t| t.rotation())
    }

    /// Local-space outline of the shape as defined by its type.
    pub fn geometry(&self, id: ShapeId) -> Option<Geometry> {
        let shape = self.shape(id)?;
        Some(self.util_for(shape).geometry(shape, self))
    }

    /// Axis-aligned page-space box around the shape's outline.
    pub fn page_bounds(&self, id: ShapeId) -> Option<Bounds> {
        let transform = self.page_transform(id)?;
        self.geometry(id)?.transformed_bounds(&transform)
    }

    /// Converts a page-space point into the shape's parent space.
    pub fn point_in_parent_space(&self, id: ShapeId, point: Point) -> Option<Point> {
        self.parent_transform(id).map(|t| t.apply_inverse(point))
    }
}
