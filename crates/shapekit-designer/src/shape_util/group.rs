use super::ShapeUtil;
use crate::geometry::Geometry;
use crate::model::{ShapeKind, ShapeRecord};
use crate::shape_graph::ShapeGraph;

/// Groups have no outline of their own; their geometry is every child's
/// outline expressed in the group's space.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupShapeUtil;

impl ShapeUtil for GroupShapeUtil {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Group
    }

    fn geometry(&self, shape: &ShapeRecord, graph: &dyn ShapeGraph) -> Geometry {
        let mut outline = Geometry::polygon(Vec::new());
        for child_id in graph.children(shape.id) {
            // children on a broken or cyclic chain have no page transform
            if graph.page_transform(child_id).is_none() {
                continue;
            }
            let Some(child) = graph.shape(child_id) else {
                continue;
            };
            let Some(child_geometry) = graph.geometry(child_id) else {
                continue;
            };
            outline.extend(child_geometry.transformed(&child.local_transform()));
        }
        outline
    }
}
