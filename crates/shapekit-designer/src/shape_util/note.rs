use super::ShapeUtil;
use crate::geometry::Geometry;
use crate::model::{ShapeKind, ShapeRecord};
use crate::shape_graph::ShapeGraph;

/// Width and height of every note.
pub const NOTE_SIZE: f64 = 200.0;

/// Sticky notes have a fixed size and are only ever moved by a resize.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoteShapeUtil;

impl ShapeUtil for NoteShapeUtil {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Note
    }

    fn geometry(&self, _shape: &ShapeRecord, _graph: &dyn ShapeGraph) -> Geometry {
        Geometry::rectangle(NOTE_SIZE, NOTE_SIZE)
    }

    fn can_resize(&self, _shape: &ShapeRecord) -> bool {
        false
    }
}
