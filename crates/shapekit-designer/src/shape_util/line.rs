use shapekit_core::Point;

use super::{ResizeHandler, ResizeInfo, ShapeUtil};
use crate::geometry::Geometry;
use crate::model::{LineProps, ShapeKind, ShapePartial, ShapeProps, ShapeRecord};
use crate::shape_graph::ShapeGraph;

/// Open polylines. Resizing scales every point about the shape's origin, so
/// the origin itself ends up at the engine's new point.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineShapeUtil;

impl ShapeUtil for LineShapeUtil {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn geometry(&self, shape: &ShapeRecord, _graph: &dyn ShapeGraph) -> Geometry {
        match &shape.props {
            ShapeProps::Line(props) => Geometry::polyline(props.points.clone()),
            _ => Geometry::empty(),
        }
    }

    fn resize_handler(&self) -> Option<&dyn ResizeHandler> {
        Some(self)
    }
}

impl ResizeHandler for LineShapeUtil {
    fn on_resize(&self, shape: &ShapeRecord, info: &ResizeInfo<'_>) -> ShapePartial {
        let ShapeProps::Line(props) = &shape.props else {
            return ShapePartial::default();
        };
        let scale = Point::new(info.scale_x, info.scale_y);
        let points = props
            .points
            .iter()
            .map(|p| p.mul_components(scale))
            .collect();
        ShapePartial::props(ShapeProps::Line(LineProps { points }))
    }
}
