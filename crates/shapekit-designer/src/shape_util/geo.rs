use super::{resize_box, ResizeHandler, ResizeInfo, ShapeUtil};
use crate::geometry::Geometry;
use crate::model::{GeoKind, ShapeKind, ShapePartial, ShapeProps, ShapeRecord};
use crate::shape_graph::ShapeGraph;

/// Rectangles, ellipses, triangles and diamonds drawn inside a `w` × `h` box.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoShapeUtil;

impl ShapeUtil for GeoShapeUtil {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Geo
    }

    fn geometry(&self, shape: &ShapeRecord, _graph: &dyn ShapeGraph) -> Geometry {
        let ShapeProps::Geo(props) = &shape.props else {
            return Geometry::empty();
        };
        match props.geo {
            GeoKind::Rectangle => Geometry::rectangle(props.w, props.h),
            GeoKind::Ellipse => Geometry::ellipse(props.w, props.h),
            GeoKind::Triangle => Geometry::triangle(props.w, props.h),
            GeoKind::Diamond => Geometry::diamond(props.w, props.h),
        }
    }

    fn resize_handler(&self) -> Option<&dyn ResizeHandler> {
        Some(self)
    }
}

impl ResizeHandler for GeoShapeUtil {
    fn on_resize(&self, shape: &ShapeRecord, info: &ResizeInfo<'_>) -> ShapePartial {
        let ShapeProps::Geo(props) = &shape.props else {
            return ShapePartial::default();
        };
        let resized = resize_box(shape, (props.w, props.h), info);
        let mut next = props.clone();
        next.w = resized.w;
        next.h = resized.h;
        ShapePartial::position(resized.x, resized.y).with_props(ShapeProps::Geo(next))
    }
}
