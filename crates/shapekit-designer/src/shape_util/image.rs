use super::{resize_box, ResizeHandler, ResizeInfo, ShapeUtil};
use crate::geometry::Geometry;
use crate::model::{ShapeKind, ShapePartial, ShapeProps, ShapeRecord};
use crate::shape_graph::ShapeGraph;

/// Raster images. Always keep their aspect ratio; a negative scale toggles
/// the flip flags instead of mirroring the box.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageShapeUtil;

impl ShapeUtil for ImageShapeUtil {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Image
    }

    fn geometry(&self, shape: &ShapeRecord, _graph: &dyn ShapeGraph) -> Geometry {
        match &shape.props {
            ShapeProps::Image(props) => Geometry::rectangle(props.w, props.h),
            _ => Geometry::empty(),
        }
    }

    fn is_aspect_ratio_locked(&self, _shape: &ShapeRecord) -> bool {
        true
    }

    fn resize_handler(&self) -> Option<&dyn ResizeHandler> {
        Some(self)
    }
}

impl ResizeHandler for ImageShapeUtil {
    fn on_resize(&self, shape: &ShapeRecord, info: &ResizeInfo<'_>) -> ShapePartial {
        let ShapeProps::Image(props) = &shape.props else {
            return ShapePartial::default();
        };
        let (initial_flip_x, initial_flip_y) = match &info.initial_shape.props {
            ShapeProps::Image(initial) => (initial.flip_x, initial.flip_y),
            _ => (props.flip_x, props.flip_y),
        };

        let resized = resize_box(shape, (props.w, props.h), info);
        let mut next = props.clone();
        next.w = resized.w;
        next.h = resized.h;
        next.flip_x = (info.scale_x < 0.0) != initial_flip_x;
        next.flip_y = (info.scale_y < 0.0) != initial_flip_y;
        ShapePartial::position(resized.x, resized.y).with_props(ShapeProps::Image(next))
    }
}
