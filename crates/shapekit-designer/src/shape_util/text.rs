use shapekit_core::{Point, ResizeMode};

use super::{resize_scaled, ResizeHandler, ResizeInfo, ShapeUtil, MIN_SIZE};
use crate::geometry::Geometry;
use crate::model::{ShapeKind, ShapePartial, ShapeProps, ShapeRecord};
use crate::shape_graph::ShapeGraph;

/// Text blocks.
///
/// In `scale_shape` mode, or from any handle other than the side handles,
/// text scales uniformly through its `scale` prop. Dragging a side handle in
/// `resize_bounds` mode changes the wrap width instead and turns off
/// auto-sizing.
///
/// Text is not reported as aspect-locked: the uniform scale already keeps its
/// proportions, and locking would stop a side drag from narrowing the wrap
/// width.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextShapeUtil;

impl ShapeUtil for TextShapeUtil {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Text
    }

    fn geometry(&self, shape: &ShapeRecord, _graph: &dyn ShapeGraph) -> Geometry {
        match &shape.props {
            ShapeProps::Text(props) => {
                Geometry::rectangle(props.w * props.scale, props.h * props.scale)
            }
            _ => Geometry::empty(),
        }
    }

    fn resize_handler(&self) -> Option<&dyn ResizeHandler> {
        Some(self)
    }
}

impl ResizeHandler for TextShapeUtil {
    fn on_resize(&self, shape: &ShapeRecord, info: &ResizeInfo<'_>) -> ShapePartial {
        let ShapeProps::Text(props) = &shape.props else {
            return ShapePartial::default();
        };
        let mut next = props.clone();

        if info.mode == ResizeMode::ScaleShape || !info.handle.is_horizontal_edge() {
            let (point, delta) = resize_scaled(shape, info);
            next.scale = delta * props.scale;
            return ShapePartial::position(point.x, point.y).with_props(ShapeProps::Text(next));
        }

        let next_width = (info.initial_bounds.width * info.scale_x).abs().max(MIN_SIZE);
        let point = if info.scale_x < 0.0 {
            info.new_point - Point::from_angle(shape.rotation) * next_width
        } else {
            info.new_point
        };
        next.w = next_width / props.scale;
        next.auto_size = false;
        ShapePartial::position(point.x, point.y).with_props(ShapeProps::Text(next))
    }
}
