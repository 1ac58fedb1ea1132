use shapekit_core::angle::PRECISION;
use shapekit_core::{Bounds, Point, ResizeMode, SelectionHandle, Transform};

use crate::model::ShapeRecord;

/// Overrides for a single resize call.
///
/// A drag gesture calls the engine once per frame. To keep the frames from
/// compounding, the caller captures the shape, its bounds and its page
/// transform when the gesture starts and passes the same snapshot every time.
/// Anything left unset is read from the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeOptions {
    pub initial_shape: Option<ShapeRecord>,
    /// Local-space bounds of the initial shape, handed to resize handlers and
    /// used to place shapes that are only repositioned. The centre correction
    /// for shapes skewed against the scale axes measures the shape's geometry
    /// and does not read these.
    pub initial_bounds: Option<Bounds>,
    pub initial_page_transform: Option<Transform>,
    /// Fixed page-space point of the scale. Defaults to the centre of the
    /// shape's page bounds.
    pub scale_origin: Option<Point>,
    /// Rotation of the axes the scale is applied along. Defaults to the
    /// shape's page rotation.
    pub scale_axis_rotation: Option<f64>,
    pub handle: SelectionHandle,
    pub mode: ResizeMode,
    /// Forces the aspect lock on or off instead of asking the shape type.
    pub is_aspect_ratio_locked: Option<bool>,
    pub skip_start_and_end_callbacks: bool,
    /// Tolerance (radians) for the rotation compatibility test.
    pub angle_tolerance: f64,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            initial_shape: None,
            initial_bounds: None,
            initial_page_transform: None,
            scale_origin: None,
            scale_axis_rotation: None,
            handle: SelectionHandle::default(),
            mode: ResizeMode::default(),
            is_aspect_ratio_locked: None,
            skip_start_and_end_callbacks: false,
            angle_tolerance: PRECISION,
        }
    }
}

impl ResizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_shape(mut self, shape: ShapeRecord) -> Self {
        self.initial_shape = Some(shape);
        self
    }

    pub fn with_initial_bounds(mut self, bounds: Bounds) -> Self {
        self.initial_bounds = Some(bounds);
        self
    }

    pub fn with_initial_page_transform(mut self, transform: Transform) -> Self {
        self.initial_page_transform = Some(transform);
        self
    }

    pub fn with_scale_origin(mut self, origin: Point) -> Self {
        self.scale_origin = Some(origin);
        self
    }

    pub fn with_scale_axis_rotation(mut self, rotation: f64) -> Self {
        self.scale_axis_rotation = Some(rotation);
        self
    }

    pub fn with_handle(mut self, handle: SelectionHandle) -> Self {
        self.handle = handle;
        self
    }

    pub fn with_mode(mut self, mode: ResizeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_aspect_ratio_locked(mut self, locked: bool) -> Self {
        self.is_aspect_ratio_locked = Some(locked);
        self
    }

    pub fn skipping_start_and_end_callbacks(mut self) -> Self {
        self.skip_start_and_end_callbacks = true;
        self
    }

    pub fn with_angle_tolerance(mut self, tolerance: f64) -> Self {
        self.angle_tolerance = tolerance;
        self
    }
}
