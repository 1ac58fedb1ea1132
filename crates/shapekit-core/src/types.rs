//! Identifiers and gesture tags shared by every ShapeKit crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a shape record in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl ShapeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape:{}", self.0)
    }
}

impl From<u64> for ShapeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for ShapeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("shape:").unwrap_or(s);
        raw.parse::<u64>()
            .map(ShapeId)
            .map_err(|_| format!("Invalid shape id: {}", s))
    }
}

/// The owner of a shape: either the page root or another shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentId {
    #[default]
    Page,
    Shape(ShapeId),
}

impl ParentId {
    pub fn shape_id(&self) -> Option<ShapeId> {
        match self {
            Self::Page => None,
            Self::Shape(id) => Some(*id),
        }
    }

    pub fn is_page(&self) -> bool {
        matches!(self, Self::Page)
    }
}

impl fmt::Display for ParentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page => write!(f, "page"),
            Self::Shape(id) => write!(f, "{}", id),
        }
    }
}

/// Selection handle dragged during a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionHandle {
    TopLeft,
    Top,
    TopRight,
    Right,
    #[default]
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl SelectionHandle {
    pub const ALL: [SelectionHandle; 8] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
    ];

    /// True for the four corner handles.
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomRight | Self::BottomLeft
        )
    }

    /// True for handles that sit on the left edge of the box.
    pub fn is_left_side(&self) -> bool {
        matches!(self, Self::TopLeft | Self::Left | Self::BottomLeft)
    }

    /// True for handles that sit on the top edge of the box.
    pub fn is_top_side(&self) -> bool {
        matches!(self, Self::TopLeft | Self::Top | Self::TopRight)
    }

    /// True for the handles in the middle of the left and right edges.
    pub fn is_horizontal_edge(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// True for the handles in the middle of the top and bottom edges.
    pub fn is_vertical_edge(&self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

impl fmt::Display for SelectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TopLeft => "top_left",
            Self::Top => "top",
            Self::TopRight => "top_right",
            Self::Right => "right",
            Self::BottomRight => "bottom_right",
            Self::Bottom => "bottom",
            Self::BottomLeft => "bottom_left",
            Self::Left => "left",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SelectionHandle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "top_left" => Ok(Self::TopLeft),
            "top" => Ok(Self::Top),
            "top_right" => Ok(Self::TopRight),
            "right" => Ok(Self::Right),
            "bottom_right" => Ok(Self::BottomRight),
            "bottom" => Ok(Self::Bottom),
            "bottom_left" => Ok(Self::BottomLeft),
            "left" => Ok(Self::Left),
            _ => Err(format!("Unknown selection handle: {}", s)),
        }
    }
}

/// How a shape type should interpret a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeMode {
    /// Proportional whole-shape scaling (the default).
    #[default]
    ScaleShape,
    /// Resize the shape's bounds only, leaving its content scale alone.
    ResizeBounds,
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScaleShape => write!(f, "scale_shape"),
            Self::ResizeBounds => write!(f, "resize_bounds"),
        }
    }
}

impl FromStr for ResizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "scale_shape" | "scale" => Ok(Self::ScaleShape),
            "resize_bounds" | "bounds" => Ok(Self::ResizeBounds),
            _ => Err(format!("Unknown resize mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_id_parse_and_display() {
        let id: ShapeId = "shape:42".parse().unwrap();
        assert_eq!(id, ShapeId(42));
        assert_eq!(id.to_string(), "shape:42");
        assert_eq!("7".parse::<ShapeId>().unwrap(), ShapeId(7));
        assert!("shape:abc".parse::<ShapeId>().is_err());
    }

    #[test]
    fn test_parent_id_serde() {
        let page = serde_json::to_string(&ParentId::Page).unwrap();
        assert_eq!(page, "\"page\"");

        let nested: ParentId = serde_json::from_str(r#"{"shape":3}"#).unwrap();
        assert_eq!(nested, ParentId::Shape(ShapeId(3)));
        assert_eq!(nested.shape_id(), Some(ShapeId(3)));
    }

    #[test]
    fn test_handle_round_trip_through_str() {
        for handle in SelectionHandle::ALL {
            let parsed: SelectionHandle = handle.to_string().parse().unwrap();
            assert_eq!(parsed, handle);
        }
        assert_eq!(
            "bottom-left".parse::<SelectionHandle>().unwrap(),
            SelectionHandle::BottomLeft
        );
        assert_eq!(SelectionHandle::default(), SelectionHandle::BottomRight);
    }

    #[test]
    fn test_resize_mode_defaults_to_scale_shape() {
        assert_eq!(ResizeMode::default(), ResizeMode::ScaleShape);
        assert_eq!(
            "resize_bounds".parse::<ResizeMode>().unwrap(),
            ResizeMode::ResizeBounds
        );
        assert!("stretch".parse::<ResizeMode>().is_err());
    }
}
