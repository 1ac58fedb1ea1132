use serde::{Deserialize, Serialize};

use shapekit_core::Point;

/// Outline drawn by a geo shape inside its `w` × `h` box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoKind {
    #[default]
    Rectangle,
    Ellipse,
    Triangle,
    Diamond,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoProps {
    #[serde(default)]
    pub geo: GeoKind,
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageProps {
    pub w: f64,
    pub h: f64,
    #[serde(default)]
    pub flip_x: bool,
    #[serde(default)]
    pub flip_y: bool,
}

/// Open polyline; points are in the shape's local space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineProps {
    pub points: Vec<Point>,
}

/// Text block. `w` × `h` is the measured size at `scale` 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    pub text: String,
    pub w: f64,
    pub h: f64,
    #[serde(default = "default_text_scale")]
    pub scale: f64,
    #[serde(default = "default_auto_size")]
    pub auto_size: bool,
}

fn default_text_scale() -> f64 {
    1.0
}

fn default_auto_size() -> bool {
    true
}

/// Sticky note with a fixed footprint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NoteProps {
    #[serde(default)]
    pub text: String,
}

/// Type-specific properties, tagged by shape kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeProps {
    Geo(GeoProps),
    Image(ImageProps),
    Line(LineProps),
    Text(TextProps),
    Note(NoteProps),
    Group,
}

impl ShapeProps {
    pub fn kind(&self) -> super::ShapeKind {
        use super::ShapeKind;
        match self {
            Self::Geo(_) => ShapeKind::Geo,
            Self::Image(_) => ShapeKind::Image,
            Self::Line(_) => ShapeKind::Line,
            Self::Text(_) => ShapeKind::Text,
            Self::Note(_) => ShapeKind::Note,
            Self::Group => ShapeKind::Group,
        }
    }

    /// Width and height for the box-like kinds.
    pub fn size(&self) -> Option<(f64, f64)> {
        match self {
            Self::Geo(p) => Some((p.w, p.h)),
            Self::Image(p) => Some((p.w, p.h)),
            Self::Text(p) => Some((p.w * p.scale, p.h * p.scale)),
            _ => None,
        }
    }
}
