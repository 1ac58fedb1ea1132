//! Shape records and the sparse updates applied to them.

mod partial;
mod props;

pub use partial::ShapePartial;
pub use props::{GeoKind, GeoProps, ImageProps, LineProps, NoteProps, ShapeProps, TextProps};

use serde::{Deserialize, Serialize};
use std::fmt;

use shapekit_core::{ParentId, Point, ShapeId, Transform};

/// Shape type tag used to look up a shape's capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Geo,
    Image,
    Line,
    Text,
    Note,
    Group,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        Self::Geo,
        Self::Image,
        Self::Line,
        Self::Text,
        Self::Note,
        Self::Group,
    ];
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Geo => "geo",
            Self::Image => "image",
            Self::Line => "line",
            Self::Text => "text",
            Self::Note => "note",
            Self::Group => "group",
        };
        write!(f, "{}", name)
    }
}

/// A shape as stored in the document.
///
/// `x`/`y` place the shape's local origin in its parent's space and
/// `rotation` (radians) turns the shape about that origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: ShapeId,
    #[serde(default)]
    pub parent: ParentId,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    pub props: ShapeProps,
}

impl ShapeRecord {
    pub fn new(id: ShapeId, x: f64, y: f64, props: ShapeProps) -> Self {
        Self {
            id,
            parent: ParentId::Page,
            x,
            y,
            rotation: 0.0,
            props,
        }
    }

    pub fn with_parent(mut self, parent: ParentId) -> Self {
        self.parent = parent;
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.props.kind()
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Transform from this shape's local space into its parent's space.
    pub fn local_transform(&self) -> Transform {
        Transform::new(self.x, self.y, self.rotation)
    }

    /// Copy of this record with `partial` merged in.
    pub fn merged(&self, partial: &ShapePartial) -> Self {
        let mut next = self.clone();
        next.apply_partial(partial);
        next
    }

    /// Merges the fields present in `partial` into this record.
    ///
    /// Props of a different kind are ignored: a partial never changes a
    /// shape's type.
    pub fn apply_partial(&mut self, partial: &ShapePartial) {
        if let Some(x) = partial.x {
            self.x = x;
        }
        if let Some(y) = partial.y {
            self.y = y;
        }
        if let Some(rotation) = partial.rotation {
            self.rotation = rotation;
        }
        if let Some(props) = &partial.props {
            if props.kind() == self.kind() {
                self.props = props.clone();
            } else {
                tracing::warn!(
                    "Ignoring {} props in partial update for {} shape {}",
                    props.kind(),
                    self.kind(),
                    self.id
                );
            }
        }
    }
}
