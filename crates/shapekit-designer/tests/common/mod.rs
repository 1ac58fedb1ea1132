//! Fixtures shared by the designer integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use shapekit_core::{Bounds, ParentId, Point, ShapeId};
use shapekit_designer::{
    Document, GeoKind, GeoProps, ImageProps, LineProps, NoteProps, ShapeGraph, ShapeKind,
    ShapeProps, ShapeRecord, ShapeUtil, ShapeUtilRegistry,
};

pub const EPSILON: f64 = 1e-6;

pub fn geo(id: u64, geo: GeoKind, x: f64, y: f64, w: f64, h: f64) -> ShapeRecord {
    ShapeRecord::new(ShapeId(id), x, y, ShapeProps::Geo(GeoProps { geo, w, h }))
}

pub fn rect(id: u64, x: f64, y: f64, w: f64, h: f64) -> ShapeRecord {
    geo(id, GeoKind::Rectangle, x, y, w, h)
}

pub fn image(id: u64, x: f64, y: f64, w: f64, h: f64) -> ShapeRecord {
    ShapeRecord::new(
        ShapeId(id),
        x,
        y,
        ShapeProps::Image(ImageProps {
            w,
            h,
            flip_x: false,
            flip_y: false,
        }),
    )
}

pub fn line(id: u64, x: f64, y: f64, points: Vec<Point>) -> ShapeRecord {
    ShapeRecord::new(ShapeId(id), x, y, ShapeProps::Line(LineProps { points }))
}

pub fn note(id: u64, x: f64, y: f64) -> ShapeRecord {
    ShapeRecord::new(
        ShapeId(id),
        x,
        y,
        ShapeProps::Note(NoteProps {
            text: "todo".to_string(),
        }),
    )
}

pub fn group(id: u64, x: f64, y: f64) -> ShapeRecord {
    ShapeRecord::new(ShapeId(id), x, y, ShapeProps::Group)
}

pub fn document(shapes: Vec<ShapeRecord>) -> Document {
    let mut doc = Document::new();
    for shape in shapes {
        doc.insert(shape).expect("fixture shape should insert");
    }
    doc
}

/// `(w, h)` of a geo or image record.
pub fn size(shape: &ShapeRecord) -> (f64, f64) {
    shape.props.size().expect("shape should have a box size")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

pub fn assert_point(actual: Point, expected: Point) {
    assert!(
        actual.approx_eq(&expected, EPSILON),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

pub fn assert_bounds(actual: Bounds, expected: Bounds) {
    assert!(
        actual.approx_eq(&expected, EPSILON),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

/// Page bounds of `shape` if it replaced the record with the same id.
pub fn page_bounds_after(doc: &Document, shape: &ShapeRecord) -> Bounds {
    let mut next = doc.clone();
    next.apply(shape.clone()).expect("result should apply");
    next.graph()
        .page_bounds(shape.id)
        .expect("result should have page bounds")
}

/// Minimal shape graph that does no validation, for malformed hierarchies.
pub struct FixtureGraph {
    pub shapes: HashMap<ShapeId, ShapeRecord>,
    pub read_only: bool,
    pub registry: ShapeUtilRegistry,
}

impl FixtureGraph {
    pub fn new(shapes: Vec<ShapeRecord>) -> Self {
        Self {
            shapes: shapes.into_iter().map(|s| (s.id, s)).collect(),
            read_only: false,
            registry: ShapeUtilRegistry::new(),
        }
    }
}

impl ShapeGraph for FixtureGraph {
    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn shape(&self, id: ShapeId) -> Option<&ShapeRecord> {
        self.shapes.get(&id)
    }

    fn util(&self, kind: ShapeKind) -> &dyn ShapeUtil {
        self.registry.get(kind)
    }

    fn children(&self, id: ShapeId) -> Vec<ShapeId> {
        let mut ids: Vec<_> = self
            .shapes
            .values()
            .filter(|s| s.parent == ParentId::Shape(id))
            .map(|s| s.id)
            .collect();
        ids.sort();
        ids
    }
}
