// Resizing shapes inside rotated parents, and mirror flips on the unaligned
// path.

mod common;

use std::f64::consts::FRAC_PI_6;

use common::*;
use shapekit_core::{ParentId, Point, Scale, ShapeId};
use shapekit_designer::{resize_shape, ResizeOptions, ShapeProps, ShapeRecord};

fn line_points(shape: &ShapeRecord) -> Vec<Point> {
    match &shape.props {
        ShapeProps::Line(props) => props.points.clone(),
        other => panic!("expected line props, got {:?}", other),
    }
}

#[test]
fn test_nested_resize_matches_flattened_shape() {
    let parent_rotation = FRAC_PI_6;
    let nested = document(vec![
        group(1, 200.0, 100.0).with_rotation(parent_rotation),
        rect(2, 10.0, 20.0, 100.0, 50.0).with_parent(ParentId::Shape(ShapeId(1))),
    ]);
    let page = nested.graph().page_transform(ShapeId(2)).unwrap();
    let origin = nested.graph().page_bounds(ShapeId(2)).unwrap().center();

    let flat_origin = page.translation();
    let flat = document(vec![
        rect(2, flat_origin.x, flat_origin.y, 100.0, 50.0).with_rotation(page.rotation())
    ]);

    // the scale runs along the parent's own X axis
    let options = ResizeOptions::new()
        .with_scale_origin(origin)
        .with_scale_axis_rotation(parent_rotation);
    let scale = Scale::new(2.0, 1.0);

    let nested_result = resize_shape(nested.graph(), ShapeId(2), scale, &options).unwrap();
    let flat_result = resize_shape(flat.graph(), ShapeId(2), scale, &options).unwrap();

    assert_bounds(
        page_bounds_after(&nested, &nested_result),
        page_bounds_after(&flat, &flat_result),
    );

    // in the parent's frame this is a plain 2x stretch about the centre
    assert_point(nested_result.position(), Point::new(-40.0, 20.0));
    assert_eq!(size(&nested_result), (200.0, 50.0));
    assert_eq!(nested_result.rotation, 0.0);
    assert_eq!(nested_result.parent, ParentId::Shape(ShapeId(1)));
}

#[test]
fn test_nested_unaligned_resize_keeps_child_in_parent_space() {
    let nested = document(vec![
        group(1, 50.0, 50.0).with_rotation(FRAC_PI_6),
        rect(2, 0.0, 0.0, 40.0, 40.0)
            .with_parent(ParentId::Shape(ShapeId(1)))
            .with_rotation(0.2),
    ]);
    let before = nested.graph().page_bounds(ShapeId(2)).unwrap();
    let options = ResizeOptions::new().with_scale_axis_rotation(0.0);

    let result = resize_shape(nested.graph(), ShapeId(2), Scale::new(3.0, 2.0), &options).unwrap();

    assert_eq!(result.rotation, 0.2);
    assert!(approx(size(&result).0, 80.0));
    let after = page_bounds_after(&nested, &result);
    assert_point(after.center(), before.center());
}

#[test]
fn test_parent_moved_since_snapshot() {
    let mut doc = document(vec![
        group(1, 0.0, 0.0),
        rect(2, 10.0, 10.0, 20.0, 20.0).with_parent(ParentId::Shape(ShapeId(1))),
    ]);
    let snapshot = doc.get(ShapeId(2)).unwrap().clone();
    let page = doc.graph().page_transform(ShapeId(2)).unwrap();
    let bounds = doc.graph().geometry(ShapeId(2)).unwrap().bounds().unwrap();

    // the parent moves after the gesture starts
    let mut parent = doc.get(ShapeId(1)).unwrap().clone();
    parent.x = 100.0;
    doc.apply(parent).unwrap();

    let options = ResizeOptions::new()
        .with_initial_shape(snapshot)
        .with_initial_bounds(bounds)
        .with_initial_page_transform(page)
        .with_scale_origin(Point::new(10.0, 10.0));
    let result = resize_shape(doc.graph(), ShapeId(2), Scale::uniform(2.0), &options).unwrap();

    // the page placement is unchanged, expressed in the moved parent's space
    assert_point(result.position(), Point::new(-90.0, 10.0));
    assert_eq!(size(&result), (40.0, 40.0));
}

#[test]
fn test_mirror_flip_reflects_front_vertex() {
    let front = Point::new(100.0, 0.0);
    let doc = document(vec![
        line(1, 0.0, 0.0, vec![Point::ORIGIN, front]).with_rotation(FRAC_PI_6)
    ]);
    let page_front = doc.graph().page_transform(ShapeId(1)).unwrap().apply(front);
    let options = ResizeOptions::new()
        .with_scale_origin(Point::ORIGIN)
        .with_scale_axis_rotation(0.0);

    let result = resize_shape(doc.graph(), ShapeId(1), Scale::new(-1.0, 1.0), &options).unwrap();

    assert!(approx(result.rotation, -FRAC_PI_6));

    let mut flipped = doc.clone();
    flipped.apply(result.clone()).unwrap();
    let transform = flipped.graph().page_transform(ShapeId(1)).unwrap();
    let points = line_points(&result);

    let mirrored = Point::new(-page_front.x, page_front.y);
    let point_reflected = Point::new(-page_front.x, -page_front.y);
    let new_front = transform.apply(points[1]);
    assert_point(new_front, mirrored);
    assert!(!new_front.approx_eq(&point_reflected, EPSILON));
    assert_point(transform.apply(points[0]), Point::ORIGIN);
}

#[test]
fn test_point_reflection_is_not_a_mirror() {
    let doc = document(vec![
        line(1, 0.0, 0.0, vec![Point::ORIGIN, Point::new(100.0, 0.0)]).with_rotation(FRAC_PI_6),
    ]);
    let options = ResizeOptions::new()
        .with_scale_origin(Point::ORIGIN)
        .with_scale_axis_rotation(0.0);

    let result = resize_shape(doc.graph(), ShapeId(1), Scale::new(-1.0, -1.0), &options).unwrap();

    // both axes flipping is a half turn: rotation is kept
    assert_eq!(result.rotation, FRAC_PI_6);
}
