use fastener::dag::{SdfNode, SdfNode2d};
use nalgebra::{Rotation3, Vector2, Vector3};
use std::sync::Arc;

fn sphere(x: f64, radius: f64) -> Arc<SdfNode> {
    Arc::new(SdfNode::Sphere { center: Vector3::new(x, 0.0, 0.0), radius })
}

#[test]
fn dag_sphere_at_center_is_negative() {
    let node = SdfNode::Sphere { center: Vector3::zeros(), radius: 10.0 };
    assert!((node.evaluate(Vector3::zeros()) - (-10.0)).abs() < 1e-10);
}

#[test]
fn dag_union_is_min() {
    let u = SdfNode::Union(sphere(-5.0, 3.0), sphere(5.0, 3.0));
    let d = u.evaluate(Vector3::zeros());
    assert!((d - 2.0).abs() < 1e-10);
}

#[test]
fn dag_union_all_is_min_of_every_child() {
    let u = SdfNode::UnionAll(vec![sphere(-5.0, 3.0), sphere(0.0, 0.5), sphere(5.0, 3.0)]);
    assert!((u.evaluate(Vector3::zeros()) - (-0.5)).abs() < 1e-10);
    assert!((u.evaluate(Vector3::new(5.0, 0.0, 0.0)) - (-3.0)).abs() < 1e-10);
    assert!(SdfNode::UnionAll(Vec::new()).evaluate(Vector3::zeros()) > 0.0);
}

#[test]
fn dag_intersection_is_max() {
    let i = SdfNode::Intersection(sphere(-1.0, 3.0), sphere(1.0, 3.0));
    assert!((i.evaluate(Vector3::zeros()) - (-2.0)).abs() < 1e-10);
}

#[test]
fn dag_translate_moves_shape() {
    let t = SdfNode::Translate(sphere(0.0, 5.0), Vector3::new(10.0, 0.0, 0.0));
    assert!((t.evaluate(Vector3::new(10.0, 0.0, 0.0)) - (-5.0)).abs() < 1e-10);
}

#[test]
fn dag_rotate_moves_offcenter_shape() {
    let r = SdfNode::Rotate(
        sphere(4.0, 1.0),
        Rotation3::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2),
    );
    assert!(r.evaluate(Vector3::new(0.0, 4.0, 0.0)) < -0.99);
    assert!(r.evaluate(Vector3::new(4.0, 0.0, 0.0)) > 0.0);
}

#[test]
fn dag_offset2d_rounds_outward() {
    let tri = Arc::new(SdfNode2d::Polygon2d {
        vertices: vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)],
    });
    let grown = SdfNode2d::Offset2d(tri.clone(), 0.25);
    let p = Vector2::new(-0.2, -0.1);
    assert!(tri.evaluate(p) > 0.0);
    assert!(grown.evaluate(p) < 0.0);
    let (lo, hi) = grown.bounds().unwrap();
    assert!((lo.x + 0.25).abs() < 1e-12 && (hi.y - 1.25).abs() < 1e-12);
}

#[test]
fn dag_empty_polygon_has_no_bounds() {
    let empty = Arc::new(SdfNode2d::Polygon2d { vertices: Vec::new() });
    assert!(empty.bounds().is_none());
    assert!(SdfNode2d::Offset2d(empty.clone(), 1.0).bounds().is_none());
    assert_eq!(empty.evaluate(Vector2::zeros()), f64::INFINITY);
}
