use approx::assert_relative_eq;
use fastener::builder::Shape;
use fastener::profile::Profile;
use nalgebra::{Vector2, Vector3};

#[test]
fn builder_sphere_evaluates() {
    let s = Shape::sphere(5.0);
    assert!((s.distance(Vector3::zeros()) - (-5.0)).abs() < 1e-10);
}

#[test]
fn builder_chain_union() {
    let s = Shape::sphere(5.0)
        .union(Shape::sphere(5.0).translate(10.0, 0.0, 0.0));
    assert!(s.contains(Vector3::zeros()));
    assert!(s.contains(Vector3::new(10.0, 0.0, 0.0)));
    assert!(!s.contains(Vector3::new(100.0, 0.0, 0.0)));
}

#[test]
fn builder_union_all_matches_chained_union() {
    let parts = || (0..4).map(|i| Shape::sphere(1.0).translate(0.0, 3.0 * i as f64, 0.0));
    let flat = Shape::union_all(parts()).unwrap();
    let chained = parts().reduce(Shape::union).unwrap();
    for y in [-2.0, 0.0, 1.5, 4.5, 9.0, 11.0] {
        let p = Vector3::new(0.3, y, 0.0);
        assert_eq!(flat.distance(p), chained.distance(p));
    }
    assert_relative_eq!(flat.bounding_box().max.y, 10.0);
}

#[test]
fn builder_union_all_of_nothing_is_none() {
    assert!(Shape::union_all(Vec::new()).is_none());
}

#[test]
fn builder_intersect() {
    let s = Shape::sphere(5.0).intersect(Shape::sphere(5.0).translate(6.0, 0.0, 0.0));
    assert!(s.contains(Vector3::new(3.0, 0.0, 0.0)));
    assert!(!s.contains(Vector3::zeros()));
}

#[test]
fn builder_clone_is_cheap() {
    let s = Shape::sphere(5.0).translate(1.0, 2.0, 3.0);
    let s2 = s.clone();
    assert!((s.distance(Vector3::zeros()) - s2.distance(Vector3::zeros())).abs() < 1e-15);
}

#[test]
fn rounded_cylinder_bbox_is_its_envelope() {
    let b = Shape::rounded_cylinder(2.0, 0.3, 5.0).translate(0.0, 5.0, 0.0).bounding_box();
    assert_relative_eq!(b.min, Vector3::new(-2.0, 0.0, -2.0));
    assert_relative_eq!(b.max, Vector3::new(2.0, 10.0, 2.0));
}

#[test]
fn revolve_turns_profile_about_y() {
    let rect = Profile::polygon(vec![
        Vector2::new(0.0, -1.0),
        Vector2::new(3.0, -1.0),
        Vector2::new(3.0, 1.0),
        Vector2::new(0.0, 1.0),
    ]);
    let disc = Shape::revolve(&rect);
    assert!(disc.contains(Vector3::new(0.0, 0.0, 2.9)));
    assert!(disc.contains(Vector3::new(-2.0, 0.5, -2.0)));
    assert!(!disc.contains(Vector3::new(0.0, 1.1, 0.0)));
    let b = disc.bounding_box();
    assert_relative_eq!(b.max, Vector3::new(3.0, 1.0, 3.0));
}

#[test]
fn rotate_x_turns_extrusion_onto_y() {
    let square = Profile::regular_polygon(4, 2.0);
    let slab = Shape::extrude(&square, 0.5).rotate_x(-std::f64::consts::FRAC_PI_2);
    assert!(slab.contains(Vector3::new(0.0, 0.4, 0.0)));
    assert!(!slab.contains(Vector3::new(0.0, 0.6, 0.0)));
    assert!(slab.contains(Vector3::new(0.0, 0.0, 1.5)));
    let b = slab.bounding_box();
    assert_relative_eq!(b.max.y, 0.5, epsilon = 1e-12);
}

#[test]
fn screw_is_clipped_to_length() {
    let iso = Profile::iso_thread(3.0, 0.5, true);
    let screw = Shape::screw(&iso, 4.0, 0.0, 0.5, 1);
    assert!(screw.contains(Vector3::new(1.0, 1.9, 0.0)));
    assert!(!screw.contains(Vector3::new(1.0, 2.1, 0.0)));
    assert!(!screw.contains(Vector3::new(3.1, 0.0, 0.0)));
    let b = screw.bounding_box();
    assert_relative_eq!(b.max.y, 2.0);
    assert!(b.max.x >= 3.0);
}

#[test]
fn screw_crest_follows_the_helix() {
    // Points on the crest radius advance by one pitch per turn.
    let pitch = 1.0;
    let iso = Profile::iso_thread(3.0, pitch, true);
    let screw = Shape::screw(&iso, 10.0, 0.0, pitch, 1);
    let r = 2.98;
    let d0 = screw.distance(Vector3::new(r, 0.0, 0.0));
    let d1 = screw.distance(Vector3::new(r, pitch, 0.0));
    assert_relative_eq!(d0, d1, epsilon = 1e-9);
    // a quarter turn around is a quarter pitch further along
    let quarter = screw.distance(Vector3::new(0.0, 0.25 * pitch, r));
    assert_relative_eq!(quarter, d0, epsilon = 1e-9);
}
