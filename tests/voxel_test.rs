use fastener::builder::{Shape, MAX_VOXELS};
use fastener::KernelError;
use nalgebra::Vector3;

#[test]
fn voxelize_sphere_center_is_negative() {
    let grid = Shape::sphere(5.0).voxelize(1.0).unwrap();
    assert!(grid.value_at(Vector3::zeros()).unwrap() < 0.0);
}

#[test]
fn voxelize_sphere_corner_is_positive() {
    let grid = Shape::sphere(5.0).voxelize(1.0).unwrap();
    assert!(grid.value_at(grid.origin).unwrap() > 0.0);
}

#[test]
fn voxelize_resolution_matches() {
    let grid = Shape::sphere(5.0).voxelize(0.5).unwrap();
    // 10 units across plus a voxel of margin each side
    assert_eq!(grid.resolution, [22, 22, 22]);
    assert_eq!(grid.data.len(), grid.resolution.iter().product::<usize>());
}

#[test]
fn samples_are_taken_at_voxel_centers() {
    let s = Shape::rounded_cylinder(1.0, 0.0, 3.0).translate(0.5, 2.0, -1.0);
    let grid = s.voxelize(0.4).unwrap();
    let [nx, ny, nz] = grid.resolution;
    for cell in [[0, 0, 0], [nx / 2, ny / 3, nz - 1], [nx - 1, ny - 1, nz / 2]] {
        let c = grid.center(cell);
        assert_eq!(grid.cell_at(c), Some(cell));
        assert_eq!(grid.value_at(c), Some(s.distance(c) as f32));
    }
}

#[test]
fn points_outside_the_grid_have_no_sample() {
    let grid = Shape::sphere(1.0).voxelize(0.5).unwrap();
    assert_eq!(grid.value_at(grid.origin - Vector3::new(0.01, 0.0, 0.0)), None);
    assert_eq!(grid.value_at(Vector3::new(0.0, 100.0, 0.0)), None);
    assert_eq!(grid.value_at(Vector3::new(f64::NAN, 0.0, 0.0)), None);
}

#[test]
fn voxel_volume_approximates_cylinder() {
    let s = Shape::rounded_cylinder(3.0, 0.0, 5.0);
    let exact = std::f64::consts::PI * 9.0 * 10.0;
    let approx = s.voxelize(0.25).unwrap().volume();
    assert!((approx - exact).abs() / exact < 0.05);
}

#[test]
fn non_positive_voxel_size_is_rejected() {
    let s = Shape::sphere(1.0);
    for size in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        match s.voxelize(size) {
            Err(KernelError::Degenerate { what, .. }) => assert_eq!(what, "voxel size"),
            other => panic!("expected degenerate voxel size, got {other:?}"),
        }
    }
}

#[test]
fn oversized_grid_is_rejected() {
    let s = Shape::sphere(1.0);
    match s.voxelize(1e-4) {
        Err(KernelError::GridTooLarge { voxels }) => assert!(voxels > MAX_VOXELS as f64),
        other => panic!("expected grid too large, got {other:?}"),
    }
}

#[test]
fn disjoint_intersection_gives_an_empty_grid() {
    let s = Shape::sphere(1.0).intersect(Shape::sphere(1.0).translate(10.0, 0.0, 0.0));
    let grid = s.voxelize(0.5).unwrap();
    assert_eq!(grid.resolution[0], 0);
    assert!(grid.data.is_empty());
    assert_eq!(grid.value_at(Vector3::zeros()), None);
    assert_eq!(grid.volume(), 0.0);
}
