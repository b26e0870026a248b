use nalgebra::{Vector2, Vector3};
use std::f64::consts::TAU;

/// Signed distance to a sphere.
/// Negative inside, zero on surface, positive outside.
pub fn sdf_sphere(point: Vector3<f64>, center: Vector3<f64>, radius: f64) -> f64 {
    (point - center).norm() - radius
}

/// Signed distance to a rounded cylinder (cylinder with rounded edges at top/bottom).
/// `radius` is the cylinder radius, `round_radius` is the edge rounding,
/// `half_height` is half the length. Axis-aligned along Y.
/// The rounding stays inside the `radius` x `half_height` envelope.
/// Exact signed distance (Quilez).
pub fn sdf_rounded_cylinder(
    point: Vector3<f64>,
    center: Vector3<f64>,
    radius: f64,
    round_radius: f64,
    half_height: f64,
) -> f64 {
    let p = point - center;
    let d_radial = (p.x * p.x + p.z * p.z).sqrt() - radius + round_radius;
    let d_axial = p.y.abs() - half_height + round_radius;
    let outside = Vector2::new(d_radial.max(0.0), d_axial.max(0.0)).norm();
    let inside = d_radial.max(d_axial).min(0.0);
    outside + inside - round_radius
}

/// Exact signed distance to a simple closed polygon (Quilez).
///
/// Vertices may wind either way; the sign comes from an even-odd crossing
/// test. Fewer than three vertices encloses nothing, so the distance is
/// positive everywhere.
pub fn sdf_polygon(point: Vector2<f64>, vertices: &[Vector2<f64>]) -> f64 {
    let n = vertices.len();
    if n == 0 {
        return f64::INFINITY;
    }
    let mut d = (point - vertices[0]).norm_squared();
    let mut s = 1.0;
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];
        let e = vj - vi;
        let w = point - vi;
        let ee = e.dot(&e);
        let t = if ee > 0.0 { (w.dot(&e) / ee).clamp(0.0, 1.0) } else { 0.0 };
        let b = w - e * t;
        d = d.min(b.dot(&b));

        let c0 = point.y >= vi.y;
        let c1 = point.y < vj.y;
        let c2 = e.x * w.y > e.y * w.x;
        if (c0 && c1 && c2) || (!c0 && !c1 && !c2) {
            s = -s;
        }
        j = i;
    }
    if n < 3 {
        s = 1.0;
    }
    s * d.sqrt()
}

/// Wrap `x` into the centered period `[-period/2, period/2)`.
pub fn sawtooth(x: f64, period: f64) -> f64 {
    let x = x + period * 0.5;
    let t = x - period * (x / period).floor();
    t - period * 0.5
}

/// Map a 3D point onto the 2D cross-section of a helical sweep around Y.
///
/// The returned `x` is the position within one thread `pitch` (after
/// unwinding the helix of the given `lead`) and `y` is the radial distance
/// from the axis, corrected for a taper angle in radians.
pub fn screw_section(point: Vector3<f64>, pitch: f64, lead: f64, taper: f64) -> Vector2<f64> {
    let mut radial = (point.x * point.x + point.z * point.z).sqrt();
    if taper != 0.0 {
        radial += point.y * taper.tan();
    }
    let theta = point.z.atan2(point.x);
    let along = point.y + lead * theta / TAU;
    Vector2::new(sawtooth(along, pitch), radial)
}
