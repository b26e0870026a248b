//! Bolt and nut head shapes.
//!
//! Heads are centered on the origin with their axis along Y, spanning
//! `-height/2..height/2`.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, TAU};
use crate::builder::Shape;
use crate::profile::Profile;

/// Hex corner rounding, as a fraction of the corner radius.
const HEX_CORNER_ROUND: f64 = 0.08;
/// Radius of the bevelling sphere, as a multiple of the corner radius.
const HEX_BEVEL_SPHERE: f64 = 1.6;
/// Edge rounding of the knurled head's core cylinder.
const KNURL_CORE_ROUND: f64 = 0.05;
/// Knurl ridge height, as a fraction of the knurl pitch.
const KNURL_RIDGE_HEIGHT: f64 = 0.3;
const KNURL_HELIX_ANGLE: f64 = FRAC_PI_4;

/// Which faces of a hex head get the spherical bevel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexBevel {
    None,
    /// The +Y face.
    Top,
    /// The -Y face.
    Bottom,
    Both,
}

impl HexBevel {
    fn top(self) -> bool {
        matches!(self, HexBevel::Top | HexBevel::Both)
    }

    fn bottom(self) -> bool {
        matches!(self, HexBevel::Bottom | HexBevel::Both)
    }
}

/// Hexagonal head with corner radius `radius` and the given `height`.
///
/// The six corners are rounded slightly, and the bevelled faces are
/// trimmed by a large sphere that meets the flats exactly at the face.
pub fn hex_head(radius: f64, height: f64, bevel: HexBevel) -> Shape {
    let corner = radius * HEX_CORNER_ROUND;
    let hex2d = Profile::regular_polygon(6, radius - corner).offset(corner);
    let mut head = Shape::extrude(&hex2d, height / 2.0).rotate_x(-FRAC_PI_2);

    if bevel != HexBevel::None {
        let sphere_r = radius * HEX_BEVEL_SPHERE;
        let flat = radius * FRAC_PI_6.cos();
        let ofs = (sphere_r * sphere_r - flat * flat).sqrt() - height / 2.0;
        if bevel.top() {
            head = head.intersect(Shape::sphere(sphere_r).translate(0.0, -ofs, 0.0));
        }
        if bevel.bottom() {
            head = head.intersect(Shape::sphere(sphere_r).translate(0.0, ofs, 0.0));
        }
    }
    head
}

/// Cross-hatched knurl band of `length` along Y.
///
/// Two opposite-handed multi-start screws of a triangular ridge profile are
/// intersected, leaving diamond-shaped bumps rising `height` above `radius`.
/// Returns `None` when `length` leaves no room for a ridge.
pub fn knurl(length: f64, radius: f64, pitch: f64, height: f64, helix_angle: f64) -> Option<Shape> {
    if length <= 0.0 {
        return None;
    }
    let starts = ((TAU * radius * helix_angle.tan() / pitch).floor() as i32).max(1);
    let ridge = Profile::knurl(radius, pitch, height);
    let right = Shape::screw(&ridge, length, 0.0, pitch, starts);
    let left = Shape::screw(&ridge, length, 0.0, pitch, -starts);
    Some(right.intersect(left))
}

/// Round knurled thumb-screw head of outer radius `radius` and `height`,
/// with knurl pitch `depth`.
pub fn knurled_head(radius: f64, height: f64, depth: f64) -> Shape {
    let core_round = radius * KNURL_CORE_ROUND;
    let knurl_length = depth * ((height - core_round) / depth).floor();
    let core = Shape::rounded_cylinder(radius - depth * 0.5, core_round, height / 2.0);
    let band = knurl(
        knurl_length,
        radius,
        depth,
        depth * KNURL_RIDGE_HEIGHT,
        KNURL_HELIX_ANGLE,
    );
    match band {
        Some(band) => core.union(band),
        None => core,
    }
}
