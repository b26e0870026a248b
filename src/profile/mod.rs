//! 2D profiles for extrude, revolve, and screw operations.
//!
//! A `Profile` is an immutable 2D signed distance function. Profiles serve
//! as the cross-section for the shape-generating operations on
//! [`Shape`](crate::builder::Shape).

use std::f64::consts::TAU;
use std::sync::Arc;
use nalgebra::Vector2;
use crate::dag::SdfNode2d;

/// Flank half-angle of the ISO metric thread form (60° included).
const ISO_FLANK_ANGLE: f64 = std::f64::consts::PI / 6.0;

/// A 2D cross-section, cheaply cloneable.
#[derive(Clone, Debug)]
pub struct Profile {
    node: Arc<SdfNode2d>,
}

impl Profile {
    /// Closed polygon through `vertices`, in order.
    pub fn polygon(vertices: Vec<Vector2<f64>>) -> Self {
        Self { node: Arc::new(SdfNode2d::Polygon2d { vertices }) }
    }

    /// Regular `sides`-gon centered at the origin with corner radius `radius`.
    /// The first corner sits on the +X axis.
    pub fn regular_polygon(sides: usize, radius: f64) -> Self {
        let vertices = (0..sides)
            .map(|i| {
                let angle = TAU * i as f64 / sides as f64;
                Vector2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Self::polygon(vertices)
    }

    /// ISO metric thread form over one period, in (axial position, radius)
    /// coordinates, for a thread of major radius `radius`.
    ///
    /// The external form has a flat crest of `pitch/8` at `radius`; the
    /// internal form is the mating nut profile with its root cut back by
    /// `h/4`.
    pub fn iso_thread(radius: f64, pitch: f64, external: bool) -> Self {
        // height of the fundamental triangle
        let h = pitch / (2.0 * ISO_FLANK_ANGLE.tan());
        let r0 = radius - (7.0 / 8.0) * h;
        let vertices = if external {
            let x_ofs = pitch / 16.0;
            vec![
                Vector2::new(pitch, 0.0),
                Vector2::new(pitch, r0 + h),
                Vector2::new(pitch / 2.0, r0),
                Vector2::new(x_ofs, radius),
                Vector2::new(-x_ofs, radius),
                Vector2::new(-pitch / 2.0, r0),
                Vector2::new(-pitch, r0 + h),
                Vector2::new(-pitch, 0.0),
            ]
        } else {
            let r_minor = r0 + h / 4.0;
            let x_ofs = pitch / 8.0;
            vec![
                Vector2::new(pitch, 0.0),
                Vector2::new(pitch, r_minor),
                Vector2::new(pitch / 2.0 - x_ofs, r_minor),
                Vector2::new(0.0, r0 + h),
                Vector2::new(-pitch / 2.0 + x_ofs, r_minor),
                Vector2::new(-pitch, r_minor),
                Vector2::new(-pitch, 0.0),
            ]
        };
        Self::polygon(vertices)
    }

    /// Triangular knurl ridge of the given `height` standing on a core of
    /// `radius`, one `pitch` wide.
    pub fn knurl(radius: f64, pitch: f64, height: f64) -> Self {
        Self::polygon(vec![
            Vector2::new(pitch / 2.0, 0.0),
            Vector2::new(pitch / 2.0, radius),
            Vector2::new(0.0, radius + height),
            Vector2::new(-pitch / 2.0, radius),
            Vector2::new(-pitch / 2.0, 0.0),
        ])
    }

    /// Half cross-section of a rod of `radius` spanning `-half_length..half_length`
    /// along Y, for revolving. The outer corners are cut at 45° by
    /// `bottom` and `top` (zero leaves the corner square).
    pub fn chamfered_rod(radius: f64, half_length: f64, bottom: f64, top: f64) -> Self {
        let mut vertices = vec![Vector2::new(0.0, -half_length)];
        if bottom > 0.0 {
            vertices.push(Vector2::new(radius - bottom, -half_length));
            vertices.push(Vector2::new(radius, -half_length + bottom));
        } else {
            vertices.push(Vector2::new(radius, -half_length));
        }
        if top > 0.0 {
            vertices.push(Vector2::new(radius, half_length - top));
            vertices.push(Vector2::new(radius - top, half_length));
        } else {
            vertices.push(Vector2::new(radius, half_length));
        }
        vertices.push(Vector2::new(0.0, half_length));
        Self::polygon(vertices)
    }

    /// Grow the profile outward by `radius`, rounding convex corners.
    pub fn offset(self, radius: f64) -> Self {
        Self { node: Arc::new(SdfNode2d::Offset2d(self.node, radius)) }
    }

    /// Signed distance at `point`.
    pub fn distance(&self, point: Vector2<f64>) -> f64 {
        self.node.evaluate(point)
    }

    /// Axis-aligned `(min, max)` bounds, `None` for an empty profile.
    pub fn bounds(&self) -> Option<(Vector2<f64>, Vector2<f64>)> {
        self.node.bounds()
    }

    /// Expose the inner DAG node.
    pub fn node(&self) -> &Arc<SdfNode2d> {
        &self.node
    }
}
