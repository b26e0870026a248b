//! SdfNode expression DAG, an enum-based composable SDF tree.
//!
//! Children are held behind `Arc<SdfNode>`, so a whole bolt can be cloned
//! and shared across threads without copying geometry.

use std::sync::Arc;
use nalgebra::{Rotation3, Vector2, Vector3};
use crate::{csg, primitives};

// ---------------------------------------------------------------------------
// SdfNode2d: 2D profile sub-enum (for Revolve / Extrude / Screw)
// ---------------------------------------------------------------------------

/// A 2D signed distance function node, used as the cross-section profile
/// for `SdfNode::Revolve`, `SdfNode::Extrude` and `SdfNode::Screw`.
#[derive(Debug)]
pub enum SdfNode2d {
    /// Closed polygon through `vertices`.
    Polygon2d { vertices: Vec<Vector2<f64>> },
    /// Grow (positive) or shrink (negative) a profile by `radius`,
    /// rounding its convex corners.
    Offset2d(Arc<SdfNode2d>, f64),
}

impl SdfNode2d {
    /// Evaluate the 2D signed distance at a point.
    pub fn evaluate(&self, point: Vector2<f64>) -> f64 {
        match self {
            SdfNode2d::Polygon2d { vertices } => primitives::sdf_polygon(point, vertices),
            SdfNode2d::Offset2d(inner, radius) => inner.evaluate(point) - radius,
        }
    }

    /// Axis-aligned bounds `(min, max)` of the profile, or `None` when the
    /// profile encloses nothing.
    pub fn bounds(&self) -> Option<(Vector2<f64>, Vector2<f64>)> {
        match self {
            SdfNode2d::Polygon2d { vertices } => {
                let first = *vertices.first()?;
                Some(vertices.iter().fold((first, first), |(lo, hi), v| {
                    (lo.inf(v), hi.sup(v))
                }))
            }
            SdfNode2d::Offset2d(inner, radius) => {
                let (lo, hi) = inner.bounds()?;
                let r = Vector2::new(*radius, *radius);
                Some((lo - r, hi + r))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// SdfNode: the main 3D DAG
// ---------------------------------------------------------------------------

/// An expression DAG node representing a signed distance function.
///
/// Each variant stores its parameters inline. Children are held behind
/// `Arc<SdfNode>` so the DAG can be cheaply cloned and shared.
#[derive(Debug)]
pub enum SdfNode {
    // -- Primitives --------------------------------------------------------

    /// Sphere at `center` with given `radius`.
    Sphere { center: Vector3<f64>, radius: f64 },

    /// Rounded cylinder aligned along Y axis.
    RoundedCylinder { center: Vector3<f64>, radius: f64, round_radius: f64, half_height: f64 },

    // -- CSG Operations ----------------------------------------------------

    /// Boolean union (logical OR): min of children.
    Union(Arc<SdfNode>, Arc<SdfNode>),

    /// N-ary boolean union over any number of children.
    UnionAll(Vec<Arc<SdfNode>>),

    /// Boolean intersection (logical AND): max of children.
    Intersection(Arc<SdfNode>, Arc<SdfNode>),

    // -- Transforms --------------------------------------------------------

    /// Translate by an offset vector.
    Translate(Arc<SdfNode>, Vector3<f64>),

    /// Rotate by a rotation matrix.
    Rotate(Arc<SdfNode>, Rotation3<f64>),

    // -- 2D → 3D -----------------------------------------------------------

    /// Revolve a 2D profile around the Y axis. Profile X is the radial
    /// distance, profile Y is world Y.
    Revolve(Arc<SdfNode2d>),

    /// Extrude a 2D profile along the Z axis by `half_height`.
    Extrude(Arc<SdfNode2d>, f64),

    /// Helical sweep of a 2D profile around the Y axis.
    ///
    /// The profile is given in (position along one `pitch`, radius)
    /// coordinates. One revolution advances by `lead`; `taper` (radians)
    /// widens the sweep with height. Clipped to `|y| <= half_length`.
    Screw {
        profile: Arc<SdfNode2d>,
        half_length: f64,
        taper: f64,
        pitch: f64,
        lead: f64,
    },
}

impl SdfNode {
    /// Evaluate the signed distance at a 3D point.
    pub fn evaluate(&self, point: Vector3<f64>) -> f64 {
        match self {
            // -- Primitives ------------------------------------------------

            SdfNode::Sphere { center, radius } => {
                primitives::sdf_sphere(point, *center, *radius)
            }
            SdfNode::RoundedCylinder { center, radius, round_radius, half_height } => {
                primitives::sdf_rounded_cylinder(point, *center, *radius, *round_radius, *half_height)
            }

            // -- CSG -------------------------------------------------------

            SdfNode::Union(a, b) => {
                csg::union(a.evaluate(point), b.evaluate(point))
            }
            SdfNode::UnionAll(children) => {
                csg::union_all(children.iter().map(|c| c.evaluate(point)))
            }
            SdfNode::Intersection(a, b) => {
                csg::intersection(a.evaluate(point), b.evaluate(point))
            }

            // -- Transforms ------------------------------------------------

            SdfNode::Translate(inner, offset) => {
                inner.evaluate(point - offset)
            }
            SdfNode::Rotate(inner, rotation) => {
                inner.evaluate(rotation.inverse() * point)
            }

            // -- 2D → 3D --------------------------------------------------

            SdfNode::Revolve(profile) => {
                let r = (point.x * point.x + point.z * point.z).sqrt();
                profile.evaluate(Vector2::new(r, point.y))
            }
            SdfNode::Extrude(profile, half_height) => {
                let d_2d = profile.evaluate(Vector2::new(point.x, point.y));
                let d_z = point.z.abs() - half_height;
                if d_2d > 0.0 && d_z > 0.0 {
                    (d_2d * d_2d + d_z * d_z).sqrt()
                } else {
                    d_2d.max(d_z)
                }
            }
            SdfNode::Screw { profile, half_length, taper, pitch, lead } => {
                let section = primitives::screw_section(point, *pitch, *lead, *taper);
                let d_thread = profile.evaluate(section);
                let d_length = point.y.abs() - half_length;
                csg::intersection(d_thread, d_length)
            }
        }
    }
}
