//! Declarative Shape builder API.
//!
//! `Shape` is the user-facing entry point for composing SDF geometry.
//! It wraps an `Arc<SdfNode>` so it is cheaply cloneable and immutable.
//!
//! # Example
//!
//! ```rust
//! use fastener::builder::Shape;
//! use nalgebra::Vector3;
//!
//! let pin = Shape::rounded_cylinder(2.0, 0.2, 5.0)
//!     .union(Shape::sphere(3.0).translate(0.0, 5.0, 0.0));
//! assert!(pin.contains(Vector3::new(0.0, 7.0, 0.0)));
//! ```

use std::sync::Arc;
use nalgebra::{Rotation3, Vector2, Vector3};
use rayon::prelude::*;
use tracing::trace;
use crate::dag::SdfNode;
use crate::kernel::KernelError;
use crate::profile::Profile;
use crate::types::BBox3;
use crate::voxel::VoxelGrid;

/// A composable, immutable shape backed by an SDF expression DAG.
///
/// `Shape` is cheaply cloneable (`Arc` under the hood) and can be combined
/// with CSG operations and transforms to build complex geometry.
#[derive(Clone, Debug)]
pub struct Shape {
    node: Arc<SdfNode>,
}

// ---------------------------------------------------------------------------
// Primitives, all centered at origin unless otherwise noted
// ---------------------------------------------------------------------------

impl Shape {
    fn from_node(node: SdfNode) -> Self {
        Self { node: Arc::new(node) }
    }

    /// Sphere centered at the origin.
    pub fn sphere(radius: f64) -> Self {
        Self::from_node(SdfNode::Sphere { center: Vector3::zeros(), radius })
    }

    /// Cylinder along the Y axis, centered at the origin, spanning
    /// `-half_height..half_height`, with its cap edges rounded by `round_radius`.
    pub fn rounded_cylinder(radius: f64, round_radius: f64, half_height: f64) -> Self {
        Self::from_node(SdfNode::RoundedCylinder {
            center: Vector3::zeros(),
            radius,
            round_radius,
            half_height,
        })
    }

    /// Extrude a profile in the XY plane along Z, `half_height` each way.
    pub fn extrude(profile: &Profile, half_height: f64) -> Self {
        Self::from_node(SdfNode::Extrude(profile.node().clone(), half_height))
    }

    /// Revolve a profile around the Y axis. Profile X is the radial
    /// distance from the axis, profile Y is world Y.
    pub fn revolve(profile: &Profile) -> Self {
        Self::from_node(SdfNode::Revolve(profile.node().clone()))
    }

    /// Sweep a thread profile helically around the Y axis.
    ///
    /// `profile` is one `pitch` of the thread form in (axial position, radius)
    /// coordinates. `starts` sets the number of interleaved helices; a
    /// negative count gives the opposite hand. The result is centered on
    /// the origin and `length` long.
    pub fn screw(profile: &Profile, length: f64, taper: f64, pitch: f64, starts: i32) -> Self {
        Self::from_node(SdfNode::Screw {
            profile: profile.node().clone(),
            half_length: length / 2.0,
            taper,
            pitch,
            lead: -pitch * f64::from(starts),
        })
    }
}

// ---------------------------------------------------------------------------
// CSG operations: consume self, return new Shape
// ---------------------------------------------------------------------------

impl Shape {
    /// Boolean union: the volume of either shape.
    pub fn union(self, other: Shape) -> Self {
        Self::from_node(SdfNode::Union(self.node, other.node))
    }

    /// N-ary boolean union in a single node. Returns `None` when `shapes`
    /// is empty.
    pub fn union_all<I: IntoIterator<Item = Shape>>(shapes: I) -> Option<Self> {
        let children: Vec<Arc<SdfNode>> = shapes.into_iter().map(|s| s.node).collect();
        if children.is_empty() {
            return None;
        }
        Some(Self::from_node(SdfNode::UnionAll(children)))
    }

    /// Boolean intersection: the volume shared by both shapes.
    pub fn intersect(self, other: Shape) -> Self {
        Self::from_node(SdfNode::Intersection(self.node, other.node))
    }
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------

impl Shape {
    /// Translate by `(x, y, z)`.
    pub fn translate(self, x: f64, y: f64, z: f64) -> Self {
        Self::from_node(SdfNode::Translate(self.node, Vector3::new(x, y, z)))
    }

    /// Rotate around the X axis by `angle` radians.
    pub fn rotate_x(self, angle: f64) -> Self {
        Self::from_node(SdfNode::Rotate(
            self.node,
            Rotation3::from_axis_angle(&Vector3::x_axis(), angle),
        ))
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

impl Shape {
    /// Evaluate the signed distance at `point`.
    /// Negative inside, zero on surface, positive outside.
    pub fn distance(&self, point: Vector3<f64>) -> f64 {
        self.node.evaluate(point)
    }

    /// Returns `true` if `point` is inside the shape (SDF < 0).
    pub fn contains(&self, point: Vector3<f64>) -> bool {
        self.node.evaluate(point) < 0.0
    }
}

// ---------------------------------------------------------------------------
// Bounding box computation: walk the DAG
// ---------------------------------------------------------------------------

impl Shape {
    /// Compute a conservative axis-aligned bounding box by walking the DAG.
    pub fn bounding_box(&self) -> BBox3 {
        compute_bbox(&self.node)
    }
}

fn empty_bbox() -> BBox3 {
    BBox3::new(Vector3::zeros(), Vector3::zeros())
}

/// Recursively compute a conservative AABB for an SdfNode.
fn compute_bbox(node: &SdfNode) -> BBox3 {
    match node {
        // -- Primitives --------------------------------------------------------

        SdfNode::Sphere { center, radius } => {
            let r = Vector3::new(*radius, *radius, *radius);
            BBox3::new(center - r, center + r)
        }

        SdfNode::RoundedCylinder { center, radius, half_height, .. } => {
            let ext = Vector3::new(*radius, *half_height, *radius);
            BBox3::new(center - ext, center + ext)
        }

        // -- CSG ---------------------------------------------------------------

        SdfNode::Union(a, b) => compute_bbox(a).merge(&compute_bbox(b)),

        SdfNode::UnionAll(children) => children
            .iter()
            .map(|c| compute_bbox(c))
            .reduce(|acc, b| acc.merge(&b))
            .unwrap_or_else(empty_bbox),

        // Intersection is bounded by the overlap of both boxes.
        SdfNode::Intersection(a, b) => compute_bbox(a).overlap(&compute_bbox(b)),

        // -- Transforms --------------------------------------------------------

        SdfNode::Translate(inner, offset) => compute_bbox(inner).translated(*offset),

        SdfNode::Rotate(inner, rotation) => {
            let b = compute_bbox(inner);
            // Rotate all 8 corners and compute the new AABB.
            let corners = b.corners().map(|c| rotation * c);
            let mut new_min = corners[0];
            let mut new_max = corners[0];
            for c in &corners[1..] {
                new_min = new_min.inf(c);
                new_max = new_max.sup(c);
            }
            BBox3::new(new_min, new_max)
        }

        // -- 2D -> 3D ----------------------------------------------------------

        SdfNode::Revolve(profile) => match profile.bounds() {
            Some((lo, hi)) => {
                let r = lo.x.abs().max(hi.x.abs());
                BBox3::new(Vector3::new(-r, lo.y, -r), Vector3::new(r, hi.y, r))
            }
            None => empty_bbox(),
        },

        SdfNode::Extrude(profile, half_height) => match profile.bounds() {
            Some((lo, hi)) => BBox3::new(
                Vector3::new(lo.x, lo.y, -half_height),
                Vector3::new(hi.x, hi.y, *half_height),
            ),
            None => empty_bbox(),
        },

        SdfNode::Screw { profile, half_length, taper, .. } => {
            let (_, hi) = profile.bounds().unwrap_or((Vector2::zeros(), Vector2::zeros()));
            let r = hi.y.max(0.0) + (half_length * taper.tan()).abs();
            BBox3::new(
                Vector3::new(-r, -half_length, -r),
                Vector3::new(r, *half_length, r),
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Voxelization
// ---------------------------------------------------------------------------

/// Largest grid [`Shape::voxelize`] will allocate.
pub const MAX_VOXELS: usize = 1 << 28;

impl Shape {
    /// Sample the distance field at the voxel centers of a grid covering the
    /// bounding box plus one voxel of margin. Layers along Y are sampled in
    /// parallel.
    ///
    /// Fails for a non-finite or non-positive `voxel_size`, and when the grid
    /// would exceed [`MAX_VOXELS`] or the bounds are unbounded.
    pub fn voxelize(&self, voxel_size: f64) -> Result<VoxelGrid, KernelError> {
        if !(voxel_size.is_finite() && voxel_size > 0.0) {
            return Err(KernelError::Degenerate { what: "voxel size", value: voxel_size });
        }
        let bbox = self.bounding_box();
        let margin = Vector3::repeat(voxel_size);
        let origin = bbox.min - margin;
        // disjoint intersections have inverted bounds; those axes are empty
        let cells = ((bbox.max + margin - origin) / voxel_size).map(|n| n.ceil().max(0.0));
        let voxels = cells.x * cells.y * cells.z;
        if !(voxels.is_finite() && voxels <= MAX_VOXELS as f64) {
            return Err(KernelError::GridTooLarge { voxels });
        }
        let [nx, ny, nz] = [cells.x as usize, cells.y as usize, cells.z as usize];

        let mut data = vec![0.0_f32; nx * ny * nz];
        let node = &self.node;
        data.par_chunks_mut((nx * nz).max(1))
            .enumerate()
            .for_each(|(iy, layer)| {
                let y = origin.y + (iy as f64 + 0.5) * voxel_size;
                for (i, sample) in layer.iter_mut().enumerate() {
                    let x = origin.x + ((i / nz) as f64 + 0.5) * voxel_size;
                    let z = origin.z + ((i % nz) as f64 + 0.5) * voxel_size;
                    *sample = node.evaluate(Vector3::new(x, y, z)) as f32;
                }
            });

        trace!(resolution = ?[nx, ny, nz], voxel_size, "voxelized shape");
        Ok(VoxelGrid { resolution: [nx, ny, nz], voxel_size, origin, data })
    }
}
