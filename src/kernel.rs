//! Solid-geometry capability consumed by the bolt assembler.
//!
//! [`SolidKernel`] is the seam between bolt assembly and the geometry
//! engine: primitive generators, axial translation, and n-ary union.
//! [`SdfKernel`] implements it on top of [`Shape`]; tests and alternative
//! engines supply their own.

use thiserror::Error;
use crate::builder::Shape;
use crate::head::{self, HexBevel};
use crate::profile::Profile;

/// Errors raised by [`SdfKernel`].
#[derive(Debug, Error, PartialEq)]
pub enum KernelError {
    /// A dimension is non-finite, or out of range for the primitive.
    #[error("degenerate {what}: {value}")]
    Degenerate {
        what: &'static str,
        value: f64,
    },

    /// Union of an empty set of solids.
    #[error("union of no solids")]
    EmptyUnion,

    /// A sampling grid would hold more voxels than the limit allows.
    #[error("voxel grid too large: {voxels} voxels")]
    GridTooLarge { voxels: f64 },
}

/// Geometry engine capability used to build bolts.
///
/// All solids share one central axis; `translate` moves a solid along it.
/// Generated solids are centered on the origin.
pub trait SolidKernel {
    type Solid;
    type Profile;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Cylinder of `length` and `radius` with its cap edges rounded by `round`.
    fn cylinder(&self, length: f64, radius: f64, round: f64) -> Result<Self::Solid, Self::Error>;

    /// Hex head of corner radius `radius`, bevelled on the `bevel` faces.
    fn hex_head(&self, radius: f64, height: f64, bevel: HexBevel) -> Result<Self::Solid, Self::Error>;

    /// Round knurled head of outer radius `radius` and knurl pitch `knurl_depth`.
    fn knurled_head(&self, radius: f64, height: f64, knurl_depth: f64) -> Result<Self::Solid, Self::Error>;

    /// ISO thread form of major radius `radius`, external (bolt) or
    /// internal (nut).
    fn iso_thread_profile(&self, radius: f64, pitch: f64, external: bool) -> Result<Self::Profile, Self::Error>;

    /// Helical sweep of `profile` over `length`, with `starts` interleaved
    /// helices of the given `pitch`.
    fn screw(
        &self,
        profile: Self::Profile,
        length: f64,
        taper: f64,
        pitch: f64,
        starts: i32,
    ) -> Result<Self::Solid, Self::Error>;

    /// Chamfer the ends of a cylindrical solid. `bottom` and `top` are the
    /// chamfer sizes as fractions of the solid's radius.
    fn chamfered_cylinder(&self, solid: Self::Solid, bottom: f64, top: f64) -> Result<Self::Solid, Self::Error>;

    /// Move `solid` along the central axis by `offset`.
    fn translate(&self, solid: Self::Solid, offset: f64) -> Self::Solid;

    /// Boolean union of all `solids`.
    fn union_all(&self, solids: Vec<Self::Solid>) -> Result<Self::Solid, Self::Error>;
}

/// [`SolidKernel`] backed by the crate's SDF expression DAG.
///
/// The central axis is +Y.
#[derive(Debug, Clone, Copy, Default)]
pub struct SdfKernel;

fn positive(what: &'static str, value: f64) -> Result<f64, KernelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(KernelError::Degenerate { what, value })
    }
}

fn non_negative(what: &'static str, value: f64) -> Result<f64, KernelError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(KernelError::Degenerate { what, value })
    }
}

impl SolidKernel for SdfKernel {
    type Solid = Shape;
    type Profile = Profile;
    type Error = KernelError;

    fn cylinder(&self, length: f64, radius: f64, round: f64) -> Result<Shape, KernelError> {
        let half = positive("cylinder length", length)? / 2.0;
        let radius = positive("cylinder radius", radius)?;
        let round = non_negative("cylinder round", round)?;
        if round > radius || round > half {
            return Err(KernelError::Degenerate { what: "cylinder round", value: round });
        }
        Ok(Shape::rounded_cylinder(radius, round, half))
    }

    fn hex_head(&self, radius: f64, height: f64, bevel: HexBevel) -> Result<Shape, KernelError> {
        let radius = positive("hex radius", radius)?;
        let height = positive("hex height", height)?;
        Ok(head::hex_head(radius, height, bevel))
    }

    fn knurled_head(&self, radius: f64, height: f64, knurl_depth: f64) -> Result<Shape, KernelError> {
        let radius = positive("knurl radius", radius)?;
        let height = positive("knurl height", height)?;
        let depth = positive("knurl depth", knurl_depth)?;
        if depth * 0.5 >= radius {
            return Err(KernelError::Degenerate { what: "knurl depth", value: depth });
        }
        Ok(head::knurled_head(radius, height, depth))
    }

    fn iso_thread_profile(&self, radius: f64, pitch: f64, external: bool) -> Result<Profile, KernelError> {
        let radius = positive("thread radius", radius)?;
        let pitch = positive("thread pitch", pitch)?;
        Ok(Profile::iso_thread(radius, pitch, external))
    }

    fn screw(
        &self,
        profile: Profile,
        length: f64,
        taper: f64,
        pitch: f64,
        starts: i32,
    ) -> Result<Shape, KernelError> {
        let length = positive("screw length", length)?;
        let pitch = positive("screw pitch", pitch)?;
        if !taper.is_finite() {
            return Err(KernelError::Degenerate { what: "screw taper", value: taper });
        }
        if starts == 0 {
            return Err(KernelError::Degenerate { what: "screw starts", value: 0.0 });
        }
        Ok(Shape::screw(&profile, length, taper, pitch, starts))
    }

    fn chamfered_cylinder(&self, solid: Shape, bottom: f64, top: f64) -> Result<Shape, KernelError> {
        let bottom = non_negative("chamfer bottom", bottom)?;
        let top = non_negative("chamfer top", top)?;
        let bbox = solid.bounding_box();
        let half_length = bbox.max.y;
        let radius = bbox.max.x.max(bbox.max.z);
        // each chamfer stays within the radius and its own half of the solid
        let bottom = (radius * bottom).min(radius).min(half_length);
        let top = (radius * top).min(radius).min(half_length);
        let rod = Profile::chamfered_rod(radius, half_length, bottom, top);
        Ok(solid.intersect(Shape::revolve(&rod)))
    }

    fn translate(&self, solid: Shape, offset: f64) -> Shape {
        solid.translate(0.0, offset, 0.0)
    }

    fn union_all(&self, solids: Vec<Shape>) -> Result<Shape, KernelError> {
        Shape::union_all(solids).ok_or(KernelError::EmptyUnion)
    }
}
