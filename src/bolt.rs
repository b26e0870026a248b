//! Parametric bolt assembly.
//!
//! A bolt is built in four forward steps:
//!
//! 1. [`validate`] checks a [`BoltSpec`] and resolves its thread.
//! 2. [`AxialLayout::plan`] places the head, shank and thread along the axis.
//! 3. The head, shank and (optional) thread solids are requested from a
//!    [`SolidKernel`].
//! 4. The solids are translated into place and unioned.
//!
//! The head is centered on the origin. The shank starts at the head's
//! center, overlapping half of it, and the thread continues flush from the
//! shank's far end.

use std::fmt;
use std::str::FromStr;
use rayon::prelude::*;
use tracing::{debug, trace, warn};
use crate::error::{BoltError, BoltResult};
use crate::head::HexBevel;
use crate::kernel::SolidKernel;
use crate::thread::{ThreadRecord, ThreadTable};

/// Shank edge rounding, as a fraction of the hex head height.
pub const SHANK_ROUND_FACTOR: f64 = 0.08;
/// Knurl pitch of a knurled head, as a fraction of the hex radius.
pub const KNURL_DEPTH_FACTOR: f64 = 0.25;
/// Chamfer at the shank end of the thread, as a fraction of its radius.
pub const THREAD_CHAMFER_BOTTOM: f64 = 0.0;
/// Chamfer at the free end of the thread, as a fraction of its radius.
pub const THREAD_CHAMFER_TOP: f64 = 0.5;
/// Number of interleaved helices cut into the thread.
pub const THREAD_STARTS: i32 = 1;
/// Hex heads are bevelled on the face away from the shank.
pub const HEAD_BEVEL: HexBevel = HexBevel::Bottom;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Head shape of a bolt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadStyle {
    Hex,
    Knurl,
}

impl FromStr for HeadStyle {
    type Err = BoltError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(HeadStyle::Hex),
            "knurl" => Ok(HeadStyle::Knurl),
            _ => Err(BoltError::UnknownHeadStyle(s.to_string())),
        }
    }
}

impl fmt::Display for HeadStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadStyle::Hex => write!(f, "hex"),
            HeadStyle::Knurl => write!(f, "knurl"),
        }
    }
}

/// User-facing description of a bolt.
#[derive(Debug, Clone, PartialEq)]
pub struct BoltSpec {
    /// Thread name, looked up in a [`ThreadTable`].
    pub thread: String,
    pub head_style: HeadStyle,
    /// Clearance subtracted from the external thread radius.
    pub tolerance: f64,
    /// Threaded length plus shank length.
    pub total_length: f64,
    /// Unthreaded length below the head.
    pub shank_length: f64,
}

impl BoltSpec {
    pub fn new(
        thread: impl Into<String>,
        head_style: HeadStyle,
        tolerance: f64,
        total_length: f64,
        shank_length: f64,
    ) -> Self {
        Self {
            thread: thread.into(),
            head_style,
            tolerance,
            total_length,
            shank_length,
        }
    }

    /// Build a spec from an untyped head style, e.g. from batch input.
    pub fn parse(
        thread: &str,
        head_style: &str,
        tolerance: f64,
        total_length: f64,
        shank_length: f64,
    ) -> BoltResult<Self> {
        Ok(Self::new(thread, head_style.parse()?, tolerance, total_length, shank_length))
    }

    /// Length of exposed external thread, never negative.
    pub fn thread_length(&self) -> f64 {
        (self.total_length - self.shank_length).max(0.0)
    }
}

/// Empirical print-quality constants used when building a bolt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoltSettings {
    pub shank_round_factor: f64,
    pub knurl_depth_factor: f64,
    pub thread_chamfer_bottom: f64,
    pub thread_chamfer_top: f64,
    pub thread_starts: i32,
    pub head_bevel: HexBevel,
}

impl Default for BoltSettings {
    fn default() -> Self {
        Self {
            shank_round_factor: SHANK_ROUND_FACTOR,
            knurl_depth_factor: KNURL_DEPTH_FACTOR,
            thread_chamfer_bottom: THREAD_CHAMFER_BOTTOM,
            thread_chamfer_top: THREAD_CHAMFER_TOP,
            thread_starts: THREAD_STARTS,
            head_bevel: HEAD_BEVEL,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn check_length(field: &'static str, value: f64) -> BoltResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BoltError::InvalidParameter { field, value })
    }
}

/// Check `spec` and resolve its thread in `table`.
pub fn validate<'t>(spec: &BoltSpec, table: &'t ThreadTable) -> BoltResult<&'t ThreadRecord> {
    let thread = table
        .lookup(&spec.thread)
        .ok_or_else(|| BoltError::UnknownThread(spec.thread.clone()))?;
    check_length("total_length", spec.total_length)?;
    check_length("shank_length", spec.shank_length)?;
    check_length("tolerance", spec.tolerance)?;
    Ok(thread)
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Placement of the bolt's sub-solids along the central axis.
///
/// Offsets are to each sub-solid's center. The head always sits at 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxialLayout {
    /// Shank length including the half head height it sinks into the head.
    pub effective_shank_length: f64,
    pub shank_offset: f64,
    pub thread_length: f64,
    pub thread_offset: f64,
}

impl AxialLayout {
    pub fn plan(spec: &BoltSpec, thread: &ThreadRecord) -> Self {
        let effective_shank_length = spec.shank_length + thread.hex_height() / 2.0;
        let thread_length = spec.thread_length();
        Self {
            effective_shank_length,
            shank_offset: effective_shank_length / 2.0,
            thread_length,
            thread_offset: thread_length / 2.0 + effective_shank_length,
        }
    }

    pub fn head_offset(&self) -> f64 {
        0.0
    }

    pub fn has_thread(&self) -> bool {
        self.thread_length > 0.0
    }
}

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

/// Build `spec` with the default [`BoltSettings`].
pub fn build_bolt<K: SolidKernel>(
    kernel: &K,
    table: &ThreadTable,
    spec: &BoltSpec,
) -> BoltResult<K::Solid> {
    build_bolt_with(kernel, table, spec, &BoltSettings::default())
}

/// Build `spec` into a single solid.
///
/// Fails before touching the kernel if the spec is invalid; kernel errors
/// are passed through as [`BoltError::Kernel`].
pub fn build_bolt_with<K: SolidKernel>(
    kernel: &K,
    table: &ThreadTable,
    spec: &BoltSpec,
    settings: &BoltSettings,
) -> BoltResult<K::Solid> {
    let thread = validate(spec, table)?;
    let layout = AxialLayout::plan(spec, thread);
    debug!(thread = %thread.name, style = %spec.head_style, ?layout, "building bolt");

    let hex_radius = thread.hex_radius();
    let hex_height = thread.hex_height();

    let head = match spec.head_style {
        HeadStyle::Hex => kernel.hex_head(hex_radius, hex_height, settings.head_bevel),
        HeadStyle::Knurl => kernel.knurled_head(
            hex_radius,
            hex_height,
            hex_radius * settings.knurl_depth_factor,
        ),
    }
    .map_err(BoltError::kernel)?;
    trace!(hex_radius, hex_height, "head");

    let shank = kernel
        .cylinder(
            layout.effective_shank_length,
            thread.radius,
            hex_height * settings.shank_round_factor,
        )
        .map_err(BoltError::kernel)?;
    trace!(length = layout.effective_shank_length, radius = thread.radius, "shank");

    let mut parts = vec![head, kernel.translate(shank, layout.shank_offset)];

    if layout.has_thread() {
        let radius = thread.radius - spec.tolerance;
        let profile = kernel
            .iso_thread_profile(radius, thread.pitch, true)
            .map_err(BoltError::kernel)?;
        let screw = kernel
            .screw(profile, layout.thread_length, thread.taper, thread.pitch, settings.thread_starts)
            .map_err(BoltError::kernel)?;
        let screw = kernel
            .chamfered_cylinder(screw, settings.thread_chamfer_bottom, settings.thread_chamfer_top)
            .map_err(BoltError::kernel)?;
        trace!(length = layout.thread_length, radius, "thread");
        parts.push(kernel.translate(screw, layout.thread_offset));
    }

    kernel.union_all(parts).map_err(BoltError::kernel)
}

/// Build many bolts in parallel, one result per spec in input order.
///
/// A failed spec is logged and reported in place; it never stops the batch.
pub fn build_bolts<K>(
    kernel: &K,
    table: &ThreadTable,
    specs: &[BoltSpec],
) -> Vec<BoltResult<K::Solid>>
where
    K: SolidKernel + Sync,
    K::Solid: Send,
{
    specs
        .par_iter()
        .map(|spec| {
            let result = build_bolt(kernel, table, spec);
            if let Err(err) = &result {
                warn!(thread = %spec.thread, %err, "skipping bolt");
            }
            result
        })
        .collect()
}
