//! Parametric bolts as signed distance fields.
//!
//! [`build_bolt`] turns a [`BoltSpec`] (thread, head style, tolerance and
//! lengths) into a single watertight solid by asking a [`SolidKernel`] for
//! a head, a shank and a thread and stacking them along one axis.
//! [`SdfKernel`] provides the solids as composable SDF [`Shape`]s.
//!
//! ```rust
//! use fastener::{build_bolt, BoltSpec, HeadStyle, SdfKernel, ThreadTable};
//! use nalgebra::Vector3;
//!
//! let spec = BoltSpec::new("M8x1.25", HeadStyle::Hex, 0.1, 20.0, 5.0);
//! let bolt = build_bolt(&SdfKernel, ThreadTable::standard(), &spec).unwrap();
//! assert!(bolt.contains(Vector3::zeros()));
//! ```

pub mod bolt;
pub mod builder;
pub mod csg;
pub mod dag;
pub mod error;
pub mod head;
pub mod kernel;
pub mod primitives;
pub mod profile;
pub mod thread;
pub mod types;
pub mod voxel;

pub use bolt::{
    build_bolt, build_bolt_with, build_bolts, validate, AxialLayout, BoltSettings, BoltSpec,
    HeadStyle,
};
pub use builder::Shape;
pub use error::{BoltError, BoltResult};
pub use head::HexBevel;
pub use kernel::{KernelError, SdfKernel, SolidKernel};
pub use thread::{ThreadRecord, ThreadTable, Units};
