//! Error types for bolt generation.

use thiserror::Error;

/// Result type for bolt generation.
pub type BoltResult<T> = Result<T, BoltError>;

/// Why a bolt could not be built.
///
/// Everything except [`BoltError::Kernel`] is detected before any geometry
/// is requested from the kernel.
#[derive(Debug, Error)]
pub enum BoltError {
    /// The thread name is not in the thread table.
    #[error("unknown thread \"{0}\"")]
    UnknownThread(String),

    /// The head style string names no supported style.
    #[error("unknown head style \"{0}\" (expected \"hex\" or \"knurl\")")]
    UnknownHeadStyle(String),

    /// A length or tolerance is negative or not finite.
    #[error("invalid {field}: {value}")]
    InvalidParameter {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The geometry kernel failed while building a sub-solid.
    #[error("geometry kernel error: {0}")]
    Kernel(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl BoltError {
    /// Wrap a kernel failure unchanged.
    pub fn kernel<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        BoltError::Kernel(Box::new(err))
    }
}
