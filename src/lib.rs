//! geokernel: Euclidean 3-space geometric kernel.
//!
//! Points, free vectors, unit directions and affine planes, plus the metric
//! and axis-classification helpers that oriented-projective constructions
//! (circle packings, Koebe-style embeddings) are built on.

pub mod e3;
pub mod numeric;
pub mod op3;

// Re-exports for convenience
pub use e3::{dominant, dominant_of, least_dominant, least_dominant_of};
pub use e3::{Axis, Direction, Plane, Point, Vector, XYZ};
pub use op3::PointOP3;

/// Result type for kernel operations
pub type Result<T> = std::result::Result<T, KernelError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    #[error("Division by zero: {0}")]
    DivisionByZero(String),
}

impl KernelError {
    /// Builds a division error for `operation` and records it at debug level.
    pub(crate) fn division_by_zero(operation: &str) -> Self {
        log::debug!("{}: divisor is exactly zero", operation);
        KernelError::DivisionByZero(operation.to_string())
    }
}
