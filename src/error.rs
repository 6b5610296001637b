//! Error types for quadbin

use thiserror::Error;

/// quadbin error type
///
/// Only caller mistakes are reported here. Degenerate inputs met during
/// partitioning (empty ranges, runaway recursion) always resolve to terminal
/// regions, see [`Stop`](crate::Stop).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Bounding rectangle with a lower edge above its upper edge
    #[error("invalid bounds: x [{xlo}, {xhi}], y [{ylo}, {yhi}]")]
    InvalidBounds { xlo: f64, xhi: f64, ylo: f64, yhi: f64 },

    /// Bounding rectangle with a NaN or infinite edge
    #[error("bounds must be finite")]
    NonFiniteBounds,

    /// A minimum population of zero would allow empty quadrants to split forever
    #[error("minimum population must be at least 1")]
    InvalidMinPopulation,

    /// Recursion depth bound of zero
    #[error("maximum depth must be at least 1")]
    InvalidMaxDepth,

    /// Parallel input columns of different length
    #[error("column length mismatch: {x} x values, {y} y values")]
    LengthMismatch { x: usize, y: usize },

    /// Masses that do not describe an allowed three-body decay
    #[error("forbidden decay: {0}")]
    ForbiddenDecay(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
