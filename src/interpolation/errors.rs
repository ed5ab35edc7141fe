//! Interpolation error types.
//!
//! ┌ input validation : lengths, finiteness, spacing, ordering
//! ├ index arithmetic : degree/offset/index past the sample set
//! └ inverse mode     : swapped data is not a function of y

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("evaluation point {got} out of bounds in ({x_min}, {x_max})")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64 },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("degree {degree} at offset {offset} needs {} points, only {available} available", .degree + .offset + 1)]
    DegreeOutOfRange { degree: usize, offset: usize, available: usize },

    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("inverse interpolation needs strictly monotonic y-values")]
    NonMonotonicInverse,

    #[error("{pieces} pieces need {} knots, got {knots}", .pieces + 1)]
    PieceKnotMismatch { pieces: usize, knots: usize },

    #[error("invalid interval [{start}, {end}]: must be finite with start < end")]
    InvalidInterval { start: f64, end: f64 },

    #[error("invalid sampling step {got}: must be finite and > 0")]
    InvalidStep { got: f64 },
}
