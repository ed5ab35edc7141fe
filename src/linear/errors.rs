//! Linear-system error types.
//!
//! ┌ shape      : empty systems, non-square matrices, length mismatches
//! └ numerical  : zero pivots, singular or non positive definite matrices

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinearError {
    #[error("empty system")]
    EmptySystem,

    #[error("matrix must be square: got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimension mismatch for {what}: expected {expected}, got {got}")]
    DimensionMismatch { what: &'static str, expected: usize, got: usize },

    #[error("zero pivot in row {index}")]
    ZeroPivot { index: usize },

    #[error("matrix is singular")]
    Singular,

    #[error("matrix is not positive definite: non-positive pivot {got} in row {index}")]
    NotPositiveDefinite { index: usize, got: f64 },

    #[error("non-finite value in input at index {idx}")]
    NonFinite { idx: usize },
}
