//! Linear systems `A x = f`.
//!
//! ┌ [`tridiagonal`] : relocation (Thomas) sweep with inspectable α/β
//! ├ [`gauss`]       : elimination with row exchange on zero pivots
//! ├ [`cholesky`]    : `A = L Lᵀ` and two triangular solves
//! ├ [`iterative`]   : Jacobi, Seidel and fixed-point iteration
//! └ [`norms`]       : vector and matrix norms, spectral radius

pub mod errors;
pub mod norms;

pub mod cholesky;
pub mod gauss;
pub mod iterative;
pub mod tridiagonal;

pub use errors::LinearError;

use nalgebra::{DMatrix, DVector};


/// Row-major rows into a square [`DMatrix`].
pub(crate) fn square_matrix(rows: &[Vec<f64>]) -> Result<DMatrix<f64>, LinearError> {
    let n = rows.len();
    if n == 0 {
        return Err(LinearError::EmptySystem);
    }
    if let Some(row) = rows.iter().find(|r| r.len() != n) {
        return Err(LinearError::NotSquare { rows: n, cols: row.len() });
    }
    if let Some(idx) = rows.iter().flatten().position(|v| !v.is_finite()) {
        return Err(LinearError::NonFinite { idx });
    }
    Ok(DMatrix::from_fn(n, n, |i, j| rows[i][j]))
}

/// Right-hand side of length `n`.
pub(crate) fn rhs_vector(f: &[f64], n: usize) -> Result<DVector<f64>, LinearError> {
    if f.len() != n {
        return Err(LinearError::DimensionMismatch { what: "right-hand side", expected: n, got: f.len() });
    }
    if let Some(idx) = f.iter().position(|v| !v.is_finite()) {
        return Err(LinearError::NonFinite { idx });
    }
    Ok(DVector::from_column_slice(f))
}
