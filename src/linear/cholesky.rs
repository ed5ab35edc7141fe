//! Cholesky decomposition `A = L Lᵀ` for symmetric positive definite `A`.
//!
//! ```text
//! L_jj = sqrt(A_jj - Σ_{k<j} L_jk²)
//! L_ij = (A_ij - Σ_{k<j} L_ik L_jk) / L_jj,   i > j
//! ```
//!
//! then `L y = f` and `Lᵀ x = y`.

use nalgebra::{DMatrix, DVector};

use crate::linear::errors::LinearError;
use crate::linear::{rhs_vector, square_matrix};


#[derive(Debug, Clone)]
pub struct CholeskyMethod {
    lower: DMatrix<f64>,
    y: DVector<f64>,
    solution: DVector<f64>,
}

impl CholeskyMethod {
    /// # Errors
    /// - Shape errors, see [`LinearError`].
    /// - [`LinearError::NotPositiveDefinite`] if a diagonal radicand is not positive.
    pub fn new(a: &[Vec<f64>], f: &[f64]) -> Result<Self, LinearError> {
        let a = square_matrix(a)?;
        let f = rhs_vector(f, a.nrows())?;

        let lower = decompose(&a)?;
        let y = lower.solve_lower_triangular(&f).ok_or(LinearError::Singular)?;
        let solution = lower.tr_solve_lower_triangular(&y).ok_or(LinearError::Singular)?;

        Ok(Self { lower, y, solution })
    }

    pub fn lower(&self) -> &DMatrix<f64> { &self.lower }

    /// Intermediate solution of `L y = f`.
    pub fn intermediate(&self) -> Vec<f64> {
        self.y.iter().copied().collect()
    }

    pub fn solve(&self) -> Vec<f64> {
        self.solution.iter().copied().collect()
    }
}


fn decompose(a: &DMatrix<f64>) -> Result<DMatrix<f64>, LinearError> {
    let n = a.nrows();
    let mut l = DMatrix::zeros(n, n);

    for i in 0..n {
        for j in 0..=i {
            let sum: f64 = (0..j).map(|k| l[(i, k)] * l[(j, k)]).sum();
            let difference = a[(i, j)] - sum;

            l[(i, j)] = if i == j {
                if difference <= 0.0 {
                    return Err(LinearError::NotPositiveDefinite { index: i, got: difference });
                }
                difference.sqrt()
            } else {
                difference / l[(j, j)]
            };
        }
    }

    tracing::debug!(n, "cholesky factor computed");
    Ok(l)
}
