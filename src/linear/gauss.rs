//! Gaussian elimination on the augmented matrix `[A | f]`.
//!
//! Forward elimination zeroes everything below the diagonal, exchanging
//! rows when a pivot is exactly zero. The remaining upper-triangular
//! system is solved by back substitution.

use nalgebra::{DMatrix, DVector};

use crate::linear::errors::LinearError;
use crate::linear::{rhs_vector, square_matrix};


#[derive(Debug, Clone)]
pub struct GaussMethod {
    upper: DMatrix<f64>,
    solution: DVector<f64>,
}

impl GaussMethod {
    /// Eliminates and solves immediately.
    ///
    /// # Errors
    /// - Shape errors, see [`LinearError`].
    /// - [`LinearError::Singular`] if no row exchange yields a non-zero pivot.
    pub fn new(a: &[Vec<f64>], f: &[f64]) -> Result<Self, LinearError> {
        let a = square_matrix(a)?;
        let n = a.nrows();
        let f = rhs_vector(f, n)?;

        let mut m = DMatrix::zeros(n, n + 1);
        m.columns_mut(0, n).copy_from(&a);
        m.set_column(n, &f);

        forward(&mut m)?;

        let solution = m
            .columns(0, n)
            .solve_upper_triangular(&m.column(n))
            .ok_or(LinearError::Singular)?;

        Ok(Self { upper: m, solution })
    }

    pub fn solve(&self) -> Vec<f64> {
        self.solution.iter().copied().collect()
    }

    /// Augmented matrix after forward elimination.
    pub fn upper(&self) -> &DMatrix<f64> { &self.upper }
}


fn forward(m: &mut DMatrix<f64>) -> Result<(), LinearError> {
    let n = m.nrows();

    for p in 0..n {
        if m[(p, p)] == 0.0 {
            let swap = (p + 1..n).find(|&r| m[(r, p)] != 0.0).ok_or(LinearError::Singular)?;
            m.swap_rows(p, swap);
            tracing::debug!(pivot = p, with = swap, "row exchange");
        }

        for r in p + 1..n {
            let scale = m[(r, p)] / m[(p, p)];
            if scale == 0.0 {
                continue;
            }
            for c in p..m.ncols() {
                m[(r, c)] -= m[(p, c)] * scale;
            }
        }
    }
    Ok(())
}
