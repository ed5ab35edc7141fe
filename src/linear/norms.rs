//! Vector and matrix norms.
//!
//! | name        | vector              | matrix                      |
//! |-------------|---------------------|-----------------------------|
//! | max / row   | `max |x_i|`         | `max_i Σ_j |a_ij|`          |
//! | sum / col   | `Σ |x_i|`           | `max_j Σ_i |a_ij|`          |
//! | euclidean   | `sqrt(Σ x_i²)`      | spectral, `σ_max(A)`        |
//! | frobenius   |                     | `sqrt(Σ a_ij²)`             |

use nalgebra::DMatrix;

pub fn vector_max(x: &[f64]) -> f64 {
    x.iter().map(|v| v.abs()).fold(0.0, f64::max)
}

pub fn vector_sum(x: &[f64]) -> f64 {
    x.iter().map(|v| v.abs()).sum()
}

pub fn vector_euclidean(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum::<f64>().sqrt()
}

pub fn matrix_frobenius(a: &DMatrix<f64>) -> f64 {
    a.iter().map(|v| v * v).sum::<f64>().sqrt()
}

pub fn matrix_row_sum(a: &DMatrix<f64>) -> f64 {
    a.row_iter().map(|r| r.iter().map(|v| v.abs()).sum::<f64>()).fold(0.0, f64::max)
}

pub fn matrix_column_sum(a: &DMatrix<f64>) -> f64 {
    a.column_iter().map(|c| c.iter().map(|v| v.abs()).sum::<f64>()).fold(0.0, f64::max)
}

/// Largest singular value.
pub fn matrix_spectral(a: &DMatrix<f64>) -> f64 {
    a.singular_values().iter().copied().fold(0.0, f64::max)
}

/// Largest eigenvalue modulus.
pub fn spectral_radius(a: &DMatrix<f64>) -> f64 {
    a.complex_eigenvalues().iter().map(|l| l.norm()).fold(0.0, f64::max)
}

/// Real parts of the eigenvalues, ascending.
pub fn eigenvalues(a: &DMatrix<f64>) -> Vec<f64> {
    let mut values: Vec<f64> = a.complex_eigenvalues().iter().map(|l| l.re).collect();
    values.sort_by(f64::total_cmp);
    values
}

/// Eigenvalues of a symmetric matrix, ascending.
pub fn symmetric_eigenvalues(a: &DMatrix<f64>) -> Vec<f64> {
    let mut values: Vec<f64> = a.symmetric_eigenvalues().iter().copied().collect();
    values.sort_by(f64::total_cmp);
    values
}
