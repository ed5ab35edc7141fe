use nalgebra::DMatrix;
use numkit::linear::norms::{
    eigenvalues, matrix_column_sum, matrix_frobenius, matrix_row_sum, matrix_spectral,
    spectral_radius, symmetric_eigenvalues, vector_euclidean, vector_max, vector_sum,
};

const ATOL: f64 = 1e-9;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[test]
fn vector_norms() {
    let x = [3.0, -4.0];
    assert!(approx_eq(vector_max(&x), 4.0));
    assert!(approx_eq(vector_sum(&x), 7.0));
    assert!(approx_eq(vector_euclidean(&x), 5.0));
}

#[test]
fn matrix_norms() {
    let a = DMatrix::from_row_slice(2, 2, &[1.0, -2.0, 3.0, 4.0]);

    assert!(approx_eq(matrix_row_sum(&a), 7.0));
    assert!(approx_eq(matrix_column_sum(&a), 6.0));
    assert!(approx_eq(matrix_frobenius(&a), 30f64.sqrt()));
    // sqrt of the largest eigenvalue of AᵀA = [[10, 10], [10, 20]]
    assert!(approx_eq(matrix_spectral(&a), (15.0 + 125f64.sqrt()).sqrt()));
}

#[test]
fn complex_spectrum() {
    // eigenvalues 5/2 ± i sqrt(15)/2, modulus sqrt(det) = sqrt(10)
    let a = DMatrix::from_row_slice(2, 2, &[1.0, -2.0, 3.0, 4.0]);

    assert!(approx_eq(spectral_radius(&a), 10f64.sqrt()));
    let re = eigenvalues(&a);
    assert_eq!(re.len(), 2);
    assert!(re.iter().all(|v| approx_eq(*v, 2.5)));
}

#[test]
fn symmetric_spectrum() {
    let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 2.0]);

    let values = symmetric_eigenvalues(&a);
    assert!(approx_eq(values[0], 1.0));
    assert!(approx_eq(values[1], 3.0));
    assert!(approx_eq(spectral_radius(&a), 3.0));
}
