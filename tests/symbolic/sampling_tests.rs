use numkit::sampling::{arange, maximum_absolute_value, same_sign, subintervals, value_sampling};
use numkit::symbolic::{Expr, Polynomial};

const ATOL: f64 = 1e-9;

fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len(), "length mismatch");
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!((x - y).abs() <= ATOL, "idx {}: {} vs {}", i, x, y);
    }
}

#[test]
fn inclusive_range() {
    assert_vec_close(&arange(0.0, 1.0, 0.25), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(arange(1.0, 3.0, 0.05).len(), 41);
    assert!(arange(1.0, 0.0, 0.1).is_empty());
    assert!(arange(0.0, 1.0, 0.0).is_empty());
}

#[test]
fn sampled_values() {
    let squares = value_sampling(&Polynomial::new(vec![0.0, 0.0, 1.0]), 0.0, 2.0, 0.5);
    assert_vec_close(&squares, &[0.0, 0.25, 1.0, 2.25, 4.0]);
}

#[test]
fn sampled_maximum() {
    let cube = Polynomial::monomial(1.0, 3);
    // 3x^2 peaks at the right end
    assert!((maximum_absolute_value(&cube, 0.0, 2.0, 1, 0.05) - 12.0).abs() <= ATOL);
    assert!((maximum_absolute_value(&cube, -2.0, 1.0, 0, 0.05) - 8.0).abs() <= ATOL);

    let recip = 1.0 / Expr::x();
    assert!((maximum_absolute_value(&recip, 1.0, 3.0, 2, 0.05) - 2.0).abs() <= ATOL);
}

#[test]
fn consecutive_pairs() {
    assert_eq!(subintervals(&[0.0, 1.0, 2.0]), vec![(0.0, 1.0), (1.0, 2.0)]);
    assert!(subintervals(&[1.0]).is_empty());
}

#[test]
fn sign_over_grid() {
    let f = Expr::x().cos();
    assert!(same_sign(&f, 0.0, 1.5, 0.05));
    assert!(!same_sign(&f, 0.0, 2.0, 0.05));
}
