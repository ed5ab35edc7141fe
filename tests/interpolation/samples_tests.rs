use numkit::interpolation::errors::InterpolationError;
use numkit::interpolation::samples::SampleSet;
use numkit::symbolic::{Expr, Polynomial};

type NumResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

fn samples() -> Result<SampleSet, InterpolationError> {
    SampleSet::new(&[0.0, 1.0, 3.0, 4.0], &[3.0, 2.0, 1.0, 0.0])
}

#[test]
fn rejects_bad_input() {
    assert!(matches!(SampleSet::new(&[], &[]), Err(InterpolationError::EmptyInput)));
    assert!(matches!(
        SampleSet::new(&[0.0, 1.0], &[1.0]),
        Err(InterpolationError::UnequalLength { x_len: 2, y_len: 1 })
    ));
    assert!(matches!(
        SampleSet::new(&[0.0, f64::NAN], &[1.0, 2.0]),
        Err(InterpolationError::NonFiniteVec { idx: 1 })
    ));
    assert!(matches!(
        SampleSet::new(&[1.0, 0.0, 1.0], &[1.0, 2.0, 3.0]),
        Err(InterpolationError::DuplicateX { .. })
    ));
}

#[test]
fn unordered_x_is_accepted() -> NumResult {
    let s = SampleSet::new(&[3.0, 0.0, 1.0], &[1.0, 2.0, 3.0])?;
    assert!(!s.is_ascending());
    assert_eq!(s.len(), 3);
    Ok(())
}

#[test]
fn basis_polynomials() -> NumResult {
    let s = samples()?;

    assert_eq!(s.basis_polynomial(0, None, 0)?, Polynomial::one());
    // x (x - 1)
    assert_eq!(s.basis_polynomial(2, None, 0)?, Polynomial::new(vec![0.0, -1.0, 1.0]));
    // x (x - 3), the factor at window position 1 is skipped
    assert_eq!(s.basis_polynomial(3, Some(1), 0)?, Polynomial::new(vec![0.0, -3.0, 1.0]));
    // (x - 3)(x - 4)
    assert_eq!(s.basis_polynomial(2, None, 2)?, Polynomial::new(vec![12.0, -7.0, 1.0]));

    assert!(matches!(s.basis_polynomial(3, None, 2), Err(InterpolationError::DegreeOutOfRange { .. })));
    Ok(())
}

#[test]
fn fit_checks_every_sample() -> NumResult {
    let s = SampleSet::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0])?;

    let through = Polynomial::new(vec![1.0, 0.0, 1.0]);
    let off = Polynomial::new(vec![1.0, 1.0]);
    assert!(s.fit(&through));
    assert!(!s.fit(&off));

    let expr = Expr::x().pow(2.0) + 1.0;
    assert!(s.fit(&expr));
    Ok(())
}

#[test]
fn fit_points_picks_closest_window() -> NumResult {
    let s = samples()?;

    assert_eq!(s.best_offset(2.0, 1)?, 1);
    assert_eq!(s.fit_points(2.0, 1)?, &[1.0, 3.0]);
    assert_eq!(s.fit_points(0.2, 2)?, &[0.0, 1.0, 3.0]);
    assert_eq!(s.fit_points(3.9, 2)?, &[1.0, 3.0, 4.0]);
    assert!(s.fit_points(0.0, 4).is_err());
    Ok(())
}

#[test]
fn inverted_swaps_and_sorts() -> NumResult {
    let s = samples()?;
    let inv = s.inverted()?;

    assert_eq!(inv.x(), &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(inv.y(), &[4.0, 3.0, 1.0, 0.0]);
    assert!(approx_eq(inv.inverted()?.y()[3], 0.0));
    Ok(())
}

#[test]
fn inverted_needs_monotonic_y() -> NumResult {
    let s = SampleSet::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0])?;
    assert!(matches!(s.inverted(), Err(InterpolationError::NonMonotonicInverse)));
    Ok(())
}
