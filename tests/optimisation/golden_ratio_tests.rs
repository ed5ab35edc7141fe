use std::f64::consts::{FRAC_PI_2, PI};

use numkit::condition::{Iteration, Precision, TerminationReason, GLOBAL_MAX_ITER_FALLBACK};
use numkit::optimisation::{Extremum, GoldenRatio, OptimisationError};
use numkit::symbolic::{Expr, Polynomial};

type NumResult = Result<(), OptimisationError>;

const ATOL: f64 = 1e-7;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

// (x - 2)^2
fn bowl() -> Polynomial {
    Polynomial::new(vec![4.0, -4.0, 1.0])
}

#[test]
fn interior_points() {
    let (x1, x2) = GoldenRatio::<Polynomial>::next(0.0, 1.0);
    assert!(approx_eq(x1, 0.3819660113));
    assert!(approx_eq(x2, 0.6180339887));
    assert!(approx_eq(GoldenRatio::<Polynomial>::Q, (3.0 - 5f64.sqrt()) / 2.0));
}

#[test]
fn minimum_of_bowl() -> NumResult {
    let report = GoldenRatio::new(bowl()).optimize(0.0, 5.0, &mut Precision::new(1e-4), Extremum::Min)?;

    assert_eq!(report.method_name, "golden_ratio");
    assert_eq!(report.termination_reason, TerminationReason::ConditionMet);
    assert_eq!(report.iterations, 23);
    assert!(approx_eq(report.point, 1.9999940391));
    assert!(report.precision <= 1e-4);
    assert!(report.value <= 1e-10);
    Ok(())
}

#[test]
fn maximum_of_sine() -> NumResult {
    let report = GoldenRatio::new(Expr::x().sin()).optimize(0.0, PI, &mut Precision::new(1e-4), Extremum::Max)?;

    assert_eq!(report.iterations, 22);
    assert!(approx_eq(report.point, 1.5707811767));
    assert!((report.point - FRAC_PI_2).abs() <= 1e-4);
    assert!(approx_eq(report.value, 1.0));
    Ok(())
}

#[test]
fn fixed_step_count() -> NumResult {
    let report = GoldenRatio::new(bowl()).optimize(0.0, 5.0, &mut Iteration::new(3), Extremum::Min)?;

    assert_eq!(report.iterations, 3);
    // each step keeps 1 - q of the interval
    let kept = 1.0 - GoldenRatio::<Polynomial>::Q;
    assert!(approx_eq(report.precision, 5.0 * kept.powi(3)));
    Ok(())
}

#[test]
fn iteration_cap() -> NumResult {
    let report = GoldenRatio::new(bowl()).optimize(0.0, 5.0, &mut Iteration::new(10_000), Extremum::Min)?;

    assert_eq!(report.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(report.iterations, GLOBAL_MAX_ITER_FALLBACK);
    Ok(())
}

#[test]
fn bad_arguments() {
    let method = GoldenRatio::new(bowl());
    assert!(matches!(
        method.optimize(2.0, 1.0, &mut Precision::new(1e-4), Extremum::Min),
        Err(OptimisationError::InvalidBounds { .. })
    ));

    let pole = GoldenRatio::new(1.0 / Expr::x());
    assert!(matches!(
        pole.optimize(0.0, 1.0, &mut Precision::new(1e-4), Extremum::Max),
        Err(OptimisationError::NonFiniteEvaluation { .. })
    ));
}
