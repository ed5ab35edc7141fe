use numkit::condition::Precision;
use numkit::root_finding::errors::RootFindingError;
use numkit::root_finding::report::TerminationReason;
use numkit::root_finding::secant::SecantMethod;
use numkit::symbolic::{Expr, Polynomial};

type TestResult = Result<(), RootFindingError>;

const ROOT: f64 = 1.1141571408719302;

fn x_sin_x() -> Expr {
    Expr::x() * Expr::x().sin() - 1.0
}

#[test]
fn chord_steps() -> TestResult {
    let res = SecantMethod::new(x_sin_x(), 0.6, 0.7)?.solve(&mut Precision::new(1e-4))?;

    assert_eq!(res.algorithm_name, "secant");
    assert_eq!(res.termination_reason, TerminationReason::ConditionMet);
    assert!((res.root - ROOT).abs() <= 1e-6);
    assert!(res.precision <= 1e-4);
    Ok(())
}

#[test]
fn negative_root() -> TestResult {
    let res = SecantMethod::new(x_sin_x(), -3.0, -2.0)?.solve(&mut Precision::new(1e-4))?;
    assert!((res.root + 2.772604708265991).abs() <= 1e-5);
    Ok(())
}

#[test]
fn fixed_first_point() -> TestResult {
    let moving = SecantMethod::new(x_sin_x(), 0.6, 0.7)?.solve(&mut Precision::new(1e-4))?;
    let fixed = SecantMethod::new(x_sin_x(), 0.6, 0.7)?
        .with_constant_point(true)
        .solve(&mut Precision::new(1e-4))?;

    assert!((fixed.root - ROOT).abs() <= 1e-4);
    assert!(fixed.iterations >= moving.iterations);
    Ok(())
}

#[test]
fn linear_function_in_one_step() -> TestResult {
    let f = Polynomial::new(vec![-3.0, 2.0]);
    let res = SecantMethod::new(f, 0.0, 1.0)?.solve(&mut Precision::new(1e-9))?;
    assert!((res.root - 1.5).abs() <= 1e-15);
    Ok(())
}

#[test]
fn degenerate_chords() -> TestResult {
    assert!(matches!(
        SecantMethod::new(x_sin_x(), 1.0, 1.0),
        Err(RootFindingError::ZeroSecantSlope { .. })
    ));

    let flat = Polynomial::constant(1.0);
    let err = SecantMethod::new(flat, 0.0, 1.0)?.solve(&mut Precision::new(1e-6)).unwrap_err();
    assert!(matches!(err, RootFindingError::ZeroSecantSlope { .. }));
    Ok(())
}
