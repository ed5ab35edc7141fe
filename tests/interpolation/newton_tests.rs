use numkit::interpolation::errors::InterpolationError;
use numkit::interpolation::newton::{interpolate, NewtonCfg, NewtonPolynomial};
use numkit::interpolation::samples::SampleSet;
use numkit::interpolation::traits::InterpolatingPolynomial;
use numkit::symbolic::Polynomial;

type NumResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at index {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

fn newton() -> Result<NewtonPolynomial, InterpolationError> {
    let samples = SampleSet::new(&[0.0, 1.0, 3.0, 4.0], &[3.0, 2.0, 1.0, 0.0])?;
    Ok(NewtonPolynomial::new(samples))
}

#[test]
fn quadratic_global_match() -> NumResult {
    let x      = [0.0, 1.0, 2.0];
    let y      = [0.0, 1.0, 4.0];
    let x_eval = [0.5, 1.5];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "newton");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert_eq!(rep.domain, (0.0, 2.0));
    assert_eq!(rep.polynomials.len(), 1);
    assert!(rep.polynomials[0].approx_eq(&Polynomial::monomial(1.0, 2), 1e-12));
    assert!(approx_eq(rep.evaluated[0], 0.25));
    assert!(approx_eq(rep.evaluated[1], 2.25));
    Ok(())
}

#[test]
fn exact_hits() -> NumResult {
    let x          = [0.0, 1.0, 3.0, 4.0];
    let y          = [3.0, 2.0, 1.0, 0.0];
    let x_eval     = [0.0, 1.0, 3.0, 4.0];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_vec_close(&rep.evaluated, &y);
    Ok(())
}

#[test]
fn unordered_x_allowed() -> NumResult {
    let x      = [2.0, 0.0, 1.0];
    let y      = [4.0, 0.0, 1.0];
    let x_eval = [1.5];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert!(approx_eq(rep.evaluated[0], 2.25));
    Ok(())
}

#[test]
fn out_of_bounds_low() {
    let x      = [0.0, 1.0, 2.0];
    let y      = [0.0, 1.0, 4.0];
    let x_eval = [-0.1];

    let cfg = NewtonCfg::new()
        .set_x(&x).unwrap()
        .set_y(&y).unwrap()
        .set_x_eval(&x_eval).unwrap();

    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::OutOfBounds { .. }));
}

#[test]
fn cfg_validation() {
    assert!(matches!(
        NewtonCfg::new().set_x(&[1.0]),
        Err(InterpolationError::InsufficientPoints { got: 1 })
    ));
    assert!(matches!(
        NewtonCfg::new().set_x(&[1.0, 2.0, 1.0]),
        Err(InterpolationError::DuplicateX { .. })
    ));
    assert!(matches!(
        NewtonCfg::new().set_x(&[0.0, 1.0]).unwrap().set_y(&[1.0, 2.0, 3.0]),
        Err(InterpolationError::UnequalLength { x_len: 2, y_len: 3 })
    ));
    assert!(matches!(
        NewtonCfg::new().set_x_tol(0.0),
        Err(InterpolationError::InvalidXTol { .. })
    ));
    // a looser tolerance rejects x that was accepted earlier
    assert!(matches!(
        NewtonCfg::new().set_x(&[0.0, 1e-3, 1.0]).unwrap().set_x_tol(1e-2),
        Err(InterpolationError::DuplicateX { .. })
    ));
    assert!(matches!(interpolate(NewtonCfg::new()), Err(InterpolationError::EmptyInput)));
}

#[test]
fn full_degree_polynomial() -> NumResult {
    let n = newton()?;
    let p = n.polynomial(3)?;

    // 3 - 17/12 x + 1/2 x^2 - 1/12 x^3
    assert_vec_close(p.coeffs(), &[3.0, -17.0 / 12.0, 0.5, -1.0 / 12.0]);
    assert!(n.fit(&p));
    assert!(!n.fit(&n.polynomial(2)?));
    Ok(())
}

#[test]
fn textbook_polynomials() -> NumResult {
    let line = NewtonPolynomial::new(SampleSet::new(&[1.0, 2.0], &[-1.0, 0.0])?);
    assert_vec_close(line.polynomial(1)?.coeffs(), &[-2.0, 1.0]);

    let parabola = NewtonPolynomial::new(SampleSet::new(&[-2.0, 0.0, 1.0], &[0.0, -2.0, 0.0])?);
    assert_vec_close(parabola.polynomial(2)?.coeffs(), &[-2.0, 1.0, 1.0]);

    let cubic = NewtonPolynomial::new(SampleSet::new(&[-3.0, -1.0, 0.0, 2.0], &[0.0, 12.0, 12.0, 30.0])?);
    let p = cubic.polynomial(3)?;
    assert_vec_close(p.coeffs(), &[12.0, 1.0, 2.0, 1.0]);
    Ok(())
}

#[test]
fn lower_degrees_and_offsets() -> NumResult {
    let n = newton()?;

    assert_vec_close(n.polynomial(0)?.coeffs(), &[3.0]);
    assert_vec_close(n.polynomial(1)?.coeffs(), &[3.0, -1.0]);

    // through (1, 2) and (3, 1)
    let p = n.polynomial_offset(1, 1)?;
    assert_vec_close(p.coeffs(), &[2.5, -0.5]);

    assert!(matches!(n.polynomial_offset(2, 2), Err(InterpolationError::DegreeOutOfRange { .. })));
    Ok(())
}

#[test]
fn coefficients_match_table() -> NumResult {
    let n = newton()?;
    assert!(approx_eq(n.coefficient(3, 0, 0)?, -1.0 / 12.0));
    assert!(approx_eq(n.coefficient(1, 1, 1)?, -1.0));
    assert_eq!(n.coefficients(2)?.len(), 3);
    Ok(())
}

#[test]
fn inverse_interpolation() -> NumResult {
    let x      = [0.0, 1.0, 3.0, 4.0];
    let y      = [3.0, 2.0, 1.0, 0.0];
    let x_eval = [1.0, 2.0];

    let cfg = NewtonCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?
        .set_inverse(true);
    assert!(cfg.inverse());

    let rep = interpolate(cfg)?;
    assert_vec_close(&rep.evaluated, &[3.0, 1.0]);
    Ok(())
}

#[test]
fn inverse_out_of_bounds_uses_swapped_range() {
    let x      = [0.0, 1.0, 3.0, 4.0];
    let y      = [3.0, 2.0, 1.0, 0.0];
    let x_eval = [3.5];

    let cfg = NewtonCfg::new()
        .set_x(&x).unwrap()
        .set_y(&y).unwrap()
        .set_x_eval(&x_eval).unwrap()
        .set_inverse(true);

    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::OutOfBounds { x_max, .. } if x_max == 3.0));
}
