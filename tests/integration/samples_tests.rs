use numkit::integration::data::IntegrationData;
use numkit::integration::errors::IntegrationError;
use numkit::integration::integrator::Integrator;
use numkit::integration::rules::{Rule, Step};
use numkit::interpolation::errors::InterpolationError;

type NumResult = Result<(), IntegrationError>;

const ATOL: f64 = 1e-9;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

// y = x^2
fn squares() -> Result<Integrator, IntegrationError> {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 4.0, 9.0, 16.0];
    Ok(Integrator::new(IntegrationData::samples(&x, &y)?))
}

#[test]
fn interpolant_passes_through_samples() -> NumResult {
    let i = squares()?;
    assert!(approx_eq(i.data().evaluate(2.5), 6.25));
    Ok(())
}

#[test]
fn sample_nodes() -> NumResult {
    let i = squares()?;

    assert!(approx_eq(i.integrate_samples(Rule::Trapezoid)?, 22.0));
    assert!(approx_eq(i.integrate_samples(Rule::Simpson)?, 64.0 / 3.0));
    // midpoints 1 and 3 over two panels of width 2
    assert!(approx_eq(i.integrate_samples(Rule::Midpoint)?, 20.0));
    Ok(())
}

#[test]
fn interpolant_integrated_on_any_grid() -> NumResult {
    let i = squares()?;
    let fine = i.integrate(Rule::Simpson, 0.0, 4.0, Step::Nodes(16))?;
    assert!(approx_eq(fine, 64.0 / 3.0));
    Ok(())
}

#[test]
fn panel_mismatch() -> NumResult {
    let i = Integrator::new(IntegrationData::samples(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0])?);
    assert!(matches!(
        i.integrate_samples(Rule::Simpson),
        Err(IntegrationError::SampleCountMismatch { per_panel: 2, gaps: 3, .. })
    ));
    assert!(i.integrate_samples(Rule::Trapezoid).is_ok());
    Ok(())
}

#[test]
fn non_uniform_samples() -> NumResult {
    let i = Integrator::new(IntegrationData::samples(&[0.0, 1.0, 3.0], &[0.0, 1.0, 9.0])?);
    assert!(matches!(i.integrate_samples(Rule::Trapezoid), Err(IntegrationError::NonUniformSamples)));
    Ok(())
}

#[test]
fn invalid_samples() {
    let err = IntegrationData::samples(&[0.0, 0.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, IntegrationError::Interpolation(InterpolationError::DuplicateX { .. })));
}
