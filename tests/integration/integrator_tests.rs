use numkit::condition::{Iteration, Precision, TerminationReason};
use numkit::integration::data::IntegrationData;
use numkit::integration::errors::IntegrationError;
use numkit::integration::integrator::Integrator;
use numkit::integration::rules::{Rule, Step};
use numkit::symbolic::Expr;

type NumResult = Result<(), IntegrationError>;

const ATOL: f64 = 1e-7;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

fn reciprocal() -> Integrator {
    Integrator::new(IntegrationData::function(1.0 / Expr::x()))
}

#[test]
fn composite_rules() -> NumResult {
    let i = reciprocal();
    let step = Step::Nodes(4);

    assert!(approx_eq(i.integrate(Rule::Midpoint, 1.0, 3.0, step)?, 1.0897546898));
    assert!(approx_eq(i.integrate(Rule::Trapezoid, 1.0, 3.0, step)?, 1.1166666667));
    assert!(approx_eq(i.integrate(Rule::Simpson, 1.0, 3.0, step)?, 1.0987253487));

    // the same grid given as a width
    let by_size = i.integrate(Rule::Simpson, 1.0, 3.0, Step::Size(0.5))?;
    assert!(approx_eq(by_size, 1.0987253487));
    Ok(())
}

#[test]
fn absolute_errors() -> NumResult {
    let i = reciprocal();
    let exact = 3f64.ln();
    let step = Step::Nodes(4);

    assert!(approx_eq(i.absolute_error(Rule::Midpoint, 1.0, 3.0, step, exact)?, 0.0088575989));
    assert!(approx_eq(i.absolute_error(Rule::Trapezoid, 1.0, 3.0, step, exact)?, 0.0180543780));
    assert!(approx_eq(i.absolute_error(Rule::Simpson, 1.0, 3.0, step, exact)?, 0.0001130601));
    Ok(())
}

#[test]
fn theoretical_errors_bound_absolute() -> NumResult {
    let i = reciprocal();
    let step = Step::Nodes(4);

    // M_2 = 2, M_4 = 24 at x = 1
    assert!(approx_eq(i.theoretical_error(Rule::Midpoint, 1.0, 3.0, step)?, 1.0 / 24.0));
    assert!(approx_eq(i.theoretical_error(Rule::Trapezoid, 1.0, 3.0, step)?, 1.0 / 12.0));
    assert!(approx_eq(i.theoretical_error(Rule::Simpson, 1.0, 3.0, step)?, 1.0 / 960.0));

    let exact = 3f64.ln();
    for rule in [Rule::Midpoint, Rule::Trapezoid, Rule::Simpson] {
        let bound = i.theoretical_error(rule, 1.0, 3.0, step)?;
        assert!(i.absolute_error(rule, 1.0, 3.0, step, exact)? <= bound, "{}", rule);
    }
    Ok(())
}

#[test]
fn runge_estimates() -> NumResult {
    let i = reciprocal();
    let step = Step::Nodes(2);

    assert!(approx_eq(i.runge_error(Rule::Midpoint, 1.0, 3.0, step)?, 0.0076960077));
    assert!(approx_eq(i.runge_error(Rule::Trapezoid, 1.0, 3.0, step)?, -0.0166666667));
    assert!(approx_eq(i.runge_error(Rule::Simpson, 1.0, 3.0, step)?, -0.0000849768));
    Ok(())
}

#[test]
fn refines_until_precision() -> NumResult {
    let i = reciprocal();
    let report = i.integrate_until(Rule::Simpson, 1.0, 3.0, &mut Precision::new(1e-6))?;

    assert_eq!(report.rule_name, "simpson");
    assert_eq!(report.termination_reason, TerminationReason::ConditionMet);
    assert_eq!(report.step, Step::Nodes(8));
    assert_eq!(report.refinements, 2);
    assert!(report.runge_error.abs() <= 1e-6);
    assert!((report.value - 3f64.ln()).abs() <= 1e-6);
    Ok(())
}

#[test]
fn refinement_by_count() -> NumResult {
    let i = reciprocal();
    let report = i.integrate_until(Rule::Trapezoid, 1.0, 3.0, &mut Iteration::new(1))?;

    assert_eq!(report.refinements, 0);
    assert_eq!(report.step, Step::Nodes(2));
    Ok(())
}

#[test]
fn steps_for_precision() -> NumResult {
    let i = reciprocal();
    let (h, n) = i.steps(Rule::Trapezoid, 1.0, 3.0, 1e-3)?;

    // h = sqrt(precision * 12 / (M_2 (b - a)))
    assert!(approx_eq(h, (1e-3f64 * 12.0 / 4.0).sqrt()));
    assert!(approx_eq(n, 2.0 / h));

    let (h, _) = i.steps(Rule::Simpson, 1.0, 3.0, 1e-3)?;
    assert!(approx_eq(h, (1e-3f64 * 2880.0 / 48.0).powf(0.25)));
    Ok(())
}

#[test]
fn bad_arguments() {
    let i = reciprocal();
    assert!(matches!(
        i.integrate(Rule::Midpoint, 3.0, 1.0, Step::Nodes(2)),
        Err(IntegrationError::InvalidInterval { .. })
    ));
    assert!(matches!(
        i.steps(Rule::Midpoint, 1.0, 3.0, 0.0),
        Err(IntegrationError::InvalidPrecision { .. })
    ));
    assert!(matches!(i.integrate_samples(Rule::Midpoint), Err(IntegrationError::NotSampleData)));
}
