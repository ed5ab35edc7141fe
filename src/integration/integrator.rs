//! Composite integration with theoretical, absolute and Runge error estimates.
//!
//! The Runge estimate compares two refinement levels:
//!
//! ```text
//! R = (S_{2n} - S_n) / (2^p - 1)
//! ```
//!
//! and `S_{2n} + R` is the refined value returned by [`Integrator::integrate_until`].

use crate::condition::{Condition, TerminationReason};
use crate::integration::data::IntegrationData;
use crate::integration::errors::IntegrationError;
use crate::integration::rules::{Rule, Step};
use crate::sampling::{arange, subintervals, DEFAULT_SAMPLING_STEP};

/// Panel doublings attempted by [`Integrator::integrate_until`].
pub const MAX_REFINEMENTS: usize = 20;

/// Relative tolerance for uniform sample spacing.
const SPACING_TOL: f64 = 1e-9;


/// Outcome of [`Integrator::integrate_until`].
///
/// [`IntegrationReport`]
/// - `value`              : `S_{2n} + R`
/// - `runge_error`        : last Runge estimate `R`, signed
/// - `step`               : coarse step `n` of the final comparison
/// - `refinements`        : doublings performed
/// - `termination_reason` : why refinement stopped
/// - `rule_name`          : e.g. `"simpson"`
#[derive(Debug, Clone)]
pub struct IntegrationReport {
    pub value: f64,
    pub runge_error: f64,
    pub step: Step,
    pub refinements: usize,
    pub termination_reason: TerminationReason,
    pub rule_name: &'static str,
}


#[derive(Debug, Clone)]
pub struct Integrator {
    data: IntegrationData,
}

impl Integrator {
    pub fn new(data: IntegrationData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &IntegrationData { &self.data }

    /// Composite rule over `[start, end]`.
    pub fn integrate(&self, rule: Rule, start: f64, end: f64, step: Step) -> Result<f64, IntegrationError> {
        check_interval(start, end)?;
        let h = step.step_size(start, end)?;

        let sum: f64 = subintervals(&arange(start, end, h))
            .into_iter()
            .map(|(left, right)| rule.panel(|x| self.data.evaluate(x), left, right))
            .sum();

        let value = rule.multiplier() * h * sum;
        tracing::trace!(rule = %rule, h, value, "composite rule");
        Ok(value)
    }

    /// Integrates sample data over its own range, nodes taken from the samples.
    ///
    /// # Errors
    /// - [`IntegrationError::NotSampleData`] for function data.
    /// - [`IntegrationError::NonUniformSamples`] unless samples are equally spaced.
    /// - [`IntegrationError::SampleCountMismatch`] unless the gaps split into whole panels.
    pub fn integrate_samples(&self, rule: Rule) -> Result<f64, IntegrationError> {
        let samples = match &self.data {
            IntegrationData::Samples { samples, .. } => samples,
            IntegrationData::Function(_) => return Err(IntegrationError::NotSampleData),
        };

        let mut x = samples.x().to_vec();
        x.sort_by(f64::total_cmp);

        let gaps = x.len() - 1;
        if gaps == 0 {
            return Err(IntegrationError::SampleCountMismatch { rule, per_panel: rule.gaps_per_panel(), gaps });
        }
        let (start, end) = (x[0], x[gaps]);
        let h = (end - start) / gaps as f64;
        if x.windows(2).any(|w| ((w[1] - w[0]) - h).abs() > SPACING_TOL * h.abs().max(1.0)) {
            return Err(IntegrationError::NonUniformSamples);
        }

        let per_panel = rule.gaps_per_panel();
        if gaps % per_panel != 0 {
            return Err(IntegrationError::SampleCountMismatch { rule, per_panel, gaps });
        }

        self.integrate(rule, start, end, Step::Nodes(gaps / per_panel))
    }

    /// `M_p h^p (b - a) / divisor`.
    pub fn theoretical_error(&self, rule: Rule, start: f64, end: f64, step: Step) -> Result<f64, IntegrationError> {
        check_interval(start, end)?;
        let h = step.step_size(start, end)?;
        let m = self.data.maximum_derivative(start, end, rule.error_degree(), DEFAULT_SAMPLING_STEP);

        Ok((m * h.powi(rule.error_degree() as i32) * (end - start) / rule.error_divisor()).abs())
    }

    /// `|exact - S|` against a caller-supplied exact value.
    pub fn absolute_error(
        &self,
        rule: Rule,
        start: f64,
        end: f64,
        step: Step,
        exact: f64,
    ) -> Result<f64, IntegrationError> {
        Ok((exact - self.integrate(rule, start, end, step)?).abs())
    }

    /// `(S_{2n} - S_n) / (2^p - 1)` where `step` gives `S_n`. Signed.
    pub fn runge_error(&self, rule: Rule, start: f64, end: f64, step: Step) -> Result<f64, IntegrationError> {
        let coarse = self.integrate(rule, start, end, step)?;
        let fine = self.integrate(rule, start, end, step.refined())?;
        Ok((fine - coarse) / ((1u64 << rule.error_degree()) as f64 - 1.0))
    }

    /// Starting from two panels, doubles until `condition` accepts `|R|`.
    pub fn integrate_until<C: Condition>(
        &self,
        rule: Rule,
        start: f64,
        end: f64,
        condition: &mut C,
    ) -> Result<IntegrationReport, IntegrationError> {
        let mut step = Step::Nodes(2);
        let mut refinements = 0;

        loop {
            let runge_error = self.runge_error(rule, start, end, step)?;
            let met = condition.check(runge_error.abs());
            tracing::trace!(?step, runge_error, "runge refinement");

            if met || refinements >= MAX_REFINEMENTS {
                let value = self.integrate(rule, start, end, step.refined())? + runge_error;
                let termination_reason = if met {
                    TerminationReason::ConditionMet
                } else {
                    TerminationReason::IterationLimit
                };
                return Ok(IntegrationReport {
                    value,
                    runge_error,
                    step,
                    refinements,
                    termination_reason,
                    rule_name: rule.rule_name(),
                });
            }

            step = step.refined();
            refinements += 1;
        }
    }

    /// Step size and panel count the theoretical error needs for `precision`.
    ///
    /// ```text
    /// h = (precision * divisor / (M_p (b - a)))^(1/p)
    /// ```
    pub fn steps(&self, rule: Rule, start: f64, end: f64, precision: f64) -> Result<(f64, f64), IntegrationError> {
        check_interval(start, end)?;
        if !(precision.is_finite() && precision > 0.0) {
            return Err(IntegrationError::InvalidPrecision { got: precision });
        }

        let p = rule.error_degree();
        let m = self.data.maximum_derivative(start, end, p, DEFAULT_SAMPLING_STEP);
        let h = (precision * rule.error_divisor() / (m * (end - start))).powf(1.0 / p as f64);
        Ok((h, (end - start) / h))
    }
}


fn check_interval(start: f64, end: f64) -> Result<(), IntegrationError> {
    if !(start.is_finite() && end.is_finite()) || start >= end {
        return Err(IntegrationError::InvalidInterval { start, end });
    }
    Ok(())
}
