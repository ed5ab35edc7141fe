//! What gets integrated: a known function, or samples interpolated by the
//! full-degree Lagrange polynomial.

use crate::interpolation::lagrange::LagrangePolynomial;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::traits::InterpolatingPolynomial;
use crate::integration::errors::IntegrationError;
use crate::sampling::maximum_absolute_value;
use crate::symbolic::{Expr, Function, Polynomial};


#[derive(Debug, Clone)]
pub enum IntegrationData {
    Function(Expr),
    Samples {
        samples: SampleSet,
        interpolant: Polynomial,
    },
}

impl IntegrationData {
    pub fn function(fx: impl Into<Expr>) -> Self {
        IntegrationData::Function(fx.into())
    }

    /// # Errors
    /// - Validation errors of [`SampleSet::new`].
    pub fn samples(x: &[f64], y: &[f64]) -> Result<Self, IntegrationError> {
        let samples = SampleSet::new(x, y)?;
        let lagrange = LagrangePolynomial::new(samples.clone());
        let interpolant = lagrange.polynomial(samples.len() - 1)?;

        tracing::debug!(n = samples.len(), %interpolant, "sample data interpolated");
        Ok(IntegrationData::Samples { samples, interpolant })
    }

    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            IntegrationData::Function(fx) => fx.value(x),
            IntegrationData::Samples { interpolant, .. } => interpolant.value(x),
        }
    }

    /// `max |f^(degree)|` sampled over `[start, end]`.
    pub(crate) fn maximum_derivative(&self, start: f64, end: f64, degree: usize, step: f64) -> f64 {
        match self {
            IntegrationData::Function(fx) => maximum_absolute_value(fx, start, end, degree, step),
            IntegrationData::Samples { interpolant, .. } => {
                maximum_absolute_value(interpolant, start, end, degree, step)
            }
        }
    }
}
