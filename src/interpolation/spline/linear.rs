//! Linear spline: the polyline through consecutive samples.
//!
//! ```text
//! S_i(x) = y_i (x - x_{i+1}) / (x_i - x_{i+1}) + y_{i+1} (x - x_i) / (x_{i+1} - x_i)
//! ```

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg, XOrdering};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::lagrange::LagrangePolynomial;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::spline::evaluate_spline;
use crate::interpolation::spline::helpers::check_knots;
use crate::interpolation::traits::{InterpolatingPolynomial, InterpolatingSpline};
use crate::symbolic::Polynomial;


#[derive(Debug, Copy, Clone)]
pub struct LinearSplineCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LinearSplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(XOrdering::Ascending) }
    }
}
impl<'a> Default for LinearSplineCfg<'a> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(LinearSplineCfg<'a>);


#[derive(Debug, Clone)]
pub struct LinearSpline {
    lagrange: LagrangePolynomial,
}

impl LinearSpline {
    /// # Errors
    /// - [`InterpolationError::NonIncreasingX`] unless knots ascend.
    pub fn new(samples: SampleSet) -> Result<Self, InterpolationError> {
        check_knots(&samples)?;
        Ok(Self { lagrange: LagrangePolynomial::new(samples) })
    }

    pub fn from_cfg(cfg: &LinearSplineCfg) -> Result<Self, InterpolationError> {
        Self::new(cfg.common.samples()?)
    }
}

impl InterpolatingSpline for LinearSpline {
    fn samples(&self) -> &SampleSet { InterpolatingPolynomial::samples(&self.lagrange) }

    fn algorithm(&self) -> Algorithm { Algorithm::LinearSpline }

    fn piece(&self, index: usize) -> Result<Polynomial, InterpolationError> {
        self.check_piece(index)?;
        self.lagrange.polynomial_offset(1, index)
    }
}


/// Evaluates the linear spline at every `x_eval` point.
///
/// # Errors
/// - Validation errors from [`CommonCfg`].
/// - [`InterpolationError::OutOfBounds`] outside `[x_0, x_{n-1}]`.
pub fn interpolate(cfg: LinearSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    let spline = LinearSpline::from_cfg(&cfg)?;
    evaluate_spline(&spline, cfg.common.x_eval())
}
