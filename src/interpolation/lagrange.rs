//! Lagrange Interpolation
//!
//! ```text
//! L_i(x) = Π_{j != i} (x - x_j) / (x_i - x_j)
//! P(x)   = Σ y_i L_i(x)
//! ```
//!
//! Basis functions are rebuilt on every call. Unlike
//! [`crate::interpolation::newton::NewtonPolynomial`] there is no table to
//! share between degrees, and requests are small one-off degrees.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg, XOrdering};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::newton::evaluate_polynomial;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::traits::InterpolatingPolynomial;
use crate::symbolic::Polynomial;


/// Lagrange interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
#[derive(Debug, Clone, Copy)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(XOrdering::Distinct) }
    }
}
impl<'a> Default for LagrangeCfg<'a> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(LagrangeCfg<'a>);


#[derive(Debug, Clone)]
pub struct LagrangePolynomial {
    samples: SampleSet,
}

impl LagrangePolynomial {
    pub fn new(samples: SampleSet) -> Self {
        Self { samples }
    }

    pub fn from_cfg(cfg: &LagrangeCfg) -> Result<Self, InterpolationError> {
        Ok(Self::new(cfg.common.samples()?))
    }

    /// Basis function `L_index` of the window `offset..=offset + degree`,
    /// normalized to 1 at its own node.
    pub fn coefficient(&self, degree: usize, index: usize, offset: usize) -> Result<Polynomial, InterpolationError> {
        self.samples.check_degree(degree, offset)?;
        if index > degree {
            return Err(InterpolationError::IndexOutOfRange { index, len: degree + 1 });
        }

        let basis = self.basis_polynomial(degree + 1, Some(index), offset)?;
        let at_node = basis.eval(self.samples.x()[index + offset]);
        Ok(basis / at_node)
    }
}

impl InterpolatingPolynomial for LagrangePolynomial {
    fn samples(&self) -> &SampleSet { &self.samples }

    fn algorithm(&self) -> Algorithm { Algorithm::Lagrange }

    fn polynomial_offset(&self, degree: usize, offset: usize) -> Result<Polynomial, InterpolationError> {
        self.samples.check_degree(degree, offset)?;

        let y = self.samples.y();
        (0..=degree)
            .map(|i| Ok(self.coefficient(degree, i, offset)? * y[i + offset]))
            .sum()
    }
}


/// Performs Lagrange interpolation through every sample.
///
/// # Returns
/// [`InterpolationReport`] with `algorithm_name = "lagrange"`.
///
/// # Errors
/// - Validation errors from [`CommonCfg`].
/// - [`InterpolationError::OutOfBounds`] if any evaluation point lies
///   outside the provided x-range.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    let lagrange = LagrangePolynomial::from_cfg(&cfg)?;
    evaluate_polynomial(&lagrange, cfg.common.x_eval())
}
