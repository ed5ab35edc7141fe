//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! ```text
//! P_0(x) = y_o
//! P_d(x) = P_{d-1}(x) + f[x_o, ..., x_{o+d}] * (x - x_o)...(x - x_{o+d-1})
//! ```
//!
//! for a window starting at offset `o`. Coefficients come from a shared
//! [`DividedDifferences`] table, so polynomials of increasing degree or
//! different offsets reuse every difference already computed.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg, XOrdering};
use crate::interpolation::differences::DividedDifferences;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::estimators::ErrorEstimate;
use crate::interpolation::report::{in_domain, InterpolationReport};
use crate::interpolation::samples::SampleSet;
use crate::interpolation::traits::InterpolatingPolynomial;
use crate::symbolic::Polynomial;


/// Newton interpolation configuration
///
/// # Fields
/// - `common`  : [`CommonCfg`]
/// - `inverse` : swap `x` and `y` before building the table
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - Minimum allowed spacing between `x` values;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
/// - `inverse = false`.
#[derive(Debug, Clone, Copy)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
    inverse: bool,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(XOrdering::Distinct), inverse: false }
    }

    /// Interpolate `x` as a function of `y`.
    pub fn set_inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    pub fn inverse(&self) -> bool { self.inverse }
}
impl<'a> Default for NewtonCfg<'a> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Newton-form interpolating polynomial over an owned sample set.
#[derive(Debug, Clone)]
pub struct NewtonPolynomial {
    differences: DividedDifferences,
}

impl NewtonPolynomial {
    pub fn new(samples: SampleSet) -> Self {
        Self { differences: DividedDifferences::new(samples) }
    }

    /// Builds over the swapped sample set, see [`SampleSet::inverted`].
    pub fn inverse(samples: &SampleSet) -> Result<Self, InterpolationError> {
        Ok(Self::new(samples.inverted()?))
    }

    pub fn from_cfg(cfg: &NewtonCfg) -> Result<Self, InterpolationError> {
        let samples = cfg.common.samples()?;
        if cfg.inverse {
            Self::inverse(&samples)
        } else {
            Ok(Self::new(samples))
        }
    }

    pub fn differences(&self) -> &DividedDifferences { &self.differences }

    /// Divided difference `f[x_{o+i}, ..., x_{o+i+degree}]` with `o = offset`.
    pub fn coefficient(&self, degree: usize, index: usize, offset: usize) -> Result<f64, InterpolationError> {
        self.differences.coefficient_offset(degree, index, offset)
    }

    /// See [`DividedDifferences::coefficients`].
    pub fn coefficients(&self, degree: usize) -> Result<Vec<Vec<f64>>, InterpolationError> {
        self.differences.coefficients(degree)
    }

    /// Cheap error proxy `|f[x_0, ..., x_degree]| * |ω_degree(x)|`.
    pub fn practical_error_next_degree(&self, degree: usize) -> Result<ErrorEstimate, InterpolationError> {
        let c = self.coefficient(degree, 0, 0)?;
        let basis = self.basis_polynomial(degree, None, 0)?;
        Ok(ErrorEstimate::new(c, basis))
    }
}

impl InterpolatingPolynomial for NewtonPolynomial {
    fn samples(&self) -> &SampleSet { self.differences.samples() }

    fn algorithm(&self) -> Algorithm { Algorithm::Newton }

    fn polynomial_offset(&self, degree: usize, offset: usize) -> Result<Polynomial, InterpolationError> {
        self.differences.samples().check_degree(degree, offset)?;

        if degree == 0 {
            return Ok(Polynomial::constant(self.samples().y()[offset]));
        }

        let lower = self.polynomial_offset(degree - 1, offset)?;
        let basis = self.basis_polynomial(degree, None, offset)?;
        let c = self.coefficient(degree, 0, offset)?;

        Ok(lower + basis * c)
    }
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Builds the full-degree polynomial `P_{n-1}` through every sample
///   (of the swapped set in inverse mode).
/// - Evaluates it at each point of `cfg.common.x_eval()` by Horner's rule.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton"`
/// - `n_provided`     : number of (x, y) data points
/// - `polynomials`    : the single interpolant `P_{n-1}`
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - Validation errors from [`CommonCfg`].
/// - [`InterpolationError::NonMonotonicInverse`] in inverse mode.
/// - [`InterpolationError::OutOfBounds`] if any evaluation point lies
///   outside the range of the (possibly swapped) independent variable.
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    let newton = NewtonPolynomial::from_cfg(&cfg)?;
    evaluate_polynomial(&newton, cfg.common.x_eval())
}

/// Shared batch evaluation for the polynomial forms.
pub(crate) fn evaluate_polynomial<P: InterpolatingPolynomial>(
    interpolant: &P,
    evals: &[f64],
) -> Result<InterpolationReport, InterpolationError> {
    let samples = interpolant.samples();
    let n_provided = samples.len();

    let p = interpolant.polynomial(n_provided - 1)?;
    tracing::debug!(algorithm = %interpolant.algorithm(), polynomial = %p, "interpolant built");

    let domain = (
        samples.x().iter().copied().fold(f64::INFINITY, f64::min),
        samples.x().iter().copied().fold(f64::NEG_INFINITY, f64::max),
    );
    let evaluated = evals
        .iter()
        .map(|&xq| in_domain(xq, domain).map(|xq| p.eval(xq)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(InterpolationReport::new(interpolant.algorithm(), n_provided, domain, vec![p], evaluated))
}
