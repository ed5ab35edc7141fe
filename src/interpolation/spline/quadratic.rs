//! Quadratic spline, continuous in value and first derivative.
//!
//! Piece `i` in local form, `t = x - x_i`, `h_i = x_{i+1} - x_i`,
//! `d_i = f[x_i, x_{i+1}]`:
//!
//! ```text
//! S_i(x) = y_i + B_i t + C_i t²
//!
//! C_0 = p                              (free parameter)
//! B_0 = d_0 - h_0 p
//! B_i = B_{i-1} + 2 h_{i-1} C_{i-1}    (S'_{i-1}(x_i) = S'_i(x_i))
//! C_i = (d_i - B_i) / h_i              (S_i(x_{i+1}) = y_{i+1})
//! ```
//!
//! `n - 2` continuity conditions for `2(n - 1)` unknowns leave one degree of
//! freedom. Every parameter is affine in `p`, so the recursion is carried out
//! once symbolically and `p` is substituted per request. The natural choice
//! `p = 0` makes the first piece a straight line.

use std::cell::OnceCell;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg, XOrdering};
use crate::interpolation::differences::DividedDifferences;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::spline::evaluate_spline;
use crate::interpolation::spline::helpers::{check_knots, spacings};
use crate::interpolation::traits::InterpolatingSpline;
use crate::symbolic::Polynomial;


/// Quadratic spline configuration
///
/// # Fields
/// - `common`  : [`CommonCfg`]
/// - `natural` : value substituted for the free parameter `C_0`
///
/// # Defaults
/// - `natural = 0.0`
#[derive(Debug, Copy, Clone)]
pub struct QuadraticSplineCfg<'a> {
    common: CommonCfg<'a>,
    natural: f64,
}
impl<'a> QuadraticSplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(XOrdering::Ascending), natural: 0.0 }
    }

    pub fn set_natural(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() {
            return Err(InterpolationError::NonFiniteVec { idx: 0 });
        }
        self.natural = v;
        Ok(self)
    }

    pub fn natural(&self) -> f64 { self.natural }
}
impl<'a> Default for QuadraticSplineCfg<'a> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(QuadraticSplineCfg<'a>);


/// `constant + slope * p` in the free parameter `p`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub constant: f64,
    pub slope: f64,
}

impl Affine {
    #[inline]
    pub fn at(&self, p: f64) -> f64 {
        self.constant + self.slope * p
    }
}


#[derive(Debug, Clone)]
pub struct QuadraticSpline {
    differences: DividedDifferences,
    h: Vec<f64>,
    natural: f64,
    linear_terms: Vec<OnceCell<Affine>>,
    quadratic_terms: Vec<OnceCell<Affine>>,
}

impl QuadraticSpline {
    /// # Errors
    /// - [`InterpolationError::NonIncreasingX`] unless knots ascend.
    pub fn new(samples: SampleSet) -> Result<Self, InterpolationError> {
        check_knots(&samples)?;

        let h = spacings(samples.x());
        let linear_terms = h.iter().map(|_| OnceCell::new()).collect();
        let quadratic_terms = h.iter().map(|_| OnceCell::new()).collect();
        Ok(Self {
            differences: DividedDifferences::new(samples),
            h,
            natural: 0.0,
            linear_terms,
            quadratic_terms,
        })
    }

    pub fn from_cfg(cfg: &QuadraticSplineCfg) -> Result<Self, InterpolationError> {
        let mut spline = Self::new(cfg.common.samples()?)?;
        spline.natural = cfg.natural;
        Ok(spline)
    }

    pub fn with_natural(mut self, natural: f64) -> Self {
        self.natural = natural;
        self
    }

    pub fn natural(&self) -> f64 { self.natural }

    /// `B_index` as a function of the free parameter.
    pub fn linear_term(&self, index: usize) -> Result<Affine, InterpolationError> {
        self.check_piece(index)?;
        self.b(index)
    }

    /// `C_index` as a function of the free parameter.
    pub fn quadratic_term(&self, index: usize) -> Result<Affine, InterpolationError> {
        self.check_piece(index)?;
        self.c(index)
    }

    /// Number of `B_i` and `C_i` terms computed so far.
    pub fn computed(&self) -> usize {
        self.linear_terms
            .iter()
            .chain(&self.quadratic_terms)
            .filter(|cell| cell.get().is_some())
            .count()
    }

    /// Piece `index` with the free parameter set to `natural`.
    pub fn piece_with_natural(&self, index: usize, natural: f64) -> Result<Polynomial, InterpolationError> {
        self.check_piece(index)?;

        let xi = self.samples().x()[index];
        let yi = self.samples().y()[index];
        let b = self.b(index)?.at(natural);
        let c = self.c(index)?.at(natural);

        let t = Polynomial::linear_factor(xi);
        Ok(&t * &t * c + t * b + yi)
    }

    fn b(&self, index: usize) -> Result<Affine, InterpolationError> {
        if let Some(b) = self.linear_terms[index].get() {
            return Ok(*b);
        }

        let b = if index == 0 {
            let d0 = self.differences.coefficient(1, 0)?;
            Affine { constant: d0, slope: -self.h[0] }
        } else {
            let prev = self.b(index - 1)?;
            let c = self.c(index - 1)?;
            let h = self.h[index - 1];
            Affine {
                constant: prev.constant + 2.0 * h * c.constant,
                slope: prev.slope + 2.0 * h * c.slope,
            }
        };

        tracing::trace!(index, constant = b.constant, slope = b.slope, "quadratic spline B");
        Ok(*self.linear_terms[index].get_or_init(|| b))
    }

    fn c(&self, index: usize) -> Result<Affine, InterpolationError> {
        if let Some(c) = self.quadratic_terms[index].get() {
            return Ok(*c);
        }

        let d = self.differences.coefficient(1, index)?;
        let b = self.b(index)?;
        let h = self.h[index];
        let c = Affine { constant: (d - b.constant) / h, slope: -b.slope / h };

        tracing::trace!(index, constant = c.constant, slope = c.slope, "quadratic spline C");
        Ok(*self.quadratic_terms[index].get_or_init(|| c))
    }
}

impl InterpolatingSpline for QuadraticSpline {
    fn samples(&self) -> &SampleSet { self.differences.samples() }

    fn algorithm(&self) -> Algorithm { Algorithm::QuadraticSpline }

    fn piece(&self, index: usize) -> Result<Polynomial, InterpolationError> {
        self.piece_with_natural(index, self.natural)
    }
}


/// Evaluates the quadratic spline at every `x_eval` point.
///
/// # Errors
/// - Validation errors from [`CommonCfg`].
/// - [`InterpolationError::OutOfBounds`] outside `[x_0, x_{n-1}]`.
pub fn interpolate(cfg: QuadraticSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    let spline = QuadraticSpline::from_cfg(&cfg)?;
    evaluate_spline(&spline, cfg.common.x_eval())
}
