//! Natural cubic spline.
//!
//! Unknowns are the second derivatives `m_i = S''(x_i)`. Continuity of the
//! first derivative at every interior knot gives
//!
//! ```text
//! h_{i-1} m_{i-1} + 2(h_{i-1} + h_i) m_i + h_i m_{i+1} = 6 (d_i - d_{i-1}),   i = 1..n-2
//! ```
//!
//! with `d_i = f[x_i, x_{i+1}]` and the natural boundary `m_0 = m_{n-1} = 0`.
//! The tridiagonal system is swept with the same recursion as
//! [`crate::linear::tridiagonal::RelocationMethod`]:
//!
//! ```text
//! m_i = α_i m_{i+1} + β_i
//! α_i = -C_i / (B_i + A_i α_{i-1})
//! β_i = (D_i - A_i β_{i-1}) / (B_i + A_i α_{i-1})
//! ```
//!
//! Piece `i`, `t = x - x_i`:
//!
//! ```text
//! S_i(x) = y_i + e t + g t² + k t³
//! g = m_i / 2,   k = (m_{i+1} - m_i) / (6 h_i),   e = d_i - h_i (2 m_i + m_{i+1}) / 6
//! ```

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


#[derive(Debug, Copy, Clone)]
pub struct CubicSplineCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> CubicSplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(XOrdering::Ascending) }
    }
}
impl<'a> Default for CubicSplineCfg<'a> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(CubicSplineCfg<'a>);


#[derive(Debug, Clone)]
pub struct CubicSpline {
    differences: DividedDifferences,
    h: Vec<f64>,
    alpha: Vec<OnceCell<f64>>,
    beta: Vec<OnceCell<f64>>,
    m: Vec<OnceCell<f64>>,
}

impl CubicSpline {
    /// # Errors
    /// - [`InterpolationError::NonIncreasingX`] unless knots ascend.
    pub fn new(samples: SampleSet) -> Result<Self, InterpolationError> {
        check_knots(&samples)?;

        let n = samples.len();
        let h = spacings(samples.x());
        Ok(Self {
            differences: DividedDifferences::new(samples),
            h,
            alpha: (0..n).map(|_| OnceCell::new()).collect(),
            beta: (0..n).map(|_| OnceCell::new()).collect(),
            m: (0..n).map(|_| OnceCell::new()).collect(),
        })
    }

    pub fn from_cfg(cfg: &CubicSplineCfg) -> Result<Self, InterpolationError> {
        Self::new(cfg.common.samples()?)
    }

    /// Sweep coefficients `α_1..α_{n-2}` of the interior knots.
    pub fn alpha(&self) -> Result<Vec<f64>, InterpolationError> {
        (1..self.last()).map(|i| self.a(i)).collect()
    }

    /// Sweep coefficients `β_1..β_{n-2}` of the interior knots.
    pub fn beta(&self) -> Result<Vec<f64>, InterpolationError> {
        (1..self.last()).map(|i| self.b(i)).collect()
    }

    /// `m_0..m_{n-1}`, zero at both ends.
    pub fn second_derivatives(&self) -> Result<Vec<f64>, InterpolationError> {
        (0..=self.last()).map(|i| self.second_derivative(i)).collect()
    }

    fn last(&self) -> usize { self.h.len() }

    // row i of the system: A m_{i-1} + B m_i + C m_{i+1} = D
    fn row(&self, i: usize) -> Result<(f64, f64, f64, f64), InterpolationError> {
        let d_prev = self.differences.coefficient(1, i - 1)?;
        let d_next = self.differences.coefficient(1, i)?;
        let (h_prev, h_next) = (self.h[i - 1], self.h[i]);
        Ok((h_prev, 2.0 * (h_prev + h_next), h_next, 6.0 * (d_next - d_prev)))
    }

    fn a(&self, i: usize) -> Result<f64, InterpolationError> {
        if let Some(v) = self.alpha[i].get() {
            return Ok(*v);
        }
        let (a, b, c, _) = self.row(i)?;
        let denominator = if i == 1 { b } else { b + a * self.a(i - 1)? };
        let v = -c / denominator;
        Ok(*self.alpha[i].get_or_init(|| v))
    }

    fn b(&self, i: usize) -> Result<f64, InterpolationError> {
        if let Some(v) = self.beta[i].get() {
            return Ok(*v);
        }
        let (a, b, _, d) = self.row(i)?;
        let v = if i == 1 {
            d / b
        } else {
            (d - a * self.b(i - 1)?) / (b + a * self.a(i - 1)?)
        };

        tracing::trace!(index = i, beta = v, "cubic spline sweep");
        Ok(*self.beta[i].get_or_init(|| v))
    }

    fn second_derivative(&self, i: usize) -> Result<f64, InterpolationError> {
        if i == 0 || i >= self.last() {
            return Ok(0.0);
        }
        if let Some(v) = self.m[i].get() {
            return Ok(*v);
        }
        let v = self.a(i)? * self.second_derivative(i + 1)? + self.b(i)?;
        Ok(*self.m[i].get_or_init(|| v))
    }
}

impl InterpolatingSpline for CubicSpline {
    fn samples(&self) -> &SampleSet { self.differences.samples() }

    fn algorithm(&self) -> Algorithm { Algorithm::CubicSpline }

    fn piece(&self, index: usize) -> Result<Polynomial, InterpolationError> {
        self.check_piece(index)?;

        let h = self.h[index];
        let d = self.differences.coefficient(1, index)?;
        let m0 = self.second_derivative(index)?;
        let m1 = self.second_derivative(index + 1)?;

        let g = m0 / 2.0;
        let k = (m1 - m0) / (6.0 * h);
        let e = d - h * (2.0 * m0 + m1) / 6.0;

        let t = Polynomial::linear_factor(self.samples().x()[index]);
        let t2 = &t * &t;
        let t3 = &t2 * &t;
        Ok(t3 * k + t2 * g + t * e + self.samples().y()[index])
    }
}


/// Evaluates the natural cubic spline at every `x_eval` point.
///
/// # Errors
/// - Validation errors from [`CommonCfg`].
/// - [`InterpolationError::OutOfBounds`] outside `[x_0, x_{n-1}]`.
pub fn interpolate(cfg: CubicSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    let spline = CubicSpline::from_cfg(&cfg)?;
    evaluate_spline(&spline, cfg.common.x_eval())
}
