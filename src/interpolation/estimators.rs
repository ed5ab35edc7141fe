//! Error estimates for interpolating polynomials.
//!
//! Every estimator has the shape `scale * |p(x)|` for some polynomial `p`:
//!
//! ```text
//! theoretical  : max|f^(n+1)| / (n+1)!  * |ω_{n+1}(x)|
//! difference   : 1                      * |P_{n+1}(x) - P_n(x)|
//! next degree  : |f[x_0, ..., x_n]|     * |ω_n(x)|
//! ```
//!
//! where `ω_k` is the basis polynomial of degree `k`. [`ErrorEstimate`] keeps
//! the two parts apart so callers can inspect the bound's polynomial factor
//! as well as evaluate it.

use crate::interpolation::errors::InterpolationError;
use crate::sampling::arange;
use crate::symbolic::Polynomial;


#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEstimate {
    scale: f64,
    polynomial: Polynomial,
}

impl ErrorEstimate {
    pub fn new(scale: f64, polynomial: Polynomial) -> Self {
        Self { scale: scale.abs(), polynomial }
    }

    pub fn scale(&self) -> f64 { self.scale }
    pub fn polynomial(&self) -> &Polynomial { &self.polynomial }

    /// Estimated error at `x`.
    #[inline]
    pub fn at(&self, x: f64) -> f64 {
        self.scale * self.polynomial.eval(x).abs()
    }

    /// Largest sampled estimate over `[start, end]` with grid `step`.
    pub fn max_over(&self, start: f64, end: f64, step: f64) -> Result<f64, InterpolationError> {
        if !(start.is_finite() && end.is_finite()) || start >= end {
            return Err(InterpolationError::InvalidInterval { start, end });
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(InterpolationError::InvalidStep { got: step });
        }
        Ok(arange(start, end, step).into_iter().map(|x| self.at(x)).fold(0.0, f64::max))
    }
}

/// `n!` as a float.
pub(crate) fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}
