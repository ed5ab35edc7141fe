//! Fixed-point iteration `x_{k+1} = g(x_k)`.
//!
//! With `q = max |g'|` over the interval, `q < 1` makes `g` a contraction
//! and the a-posteriori bound
//!
//! ```text
//! |x* - x_{k+1}| <= q |x_{k+1} - x_k| / (1 - q)
//! ```
//!
//! is the precision handed to the stopping condition.

use crate::condition::Condition;
use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::driver::{drive, Stepper};
use crate::root_finding::errors::RootFindingError;
use crate::root_finding::report::RootFindingReport;
use crate::root_finding::signs::{check_bounds, eval};
use crate::sampling::{maximum_absolute_value, DEFAULT_SAMPLING_STEP};
use crate::symbolic::Function;


#[derive(Debug, Clone)]
pub struct FixedPointMethod<F: Function> {
    g: F,
    x0: f64,
    q: f64,
}

impl<F: Function> FixedPointMethod<F> {
    /// `g` is the iteration function, `[a, b]` the interval `q` is sampled on.
    ///
    /// # Errors
    /// - [`RootFindingError::InvalidBounds`] for a bad interval.
    /// - [`RootFindingError::InvalidGuess`] for a non-finite `x0`.
    /// - [`RootFindingError::NotContractive`] if `q >= 1`.
    pub fn new(g: F, a: f64, b: f64, x0: f64) -> Result<Self, RootFindingError> {
        check_bounds(a, b)?;
        if !x0.is_finite() {
            return Err(RootFindingError::InvalidGuess { x0 });
        }

        let q = maximum_absolute_value(&g, a, b, 1, DEFAULT_SAMPLING_STEP);
        if !(q < 1.0) {
            return Err(RootFindingError::NotContractive { q });
        }

        tracing::debug!(q, "fixed point contraction");
        Ok(Self { g, x0, q })
    }

    /// Contraction factor `max |g'|`.
    pub fn q(&self) -> f64 { self.q }

    pub fn solve<C: Condition>(&self, condition: &mut C) -> Result<RootFindingReport, RootFindingError> {
        drive(Iterate { g: &self.g, x: self.x0, q: self.q }, condition)
    }
}


struct Iterate<'f, F> {
    g: &'f F,
    x: f64,
    q: f64,
}

impl<F: Function> Stepper for Iterate<'_, F> {
    const ALGORITHM: Algorithm = Algorithm::FixedPoint;

    fn successor(&self) -> Result<f64, RootFindingError> {
        eval(self.g, self.x)
    }

    fn precision(&self, successor: f64) -> f64 {
        self.q * (successor - self.x).abs() / (1.0 - self.q)
    }

    fn advance(&mut self, successor: f64) -> Result<(), RootFindingError> {
        self.x = successor;
        Ok(())
    }

    fn residual(&self, x: f64) -> Result<f64, RootFindingError> {
        Ok(eval(self.g, x)? - x)
    }
}
