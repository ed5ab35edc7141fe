//! Secant method
//!
//! ```text
//! x_{k+1} = x_k - f(x_k) (x_k - p) / (f(x_k) - f(p))
//! ```
//!
//! with `p = x_{k-1}`, or `p = x_0` for the fixed-point variant (the chord
//! always passes through the first point). Precision is the step length
//! `|x_{k+1} - x_k|`.

use crate::condition::Condition;
use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::driver::{drive, Stepper};
use crate::root_finding::errors::RootFindingError;
use crate::root_finding::report::RootFindingReport;
use crate::root_finding::signs::eval;
use crate::symbolic::Function;


#[derive(Debug, Clone)]
pub struct SecantMethod<F: Function> {
    fx: F,
    x0: f64,
    x1: f64,
    constant: bool,
}

impl<F: Function> SecantMethod<F> {
    /// # Errors
    /// - [`RootFindingError::InvalidGuess`] for non-finite starting points.
    /// - [`RootFindingError::ZeroSecantSlope`] if `x0 == x1`.
    pub fn new(fx: F, x0: f64, x1: f64) -> Result<Self, RootFindingError> {
        if let Some(bad) = [x0, x1].into_iter().find(|x| !x.is_finite()) {
            return Err(RootFindingError::InvalidGuess { x0: bad });
        }
        if x0 == x1 {
            return Err(RootFindingError::ZeroSecantSlope { x0, x1 });
        }
        Ok(Self { fx, x0, x1, constant: false })
    }

    /// Keep `x0` as the second chord point for every step.
    pub fn with_constant_point(mut self, constant: bool) -> Self {
        self.constant = constant;
        self
    }

    pub fn solve<C: Condition>(&self, condition: &mut C) -> Result<RootFindingReport, RootFindingError> {
        let fixed = if self.constant { Some(self.x0) } else { None };
        drive(Chord { fx: &self.fx, x0: self.x0, x1: self.x1, fixed }, condition)
    }
}


struct Chord<'f, F> {
    fx: &'f F,
    x0: f64,
    x1: f64,
    fixed: Option<f64>,
}

impl<F: Function> Stepper for Chord<'_, F> {
    const ALGORITHM: Algorithm = Algorithm::Secant;

    fn successor(&self) -> Result<f64, RootFindingError> {
        let p = self.fixed.unwrap_or(self.x0);
        let f1 = eval(self.fx, self.x1)?;
        let slope = (f1 - eval(self.fx, p)?) / (self.x1 - p);
        if slope == 0.0 || !slope.is_finite() {
            return Err(RootFindingError::ZeroSecantSlope { x0: p, x1: self.x1 });
        }
        Ok(self.x1 - f1 / slope)
    }

    fn precision(&self, successor: f64) -> f64 {
        (successor - self.x1).abs()
    }

    fn advance(&mut self, successor: f64) -> Result<(), RootFindingError> {
        self.x0 = self.x1;
        self.x1 = successor;
        Ok(())
    }

    fn residual(&self, x: f64) -> Result<f64, RootFindingError> {
        eval(self.fx, x)
    }
}
