//! Midpoint (bisection) method.
//!
//! Keeps the half of `[a, b]` whose endpoints straddle a sign change.
//! The midpoint is within `(b - a) / 2` of a root, which is the precision
//! handed to the stopping condition.

use crate::condition::Condition;
use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::driver::{drive, Stepper};
use crate::root_finding::errors::RootFindingError;
use crate::root_finding::report::RootFindingReport;
use crate::root_finding::signs::{check_bounds, eval, opposite_sign};
use crate::symbolic::Function;


#[derive(Debug, Clone)]
pub struct MidpointMethod<F: Function> {
    fx: F,
    a: f64,
    b: f64,
}

impl<F: Function> MidpointMethod<F> {
    /// # Errors
    /// - [`RootFindingError::InvalidBounds`] unless `a < b`, both finite.
    /// - [`RootFindingError::NoSignChange`] unless `f(a) f(b) < 0`.
    pub fn new(fx: F, a: f64, b: f64) -> Result<Self, RootFindingError> {
        check_bounds(a, b)?;
        if !opposite_sign(eval(&fx, a)?, eval(&fx, b)?) {
            return Err(RootFindingError::NoSignChange { a, b });
        }
        Ok(Self { fx, a, b })
    }

    /// Halvings needed to reach `precision`, `log2((b - a) / precision) - 1`.
    pub fn converges_in(&self, precision: f64) -> f64 {
        ((self.b - self.a) / precision).log2() - 1.0
    }

    pub fn solve<C: Condition>(&self, condition: &mut C) -> Result<RootFindingReport, RootFindingError> {
        drive(Bracket { fx: &self.fx, a: self.a, b: self.b }, condition)
    }
}


struct Bracket<'f, F> {
    fx: &'f F,
    a: f64,
    b: f64,
}

impl<F: Function> Stepper for Bracket<'_, F> {
    const ALGORITHM: Algorithm = Algorithm::Midpoint;

    fn successor(&self) -> Result<f64, RootFindingError> {
        Ok(self.a + (self.b - self.a) * 0.5)
    }

    fn precision(&self, _successor: f64) -> f64 {
        (self.b - self.a) / 2.0
    }

    fn advance(&mut self, successor: f64) -> Result<(), RootFindingError> {
        let fs = eval(self.fx, successor)?;
        if fs == 0.0 {
            // exact hit, collapse onto it
            self.a = successor;
            self.b = successor;
        } else if opposite_sign(eval(self.fx, self.a)?, fs) {
            self.b = successor;
        } else {
            self.a = successor;
        }
        Ok(())
    }

    fn residual(&self, x: f64) -> Result<f64, RootFindingError> {
        eval(self.fx, x)
    }
}
