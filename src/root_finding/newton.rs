//! Newton's method
//!
//! ```text
//! x_{k+1} = x_k - f(x_k) / f'(c)
//! ```
//!
//! with `c = x_k`, or `c = x_0` for the constant-derivative variant, which
//! trades quadratic for linear convergence but differentiates only once.
//! Precision is the step length `|x_{k+1} - x_k|`.

use crate::condition::Condition;
use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::driver::{drive, Stepper};
use crate::root_finding::errors::RootFindingError;
use crate::root_finding::report::RootFindingReport;
use crate::root_finding::signs::eval;
use crate::symbolic::Function;


#[derive(Debug, Clone)]
pub struct NewtonMethod<F: Function> {
    fx: F,
    dfx: F,
    x0: f64,
    constant: bool,
}

impl<F: Function> NewtonMethod<F> {
    /// # Errors
    /// - [`RootFindingError::InvalidGuess`] for a non-finite `x0`.
    pub fn new(fx: F, x0: f64) -> Result<Self, RootFindingError> {
        if !x0.is_finite() {
            return Err(RootFindingError::InvalidGuess { x0 });
        }
        let dfx = fx.derivative();
        Ok(Self { fx, dfx, x0, constant: false })
    }

    /// Freeze the derivative at `x0`.
    pub fn with_constant_derivative(mut self, constant: bool) -> Self {
        self.constant = constant;
        self
    }

    pub fn derivative(&self) -> &F { &self.dfx }

    pub fn solve<C: Condition>(&self, condition: &mut C) -> Result<RootFindingReport, RootFindingError> {
        let frozen = if self.constant { Some(self.x0) } else { None };
        drive(Tangent { fx: &self.fx, dfx: &self.dfx, x: self.x0, frozen }, condition)
    }
}


struct Tangent<'f, F> {
    fx: &'f F,
    dfx: &'f F,
    x: f64,
    frozen: Option<f64>,
}

impl<F: Function> Stepper for Tangent<'_, F> {
    const ALGORITHM: Algorithm = Algorithm::Newton;

    fn successor(&self) -> Result<f64, RootFindingError> {
        let at = self.frozen.unwrap_or(self.x);
        let slope = eval(self.dfx, at)?;
        if slope == 0.0 {
            return Err(RootFindingError::ZeroDerivative { x: at });
        }
        Ok(self.x - eval(self.fx, self.x)? / slope)
    }

    fn precision(&self, successor: f64) -> f64 {
        (successor - self.x).abs()
    }

    fn advance(&mut self, successor: f64) -> Result<(), RootFindingError> {
        self.x = successor;
        Ok(())
    }

    fn residual(&self, x: f64) -> Result<f64, RootFindingError> {
        eval(self.fx, x)
    }
}
