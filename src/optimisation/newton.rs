//! Newton's method on the first derivative
//!
//! ```text
//! x_{k+1} = x_k - f'(x_k) / f''(x_k)
//! ```
//!
//! Finds a stationary point; [`NewtonOptimisation::is_minimum`] and
//! [`NewtonOptimisation::is_maximum`] classify it by the sign of `f''`.

use crate::condition::{Condition, GLOBAL_MAX_ITER_FALLBACK, TerminationReason};
use crate::optimisation::errors::OptimisationError;
use crate::optimisation::eval;
use crate::optimisation::report::OptimisationReport;
use crate::symbolic::Function;


#[derive(Debug, Clone)]
pub struct NewtonOptimisation<F: Function> {
    fx: F,
    d1: F,
    d2: F,
}

impl<F: Function> NewtonOptimisation<F> {
    pub fn new(fx: F) -> Self {
        let d1 = fx.derivative();
        let d2 = d1.derivative();
        Self { fx, d1, d2 }
    }

    pub fn next(&self, x: f64) -> Result<f64, OptimisationError> {
        let curvature = eval(&self.d2, x)?;
        if curvature == 0.0 {
            return Err(OptimisationError::ZeroCurvature { x });
        }
        Ok(x - eval(&self.d1, x)? / curvature)
    }

    /// Iterates until `condition` accepts `|x_k - x_{k+1}|`.
    pub fn optimize<C: Condition>(
        &self,
        x0: f64,
        condition: &mut C,
    ) -> Result<OptimisationReport, OptimisationError> {
        if !x0.is_finite() {
            return Err(OptimisationError::InvalidGuess { x0 });
        }

        let mut x = x0;
        let mut iterations = 0;
        let (point, precision, termination_reason) = loop {
            let next = self.next(x)?;
            let precision = (x - next).abs();
            iterations += 1;
            tracing::trace!(iterations, x = next, precision, "newton optimisation step");

            if condition.check(precision) {
                break (next, precision, TerminationReason::ConditionMet);
            }
            if precision == 0.0 {
                break (next, precision, TerminationReason::MachinePrecisionReached);
            }
            if iterations >= GLOBAL_MAX_ITER_FALLBACK {
                break (next, precision, TerminationReason::IterationLimit);
            }
            x = next;
        };

        tracing::debug!(point, iterations, "newton optimisation done");
        Ok(OptimisationReport {
            point,
            value: eval(&self.fx, point)?,
            iterations,
            precision,
            termination_reason,
            method_name: "newton",
        })
    }

    pub fn is_minimum(&self, x: f64) -> bool { self.d2.value(x) > 0.0 }

    pub fn is_maximum(&self, x: f64) -> bool { self.d2.value(x) < 0.0 }
}
