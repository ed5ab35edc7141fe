//! Golden-section search on `[a, b]`.
//!
//! Each step places `x1 = a + d`, `x2 = b - d` with `d = q (b - a)`,
//! `q = (3 - √5) / 2`, takes the best of `{a, b, x1, x2}` and keeps the
//! subinterval on its side. The interval length `b - a` is the precision
//! handed to the stopping condition.

use crate::condition::{Condition, GLOBAL_MAX_ITER_FALLBACK, TerminationReason};
use crate::optimisation::errors::OptimisationError;
use crate::optimisation::eval;
use crate::optimisation::report::OptimisationReport;
use crate::symbolic::Function;


/// Which extremum to search for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

impl Extremum {
    /// `true` if `candidate` beats `best`. Ties keep `best`.
    fn better(self, candidate: f64, best: f64) -> bool {
        match self {
            Extremum::Min => candidate < best,
            Extremum::Max => candidate > best,
        }
    }
}


#[derive(Debug, Clone)]
pub struct GoldenRatio<F: Function> {
    fx: F,
}

impl<F: Function> GoldenRatio<F> {
    pub const Q: f64 = 0.381_966_011_250_105_1;

    pub fn new(fx: F) -> Self { Self { fx } }

    /// Interior points `(a + d, b - d)`.
    pub fn next(a: f64, b: f64) -> (f64, f64) {
        let d = (b - a) * Self::Q;
        (a + d, b - d)
    }

    /// # Errors
    /// - [`OptimisationError::InvalidBounds`] unless `a < b`, both finite.
    /// - [`OptimisationError::NonFiniteEvaluation`] if `f` blows up at a probe.
    pub fn optimize<C: Condition>(
        &self,
        a: f64,
        b: f64,
        condition: &mut C,
        extremum: Extremum,
    ) -> Result<OptimisationReport, OptimisationError> {
        if !(a.is_finite() && b.is_finite()) || a >= b {
            return Err(OptimisationError::InvalidBounds { a, b });
        }

        let (mut a, mut b) = (a, b);
        let mut iterations = 0;
        loop {
            let (x1, x2) = Self::next(a, b);
            let (xm, fm) = self.optimal([a, b, x1, x2], extremum)?;

            (a, b) = if (xm - a).abs() < (xm - b).abs() { (a, x2) } else { (x1, b) };
            iterations += 1;
            tracing::trace!(iterations, a, b, xm, "golden ratio step");

            let precision = b - a;
            let termination_reason = if condition.check(precision) {
                TerminationReason::ConditionMet
            } else if iterations >= GLOBAL_MAX_ITER_FALLBACK {
                TerminationReason::IterationLimit
            } else {
                continue;
            };

            tracing::debug!(point = xm, iterations, "golden ratio done");
            return Ok(OptimisationReport {
                point: xm,
                value: fm,
                iterations,
                precision,
                termination_reason,
                method_name: "golden_ratio",
            });
        }
    }

    fn optimal(&self, xs: [f64; 4], extremum: Extremum) -> Result<(f64, f64), OptimisationError> {
        let mut best = (xs[0], eval(&self.fx, xs[0])?);
        for &x in &xs[1..] {
            let fx = eval(&self.fx, x)?;
            if extremum.better(fx, best.1) {
                best = (x, fx);
            }
        }
        Ok(best)
    }
}
