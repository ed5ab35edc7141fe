//! Shared iteration loop.
//!
//! Every method proposes a successor of its current state and a precision
//! estimate for it. The loop stops when the caller's [`Condition`] accepts
//! the estimate, or after [`GLOBAL_MAX_ITER_FALLBACK`] steps.

use crate::condition::Condition;
use crate::root_finding::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK, TRUE_ROOT_PRECISION};
use crate::root_finding::errors::RootFindingError;
use crate::root_finding::report::{RootFindingReport, TerminationReason};


pub(crate) trait Stepper {
    const ALGORITHM: Algorithm;

    fn successor(&self) -> Result<f64, RootFindingError>;

    fn precision(&self, successor: f64) -> f64;

    fn advance(&mut self, successor: f64) -> Result<(), RootFindingError>;

    /// Value that vanishes at a root.
    fn residual(&self, x: f64) -> Result<f64, RootFindingError>;
}


pub(crate) fn drive<S: Stepper, C: Condition>(
    mut stepper: S,
    condition: &mut C,
) -> Result<RootFindingReport, RootFindingError> {
    let mut successor = stepper.successor()?;
    let mut precision = stepper.precision(successor);
    let mut iterations = 0;

    let termination_reason = loop {
        if condition.check(precision) {
            break TerminationReason::ConditionMet;
        }
        if precision == 0.0 {
            break TerminationReason::MachinePrecisionReached;
        }
        if iterations >= GLOBAL_MAX_ITER_FALLBACK {
            break TerminationReason::IterationLimit;
        }

        stepper.advance(successor)?;
        iterations += 1;
        successor = stepper.successor()?;
        precision = stepper.precision(successor);

        tracing::trace!(algorithm = %S::ALGORITHM, iterations, successor, precision, "root finding step");
    };

    let report = RootFindingReport {
        root: successor,
        f_root: stepper.residual(successor)?,
        iterations,
        precision,
        true_root: precision < TRUE_ROOT_PRECISION,
        termination_reason,
        algorithm_name: S::ALGORITHM.algorithm_name(),
    };
    tracing::debug!(algorithm = %S::ALGORITHM, root = report.root, iterations, "root finding done");
    Ok(report)
}
