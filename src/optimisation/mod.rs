//! One-dimensional optimisation.
//!
//! - [`golden_ratio`] : bracketing search for a minimum or maximum
//! - [`newton`]       : stationary points from `f'` and `f''`

pub mod errors;
pub mod golden_ratio;
pub mod newton;
pub mod report;

pub use errors::OptimisationError;
pub use golden_ratio::{Extremum, GoldenRatio};
pub use newton::NewtonOptimisation;
pub use report::OptimisationReport;


use crate::symbolic::Function;

/// Evaluates `f` with a finite check.
#[inline]
pub(crate) fn eval<F: Function>(
    f: &F,
    x: f64,
) -> Result<f64, OptimisationError> {
    let fx = f.value(x);
    if !fx.is_finite() {
        return Err(OptimisationError::NonFiniteEvaluation { x, fx });
    }
    Ok(fx)
}
