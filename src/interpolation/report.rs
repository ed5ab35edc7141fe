//! Outcome of the batch `interpolate` entry points.
//!
//! Besides the evaluated values the report keeps the polynomials that produced
//! them: a single interpolant for the Newton and Lagrange forms, one entry per
//! piece for splines.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::symbolic::Polynomial;


/// [`InterpolationReport`]
/// - `algorithm_name` : e.g. `"newton"`, `"natural cubic spline"`
/// - `n_provided`     : number of `(x, y)` samples
/// - `n_evaluated`    : number of `x_eval` points
/// - `domain`         : `(x_min, x_max)` of the independent variable
/// - `polynomials`    : interpolant, or spline pieces in knot order
/// - `evaluated`      : values at each `x_eval` point
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub domain: (f64, f64),
    pub polynomials: Vec<Polynomial>,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub(crate) fn new(
        algorithm: Algorithm,
        n_provided: usize,
        domain: (f64, f64),
        polynomials: Vec<Polynomial>,
        evaluated: Vec<f64>,
    ) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated: evaluated.len(),
            domain,
            polynomials,
            evaluated,
        }
    }
}


/// Passes `xq` through if it lies in `[x_min, x_max]`.
pub(crate) fn in_domain(xq: f64, (x_min, x_max): (f64, f64)) -> Result<f64, InterpolationError> {
    if xq < x_min || xq > x_max {
        return Err(InterpolationError::OutOfBounds { got: xq, x_min, x_max });
    }
    Ok(xq)
}
