//! Brute-force sampling helpers.
//!
//! Theoretical error bounds need `max |f^(k)|` over an interval. Instead of
//! solving for critical points this samples the derivative on a uniform grid,
//! which is accurate enough for classroom-sized intervals.
//!
//! - [`arange`]                 : inclusive uniform grid
//! - [`value_sampling`]         : `f` evaluated on that grid
//! - [`maximum_absolute_value`] : `max |f^(k)(x)|` over the grid
//! - [`subintervals`]           : consecutive `(x_i, x_{i+1})` pairs
//! - [`same_sign`]              : `f` keeps one sign over the grid

use crate::symbolic::Function;

/// Default grid step used by the sampling-based maximum finder.
pub const DEFAULT_SAMPLING_STEP: f64 = 0.05;


/// Inclusive range `start, start + step, ..., end`.
///
/// Mirrors `numpy.arange(start, end + step / 2, step)`; points are computed as
/// `start + k * step` so rounding does not accumulate. Returns an empty vector
/// for a non-positive or non-finite `step` or when `end < start`.
pub fn arange(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) || end < start {
        return Vec::new();
    }
    let count = ((end - start) / step + 0.5).ceil() as usize;
    (0..count).map(|k| start + k as f64 * step).collect()
}

pub fn value_sampling<F: Function>(f: &F, start: f64, end: f64, step: f64) -> Vec<f64> {
    arange(start, end, step).into_iter().map(|x| f.value(x)).collect()
}

/// `max |f^(derivative_degree)(x)|` over `arange(start, end, step)`.
pub fn maximum_absolute_value<F: Function>(
    f: &F,
    start: f64,
    end: f64,
    derivative_degree: usize,
    step: f64,
) -> f64 {
    let derivative = f.nth_derivative(derivative_degree);
    let max = value_sampling(&derivative, start, end, step)
        .into_iter()
        .map(f64::abs)
        .fold(0.0, f64::max);

    tracing::trace!(start, end, derivative_degree, max, "sampled maximum");
    max
}

/// Zips grid points into consecutive subintervals.
pub fn subintervals(points: &[f64]) -> Vec<(f64, f64)> {
    points.windows(2).map(|w| (w[0], w[1])).collect()
}

/// `true` if every sampled value of `f` has the same sign.
pub fn same_sign<F: Function>(f: &F, start: f64, end: f64, step: f64) -> bool {
    let values = value_sampling(f, start, end, step);
    values.iter().all(|v| *v > 0.0) || values.iter().all(|v| *v < 0.0)
}
