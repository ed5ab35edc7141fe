use crate::interpolation::errors::InterpolationError;
use crate::interpolation::samples::SampleSet;

/// Stores spacings between adjacent knots
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Index of the piece whose interval `(x_i, x_{i+1}]` contains `xq`.
///
/// The leftmost knot has no interval of its own and maps to piece 0.
pub(crate) fn find_piece(x: &[f64], xq: f64) -> usize {
    let mut lo = 0;
    let mut hi = x.len() - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] < xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Splines need at least two knots in ascending order.
pub(crate) fn check_knots(samples: &SampleSet) -> Result<(), InterpolationError> {
    if samples.len() < 2 {
        return Err(InterpolationError::InsufficientPoints { got: samples.len() });
    }
    if !samples.is_ascending() {
        return Err(InterpolationError::NonIncreasingX);
    }
    Ok(())
}
