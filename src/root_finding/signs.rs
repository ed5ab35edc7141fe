//! Sign utilities and root existence checks.
//!
//! - [`root_parity`] : parity of the root count from the endpoint signs
//! - [`one_root`]    : sufficient test for exactly one root
//!
//! `one_root` can return `false` for an interval with a single root: the
//! monotonicity test only gives certainty one way.

use crate::root_finding::errors::RootFindingError;
use crate::sampling::{same_sign, DEFAULT_SAMPLING_STEP};
use crate::symbolic::Function;

/// Parity of the number of roots in an interval.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
}


/// Returns `true` if `x` and `y` have strictly opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x * y < 0.0
}

pub(crate) fn check_bounds(a: f64, b: f64) -> Result<(), RootFindingError> {
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(RootFindingError::InvalidBounds { a, b });
    }
    Ok(())
}

/// Evaluates `f` with a finite check.
#[inline]
pub(crate) fn eval<F: Function>(f: &F, x: f64) -> Result<f64, RootFindingError> {
    let fx = f.value(x);
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx });
    }
    Ok(fx)
}


/// Odd when `f(a)` and `f(b)` have opposite signs.
pub fn root_parity<F: Function>(fx: &F, a: f64, b: f64) -> Result<Parity, RootFindingError> {
    check_bounds(a, b)?;
    if opposite_sign(eval(fx, a)?, eval(fx, b)?) {
        Ok(Parity::Odd)
    } else {
        Ok(Parity::Even)
    }
}

/// Odd parity and a derivative of constant sign over the sampled interval.
pub fn one_root<F: Function>(fx: &F, a: f64, b: f64) -> Result<bool, RootFindingError> {
    let parity = root_parity(fx, a, b)?;
    Ok(parity == Parity::Odd && same_sign(&fx.derivative(), a, b, DEFAULT_SAMPLING_STEP))
}
