//! Root-finding error types.
//!
//! ┌ input      : bounds, brackets without a sign change
//! ├ evaluation : non-finite function values
//! └ method     : non-contractive iteration functions, vanishing slopes

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) >= 0")]
    NoSignChange { a: f64, b: f64 },

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("iteration function is not a contraction: q = max |g'| = {q} >= 1")]
    NotContractive { q: f64 },

    #[error("vanishing derivative at x={x}")]
    ZeroDerivative { x: f64 },

    #[error("vanishing secant slope between x0={x0} and x1={x1}")]
    ZeroSecantSlope { x0: f64, x1: f64 },
}
