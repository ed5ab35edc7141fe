//! Optimisation error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimisationError {
    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("vanishing second derivative at x={x}")]
    ZeroCurvature { x: f64 },
}
