//! Classical numerical methods for reproducing textbook exercises step by step.
//!
//! ┌ [`symbolic`]      : polynomials, expression trees, the [`symbolic::Function`] trait
//! ├ [`sampling`]      : brute-force sampling helpers (ranges, maxima)
//! ├ [`condition`]     : stopping conditions for iterative drivers
//! ├ [`interpolation`] : divided differences, Newton/Lagrange, splines, error estimators
//! ├ [`linear`]        : tridiagonal relocation, Gauss, Cholesky, iterative solvers
//! ├ [`integration`]   : midpoint/trapezoid/Simpson rules with Runge refinement
//! ├ [`root_finding`]  : midpoint, fixed point, Newton, secant
//! └ [`optimisation`]  : golden ratio and Newton one-dimensional optimisation

pub mod condition;
pub mod integration;
pub mod interpolation;
pub mod linear;
pub mod optimisation;
pub mod root_finding;
pub mod sampling;
pub mod symbolic;
