//! Roots of nonlinear equations `f(x) = 0`.
//!
//! ┌ [`signs`]       : root parity and single-root existence checks
//! ├ [`midpoint`]    : bisection with `converges_in`
//! ├ [`fixed_point`] : contraction iteration `x = g(x)`
//! ├ [`newton`]      : tangent method, optional frozen derivative
//! └ [`secant`]      : chord method, optional fixed point
//!
//! All methods stop under a [`crate::condition::Condition`] and report a
//! [`report::RootFindingReport`].

// common helpers
pub mod algorithms;
pub mod errors;
pub mod report;
pub mod signs;
pub(crate) mod driver;

// algorithms
pub mod fixed_point;
pub mod midpoint;
pub mod newton;
pub mod secant;

pub use errors::RootFindingError;
pub use report::RootFindingReport;
pub use signs::{one_root, root_parity, Parity};
