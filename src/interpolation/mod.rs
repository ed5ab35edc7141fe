//! Polynomial and piecewise-polynomial interpolation.
//!
//! ┌ [`differences`] : memoized divided-difference table
//! ├ [`newton`]      : Newton form, error estimators
//! ├ [`lagrange`]    : Lagrange form
//! ├ [`spline`]      : linear / quadratic / natural cubic splines, `is_spline`
//! └ [`samples`]     : validated sample sets and data-only operations
//!
//! Every algorithm has a `*Cfg` builder plus a batch
//! `interpolate(cfg)` returning an [`InterpolationReport`], alongside a
//! reusable object exposing the intermediate coefficients.

pub mod algorithms;
pub mod config;
pub mod differences;
pub mod errors;
pub mod estimators;
pub mod report;
pub mod samples;
pub mod traits;

pub mod lagrange;
pub mod newton;
pub mod spline;

pub use algorithms::Algorithm;
pub use differences::DividedDifferences;
pub use errors::InterpolationError;
pub use estimators::ErrorEstimate;
pub use lagrange::LagrangePolynomial;
pub use newton::NewtonPolynomial;
pub use report::InterpolationReport;
pub use samples::SampleSet;
pub use spline::{is_spline, Interval, Spline, SplinePiece};
pub use traits::{InterpolatingPolynomial, InterpolatingSpline};
