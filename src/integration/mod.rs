//! Numerical integration.
//!
//! ┌ [`data`]       : function or sample data
//! ├ [`rules`]      : midpoint, trapezoid, Simpson and step definitions
//! └ [`integrator`] : composite rules, error estimates, Runge refinement

pub mod data;
pub mod errors;
pub mod integrator;
pub mod rules;

pub use data::IntegrationData;
pub use errors::IntegrationError;
pub use integrator::{IntegrationReport, Integrator};
pub use rules::{Rule, Step};
