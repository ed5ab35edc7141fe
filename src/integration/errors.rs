//! Integration error types.

use thiserror::Error;

use crate::integration::rules::Rule;
use crate::interpolation::errors::InterpolationError;

#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("invalid interval [{start}, {end}]: must be finite with start < end")]
    InvalidInterval { start: f64, end: f64 },

    #[error("invalid step size {got}: must be finite and > 0")]
    InvalidStepSize { got: f64 },

    #[error("invalid node count {got}: must be >= 1")]
    InvalidNodeCount { got: usize },

    #[error("invalid precision {got}: must be finite and > 0")]
    InvalidPrecision { got: f64 },

    #[error("operation needs sample data, integration data is a function")]
    NotSampleData,

    #[error("{rule} needs panels of {per_panel} sample gaps, got {gaps} gaps")]
    SampleCountMismatch { rule: Rule, per_panel: usize, gaps: usize },

    #[error("sample data must be uniformly spaced")]
    NonUniformSamples,

    #[error("sample interpolation failed")]
    Interpolation(#[from] InterpolationError),
}
