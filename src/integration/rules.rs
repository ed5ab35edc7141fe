//! Composite Newton-Cotes rules and step definitions.
//!
//! Over panels `[x_i, x_{i+1}]` of width `h` with midpoint `m_i`:
//!
//! | rule      | panel sum                      | multiplier | p | divisor |
//! |-----------|--------------------------------|------------|---|---------|
//! | midpoint  | `f(m_i)`                       | `1`        | 2 | 24      |
//! | trapezoid | `f(x_i) + f(x_{i+1})`          | `1/2`      | 2 | 12      |
//! | Simpson   | `f(x_i) + 4f(m_i) + f(x_{i+1})`| `1/6`      | 4 | 2880    |
//!
//! `S = multiplier * h * Σ panel sum`, with theoretical error
//! `M_p h^p (b - a) / divisor`, `M_p = max |f^(p)|`.

use crate::integration::errors::IntegrationError;


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rule {
    Midpoint,
    Trapezoid,
    Simpson,
}

impl Rule {
    pub const fn rule_name(self) -> &'static str {
        match self {
            Rule::Midpoint  => "midpoint",
            Rule::Trapezoid => "trapezoid",
            Rule::Simpson   => "simpson",
        }
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Rule::Midpoint  => 1.0,
            Rule::Trapezoid => 0.5,
            Rule::Simpson   => 1.0 / 6.0,
        }
    }

    /// Order `p` of the leading error term.
    pub const fn error_degree(self) -> usize {
        match self {
            Rule::Midpoint | Rule::Trapezoid => 2,
            Rule::Simpson                    => 4,
        }
    }

    pub const fn error_divisor(self) -> f64 {
        match self {
            Rule::Midpoint  => 24.0,
            Rule::Trapezoid => 12.0,
            Rule::Simpson   => 2880.0,
        }
    }

    /// Sample gaps one panel spans when integrating sample data directly.
    ///
    /// Rules that evaluate the midpoint need it to be a sample.
    pub const fn gaps_per_panel(self) -> usize {
        match self {
            Rule::Midpoint | Rule::Simpson => 2,
            Rule::Trapezoid                => 1,
        }
    }

    /// Panel sum over `[left, right]`.
    pub(crate) fn panel<F: Fn(f64) -> f64>(self, f: F, left: f64, right: f64) -> f64 {
        let middle = (left + right) / 2.0;
        match self {
            Rule::Midpoint  => f(middle),
            Rule::Trapezoid => f(left) + f(right),
            Rule::Simpson   => f(left) + 4.0 * f(middle) + f(right),
        }
    }
}
impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rule_name())
    }
}


/// Panel width, given directly or as a panel count.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Step {
    Size(f64),
    Nodes(usize),
}

impl Step {
    /// Panel width `h` over `[start, end]`.
    pub fn step_size(&self, start: f64, end: f64) -> Result<f64, IntegrationError> {
        match *self {
            Step::Size(h) if h.is_finite() && h > 0.0 => Ok(h),
            Step::Size(h) => Err(IntegrationError::InvalidStepSize { got: h }),
            Step::Nodes(0) => Err(IntegrationError::InvalidNodeCount { got: 0 }),
            Step::Nodes(n) => Ok((end - start) / n as f64),
        }
    }

    /// Halves the panel width.
    pub fn refined(&self) -> Step {
        match *self {
            Step::Size(h)  => Step::Size(h / 2.0),
            Step::Nodes(n) => Step::Nodes(n * 2),
        }
    }
}
