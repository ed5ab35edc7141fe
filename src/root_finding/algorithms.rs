//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap and the
//! [`TRUE_ROOT_PRECISION`] threshold.

pub use crate::condition::GLOBAL_MAX_ITER_FALLBACK;

/// A result whose final precision estimate is below this is reported as a true root.
pub const TRUE_ROOT_PRECISION: f64 = 1e-12;


/// Root-finding algorithm variants.
/// - [`Algorithm::Midpoint`]   : interval halving
/// - [`Algorithm::FixedPoint`] : iteration of a contraction `x = g(x)`
/// - [`Algorithm::Newton`]     : tangent steps, optionally with a frozen derivative
/// - [`Algorithm::Secant`]     : chord steps, optionally through a fixed point
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Midpoint,
    FixedPoint,
    Newton,
    Secant,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Midpoint   => "midpoint",
            Algorithm::FixedPoint => "fixed_point",
            Algorithm::Newton     => "newton",
            Algorithm::Secant     => "secant",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
