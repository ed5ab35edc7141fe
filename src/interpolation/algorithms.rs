//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::Newton`]          divided-difference polynomial
/// - [`Algorithm::Lagrange`]        Lagrange basis polynomial
/// - [`Algorithm::LinearSpline`]    piecewise linear
/// - [`Algorithm::QuadraticSpline`] piecewise quadratic, C¹
/// - [`Algorithm::CubicSpline`]     natural cubic, C²
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Newton,
    Lagrange,
    LinearSpline,
    QuadraticSpline,
    CubicSpline,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Newton          => "newton",
            Algorithm::Lagrange        => "lagrange",
            Algorithm::LinearSpline    => "linear spline",
            Algorithm::QuadraticSpline => "quadratic spline",
            Algorithm::CubicSpline     => "natural cubic spline",
        }
    }

    /// `true` for the piecewise variants.
    pub const fn is_spline(self) -> bool {
        matches!(
            self,
            Algorithm::LinearSpline | Algorithm::QuadraticSpline | Algorithm::CubicSpline
        )
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
