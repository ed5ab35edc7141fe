//! Validated sample sets and the operations that only depend on the data.
//!
//! A [`SampleSet`] is an immutable, owned sequence of `(x, y)` pairs with
//! pairwise distinct `x`. Every builder takes ownership of one; divided
//! differences are only ever computed over a set that passed validation, so
//! no difference quotient can divide by zero.
//!
//! Data-only operations live here rather than on a builder:
//! - [`SampleSet::basis_polynomial`] : `(x - x_o)(x - x_{o+1})...` with optional skip
//! - [`SampleSet::fit`]              : does a function pass through every sample
//! - [`SampleSet::fit_points`]       : best window of consecutive samples for a point
//! - [`SampleSet::inverted`]         : swap roles of `x` and `y`

use crate::interpolation::config::{check_x, non_finite_idx, XOrdering, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::symbolic::{Function, Polynomial};

/// Tolerance used by [`SampleSet::fit`].
pub const DEFAULT_FIT_TOL: f64 = 1e-9;


#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SampleSet {
    /// Validates `x`, `y` with [`DEFAULT_X_TOL`] spacing.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        Self::with_tolerance(x, y, DEFAULT_X_TOL)
    }

    pub fn with_tolerance(x: &[f64], y: &[f64], x_tol: f64) -> Result<Self, InterpolationError> {
        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if let Some(idx) = non_finite_idx(x).or_else(|| non_finite_idx(y)) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        if !x_tol.is_finite() || x_tol <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: x_tol });
        }
        check_x(x, x_tol, XOrdering::Distinct)?;

        Ok(Self { x: x.to_vec(), y: y.to_vec() })
    }

    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// `true` if `x` is strictly increasing.
    pub fn is_ascending(&self) -> bool {
        self.x.windows(2).all(|w| w[0] < w[1])
    }

    /// Fails unless `degree + offset` indexes a sample.
    pub(crate) fn check_degree(&self, degree: usize, offset: usize) -> Result<(), InterpolationError> {
        if degree + offset >= self.len() {
            return Err(InterpolationError::DegreeOutOfRange {
                degree,
                offset,
                available: self.len(),
            });
        }
        Ok(())
    }

    /// Basis polynomial of the given degree.
    ///
    /// ```text
    /// basis(degree, skip, offset) = Π (x - x_{offset + i}),  i in 0..degree, i != skip
    /// ```
    ///
    /// - `degree = 0` gives the constant `1`.
    /// - `skip` omits the factor at window position `skip` (not absolute index).
    ///
    /// # Errors
    /// - [`InterpolationError::DegreeOutOfRange`] if `offset + degree > len`.
    pub fn basis_polynomial(
        &self,
        degree: usize,
        skip: Option<usize>,
        offset: usize,
    ) -> Result<Polynomial, InterpolationError> {
        if offset + degree > self.len() {
            return Err(InterpolationError::DegreeOutOfRange {
                degree: degree.saturating_sub(1),
                offset,
                available: self.len(),
            });
        }

        Ok(self.x[offset..offset + degree]
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != skip)
            .map(|(_, &xi)| Polynomial::linear_factor(xi))
            .product())
    }

    /// Checks whether `function` passes through every sample within [`DEFAULT_FIT_TOL`].
    ///
    /// A query, not a failure: a candidate that misses a sample returns `false`.
    pub fn fit<F: Function>(&self, function: &F) -> bool {
        self.fit_with_tolerance(function, DEFAULT_FIT_TOL)
    }

    /// As [`SampleSet::fit`] with a relative tolerance `tol * max(1, |y_i|)`.
    pub fn fit_with_tolerance<F: Function>(&self, function: &F, tol: f64) -> bool {
        self.x
            .iter()
            .zip(&self.y)
            .all(|(&xi, &yi)| (function.value(xi) - yi).abs() <= tol * yi.abs().max(1.0))
    }

    /// Offset of the window of `degree + 1` consecutive samples closest to `at`.
    ///
    /// Closeness is `Σ |at - x_i|` over the window; on ties the first window wins.
    pub fn best_offset(&self, at: f64, degree: usize) -> Result<usize, InterpolationError> {
        self.check_degree(degree, 0)?;

        let score = |w: &[f64]| w.iter().map(|xi| (at - xi).abs()).sum::<f64>();
        let (offset, _) = self.x
            .windows(degree + 1)
            .enumerate()
            .map(|(i, w)| (i, score(w)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or(InterpolationError::DegreeOutOfRange { degree, offset: 0, available: self.len() })?;

        Ok(offset)
    }

    /// The `x` values of the window chosen by [`SampleSet::best_offset`].
    pub fn fit_points(&self, at: f64, degree: usize) -> Result<&[f64], InterpolationError> {
        let offset = self.best_offset(at, degree)?;
        Ok(&self.x[offset..offset + degree + 1])
    }

    /// Swaps `x` and `y`, sorted by the new independent variable.
    ///
    /// The swapped relation must be a function: `y` taken in ascending-`x`
    /// order has to be strictly monotonic, otherwise the resulting polynomial
    /// would interpolate an inconsistent ordering.
    ///
    /// # Errors
    /// - [`InterpolationError::NonMonotonicInverse`] if `y` is not strictly monotonic.
    pub fn inverted(&self) -> Result<SampleSet, InterpolationError> {
        let mut pairs: Vec<(f64, f64)> = self.x.iter().copied().zip(self.y.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        let increasing = pairs.windows(2).all(|w| w[0].1 < w[1].1);
        let decreasing = pairs.windows(2).all(|w| w[0].1 > w[1].1);
        if !(increasing || decreasing) {
            return Err(InterpolationError::NonMonotonicInverse);
        }

        let mut swapped: Vec<(f64, f64)> = pairs.into_iter().map(|(x, y)| (y, x)).collect();
        swapped.sort_by(|a, b| a.0.total_cmp(&b.0));

        tracing::debug!(n = swapped.len(), "inverted sample set");
        Ok(SampleSet {
            x: swapped.iter().map(|p| p.0).collect(),
            y: swapped.iter().map(|p| p.1).collect(),
        })
    }
}
