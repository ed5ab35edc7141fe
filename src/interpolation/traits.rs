//! Interfaces implemented by the concrete interpolation algorithms.
//!
//! - [`InterpolatingPolynomial`] : Newton and Lagrange forms
//! - [`InterpolatingSpline`]     : linear, quadratic and cubic splines
//!
//! Both carry the operations that only depend on the data and the
//! algorithm-specific builder as provided methods.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::estimators::{factorial, ErrorEstimate};
use crate::interpolation::samples::SampleSet;
use crate::interpolation::spline::{Interval, Spline, SplinePiece};
use crate::sampling::{maximum_absolute_value, DEFAULT_SAMPLING_STEP};
use crate::symbolic::{Function, Polynomial};


pub trait InterpolatingPolynomial {
    fn samples(&self) -> &SampleSet;

    fn algorithm(&self) -> Algorithm;

    /// Interpolating polynomial through samples `offset..=offset + degree`.
    fn polynomial_offset(&self, degree: usize, offset: usize) -> Result<Polynomial, InterpolationError>;

    /// Interpolating polynomial through the first `degree + 1` samples.
    fn polynomial(&self, degree: usize) -> Result<Polynomial, InterpolationError> {
        self.polynomial_offset(degree, 0)
    }

    /// See [`SampleSet::basis_polynomial`].
    fn basis_polynomial(
        &self,
        degree: usize,
        skip: Option<usize>,
        offset: usize,
    ) -> Result<Polynomial, InterpolationError> {
        self.samples().basis_polynomial(degree, skip, offset)
    }

    /// See [`SampleSet::fit`].
    fn fit<F: Function>(&self, function: &F) -> bool where Self: Sized {
        self.samples().fit(function)
    }

    /// True error `|f(x) - P_degree(x)|` against a known function.
    fn error_at<F: Function>(&self, fx: &F, degree: usize, x: f64) -> Result<f64, InterpolationError>
    where Self: Sized {
        let p = self.polynomial(degree)?;
        Ok((fx.value(x) - p.eval(x)).abs())
    }

    /// Theoretical error bound over `[start, end]`.
    ///
    /// ```text
    /// max|f^(degree+1)| / (degree+1)! * |ω_{degree+1}(x)|
    /// ```
    ///
    /// The maximum is found by sampling the derivative with
    /// [`DEFAULT_SAMPLING_STEP`]; see [`InterpolatingPolynomial::theoretical_error_with_step`].
    fn theoretical_error<F: Function>(
        &self,
        fx: &F,
        degree: usize,
        start: f64,
        end: f64,
    ) -> Result<ErrorEstimate, InterpolationError> where Self: Sized {
        self.theoretical_error_with_step(fx, degree, start, end, DEFAULT_SAMPLING_STEP)
    }

    fn theoretical_error_with_step<F: Function>(
        &self,
        fx: &F,
        degree: usize,
        start: f64,
        end: f64,
        step: f64,
    ) -> Result<ErrorEstimate, InterpolationError> where Self: Sized {
        if !(start.is_finite() && end.is_finite()) || start >= end {
            return Err(InterpolationError::InvalidInterval { start, end });
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(InterpolationError::InvalidStep { got: step });
        }

        let basis = self.basis_polynomial(degree + 1, None, 0)?;
        let m = maximum_absolute_value(fx, start, end, degree + 1, step);
        Ok(ErrorEstimate::new(m / factorial(degree + 1), basis))
    }

    /// Practical error `|P_{degree+1}(x) - P_degree(x)|`; needs one extra sample.
    fn practical_error_polynomial_difference(&self, degree: usize) -> Result<ErrorEstimate, InterpolationError> {
        let higher = self.polynomial(degree + 1)?;
        let lower = self.polynomial(degree)?;
        Ok(ErrorEstimate::new(1.0, higher - lower))
    }
}


pub trait InterpolatingSpline {
    fn samples(&self) -> &SampleSet;

    fn algorithm(&self) -> Algorithm;

    /// Polynomial valid over `(x_index, x_{index+1}]`.
    fn piece(&self, index: usize) -> Result<Polynomial, InterpolationError>;

    /// Number of pieces, `n - 1`.
    fn piece_count(&self) -> usize {
        self.samples().len() - 1
    }

    /// All pieces with their interval predicates.
    fn spline(&self) -> Result<Spline, InterpolationError> {
        let x = self.samples().x();
        let pieces = (0..self.piece_count())
            .map(|i| {
                Ok(SplinePiece {
                    polynomial: self.piece(i)?,
                    interval: Interval::new(x[i], x[i + 1]),
                })
            })
            .collect::<Result<Vec<_>, InterpolationError>>()?;

        Ok(Spline::new(pieces))
    }

    /// Fails unless `index` names a piece.
    fn check_piece(&self, index: usize) -> Result<(), InterpolationError> {
        if index >= self.piece_count() {
            return Err(InterpolationError::IndexOutOfRange { index, len: self.piece_count() });
        }
        Ok(())
    }
}
