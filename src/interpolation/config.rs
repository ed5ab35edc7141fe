//! Shared configuration for interpolation algorithms.
//!
//! Provides [`CommonCfg`] with default minimum allowed spacing between
//! `x` data; [`DEFAULT_X_TOL`]. Shared by all interpolation algorithms.
//!
//! [`CommonCfg`] fields
//! - `x`        : x values provided
//! - `y`        : y values provided
//! - `x_eval`   : x values to evaluate
//! - `x_tol`    : minimum spacing between x values
//! - `ordering` : [`XOrdering`] the algorithm requires of `x`
//!
//! Polynomial builders only need distinct `x`; spline builders need them
//! strictly increasing since adjacency defines the pieces.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::samples::SampleSet;

pub const DEFAULT_X_TOL: f64 = 1e-12;


/// What an algorithm requires of the provided `x` values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum XOrdering {
    /// pairwise distinct, any order
    Distinct,
    /// strictly increasing
    Ascending,
}


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
    pub(crate) ordering: XOrdering,
}

impl<'a> CommonCfg<'a> {
    pub fn new(ordering: XOrdering) -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
            ordering,
        }
    }

    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if x.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: x.len() });
        }
        Ok(())
    }

    /// Validates and copies the data into an owned [`SampleSet`].
    pub(crate) fn samples(&self) -> Result<SampleSet, InterpolationError> {
        self.validate()?;
        SampleSet::with_tolerance(self.x, self.y, self.x_min_spacing)
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self) -> f64 { self.x_min_spacing }
    pub fn ordering(&self) -> XOrdering { self.ordering }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a [f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// First pair of values closer than `tol`, in any order.
pub(crate) fn find_duplicate(xs: &[f64], tol: f64) -> Option<(f64, f64)> {
    for i in 0..xs.len() {
        for j in i + 1..xs.len() {
            if (xs[i] - xs[j]).abs() < tol {
                return Some((xs[i], xs[j]));
            }
        }
    }
    None
}

/// Checks `v` against the spacing and ordering requirements.
pub(crate) fn check_x(v: &[f64], tol: f64, ordering: XOrdering) -> Result<(), InterpolationError> {
    match ordering {
        XOrdering::Ascending => {
            for i in 1..v.len() {
                if (v[i] - v[i - 1]).abs() < tol {
                    return Err(InterpolationError::DuplicateX { x1: v[i - 1], x2: v[i] });
                }
                if v[i] <= v[i - 1] {
                    return Err(InterpolationError::NonIncreasingX);
                }
            }
        }
        XOrdering::Distinct => {
            if let Some((x1, x2)) = find_duplicate(v, tol) {
                return Err(InterpolationError::DuplicateX { x1, x2 });
            }
        }
    }
    Ok(())
}

/// Shared checks on a provided slice: non-empty, all finite.
pub(crate) fn check_finite(v: &[f64]) -> Result<(), InterpolationError> {
    if v.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    match non_finite_idx(v) {
        Some(idx) => Err(InterpolationError::NonFiniteVec { idx }),
        None => Ok(()),
    }
}

/// Fails if both lengths are set and differ.
pub(crate) fn check_len(x_len: usize, y_len: usize) -> Result<(), InterpolationError> {
    if x_len != 0 && y_len != 0 && x_len != y_len {
        return Err(InterpolationError::UnequalLength { x_len, y_len });
    }
    Ok(())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::config::{check_finite, check_len, check_x};
                use $crate::interpolation::errors::InterpolationError;

                check_finite(v)?;
                if v.len() < 2 {
                    return Err(InterpolationError::InsufficientPoints { got: v.len() });
                }
                check_x(v, self.common.x_min_spacing, self.common.ordering)?;
                check_len(v.len(), self.common.y.len())?;

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::config::{check_finite, check_len};

                check_finite(v)?;
                check_len(self.common.x.len(), v.len())?;

                self.common.with_y(v);
                Ok(self)
            }

            /// Points the batch `interpolate` evaluates at; may be empty.
            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            /// Minimum spacing of `x`. An `x` already set is checked again.
            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }
                $crate::interpolation::config::check_x(self.common.x, v, self.common.ordering)?;

                self.common.with_x_min_spacing(v);
                Ok(self)
            }

            pub fn common(&self) -> &$crate::interpolation::config::CommonCfg<'a> {
                &self.common
            }
        }
    };
}
pub(crate) use impl_common_cfg;
