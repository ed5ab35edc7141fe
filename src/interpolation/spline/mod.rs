//! Piecewise polynomial interpolation.
//!
//! A spline over knots `x_0 < x_1 < ... < x_{n-1}` is `n - 1` pieces, piece
//! `i` valid over the left-open interval `(x_i, x_{i+1}]`.
//!
//! ┌ [`linear`]    : C⁰, Lagrange line through neighbouring knots
//! ├ [`quadratic`] : C¹, one free parameter fixed by a natural boundary value
//! └ [`cubic`]     : C², natural (`m_0 = m_{n-1} = 0`)
//!
//! [`is_spline`] checks continuity of an arbitrary candidate piecewise polynomial.

pub mod cubic;
pub mod linear;
pub mod quadratic;

pub(crate) mod helpers;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::{in_domain, InterpolationReport};
use crate::interpolation::traits::InterpolatingSpline;
use crate::symbolic::Polynomial;

use helpers::find_piece;

/// Decimal places used by [`is_spline`] when none are requested.
pub const DEFAULT_PLACES: u32 = 5;


/// Left-open interval `(start, end]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.start < x && x <= self.end
    }
}


#[derive(Debug, Clone, PartialEq)]
pub struct SplinePiece {
    pub polynomial: Polynomial,
    pub interval: Interval,
}


/// Ordered pieces covering consecutive knot intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    pieces: Vec<SplinePiece>,
}

impl Spline {
    pub fn new(pieces: Vec<SplinePiece>) -> Self {
        Self { pieces }
    }

    pub fn pieces(&self) -> &[SplinePiece] { &self.pieces }

    pub fn polynomials(&self) -> Vec<Polynomial> {
        self.pieces.iter().map(|p| p.polynomial.clone()).collect()
    }

    /// `x_0, ..., x_{n-1}`.
    pub fn knots(&self) -> Vec<f64> {
        let mut knots: Vec<f64> = self.pieces.iter().map(|p| p.interval.start).collect();
        if let Some(last) = self.pieces.last() {
            knots.push(last.interval.end);
        }
        knots
    }

    /// Piece whose interval contains `x`, with the leftmost knot going to
    /// the first piece.
    pub fn piece_at(&self, x: f64) -> Option<&SplinePiece> {
        let first = self.pieces.first()?;
        if x == first.interval.start {
            return Some(first);
        }
        self.pieces.iter().find(|p| p.interval.contains(x))
    }

    /// # Errors
    /// - [`InterpolationError::OutOfBounds`] outside `[x_0, x_{n-1}]`.
    pub fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        match self.piece_at(x) {
            Some(piece) => Ok(piece.polynomial.eval(x)),
            None => {
                let knots = self.knots();
                Err(InterpolationError::OutOfBounds {
                    got: x,
                    x_min: knots.first().copied().unwrap_or(f64::NAN),
                    x_max: knots.last().copied().unwrap_or(f64::NAN),
                })
            }
        }
    }
}


/// Continuity check of a candidate piecewise polynomial.
///
/// Compares consecutive pieces at their shared knots, `pieces[i]` against
/// `pieces[i + 1]` at `knots[i + 1]`, after 0, 1, 2, ... differentiations.
/// Values agree when they differ by at most `10^-places`.
///
/// Returns `(is_spline, level)` where `level` is the highest derivative order
/// that agrees at every shared knot. When every order up to the highest piece
/// degree agrees, `level` is that degree; derivatives past it vanish.
/// Pieces whose values already disagree give `(false, 0)`.
///
/// - `degree = None`      : `is_spline` holds if the values agree
/// - `degree = Some(d)`   : `is_spline` holds if the values agree and `level == d`
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] for no pieces.
/// - [`InterpolationError::PieceKnotMismatch`] unless `knots.len() == pieces.len() + 1`.
pub fn is_spline(
    pieces: &[Polynomial],
    knots: &[f64],
    degree: Option<usize>,
    places: u32,
) -> Result<(bool, usize), InterpolationError> {
    if pieces.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if knots.len() != pieces.len() + 1 {
        return Err(InterpolationError::PieceKnotMismatch { pieces: pieces.len(), knots: knots.len() });
    }

    let precision = 10f64.powi(-(places as i32));
    let max_degree = pieces.iter().filter_map(Polynomial::degree).max().unwrap_or(0);

    let mut current: Vec<Polynomial> = pieces.to_vec();
    // first order that disagrees
    let mut mismatch = None;
    for order in 0..=max_degree {
        let max_difference = current
            .windows(2)
            .zip(&knots[1..])
            .map(|(pair, &xi)| (pair[0].eval(xi) - pair[1].eval(xi)).abs())
            .fold(0.0, f64::max);

        tracing::trace!(order, max_difference, "spline continuity");
        if max_difference > precision {
            mismatch = Some(order);
            break;
        }
        current = current.iter().map(Polynomial::derivative).collect();
    }

    let (continuous, level) = match mismatch {
        Some(0) => (false, 0),
        Some(order) => (true, order - 1),
        None => (true, max_degree),
    };
    let holds = match degree {
        None => continuous,
        Some(d) => continuous && level == d,
    };
    Ok((holds, level))
}


/// Shared batch evaluation for the spline variants.
pub(crate) fn evaluate_spline<S: InterpolatingSpline>(
    spline: &S,
    evals: &[f64],
) -> Result<InterpolationReport, InterpolationError> {
    let x = spline.samples().x();
    let n_provided = x.len();

    let pieces = (0..spline.piece_count())
        .map(|i| spline.piece(i))
        .collect::<Result<Vec<_>, InterpolationError>>()?;
    tracing::debug!(algorithm = %spline.algorithm(), pieces = pieces.len(), "spline built");

    let domain = (x[0], x[n_provided - 1]);
    let evaluated = evals
        .iter()
        .map(|&xq| in_domain(xq, domain).map(|xq| pieces[find_piece(x, xq)].eval(xq)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(InterpolationReport::new(spline.algorithm(), n_provided, domain, pieces, evaluated))
}
