//! Iterative solvers for `A x = f` in the form `x_{k+1} = S x_k + B`.
//!
//! | method      | S                      | B             |
//! |-------------|------------------------|---------------|
//! | Jacobi      | `-D⁻¹ (L + U)`         | `D⁻¹ f`       |
//! | Seidel      | `-(D + L)⁻¹ U`         | `(D + L)⁻¹ f` |
//! | fixed point | `I - τ A`              | `τ f`         |
//!
//! with `τ = 2 / (λ_min + λ_max)` and `q = ρ(S)`. The error after `k` steps
//! shrinks like `q^k`, so `ln(ε) / ln(q)` steps reach precision `ε`.

use nalgebra::{DMatrix, DVector};

use crate::condition::{Condition, TerminationReason, GLOBAL_MAX_ITER_FALLBACK};
use crate::linear::errors::LinearError;
use crate::linear::norms::{eigenvalues, spectral_radius};
use crate::linear::{rhs_vector, square_matrix};


/// Iterative method variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterativeMethod {
    Jacobi,
    Seidel,
    FixedPoint,
}

impl IterativeMethod {
    pub const fn method_name(self) -> &'static str {
        match self {
            IterativeMethod::Jacobi     => "jacobi",
            IterativeMethod::Seidel     => "seidel",
            IterativeMethod::FixedPoint => "fixed point",
        }
    }
}
impl std::fmt::Display for IterativeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}


/// Method-specific data behind the convergence checks.
#[derive(Debug, Copy, Clone)]
enum Criterion {
    Jacobi { max_ratio: f64 },
    Seidel { positive_definite: bool },
    FixedPoint { tau: f64 },
}


/// Summary of an iterative solve.
///
/// [`IterativeReport`]
/// - `solution`           : last iterate
/// - `iterations`         : steps taken
/// - `precision`          : `max |x_k - x_{k-1}|` of the last step
/// - `termination_reason` : why the solver stopped
/// - `method_name`        : e.g. `"jacobi"`
#[derive(Debug, Clone)]
pub struct IterativeReport {
    pub solution: Vec<f64>,
    pub iterations: usize,
    pub precision: f64,
    pub termination_reason: TerminationReason,
    pub method_name: &'static str,
}


#[derive(Debug, Clone)]
pub struct IterativeSolver {
    s: DMatrix<f64>,
    b: DVector<f64>,
    q: f64,
    heavy_diagonal: bool,
    criterion: Criterion,
}

impl IterativeSolver {
    /// # Errors
    /// - Shape errors, see [`LinearError`].
    /// - [`LinearError::ZeroPivot`] for a zero diagonal entry.
    pub fn jacobi(a: &[Vec<f64>], f: &[f64]) -> Result<Self, LinearError> {
        let (a, f) = system(a, f)?;
        let n = a.nrows();
        check_diagonal(&a)?;

        let s = DMatrix::from_fn(n, n, |i, j| if i == j { 0.0 } else { -a[(i, j)] / a[(i, i)] });
        let b = DVector::from_fn(n, |i, _| f[i] / a[(i, i)]);
        let max_ratio = s.row_iter().map(|r| r.iter().map(|v| v.abs()).sum::<f64>()).fold(0.0, f64::max);

        Ok(Self::build(&a, s, b, Criterion::Jacobi { max_ratio }))
    }

    /// # Errors
    /// - Shape errors, see [`LinearError`].
    /// - [`LinearError::Singular`] if `D + L` is not invertible.
    pub fn seidel(a: &[Vec<f64>], f: &[f64]) -> Result<Self, LinearError> {
        let (a, f) = system(a, f)?;

        let dl = a.lower_triangle();
        let u = a.upper_triangle() - DMatrix::from_diagonal(&a.diagonal());
        let inverse = dl.try_inverse().ok_or(LinearError::Singular)?;

        let s = -(&inverse * u);
        let b = &inverse * f;
        let positive_definite = eigenvalues(&a).iter().all(|l| *l > 0.0);

        Ok(Self::build(&a, s, b, Criterion::Seidel { positive_definite }))
    }

    /// # Errors
    /// - Shape errors, see [`LinearError`].
    /// - [`LinearError::Singular`] if `λ_min + λ_max = 0`.
    pub fn fixed_point(a: &[Vec<f64>], f: &[f64]) -> Result<Self, LinearError> {
        let (a, f) = system(a, f)?;
        let n = a.nrows();

        let lambda = eigenvalues(&a);
        let (min, max) = match (lambda.first(), lambda.last()) {
            (Some(min), Some(max)) => (*min, *max),
            _ => return Err(LinearError::EmptySystem),
        };
        if min + max == 0.0 {
            return Err(LinearError::Singular);
        }
        let tau = 2.0 / (min + max);

        let s = DMatrix::identity(n, n) - &a * tau;
        let b = f * tau;

        Ok(Self::build(&a, s, b, Criterion::FixedPoint { tau }))
    }

    fn build(a: &DMatrix<f64>, s: DMatrix<f64>, b: DVector<f64>, criterion: Criterion) -> Self {
        let q = spectral_radius(&s);
        let heavy_diagonal = (0..a.nrows()).all(|i| {
            let off: f64 = (0..a.ncols()).filter(|&j| j != i).map(|j| a[(i, j)].abs()).sum();
            a[(i, i)].abs() > off
        });

        let solver = Self { s, b, q, heavy_diagonal, criterion };
        tracing::debug!(method = %solver.method(), q, heavy_diagonal, "iterative solver");
        solver
    }

    pub fn method(&self) -> IterativeMethod {
        match self.criterion {
            Criterion::Jacobi { .. }     => IterativeMethod::Jacobi,
            Criterion::Seidel { .. }     => IterativeMethod::Seidel,
            Criterion::FixedPoint { .. } => IterativeMethod::FixedPoint,
        }
    }

    pub fn s(&self) -> &DMatrix<f64> { &self.s }
    pub fn b(&self) -> &DVector<f64> { &self.b }

    /// Spectral radius of `S`.
    pub fn q(&self) -> f64 { self.q }

    /// Strict diagonal dominance of `A`.
    pub fn heavy_diagonal(&self) -> bool { self.heavy_diagonal }

    /// `τ` of the fixed-point method.
    pub fn tau(&self) -> Option<f64> {
        match self.criterion {
            Criterion::FixedPoint { tau } => Some(tau),
            _ => None,
        }
    }

    /// Sufficient condition from the matrix entries.
    pub fn converges(&self) -> bool {
        match self.criterion {
            Criterion::Jacobi { max_ratio }         => self.heavy_diagonal && max_ratio < 1.0,
            Criterion::Seidel { positive_definite } => self.heavy_diagonal && positive_definite,
            Criterion::FixedPoint { tau }           => tau > 0.0 && tau < 2.0 / self.q,
        }
    }

    /// Condition on the spectral radius.
    pub fn converges_strict(&self) -> bool {
        match self.criterion {
            Criterion::Seidel { positive_definite } => self.q < 1.0 && positive_definite,
            _ => self.q < 1.0,
        }
    }

    /// Steps needed to reach `precision`, `ln(precision) / ln(q)`.
    pub fn iterations(&self, precision: f64) -> f64 {
        precision.ln() / self.q.ln()
    }

    /// One step `S x + B`.
    pub fn iterate(&self, x: &DVector<f64>) -> DVector<f64> {
        &self.s * x + &self.b
    }

    /// Iterates from `x0`, checking `condition` with `max |x_k - x_{k-1}|`
    /// after each step.
    ///
    /// # Errors
    /// - [`LinearError::DimensionMismatch`] if `x0` has the wrong length.
    pub fn solve<C: Condition>(&self, x0: &[f64], condition: &mut C) -> Result<IterativeReport, LinearError> {
        let mut x = rhs_vector(x0, self.b.len())?;
        let mut precision = f64::INFINITY;
        let mut termination_reason = TerminationReason::IterationLimit;
        let mut iterations = 0;

        while iterations < GLOBAL_MAX_ITER_FALLBACK {
            let next = self.iterate(&x);
            precision = (&next - &x).amax();
            x = next;
            iterations += 1;

            tracing::trace!(iterations, precision, "iterative step");
            if condition.check(precision) {
                termination_reason = TerminationReason::ConditionMet;
                break;
            }
            if precision == 0.0 {
                termination_reason = TerminationReason::MachinePrecisionReached;
                break;
            }
        }

        Ok(IterativeReport {
            solution: x.iter().copied().collect(),
            iterations,
            precision,
            termination_reason,
            method_name: self.method().method_name(),
        })
    }
}


fn system(a: &[Vec<f64>], f: &[f64]) -> Result<(DMatrix<f64>, DVector<f64>), LinearError> {
    let a = square_matrix(a)?;
    let f = rhs_vector(f, a.nrows())?;
    Ok((a, f))
}

fn check_diagonal(a: &DMatrix<f64>) -> Result<(), LinearError> {
    match (0..a.nrows()).find(|&i| a[(i, i)] == 0.0) {
        Some(index) => Err(LinearError::ZeroPivot { index }),
        None => Ok(()),
    }
}
