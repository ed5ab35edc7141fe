//! Tridiagonal systems and the relocation (Thomas) method.
//!
//! Row `i` of the system reads
//!
//! ```text
//! A_i x_{i-1} + B_i x_i + C_i x_{i+1} = f_i,     A_0 = C_{n-1} = 0
//! ```
//!
//! Forward sweep and back substitution:
//!
//! ```text
//! α_0 = -C_0 / B_0                   β_0 = f_0 / B_0
//! α_i = -C_i / (A_i α_{i-1} + B_i)   β_i = (f_i - A_i β_{i-1}) / (A_i α_{i-1} + B_i)
//!
//! x_{n-1} = β_{n-1}
//! x_i     = α_i x_{i+1} + β_i
//! ```
//!
//! `α`, `β` and `x` are each computed once per index and cached.

use std::cell::OnceCell;

use nalgebra::DMatrix;

use crate::linear::errors::LinearError;


/// Diagonals `A` (sub), `B` (main), `C` (super) and right-hand side `f`,
/// all stored with length `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalMatrix {
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    f: Vec<f64>,
}

impl TridiagonalMatrix {
    /// `sub` and `sup` may be given with `n - 1` entries or already padded to
    /// `n` (leading zero for `sub`, trailing zero for `sup`).
    ///
    /// # Errors
    /// - [`LinearError::EmptySystem`] for an empty main diagonal.
    /// - [`LinearError::DimensionMismatch`] for any other length.
    /// - [`LinearError::NonFinite`] for NaN or infinite entries.
    pub fn new(sub: &[f64], main: &[f64], sup: &[f64], f: &[f64]) -> Result<Self, LinearError> {
        let n = main.len();
        if n == 0 {
            return Err(LinearError::EmptySystem);
        }
        if f.len() != n {
            return Err(LinearError::DimensionMismatch { what: "right-hand side", expected: n, got: f.len() });
        }

        let a = match sub.len() {
            l if l == n => sub.to_vec(),
            l if l + 1 == n => std::iter::once(0.0).chain(sub.iter().copied()).collect(),
            l => return Err(LinearError::DimensionMismatch { what: "sub-diagonal", expected: n - 1, got: l }),
        };
        let c = match sup.len() {
            l if l == n => sup.to_vec(),
            l if l + 1 == n => sup.iter().copied().chain(std::iter::once(0.0)).collect(),
            l => return Err(LinearError::DimensionMismatch { what: "super-diagonal", expected: n - 1, got: l }),
        };

        if let Some(idx) = a.iter().chain(main).chain(&c).chain(f).position(|v| !v.is_finite()) {
            return Err(LinearError::NonFinite { idx });
        }

        Ok(Self { a, b: main.to_vec(), c, f: f.to_vec() })
    }

    pub fn len(&self) -> usize { self.b.len() }
    pub fn is_empty(&self) -> bool { self.b.is_empty() }

    pub fn sub(&self) -> &[f64] { &self.a }
    pub fn main(&self) -> &[f64] { &self.b }
    pub fn sup(&self) -> &[f64] { &self.c }
    pub fn rhs(&self) -> &[f64] { &self.f }

    /// Dense coefficient matrix, without the right-hand side.
    pub fn to_dense(&self) -> DMatrix<f64> {
        let n = self.len();
        DMatrix::from_fn(n, n, |i, j| match j as isize - i as isize {
            -1 => self.a[i],
            0  => self.b[i],
            1  => self.c[i],
            _  => 0.0,
        })
    }
}


#[derive(Debug, Clone)]
pub struct RelocationMethod {
    matrix: TridiagonalMatrix,
    alpha: Vec<OnceCell<f64>>,
    beta: Vec<OnceCell<f64>>,
    x: Vec<OnceCell<f64>>,
}

impl RelocationMethod {
    pub fn new(matrix: TridiagonalMatrix) -> Self {
        let n = matrix.len();
        tracing::debug!(n, "relocation method");
        Self {
            matrix,
            alpha: (0..n).map(|_| OnceCell::new()).collect(),
            beta: (0..n).map(|_| OnceCell::new()).collect(),
            x: (0..n).map(|_| OnceCell::new()).collect(),
        }
    }

    pub fn matrix(&self) -> &TridiagonalMatrix { &self.matrix }

    /// # Errors
    /// - [`LinearError::ZeroPivot`] if some `A_i α_{i-1} + B_i` is zero.
    pub fn solve(&self) -> Result<Vec<f64>, LinearError> {
        // last row first, so every x(i) finds x(i + 1) cached
        let mut x = (0..self.matrix.len()).rev().map(|i| self.x(i)).collect::<Result<Vec<_>, _>>()?;
        x.reverse();
        Ok(x)
    }

    /// `α_0..α_{n-2}`; `α_{n-1}` is never needed since `x_{n-1} = β_{n-1}`.
    pub fn alpha(&self) -> Result<Vec<f64>, LinearError> {
        (0..self.matrix.len() - 1).map(|i| self.a(i)).collect()
    }

    /// `β_0..β_{n-1}`.
    pub fn beta(&self) -> Result<Vec<f64>, LinearError> {
        (0..self.matrix.len()).map(|i| self.b(i)).collect()
    }

    fn pivot(&self, i: usize) -> Result<f64, LinearError> {
        let m = &self.matrix;
        let pivot = if i == 0 { m.b[0] } else { m.a[i] * self.a(i - 1)? + m.b[i] };
        if pivot == 0.0 || !pivot.is_finite() {
            return Err(LinearError::ZeroPivot { index: i });
        }
        Ok(pivot)
    }

    fn a(&self, i: usize) -> Result<f64, LinearError> {
        if let Some(v) = self.alpha[i].get() {
            return Ok(*v);
        }
        let v = -self.matrix.c[i] / self.pivot(i)?;
        Ok(*self.alpha[i].get_or_init(|| v))
    }

    fn b(&self, i: usize) -> Result<f64, LinearError> {
        if let Some(v) = self.beta[i].get() {
            return Ok(*v);
        }
        let m = &self.matrix;
        let v = if i == 0 {
            m.f[0] / self.pivot(0)?
        } else {
            (m.f[i] - m.a[i] * self.b(i - 1)?) / self.pivot(i)?
        };

        tracing::trace!(index = i, beta = v, "relocation sweep");
        Ok(*self.beta[i].get_or_init(|| v))
    }

    fn x(&self, i: usize) -> Result<f64, LinearError> {
        if let Some(v) = self.x[i].get() {
            return Ok(*v);
        }
        let v = if i == self.matrix.len() - 1 {
            self.b(i)?
        } else {
            self.a(i)? * self.x(i + 1)? + self.b(i)?
        };
        Ok(*self.x[i].get_or_init(|| v))
    }
}
