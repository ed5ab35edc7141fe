//! Dense univariate polynomials in the free variable `x`.
//!
//! Coefficients are stored in ascending powers, `c[0] + c[1] x + ... + c[n] x^n`,
//! with trailing zeros trimmed so that structural equality (`==`) is meaningful.
//! The zero polynomial has no coefficients and no degree.

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};


#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Builds a polynomial from ascending coefficients.
    pub fn new(coeffs: Vec<f64>) -> Self {
        let mut p = Self { coeffs };
        p.trim();
        p
    }

    pub fn zero() -> Self { Self { coeffs: Vec::new() } }
    pub fn one() -> Self { Self::constant(1.0) }
    pub fn constant(c: f64) -> Self { Self::new(vec![c]) }

    /// The free variable `x`.
    pub fn x() -> Self { Self::new(vec![0.0, 1.0]) }

    /// `x - root`
    pub fn linear_factor(root: f64) -> Self { Self::new(vec![-root, 1.0]) }

    /// `c * x^k`
    pub fn monomial(c: f64, k: usize) -> Self {
        let mut coeffs = vec![0.0; k + 1];
        coeffs[k] = c;
        Self::new(coeffs)
    }

    fn trim(&mut self) {
        while self.coeffs.last() == Some(&0.0) {
            self.coeffs.pop();
        }
    }

    pub fn coeffs(&self) -> &[f64] { &self.coeffs }

    /// Coefficient of `x^k`, zero past the degree.
    pub fn coeff(&self, k: usize) -> f64 {
        self.coeffs.get(k).copied().unwrap_or(0.0)
    }

    /// `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool { self.coeffs.is_empty() }

    /// Horner evaluation.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    pub fn derivative(&self) -> Self {
        let coeffs = self.coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, &c)| c * k as f64)
            .collect();
        Self::new(coeffs)
    }

    pub fn nth_derivative(&self, n: usize) -> Self {
        (0..n).fold(self.clone(), |p, _| p.derivative())
    }

    /// Antiderivative with zero constant of integration.
    pub fn antiderivative(&self) -> Self {
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(0.0);
        for (k, &c) in self.coeffs.iter().enumerate() {
            coeffs.push(c / (k + 1) as f64);
        }
        Self::new(coeffs)
    }

    /// Definite integral over `[a, b]`.
    pub fn integrate(&self, a: f64, b: f64) -> f64 {
        let big = self.antiderivative();
        big.eval(b) - big.eval(a)
    }

    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.coeffs.iter().map(|c| c * k).collect())
    }

    /// Coefficient-wise comparison within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        let n = self.coeffs.len().max(other.coeffs.len());
        (0..n).all(|k| (self.coeff(k) - other.coeff(k)).abs() <= tol)
    }

    fn zip_with(&self, rhs: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        Self::new((0..n).map(|k| op(self.coeff(k), rhs.coeff(k))).collect())
    }
}


impl Add for &Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Self) -> Polynomial { self.zip_with(rhs, |a, b| a + b) }
}
impl Sub for &Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Self) -> Polynomial { self.zip_with(rhs, |a, b| a - b) }
}
impl Mul for &Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Self) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![0.0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::new(coeffs)
    }
}
impl Mul<f64> for &Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: f64) -> Polynomial { self.scale(rhs) }
}
impl Div<f64> for &Polynomial {
    type Output = Polynomial;
    fn div(self, rhs: f64) -> Polynomial {
        Polynomial::new(self.coeffs.iter().map(|c| c / rhs).collect())
    }
}
impl Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial { self.scale(-1.0) }
}

macro_rules! forward_owned_binop {
    ($tr:ident, $method:ident) => {
        impl $tr for Polynomial {
            type Output = Polynomial;
            fn $method(self, rhs: Polynomial) -> Polynomial { (&self).$method(&rhs) }
        }
        impl $tr<&Polynomial> for Polynomial {
            type Output = Polynomial;
            fn $method(self, rhs: &Polynomial) -> Polynomial { (&self).$method(rhs) }
        }
        impl $tr<Polynomial> for &Polynomial {
            type Output = Polynomial;
            fn $method(self, rhs: Polynomial) -> Polynomial { self.$method(&rhs) }
        }
    };
}
forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);

impl Mul<f64> for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: f64) -> Polynomial { self.scale(rhs) }
}
impl Mul<Polynomial> for f64 {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial { rhs.scale(self) }
}
impl Div<f64> for Polynomial {
    type Output = Polynomial;
    fn div(self, rhs: f64) -> Polynomial { (&self) / rhs }
}
impl Add<f64> for Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: f64) -> Polynomial { &self + &Polynomial::constant(rhs) }
}
impl Sub<f64> for Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: f64) -> Polynomial { &self - &Polynomial::constant(rhs) }
}
impl Neg for Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial { self.scale(-1.0) }
}

impl Sum for Polynomial {
    fn sum<I: Iterator<Item = Polynomial>>(iter: I) -> Self {
        iter.fold(Polynomial::zero(), |acc, p| acc + p)
    }
}
impl Product for Polynomial {
    fn product<I: Iterator<Item = Polynomial>>(iter: I) -> Self {
        iter.fold(Polynomial::one(), |acc, p| acc * p)
    }
}

impl From<f64> for Polynomial {
    fn from(c: f64) -> Self { Polynomial::constant(c) }
}


/// Highest power first, e.g. `x^3 + 2x^2 + x + 12`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (k, &c) in self.coeffs.iter().enumerate().rev() {
            if c == 0.0 {
                continue;
            }

            let magnitude = c.abs();
            if first {
                if c < 0.0 { write!(f, "-")?; }
            } else {
                write!(f, " {} ", if c < 0.0 { '-' } else { '+' })?;
            }
            first = false;

            match (k, magnitude == 1.0) {
                (0, _)     => write!(f, "{}", magnitude)?,
                (1, true)  => write!(f, "x")?,
                (1, false) => write!(f, "{}x", magnitude)?,
                (_, true)  => write!(f, "x^{}", k)?,
                (_, false) => write!(f, "{}x^{}", magnitude, k)?,
            }
        }

        Ok(())
    }
}
