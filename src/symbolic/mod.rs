//! Narrow symbolic layer the numerical modules are written against.
//!
//! - [`Polynomial`] : every interpolant and spline piece
//! - [`Expr`]       : user-supplied functions (`1/x`, `x sin x - 1`, ...)
//! - [`Function`]   : what the algorithms need from either of them

pub mod expr;
pub mod polynomial;

pub use expr::Expr;
pub use polynomial::Polynomial;


/// A differentiable function of the free variable `x`.
pub trait Function: Clone {
    /// Substitutes `x` and evaluates.
    fn value(&self, x: f64) -> f64;

    fn derivative(&self) -> Self;

    fn nth_derivative(&self, n: usize) -> Self {
        (0..n).fold(self.clone(), |f, _| f.derivative())
    }
}

impl Function for Polynomial {
    #[inline]
    fn value(&self, x: f64) -> f64 { self.eval(x) }
    fn derivative(&self) -> Self { Polynomial::derivative(self) }
}

impl Function for Expr {
    #[inline]
    fn value(&self, x: f64) -> f64 { self.eval(x) }
    fn derivative(&self) -> Self { self.diff() }
}
