//! Expression trees in the single free variable `x`.
//!
//! Covers the functions that show up in classroom exercises: rational
//! expressions, real powers, trigonometric, exponential and logarithmic terms.
//! Derivatives are simplified by constant folding so repeated differentiation
//! (needed for theoretical error bounds) stays tractable.

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::symbolic::polynomial::Polynomial;


#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Const(f64),
    Var,
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, f64),
    Neg(Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),
    Atan(Box<Expr>),
    Exp(Box<Expr>),
    Ln(Box<Expr>),
    Abs(Box<Expr>),
}

impl Expr {
    pub fn x() -> Self { Expr::Var }
    pub fn constant(c: f64) -> Self { Expr::Const(c) }
    pub fn pi() -> Self { Expr::Const(PI) }

    pub fn pow(self, n: f64) -> Self { Expr::Pow(Box::new(self), n) }
    pub fn sqrt(self) -> Self { self.pow(0.5) }
    pub fn sin(self) -> Self { Expr::Sin(Box::new(self)) }
    pub fn cos(self) -> Self { Expr::Cos(Box::new(self)) }
    pub fn tan(self) -> Self { Expr::Tan(Box::new(self)) }
    pub fn atan(self) -> Self { Expr::Atan(Box::new(self)) }
    pub fn exp(self) -> Self { Expr::Exp(Box::new(self)) }
    pub fn ln(self) -> Self { Expr::Ln(Box::new(self)) }
    pub fn abs(self) -> Self { Expr::Abs(Box::new(self)) }

    /// Substitutes `x` and evaluates to a float.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Const(c)  => *c,
            Expr::Var       => x,
            Expr::Add(a, b) => a.eval(x) + b.eval(x),
            Expr::Sub(a, b) => a.eval(x) - b.eval(x),
            Expr::Mul(a, b) => a.eval(x) * b.eval(x),
            Expr::Div(a, b) => a.eval(x) / b.eval(x),
            Expr::Pow(a, n) => pow(a.eval(x), *n),
            Expr::Neg(a)    => -a.eval(x),
            Expr::Sin(a)    => a.eval(x).sin(),
            Expr::Cos(a)    => a.eval(x).cos(),
            Expr::Tan(a)    => a.eval(x).tan(),
            Expr::Atan(a)   => a.eval(x).atan(),
            Expr::Exp(a)    => a.eval(x).exp(),
            Expr::Ln(a)     => a.eval(x).ln(),
            Expr::Abs(a)    => a.eval(x).abs(),
        }
    }

    /// d/dx, simplified.
    pub fn diff(&self) -> Expr {
        let d = match self {
            Expr::Const(_)  => Expr::Const(0.0),
            Expr::Var       => Expr::Const(1.0),
            Expr::Add(a, b) => a.diff() + b.diff(),
            Expr::Sub(a, b) => a.diff() - b.diff(),
            Expr::Mul(a, b) => a.diff() * (**b).clone() + (**a).clone() * b.diff(),
            Expr::Div(a, b) => {
                (a.diff() * (**b).clone() - (**a).clone() * b.diff()) / (**b).clone().pow(2.0)
            }
            Expr::Pow(a, n) => Expr::Const(*n) * (**a).clone().pow(n - 1.0) * a.diff(),
            Expr::Neg(a)    => -a.diff(),
            Expr::Sin(a)    => (**a).clone().cos() * a.diff(),
            Expr::Cos(a)    => -((**a).clone().sin() * a.diff()),
            Expr::Tan(a)    => a.diff() / (**a).clone().cos().pow(2.0),
            Expr::Atan(a)   => a.diff() / (Expr::Const(1.0) + (**a).clone().pow(2.0)),
            Expr::Exp(a)    => self.clone() * a.diff(),
            Expr::Ln(a)     => a.diff() / (**a).clone(),
            // sign(a) * a', expressed as a / |a| * a'
            Expr::Abs(a)    => (**a).clone() / self.clone() * a.diff(),
        };
        d.simplify()
    }

    /// Constant folding plus the neutral/absorbing element rules for `+ - * /`.
    pub fn simplify(&self) -> Expr {
        use Expr::*;

        match self {
            Const(_) | Var => self.clone(),
            Add(a, b) => match (a.simplify(), b.simplify()) {
                (Const(p), Const(q)) => Const(p + q),
                (Const(z), e) | (e, Const(z)) if z == 0.0 => e,
                (p, q) => Add(Box::new(p), Box::new(q)),
            },
            Sub(a, b) => match (a.simplify(), b.simplify()) {
                (Const(p), Const(q)) => Const(p - q),
                (e, Const(z)) if z == 0.0 => e,
                (Const(z), e) if z == 0.0 => Neg(Box::new(e)).simplify(),
                (p, q) if p == q => Const(0.0),
                (p, q) => Sub(Box::new(p), Box::new(q)),
            },
            Mul(a, b) => match (a.simplify(), b.simplify()) {
                (Const(p), Const(q)) => Const(p * q),
                (Const(z), _) | (_, Const(z)) if z == 0.0 => Const(0.0),
                (Const(o), e) | (e, Const(o)) if o == 1.0 => e,
                (Const(m), e) | (e, Const(m)) if m == -1.0 => Neg(Box::new(e)).simplify(),
                (Const(p), Mul(c, e)) => match *c {
                    Const(q) => Mul(Box::new(Const(p * q)), e),
                    c => Mul(Box::new(Const(p)), Box::new(Mul(Box::new(c), e))),
                },
                (e, Const(p)) => Mul(Box::new(Const(p)), Box::new(e)),
                (p, q) => Mul(Box::new(p), Box::new(q)),
            },
            Div(a, b) => match (a.simplify(), b.simplify()) {
                (Const(p), Const(q)) => Const(p / q),
                (Const(z), _) if z == 0.0 => Const(0.0),
                (e, Const(o)) if o == 1.0 => e,
                (p, q) => Div(Box::new(p), Box::new(q)),
            },
            Pow(a, n) => match (a.simplify(), *n) {
                (_, n) if n == 0.0 => Const(1.0),
                (e, n) if n == 1.0 => e,
                (Const(c), n) => Const(pow(c, n)),
                (Pow(e, m), n) if m.fract() == 0.0 && n.fract() == 0.0 => Pow(e, m * n),
                (e, n) => Pow(Box::new(e), n),
            },
            Neg(a) => match a.simplify() {
                Const(c) => Const(-c),
                Neg(e) => *e,
                e => Neg(Box::new(e)),
            },
            Sin(a)  => unary(a, Expr::sin, f64::sin),
            Cos(a)  => unary(a, Expr::cos, f64::cos),
            Tan(a)  => unary(a, Expr::tan, f64::tan),
            Atan(a) => unary(a, Expr::atan, f64::atan),
            Exp(a)  => unary(a, Expr::exp, f64::exp),
            Ln(a)   => unary(a, Expr::ln, f64::ln),
            Abs(a)  => unary(a, Expr::abs, f64::abs),
        }
    }
}

#[inline]
fn pow(base: f64, n: f64) -> f64 {
    if n.fract() == 0.0 && n.abs() <= i32::MAX as f64 {
        base.powi(n as i32)
    } else {
        base.powf(n)
    }
}

fn unary(arg: &Expr, build: fn(Expr) -> Expr, fold: fn(f64) -> f64) -> Expr {
    match arg.simplify() {
        Expr::Const(c) => Expr::Const(fold(c)),
        e => build(e),
    }
}


macro_rules! expr_binop {
    ($tr:ident, $method:ident, $variant:ident) => {
        impl $tr for Expr {
            type Output = Expr;
            fn $method(self, rhs: Expr) -> Expr { Expr::$variant(Box::new(self), Box::new(rhs)) }
        }
        impl $tr<f64> for Expr {
            type Output = Expr;
            fn $method(self, rhs: f64) -> Expr { Expr::$variant(Box::new(self), Box::new(Expr::Const(rhs))) }
        }
        impl $tr<Expr> for f64 {
            type Output = Expr;
            fn $method(self, rhs: Expr) -> Expr { Expr::$variant(Box::new(Expr::Const(self)), Box::new(rhs)) }
        }
    };
}
expr_binop!(Add, add, Add);
expr_binop!(Sub, sub, Sub);
expr_binop!(Mul, mul, Mul);
expr_binop!(Div, div, Div);

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr { Expr::Neg(Box::new(self)) }
}

impl From<f64> for Expr {
    fn from(c: f64) -> Self { Expr::Const(c) }
}

/// Expands to `c0 + c1*x + c2*x^2 + ...`, skipping zero terms.
impl From<&Polynomial> for Expr {
    fn from(p: &Polynomial) -> Self {
        p.coeffs()
            .iter()
            .enumerate()
            .filter(|(_, &c)| c != 0.0)
            .map(|(k, &c)| match k {
                0 => Expr::Const(c),
                1 => c * Expr::Var,
                _ => c * Expr::Var.pow(k as f64),
            })
            .reduce(|acc, term| acc + term)
            .unwrap_or(Expr::Const(0.0))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(c)  => write!(f, "{}", c),
            Expr::Var       => write!(f, "x"),
            Expr::Add(a, b) => write!(f, "({} + {})", a, b),
            Expr::Sub(a, b) => write!(f, "({} - {})", a, b),
            Expr::Mul(a, b) => write!(f, "{}*{}", a, b),
            Expr::Div(a, b) => write!(f, "{}/{}", a, b),
            Expr::Pow(a, n) => write!(f, "{}^{}", a, n),
            Expr::Neg(a)    => write!(f, "-{}", a),
            Expr::Sin(a)    => write!(f, "sin({})", a),
            Expr::Cos(a)    => write!(f, "cos({})", a),
            Expr::Tan(a)    => write!(f, "tan({})", a),
            Expr::Atan(a)   => write!(f, "atan({})", a),
            Expr::Exp(a)    => write!(f, "exp({})", a),
            Expr::Ln(a)     => write!(f, "ln({})", a),
            Expr::Abs(a)    => write!(f, "|{}|", a),
        }
    }
}
