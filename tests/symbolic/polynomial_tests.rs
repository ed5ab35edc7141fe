use numkit::symbolic::{Function, Polynomial};

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[test]
fn display_highest_power_first() {
    assert_eq!(Polynomial::new(vec![12.0, 1.0, 2.0, 1.0]).to_string(), "x^3 + 2x^2 + x + 12");
    assert_eq!(Polynomial::new(vec![-1.0, 0.0, -2.0]).to_string(), "-2x^2 - 1");
    assert_eq!(Polynomial::zero().to_string(), "0");
}

#[test]
fn trailing_zeros_trimmed() {
    let p = Polynomial::new(vec![1.0, 2.0, 0.0, 0.0]);
    assert_eq!(p.degree(), Some(1));
    assert_eq!(p, Polynomial::new(vec![1.0, 2.0]));
    assert_eq!(Polynomial::new(vec![0.0]).degree(), None);
}

#[test]
fn arithmetic() {
    let p = Polynomial::linear_factor(1.0) * Polynomial::linear_factor(-1.0);
    assert_eq!(p, Polynomial::new(vec![-1.0, 0.0, 1.0]));

    let q = &p + &Polynomial::monomial(3.0, 3);
    assert_eq!(q.coeffs(), &[-1.0, 0.0, 1.0, 3.0]);
    assert_eq!(&q - &q, Polynomial::zero());
    assert_eq!((2.0 * p.clone()).coeff(2), 2.0);
    assert_eq!((p / 2.0).coeff(0), -0.5);
}

#[test]
fn product_of_factors() {
    let p: Polynomial = [1.0, 2.0, 3.0].iter().map(|&r| Polynomial::linear_factor(r)).product();
    for r in [1.0, 2.0, 3.0] {
        assert!(approx_eq(p.eval(r), 0.0));
    }
    assert!(approx_eq(p.eval(0.0), -6.0));
}

#[test]
fn calculus() {
    // 3x^2 + 2x + 1
    let p = Polynomial::new(vec![1.0, 2.0, 3.0]);
    assert_eq!(p.derivative(), Polynomial::new(vec![2.0, 6.0]));
    assert_eq!(Function::nth_derivative(&p, 2), Polynomial::constant(6.0));
    assert!(Function::nth_derivative(&p, 3).is_zero());
    assert!(approx_eq(p.integrate(0.0, 1.0), 3.0));
}

#[test]
fn approx_equality() {
    let p = Polynomial::new(vec![1.0, 2.0]);
    let q = Polynomial::new(vec![1.0 + 1e-13, 2.0, 1e-14]);
    assert!(p.approx_eq(&q, 1e-12));
    assert!(!p.approx_eq(&q, 1e-15));
}
