use numkit::interpolation::lagrange::LagrangePolynomial;
use numkit::interpolation::newton::NewtonPolynomial;
use numkit::interpolation::samples::SampleSet;
use numkit::interpolation::spline::cubic::CubicSpline;
use numkit::interpolation::spline::is_spline;
use numkit::interpolation::traits::{InterpolatingPolynomial, InterpolatingSpline};
use proptest::prelude::*;

/// Equally spaced knots `0, h, 2h, ...` with arbitrary values.
fn sample_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (0.5f64..2.0, prop::collection::vec(-10.0f64..10.0, 2..7))
        .prop_map(|(h, y)| ((0..y.len()).map(|i| i as f64 * h).collect(), y))
}

proptest! {
    #[test]
    fn newton_passes_through_samples((x, y) in sample_strategy()) {
        let samples = SampleSet::new(&x, &y).unwrap();
        let newton = NewtonPolynomial::new(samples);
        let p = newton.polynomial(x.len() - 1).unwrap();

        for (xi, yi) in x.iter().zip(&y) {
            prop_assert!((p.eval(*xi) - yi).abs() <= 1e-8 * yi.abs().max(1.0));
        }
    }

    #[test]
    fn newton_and_lagrange_agree((x, y) in sample_strategy(), t in 0.0f64..1.0) {
        let newton = NewtonPolynomial::new(SampleSet::new(&x, &y).unwrap());
        let lagrange = LagrangePolynomial::new(SampleSet::new(&x, &y).unwrap());
        let degree = x.len() - 1;

        let at = x[0] + t * (x[degree] - x[0]);
        let n = newton.polynomial(degree).unwrap().eval(at);
        let l = lagrange.polynomial(degree).unwrap().eval(at);
        prop_assert!((n - l).abs() <= 1e-7 * n.abs().max(1.0));
    }

    #[test]
    fn cubic_spline_is_c2((x, y) in sample_strategy()) {
        let spline = CubicSpline::new(SampleSet::new(&x, &y).unwrap()).unwrap();
        let sp = spline.spline().unwrap();

        let pieces = sp.polynomials();
        let max_degree = pieces.iter().filter_map(|p| p.degree()).max().unwrap_or(0);

        let (_, level) = is_spline(&pieces, &sp.knots(), None, 6).unwrap();
        prop_assert!(level >= 2 || level == max_degree);

        for (xi, yi) in x.iter().zip(&y) {
            prop_assert!((sp.eval(*xi).unwrap() - yi).abs() <= 1e-9 * yi.abs().max(1.0));
        }
    }
}
