use numkit::interpolation::errors::InterpolationError;
use numkit::interpolation::spline::{is_spline, Interval, DEFAULT_PLACES};
use numkit::symbolic::Polynomial;

type NumResult = Result<(), InterpolationError>;

#[test]
fn discontinuous_values() -> NumResult {
    let pieces = [
        Polynomial::new(vec![2.0, 0.0, 4.0]),
        Polynomial::new(vec![10.0, 3.0]),
        Polynomial::new(vec![-1.0, 1.0]),
    ];
    let knots = [0.0, 1.0, 4.0, 7.0];

    assert_eq!(is_spline(&pieces, &knots, None, DEFAULT_PLACES)?, (false, 0));
    Ok(())
}

#[test]
fn cubic_with_matching_second_derivative() -> NumResult {
    let pieces = [
        Polynomial::new(vec![5.0, -19.0 / 5.0, 6.0 / 5.0, -2.0 / 5.0]),
        Polynomial::new(vec![9.0 / 5.0, 1.0, -6.0 / 5.0]),
        Polynomial::new(vec![-9.0, 59.0 / 5.0, -24.0 / 5.0, 2.0 / 5.0]),
    ];
    let knots = [1.0, 2.0, 3.0, 4.0];

    // third derivatives -12/5, 0, 12/5 differ
    assert_eq!(is_spline(&pieces, &knots, None, DEFAULT_PLACES)?, (true, 2));
    assert_eq!(is_spline(&pieces, &knots, Some(2), DEFAULT_PLACES)?, (true, 2));
    assert_eq!(is_spline(&pieces, &knots, Some(3), DEFAULT_PLACES)?, (false, 2));
    Ok(())
}

#[test]
fn continuous_but_kinked() -> NumResult {
    // |x - 1| split at 1
    let pieces = [Polynomial::new(vec![1.0, -1.0]), Polynomial::new(vec![-1.0, 1.0])];
    let knots = [0.0, 1.0, 2.0];

    assert_eq!(is_spline(&pieces, &knots, None, DEFAULT_PLACES)?, (true, 0));
    assert_eq!(is_spline(&pieces, &knots, Some(0), DEFAULT_PLACES)?, (true, 0));
    assert_eq!(is_spline(&pieces, &knots, Some(1), DEFAULT_PLACES)?, (false, 0));
    Ok(())
}

#[test]
fn smooth_quadratic_pieces() -> NumResult {
    let square = Polynomial::monomial(1.0, 2);
    let pieces = [square.clone(), square];
    let knots = [0.0, 1.0, 2.0];

    assert_eq!(is_spline(&pieces, &knots, None, DEFAULT_PLACES)?, (true, 2));
    assert_eq!(is_spline(&pieces, &knots, Some(2), DEFAULT_PLACES)?, (true, 2));
    Ok(())
}

#[test]
fn second_derivative_break_lowers_level() -> NumResult {
    // 2x^2 - 2x + 1 meets x^2 at 1 in value and slope, not curvature
    let pieces = [Polynomial::monomial(1.0, 2), Polynomial::new(vec![1.0, -2.0, 2.0])];
    let knots = [0.0, 1.0, 2.0];

    assert_eq!(is_spline(&pieces, &knots, None, DEFAULT_PLACES)?, (true, 1));
    assert_eq!(is_spline(&pieces, &knots, Some(1), DEFAULT_PLACES)?, (true, 1));
    assert_eq!(is_spline(&pieces, &knots, Some(2), DEFAULT_PLACES)?, (false, 1));
    Ok(())
}

#[test]
fn places_controls_tolerance() -> NumResult {
    let pieces = [Polynomial::x(), Polynomial::new(vec![0.001, 1.0])];
    let knots = [0.0, 1.0, 2.0];

    assert!(!is_spline(&pieces, &knots, None, 5)?.0);
    assert!(is_spline(&pieces, &knots, None, 2)?.0);
    Ok(())
}

#[test]
fn malformed_input() {
    assert!(matches!(is_spline(&[], &[0.0], None, 5), Err(InterpolationError::EmptyInput)));
    assert!(matches!(
        is_spline(&[Polynomial::one()], &[0.0, 1.0, 2.0], None, 5),
        Err(InterpolationError::PieceKnotMismatch { pieces: 1, knots: 3 })
    ));
}

#[test]
fn interval_is_left_open() {
    let i = Interval::new(1.0, 2.0);
    assert!(!i.contains(1.0));
    assert!(i.contains(1.5));
    assert!(i.contains(2.0));
}
