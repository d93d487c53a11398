use super::*;

#[test]
fn diagonal_ceil_is_exact_for_pythagorean_triples() {
    assert_eq!(Size::new(3, 4).diagonal_ceil(), 5);
    assert_eq!(Size::new(60, 80).diagonal_ceil(), 100);
}

#[test]
fn diagonal_ceil_rounds_up() {
    // sqrt(2) * 80 = 113.137...
    assert_eq!(Size::new(80, 80).diagonal_ceil(), 114);
    assert_eq!(Size::new(1, 1).diagonal_ceil(), 2);
    assert_eq!(Size::new(7, 0).diagonal_ceil(), 7);
}

#[test]
fn fits_within_checks_both_axes() {
    let bound = Size::new(80, 80);
    assert!(Size::new(80, 80).fits_within(bound));
    assert!(Size::new(10, 79).fits_within(bound));
    assert!(!Size::new(81, 10).fits_within(bound));
    assert!(!Size::new(10, 81).fits_within(bound));
}

#[test]
fn non_empty_size_rejects_zero_area() {
    assert!(Size::non_empty(0, 5).is_err());
    assert!(Size::non_empty(5, 0).is_err());
    assert_eq!(Size::non_empty(2, 3).unwrap(), Size::new(2, 3));
}

#[test]
fn canvas_requires_positive_side() {
    assert!(Canvas::new(0).is_err());
    let canvas = Canvas::new(10).unwrap();
    assert_eq!(canvas.size(), Size::new(10, 10));
    assert_eq!(canvas.center(), Point::new(5.0, 5.0));
}
