use super::*;

#[test]
fn side_is_ceiling_of_largest_diagonal() {
    let canvas = resolve_canvas([Size::new(30, 40), Size::new(80, 40)], None).unwrap();
    // sqrt(80^2 + 40^2) = 89.44...
    assert_eq!(canvas.side, 90);
}

#[test]
fn side_covers_every_diagonal() {
    let sizes = [
        Size::new(80, 80),
        Size::new(1, 80),
        Size::new(64, 17),
        Size::new(3, 4),
    ];
    let canvas = resolve_canvas(sizes, None).unwrap();
    for s in sizes {
        let diag = (f64::from(s.width).powi(2) + f64::from(s.height).powi(2)).sqrt();
        assert!(f64::from(canvas.side) >= diag);
    }
    assert_eq!(canvas.side, 114);
}

#[test]
fn limit_clamps_after_diagonal() {
    let canvas = resolve_canvas([Size::new(80, 80)], Some(100)).unwrap();
    assert_eq!(canvas.side, 100);

    let roomy = resolve_canvas([Size::new(80, 80)], Some(500)).unwrap();
    assert_eq!(roomy.side, 114);
}

#[test]
fn empty_input_and_zero_limit_are_errors() {
    assert!(resolve_canvas(Vec::<Size>::new(), None).is_err());
    assert!(resolve_canvas([Size::new(2, 2)], Some(0)).is_err());
}
