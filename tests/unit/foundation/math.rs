use super::*;

#[test]
fn fnv_is_stable_for_empty_input() {
    assert_eq!(Fnv1a64::new_default().finish(), Fnv1a64::OFFSET_BASIS);
}

#[test]
fn fnv_depends_on_input() {
    let mut a = Fnv1a64::new_default();
    a.write_u32(1);
    let mut b = Fnv1a64::new_default();
    b.write_u32(2);
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 128), 128);
}

#[test]
fn premultiply_opaque_and_transparent() {
    assert_eq!(premultiply([10, 20, 30, 255]), [10, 20, 30, 255]);
    assert_eq!(premultiply([10, 20, 30, 0]), [0, 0, 0, 0]);
}

#[test]
fn unpremultiply_inverts_for_opaque_and_half_alpha() {
    assert_eq!(unpremultiply([10, 20, 30, 255]), [10, 20, 30, 255]);
    assert_eq!(unpremultiply([0, 0, 0, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremultiply([100, 50, 0, 128]), [199, 100, 0, 128]);
    // Color channels larger than alpha are clamped before division.
    assert_eq!(unpremultiply([200, 0, 0, 100]), [255, 0, 0, 100]);
}

#[test]
fn trunc_i64_rounds_toward_zero() {
    assert_eq!(trunc_i64(2.9), 2);
    assert_eq!(trunc_i64(-2.9), -2);
    assert_eq!(trunc_i64(-0.4), 0);
}
