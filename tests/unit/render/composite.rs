use image::Rgba;

use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_half_alpha_blends() {
    let dst = [0, 0, 255, 255];
    let src = [128, 0, 0, 128];
    assert_eq!(over(dst, src), [128, 0, 127, 255]);
}

#[test]
fn straight_over_transparent_is_exact_copy() {
    assert_eq!(over_straight([0, 0, 0, 0], [7, 9, 11, 3]), [7, 9, 11, 3]);
}

#[test]
fn paste_over_clips_negative_offsets() {
    let mut dst = RgbaImage::new(4, 4);
    let src = RgbaImage::from_pixel(3, 3, Rgba([255, 0, 0, 255]));
    paste_over(&mut dst, &src, -2, -1);

    assert_eq!(dst.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(dst.get_pixel(0, 1).0, [255, 0, 0, 255]);
    assert_eq!(dst.get_pixel(1, 0).0, [0, 0, 0, 0]);
    assert_eq!(dst.get_pixel(0, 2).0, [0, 0, 0, 0]);
}

#[test]
fn paste_over_clips_far_edge_and_ignores_disjoint() {
    let mut dst = RgbaImage::new(4, 4);
    let src = RgbaImage::from_pixel(3, 3, Rgba([0, 255, 0, 255]));
    paste_over(&mut dst, &src, 3, 3);
    assert_eq!(dst.get_pixel(3, 3).0, [0, 255, 0, 255]);
    assert_eq!(dst.get_pixel(2, 2).0, [0, 0, 0, 0]);

    let before = dst.clone();
    paste_over(&mut dst, &src, 10, -10);
    assert_eq!(dst, before);
}

#[test]
fn paste_over_respects_source_alpha() {
    let mut dst = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 255, 255]));
    let src = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 0]));
    paste_over(&mut dst, &src, 0, 0);
    assert_eq!(dst.get_pixel(0, 0).0, [0, 0, 255, 255]);
}
