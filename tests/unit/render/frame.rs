use image::Rgba;

use super::*;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

#[test]
fn center_places_image_at_floor_offset() {
    let img = RgbaImage::from_pixel(3, 2, RED);
    let frame = center(&img, Canvas::new(6).unwrap());
    assert_eq!(frame.size(), Size::new(6, 6));

    // offset = ((6 - 3) / 2, (6 - 2) / 2) = (1, 2)
    assert_eq!(frame.image().get_pixel(1, 2).0, RED.0);
    assert_eq!(frame.image().get_pixel(3, 3).0, RED.0);
    assert_eq!(frame.image().get_pixel(0, 2).0, [0, 0, 0, 0]);
    assert_eq!(frame.image().get_pixel(4, 2).0, [0, 0, 0, 0]);
    assert_eq!(frame.image().get_pixel(1, 1).0, [0, 0, 0, 0]);
    assert_eq!(frame.image().get_pixel(1, 4).0, [0, 0, 0, 0]);
}

#[test]
fn center_keeps_translucent_pixels_exact() {
    let img = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 77]));
    let frame = center(&img, Canvas::new(3).unwrap());
    assert_eq!(frame.image().get_pixel(1, 1).0, [10, 20, 30, 77]);
}

#[test]
fn center_crops_images_larger_than_canvas() {
    let mut img = RgbaImage::new(5, 5);
    img.put_pixel(2, 2, RED);
    let frame = center(&img, Canvas::new(3).unwrap());
    // offset = floor((3 - 5) / 2) = -1
    assert_eq!(frame.image().get_pixel(1, 1).0, RED.0);
}

#[test]
fn center_offset_uses_floor_division() {
    assert_eq!(center_offset(10, 4), 3);
    assert_eq!(center_offset(10, 5), 2);
    assert_eq!(center_offset(80, 121), -21);
}

#[test]
fn digest_tracks_pixels_and_clones_share_buffers() {
    let a = Frame::from_image(RgbaImage::from_pixel(2, 2, RED));
    let b = a.clone();
    let c = Frame::from_image(RgbaImage::new(2, 2));
    assert!(a.shares_pixels_with(&b));
    assert_eq!(a.digest(), b.digest());
    assert_ne!(a.digest(), c.digest());
    assert_eq!(blank(Canvas::new(2).unwrap()), *c.image());
}
