use image::{Rgba, RgbaImage};

use super::*;

fn solid(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba([200, 40, 10, 255]))
}

#[test]
fn fit_within_preserves_aspect_ratio() {
    let bound = Size::new(80, 80);
    assert_eq!(fit_within(Size::new(160, 80), bound), Size::new(80, 40));
    assert_eq!(fit_within(Size::new(100, 200), bound), Size::new(40, 80));
    assert_eq!(fit_within(Size::new(640, 480), bound), Size::new(80, 60));
}

#[test]
fn fit_within_never_enlarges() {
    let bound = Size::new(80, 80);
    assert_eq!(fit_within(Size::new(10, 20), bound), Size::new(10, 20));
    assert_eq!(fit_within(Size::new(80, 80), bound), Size::new(80, 80));
}

#[test]
fn fit_within_keeps_at_least_one_pixel() {
    assert_eq!(
        fit_within(Size::new(1000, 1), Size::new(10, 10)),
        Size::new(10, 1)
    );
}

#[test]
fn shared_handle_is_resized_once() {
    let mut arena = ImageArena::new();
    let h = arena.add(solid(200, 100)).unwrap();

    let out = normalize_images(&arena, [h, h, h], Size::new(80, 80)).unwrap();
    assert_eq!(out.resize_count(), 1);
    assert_eq!(out.len(), 1);
    assert_eq!(out.get(h).unwrap().dimensions(), (80, 40));
}

#[test]
fn images_inside_bound_are_shared_not_copied() {
    let mut arena = ImageArena::new();
    let h = arena.add(solid(20, 30)).unwrap();

    let out = normalize_images(&arena, [h], Size::new(80, 80)).unwrap();
    assert_eq!(out.resize_count(), 0);
    assert!(Arc::ptr_eq(out.get(h).unwrap(), arena.get(h).unwrap()));
}

#[test]
fn distinct_handles_with_equal_content_are_resized_separately() {
    let mut arena = ImageArena::new();
    let a = arena.add(solid(160, 160)).unwrap();
    let b = arena.add(solid(160, 160)).unwrap();

    let out = normalize_images(&arena, [a, b], Size::new(64, 64)).unwrap();
    assert_eq!(out.resize_count(), 2);
    assert!(!Arc::ptr_eq(out.get(a).unwrap(), out.get(b).unwrap()));
}

#[test]
fn unreferenced_images_are_skipped() {
    let mut arena = ImageArena::new();
    let a = arena.add(solid(10, 10)).unwrap();
    let b = arena.add(solid(10, 10)).unwrap();

    let out = normalize_images(&arena, [b], Size::new(80, 80)).unwrap();
    assert!(out.get(a).is_none());
    assert!(out.get(b).is_some());
    assert_eq!(out.sizes().collect::<Vec<_>>(), vec![Size::new(10, 10)]);
}

#[test]
fn unknown_handle_and_empty_bound_are_errors() {
    let arena = ImageArena::new();
    assert!(normalize_images(&arena, [ImageHandle(0)], Size::new(80, 80)).is_err());
    assert!(normalize_images(&arena, std::iter::empty(), Size::new(0, 80)).is_err());
}

#[test]
fn downsized_edges_keep_their_colour() {
    let mut framed = RgbaImage::new(161, 161);
    for y in 41..121 {
        for x in 41..121 {
            framed.put_pixel(x, y, Rgba([255, 0, 0, 255]));
        }
    }
    let mut arena = ImageArena::new();
    let h = arena.add(framed).unwrap();

    let out = normalize_images(&arena, [h], Size::new(80, 80)).unwrap();
    let img = out.get(h).unwrap();
    assert_eq!(img.dimensions(), (80, 80));

    let edges: Vec<_> = img
        .pixels()
        .filter(|p| p.0[3] > 0 && p.0[3] < 255)
        .collect();
    assert!(!edges.is_empty());
    assert!(edges.iter().all(|p| p.0[0] == 255 && p.0[1] == 0 && p.0[2] == 0));
}
