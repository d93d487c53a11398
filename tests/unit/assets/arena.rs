use super::*;

#[test]
fn handles_are_dense_and_ordered() {
    let mut arena = ImageArena::new();
    let a = arena.add(RgbaImage::new(4, 4)).unwrap();
    let b = arena.add(RgbaImage::new(2, 8)).unwrap();
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(arena.len(), 2);
    assert_eq!(arena.get(b).unwrap().dimensions(), (2, 8));
}

#[test]
fn shared_arc_is_not_copied() {
    let img: SourceImage = Arc::new(RgbaImage::new(3, 3));
    let mut arena = ImageArena::new();
    let h = arena.add(Arc::clone(&img)).unwrap();
    assert!(Arc::ptr_eq(arena.get(h).unwrap(), &img));
}

#[test]
fn zero_area_images_are_rejected() {
    let mut arena = ImageArena::new();
    assert!(arena.add(RgbaImage::new(0, 5)).is_err());
    assert!(arena.is_empty());
}

#[test]
fn unknown_handle_is_none() {
    let arena = ImageArena::new();
    assert!(arena.get(ImageHandle(3)).is_none());
}
