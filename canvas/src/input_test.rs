#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_is_finite_rejects_nan_and_infinity() {
    assert!(Point::new(1.0, 2.0).is_finite());
    assert!(!Point::new(f64::NAN, 2.0).is_finite());
    assert!(!Point::new(1.0, f64::INFINITY).is_finite());
}

// =============================================================
// PointerSample::primary
// =============================================================

#[test]
fn mouse_primary_is_pointer_position() {
    let sample = PointerSample::mouse(12.0, 34.0);
    assert_eq!(sample.primary(), Some(Point::new(12.0, 34.0)));
}

#[test]
fn touch_primary_is_first_contact() {
    let sample = PointerSample::touch(vec![Point::new(5.0, 6.0), Point::new(50.0, 60.0)]);
    assert_eq!(sample.primary(), Some(Point::new(5.0, 6.0)));
}

#[test]
fn touch_without_contacts_has_no_primary() {
    assert_eq!(PointerSample::touch(Vec::new()).primary(), None);
}

// =============================================================
// map_to_canvas
// =============================================================

#[test]
fn mouse_maps_relative_to_rect_origin() {
    let rect = ClientRect::new(100.0, 200.0, 280.0, 280.0);
    let mapped = map_to_canvas(&PointerSample::mouse(110.0, 220.0), rect);
    assert_eq!(mapped, Some(Point::new(10.0, 20.0)));
}

#[test]
fn touch_maps_identically_to_mouse_at_same_client_position() {
    let rect = ClientRect::new(37.5, 412.25, 280.0, 280.0);
    let mouse = map_to_canvas(&PointerSample::mouse(47.5, 432.25), rect);
    let touch = map_to_canvas(&PointerSample::touch(vec![Point::new(47.5, 432.25)]), rect);
    assert_eq!(mouse, Some(Point::new(10.0, 20.0)));
    assert_eq!(touch, mouse);
}

#[test]
fn touch_ignores_secondary_contacts() {
    let rect = ClientRect::new(0.0, 0.0, 280.0, 280.0);
    let sample = PointerSample::touch(vec![Point::new(1.0, 2.0), Point::new(200.0, 200.0)]);
    assert_eq!(map_to_canvas(&sample, rect), Some(Point::new(1.0, 2.0)));
}

#[test]
fn touch_without_contacts_maps_to_none() {
    let rect = ClientRect::new(0.0, 0.0, 280.0, 280.0);
    assert_eq!(map_to_canvas(&PointerSample::touch(Vec::new()), rect), None);
}

#[test]
fn mapping_follows_rect_after_scroll() {
    let sample = PointerSample::mouse(150.0, 150.0);
    let before = map_to_canvas(&sample, ClientRect::new(100.0, 100.0, 280.0, 280.0));
    let after = map_to_canvas(&sample, ClientRect::new(100.0, 40.0, 280.0, 280.0));
    assert_eq!(before, Some(Point::new(50.0, 50.0)));
    assert_eq!(after, Some(Point::new(50.0, 110.0)));
}

#[test]
fn positions_outside_the_rect_map_to_negative_or_overflow_coordinates() {
    let rect = ClientRect::new(100.0, 100.0, 280.0, 280.0);
    assert_eq!(map_to_canvas(&PointerSample::mouse(90.0, 400.0), rect), Some(Point::new(-10.0, 300.0)));
}
