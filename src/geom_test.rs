#![allow(clippy::float_cmp)]

use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_delta_and_offset_are_inverse() {
    let start = Point::new(50.0, 30.0);
    let pointer = Point::new(120.0, 45.0);
    let delta = pointer.delta_from(Point::new(100.0, 55.0));
    assert_eq!(delta, Point::new(20.0, -10.0));
    assert_eq!(start.offset(delta), Point::new(70.0, 20.0));
}

#[test]
fn point_angle_around_cardinal_directions() {
    let c = Point::new(100.0, 100.0);
    assert!(approx(Point::new(150.0, 100.0).angle_around(c), 0.0));
    assert!(approx(Point::new(100.0, 150.0).angle_around(c), 90.0));
    assert!(approx(Point::new(50.0, 100.0).angle_around(c), 180.0));
    assert!(approx(Point::new(100.0, 50.0).angle_around(c), -90.0));
}

#[test]
fn point_is_finite_rejects_nan_and_infinity() {
    assert!(Point::new(-3.5, 1e9).is_finite());
    assert!(!Point::new(f64::NAN, 0.0).is_finite());
    assert!(!Point::new(0.0, f64::NEG_INFINITY).is_finite());
    assert!(!Size::new(f64::INFINITY, 10.0).is_finite());
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

// =============================================================
// Size
// =============================================================

#[test]
fn size_grow_clamped_applies_positive_delta() {
    let s = Size::new(200.0, 250.0).grow_clamped(Point::new(30.0, 10.0), Size::new(120.0, 140.0));
    assert_eq!(s, Size::new(230.0, 260.0));
}

#[test]
fn size_grow_clamped_floors_huge_negative_delta() {
    let s = Size::new(200.0, 250.0).grow_clamped(Point::new(-10_000.0, -1e9), Size::new(120.0, 140.0));
    assert_eq!(s, Size::new(120.0, 140.0));
}

#[test]
fn size_grow_clamped_floors_each_axis_independently() {
    let s = Size::new(200.0, 250.0).grow_clamped(Point::new(-500.0, 5.0), Size::new(120.0, 140.0));
    assert_eq!(s, Size::new(120.0, 255.0));
}

#[test]
fn size_is_known() {
    assert!(Size::new(800.0, 600.0).is_known());
    assert!(!Size::default().is_known());
    assert!(!Size::new(800.0, 0.0).is_known());
}

// =============================================================
// Rect
// =============================================================

#[test]
fn rect_center() {
    let r = Rect::new(10.0, 20.0, 200.0, 100.0);
    assert_eq!(r.center(), Point::new(110.0, 70.0));
}
