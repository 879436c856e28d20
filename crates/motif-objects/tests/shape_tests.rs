//! Tests for the rectangle and circle factories.

use std::f64::consts::PI;

use motif_objects::shape::{Circle, Rectangle, Shape};
use quickcheck_macros::quickcheck;

#[test]
fn test_rectangle_fields_and_area() {
    let r = Rectangle::new(10.0, 20.0);
    assert_eq!(r.width, 10.0);
    assert_eq!(r.height, 20.0);
    assert_eq!(r.area(), 200.0);
}

#[test]
fn test_degenerate_rectangle_has_zero_area() {
    assert_eq!(Rectangle::new(0.0, 7.5).area(), 0.0);
    assert_eq!(Rectangle::default().area(), 0.0);
}

#[test]
fn test_circle_area() {
    assert_eq!(Circle::new(1.0).area(), PI);
    assert_eq!(Circle::new(10.0).area(), PI * 10.0 * 10.0);
}

#[test]
fn test_shapes_as_trait_objects() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(2.0, 3.0)),
        Box::new(Circle::new(0.0)),
    ];
    let total: f64 = shapes.iter().map(|s| s.area()).sum();
    assert_eq!(total, 6.0);
}

#[quickcheck]
fn prop_rectangle_area_is_width_times_height(width: u16, height: u16) -> bool {
    let (w, h) = (f64::from(width), f64::from(height));
    Rectangle::new(w, h).area() == w * h
}
