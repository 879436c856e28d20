//! Rectangle and circle factories.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Behavior shared by every shape.
pub trait Shape {
    /// Surface area in square units.
    fn area(&self) -> f64;
}

/// An axis-aligned rectangle.
///
/// ```
/// use motif_objects::shape::{Rectangle, Shape};
///
/// let r = Rectangle::new(10.0, 20.0);
/// assert_eq!(r.width, 10.0);
/// assert_eq!(r.height, 20.0);
/// assert_eq!(r.area(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle. Dimensions are taken as given, negative included.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A circle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Distance from the center to the edge.
    pub radius: f64,
}

impl Circle {
    /// Create a circle.
    #[must_use]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}
