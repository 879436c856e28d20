//! Plain data objects for the motif crates.
//!
//! - **Shapes** - rectangle and circle factories sharing a [`Shape`] behavior
//! - **JSON** - structural encode/decode, including decode onto a prototype
//! - **Polynomials** - coefficient lists evaluated as functions of `x`

/// Structural JSON encoding and decoding.
pub mod json;
/// Polynomials given by their coefficients.
pub mod polynomial;
/// Shape factories and the area behavior.
pub mod shape;

pub use json::{JsonError, from_json, from_json_onto, to_json};
pub use polynomial::{Polynomial, PolynomialError};
pub use shape::{Circle, Rectangle, Shape};
