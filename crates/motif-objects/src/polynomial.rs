//! Polynomials in one variable.
//!
//! Coefficients are listed from the highest power down to the constant term:
//! `[2, 3, 5]` is `2x^2 + 3x + 5`.

use std::fmt;

/// Errors from building a [`Polynomial`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PolynomialError {
    /// No coefficients were given.
    #[error("a polynomial needs at least one coefficient")]
    Empty,
}

/// A polynomial with real coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Build a polynomial from coefficients, highest power first.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::Empty`] if `coefficients` is empty.
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Result<Self, PolynomialError> {
        let coefficients = coefficients.into();
        if coefficients.is_empty() {
            return Err(PolynomialError::Empty);
        }
        Ok(Self { coefficients })
    }

    /// Coefficients, highest power first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Highest power, counting leading zero coefficients.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Value at `x` (Horner's method).
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |acc, &coefficient| acc * x + coefficient)
    }

    /// Turn the polynomial into a plain function of `x`.
    pub fn into_fn(self) -> impl Fn(f64) -> f64 {
        move |x| self.evaluate(x)
    }
}

/// Build the function `x -> c[0]*x^(n-1) + ... + c[n-1]`.
///
/// ```
/// let p = motif_objects::polynomial::polynomial([2.0, 3.0, 5.0]).unwrap();
/// assert_eq!(p(2.0), 19.0);
/// ```
///
/// # Errors
///
/// Returns [`PolynomialError::Empty`] if `coefficients` is empty.
pub fn polynomial(
    coefficients: impl Into<Vec<f64>>,
) -> Result<impl Fn(f64) -> f64, PolynomialError> {
    Ok(Polynomial::new(coefficients)?.into_fn())
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (power, &coefficient) in self.coefficients.iter().rev().enumerate().rev() {
            if coefficient == 0.0 {
                continue;
            }
            let magnitude = coefficient.abs();
            match (first, coefficient.is_sign_negative()) {
                (true, true) => f.write_str("-")?,
                (true, false) => {}
                (false, true) => f.write_str(" - ")?,
                (false, false) => f.write_str(" + ")?,
            }
            first = false;

            if power == 0 || magnitude != 1.0 {
                write!(f, "{magnitude}")?;
            }
            match power {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{power}")?,
            }
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}
