use std::fmt;

use crate::{Factor, PolynomialError, Root};

/// A polynomial with real coefficients.
///
/// Coefficients are stored in increasing power order, so `coefficients()[i]`
/// is the coefficient of `xⁱ`. A `Polynomial` is always normalized: its
/// highest-order coefficient is non-zero and every coefficient is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial, dropping zero high-order coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if `coefficients` is empty, contains a non-finite
    /// value, or is entirely zero.
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Result<Self, PolynomialError> {
        let mut coefficients = coefficients.into();

        if coefficients.is_empty() {
            return Err(PolynomialError::Empty);
        }

        if let Some((index, &value)) = coefficients
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(PolynomialError::NonFinite { index, value });
        }

        #[allow(clippy::float_cmp)]
        let Some(last) = coefficients.iter().rposition(|&value| value != 0.0) else {
            return Err(PolynomialError::AllZero);
        };

        coefficients.truncate(last + 1);
        Ok(Self { coefficients })
    }

    /// Creates a polynomial from a declared degree and its `degree + 1`
    /// coefficients.
    ///
    /// A declared degree is an upper bound: zero high-order coefficients are
    /// dropped, so the result may have a lower degree.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::CoefficientCount` if the number of
    /// coefficients does not match the degree, or any error from [`Polynomial::new`].
    pub fn with_degree(degree: usize, coefficients: &[f64]) -> Result<Self, PolynomialError> {
        let expected = degree.saturating_add(1);
        if coefficients.len() != expected {
            return Err(PolynomialError::CoefficientCount {
                expected,
                found: coefficients.len(),
            });
        }
        Self::new(coefficients)
    }

    /// Creates a degree-zero polynomial.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is zero or non-finite.
    pub fn constant(value: f64) -> Result<Self, PolynomialError> {
        Self::new(vec![value])
    }

    /// Rebuilds a polynomial from its leading coefficient and roots.
    ///
    /// Each real root contributes `(x − r)` and each conjugate pair contributes
    /// `(x² − 2·re·x + (re² + im²))`.
    ///
    /// # Errors
    ///
    /// Returns an error if `leading` is zero or non-finite.
    pub fn from_roots(leading: f64, roots: &[Root]) -> Result<Self, PolynomialError> {
        let constant = Self::constant(leading)?;
        Ok(roots
            .iter()
            .fold(constant, |poly, root| poly.mul_factor(&root.factor())))
    }

    /// Returns the degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns the coefficients in increasing power order.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the coefficient of the highest power.
    #[must_use]
    pub fn leading(&self) -> f64 {
        self.coefficients[self.degree()]
    }

    /// Evaluates the polynomial at `x` using Horner's rule.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &coefficient| acc * x + coefficient)
    }

    /// Returns the product of this polynomial and a monic factor.
    #[must_use]
    pub fn mul_factor(&self, factor: &Factor) -> Self {
        let factor = factor.coefficients();
        let mut product = vec![0.0; self.coefficients.len() + factor.len() - 1];

        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &f) in factor.iter().enumerate() {
                product[i + j] += a * f;
            }
        }

        Self {
            coefficients: product,
        }
    }

    /// Consumes the polynomial and returns its coefficients.
    #[must_use]
    pub fn into_coefficients(self) -> Vec<f64> {
        self.coefficients
    }
}

impl fmt::Display for Polynomial {
    /// Formats the polynomial highest power first, e.g. `4*x^2 - 1*x + 3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for (power, &coefficient) in self.coefficients.iter().enumerate().rev() {
            #[allow(clippy::float_cmp)]
            if coefficient == 0.0 {
                continue;
            }

            let magnitude = coefficient.abs();
            match (first, coefficient < 0.0) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;

            match power {
                0 => write!(f, "{magnitude}")?,
                1 => write!(f, "{magnitude}*x")?,
                _ => write!(f, "{magnitude}*x^{power}")?,
            }
        }

        Ok(())
    }
}
