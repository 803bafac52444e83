//! Parsing of the plain-text polynomial format.
//!
//! The input is a sequence of whitespace-separated tokens: the degree `n`,
//! then the `n + 1` coefficients `a[0] … a[n]` in increasing power order.
//! Line breaks carry no meaning, so the classic two-line layout
//!
//! ```text
//! 4
//! 1 3 1 2 4
//! ```
//!
//! is one valid spelling among many.

use bairstow_core::{Polynomial, PolynomialError};
use thiserror::Error;

/// Errors that can occur while reading a polynomial from text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("input is empty, expected the polynomial degree")]
    MissingDegree,

    #[error("invalid degree `{token}`, expected a non-negative integer")]
    InvalidDegree { token: String },

    #[error("invalid coefficient `{token}` at position {index}")]
    InvalidCoefficient { index: usize, token: String },

    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}

/// Parses a degree followed by its coefficients.
///
/// # Errors
///
/// Returns an error if the degree or any coefficient fails to parse, or if
/// the coefficients do not form a valid polynomial of the declared degree.
pub fn parse_input(text: &str) -> Result<Polynomial, InputError> {
    let mut tokens = text.split_whitespace();

    let token = tokens.next().ok_or(InputError::MissingDegree)?;
    let degree: usize = token.parse().map_err(|_| InputError::InvalidDegree {
        token: token.to_owned(),
    })?;

    let coefficients = tokens
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<f64>()
                .map_err(|_| InputError::InvalidCoefficient {
                    index,
                    token: token.to_owned(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Polynomial::with_degree(degree, &coefficients)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_two_line_layout() {
        let polynomial = parse_input("4\n1 3 1 2 4\n").expect("valid input");
        assert_eq!(polynomial.degree(), 4);
        assert_eq!(polynomial.coefficients(), &[1.0, 3.0, 1.0, 2.0, 4.0]);
    }

    #[test]
    fn ignores_layout() {
        let polynomial = parse_input("  2 -6\t-1\n\n 1.0 ").expect("valid input");
        assert_eq!(polynomial.coefficients(), &[-6.0, -1.0, 1.0]);
    }

    #[test]
    fn accepts_scientific_notation() {
        let polynomial = parse_input("1 -2.5e-3 1E2").expect("valid input");
        assert_eq!(polynomial.coefficients(), &[-2.5e-3, 100.0]);
    }

    #[test]
    fn normalizes_vanishing_leading_term() {
        let polynomial = parse_input("3 -6 -1 1 0").expect("valid input");
        assert_eq!(polynomial.degree(), 2);
    }

    #[test]
    fn empty_input_is_missing_degree() {
        assert_eq!(parse_input(" \n\t"), Err(InputError::MissingDegree));
    }

    #[test]
    fn rejects_bad_degree() {
        assert_eq!(
            parse_input("-1 2 3"),
            Err(InputError::InvalidDegree {
                token: "-1".to_owned()
            })
        );
        assert!(matches!(
            parse_input("2.5 1 2 3"),
            Err(InputError::InvalidDegree { .. })
        ));
    }

    #[test]
    fn rejects_bad_coefficient() {
        assert_eq!(
            parse_input("2 1 x 3"),
            Err(InputError::InvalidCoefficient {
                index: 1,
                token: "x".to_owned()
            })
        );
    }

    #[test]
    fn rejects_wrong_coefficient_count() {
        assert_eq!(
            parse_input("3 1 2"),
            Err(InputError::Polynomial(PolynomialError::CoefficientCount {
                expected: 4,
                found: 2
            }))
        );
        assert!(matches!(
            parse_input("1 1 2 3"),
            Err(InputError::Polynomial(
                PolynomialError::CoefficientCount { .. }
            ))
        ));
    }

    #[test]
    fn rejects_non_finite_and_zero_polynomials() {
        assert!(matches!(
            parse_input("1 inf 1"),
            Err(InputError::Polynomial(PolynomialError::NonFinite {
                index: 0,
                ..
            }))
        ));
        assert_eq!(
            parse_input("2 0 0 0"),
            Err(InputError::Polynomial(PolynomialError::AllZero))
        );
    }
}
