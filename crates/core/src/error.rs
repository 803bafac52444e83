use thiserror::Error;

/// Errors that can occur when building or reducing a [`Polynomial`].
///
/// [`Polynomial`]: crate::Polynomial
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PolynomialError {
    /// No coefficients were supplied.
    #[error("no coefficients")]
    Empty,

    /// Every coefficient is zero, so the polynomial has no degree.
    #[error("all coefficients are zero")]
    AllZero,

    /// A coefficient is NaN or infinite.
    #[error("coefficient a[{index}] is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    /// The declared degree does not match the number of coefficients.
    #[error("expected {expected} coefficients, found {found}")]
    CoefficientCount { expected: usize, found: usize },

    /// The polynomial is a non-zero constant and has no roots.
    #[error("constant polynomial has no roots")]
    Constant,

    /// The coefficient of the highest power vanished during reduction.
    #[error("leading coefficient of degree {degree} is zero")]
    ZeroLeadingCoefficient { degree: usize },
}
