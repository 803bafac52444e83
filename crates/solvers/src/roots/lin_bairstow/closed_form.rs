use bairstow_core::{Factor, PolynomialError};

use super::Error;

/// Returns the monic factor of the quadratic `a[0] + a[1]·x + a[2]·x²`.
///
/// # Errors
///
/// Returns `Error::InvalidPolynomial` if `a[2]` is zero.
pub(super) fn quadratic(a: &[f64]) -> Result<Factor, Error> {
    debug_assert_eq!(a.len(), 3);

    #[allow(clippy::float_cmp)]
    if a[2] == 0.0 {
        return Err(PolynomialError::ZeroLeadingCoefficient { degree: 2 }.into());
    }

    Ok(Factor::Quadratic {
        u: -a[1] / a[2],
        v: -a[0] / a[2],
    })
}

/// Returns the monic factor of the line `a[0] + a[1]·x`.
///
/// # Errors
///
/// Returns `Error::InvalidPolynomial` if `a[1]` is zero.
pub(super) fn linear(a: &[f64]) -> Result<Factor, Error> {
    debug_assert_eq!(a.len(), 2);

    #[allow(clippy::float_cmp)]
    if a[1] == 0.0 {
        return Err(PolynomialError::ZeroLeadingCoefficient { degree: 1 }.into());
    }

    Ok(Factor::Linear { r: -a[0] / a[1] })
}
