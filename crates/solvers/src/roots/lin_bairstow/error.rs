use thiserror::Error;

use bairstow_core::{Factor, PolynomialError};

/// Errors that can occur during Lin–Bairstow root finding.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid polynomial: {0}")]
    InvalidPolynomial(#[from] PolynomialError),

    /// An iteration ran out of updates or left the finite range.
    ///
    /// `degree` is the degree of the partially reduced polynomial being
    /// factored and `estimate` is the last trial factor.
    #[error("no convergence at degree {degree} after {iters} iterations, last estimate {estimate:?}")]
    ConvergenceFailure {
        degree: usize,
        estimate: Factor,
        iters: usize,
    },
}
