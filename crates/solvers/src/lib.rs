//! Polynomial root finding with the Lin–Bairstow method.
//!
//! The [`roots::lin_bairstow`] solver extracts every real and complex root of
//! a real polynomial by repeatedly dividing out quadratic factors, reducing a
//! leftover cubic with Newton–Raphson, and solving the final linear or
//! quadratic factor in closed form.
//!
//! For the common case of "give me the roots", use [`solve`]:
//!
//! ```
//! use bairstow_core::Root;
//!
//! // x² − x − 6 = (x − 3)(x + 2)
//! let roots = bairstow_solvers::solve(&[-6.0, -1.0, 1.0]).unwrap();
//! assert_eq!(roots, vec![Root::Real(3.0), Root::Real(-2.0)]);
//! ```

pub mod roots;

use bairstow_core::{Polynomial, Root};

use roots::lin_bairstow::{self, Config, Error};

/// Finds all roots of the polynomial with the given coefficients.
///
/// `coefficients[i]` is the coefficient of `xⁱ`; zero high-order coefficients
/// are ignored. Roots are returned in extraction order, not sorted.
///
/// # Errors
///
/// Returns [`Error::InvalidPolynomial`] if the coefficients do not describe a
/// polynomial with at least one root, or [`Error::ConvergenceFailure`] if an
/// iteration exceeds the default iteration bound.
pub fn solve(coefficients: &[f64]) -> Result<Vec<Root>, Error> {
    let polynomial = Polynomial::new(coefficients)?;
    let solution = lin_bairstow::solve_unobserved(&polynomial, &Config::default())?;
    Ok(solution.roots)
}
