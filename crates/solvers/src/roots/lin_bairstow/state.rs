use bairstow_core::{Factor, Polynomial, PolynomialError, Root};
use log::debug;

use super::{Error, Solution, Status, division::Division};

/// Working state of one solve: the partially reduced polynomial, the scratch
/// sequences, and everything extracted so far.
pub(super) struct State {
    pub(super) coefficients: Vec<f64>,
    pub(super) division: Division,
    roots: Vec<Root>,
    iters: usize,
}

impl State {
    /// Starts a solve of `polynomial`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::Constant` for a degree-zero polynomial.
    pub(super) fn new(polynomial: &Polynomial) -> Result<Self, Error> {
        let degree = polynomial.degree();
        if degree == 0 {
            return Err(PolynomialError::Constant.into());
        }

        Ok(Self {
            coefficients: polynomial.coefficients().to_vec(),
            division: Division::with_degree(degree),
            roots: Vec::with_capacity(degree),
            iters: 0,
        })
    }

    /// Returns the degree of the polynomial still to be factored.
    pub(super) fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Records the iterations spent on a factor search.
    pub(super) fn add_iters(&mut self, iters: usize) {
        self.iters += iters;
    }

    /// Emits the roots of an iterated factor and replaces the polynomial with
    /// the quotient left in the scratch sequences.
    pub(super) fn deflate(&mut self, factor: Factor) {
        let from = self.degree();
        self.roots.extend(factor.roots());
        self.division.deflate(&mut self.coefficients, factor.degree());
        debug!("divided out {factor:?}, degree {from} -> {}", self.degree());
    }

    /// Emits the roots of a factor covering the whole remaining polynomial,
    /// leaving only its leading coefficient.
    pub(super) fn finish_with(&mut self, factor: Factor) {
        self.roots.extend(factor.roots());
        let leading = self.coefficients[self.degree()];
        self.coefficients.clear();
        self.coefficients.push(leading);
        debug!("solved final {factor:?} in closed form");
    }

    /// Consumes the state and builds the solution.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPolynomial` if the remainder is not a valid
    /// polynomial, which happens only if deflation overflowed.
    pub(super) fn into_solution(self, status: Status) -> Result<Solution, Error> {
        let remainder = Polynomial::new(self.coefficients)?;
        let status = if remainder.degree() == 0 {
            Status::Complete
        } else {
            status
        };

        Ok(Solution {
            status,
            roots: self.roots,
            remainder,
            iters: self.iters,
        })
    }
}
