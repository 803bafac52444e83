use bairstow_core::{Polynomial, Root};

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every root was extracted.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a Lin–Bairstow solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Roots in extraction order, highest-degree factors first.
    pub roots: Vec<Root>,

    /// The part of the polynomial not yet factored.
    ///
    /// For a complete solve this is the constant leading coefficient.
    pub remainder: Polynomial,

    /// Total iterations across all extracted factors.
    pub iters: usize,
}

impl Solution {
    /// Returns the number of roots found, counting each conjugate pair as two.
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.roots.iter().map(Root::count).sum()
    }

    /// Multiplies the remainder by the factor of every root found.
    ///
    /// For a complete solve this approximates the original polynomial.
    #[must_use]
    pub fn reconstruct(&self) -> Polynomial {
        self.roots
            .iter()
            .fold(self.remainder.clone(), |poly, root| {
                poly.mul_factor(&root.factor())
            })
    }
}
