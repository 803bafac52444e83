use std::fmt;

use crate::Factor;

/// A root of a real polynomial.
///
/// Complex roots of a real polynomial come in conjugate pairs, so a pair is
/// reported once as its real part and imaginary magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Root {
    /// A single real root.
    Real(f64),

    /// The conjugate pair `re ± im·i`, with `im` non-negative.
    ComplexPair { re: f64, im: f64 },
}

impl Root {
    /// Returns how many roots this value stands for (1 or 2).
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Root::Real(_) => 1,
            Root::ComplexPair { .. } => 2,
        }
    }

    /// Returns true for a real root.
    #[must_use]
    pub fn is_real(&self) -> bool {
        matches!(self, Root::Real(_))
    }

    /// Returns the monic factor with exactly this root (or root pair).
    ///
    /// A pair `re ± im·i` maps to `x² − 2·re·x + (re² + im²)`.
    #[must_use]
    pub fn factor(&self) -> Factor {
        match *self {
            Root::Real(r) => Factor::Linear { r },
            Root::ComplexPair { re, im } => Factor::Quadratic {
                u: 2.0 * re,
                v: -(re * re + im * im),
            },
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Real(r) => write!(f, "{r}"),
            Root::ComplexPair { re, im } => write!(f, "{re} ± {im}i"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn pair_counts_as_two_roots() {
        assert_eq!(Root::Real(1.0).count(), 1);
        assert_eq!(Root::ComplexPair { re: 0.0, im: 1.0 }.count(), 2);
    }

    #[test]
    fn pair_factor_round_trips_through_roots() {
        let pair = Root::ComplexPair { re: -1.5, im: 0.5 };
        let factor = pair.factor();

        let roots: Vec<_> = factor.roots().collect();
        assert_eq!(roots.len(), 1);
        let Root::ComplexPair { re, im } = roots[0] else {
            panic!("expected a conjugate pair");
        };
        assert_relative_eq!(re, -1.5);
        assert_relative_eq!(im, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Root::Real(2.0).to_string(), "2");
        assert_eq!(
            Root::ComplexPair { re: 0.5, im: 1.25 }.to_string(),
            "0.5 ± 1.25i"
        );
    }
}
