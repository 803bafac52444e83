use crate::Root;

/// A monic factor divided out of a polynomial during root finding.
///
/// Quadratic factors use the Bairstow parameterization `x² − u·x − v`, so a
/// factor with real coefficients can carry a complex-conjugate root pair
/// without complex arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Factor {
    /// The factor `x − r`.
    Linear { r: f64 },

    /// The factor `x² − u·x − v`.
    Quadratic { u: f64, v: f64 },
}

impl Factor {
    /// Returns the degree of the factor (1 or 2).
    #[must_use]
    pub fn degree(&self) -> usize {
        match self {
            Factor::Linear { .. } => 1,
            Factor::Quadratic { .. } => 2,
        }
    }

    /// Returns the factor's coefficients in increasing power order.
    #[must_use]
    pub fn coefficients(&self) -> Vec<f64> {
        match *self {
            Factor::Linear { r } => vec![-r, 1.0],
            Factor::Quadratic { u, v } => vec![-v, -u, 1.0],
        }
    }

    /// Returns the roots of this factor.
    ///
    /// A quadratic factor with discriminant `u² + 4v < 0` yields a single
    /// [`Root::ComplexPair`]. Otherwise it yields two real roots, the larger
    /// (`u/2 + √disc/2`) first.
    pub fn roots(self) -> impl Iterator<Item = Root> {
        let (first, second) = match self {
            Factor::Linear { r } => (Root::Real(r), None),
            Factor::Quadratic { u, v } => {
                let disc = u * u + 4.0 * v;
                let half_u = u / 2.0;
                if disc < 0.0 {
                    let im = (-disc).sqrt() / 2.0;
                    (Root::ComplexPair { re: half_u, im }, None)
                } else {
                    let offset = disc.sqrt() / 2.0;
                    (Root::Real(half_u + offset), Some(Root::Real(half_u - offset)))
                }
            }
        };
        std::iter::once(first).chain(second)
    }
}
