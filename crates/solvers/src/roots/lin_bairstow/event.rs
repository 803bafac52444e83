use bairstow_core::Factor;

/// Events emitted by the Lin–Bairstow solver.
///
/// Step events carry the degree of the polynomial being factored, the
/// 1-based iteration within that factor's search, the updated estimate, and
/// the magnitude of the update that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// One Bairstow update of the trial factor `x² − u·x − v`.
    FactorStep {
        degree: usize,
        iter: usize,
        u: f64,
        v: f64,
        /// `√(Δu² + Δv²)` for this update.
        step: f64,
    },

    /// One Newton–Raphson update of a cubic's real root estimate.
    RootStep {
        degree: usize,
        iter: usize,
        r: f64,
        /// `|Δr|` for this update.
        step: f64,
    },

    /// A converged factor was divided out.
    Deflated {
        /// Degree of the polynomial left after division.
        degree: usize,
        factor: Factor,
    },
}

impl Event {
    /// Returns the degree carried by this event.
    #[must_use]
    pub fn degree(&self) -> usize {
        match self {
            Self::FactorStep { degree, .. }
            | Self::RootStep { degree, .. }
            | Self::Deflated { degree, .. } => *degree,
        }
    }

    /// Returns the update magnitude, or `None` for a deflation.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        match self {
            Self::FactorStep { step, .. } | Self::RootStep { step, .. } => Some(*step),
            Self::Deflated { .. } => None,
        }
    }

    /// Returns the factor estimate (or accepted factor) carried by this event.
    #[must_use]
    pub fn factor(&self) -> Factor {
        match *self {
            Self::FactorStep { u, v, .. } => Factor::Quadratic { u, v },
            Self::RootStep { r, .. } => Factor::Linear { r },
            Self::Deflated { factor, .. } => factor,
        }
    }
}
