//! Recording observer for inspecting convergence after a solve.
//!
//! See [`Recorder`] for usage.

use bairstow_core::Observer;

use crate::traits::{HasDegree, HasStep};

/// One recorded update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Degree of the polynomial being factored when the update was made.
    pub degree: usize,

    /// Magnitude of the update.
    pub step: f64,
}

/// An observer that keeps every update magnitude a solver reports.
///
/// Record data by either:
///
/// - **Direct path** — Pass `&mut Recorder` as the solver observer. Works for
///   any event implementing [`HasStep`] and [`HasDegree`]; events without a
///   step (such as deflations) are skipped.
/// - **Closure path** — Wrap `&mut Recorder` in a closure and call
///   [`record`][Recorder::record] manually, e.g. to combine recording with a
///   custom stopping rule.
///
/// The recorder never returns an action.
///
/// # Example
///
/// ```rust
/// use bairstow_core::Polynomial;
/// use bairstow_observers::Recorder;
/// use bairstow_solvers::roots::lin_bairstow::{self, Config};
///
/// let polynomial = Polynomial::new(vec![24.0, -50.0, 35.0, -10.0, 1.0]).unwrap();
///
/// let mut recorder = Recorder::new();
/// let solution = lin_bairstow::solve(&polynomial, &Config::default(), &mut recorder).unwrap();
///
/// assert_eq!(recorder.len(), solution.iters);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recorder {
    samples: Vec<Sample>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single update.
    pub fn record(&mut self, degree: usize, step: f64) {
        self.samples.push(Sample { degree, step });
    }

    /// Returns every recorded sample in the order it was observed.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the update magnitudes recorded while factoring `degree`.
    pub fn steps_at(&self, degree: usize) -> impl Iterator<Item = f64> + '_ {
        self.samples
            .iter()
            .filter(move |sample| sample.degree == degree)
            .map(|sample| sample.step)
    }

    /// Returns the number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<E, A> Observer<E, A> for Recorder
where
    E: HasStep + HasDegree,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(step) = event.step() {
            self.record(event.degree(), step);
        }
        None
    }
}

/// Allows `&mut Recorder` to be passed to solvers that take an observer by
/// value, so the samples can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut Recorder
where
    E: HasStep + HasDegree,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
