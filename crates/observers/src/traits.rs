//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and used with any solver whose events and
//! actions provide the capabilities it needs.
//!
//! # Event traits
//!
//! - [`HasStep`] — events that may carry an update magnitude
//! - [`HasDegree`] — events tied to the degree being factored
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use bairstow_core::Observer;
//! use bairstow_observers::traits::{CanStopEarly, HasStep};
//!
//! /// Stops once any single update is smaller than `tolerance`.
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasStep, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         match event.step() {
//!             Some(step) if step < self.tolerance => Some(A::stop_early()),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use bairstow_solvers::roots::lin_bairstow;

/// An event that may carry the magnitude of an iterative update.
pub trait HasStep {
    /// Returns the update magnitude, or `None` if the event is not an update.
    fn step(&self) -> Option<f64>;
}

/// An event tied to the degree of the polynomial being factored.
pub trait HasDegree {
    /// Returns the degree carried by this event.
    fn degree(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- lin_bairstow ---

impl HasStep for lin_bairstow::Event {
    fn step(&self) -> Option<f64> {
        lin_bairstow::Event::step(self)
    }
}

impl HasDegree for lin_bairstow::Event {
    fn degree(&self) -> usize {
        lin_bairstow::Event::degree(self)
    }
}

impl CanStopEarly for lin_bairstow::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bairstow_core::{Factor, Observer, Polynomial};
    use bairstow_solvers::roots::lin_bairstow::{Action, Config, Event, Status, solve};

    /// Stops as soon as a deflation leaves `degree` or less.
    struct StopAtDegree {
        degree: usize,
        saw_update: bool,
    }

    impl<E: HasStep + HasDegree, A: CanStopEarly> Observer<E, A> for StopAtDegree {
        fn observe(&mut self, event: &E) -> Option<A> {
            if event.step().is_some() {
                self.saw_update = true;
                return None;
            }
            (event.degree() <= self.degree).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_drives_lin_bairstow() {
        let polynomial =
            Polynomial::new(vec![720.0, -1764.0, 1624.0, -735.0, 175.0, -21.0, 1.0])
                .expect("valid polynomial");
        let mut observer = StopAtDegree {
            degree: 4,
            saw_update: false,
        };

        let solution = solve(&polynomial, &Config::default(), |event: &Event| {
            Observer::<Event, Action>::observe(&mut observer, event)
        })
        .expect("should stop cleanly");

        assert!(observer.saw_update);
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.remainder.degree(), 4);
        assert_eq!(solution.root_count(), 2);
    }

    #[test]
    fn event_capabilities_match_inherent_methods() {
        let step = Event::RootStep {
            degree: 3,
            iter: 1,
            r: 0.5,
            step: 0.5,
        };
        assert_eq!(HasStep::step(&step), Some(0.5));
        assert_eq!(HasDegree::degree(&step), 3);

        let deflated = Event::Deflated {
            degree: 2,
            factor: Factor::Linear { r: 0.5 },
        };
        assert_eq!(HasStep::step(&deflated), None);
        assert_eq!(Action::stop_early(), Action::StopEarly);
    }
}
