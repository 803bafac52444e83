//! Lin–Bairstow root finding for real polynomials.
//!
//! # Algorithm
//!
//! While the polynomial has degree above three, the solver refines a trial
//! factor `x² − u·x − v` from `u = v = 0` with Bairstow's two-variable Newton
//! iteration, emits that factor's two roots, and divides it out. A remaining
//! cubic is reduced by one real root found with Newton–Raphson from `r = 0`.
//! The final quadratic or linear factor is solved in closed form.
//!
//! Roots are reported in extraction order. Quadratic factors with a negative
//! discriminant yield a [`Root::ComplexPair`]; all others yield real roots,
//! the larger first.
//!
//! # Limitations
//!
//! - **No polishing**: deflation error accumulates across extracted factors.
//! - **Fixed start**: every search starts at the origin, so convergence is not
//!   guaranteed for ill-conditioned or clustered roots.
//! - **Singular Jacobian**: when the update's determinant (or the cubic's
//!   derivative) is exactly zero, a fixed unit step is taken instead. This can
//!   cycle, which the iteration bound in [`Config`] turns into
//!   [`Error::ConvergenceFailure`].
//!
//! # Observer Events
//!
//! - [`Event::FactorStep`] — after each Bairstow update
//! - [`Event::RootStep`] — after each cubic Newton update
//! - [`Event::Deflated`] — after each factor is divided out
//!
//! Observers can return [`Action::StopEarly`] to halt with the roots found so
//! far; the unfactored part is returned as [`Solution::remainder`].
//!
//! [`Root::ComplexPair`]: bairstow_core::Root::ComplexPair

mod action;
mod closed_form;
mod config;
mod cubic;
mod division;
mod error;
mod event;
mod quadratic;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use bairstow_core::{Factor, Observer, Polynomial, PolynomialError};
use log::debug;

use state::State;

/// How a single factor search ended.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Outcome {
    /// The step fell within tolerance.
    Converged { factor: Factor, iters: usize },

    /// The observer asked to stop.
    Stopped { iters: usize },
}

/// Finds all roots of `polynomial`.
///
/// The observer receives an [`Event`] for every update and deflation.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns [`Error::InvalidPolynomial`] for a constant polynomial, or
/// [`Error::ConvergenceFailure`] if a factor search exceeds
/// [`Config::max_iters`] or diverges. No partial roots are returned on error.
pub fn solve<Obs>(
    polynomial: &Polynomial,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let mut state = State::new(polynomial)?;
    debug!("solving degree {} polynomial: {polynomial}", state.degree());

    while state.degree() > 3 {
        let outcome = quadratic::extract(
            &state.coefficients,
            &mut state.division,
            config,
            &mut observer,
        )?;
        if apply(&mut state, outcome, &mut observer) {
            return state.into_solution(Status::StoppedByObserver);
        }
    }

    if state.degree() == 3 {
        let outcome =
            cubic::extract(&state.coefficients, &mut state.division, config, &mut observer)?;
        if apply(&mut state, outcome, &mut observer) {
            return state.into_solution(Status::StoppedByObserver);
        }
    }

    let factor = match state.degree() {
        2 => closed_form::quadratic(&state.coefficients)?,
        1 => closed_form::linear(&state.coefficients)?,
        _ => return Err(PolynomialError::Constant.into()),
    };
    state.finish_with(factor);

    // Nothing is left to stop, so the action is ignored.
    let _ = observer.observe(&Event::Deflated { degree: 0, factor });

    state.into_solution(Status::Complete)
}

/// Finds all roots of `polynomial` without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved(polynomial: &Polynomial, config: &Config) -> Result<Solution, Error> {
    solve(polynomial, config, ())
}

/// Folds a factor search outcome into the state.
///
/// Returns true if the solve should stop early.
fn apply<Obs>(state: &mut State, outcome: Outcome, observer: &mut Obs) -> bool
where
    Obs: Observer<Event, Action>,
{
    match outcome {
        Outcome::Stopped { iters } => {
            state.add_iters(iters);
            true
        }
        Outcome::Converged { factor, iters } => {
            state.add_iters(iters);
            state.deflate(factor);
            let event = Event::Deflated {
                degree: state.degree(),
                factor,
            };
            matches!(observer.observe(&event), Some(Action::StopEarly))
        }
    }
}
