use bairstow_core::{Factor, Observer};
use log::{trace, warn};

use super::{Action, Config, Error, Event, Outcome, division::Division};

/// Update applied to `(u, v)` when the Jacobian is singular.
///
/// This is a fixed perturbation, not a convergent correction; a polynomial
/// that keeps landing on a singular Jacobian fails with `ConvergenceFailure`
/// once the iteration bound is reached.
const SINGULAR_STEP: (f64, f64) = (1.0, 1.0);

/// Refines a quadratic factor `x² − u·x − v` of `a` (degree ≥ 4), starting
/// from `u = v = 0`.
///
/// On convergence `division` holds the synthetic division by the factor as it
/// was before the final update, ready for deflation.
///
/// # Errors
///
/// Returns `Error::ConvergenceFailure` if the step does not fall within
/// tolerance in `config.max_iters()` updates, or if `u` or `v` becomes
/// non-finite.
pub(super) fn extract<Obs>(
    a: &[f64],
    division: &mut Division,
    config: &Config,
    observer: &mut Obs,
) -> Result<Outcome, Error>
where
    Obs: Observer<Event, Action>,
{
    let degree = a.len() - 1;
    let (mut u, mut v) = (0.0, 0.0);

    for iter in 1..=config.max_iters() {
        division.by_quadratic(a, u, v);

        let (du, dv) = division.bairstow_update().unwrap_or_else(|| {
            warn!("singular Jacobian at degree {degree} (u = {u}, v = {v}), applying unit step");
            SINGULAR_STEP
        });

        u += du;
        v += dv;
        let step = (du * du + dv * dv).sqrt();

        if !u.is_finite() || !v.is_finite() {
            return Err(Error::ConvergenceFailure {
                degree,
                estimate: Factor::Quadratic { u, v },
                iters: iter,
            });
        }

        trace!("degree {degree} iter {iter}: u = {u}, v = {v}, step = {step}");

        let event = Event::FactorStep {
            degree,
            iter,
            u,
            v,
            step,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Outcome::Stopped { iters: iter });
        }

        if step <= config.epsilon() {
            return Ok(Outcome::Converged {
                factor: Factor::Quadratic { u, v },
                iters: iter,
            });
        }
    }

    Err(Error::ConvergenceFailure {
        degree,
        estimate: Factor::Quadratic { u, v },
        iters: config.max_iters(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const QUARTIC: [f64; 5] = [24.0, -50.0, 35.0, -10.0, 1.0];

    #[test]
    fn converges_to_an_exact_factor() {
        let mut division = Division::with_degree(4);

        let outcome =
            extract(&QUARTIC, &mut division, &Config::default(), &mut ()).expect("converges");

        let Outcome::Converged {
            factor: Factor::Quadratic { u, v },
            ..
        } = outcome
        else {
            panic!("expected a converged quadratic factor, got {outcome:?}");
        };

        // From (0, 0) the iteration lands on (x − 1)(x − 4) = x² − 5x + 4.
        assert_relative_eq!(u, 5.0, epsilon = 1e-9);
        assert_relative_eq!(v, -4.0, epsilon = 1e-9);
    }

    #[test]
    fn observer_sees_every_update() {
        let mut division = Division::with_degree(4);
        let mut iters = Vec::new();
        let mut observer = |event: &Event| {
            iters.push(event.degree());
            None
        };

        let outcome = extract(&QUARTIC, &mut division, &Config::default(), &mut observer)
            .expect("converges");

        let Outcome::Converged { iters: used, .. } = outcome else {
            panic!("expected convergence");
        };
        assert_eq!(iters.len(), used);
        assert!(iters.iter().all(|&degree| degree == 4));
    }

    #[test]
    fn observer_can_stop() {
        let mut division = Division::with_degree(4);
        let mut observer = |event: &Event| match event {
            Event::FactorStep { iter: 2, .. } => Some(Action::StopEarly),
            _ => None,
        };

        let outcome = extract(&QUARTIC, &mut division, &Config::default(), &mut observer)
            .expect("stops cleanly");

        assert_eq!(outcome, Outcome::Stopped { iters: 2 });
    }

    #[test]
    fn fails_when_bound_is_too_small() {
        let mut division = Division::with_degree(4);
        let config = Config::new(3, 1e-8).expect("valid config");

        let err = extract(&QUARTIC, &mut division, &config, &mut ()).expect_err("too few iters");

        assert!(matches!(
            err,
            Error::ConvergenceFailure {
                degree: 4,
                estimate: Factor::Quadratic { .. },
                iters: 3,
            }
        ));
    }
}
