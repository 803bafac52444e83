use bairstow_core::{Factor, Observer};
use log::{trace, warn};

use super::{Action, Config, Error, Event, Outcome, division::Division};

/// Update applied to `r` when the derivative vanishes.
const FLAT_STEP: f64 = 1.0;

/// Finds one real root of the cubic `a` with Newton–Raphson, starting from
/// `r = 0`.
///
/// On convergence `division` holds the synthetic division by `x − r` as it
/// was before the final update, ready for deflation.
///
/// # Errors
///
/// Returns `Error::ConvergenceFailure` if the step does not fall within
/// tolerance in `config.max_iters()` updates, or if `r` becomes non-finite.
pub(super) fn extract<Obs>(
    a: &[f64],
    division: &mut Division,
    config: &Config,
    observer: &mut Obs,
) -> Result<Outcome, Error>
where
    Obs: Observer<Event, Action>,
{
    debug_assert_eq!(a.len(), 4, "cubic reduction needs exactly four coefficients");

    let degree = a.len() - 1;
    let mut r = 0.0;

    for iter in 1..=config.max_iters() {
        division.by_linear(a, r);
        let slope = a[1] + 2.0 * a[2] * r + 3.0 * a[3] * r * r;

        #[allow(clippy::float_cmp)]
        let dr = if slope == 0.0 {
            warn!("zero derivative at r = {r}, applying unit step");
            FLAT_STEP
        } else {
            -division.value() / slope
        };

        r += dr;
        let step = dr.abs();

        if !r.is_finite() {
            return Err(Error::ConvergenceFailure {
                degree,
                estimate: Factor::Linear { r },
                iters: iter,
            });
        }

        trace!("degree {degree} iter {iter}: r = {r}, step = {step}");

        let event = Event::RootStep {
            degree,
            iter,
            r,
            step,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Outcome::Stopped { iters: iter });
        }

        if step <= config.epsilon() {
            return Ok(Outcome::Converged {
                factor: Factor::Linear { r },
                iters: iter,
            });
        }
    }

    Err(Error::ConvergenceFailure {
        degree,
        estimate: Factor::Linear { r },
        iters: config.max_iters(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn converged_root(a: &[f64]) -> f64 {
        let mut division = Division::with_degree(3);
        match extract(a, &mut division, &Config::default(), &mut ()) {
            Ok(Outcome::Converged {
                factor: Factor::Linear { r },
                ..
            }) => r,
            other => panic!("expected a converged root, got {other:?}"),
        }
    }

    #[test]
    fn finds_root_nearest_zero() {
        // (x − 1)(x − 2)(x − 3)
        let r = converged_root(&[-6.0, 11.0, -6.0, 1.0]);
        assert_relative_eq!(r, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn flat_start_takes_unit_step() {
        // x³ − 1 has f'(0) = 0, so the first update is the fixed unit step.
        let mut first_r = None;
        let mut observer = |event: &Event| {
            if let Event::RootStep { iter: 1, r, .. } = *event {
                first_r = Some(r);
            }
            None
        };
        let mut division = Division::with_degree(3);

        let outcome = extract(
            &[-1.0, 0.0, 0.0, 1.0],
            &mut division,
            &Config::default(),
            &mut observer,
        )
        .expect("converges");

        assert_eq!(first_r, Some(1.0));
        assert!(matches!(
            outcome,
            Outcome::Converged {
                factor: Factor::Linear { .. },
                ..
            }
        ));
    }

    #[test]
    fn fails_when_bound_is_too_small() {
        let mut division = Division::with_degree(3);
        let config = Config::new(1, 1e-8).expect("valid config");

        let err = extract(&[-6.0, 11.0, -6.0, 1.0], &mut division, &config, &mut ())
            .expect_err("one update is not enough");

        assert!(matches!(
            err,
            Error::ConvergenceFailure {
                degree: 3,
                estimate: Factor::Linear { .. },
                iters: 1,
            }
        ));
    }
}
