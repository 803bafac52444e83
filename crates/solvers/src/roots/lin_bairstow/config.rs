use thiserror::Error;

/// Configuration for the Lin–Bairstow solver.
///
/// Both the Bairstow iteration and the cubic Newton–Raphson reduction stop
/// once a step's magnitude is at most `epsilon`, and fail once they run
/// `max_iters` updates without doing so.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    epsilon: f64,
}

/// Errors that can occur when validating a Lin–Bairstow solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("epsilon must be finite and non-negative")]
    Epsilon,
}

impl Config {
    /// Iteration bound applied to each extracted factor.
    pub const DEFAULT_MAX_ITERS: usize = 500;

    /// Step-size tolerance used by the classical formulation.
    pub const DEFAULT_EPSILON: f64 = 1e-8;

    /// Creates a new config with a validated bound and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `epsilon` is negative or
    /// non-finite.
    pub fn new(max_iters: usize, epsilon: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self { max_iters, epsilon })
    }

    /// Returns the maximum number of updates per extracted factor.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the step-size tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: Self::DEFAULT_MAX_ITERS,
            epsilon: Self::DEFAULT_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 500);
        assert!((config.epsilon() - 1e-8).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Config::new(0, 1e-8), Err(ConfigError::MaxIters));
    }

    #[test]
    fn rejects_bad_epsilon() {
        assert_eq!(Config::new(10, -1e-8), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::Epsilon));
    }

    #[test]
    fn accepts_zero_epsilon() {
        let config = Config::new(10, 0.0).expect("zero tolerance is valid");
        assert_eq!(config.max_iters(), 10);
    }
}
