//! Logging observer.

use std::fmt::Debug;

use bairstow_core::Observer;
use log::Level;

/// Log target used for every observed event.
pub const EVENT_TARGET: &str = "bairstow::events";

/// An observer that writes every event to the [`log`] facade.
///
/// Events are formatted with their `Debug` representation under the
/// [`EVENT_TARGET`] target at the configured level, so they can be filtered with
/// `RUST_LOG=bairstow::events=trace` independently of solver diagnostics.
/// The observer never returns an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level events are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Trace)
    }
}

impl<E: Debug, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        log::log!(target: EVENT_TARGET, self.level, "{event:?}");
        None
    }
}
