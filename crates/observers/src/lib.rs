//! Reusable observers for the Bairstow solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work with any solver event exposing the right capabilities.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasStep`], [`HasDegree`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — writes every event to the `log` facade
//! - [`Recorder`] — keeps a per-iteration trace for later inspection
//!
//! [`Observer`]: bairstow_core::Observer
//! [`HasStep`]: traits::HasStep
//! [`HasDegree`]: traits::HasDegree
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logger;
mod recorder;

pub use logger::{EVENT_TARGET, LogObserver};
pub use recorder::{Recorder, Sample};
