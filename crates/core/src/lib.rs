//! Core types for Bairstow polynomial root finding.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Polynomial`] — a normalized sequence of real coefficients
//! - [`Factor`] — a monic linear or quadratic factor divided out by a solver
//! - [`Root`] — a real root or a complex-conjugate pair
//! - [`Observer`] — receives solver events and optionally returns control actions

mod error;
mod factor;
mod observer;
mod polynomial;
mod root;

pub use error::PolynomialError;
pub use factor::Factor;
pub use observer::Observer;
pub use polynomial::Polynomial;
pub use root::Root;
