//! Solvers that find every root of a polynomial.
//!
//! Solvers in this module take a normalized [`Polynomial`] and return its
//! roots in the order their factors were divided out.
//!
//! # Solvers
//!
//! - [`lin_bairstow`] — quadratic-factor extraction with real arithmetic only
//!
//! [`Polynomial`]: bairstow_core::Polynomial

pub mod lin_bairstow;
