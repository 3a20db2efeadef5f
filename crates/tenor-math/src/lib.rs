//! # Tenor Math
//!
//! Numerical root-finding for the Tenor fixed income library.
//!
//! This crate provides:
//!
//! - **Bracketing**: Upward expansion of a search interval by doubling
//! - **Bisection**: Interval halving with an absolute residual tolerance
//!
//! Both are written for non-increasing objectives, which is the shape of
//! `price(rate) - target` for a schedule of non-negative cash flows.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{bisection, expand_upper_bound, Bracket, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
