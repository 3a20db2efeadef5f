//! Error types for pricing and yield solving.

use thiserror::Error;

use tenor_core::CoreError;
use tenor_math::MathError;

/// Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors that can occur during pricing calculations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    /// Discounting or schedule error from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Yield solver exhausted its iterations in strict mode.
    #[error(
        "yield solver did not converge after {iterations} iterations (estimate {estimate}, residual {residual:e})"
    )]
    NonConvergence {
        /// Iterations performed.
        iterations: u32,
        /// Last midpoint tried.
        estimate: f64,
        /// Price error at the last midpoint.
        residual: f64,
    },

    /// No non-negative rate brings the price down to the target.
    #[error(
        "no rate prices at or below target after {doublings} doublings (upper bound {upper:e}, excess {excess:e})"
    )]
    UnboundedBracketSearch {
        /// Doublings performed.
        doublings: u32,
        /// Last upper bound tried.
        upper: f64,
        /// Price minus target at the last upper bound.
        excess: f64,
    },

    /// Invalid input parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PricingError {
    /// Creates a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<MathError> for PricingError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::UnboundedBracket {
                doublings,
                upper,
                value,
            } => PricingError::UnboundedBracketSearch {
                doublings,
                upper,
                excess: value,
            },
            MathError::InvalidInput { reason } => PricingError::InvalidInput(reason),
        }
    }
}
