//! Root-finding algorithms.
//!
//! This module provides the two halves of a bracket-then-bisect search:
//!
//! - [`expand_upper_bound`]: doubles an upper bound until a non-increasing
//!   objective drops to zero or below, with a hard cap on doublings
//! - [`bisection`]: halves the bracket until `|f(mid)| < tolerance`
//!
//! # Example: YTM of a 3-year annual bond
//!
//! ```rust
//! use tenor_math::solvers::{bisection, expand_upper_bound, SolverConfig};
//!
//! let price = |y: f64| 10.0 / (1.0 + y) + 10.0 / (1.0 + y).powi(2) + 110.0 / (1.0 + y).powi(3);
//! let objective = |y: f64| price(y) - 102.531;
//! let config = SolverConfig::default();
//!
//! let bracket = expand_upper_bound(&objective, 0.0, 1.0, &config).unwrap();
//! let result = bisection(&objective, bracket.lower, bracket.upper, &config).unwrap();
//!
//! assert!(result.converged);
//! assert!((result.root - 0.09).abs() < 1e-4);
//! ```

mod bisection;
mod bracket;

pub use bisection::bisection;
pub use bracket::{expand_upper_bound, Bracket};

use crate::error::{MathError, MathResult};

/// Default absolute tolerance on the objective value.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Default maximum bisection iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

/// Default cap on bracket doublings.
pub const DEFAULT_MAX_BRACKET_DOUBLINGS: u32 = 64;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance on `|f(x)|`.
    pub tolerance: f64,
    /// Maximum number of bisection iterations.
    pub max_iterations: u32,
    /// Maximum number of upper-bound doublings while bracketing.
    pub max_bracket_doublings: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_bracket_doublings: DEFAULT_MAX_BRACKET_DOUBLINGS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with the default doubling cap.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            max_bracket_doublings: DEFAULT_MAX_BRACKET_DOUBLINGS,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the bracket doubling cap.
    #[must_use]
    pub fn with_max_bracket_doublings(mut self, max_bracket_doublings: u32) -> Self {
        self.max_bracket_doublings = max_bracket_doublings;
        self
    }

    /// Checks that the configuration can drive a search.
    pub fn validate(&self) -> MathResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

/// Result of a root-finding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found, or the last midpoint when not converged.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Objective value at `root`.
    pub residual: f64,
    /// Whether `|residual| < tolerance` was reached.
    pub converged: bool,
}
