//! Yield-to-maturity calculation.
//!
//! This module provides [`YieldSolver`], which finds the flat rate `y` such
//! that:
//!
//! ```text
//! Σ c_i · DF(t_i, y) = TargetPrice
//! ```
//!
//! The search starts from the bracket `[0, 1]`, doubles the upper bound
//! while the price there is still above target, then bisects. Only
//! non-negative yields are reachable.

use tenor_core::{CashFlowSchedule, Compounding};
use tenor_math::solvers::{
    bisection, expand_upper_bound, SolverConfig, DEFAULT_MAX_BRACKET_DOUBLINGS,
    DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};

use crate::error::{PricingError, PricingResult};
use crate::pricer::FlatRatePricer;

/// Lower bound of the yield search.
pub const YIELD_LOWER_BOUND: f64 = 0.0;

/// Initial upper bound of the yield search (100%).
pub const INITIAL_YIELD_UPPER_BOUND: f64 = 1.0;

/// What to do when bisection runs out of iterations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConvergenceMode {
    /// Return the last midpoint, flagged `converged = false`, and log a warning.
    #[default]
    Lenient,
    /// Fail with [`PricingError::NonConvergence`].
    Strict,
}

/// Outcome of a yield solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldResult {
    /// The solved yield (or last midpoint if not converged).
    pub yield_value: f64,
    /// Bisection iterations used.
    pub iterations: u32,
    /// `price(yield_value) - target`.
    pub residual: f64,
    /// Whether the price tolerance was met.
    pub converged: bool,
}

/// Bracket-then-bisect yield solver.
///
/// # Example
///
/// ```rust
/// use tenor_core::{CashFlowSchedule, Compounding};
/// use tenor_pricing::{ConvergenceMode, YieldSolver};
///
/// let schedule = CashFlowSchedule::new(vec![1.0, 2.0, 3.0], vec![10.0, 10.0, 110.0]).unwrap();
///
/// let solver = YieldSolver::new(Compounding::Discrete)
///     .with_tolerance(1e-9)
///     .with_mode(ConvergenceMode::Strict);
///
/// let result = solver.solve(&schedule, 102.531).unwrap();
/// assert!(result.converged);
/// assert!((result.yield_value - 0.09).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    compounding: Compounding,
    config: SolverConfig,
    mode: ConvergenceMode,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new(Compounding::default())
    }
}

impl YieldSolver {
    /// Creates a solver with default tolerance (1e-5), iterations (200)
    /// and lenient convergence.
    #[must_use]
    pub fn new(compounding: Compounding) -> Self {
        Self {
            compounding,
            config: SolverConfig {
                tolerance: DEFAULT_TOLERANCE,
                max_iterations: DEFAULT_MAX_ITERATIONS,
                max_bracket_doublings: DEFAULT_MAX_BRACKET_DOUBLINGS,
            },
            mode: ConvergenceMode::Lenient,
        }
    }

    /// Sets the absolute price tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Sets the maximum bisection iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Sets the cap on upper-bound doublings.
    #[must_use]
    pub fn with_max_bracket_doublings(mut self, max_bracket_doublings: u32) -> Self {
        self.config.max_bracket_doublings = max_bracket_doublings;
        self
    }

    /// Sets the convergence mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ConvergenceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the whole solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the compounding convention.
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the convergence mode.
    pub fn mode(&self) -> ConvergenceMode {
        self.mode
    }

    /// Solves for the yield that reprices `schedule` to `target_price`.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidInput`] for a non-finite target or invalid config
    /// - [`PricingError::UnboundedBracketSearch`] if the doubling cap is hit,
    ///   e.g. for mixed-sign flows or a non-positive target
    /// - [`PricingError::NonConvergence`] in strict mode when iterations run out
    pub fn solve(&self, schedule: &CashFlowSchedule, target_price: f64) -> PricingResult<YieldResult> {
        if !target_price.is_finite() {
            return Err(PricingError::invalid_input(format!(
                "target price must be finite, got {target_price}"
            )));
        }
        self.config.validate()?;

        let pricer = FlatRatePricer::new(self.compounding);

        // Trial rates are never negative, so discounting cannot fail here.
        let objective = |rate: f64| {
            pricer
                .present_value(schedule, rate)
                .map_or(f64::NAN, |pv| pv - target_price)
        };

        let bracket = expand_upper_bound(
            &objective,
            YIELD_LOWER_BOUND,
            INITIAL_YIELD_UPPER_BOUND,
            &self.config,
        )?;
        let result = bisection(&objective, bracket.lower, bracket.upper, &self.config)?;

        if !result.converged {
            match self.mode {
                ConvergenceMode::Strict => {
                    return Err(PricingError::NonConvergence {
                        iterations: result.iterations,
                        estimate: result.root,
                        residual: result.residual,
                    });
                }
                ConvergenceMode::Lenient => {
                    log::warn!(
                        "yield solver did not converge after {} iterations; returning {} (residual {:e})",
                        result.iterations,
                        result.root,
                        result.residual
                    );
                }
            }
        }

        Ok(YieldResult {
            yield_value: result.root,
            iterations: result.iterations,
            residual: result.residual,
            converged: result.converged,
        })
    }
}

/// Solves for the yield with default settings.
///
/// Uses tolerance 1e-5, 200 bisection iterations and lenient convergence,
/// so a non-converged run still returns its last estimate.
///
/// # Example
///
/// ```rust
/// use tenor_core::{CashFlowSchedule, Compounding};
/// use tenor_pricing::solve_yield;
///
/// let schedule = CashFlowSchedule::new(vec![1.0, 2.0, 3.0], vec![10.0, 10.0, 110.0]).unwrap();
/// let ytm = solve_yield(&schedule, 101.464, Compounding::Continuous).unwrap();
///
/// assert!((ytm - 0.09).abs() < 1e-4);
/// ```
pub fn solve_yield(
    schedule: &CashFlowSchedule,
    target_price: f64,
    compounding: Compounding,
) -> PricingResult<f64> {
    YieldSolver::new(compounding)
        .solve(schedule, target_price)
        .map(|result| result.yield_value)
}
