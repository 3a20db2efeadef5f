//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection for a non-increasing objective.
///
/// Each step evaluates `f` at the midpoint of `[lower, upper]`. If
/// `|f(mid)| < tolerance` the midpoint is returned. Otherwise a positive
/// value means the root lies above `mid` (`lower = mid`), and a value at or
/// below zero means it lies at or below `mid` (`upper = mid`).
///
/// When `max_iterations` is exhausted the last midpoint is returned with
/// `converged = false`; callers decide whether that is an error.
///
/// # Errors
///
/// [`MathError::InvalidInput`] for an invalid config or `lower >= upper`.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{bisection, SolverConfig};
///
/// let f = |x: f64| 2.0 - x * x;
/// let config = SolverConfig::new(1e-12, 100);
///
/// let result = bisection(f, 1.0, 2.0, &config).unwrap();
/// assert!(result.converged);
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn bisection<F>(f: F, lower: f64, upper: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    if lower.is_nan() || upper.is_nan() || lower >= upper {
        return Err(MathError::invalid_input(format!(
            "bisection needs lower < upper, got [{lower}, {upper}]"
        )));
    }

    let mut lo = lower;
    let mut hi = upper;
    let mut mid = lo;
    let mut residual = f64::NAN;

    for iteration in 0..config.max_iterations {
        mid = (lo + hi) / 2.0;
        residual = f(mid);

        if residual.abs() < config.tolerance {
            log::debug!(
                "bisection converged to {} after {} iterations (residual {:e})",
                mid,
                iteration + 1,
                residual
            );
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual,
                converged: true,
            });
        }

        if residual > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    log::debug!(
        "bisection exhausted {} iterations at {} (residual {:e})",
        config.max_iterations,
        mid,
        residual
    );

    Ok(SolverResult {
        root: mid,
        iterations: config.max_iterations,
        residual,
        converged: false,
    })
}
