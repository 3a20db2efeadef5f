//! Upward bracket expansion.

use crate::error::{MathError, MathResult};
use crate::solvers::SolverConfig;

/// A search interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound, where the objective is at or below zero.
    pub upper: f64,
    /// Doublings performed to reach `upper`.
    pub doublings: u32,
}

/// Doubles `upper` until a non-increasing `f` satisfies `f(upper) <= 0`.
///
/// The lower bound is passed through unchanged; no check is made on
/// `f(lower)`. At most `config.max_bracket_doublings` doublings are tried.
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if `upper` is not positive or not above `lower`
/// - [`MathError::UnboundedBracket`] if the cap is reached with `f(upper) > 0`
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{expand_upper_bound, SolverConfig};
///
/// let f = |x: f64| 10.0 - x;
/// let bracket = expand_upper_bound(f, 0.0, 1.0, &SolverConfig::default()).unwrap();
///
/// assert_eq!(bracket.upper, 16.0);
/// assert_eq!(bracket.doublings, 4);
/// ```
pub fn expand_upper_bound<F>(f: F, lower: f64, upper: f64, config: &SolverConfig) -> MathResult<Bracket>
where
    F: Fn(f64) -> f64,
{
    if !upper.is_finite() || upper <= 0.0 || lower.is_nan() || upper <= lower {
        return Err(MathError::invalid_input(format!(
            "upper bound {upper} must be positive, finite and above lower bound {lower}"
        )));
    }

    let mut upper = upper;
    let mut value = f(upper);
    let mut doublings = 0;

    while value > 0.0 {
        if doublings >= config.max_bracket_doublings {
            log::debug!(
                "bracket search gave up after {} doublings at upper = {:e} (f = {:e})",
                doublings,
                upper,
                value
            );
            return Err(MathError::UnboundedBracket {
                doublings,
                upper,
                value,
            });
        }
        upper *= 2.0;
        value = f(upper);
        doublings += 1;
    }

    log::debug!("bracketed root in [{}, {}] after {} doublings", lower, upper, doublings);

    Ok(Bracket {
        lower,
        upper,
        doublings,
    })
}
