//! Convexity calculations for flat-rate schedules.
//!
//! Convexity measures the curvature of the price-rate relationship,
//! capturing the second-order effect that duration misses.
//!
//! ## Formula
//!
//! Analytical convexity:
//! ```text
//! Discrete:   C = Σ(c_i × t_i × (t_i + 1) × (1 + r)^(-t_i)) / ((1 + r)² × P)
//! Continuous: C = Σ(c_i × t_i² × e^(-r t_i)) / P
//! ```
//!
//! Effective convexity:
//! ```text
//! C_eff = (P₋ + P₊ - 2×P₀) / (P₀ × Δy²)
//! ```

mod analytical;
mod effective;

pub use analytical::*;
pub use effective::*;

use serde::{Deserialize, Serialize};

/// Convexity value
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Convexity(f64);

impl Convexity {
    /// Create a new Convexity value
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the convexity as f64
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Convexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl From<f64> for Convexity {
    fn from(f: f64) -> Self {
        Self(f)
    }
}

/// Second-order estimate of the relative price change for a rate move.
///
/// # Formula
///
/// ```text
/// ΔP/P ≈ -D × Δr + (1/2) × C × (Δr)²
/// ```
///
/// `sensitivity` is the modified duration under discrete compounding and the
/// duration under continuous compounding.
///
/// # Example
///
/// ```rust
/// use tenor_risk::convexity::estimate_price_change;
///
/// let change = estimate_price_change(5.0, 50.0, 0.01);
/// assert!((change - (-0.0475)).abs() < 1e-12);
/// ```
pub fn estimate_price_change(sensitivity: f64, convexity: f64, rate_change: f64) -> f64 {
    -sensitivity * rate_change + 0.5 * convexity * rate_change.powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_estimate_price_change() {
        // Duration effect: -5 × 0.01 = -0.05
        // Convexity effect: 0.5 × 50 × 0.0001 = 0.0025
        assert_relative_eq!(estimate_price_change(5.0, 50.0, 0.01), -0.0475, epsilon = 1e-12);
    }

    #[test]
    fn test_estimate_symmetric_in_convexity() {
        let up = estimate_price_change(4.0, 30.0, 0.02);
        let down = estimate_price_change(4.0, 30.0, -0.02);

        // Convexity adds the same amount both ways
        assert_relative_eq!(up + down, 30.0 * 0.02 * 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_move() {
        assert_eq!(estimate_price_change(7.0, 60.0, 0.0), 0.0);
    }
}
