//! Compounding conventions and discount factors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Interest compounding convention for a flat rate.
///
/// Fixed for the lifetime of a single pricing computation and threaded
/// through discounting, pricing and risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Compounding {
    /// Discrete annual compounding: `DF = (1 + r)^(-t)`
    #[default]
    Discrete,
    /// Continuous compounding: `DF = exp(-r t)`
    Continuous,
}

impl Compounding {
    /// Returns the discount factor for `time` years at a flat `rate`.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidRate`] for discrete compounding when `1 + rate <= 0`,
    /// where the power is undefined.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tenor_core::types::Compounding;
    ///
    /// let df_discrete = Compounding::Discrete.discount_factor(0.05, 2.0).unwrap();
    /// let df_continuous = Compounding::Continuous.discount_factor(0.05, 2.0).unwrap();
    ///
    /// // Continuous compounding discounts harder at the same quoted rate
    /// assert!(df_continuous < df_discrete);
    /// assert!(Compounding::Discrete.discount_factor(-1.0, 1.0).is_err());
    /// ```
    pub fn discount_factor(&self, rate: f64, time: f64) -> CoreResult<f64> {
        match self {
            Compounding::Discrete => {
                let base = 1.0 + rate;
                if base <= 0.0 || base.is_nan() {
                    return Err(CoreError::invalid_rate(rate));
                }
                if time == 0.0 {
                    return Ok(1.0);
                }
                Ok(base.powf(-time))
            }
            Compounding::Continuous if time == 0.0 => Ok(1.0),
            Compounding::Continuous => Ok((-rate * time).exp()),
        }
    }

    /// Returns true if this is continuous compounding.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        matches!(self, Compounding::Continuous)
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compounding::Discrete => "Discrete",
            Compounding::Continuous => "Continuous",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Compounding {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discrete" | "annual" => Ok(Compounding::Discrete),
            "continuous" => Ok(Compounding::Continuous),
            other => Err(CoreError::UnknownCompounding {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_discrete() {
        let df = Compounding::Discrete.discount_factor(0.09, 3.0).unwrap();
        assert_relative_eq!(df, 1.0 / 1.09_f64.powi(3), epsilon = 1e-14);
    }

    #[test]
    fn test_discount_factor_continuous() {
        let df = Compounding::Continuous.discount_factor(0.05, 1.0).unwrap();
        // DF = e^(-0.05) ≈ 0.9512
        assert_relative_eq!(df, (-0.05_f64).exp(), epsilon = 1e-14);
    }

    #[test]
    fn test_zero_time_returns_one() {
        for compounding in [Compounding::Discrete, Compounding::Continuous] {
            assert_eq!(compounding.discount_factor(0.05, 0.0).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_discrete_rejects_rate_at_or_below_minus_one() {
        assert_eq!(
            Compounding::Discrete.discount_factor(-1.0, 1.0),
            Err(CoreError::InvalidRate { rate: -1.0 })
        );
        assert!(Compounding::Discrete.discount_factor(-2.5, 1.0).is_err());
        assert!(Compounding::Discrete.discount_factor(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_rate_domain_checked_at_time_zero() {
        assert_eq!(
            Compounding::Discrete.discount_factor(-2.0, 0.0),
            Err(CoreError::InvalidRate { rate: -2.0 })
        );
        assert_eq!(Compounding::Continuous.discount_factor(-2.0, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_continuous_accepts_any_rate() {
        let df = Compounding::Continuous.discount_factor(-2.5, 1.0).unwrap();
        assert_relative_eq!(df, 2.5_f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_negative_rate_discrete() {
        let df = Compounding::Discrete.discount_factor(-0.01, 2.0).unwrap();
        assert!(df > 1.0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("discrete".parse::<Compounding>().unwrap(), Compounding::Discrete);
        assert_eq!("Continuous".parse::<Compounding>().unwrap(), Compounding::Continuous);
        assert!("monthly".parse::<Compounding>().is_err());
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(Compounding::default(), Compounding::Discrete);
        assert_eq!(format!("{}", Compounding::Continuous), "Continuous");
    }
}
