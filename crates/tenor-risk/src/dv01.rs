//! DV01 (Dollar Value of 01) calculations.
//!
//! DV01, also known as PV01 or PVBP (Price Value of a Basis Point),
//! measures the absolute price change for a 1 basis point change in rate.
//!
//! ## Formula
//!
//! ```text
//! DV01 = Modified Duration × Price × 0.0001
//! ```

use serde::{Deserialize, Serialize};

use tenor_core::{CashFlowSchedule, Compounding};
use tenor_pricing::FlatRatePricer;

use crate::duration::{modified_from_macaulay, Duration};
use crate::error::is_zero_price;
use crate::{RiskError, RiskResult};

/// One basis point as a decimal rate.
pub const BASIS_POINT: f64 = 0.0001;

/// DV01 value (price change per basis point)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DV01(f64);

impl DV01 {
    /// Create a new DV01 value
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the DV01 as f64
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for DV01 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl From<f64> for DV01 {
    fn from(f: f64) -> Self {
        Self(f)
    }
}

/// Calculate DV01 from modified duration and price.
pub fn dv01_from_duration(modified_duration: Duration, price: f64) -> DV01 {
    DV01::from(modified_duration.as_f64() * price * BASIS_POINT)
}

/// Calculate DV01 from prices bumped by `bump_bps` basis points each way.
///
/// Averages the up and down moves and scales to one basis point.
pub fn dv01_from_prices(price_up: f64, price_down: f64, bump_bps: f64) -> RiskResult<DV01> {
    if bump_bps.abs() < 1e-8 {
        return Err(RiskError::InvalidInput("bump size too small".to_string()));
    }
    Ok(DV01::from((price_down - price_up) / (2.0 * bump_bps)))
}

/// Calculate DV01 of a schedule at a flat rate.
///
/// # Example
///
/// ```rust
/// use tenor_core::{CashFlowSchedule, Compounding};
/// use tenor_risk::dv01::dv01;
///
/// let schedule = CashFlowSchedule::new(vec![1.0, 2.0, 3.0], vec![10.0, 10.0, 110.0]).unwrap();
/// let value = dv01(&schedule, 0.09, Compounding::Discrete).unwrap();
///
/// assert!((value.as_f64() - 0.02576).abs() < 1e-5);
/// ```
pub fn dv01(schedule: &CashFlowSchedule, rate: f64, compounding: Compounding) -> RiskResult<DV01> {
    let (price, weighted_time) = FlatRatePricer::new(compounding).pv_weighted_time(schedule, rate)?;

    if is_zero_price(price) {
        return Err(RiskError::division_by_zero("dv01: price is zero"));
    }

    let modified = modified_from_macaulay(Duration::from(weighted_time / price), rate, compounding);
    Ok(dv01_from_duration(modified, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::bumped_prices;
    use approx::assert_relative_eq;

    #[test]
    fn test_dv01_from_duration() {
        // ModDur = 5, Price = 100 → 5 × 100 × 0.0001 = 0.05
        let dv01 = dv01_from_duration(Duration::from(5.0), 100.0);
        assert_relative_eq!(dv01.as_f64(), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_dv01_from_prices() {
        let dv01 = dv01_from_prices(99.95, 100.05, 1.0).unwrap();
        assert_relative_eq!(dv01.as_f64(), 0.05, epsilon = 1e-10);

        assert!(dv01_from_prices(99.95, 100.05, 0.0).is_err());
    }

    #[test]
    fn test_dv01_matches_bumped() {
        let schedule =
            CashFlowSchedule::new(vec![1.0, 2.0, 3.0], vec![10.0, 10.0, 110.0]).unwrap();

        for compounding in [Compounding::Discrete, Compounding::Continuous] {
            let analytic = dv01(&schedule, 0.09, compounding).unwrap();
            let prices = bumped_prices(&schedule, 0.09, compounding, BASIS_POINT).unwrap();
            let bumped = dv01_from_prices(prices.up, prices.down, 1.0).unwrap();

            assert_relative_eq!(analytic.as_f64(), bumped.as_f64(), epsilon = 1e-7);
        }
    }

    #[test]
    fn test_dv01_empty_schedule() {
        let result = dv01(&CashFlowSchedule::empty(), 0.05, Compounding::Discrete);
        assert!(matches!(result, Err(RiskError::DivisionByZero { .. })));
    }
}
