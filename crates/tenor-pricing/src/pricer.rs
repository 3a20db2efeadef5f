//! Present value under a flat rate.
//!
//! This module provides [`present_value`] and the [`FlatRatePricer`] struct,
//! which binds a compounding convention and also exposes the per-flow
//! discounting used by the risk measures.

use tenor_core::{CashFlowSchedule, Compounding};

use crate::error::PricingResult;

/// Present value of a schedule at a flat rate.
///
/// `PV = Σ c_i · DF(t_i, r)`. The empty schedule prices to `0.0`.
///
/// # Errors
///
/// Propagates [`CoreError::InvalidRate`](tenor_core::CoreError::InvalidRate)
/// for discrete compounding with `1 + rate <= 0`.
///
/// # Example
///
/// ```rust
/// use tenor_core::{CashFlowSchedule, Compounding};
/// use tenor_pricing::present_value;
///
/// let schedule = CashFlowSchedule::new(vec![1.0, 2.0, 3.0], vec![10.0, 10.0, 110.0]).unwrap();
///
/// let discrete = present_value(&schedule, 0.09, Compounding::Discrete).unwrap();
/// let continuous = present_value(&schedule, 0.09, Compounding::Continuous).unwrap();
///
/// assert!((discrete - 102.531).abs() < 1e-3);
/// assert!((continuous - 101.464).abs() < 1e-3);
/// ```
pub fn present_value(
    schedule: &CashFlowSchedule,
    rate: f64,
    compounding: Compounding,
) -> PricingResult<f64> {
    FlatRatePricer::new(compounding).present_value(schedule, rate)
}

/// A cash flow with its discount factor at a given rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountedFlow {
    /// Time to payment in years.
    pub time: f64,
    /// Undiscounted amount.
    pub amount: f64,
    /// Discount factor at `time`.
    pub discount_factor: f64,
}

impl DiscountedFlow {
    /// Returns `amount × discount_factor`.
    #[must_use]
    pub fn present_value(&self) -> f64 {
        self.amount * self.discount_factor
    }
}

/// Flat-rate pricer for a fixed compounding convention.
///
/// # Example
///
/// ```rust
/// use tenor_core::{CashFlowSchedule, Compounding};
/// use tenor_pricing::FlatRatePricer;
///
/// let schedule = CashFlowSchedule::new(vec![1.0, 2.0], vec![5.0, 105.0]).unwrap();
/// let pricer = FlatRatePricer::new(Compounding::Continuous);
///
/// let (pv, weighted_time) = pricer.pv_weighted_time(&schedule, 0.05).unwrap();
/// assert!(weighted_time / pv > 1.9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatRatePricer {
    compounding: Compounding,
}

impl FlatRatePricer {
    /// Creates a pricer for the given convention.
    #[must_use]
    pub fn new(compounding: Compounding) -> Self {
        Self { compounding }
    }

    /// Returns the compounding convention.
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Discounts every flow of the schedule at `rate`.
    pub fn discounted_flows(
        &self,
        schedule: &CashFlowSchedule,
        rate: f64,
    ) -> PricingResult<Vec<DiscountedFlow>> {
        schedule
            .iter()
            .map(|cf| {
                let discount_factor = self.compounding.discount_factor(rate, cf.time())?;
                Ok(DiscountedFlow {
                    time: cf.time(),
                    amount: cf.amount(),
                    discount_factor,
                })
            })
            .collect()
    }

    /// Calculates the present value at `rate`.
    pub fn present_value(&self, schedule: &CashFlowSchedule, rate: f64) -> PricingResult<f64> {
        let mut pv = 0.0;
        for cf in schedule {
            pv += cf.amount() * self.compounding.discount_factor(rate, cf.time())?;
        }
        Ok(pv)
    }

    /// Returns `(Σ c_i DF_i, Σ t_i c_i DF_i)` in a single pass.
    ///
    /// The ratio of the two is the PV-weighted average time to payment.
    pub fn pv_weighted_time(
        &self,
        schedule: &CashFlowSchedule,
        rate: f64,
    ) -> PricingResult<(f64, f64)> {
        let mut pv = 0.0;
        let mut weighted = 0.0;
        for cf in schedule {
            let discounted = cf.amount() * self.compounding.discount_factor(rate, cf.time())?;
            pv += discounted;
            weighted += cf.time() * discounted;
        }
        Ok((pv, weighted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;
    use approx::assert_relative_eq;
    use tenor_core::CoreError;

    fn three_year_bond() -> CashFlowSchedule {
        CashFlowSchedule::new(vec![1.0, 2.0, 3.0], vec![10.0, 10.0, 110.0]).unwrap()
    }

    #[test]
    fn test_discrete_price() {
        let price = present_value(&three_year_bond(), 0.09, Compounding::Discrete).unwrap();
        let expected = 10.0 / 1.09 + 10.0 / 1.09_f64.powi(2) + 110.0 / 1.09_f64.powi(3);

        assert_relative_eq!(price, expected, epsilon = 1e-12);
        assert_relative_eq!(price, 102.531, epsilon = 1e-3);
    }

    #[test]
    fn test_continuous_price() {
        let schedule = three_year_bond();

        let at_9 = present_value(&schedule, 0.09, Compounding::Continuous).unwrap();
        let at_8 = present_value(&schedule, 0.08, Compounding::Continuous).unwrap();

        assert_relative_eq!(at_9, 101.464, epsilon = 1e-3);
        assert_relative_eq!(at_8, 104.282, epsilon = 1e-3);
    }

    #[test]
    fn test_empty_schedule_prices_to_zero() {
        let schedule = CashFlowSchedule::empty();

        for compounding in [Compounding::Discrete, Compounding::Continuous] {
            assert_eq!(present_value(&schedule, 0.05, compounding).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_zero_rate_prices_to_total() {
        let schedule = three_year_bond();
        assert_relative_eq!(
            present_value(&schedule, 0.0, Compounding::Discrete).unwrap(),
            130.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_invalid_discrete_rate() {
        let result = present_value(&three_year_bond(), -1.0, Compounding::Discrete);
        assert_eq!(
            result,
            Err(PricingError::Core(CoreError::InvalidRate { rate: -1.0 }))
        );
    }

    #[test]
    fn test_pv_weighted_time_matches_flows() {
        let pricer = FlatRatePricer::new(Compounding::Discrete);
        let schedule = three_year_bond();

        let (pv, weighted) = pricer.pv_weighted_time(&schedule, 0.09).unwrap();
        let flows = pricer.discounted_flows(&schedule, 0.09).unwrap();

        let pv_from_flows: f64 = flows.iter().map(DiscountedFlow::present_value).sum();
        let weighted_from_flows: f64 = flows.iter().map(|f| f.time * f.present_value()).sum();

        assert_relative_eq!(pv, pv_from_flows, epsilon = 1e-12);
        assert_relative_eq!(weighted, weighted_from_flows, epsilon = 1e-12);
        assert_relative_eq!(weighted / pv, 2.739, epsilon = 1e-3);
    }
}
