//! Analytical convexity.

use tenor_core::{CashFlowSchedule, Compounding};
use tenor_pricing::FlatRatePricer;

use super::Convexity;
use crate::error::is_zero_price;
use crate::{RiskError, RiskResult};

/// Calculate analytical convexity at a flat rate.
///
/// # Errors
///
/// [`RiskError::DivisionByZero`] if the price at `rate` is zero, which
/// includes the empty schedule.
pub fn convexity(
    schedule: &CashFlowSchedule,
    rate: f64,
    compounding: Compounding,
) -> RiskResult<Convexity> {
    let flows = FlatRatePricer::new(compounding).discounted_flows(schedule, rate)?;

    let price: f64 = flows.iter().map(|f| f.present_value()).sum();
    if is_zero_price(price) {
        return Err(RiskError::division_by_zero("convexity: price is zero"));
    }

    let conv = match compounding {
        Compounding::Discrete => {
            let weighted: f64 = flows
                .iter()
                .map(|f| f.time * (f.time + 1.0) * f.present_value())
                .sum();
            weighted / (1.0 + rate).powi(2) / price
        }
        Compounding::Continuous => {
            let weighted: f64 = flows.iter().map(|f| f.time * f.time * f.present_value()).sum();
            weighted / price
        }
    };

    Ok(Convexity::from(conv))
}
