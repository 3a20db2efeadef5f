//! Effective duration calculation.
//!
//! Effective duration uses finite differences to measure price sensitivity.
//! For a flat rate it reproduces the modified duration (discrete) or the
//! duration (continuous) to second order in the bump.
//!
//! ## Formula
//!
//! ```text
//! D_eff = (P₋ - P₊) / (2 × P₀ × Δy)
//! ```

use tenor_core::{CashFlowSchedule, Compounding};
use tenor_pricing::FlatRatePricer;

use super::Duration;
use crate::error::is_zero_price;
use crate::{RiskError, RiskResult};

/// Standard bump size for effective measures (10 basis points)
pub const DEFAULT_BUMP_SIZE: f64 = 0.001;

/// Prices at `rate - bump`, `rate` and `rate + bump`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BumpedPrices {
    /// Price when the rate decreases by the bump.
    pub down: f64,
    /// Price at the unbumped rate.
    pub base: f64,
    /// Price when the rate increases by the bump.
    pub up: f64,
}

/// Reprices the schedule with the rate bumped both ways.
pub fn bumped_prices(
    schedule: &CashFlowSchedule,
    rate: f64,
    compounding: Compounding,
    bump_size: f64,
) -> RiskResult<BumpedPrices> {
    let pricer = FlatRatePricer::new(compounding);
    Ok(BumpedPrices {
        down: pricer.present_value(schedule, rate - bump_size)?,
        base: pricer.present_value(schedule, rate)?,
        up: pricer.present_value(schedule, rate + bump_size)?,
    })
}

/// Calculate effective duration using finite differences.
///
/// # Arguments
///
/// * `price_up` - Price when the rate increases by bump size
/// * `price_down` - Price when the rate decreases by bump size
/// * `price_base` - Current/base price
/// * `bump_size` - Rate bump size (as decimal, e.g., 0.001 for 10bp)
pub fn effective_duration(
    price_up: f64,
    price_down: f64,
    price_base: f64,
    bump_size: f64,
) -> RiskResult<Duration> {
    if is_zero_price(price_base) {
        return Err(RiskError::division_by_zero("effective duration: base price is zero"));
    }

    if bump_size.abs() < 1e-12 {
        return Err(RiskError::InvalidInput("bump size too small".to_string()));
    }

    let eff_dur = (price_down - price_up) / (2.0 * price_base * bump_size);
    Ok(Duration::from(eff_dur))
}
