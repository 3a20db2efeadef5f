//! Effective convexity calculation.

use super::Convexity;
use crate::error::is_zero_price;
use crate::{RiskError, RiskResult};

/// Calculate effective convexity using finite differences.
///
/// # Arguments
///
/// * `price_up` - Price when the rate increases by bump size
/// * `price_down` - Price when the rate decreases by bump size
/// * `price_base` - Current/base price
/// * `bump_size` - Rate bump size (as decimal)
pub fn effective_convexity(
    price_up: f64,
    price_down: f64,
    price_base: f64,
    bump_size: f64,
) -> RiskResult<Convexity> {
    if is_zero_price(price_base) {
        return Err(RiskError::division_by_zero("effective convexity: base price is zero"));
    }

    if bump_size.abs() < 1e-12 {
        return Err(RiskError::InvalidInput("bump size too small".to_string()));
    }

    let conv = (price_down + price_up - 2.0 * price_base) / (price_base * bump_size.powi(2));
    Ok(Convexity::from(conv))
}
