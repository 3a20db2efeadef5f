//! Bullet bond terms and schedule generation.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::{CashFlow, CashFlowSchedule, Frequency};
use crate::error::{CoreError, CoreResult};

/// Terms of a fixed-coupon bullet bond.
///
/// Generates the schedule `face × coupon / f` at `k / f` years for
/// `k = 1..=n`, with the face value added to the last payment.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::{BondTerms, Frequency};
/// use rust_decimal_macros::dec;
///
/// let terms = BondTerms::new(dec!(100), dec!(0.10), dec!(3), Frequency::Annual);
/// let schedule = terms.cash_flow_schedule().unwrap();
///
/// assert_eq!(schedule.times(), vec![1.0, 2.0, 3.0]);
/// assert_eq!(schedule.amounts(), vec![10.0, 10.0, 110.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Face (par) value repaid at maturity
    pub face_value: Decimal,
    /// Annual coupon rate as a decimal (0.05 = 5%)
    pub coupon_rate: Decimal,
    /// Years to maturity, a whole number of coupon periods
    pub maturity_years: Decimal,
    /// Coupon frequency
    #[serde(default)]
    pub frequency: Frequency,
}

/// Upper bound on the number of generated coupon periods.
pub const MAX_PERIODS: u32 = 10_000;

impl BondTerms {
    /// Creates new bond terms.
    #[must_use]
    pub fn new(
        face_value: Decimal,
        coupon_rate: Decimal,
        maturity_years: Decimal,
        frequency: Frequency,
    ) -> Self {
        Self {
            face_value,
            coupon_rate,
            maturity_years,
            frequency,
        }
    }

    /// Returns the number of coupon periods to maturity.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidBondTerms`] if maturity is not positive, is not a
    /// whole number of periods, or exceeds [`MAX_PERIODS`].
    pub fn periods(&self) -> CoreResult<u32> {
        if self.maturity_years <= Decimal::ZERO {
            return Err(CoreError::invalid_bond_terms(format!(
                "maturity must be positive, got {}",
                self.maturity_years
            )));
        }

        let periods = self
            .maturity_years
            .checked_mul(Decimal::from(self.frequency.periods_per_year()))
            .ok_or_else(|| {
                CoreError::invalid_bond_terms(format!("maturity {} is too large", self.maturity_years))
            })?;
        if !periods.fract().is_zero() {
            return Err(CoreError::invalid_bond_terms(format!(
                "maturity {} is not a whole number of {} periods",
                self.maturity_years, self.frequency
            )));
        }

        match periods.to_u32() {
            Some(n) if n <= MAX_PERIODS => Ok(n),
            _ => Err(CoreError::invalid_bond_terms(format!(
                "{periods} periods exceeds the limit of {MAX_PERIODS}"
            ))),
        }
    }

    /// Returns the coupon paid each period.
    pub fn coupon_per_period(&self) -> CoreResult<Decimal> {
        self.face_value
            .checked_mul(self.coupon_rate)
            .and_then(|annual| annual.checked_div(Decimal::from(self.frequency.periods_per_year())))
            .ok_or_else(|| {
                CoreError::invalid_bond_terms(format!(
                    "coupon on face {} at rate {} overflows",
                    self.face_value, self.coupon_rate
                ))
            })
    }

    /// Generates the cash flow schedule.
    pub fn cash_flow_schedule(&self) -> CoreResult<CashFlowSchedule> {
        if self.face_value <= Decimal::ZERO {
            return Err(CoreError::invalid_bond_terms(format!(
                "face value must be positive, got {}",
                self.face_value
            )));
        }
        if self.coupon_rate < Decimal::ZERO {
            return Err(CoreError::invalid_bond_terms(format!(
                "coupon rate must be non-negative, got {}",
                self.coupon_rate
            )));
        }

        let n = self.periods()?;
        let freq = f64::from(self.frequency.periods_per_year());
        let coupon_per_period = self.coupon_per_period()?;
        let redemption = coupon_per_period
            .checked_add(self.face_value)
            .ok_or_else(|| CoreError::invalid_bond_terms("redemption amount overflows"))?;
        let coupon = to_f64(coupon_per_period, "coupon")?;
        let redemption = to_f64(redemption, "redemption")?;

        let cash_flows = (1..=n)
            .map(|k| {
                let amount = if k == n { redemption } else { coupon };
                CashFlow::new(f64::from(k) / freq, amount)
            })
            .collect();

        CashFlowSchedule::from_cash_flows(cash_flows)
    }
}

fn to_f64(value: Decimal, what: &str) -> CoreResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| CoreError::invalid_bond_terms(format!("{what} {value} is not representable")))
}
