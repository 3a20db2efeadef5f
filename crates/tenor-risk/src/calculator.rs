//! Integrated risk calculator for cash flow schedules.
//!
//! This module provides a high-level [`RiskCalculator`] that computes
//! all risk metrics (duration, convexity, DV01) for a schedule quoted
//! either by price or by rate.
//!
//! # Example
//!
//! ```rust
//! use tenor_core::{CashFlowSchedule, Compounding};
//! use tenor_pricing::YieldSolver;
//! use tenor_risk::calculator::RiskCalculator;
//!
//! let schedule = CashFlowSchedule::new(vec![1.0, 2.0, 3.0], vec![10.0, 10.0, 110.0]).unwrap();
//! let solver = YieldSolver::new(Compounding::Discrete);
//!
//! let calc = RiskCalculator::from_price(&schedule, 102.531, &solver).unwrap();
//! let metrics = calc.all_metrics().unwrap();
//!
//! assert!((metrics.yield_value - 0.09).abs() < 1e-4);
//! assert!((metrics.macaulay_duration.as_f64() - 2.739).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use tenor_core::{CashFlowSchedule, Compounding};
use tenor_pricing::{present_value, YieldSolver};

use crate::convexity::{convexity, effective_convexity, estimate_price_change, Convexity};
use crate::duration::{
    bumped_prices, duration, effective_duration, modified_from_macaulay, Duration,
    DEFAULT_BUMP_SIZE,
};
use crate::dv01::{dv01_from_duration, dv01_from_prices, BASIS_POINT, DV01};
use crate::{RiskError, RiskResult};

/// Complete risk metrics for a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Flat yield the metrics were computed at.
    pub yield_value: f64,
    /// Quoted price (or model price at the given rate).
    pub price: f64,
    /// PV-weighted average time to payment.
    pub macaulay_duration: Duration,
    /// Relative price sensitivity to the rate.
    pub modified_duration: Duration,
    /// Analytical convexity.
    pub convexity: Convexity,
    /// Price change for a 1bp move.
    pub dv01: DV01,
}

impl RiskMetrics {
    /// Estimate the relative price change for a rate shift.
    ///
    /// ΔP/P ≈ -D_mod × Δy + (1/2) × C × (Δy)²
    pub fn estimate_price_change(&self, rate_change: f64) -> f64 {
        estimate_price_change(
            self.modified_duration.as_f64(),
            self.convexity.as_f64(),
            rate_change,
        )
    }

    /// Get the convexity adjustment term (1/2) × C × (Δy)².
    pub fn convexity_adjustment(&self, rate_change: f64) -> f64 {
        0.5 * self.convexity.as_f64() * rate_change.powi(2)
    }
}

/// Calculator for schedule risk metrics.
#[derive(Debug, Clone, Copy)]
pub struct RiskCalculator<'a> {
    schedule: &'a CashFlowSchedule,
    compounding: Compounding,
    yield_value: f64,
    price: f64,
    bump_size: f64,
}

impl<'a> RiskCalculator<'a> {
    /// Creates a calculator from a quoted price, solving for the yield.
    ///
    /// The compounding convention is taken from `solver`.
    pub fn from_price(
        schedule: &'a CashFlowSchedule,
        price: f64,
        solver: &YieldSolver,
    ) -> RiskResult<Self> {
        let result = solver.solve(schedule, price)?;
        Ok(Self {
            schedule,
            compounding: solver.compounding(),
            yield_value: result.yield_value,
            price,
            bump_size: DEFAULT_BUMP_SIZE,
        })
    }

    /// Creates a calculator at a given flat rate.
    pub fn from_rate(
        schedule: &'a CashFlowSchedule,
        rate: f64,
        compounding: Compounding,
    ) -> RiskResult<Self> {
        let price = present_value(schedule, rate, compounding)?;
        Ok(Self {
            schedule,
            compounding,
            yield_value: rate,
            price,
            bump_size: DEFAULT_BUMP_SIZE,
        })
    }

    /// Sets the bump used by effective measures.
    #[must_use]
    pub fn with_bump_size(mut self, bump_size: f64) -> Self {
        self.bump_size = bump_size;
        self
    }

    /// Returns the yield.
    pub fn yield_value(&self) -> f64 {
        self.yield_value
    }

    /// Returns the price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the compounding convention.
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Calculates Macaulay duration.
    pub fn macaulay_duration(&self) -> RiskResult<Duration> {
        duration(self.schedule, self.yield_value, self.compounding)
    }

    /// Calculates modified duration.
    pub fn modified_duration(&self) -> RiskResult<Duration> {
        let mac = self.macaulay_duration()?;
        Ok(modified_from_macaulay(mac, self.yield_value, self.compounding))
    }

    /// Calculates analytical convexity.
    pub fn convexity(&self) -> RiskResult<Convexity> {
        convexity(self.schedule, self.yield_value, self.compounding)
    }

    /// Calculates DV01 from modified duration and the model price at the yield.
    pub fn dv01(&self) -> RiskResult<DV01> {
        let model_price = present_value(self.schedule, self.yield_value, self.compounding)?;
        Ok(dv01_from_duration(self.modified_duration()?, model_price))
    }

    /// Calculates DV01 by repricing `bump_bps` basis points each way.
    pub fn bumped_dv01(&self, bump_bps: f64) -> RiskResult<DV01> {
        let prices = bumped_prices(
            self.schedule,
            self.yield_value,
            self.compounding,
            bump_bps * BASIS_POINT,
        )?;
        dv01_from_prices(prices.up, prices.down, bump_bps)
    }

    /// Calculates effective duration by bump-and-reprice.
    pub fn effective_duration(&self) -> RiskResult<Duration> {
        let prices = bumped_prices(self.schedule, self.yield_value, self.compounding, self.bump_size)?;
        effective_duration(prices.up, prices.down, prices.base, self.bump_size)
    }

    /// Calculates effective convexity by bump-and-reprice.
    pub fn effective_convexity(&self) -> RiskResult<Convexity> {
        let prices = bumped_prices(self.schedule, self.yield_value, self.compounding, self.bump_size)?;
        effective_convexity(prices.up, prices.down, prices.base, self.bump_size)
    }

    /// Calculates all analytical metrics.
    pub fn all_metrics(&self) -> RiskResult<RiskMetrics> {
        if !self.price.is_finite() {
            return Err(RiskError::InvalidInput(format!(
                "price must be finite, got {}",
                self.price
            )));
        }

        let macaulay = self.macaulay_duration()?;
        let modified = modified_from_macaulay(macaulay, self.yield_value, self.compounding);

        Ok(RiskMetrics {
            yield_value: self.yield_value,
            price: self.price,
            macaulay_duration: macaulay,
            modified_duration: modified,
            convexity: self.convexity()?,
            dv01: self.dv01()?,
        })
    }
}
