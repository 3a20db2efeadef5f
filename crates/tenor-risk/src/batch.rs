//! Batch risk analytics over independent schedules.
//!
//! Positions share no state, so with the `parallel` feature (on by default)
//! they are analysed with rayon; otherwise sequentially. Results keep the
//! input order.

use serde::{Deserialize, Serialize};

use tenor_core::CashFlowSchedule;
use tenor_pricing::YieldSolver;

use crate::calculator::{RiskCalculator, RiskMetrics};
use crate::RiskResult;

/// How a position is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quote {
    /// Market price; the yield is solved for.
    Price(f64),
    /// Flat rate; the price is computed.
    Rate(f64),
}

/// A schedule to analyse together with its quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Caller-chosen identifier.
    pub id: String,
    /// Cash flows of the position.
    pub schedule: CashFlowSchedule,
    /// Price or rate quote.
    pub quote: Quote,
}

impl Position {
    /// Creates a new position.
    pub fn new(id: impl Into<String>, schedule: CashFlowSchedule, quote: Quote) -> Self {
        Self {
            id: id.into(),
            schedule,
            quote,
        }
    }

    /// Computes all metrics for this position.
    pub fn analyze(&self, solver: &YieldSolver) -> RiskResult<RiskMetrics> {
        let calc = match self.quote {
            Quote::Price(price) => RiskCalculator::from_price(&self.schedule, price, solver)?,
            Quote::Rate(rate) => {
                RiskCalculator::from_rate(&self.schedule, rate, solver.compounding())?
            }
        };
        calc.all_metrics()
    }
}

/// Analyses every position, in parallel when the `parallel` feature is on.
///
/// The compounding convention and solver settings come from `solver`.
/// One failing position does not affect the others.
pub fn analyze_batch(positions: &[Position], solver: &YieldSolver) -> Vec<RiskResult<RiskMetrics>> {
    log::debug!("analysing batch of {} positions", positions.len());

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        positions.par_iter().map(|p| p.analyze(solver)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        positions.iter().map(|p| p.analyze(solver)).collect()
    }
}
