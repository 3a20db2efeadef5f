//! Modified duration calculation.
//!
//! ```text
//! Discrete:   D_mod = D_mac / (1 + y)
//! Continuous: D_mod = D_mac
//! ```

use tenor_core::{CashFlowSchedule, Compounding};
use tenor_pricing::YieldSolver;

use super::{duration, Duration};
use crate::RiskResult;

/// Calculate modified duration from a price, using the default yield solver.
pub fn modified_duration(
    schedule: &CashFlowSchedule,
    price: f64,
    compounding: Compounding,
) -> RiskResult<Duration> {
    modified_duration_with(schedule, price, &YieldSolver::new(compounding))
}

/// Calculate modified duration from a price with explicit solver settings.
pub fn modified_duration_with(
    schedule: &CashFlowSchedule,
    price: f64,
    solver: &YieldSolver,
) -> RiskResult<Duration> {
    let ytm = solver.solve(schedule, price)?.yield_value;
    let mac = duration(schedule, ytm, solver.compounding())?;
    Ok(modified_from_macaulay(mac, ytm, solver.compounding()))
}

/// Convert Macaulay duration to modified duration.
///
/// Continuous compounding needs no adjustment: `dP/dy = -D × P` already.
pub fn modified_from_macaulay(mac_duration: Duration, ytm: f64, compounding: Compounding) -> Duration {
    match compounding {
        Compounding::Discrete => Duration::from(mac_duration.as_f64() / (1.0 + ytm)),
        Compounding::Continuous => mac_duration,
    }
}
