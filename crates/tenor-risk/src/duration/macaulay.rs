//! Macaulay duration calculation.
//!
//! Macaulay duration is the weighted average time to receive cash flows,
//! where the weights are the present values of the cash flows at the yield
//! implied by the price.
//!
//! ## Formula
//!
//! ```text
//! D = Σ(t_i × c_i × DF(t_i, r)) / P
//! ```
//!
//! where:
//! - t_i = time to cash flow i (in years)
//! - DF = discount factor under the chosen compounding
//! - P = Σ c_i × DF(t_i, r)

use tenor_core::{CashFlowSchedule, Compounding};
use tenor_pricing::{FlatRatePricer, YieldSolver};

use super::Duration;
use crate::error::is_zero_price;
use crate::{RiskError, RiskResult};

/// Calculate duration at a given flat rate.
///
/// # Errors
///
/// [`RiskError::DivisionByZero`] if the price at `rate` is zero, which
/// includes the empty schedule.
///
/// # Example
///
/// ```rust
/// use tenor_core::{CashFlowSchedule, Compounding};
/// use tenor_risk::duration::duration;
///
/// let schedule = CashFlowSchedule::new(vec![5.0], vec![100.0]).unwrap();
/// let dur = duration(&schedule, 0.05, Compounding::Continuous).unwrap();
///
/// // Zero coupon duration equals maturity
/// assert!((dur.as_f64() - 5.0).abs() < 1e-12);
/// ```
pub fn duration(
    schedule: &CashFlowSchedule,
    rate: f64,
    compounding: Compounding,
) -> RiskResult<Duration> {
    let (price, weighted_time) = FlatRatePricer::new(compounding).pv_weighted_time(schedule, rate)?;

    if is_zero_price(price) {
        return Err(RiskError::division_by_zero("duration: price is zero"));
    }

    Ok(Duration::from(weighted_time / price))
}

/// Calculate Macaulay duration from a price, using the default yield solver.
///
/// Equal by construction to `duration(schedule, solve_yield(price), compounding)`.
pub fn macaulay_duration(
    schedule: &CashFlowSchedule,
    price: f64,
    compounding: Compounding,
) -> RiskResult<Duration> {
    macaulay_duration_with(schedule, price, &YieldSolver::new(compounding))
}

/// Calculate Macaulay duration from a price with explicit solver settings.
///
/// The compounding convention is taken from `solver`.
pub fn macaulay_duration_with(
    schedule: &CashFlowSchedule,
    price: f64,
    solver: &YieldSolver,
) -> RiskResult<Duration> {
    let ytm = solver.solve(schedule, price)?.yield_value;
    duration(schedule, ytm, solver.compounding())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenor_pricing::{solve_yield, ConvergenceMode, PricingError};

    fn three_year_bond() -> CashFlowSchedule {
        CashFlowSchedule::new(vec![1.0, 2.0, 3.0], vec![10.0, 10.0, 110.0]).unwrap()
    }

    #[test]
    fn test_duration_discrete() {
        let dur = duration(&three_year_bond(), 0.09, Compounding::Discrete).unwrap();
        assert_relative_eq!(dur.as_f64(), 2.739, epsilon = 1e-3);
    }

    #[test]
    fn test_duration_continuous() {
        let dur = duration(&three_year_bond(), 0.09, Compounding::Continuous).unwrap();
        assert_relative_eq!(dur.as_f64(), 2.7375, epsilon = 1e-3);
    }

    #[test]
    fn test_duration_par_bond() {
        // 2-year bond, 5% coupon, semi-annual flows, 5% annual rate
        let schedule =
            CashFlowSchedule::new(vec![0.5, 1.0, 1.5, 2.0], vec![2.5, 2.5, 2.5, 102.5]).unwrap();

        let dur = duration(&schedule, 0.05, Compounding::Discrete).unwrap();

        assert_relative_eq!(dur.as_f64(), 1.93, epsilon = 0.01);
    }

    #[test]
    fn test_duration_empty_schedule() {
        let result = duration(&CashFlowSchedule::empty(), 0.05, Compounding::Discrete);
        assert!(matches!(result, Err(RiskError::DivisionByZero { .. })));
    }

    #[test]
    fn test_duration_zero_price() {
        let schedule = CashFlowSchedule::new(vec![1.0, 2.0], vec![0.0, 0.0]).unwrap();
        let result = duration(&schedule, 0.05, Compounding::Continuous);
        assert!(matches!(result, Err(RiskError::DivisionByZero { .. })));
    }

    #[test]
    fn test_duration_tiny_but_nonzero_price() {
        // Price is about 9.4e-13 at 3000% continuous.
        let dur = duration(&three_year_bond(), 30.0, Compounding::Continuous).unwrap();
        assert_relative_eq!(dur.as_f64(), 1.0, epsilon = 1e-9);

        let dust = CashFlowSchedule::new(vec![1.0, 2.0], vec![1e-11, 1e-11]).unwrap();
        let dur = duration(&dust, 0.05, Compounding::Discrete).unwrap();
        assert!(dur.as_f64() > 1.0 && dur.as_f64() < 2.0);
    }

    #[test]
    fn test_macaulay_matches_duration_at_solved_yield() {
        let schedule = three_year_bond();
        for compounding in [Compounding::Discrete, Compounding::Continuous] {
            let ytm = solve_yield(&schedule, 101.0, compounding).unwrap();
            let expected = duration(&schedule, ytm, compounding).unwrap();

            let mac = macaulay_duration(&schedule, 101.0, compounding).unwrap();

            assert_eq!(mac.as_f64(), expected.as_f64());
        }
    }

    #[test]
    fn test_macaulay_scenario() {
        let mac = macaulay_duration(&three_year_bond(), 102.531, Compounding::Discrete).unwrap();
        assert_relative_eq!(mac.as_f64(), 2.739, epsilon = 1e-3);
    }

    #[test]
    fn test_macaulay_with_strict_solver() {
        let solver = YieldSolver::new(Compounding::Discrete)
            .with_tolerance(1e-12)
            .with_max_iterations(3)
            .with_mode(ConvergenceMode::Strict);

        let result = macaulay_duration_with(&three_year_bond(), 102.531, &solver);

        assert!(matches!(
            result,
            Err(RiskError::Pricing(PricingError::NonConvergence { .. }))
        ));
    }
}
