//! CLI command implementations.

pub mod analyze;
pub mod batch;
pub mod price;
pub mod schedule;
pub mod yield_cmd;

pub use analyze::AnalyzeArgs;
pub use batch::BatchArgs;
pub use price::PriceArgs;
pub use schedule::ScheduleArgs;
pub use yield_cmd::YieldArgs;

use clap::Args;
use rust_decimal::Decimal;

use tenor_config::AnalyticsConfig;
use tenor_core::{BondTerms, CashFlowSchedule, Compounding, Frequency};
use tenor_pricing::YieldSolver;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers.
    pub quiet: bool,
    /// Resolved analytics configuration.
    pub config: AnalyticsConfig,
}

impl Context {
    /// Returns the compounding convention in effect.
    pub fn compounding(&self) -> Compounding {
        self.config.compounding
    }

    /// Returns a yield solver built from the config.
    pub fn yield_solver(&self) -> YieldSolver {
        self.config.yield_solver()
    }
}

/// Cash flows, either explicit or generated from bond terms.
#[derive(Args, Debug, Clone)]
pub struct ScheduleInput {
    /// Payment times in years, comma separated (e.g. 1,2,3)
    #[arg(long, value_delimiter = ',', requires = "amounts")]
    pub times: Vec<f64>,

    /// Cash flow amounts, comma separated (e.g. 10,10,110)
    #[arg(long, value_delimiter = ',', requires = "times")]
    pub amounts: Vec<f64>,

    /// Face value (default: 100)
    #[arg(long, conflicts_with = "times")]
    pub face: Option<Decimal>,

    /// Annual coupon rate (as percentage, e.g., 5.0 for 5%)
    #[arg(long, conflicts_with = "times")]
    pub coupon: Option<Decimal>,

    /// Years to maturity, a whole number of coupon periods
    #[arg(long, conflicts_with = "times")]
    pub maturity: Option<Decimal>,

    /// Coupon frequency: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

impl ScheduleInput {
    /// Builds the schedule.
    pub fn build(&self) -> CliResult<CashFlowSchedule> {
        if !self.times.is_empty() || !self.amounts.is_empty() {
            return Ok(CashFlowSchedule::new(
                self.times.clone(),
                self.amounts.clone(),
            )?);
        }

        let maturity = self.maturity.ok_or_else(|| {
            CliError::MissingArgument("--maturity (or --times with --amounts)".to_string())
        })?;
        let coupon = validate_coupon(self.coupon.unwrap_or(Decimal::ZERO))?;
        let frequency = Frequency::from_periods_per_year(self.frequency)?;

        let terms = BondTerms::new(
            self.face.unwrap_or(Decimal::ONE_HUNDRED),
            coupon / Decimal::ONE_HUNDRED,
            maturity,
            frequency,
        );
        Ok(terms.cash_flow_schedule()?)
    }
}

/// Validates a coupon rate.
pub fn validate_coupon(coupon: Decimal) -> CliResult<Decimal> {
    if coupon < Decimal::ZERO || coupon > Decimal::ONE_HUNDRED {
        return Err(CliError::InvalidCoupon(coupon));
    }
    Ok(coupon)
}

/// Validates a rate given as a percentage and returns it as a decimal.
pub fn validate_rate(rate: f64) -> CliResult<f64> {
    if !(-10.0..=100.0).contains(&rate) {
        return Err(CliError::InvalidRate(rate));
    }
    Ok(rate / 100.0)
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if !price.is_finite() || price <= 0.0 {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ScheduleInput {
        ScheduleInput {
            times: vec![],
            amounts: vec![],
            face: None,
            coupon: None,
            maturity: None,
            frequency: 1,
        }
    }

    #[test]
    fn test_explicit_schedule() {
        let schedule = ScheduleInput {
            times: vec![1.0, 2.0],
            amounts: vec![5.0, 105.0],
            ..input()
        }
        .build()
        .unwrap();

        assert_eq!(schedule.maturity(), Some(2.0));
    }

    #[test]
    fn test_schedule_from_terms() {
        let schedule = ScheduleInput {
            coupon: Some(Decimal::from(10)),
            maturity: Some(Decimal::from(3)),
            ..input()
        }
        .build()
        .unwrap();

        assert_eq!(schedule.amounts(), vec![10.0, 10.0, 110.0]);
    }

    #[test]
    fn test_missing_maturity() {
        assert!(matches!(input().build(), Err(CliError::MissingArgument(_))));
    }

    #[test]
    fn test_validators() {
        assert!(validate_coupon(Decimal::from(101)).is_err());
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!((validate_rate(9.0).unwrap() - 0.09).abs() < 1e-15);
        assert!(validate_rate(150.0).is_err());
    }
}
