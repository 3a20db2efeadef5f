//! Price command implementation.
//!
//! Discounts a schedule at a flat rate.

use anyhow::Result;
use clap::Args;

use tenor_pricing::FlatRatePricer;

use crate::cli::OutputFormat;
use crate::commands::{validate_rate, Context, ScheduleInput};
use crate::output::{print_metrics, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub schedule: ScheduleInput,

    /// Flat rate (as percentage, e.g., 9.0 for 9%)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, ctx: &Context) -> Result<()> {
    let schedule = args.schedule.build()?;
    let rate = validate_rate(args.rate)?;

    let pricer = FlatRatePricer::new(ctx.compounding());
    let price = pricer.present_value(&schedule, rate)?;
    tracing::debug!(rate, price, "priced schedule");

    if ctx.format == OutputFormat::Minimal {
        println!("{:.6}", price);
        return Ok(());
    }

    let results = vec![
        KeyValue::new("Compounding", ctx.compounding().to_string()),
        KeyValue::new("Cash Flows", schedule.len().to_string()),
        KeyValue::from_f64("Undiscounted Total", schedule.total(), 6),
        KeyValue::from_percent("Rate", rate),
        KeyValue::from_f64("Price", price, 6),
    ];

    print_metrics("Pricing Results", &results, ctx.format, ctx.quiet)
}
