//! Analyze command implementation.
//!
//! Duration, convexity and DV01 for a schedule quoted by price or rate.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tenor_risk::calculator::RiskCalculator;

use crate::cli::OutputFormat;
use crate::commands::{validate_price, validate_rate, Context, ScheduleInput};
use crate::output::{print_header, print_json, print_output, KeyValue};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub schedule: ScheduleInput,

    /// Quoted price; the yield is solved for
    #[arg(short, long, group = "quote")]
    pub price: Option<f64>,

    /// Flat rate (as percentage); the price is computed
    #[arg(short, long, group = "quote", allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Rate shift in basis points for the price change estimate
    #[arg(long, allow_negative_numbers = true)]
    pub shift: Option<f64>,
}

/// Full analysis output.
#[derive(Debug, Serialize)]
struct AnalysisOutput {
    compounding: String,
    yield_value: f64,
    price: f64,
    macaulay_duration: f64,
    modified_duration: f64,
    convexity: f64,
    dv01: f64,
    effective_duration: f64,
    effective_convexity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    shift: Option<ShiftEstimate>,
}

/// Taylor estimate against full repricing for a rate shift.
#[derive(Debug, Serialize)]
struct ShiftEstimate {
    bps: f64,
    estimated_change: f64,
    actual_change: f64,
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, ctx: &Context) -> Result<()> {
    let schedule = args.schedule.build()?;
    let compounding = ctx.compounding();

    let calc = match (args.price, args.rate) {
        (Some(price), _) => {
            RiskCalculator::from_price(&schedule, validate_price(price)?, &ctx.yield_solver())?
        }
        (None, Some(rate)) => RiskCalculator::from_rate(&schedule, validate_rate(rate)?, compounding)?,
        (None, None) => anyhow::bail!("either --price or --rate is required"),
    }
    .with_bump_size(ctx.config.risk.effective_bump());

    let metrics = calc.all_metrics()?;
    let dv01 = calc.bumped_dv01(ctx.config.risk.dv01_bump_bps)?;

    let shift = match args.shift {
        Some(bps) => {
            let dr = bps / 10_000.0;
            let shifted = RiskCalculator::from_rate(&schedule, metrics.yield_value + dr, compounding)?;
            Some(ShiftEstimate {
                bps,
                estimated_change: metrics.estimate_price_change(dr),
                actual_change: shifted.price() / metrics.price - 1.0,
            })
        }
        None => None,
    };

    let output = AnalysisOutput {
        compounding: compounding.to_string(),
        yield_value: metrics.yield_value,
        price: metrics.price,
        macaulay_duration: metrics.macaulay_duration.as_f64(),
        modified_duration: metrics.modified_duration.as_f64(),
        convexity: metrics.convexity.as_f64(),
        dv01: dv01.as_f64(),
        effective_duration: calc.effective_duration()?.as_f64(),
        effective_convexity: calc.effective_convexity()?.as_f64(),
        shift,
    };

    match ctx.format {
        OutputFormat::Json => print_json(&output),
        OutputFormat::Minimal => {
            println!(
                "{:.6} {:.4} {:.4} {:.4} {:.6}",
                output.yield_value,
                output.macaulay_duration,
                output.modified_duration,
                output.convexity,
                output.dv01
            );
            Ok(())
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let mut rows = vec![
                KeyValue::new("Compounding", output.compounding.clone()),
                KeyValue::from_percent("Yield", output.yield_value),
                KeyValue::from_f64("Price", output.price, 6),
                KeyValue::from_f64("Macaulay Duration", output.macaulay_duration, 4),
                KeyValue::from_f64("Modified Duration", output.modified_duration, 4),
                KeyValue::from_f64("Convexity", output.convexity, 4),
                KeyValue::from_f64("DV01", output.dv01, 6),
                KeyValue::from_f64("Effective Duration", output.effective_duration, 4),
                KeyValue::from_f64("Effective Convexity", output.effective_convexity, 4),
            ];
            if let Some(shift) = &output.shift {
                rows.push(KeyValue::from_f64("Shift (bps)", shift.bps, 2));
                rows.push(KeyValue::from_percent("Estimated Change", shift.estimated_change));
                rows.push(KeyValue::from_percent("Actual Change", shift.actual_change));
            }

            if ctx.format == OutputFormat::Table {
                print_header("Risk Analytics", ctx.quiet);
            }
            print_output(&rows, ctx.format)
        }
    }
}
