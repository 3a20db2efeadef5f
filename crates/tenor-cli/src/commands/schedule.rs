//! Schedule command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tenor_pricing::FlatRatePricer;

use crate::cli::OutputFormat;
use crate::commands::{validate_rate, Context, ScheduleInput};
use crate::output::{print_header, print_output};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub schedule: ScheduleInput,

    /// Flat rate (as percentage); adds discount factors and present values
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,
}

/// One row of the schedule table.
#[derive(Debug, Serialize, Tabled)]
struct ScheduleRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Time")]
    time: f64,
    #[tabled(rename = "Amount")]
    amount: f64,
    #[tabled(rename = "DF", display_with = "display_opt")]
    discount_factor: Option<f64>,
    #[tabled(rename = "PV", display_with = "display_opt")]
    present_value: Option<f64>,
}

fn display_opt(value: &Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.6}", v))
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, ctx: &Context) -> Result<()> {
    let schedule = args.schedule.build()?;

    let rows: Vec<ScheduleRow> = match args.rate {
        Some(rate) => {
            let rate = validate_rate(rate)?;
            FlatRatePricer::new(ctx.compounding())
                .discounted_flows(&schedule, rate)?
                .into_iter()
                .enumerate()
                .map(|(i, flow)| ScheduleRow {
                    index: i + 1,
                    time: flow.time,
                    amount: flow.amount,
                    discount_factor: Some(flow.discount_factor),
                    present_value: Some(flow.present_value()),
                })
                .collect()
        }
        None => schedule
            .iter()
            .enumerate()
            .map(|(i, cf)| ScheduleRow {
                index: i + 1,
                time: cf.time(),
                amount: cf.amount(),
                discount_factor: None,
                present_value: None,
            })
            .collect(),
    };

    if ctx.format == OutputFormat::Table {
        print_header(&format!("Cash Flow Schedule ({})", ctx.compounding()), ctx.quiet);
    }
    print_output(&rows, ctx.format)?;

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        if let Some(total) = rows
            .iter()
            .map(|r| r.present_value)
            .sum::<Option<f64>>()
        {
            println!("Price: {:.6}", total);
        }
    }

    Ok(())
}
