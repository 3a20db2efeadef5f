//! Yield command implementation.
//!
//! Solves for the flat rate that reproduces a quoted price.

use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::commands::{validate_price, Context, ScheduleInput};
use crate::output::{print_metrics, print_warning, KeyValue};

/// Arguments for the yield command.
#[derive(Args, Debug)]
pub struct YieldArgs {
    #[command(flatten)]
    pub schedule: ScheduleInput,

    /// Quoted price
    #[arg(short, long)]
    pub price: f64,
}

/// Execute the yield command.
pub fn execute(args: YieldArgs, ctx: &Context) -> Result<()> {
    let schedule = args.schedule.build()?;
    let price = validate_price(args.price)?;

    let result = ctx.yield_solver().solve(&schedule, price)?;

    if !result.converged && !ctx.quiet {
        print_warning(&format!(
            "solver stopped after {} iterations without meeting the price tolerance",
            result.iterations
        ));
    }

    if ctx.format == OutputFormat::Minimal {
        println!("{:.6}", result.yield_value);
        return Ok(());
    }

    let results = vec![
        KeyValue::new("Compounding", ctx.compounding().to_string()),
        KeyValue::from_f64("Price (Input)", price, 6),
        KeyValue::from_percent("Yield to Maturity", result.yield_value),
        KeyValue::new("Iterations", result.iterations.to_string()),
        KeyValue::new("Residual", format!("{:.3e}", result.residual)),
        KeyValue::new("Converged", result.converged.to_string()),
    ];

    print_metrics("Yield Results", &results, ctx.format, ctx.quiet)
}
