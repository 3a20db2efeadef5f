//! Batch command implementation.
//!
//! Reads a JSON array of positions and analyzes them together.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tenor_risk::batch::{analyze_batch, Position};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_output};

/// Arguments for the batch command.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file holding an array of positions
    #[arg(short, long)]
    pub input: PathBuf,
}

/// One row of batch output.
#[derive(Debug, Serialize, Tabled)]
struct BatchRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Yield")]
    yield_value: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Mac Dur")]
    macaulay_duration: String,
    #[tabled(rename = "Mod Dur")]
    modified_duration: String,
    #[tabled(rename = "Convexity")]
    convexity: String,
    #[tabled(rename = "DV01")]
    dv01: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// Execute the batch command.
pub fn execute(args: BatchArgs, ctx: &Context) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let positions: Vec<Position> = serde_json::from_str(&text)
        .with_context(|| format!("parsing positions from {}", args.input.display()))?;

    let results = analyze_batch(&positions, &ctx.yield_solver());

    let rows: Vec<BatchRow> = positions
        .iter()
        .zip(results)
        .map(|(position, result)| match result {
            Ok(m) => BatchRow {
                id: position.id.clone(),
                yield_value: format!("{:.6}", m.yield_value),
                price: format!("{:.6}", m.price),
                macaulay_duration: format!("{:.4}", m.macaulay_duration.as_f64()),
                modified_duration: format!("{:.4}", m.modified_duration.as_f64()),
                convexity: format!("{:.4}", m.convexity.as_f64()),
                dv01: format!("{:.6}", m.dv01.as_f64()),
                error: String::new(),
            },
            Err(e) => {
                tracing::warn!(id = %position.id, error = %e, "position failed");
                BatchRow {
                    id: position.id.clone(),
                    yield_value: String::new(),
                    price: String::new(),
                    macaulay_duration: String::new(),
                    modified_duration: String::new(),
                    convexity: String::new(),
                    dv01: String::new(),
                    error: e.to_string(),
                }
            }
        })
        .collect();

    if ctx.format == OutputFormat::Table {
        print_header(&format!("Batch Analytics ({} positions)", rows.len()), ctx.quiet);
    }
    print_output(&rows, ctx.format)
}
