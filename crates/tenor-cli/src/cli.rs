//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use tenor_core::Compounding;

use crate::commands::{AnalyzeArgs, BatchArgs, PriceArgs, ScheduleArgs, YieldArgs};

/// Tenor - Flat-rate bond pricing, yield and risk
#[derive(Parser)]
#[command(name = "tenor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Compounding convention (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub compounding: Option<CompoundingArg>,

    /// Path to a TOML or JSON config file
    #[arg(long, env = "TENOR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Fail when the yield solver does not converge
    #[arg(long, global = true)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price a schedule at a flat rate
    Price(PriceArgs),

    /// Solve for the yield that reproduces a price
    Yield(YieldArgs),

    /// Analyze a schedule (duration, convexity, DV01, etc.)
    Analyze(AnalyzeArgs),

    /// Display a cash flow schedule
    Schedule(ScheduleArgs),

    /// Analyze many positions from a JSON file
    Batch(BatchArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

/// Compounding convention argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompoundingArg {
    /// Annual compounding
    Discrete,
    /// Continuous compounding
    Continuous,
}

impl From<CompoundingArg> for Compounding {
    fn from(arg: CompoundingArg) -> Self {
        match arg {
            CompoundingArg::Discrete => Compounding::Discrete,
            CompoundingArg::Continuous => Compounding::Continuous,
        }
    }
}
