//! Tenor CLI - Command-line interface for flat-rate bond analytics.
//!
//! # Usage
//!
//! ```bash
//! # Price explicit cash flows at 9%
//! tenor price --times 1,2,3 --amounts 10,10,110 --rate 9
//!
//! # Yield of a 5% semi-annual bond from its price
//! tenor yield --coupon 5 --maturity 10 --frequency 2 --price 98.5
//!
//! # Duration, convexity and DV01 under continuous compounding
//! tenor --compounding continuous analyze --coupon 10 --maturity 3 --rate 9
//!
//! # Show the cash flow schedule with discount factors
//! tenor schedule --coupon 10 --maturity 3 --rate 9
//! ```

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tenor_config::AnalyticsConfig;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = load_config(&cli)?;
    if let Some(compounding) = cli.compounding {
        config.compounding = compounding.into();
    }
    if cli.strict {
        config.solver.strict = true;
    }
    tracing::debug!(?config, "resolved analytics config");

    let ctx = Context {
        format: cli.format,
        quiet: cli.quiet,
        config,
    };

    match cli.command {
        Commands::Price(args) => commands::price::execute(args, &ctx)?,
        Commands::Yield(args) => commands::yield_cmd::execute(args, &ctx)?,
        Commands::Analyze(args) => commands::analyze::execute(args, &ctx)?,
        Commands::Schedule(args) => commands::schedule::execute(args, &ctx)?,
        Commands::Batch(args) => commands::batch::execute(args, &ctx)?,
    }

    Ok(())
}

/// Installs a stderr subscriber; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Explicit `--config` must load; the per-user default is used only if present.
fn load_config(cli: &Cli) -> Result<AnalyticsConfig> {
    if let Some(path) = &cli.config {
        return AnalyticsConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()));
    }

    if let Some(path) = dirs::config_dir().map(|dir| dir.join("tenor").join("config.toml")) {
        if path.is_file() {
            tracing::info!(path = %path.display(), "using default config");
            return AnalyticsConfig::load(&path)
                .with_context(|| format!("loading config {}", path.display()));
        }
    }

    Ok(AnalyticsConfig::default())
}
