//! NetLiq CLI — fetch the three FRED series and write the net-liquidity JSON.
//!
//! One batch job: with no arguments it reproduces the fixed policy (WALCL,
//! WDTGAL, RRPONTSYD from 2020-01-01 through today, written to data.json).
//! Any failure aborts before the output file is touched and exits nonzero.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use netliq_core::data::{FredProvider, StdoutProgress};
use netliq_core::{run_to_file, PipelineConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "netliq",
    about = "Net-liquidity updater — fetch FRED series and emit a JSON time series"
)]
struct Cli {
    /// Output JSON path.
    #[arg(long, default_value = "data.json")]
    output: PathBuf,

    /// Start date (YYYY-MM-DD). Defaults to the fixed policy start.
    #[arg(long)]
    start: Option<String>,

    /// Optional TOML file overriding policy constants (series ids, scales,
    /// lookback offsets, MA windows).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    if let Some(start) = &cli.start {
        config.start_date = NaiveDate::parse_from_str(start, "%Y-%m-%d")
            .with_context(|| format!("invalid --start date '{start}'"))?;
    }

    let provider = FredProvider::new();
    let today = chrono::Local::now().date_naive();

    match run_to_file(&provider, &config, today, &StdoutProgress, &cli.output) {
        Ok(records) => {
            println!(
                "Data updated successfully: {} records -> {}",
                records.len(),
                cli.output.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Error updating data: {e}");
            std::process::exit(1);
        }
    }
}
