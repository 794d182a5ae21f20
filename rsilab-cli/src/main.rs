//! RsiLab CLI: turn an OHLCV CSV into RSI trading signals.
//!
//! Reads bars, computes Wilder RSI, classifies each value as BUY/SELL/HOLD and
//! writes one record per input row. Prints the row count, the record count
//! and a signal summary on stdout; errors go to stderr with exit status 1.
//!
//! Diagnostics are controlled with `RUST_LOG` (default `warn`).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rsilab_runner::{run_from_file, OutputFormat, RunProgress, SignalConfig};

#[derive(Parser)]
#[command(
    name = "rsilab",
    about = "RsiLab: generate RSI trading signals from OHLCV CSV data"
)]
struct Cli {
    /// Path to input CSV file.
    #[arg(default_value = "data/sample.csv")]
    csv_path: PathBuf,

    /// Output file path. A `.csv` extension writes CSV, anything else JSON.
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,

    /// TOML config file with `[rsi]` and `[thresholds]` sections.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RSI period. Overrides the config file.
    #[arg(long)]
    period: Option<usize>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

/// Prints the contract progress lines to stdout.
struct StdoutProgress;

impl RunProgress for StdoutProgress {
    fn on_loaded(&self, rows: usize, input: &Path) {
        println!("Read {rows} rows from {}", input.display());
    }

    fn on_written(&self, records: usize, output: &Path, _format: OutputFormat) {
        println!("Wrote {records} records to {}", output.display());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    debug!(?config, "resolved config");

    let report = run_from_file(&cli.csv_path, &cli.output, &config, Some(&StdoutProgress))?;

    println!("Signals: {}", report.counts);
    Ok(())
}

/// Flag beats file beats default.
fn resolve_config(cli: &Cli) -> Result<SignalConfig> {
    let config = match &cli.config {
        Some(path) => SignalConfig::from_file(path)?,
        None => SignalConfig::default(),
    };
    Ok(match cli.period {
        Some(period) => config.with_period(period)?,
        None => config,
    })
}
