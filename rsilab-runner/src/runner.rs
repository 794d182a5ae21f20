//! Signal runner: wires together loading, RSI, classification and export.
//!
//! Two entry points:
//! - `run_pipeline()`: takes pre-loaded bars, no I/O. Used by `run_from_file()` and tests.
//! - `run_from_file()`: loads a CSV, runs, and writes the report. Used by the CLI.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use rsilab_core::data::{load_bars, LoadError};
use rsilab_core::domain::{closes, Bar};
use rsilab_core::indicators::{Indicator, Rsi};
use rsilab_core::signals::{classify_series, Signal, SignalCounts};

use crate::config::{ConfigError, SignalConfig};
use crate::export::{write_report, ExportError, OutputFormat};
use crate::result::{round_rsi, OutputRecord, SignalReport};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Data(#[from] LoadError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Callback for reporting `run_from_file` progress.
pub trait RunProgress: Send {
    /// Called once the input has been loaded.
    fn on_loaded(&self, rows: usize, input: &Path);

    /// Called once the report has been written.
    fn on_written(&self, records: usize, output: &Path, format: OutputFormat);
}

/// Counts of bars that will distort the RSI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataQuality {
    /// Bars with a NaN or infinite field.
    pub void: usize,
    /// Finite bars whose prices are inconsistent (e.g. high below low).
    pub insane: usize,
}

impl DataQuality {
    pub fn inspect(bars: &[Bar]) -> Self {
        bars.iter().fold(Self::default(), |mut q, bar| {
            if bar.is_void() {
                q.void += 1;
            } else if !bar.is_sane() {
                q.insane += 1;
            }
            q
        })
    }
}

/// Compute RSI and signals for `bars` and assemble the report.
///
/// The config is validated first, so an invalid period is an error rather
/// than a panic. Signals are classified from the full-precision RSI; only the
/// value stored in each record is rounded.
pub fn run_pipeline(bars: &[Bar], config: &SignalConfig) -> Result<SignalReport, RunError> {
    config.validate()?;
    let indicator = Rsi::new(config.rsi.period);

    let quality = DataQuality::inspect(bars);
    if quality.void > 0 {
        warn!(void = quality.void, "bars with non-finite fields; RSI values will be unreliable");
    }
    if quality.insane > 0 {
        warn!(insane = quality.insane, "bars with inconsistent OHLC prices");
    }

    debug!(bars = bars.len(), indicator = indicator.name(), "computing RSI");
    let rsi = indicator.compute(&closes(bars));
    let signals = classify_series(&rsi, &config.thresholds);
    let counts = SignalCounts::tally(&signals);
    debug!(%counts, "classified signals");

    Ok(SignalReport {
        records: assemble_records(bars, &rsi, &signals),
        counts,
        period: indicator.period(),
    })
}

/// Join bars, RSI values and signals index-for-index.
///
/// All three slices must have the same length.
pub fn assemble_records(
    bars: &[Bar],
    rsi: &[Option<f64>],
    signals: &[Option<Signal>],
) -> Vec<OutputRecord> {
    debug_assert_eq!(bars.len(), rsi.len());
    debug_assert_eq!(bars.len(), signals.len());

    bars.iter()
        .zip(rsi)
        .zip(signals)
        .map(|((bar, rsi), signal)| OutputRecord {
            date: bar.date.clone(),
            close: bar.close,
            rsi: rsi.map(round_rsi),
            signal: *signal,
        })
        .collect()
}

/// Load `input`, run the pipeline, and write the report to `output`.
pub fn run_from_file(
    input: &Path,
    output: &Path,
    config: &SignalConfig,
    progress: Option<&dyn RunProgress>,
) -> Result<SignalReport, RunError> {
    config.validate()?;
    let bars = load_bars(input)?;
    debug!(rows = bars.len(), input = %input.display(), "loaded bars");
    if let Some(p) = progress {
        p.on_loaded(bars.len(), input);
    }

    let report = run_pipeline(&bars, config)?;
    let format = write_report(&report.records, output)?;
    debug!(?format, output = %output.display(), "wrote report");
    if let Some(p) = progress {
        p.on_written(report.len(), output, format);
    }

    Ok(report)
}
