//! Report export: JSON and CSV artifacts.
//!
//! The format is chosen from the destination extension: `.csv` writes CSV,
//! anything else writes pretty-printed JSON. Undefined RSI/signal values are
//! `null` in JSON and an empty cell in CSV.
//!
//! Writes replace the destination in one `std::fs::write` call. A failure
//! part-way through (disk full, permissions revoked) can leave a truncated
//! file behind; callers must treat the artifact as invalid whenever an error
//! is returned.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::result::OutputRecord;

/// Errors from serializing or writing a report.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize report to JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize report to CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => OutputFormat::Csv,
            _ => OutputFormat::Json,
        }
    }
}

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize records to pretty JSON (two-space indent).
pub fn export_json(records: &[OutputRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Read records back from a JSON artifact.
pub fn import_json(json: &str) -> Result<Vec<OutputRecord>, ExportError> {
    Ok(serde_json::from_str(json)?)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Serialize records to CSV with columns date, close, rsi, signal.
pub fn export_csv(records: &[OutputRecord]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["date", "close", "rsi", "signal"])?;

    for r in records {
        let close = r.close.to_string();
        let rsi = r.rsi.map(|v| format!("{v:.2}")).unwrap_or_default();
        wtr.write_record([
            r.date.as_str(),
            close.as_str(),
            rsi.as_str(),
            r.signal.map_or("", |s| s.as_str()),
        ])?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

// ─── Artifact ───────────────────────────────────────────────────────

/// Write `records` to `path`, overwriting it. Returns the format used.
pub fn write_report(records: &[OutputRecord], path: &Path) -> Result<OutputFormat, ExportError> {
    let format = OutputFormat::from_path(path);
    let body = match format {
        OutputFormat::Json => export_json(records)?,
        OutputFormat::Csv => export_csv(records)?,
    };
    std::fs::write(path, body).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format)
}
