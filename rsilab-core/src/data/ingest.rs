//! CSV ingestion of OHLCV bars.
//!
//! Check order: header present → required columns present → every row
//! parses → at least one row. The first failure aborts the load.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder, StringRecord};

use super::schema::{BarColumns, SchemaError};
use crate::domain::Bar;

/// Which part of the input was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    /// No header row at all.
    NoHeader,
    /// Header present, zero data rows.
    NoRows,
}

impl fmt::Display for EmptyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyKind::NoHeader => f.write_str("is empty"),
            EmptyKind::NoRows => f.write_str("has no data rows"),
        }
    }
}

/// Errors from loading bars.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Missing, unreadable, or not a regular file. `source` is the open
    /// failure, if there was one.
    #[error("CSV file not found: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("CSV file {kind}: {origin}")]
    EmptyInput { origin: String, kind: EmptyKind },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("malformed value in row {row}, column '{column}': {value:?} could not be parsed")]
    MalformedValue {
        /// 1-based data row (the header is row 0).
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Load bars from a CSV file on disk.
pub fn load_bars(path: &Path) -> Result<Vec<Bar>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::SourceNotFound {
        path: path.to_path_buf(),
        source: Some(e),
    })?;

    let is_dir = file.metadata().map(|m| m.is_dir()).unwrap_or(false);
    if is_dir {
        return Err(LoadError::SourceNotFound {
            path: path.to_path_buf(),
            source: None,
        });
    }

    read_bars(file, &path.display().to_string())
}

/// Read bars from any CSV byte source. `origin` names the source in errors.
pub fn read_bars<R: Read>(reader: R, origin: &str) -> Result<Vec<Bar>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    // Undecodable header names simply fail to match a required column.
    let headers = StringRecord::from_byte_record_lossy(rdr.byte_headers()?.clone());
    if headers.is_empty() {
        return Err(LoadError::EmptyInput {
            origin: origin.to_string(),
            kind: EmptyKind::NoHeader,
        });
    }

    let cols = BarColumns::resolve(&headers)?;

    let mut bars = Vec::new();
    for (i, record) in rdr.byte_records().enumerate() {
        bars.push(parse_record(&record?, &cols, i + 1)?);
    }

    if bars.is_empty() {
        return Err(LoadError::EmptyInput {
            origin: origin.to_string(),
            kind: EmptyKind::NoRows,
        });
    }

    Ok(bars)
}

fn parse_record(record: &ByteRecord, cols: &BarColumns, row: usize) -> Result<Bar, LoadError> {
    if record.get(cols.date).is_none() {
        return Err(LoadError::MalformedValue {
            row,
            column: "date",
            value: String::new(),
        });
    }
    let date = field_str(record, cols.date, "date", row)?;

    Ok(Bar {
        date: date.to_string(),
        open: parse_number(record, cols.open, "open", row)?,
        high: parse_number(record, cols.high, "high", row)?,
        low: parse_number(record, cols.low, "low", row)?,
        close: parse_number(record, cols.close, "close", row)?,
        volume: parse_number(record, cols.volume, "volume", row)?,
    })
}

/// Decode one field. Absent fields read as empty; invalid UTF-8 is malformed.
fn field_str<'r>(
    record: &'r ByteRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<&'r str, LoadError> {
    let raw = record.get(idx).unwrap_or_default();
    std::str::from_utf8(raw).map_err(|_| LoadError::MalformedValue {
        row,
        column,
        value: String::from_utf8_lossy(raw).into_owned(),
    })
}

fn parse_number(
    record: &ByteRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<f64, LoadError> {
    let raw = field_str(record, idx, column, row)?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| LoadError::MalformedValue {
            row,
            column,
            value: raw.to_string(),
        })
}
