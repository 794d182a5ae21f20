//! Required CSV columns and header resolution.

use csv::StringRecord;
use std::collections::BTreeSet;

/// Columns every input header must contain. Extra columns are ignored and
/// column order is irrelevant.
pub const REQUIRED_COLUMNS: [&str; 6] = ["date", "open", "high", "low", "close", "volume"];

/// Positions of the required columns within a header record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarColumns {
    pub date: usize,
    pub open: usize,
    pub high: usize,
    pub low: usize,
    pub close: usize,
    pub volume: usize,
}

impl BarColumns {
    /// Locate every required column in `headers`.
    ///
    /// Header names are matched exactly. When a name repeats, its first
    /// occurrence wins.
    pub fn resolve(headers: &StringRecord) -> Result<Self, SchemaError> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        match (
            find("date"),
            find("open"),
            find("high"),
            find("low"),
            find("close"),
            find("volume"),
        ) {
            (Some(date), Some(open), Some(high), Some(low), Some(close), Some(volume)) => {
                Ok(Self {
                    date,
                    open,
                    high,
                    low,
                    close,
                    volume,
                })
            }
            _ => {
                let missing: BTreeSet<&str> = REQUIRED_COLUMNS
                    .iter()
                    .copied()
                    .filter(|name| find(*name).is_none())
                    .collect();
                let found: BTreeSet<&str> = headers.iter().collect();
                Err(SchemaError {
                    missing: missing.into_iter().map(str::to_string).collect(),
                    found: found.into_iter().map(str::to_string).collect(),
                })
            }
        }
    }
}

/// Header is missing one or more required columns. Both lists are sorted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("CSV missing required columns: {missing:?}. Found: {found:?}")]
pub struct SchemaError {
    pub missing: Vec<String>,
    pub found: Vec<String>,
}
