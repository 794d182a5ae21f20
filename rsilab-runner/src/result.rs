//! Output records produced by a pipeline run.

use rsilab_core::signals::{Signal, SignalCounts};
use serde::{Deserialize, Serialize};

/// One annotated bar: date and close from the input, plus RSI and signal.
///
/// `rsi` is rounded to two decimals; `None` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub date: String,
    pub close: f64,
    pub rsi: Option<f64>,
    pub signal: Option<Signal>,
}

/// Everything a run produces, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalReport {
    pub records: Vec<OutputRecord>,
    pub counts: SignalCounts,
    pub period: usize,
}

impl SignalReport {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Round an RSI value to two decimals for display.
pub fn round_rsi(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
