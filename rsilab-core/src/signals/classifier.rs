//! RSI → signal thresholding.

use serde::{Deserialize, Serialize};

use super::Signal;

/// Oversold/overbought cut-offs.
///
/// Values strictly below `oversold` are BUY, strictly above `overbought` are
/// SELL; everything in between, both boundaries included, is HOLD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub oversold: f64,
    pub overbought: f64,
}

impl Thresholds {
    pub const DEFAULT_OVERSOLD: f64 = 30.0;
    pub const DEFAULT_OVERBOUGHT: f64 = 70.0;

    pub fn classify(&self, rsi: Option<f64>) -> Option<Signal> {
        let value = rsi?;
        Some(if value < self.oversold {
            Signal::Buy
        } else if value > self.overbought {
            Signal::Sell
        } else {
            Signal::Hold
        })
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            oversold: Self::DEFAULT_OVERSOLD,
            overbought: Self::DEFAULT_OVERBOUGHT,
        }
    }
}

/// Classify one RSI value with the default 30/70 thresholds.
pub fn classify(rsi: Option<f64>) -> Option<Signal> {
    Thresholds::default().classify(rsi)
}

/// Classify every value of an RSI series, preserving order and length.
pub fn classify_series(rsi: &[Option<f64>], thresholds: &Thresholds) -> Vec<Option<Signal>> {
    rsi.iter().map(|&v| thresholds.classify(v)).collect()
}
