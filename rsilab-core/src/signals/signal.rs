//! Signal: a discretized trading recommendation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading recommendation derived from one RSI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    /// RSI below the oversold threshold.
    Buy,
    /// RSI above the overbought threshold.
    Sell,
    /// RSI between the thresholds, boundaries included.
    Hold,
}

impl Signal {
    /// Wire label ("BUY", "SELL", "HOLD").
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
