//! Tally of signals over a series.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Signal;

/// Number of BUY/SELL/HOLD signals plus undefined ("pending") positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalCounts {
    pub buy: usize,
    pub sell: usize,
    pub hold: usize,
    pub pending: usize,
}

impl SignalCounts {
    pub fn tally<'a>(signals: impl IntoIterator<Item = &'a Option<Signal>>) -> Self {
        signals
            .into_iter()
            .fold(Self::default(), |mut counts, signal| {
                match signal {
                    Some(Signal::Buy) => counts.buy += 1,
                    Some(Signal::Sell) => counts.sell += 1,
                    Some(Signal::Hold) => counts.hold += 1,
                    None => counts.pending += 1,
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.buy + self.sell + self.hold + self.pending
    }
}

impl fmt::Display for SignalCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} BUY, {} SELL, {} HOLD, {} pending",
            self.buy, self.sell, self.hold, self.pending
        )
    }
}
