//! Relative Strength Index (RSI).
//!
//! Uses Wilder smoothing of average gains and average losses.
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! Lookback: period.
//! Edge cases: avg_loss == 0 → RSI = 100 (this includes a flat series, where
//! both averages are zero); avg_gain == 0 → RSI = 0.

use super::Indicator;

/// Period used when none is configured.
pub const DEFAULT_RSI_PERIOD: usize = 14;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(DEFAULT_RSI_PERIOD)
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, closes: &[f64]) -> Vec<Option<f64>> {
        wilder_rsi(closes, self.period)
    }
}

/// Running Wilder averages threaded through the recurrence.
#[derive(Debug, Clone, Copy)]
struct WilderAverages {
    avg_gain: f64,
    avg_loss: f64,
}

impl WilderAverages {
    fn smooth(self, gain: f64, loss: f64, period: f64) -> Self {
        Self {
            avg_gain: (self.avg_gain * (period - 1.0) + gain) / period,
            avg_loss: (self.avg_loss * (period - 1.0) + loss) / period,
        }
    }

    fn rsi(self) -> f64 {
        rsi_from_averages(self.avg_gain, self.avg_loss)
    }
}

/// Compute Wilder's RSI over `closes`.
///
/// The output is aligned index-for-index with `closes`. The first `period`
/// entries are `None`; index `period` holds the first value, seeded by the
/// simple mean of the first `period` gains and losses. With fewer than
/// `period + 1` closes (or `period == 0`) every entry is `None`.
///
/// Closes must be in chronological order; each value depends on the smoothed
/// averages of every earlier change. Non-finite closes are not validated and
/// propagate as NaN.
pub fn wilder_rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    if period == 0 || n < period + 1 {
        return vec![None; n];
    }

    let changes: Vec<(f64, f64)> = closes
        .windows(2)
        .map(|w| split_change(w[1] - w[0]))
        .collect();

    let period_f = period as f64;
    let (sum_gain, sum_loss) = changes[..period]
        .iter()
        .fold((0.0, 0.0), |(g, l), &(gain, loss)| (g + gain, l + loss));
    let seed = WilderAverages {
        avg_gain: sum_gain / period_f,
        avg_loss: sum_loss / period_f,
    };

    let smoothed = changes[period..]
        .iter()
        .scan(seed, |avgs, &(gain, loss)| {
            *avgs = avgs.smooth(gain, loss, period_f);
            Some(avgs.rsi())
        });

    let mut result = vec![None; period];
    result.reserve(n - period);
    result.extend(std::iter::once(seed.rsi()).chain(smoothed).map(Some));
    result
}

/// Split a price change into (gain, loss magnitude).
fn split_change(change: f64) -> (f64, f64) {
    if change.is_nan() {
        (f64::NAN, f64::NAN)
    } else if change > 0.0 {
        (change, 0.0)
    } else if change < 0.0 {
        (0.0, -change)
    } else {
        (0.0, 0.0)
    }
}

/// RSI from smoothed averages.
///
/// A zero average loss yields 100 even when the average gain is also zero,
/// so a flat series reads as 100 rather than 0/0.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else if avg_gain == 0.0 {
        0.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
