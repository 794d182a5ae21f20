//! Signal classification: RSI values to discrete trading signals.
//!
//! Classification is stateless: each signal depends only on the RSI value at
//! the same index. An undefined RSI always yields an undefined signal.

pub mod classifier;
pub mod counts;
pub mod signal;

pub use classifier::{classify, classify_series, Thresholds};
pub use counts::SignalCounts;
pub use signal::Signal;
