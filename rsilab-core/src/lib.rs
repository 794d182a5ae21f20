//! RsiLab Core: domain types, bar ingestion, RSI and signal classification.
//!
//! This crate contains the numeric heart of the signal pipeline:
//! - Domain types (`Bar`)
//! - CSV ingestion with schema and value validation
//! - Wilder-smoothed RSI, aligned index-for-index with its input
//! - Stateless RSI → BUY/SELL/HOLD classification
//!
//! Nothing here retains state between calls.

pub mod data;
pub mod domain;
pub mod indicators;
pub mod signals;
