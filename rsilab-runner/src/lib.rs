//! RsiLab Runner: pipeline orchestration on top of `rsilab-core`.
//!
//! This crate provides:
//! - TOML configuration (RSI period, signal thresholds)
//! - Record assembly: bars + RSI + signals → output records
//! - JSON and CSV report export

pub mod config;
pub mod export;
pub mod result;
pub mod runner;

pub use config::{ConfigError, RsiConfig, SignalConfig};
pub use export::{export_csv, export_json, import_json, write_report, ExportError, OutputFormat};
pub use result::{round_rsi, OutputRecord, SignalReport};
pub use runner::{assemble_records, run_from_file, run_pipeline, DataQuality, RunError, RunProgress};
