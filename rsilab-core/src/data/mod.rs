//! Bar data ingestion from CSV sources.

pub mod ingest;
pub mod schema;

pub use ingest::{load_bars, read_bars, EmptyKind, LoadError};
pub use schema::{BarColumns, SchemaError, REQUIRED_COLUMNS};
