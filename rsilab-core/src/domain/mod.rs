//! Domain types for RsiLab

pub mod bar;

pub use bar::{closes, Bar};
