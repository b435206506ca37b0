//! Append-only simulation log
//!
//! One header line, then one row per step. Nothing is ever read back; the
//! file exists for offline analysis.

pub mod csv;

pub use csv::CsvLog;
