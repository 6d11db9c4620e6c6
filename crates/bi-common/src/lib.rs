//! Shared utilities for the star-schema pipeline crates.
//!
//! Everything that reads a cell out of a Polars frame or writes a number back
//! out as text goes through this crate so that ingest, transform and output
//! agree on one conversion rule.

pub mod values;

pub use values::{
    any_to_f64, any_to_i64, any_to_string, any_to_text, format_numeric, parse_f64, parse_i64,
};
