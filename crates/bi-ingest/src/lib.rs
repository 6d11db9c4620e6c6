//! Input loading for the star-schema pipeline.
//!
//! # Features
//!
//! - **CSV Loading**: Read the energy and AI-content CSV files into Polars DataFrames
//! - **Lookup Loading**: Read alias / region / tool-type tables from TOML
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use bi_ingest::{load_lookup_tables, read_csv_frame};
//!
//! let energy = read_csv_frame(Path::new("data/global_energy_consumption.csv"))?;
//! let lookups = load_lookup_tables(Path::new("lookups.toml"))?;
//! ```

mod error;
mod lookups;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{read_csv_frame, validate_encoding};

// === Lookup Tables ===
pub use lookups::{load_lookup_tables, parse_lookup_tables};
