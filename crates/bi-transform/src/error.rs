//! Error types for the star-schema transformation.

use bi_model::{DimensionKind, Stage};
use thiserror::Error;

/// Errors raised by the transformation stages. All of them abort the run.
#[derive(Debug, Error)]
pub enum TransformError {
    /// An expected column is absent from an input table.
    #[error("{stage}: column '{column}' not found in {table} input")]
    MissingColumn {
        stage: Stage,
        table: &'static str,
        column: String,
    },

    /// A fact row's natural key has no entry in its dimension.
    #[error("{stage}: no {dimension} entry for key '{key}'")]
    UnmappedKey {
        stage: Stage,
        dimension: DimensionKind,
        key: String,
    },

    /// An input table has no usable rows and empty inputs were rejected.
    #[error("{table} input has no usable rows")]
    EmptyInput { table: &'static str },

    /// A key cell holds a value of the wrong type.
    #[error("{stage}: invalid {column} value '{value}' in {table} input row {row}")]
    InvalidValue {
        stage: Stage,
        table: &'static str,
        column: String,
        row: usize,
        value: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
