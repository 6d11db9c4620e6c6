//! Typed record extraction from input frames.
//!
//! Columns are looked up by name; extra columns are ignored. A row whose
//! grouping key has a null or blank cell is excluded and counted. A Year cell
//! that is present but not an integer aborts the run.

use bi_common::{any_to_f64, any_to_i64, any_to_string, any_to_text};
use bi_model::columns::{COUNTRY, INDUSTRY, REGULATION_STATUS, TOP_AI_TOOL, YEAR};
use bi_model::{
    AI_CONTENT_INPUT, AI_MEASURE_COUNT, AI_MEASURES, AiContentRecord, AiMeasures, ENERGY_INPUT,
    ENERGY_MEASURE_COUNT, ENERGY_MEASURES, EnergyMeasures, EnergyRecord, Stage,
};
use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::warn;

use crate::error::{Result, TransformError};

/// Records read from one input table.
#[derive(Debug, Clone)]
pub struct Extracted<T> {
    pub records: Vec<T>,
    /// Rows dropped because a grouping key was null or blank.
    pub excluded: usize,
}

fn required_column<'a>(df: &'a DataFrame, table: &'static str, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| TransformError::MissingColumn {
            stage: Stage::Extract,
            table,
            column: name.to_string(),
        })
}

fn required_columns<'a>(
    df: &'a DataFrame,
    table: &'static str,
    names: impl IntoIterator<Item = &'static str>,
) -> Result<Vec<&'a Column>> {
    names
        .into_iter()
        .map(|name| required_column(df, table, name))
        .collect()
}

fn cell(column: &Column, idx: usize) -> AnyValue<'_> {
    column.get(idx).unwrap_or(AnyValue::Null)
}

fn read_year(column: &Column, idx: usize, table: &'static str) -> Result<Option<i64>> {
    let value = cell(column, idx);
    if any_to_text(value.clone()).is_none() {
        return Ok(None);
    }
    match any_to_i64(value.clone()) {
        Some(year) => Ok(Some(year)),
        None => Err(TransformError::InvalidValue {
            stage: Stage::Extract,
            table,
            column: YEAR.to_string(),
            row: idx + 1,
            value: any_to_string(value),
        }),
    }
}

fn read_measures<const N: usize>(columns: &[&Column], idx: usize) -> [Option<f64>; N] {
    let mut values = [None; N];
    for (slot, column) in values.iter_mut().zip(columns) {
        *slot = any_to_f64(cell(column, idx));
    }
    values
}

fn report_excluded(table: &'static str, excluded: usize) {
    if excluded > 0 {
        warn!(table, excluded, "rows with a missing grouping key excluded");
    }
}

/// Reads energy rows from a frame carrying the energy dataset columns.
pub fn energy_records(df: &DataFrame) -> Result<Extracted<EnergyRecord>> {
    let country_col = required_column(df, ENERGY_INPUT, COUNTRY)?;
    let year_col = required_column(df, ENERGY_INPUT, YEAR)?;
    let measure_cols = required_columns(df, ENERGY_INPUT, ENERGY_MEASURES.map(|m| m.source))?;

    let mut records = Vec::with_capacity(df.height());
    let mut excluded = 0usize;
    for idx in 0..df.height() {
        let year = read_year(year_col, idx, ENERGY_INPUT)?;
        let (Some(country), Some(year)) = (any_to_text(cell(country_col, idx)), year) else {
            excluded += 1;
            continue;
        };
        let values = read_measures::<ENERGY_MEASURE_COUNT>(&measure_cols, idx);
        records.push(EnergyRecord {
            country,
            year,
            measures: EnergyMeasures::from_array(values),
        });
    }
    report_excluded(ENERGY_INPUT, excluded);
    Ok(Extracted { records, excluded })
}

/// Reads AI-content rows from a frame carrying the AI-impact dataset columns.
pub fn ai_content_records(df: &DataFrame) -> Result<Extracted<AiContentRecord>> {
    let country_col = required_column(df, AI_CONTENT_INPUT, COUNTRY)?;
    let year_col = required_column(df, AI_CONTENT_INPUT, YEAR)?;
    let industry_col = required_column(df, AI_CONTENT_INPUT, INDUSTRY)?;
    let tool_col = required_column(df, AI_CONTENT_INPUT, TOP_AI_TOOL)?;
    let regulation_col = required_column(df, AI_CONTENT_INPUT, REGULATION_STATUS)?;
    let measure_cols = required_columns(df, AI_CONTENT_INPUT, AI_MEASURES.map(|m| m.source))?;

    let mut records = Vec::with_capacity(df.height());
    let mut excluded = 0usize;
    for idx in 0..df.height() {
        let year = read_year(year_col, idx, AI_CONTENT_INPUT)?;
        let (Some(country), Some(year), Some(industry), Some(top_ai_tool), Some(regulation_status)) = (
            any_to_text(cell(country_col, idx)),
            year,
            any_to_text(cell(industry_col, idx)),
            any_to_text(cell(tool_col, idx)),
            any_to_text(cell(regulation_col, idx)),
        ) else {
            excluded += 1;
            continue;
        };
        let values = read_measures::<AI_MEASURE_COUNT>(&measure_cols, idx);
        records.push(AiContentRecord {
            country,
            year,
            industry,
            top_ai_tool,
            regulation_status,
            measures: AiMeasures::from_array(values),
        });
    }
    report_excluded(AI_CONTENT_INPUT, excluded);
    Ok(Extracted { records, excluded })
}
