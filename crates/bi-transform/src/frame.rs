//! Star-schema tables as polars DataFrames.

use std::hash::Hash;

use bi_model::columns::FACT_KEY_COLUMNS;
use bi_model::{AI_MEASURES, DimensionTable, ENERGY_MEASURES, FACT_TABLE, FactRecord, UNKNOWN};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use crate::error::Result;

/// A named output table.
///
/// The name doubles as the file stem when the table is exported.
#[derive(Debug, Clone)]
pub struct TableFrame {
    /// Table name (e.g., "fact_final", "dim_country").
    pub name: String,
    /// The table contents.
    pub data: DataFrame,
}

impl TableFrame {
    pub fn new(name: impl Into<String>, data: DataFrame) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Returns the number of records in the table.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// File name used on export.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }
}

fn dimension_frame<K: Clone + Eq + Hash>(
    table: &DimensionTable<K>,
    key_column: Column,
) -> Result<TableFrame> {
    let kind = table.kind();
    let ids: Vec<i64> = table.rows().iter().map(|row| row.id).collect();
    let mut columns = vec![key_column, Series::new(kind.id_column().into(), ids).into_column()];
    if let Some(attribute) = kind.attribute_column() {
        let values: Vec<String> = table
            .rows()
            .iter()
            .map(|row| row.attribute.clone().unwrap_or_else(|| UNKNOWN.to_string()))
            .collect();
        columns.push(Series::new(attribute.into(), values).into_column());
    }
    Ok(TableFrame::new(kind.table_name(), DataFrame::new(columns)?))
}

/// Frame of a dimension keyed by text (country, industry, status, tool).
pub fn text_dimension_frame(table: &DimensionTable<String>) -> Result<TableFrame> {
    let keys: Vec<String> = table.rows().iter().map(|row| row.key.clone()).collect();
    let key_column = Series::new(table.kind().key_column().into(), keys).into_column();
    dimension_frame(table, key_column)
}

/// Frame of the date dimension: Year, Date_ID, Decade.
pub fn date_dimension_frame(table: &DimensionTable<i64>) -> Result<TableFrame> {
    let years: Vec<i64> = table.rows().iter().map(|row| row.key).collect();
    let key_column = Series::new(table.kind().key_column().into(), years).into_column();
    dimension_frame(table, key_column)
}

/// Frame of the fact table with keys, AI measures and energy measures in
/// output order.
pub fn fact_frame(facts: &[FactRecord]) -> Result<TableFrame> {
    let mut columns: Vec<Column> =
        Vec::with_capacity(FACT_KEY_COLUMNS.len() + AI_MEASURES.len() + ENERGY_MEASURES.len());

    for (idx, name) in FACT_KEY_COLUMNS.iter().enumerate() {
        let values: Vec<i64> = facts.iter().map(|fact| fact.keys.to_array()[idx]).collect();
        columns.push(Series::new((*name).into(), values).into_column());
    }
    for (idx, measure) in AI_MEASURES.iter().enumerate() {
        let values: Vec<f64> = facts.iter().map(|fact| fact.ai_measures[idx]).collect();
        columns.push(Series::new(measure.output.into(), values).into_column());
    }
    for (idx, measure) in ENERGY_MEASURES.iter().enumerate() {
        let values: Vec<f64> = facts.iter().map(|fact| fact.energy_measures[idx]).collect();
        columns.push(Series::new(measure.output.into(), values).into_column());
    }

    Ok(TableFrame::new(FACT_TABLE, DataFrame::new(columns)?))
}
