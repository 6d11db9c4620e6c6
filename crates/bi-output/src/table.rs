//! CSV table output.

use std::path::Path;

use anyhow::{Context, Result};
use bi_common::any_to_string;
use bi_transform::TableFrame;
use csv::WriterBuilder;
use polars::prelude::Column;

/// Writes a table as CSV with a header row.
///
/// Cells are rendered with [`any_to_string`], so integral floats lose their
/// fractional part and nulls become empty fields.
pub fn write_table_csv(path: &Path, table: &TableFrame) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;

    let columns: Vec<&Column> = table.data.get_columns().iter().collect();
    let header: Vec<&str> = columns.iter().map(|column| column.name().as_str()).collect();
    writer
        .write_record(&header)
        .with_context(|| format!("write header of {}", table.name))?;

    let mut record: Vec<String> = Vec::with_capacity(columns.len());
    for idx in 0..table.data.height() {
        record.clear();
        for column in &columns {
            let value = column
                .get(idx)
                .with_context(|| format!("read {} row {}", table.name, idx + 1))?;
            record.push(any_to_string(value));
        }
        writer
            .write_record(&record)
            .with_context(|| format!("write {} row {}", table.name, idx + 1))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
