//! End-to-end star-schema construction.
//!
//! Stages run in order, each inside its own span:
//!
//! 1. **extract**: typed records out of the input frames
//! 2. **deduplicate**: alias harmonization, energy dedup, AI aggregation
//! 3. **dimensions**: surrogate keys and enrichment
//! 4. **facts**: foreign keys, energy join, ordering
//!
//! The typed result is then projected into [`TableFrame`]s.

use std::time::Instant;

use bi_model::{
    AI_CONTENT_INPUT, AiContentRecord, ENERGY_INPUT, EnergyRecord, FactRecord, LookupTables,
    PipelineOptions,
};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use crate::dedupe::{aggregate_ai_content, deduplicate_energy, harmonize_countries};
use crate::dimensions::{Dimensions, build_dimensions};
use crate::error::{Result, TransformError};
use crate::extract::{ai_content_records, energy_records};
use crate::facts::assemble_facts;
use crate::frame::{TableFrame, date_dimension_frame, fact_frame, text_dimension_frame};

/// Row counts collected while the stages run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub energy_input_rows: usize,
    pub ai_input_rows: usize,
    /// Rows dropped for a null or blank grouping key.
    pub energy_excluded: usize,
    pub ai_excluded: usize,
    /// Rows whose country was rewritten to its canonical name.
    pub harmonized: usize,
    pub energy_rows: usize,
    pub ai_rows: usize,
    /// Foreign keys written as `-1`.
    pub unmapped_keys: usize,
    /// Fact rows without a matching energy row.
    pub unmatched_energy: usize,
}

/// The typed star schema before projection into frames.
#[derive(Debug, Clone)]
pub struct StarModel {
    /// Energy rows after deduplication, in first-seen order.
    pub energy: Vec<EnergyRecord>,
    /// AI-content rows after aggregation, in first-seen order.
    pub ai_content: Vec<AiContentRecord>,
    pub dimensions: Dimensions,
    /// Fact rows in output order.
    pub facts: Vec<FactRecord>,
    pub stats: RunStats,
}

/// The star schema as output tables.
#[derive(Debug, Clone)]
pub struct StarSchema {
    pub facts: TableFrame,
    /// Dimension tables in output order.
    pub dimensions: Vec<TableFrame>,
    pub stats: RunStats,
}

impl StarSchema {
    /// All tables, fact table first.
    pub fn tables(&self) -> impl Iterator<Item = &TableFrame> {
        std::iter::once(&self.facts).chain(self.dimensions.iter())
    }

    /// Looks up a table by name.
    pub fn table(&self, name: &str) -> Option<&TableFrame> {
        self.tables().find(|table| table.name == name)
    }
}

fn ensure_not_empty(table: &'static str, rows: usize, options: &PipelineOptions) -> Result<()> {
    if rows == 0 && options.reject_empty_input {
        return Err(TransformError::EmptyInput { table });
    }
    Ok(())
}

/// Runs deduplication, dimension building and fact assembly over typed rows.
pub fn run_stages(
    mut energy: Vec<EnergyRecord>,
    mut ai_content: Vec<AiContentRecord>,
    lookups: &LookupTables,
    options: &PipelineOptions,
) -> Result<StarModel> {
    ensure_not_empty(ENERGY_INPUT, energy.len(), options)?;
    ensure_not_empty(AI_CONTENT_INPUT, ai_content.len(), options)?;
    let mut stats = RunStats {
        energy_input_rows: energy.len(),
        ai_input_rows: ai_content.len(),
        ..RunStats::default()
    };

    let (energy, ai_content) = info_span!("deduplicate").in_scope(|| {
        let start = Instant::now();
        stats.harmonized = harmonize_countries(&mut energy, lookups)
            + harmonize_countries(&mut ai_content, lookups);
        let energy = deduplicate_energy(energy);
        let ai_content = aggregate_ai_content(ai_content);
        stats.energy_rows = energy.len();
        stats.ai_rows = ai_content.len();
        info!(
            harmonized = stats.harmonized,
            energy_rows = stats.energy_rows,
            ai_rows = stats.ai_rows,
            duration_ms = start.elapsed().as_millis(),
            "deduplicate complete"
        );
        (energy, ai_content)
    });

    let dimensions = info_span!("dimensions").in_scope(|| {
        let start = Instant::now();
        let dimensions = build_dimensions(&energy, &ai_content, lookups);
        info!(
            countries = dimensions.country.len(),
            industries = dimensions.industry.len(),
            years = dimensions.date.len(),
            regulation_statuses = dimensions.regulation.len(),
            ai_tools = dimensions.ai_tool.len(),
            duration_ms = start.elapsed().as_millis(),
            "dimensions complete"
        );
        dimensions
    });

    let assembled = info_span!("facts").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let assembled = assemble_facts(&ai_content, &energy, &dimensions, options)?;
        info!(
            fact_rows = assembled.facts.len(),
            unmatched_energy = assembled.unmatched_energy,
            unmapped_keys = assembled.unmapped_keys,
            duration_ms = start.elapsed().as_millis(),
            "facts complete"
        );
        Ok(assembled)
    })?;
    stats.unmapped_keys = assembled.unmapped_keys;
    stats.unmatched_energy = assembled.unmatched_energy;

    Ok(StarModel {
        energy,
        ai_content,
        dimensions,
        facts: assembled.facts,
        stats,
    })
}

/// Projects a typed model into its fact and dimension frames.
pub fn star_schema_frames(model: &StarModel) -> Result<StarSchema> {
    let dims = &model.dimensions;
    let dimensions = vec![
        text_dimension_frame(&dims.country)?,
        text_dimension_frame(&dims.industry)?,
        date_dimension_frame(&dims.date)?,
        text_dimension_frame(&dims.regulation)?,
        text_dimension_frame(&dims.ai_tool)?,
    ];
    Ok(StarSchema {
        facts: fact_frame(&model.facts)?,
        dimensions,
        stats: model.stats,
    })
}

/// Builds the star schema from the energy and AI-content input frames.
///
/// # Errors
///
/// Fails on a missing input column, a non-integer Year, an unmapped natural
/// key under [`bi_model::UnmappedKeyPolicy::Fail`], or an empty input when
/// [`PipelineOptions::reject_empty_input`] is set.
pub fn build_star_schema(
    energy: &DataFrame,
    ai_content: &DataFrame,
    lookups: &LookupTables,
    options: &PipelineOptions,
) -> Result<StarSchema> {
    let run_span = info_span!(
        "build_star_schema",
        energy_rows = energy.height(),
        ai_rows = ai_content.height()
    );
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let (energy_extract, ai_extract) = info_span!("extract").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let energy_extract = energy_records(energy)?;
        let ai_extract = ai_content_records(ai_content)?;
        info!(
            energy_rows = energy_extract.records.len(),
            ai_rows = ai_extract.records.len(),
            excluded = energy_extract.excluded + ai_extract.excluded,
            duration_ms = start.elapsed().as_millis(),
            "extract complete"
        );
        Ok((energy_extract, ai_extract))
    })?;

    let mut model = run_stages(
        energy_extract.records,
        ai_extract.records,
        lookups,
        options,
    )?;
    model.stats.energy_input_rows = energy.height();
    model.stats.ai_input_rows = ai_content.height();
    model.stats.energy_excluded = energy_extract.excluded;
    model.stats.ai_excluded = ai_extract.excluded;

    let schema = star_schema_frames(&model)?;
    info!(
        fact_rows = schema.facts.record_count(),
        duration_ms = run_start.elapsed().as_millis(),
        "star schema complete"
    );
    Ok(schema)
}
