//! Dimension tables with surrogate keys and enrichment.
//!
//! Natural keys are collected in first-seen order, energy rows before
//! AI-content rows where a dimension draws from both, and numbered from 1.
//! Given identical input order, surrogate keys are identical across runs.

use bi_model::{
    AiContentRecord, DimensionKind, DimensionTable, EnergyRecord, LookupTables,
};
use tracing::debug;

use crate::ordered::FirstSeen;

/// The five dimensions of the star schema.
#[derive(Debug, Clone)]
pub struct Dimensions {
    pub country: DimensionTable<String>,
    pub industry: DimensionTable<String>,
    pub date: DimensionTable<i64>,
    pub regulation: DimensionTable<String>,
    pub ai_tool: DimensionTable<String>,
}

/// Decade label of a year: `floor(year / 10) * 10` followed by `s`.
///
/// ```
/// use bi_transform::dimensions::decade_label;
///
/// assert_eq!(decade_label(1995), "1990s");
/// assert_eq!(decade_label(2004), "2000s");
/// assert_eq!(decade_label(-5), "-10s");
/// ```
pub fn decade_label(year: i64) -> String {
    // Widened so the decade of years near `i64::MIN` does not overflow.
    format!("{}s", i128::from(year).div_euclid(10) * 10)
}

/// Countries from both inputs with their region.
pub fn build_country_dimension(
    energy: &[EnergyRecord],
    ai: &[AiContentRecord],
    lookups: &LookupTables,
) -> DimensionTable<String> {
    let countries: FirstSeen<String> = energy
        .iter()
        .map(|row| row.country.clone())
        .chain(ai.iter().map(|row| row.country.clone()))
        .collect();
    DimensionTable::from_keys(DimensionKind::Country, countries, |country| {
        Some(lookups.region_of(country).to_string())
    })
}

pub fn build_industry_dimension(ai: &[AiContentRecord]) -> DimensionTable<String> {
    let industries: FirstSeen<String> = ai.iter().map(|row| row.industry.clone()).collect();
    DimensionTable::from_keys(DimensionKind::Industry, industries, |_| None)
}

/// Years from both inputs with their decade.
pub fn build_date_dimension(
    energy: &[EnergyRecord],
    ai: &[AiContentRecord],
) -> DimensionTable<i64> {
    let years: FirstSeen<i64> = energy
        .iter()
        .map(|row| row.year)
        .chain(ai.iter().map(|row| row.year))
        .collect();
    DimensionTable::from_keys(DimensionKind::Date, years, |year| {
        Some(decade_label(*year))
    })
}

pub fn build_regulation_dimension(ai: &[AiContentRecord]) -> DimensionTable<String> {
    let statuses: FirstSeen<String> = ai
        .iter()
        .map(|row| row.regulation_status.clone())
        .collect();
    DimensionTable::from_keys(DimensionKind::RegulationStatus, statuses, |_| None)
}

/// AI tools with their tool type.
pub fn build_ai_tool_dimension(
    ai: &[AiContentRecord],
    lookups: &LookupTables,
) -> DimensionTable<String> {
    let tools: FirstSeen<String> = ai.iter().map(|row| row.top_ai_tool.clone()).collect();
    DimensionTable::from_keys(DimensionKind::AiTool, tools, |tool| {
        Some(lookups.tool_type_of(tool).to_string())
    })
}

/// Builds all five dimensions from deduplicated inputs.
pub fn build_dimensions(
    energy: &[EnergyRecord],
    ai: &[AiContentRecord],
    lookups: &LookupTables,
) -> Dimensions {
    let dimensions = Dimensions {
        country: build_country_dimension(energy, ai, lookups),
        industry: build_industry_dimension(ai),
        date: build_date_dimension(energy, ai),
        regulation: build_regulation_dimension(ai),
        ai_tool: build_ai_tool_dimension(ai, lookups),
    };
    for (kind, rows) in dimensions.row_counts() {
        debug!(dimension = %kind, rows, "dimension built");
    }
    dimensions
}

impl Dimensions {
    /// Row count per dimension, in output order.
    pub fn row_counts(&self) -> [(DimensionKind, usize); 5] {
        [
            (DimensionKind::Country, self.country.len()),
            (DimensionKind::Industry, self.industry.len()),
            (DimensionKind::Date, self.date.len()),
            (DimensionKind::RegulationStatus, self.regulation.len()),
            (DimensionKind::AiTool, self.ai_tool.len()),
        ]
    }
}
