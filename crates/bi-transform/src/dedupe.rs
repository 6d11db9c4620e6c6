//! Country harmonization, energy deduplication and AI-content aggregation.
//!
//! Both inputs contain repeated rows for the same natural key. Energy rows
//! are reduced to one representative per (country, year) so that the fact
//! join never fans out; AI-content rows are averaged per
//! (country, year, industry, tool, regulation status).

use bi_model::{
    AI_MEASURE_COUNT, AiContentRecord, AiMeasures, EnergyRecord, LookupTables,
};

use crate::ordered::group_first_seen;

/// A record with a country field subject to alias harmonization.
pub trait CountryField {
    fn country_mut(&mut self) -> &mut String;
}

impl CountryField for EnergyRecord {
    fn country_mut(&mut self) -> &mut String {
        &mut self.country
    }
}

impl CountryField for AiContentRecord {
    fn country_mut(&mut self) -> &mut String {
        &mut self.country
    }
}

/// Replaces aliased country names with their canonical spelling.
///
/// Returns the number of rows rewritten.
pub fn harmonize_countries<R: CountryField>(rows: &mut [R], lookups: &LookupTables) -> usize {
    let mut rewritten = 0usize;
    for row in rows.iter_mut() {
        let country = row.country_mut();
        let canonical = lookups.canonical_country(country);
        if canonical != country.as_str() {
            let canonical = canonical.to_string();
            *country = canonical;
            rewritten += 1;
        }
    }
    rewritten
}

/// Median of a non-empty slice; the mean of the two middle values for even lengths.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Index of the row whose total consumption lies closest to the group median.
///
/// Exact ties go to the earliest row. Rows without a total are skipped; a
/// group with no totals at all resolves to its first row.
fn representative_index(group: &[EnergyRecord]) -> usize {
    let totals: Vec<f64> = group
        .iter()
        .filter_map(|row| row.measures.total_consumption_twh)
        .collect();
    let Some(median) = median(&totals) else {
        return 0;
    };
    let mut best: Option<(usize, f64)> = None;
    for (idx, row) in group.iter().enumerate() {
        let Some(total) = row.measures.total_consumption_twh else {
            continue;
        };
        let distance = (total - median).abs();
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((idx, distance));
        }
    }
    best.map_or(0, |(idx, _)| idx)
}

/// Collapses energy rows to one per (country, year).
///
/// Output follows the order in which each (country, year) first appears.
pub fn deduplicate_energy(rows: Vec<EnergyRecord>) -> Vec<EnergyRecord> {
    group_first_seen(rows, |row| (row.country.clone(), row.year))
        .into_iter()
        .map(|mut group| {
            let idx = representative_index(&group);
            group.swap_remove(idx)
        })
        .collect()
}

fn mean(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = values
        .flatten()
        .fold((0.0_f64, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn average_group(group: Vec<AiContentRecord>) -> Option<AiContentRecord> {
    let measures: Vec<[Option<f64>; AI_MEASURE_COUNT]> =
        group.iter().map(|row| row.measures.to_array()).collect();
    let mut averaged = [None; AI_MEASURE_COUNT];
    for (idx, slot) in averaged.iter_mut().enumerate() {
        *slot = mean(measures.iter().map(|values| values[idx]));
    }
    let mut first = group.into_iter().next()?;
    first.measures = AiMeasures::from_array(averaged);
    Some(first)
}

/// Averages AI-content rows sharing (country, year, industry, tool, regulation status).
///
/// Nulls are skipped when averaging; a measure that is null across the whole
/// group stays null. Output follows first appearance of each key.
pub fn aggregate_ai_content(rows: Vec<AiContentRecord>) -> Vec<AiContentRecord> {
    group_first_seen(rows, AiContentRecord::group_key)
        .into_iter()
        .filter_map(average_group)
        .collect()
}
