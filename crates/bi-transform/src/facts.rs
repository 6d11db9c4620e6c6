//! Fact table assembly.
//!
//! 1. **Foreign keys**: resolve every natural key through its dimension
//! 2. **Energy join**: left join on (Country_ID, Date_ID)
//! 3. **Sentinel fill**: every missing numeric value becomes `-1`
//! 4. **Sort**: ascending (Country_ID, Date_ID, Industry_ID)

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Display;
use std::hash::Hash;

use bi_model::{
    AiContentRecord, AiMeasures, DimensionTable, ENERGY_MEASURE_COUNT, EnergyMeasures,
    EnergyRecord, FactKeys, FactRecord, PipelineOptions, SENTINEL, SENTINEL_KEY, Stage,
    UnmappedKeyPolicy,
};
use tracing::warn;

use crate::dimensions::Dimensions;
use crate::error::{Result, TransformError};

/// An AI-content row with its foreign keys resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedAiRow {
    pub keys: FactKeys,
    pub measures: AiMeasures,
}

/// An energy row keyed by (Country_ID, Date_ID).
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedEnergyRow {
    pub country_id: i64,
    pub date_id: i64,
    pub measures: EnergyMeasures,
}

/// Output of fact assembly.
#[derive(Debug, Clone, Default)]
pub struct AssembledFacts {
    pub facts: Vec<FactRecord>,
    /// Natural keys written as `-1` under [`UnmappedKeyPolicy::Sentinel`].
    pub unmapped_keys: usize,
    /// Fact rows with no energy match.
    pub unmatched_energy: usize,
}

struct KeyResolver {
    policy: UnmappedKeyPolicy,
    unmapped: usize,
}

impl KeyResolver {
    fn new(policy: UnmappedKeyPolicy) -> Self {
        Self {
            policy,
            unmapped: 0,
        }
    }

    fn resolve<K>(&mut self, table: &DimensionTable<K>, key: &K) -> Result<Option<i64>>
    where
        K: Clone + Eq + Hash + Display,
    {
        if let Some(id) = table.id_of(key) {
            return Ok(Some(id));
        }
        match self.policy {
            UnmappedKeyPolicy::Fail => Err(TransformError::UnmappedKey {
                stage: Stage::Facts,
                dimension: table.kind(),
                key: key.to_string(),
            }),
            UnmappedKeyPolicy::Sentinel => {
                self.unmapped += 1;
                Ok(None)
            }
        }
    }

    fn resolve_or_sentinel<K>(&mut self, table: &DimensionTable<K>, key: &K) -> Result<i64>
    where
        K: Clone + Eq + Hash + Display,
    {
        Ok(self.resolve(table, key)?.unwrap_or(SENTINEL_KEY))
    }
}

fn assign_ai_keys(
    ai: &[AiContentRecord],
    dims: &Dimensions,
    resolver: &mut KeyResolver,
) -> Result<Vec<KeyedAiRow>> {
    ai.iter()
        .map(|row| {
            let keys = FactKeys {
                country_id: resolver.resolve_or_sentinel(&dims.country, &row.country)?,
                date_id: resolver.resolve_or_sentinel(&dims.date, &row.year)?,
                industry_id: resolver.resolve_or_sentinel(&dims.industry, &row.industry)?,
                regulation_id: resolver
                    .resolve_or_sentinel(&dims.regulation, &row.regulation_status)?,
                tool_id: resolver.resolve_or_sentinel(&dims.ai_tool, &row.top_ai_tool)?,
            };
            Ok(KeyedAiRow {
                keys,
                measures: row.measures,
            })
        })
        .collect()
}

/// Resolves the five foreign keys of every AI-content row.
///
/// Under [`UnmappedKeyPolicy::Fail`] the first unmapped natural key aborts
/// with [`TransformError::UnmappedKey`]; under
/// [`UnmappedKeyPolicy::Sentinel`] it becomes `-1`.
pub fn assign_foreign_keys(
    ai: &[AiContentRecord],
    dims: &Dimensions,
    policy: UnmappedKeyPolicy,
) -> Result<Vec<KeyedAiRow>> {
    let mut resolver = KeyResolver::new(policy);
    assign_ai_keys(ai, dims, &mut resolver)
}

fn assign_energy_rows(
    energy: &[EnergyRecord],
    dims: &Dimensions,
    resolver: &mut KeyResolver,
) -> Result<Vec<KeyedEnergyRow>> {
    let mut keyed = Vec::with_capacity(energy.len());
    for row in energy {
        let country_id = resolver.resolve(&dims.country, &row.country)?;
        let date_id = resolver.resolve(&dims.date, &row.year)?;
        // An energy row with a sentinel key could never match a real fact row.
        if let (Some(country_id), Some(date_id)) = (country_id, date_id) {
            keyed.push(KeyedEnergyRow {
                country_id,
                date_id,
                measures: row.measures,
            });
        }
    }
    Ok(keyed)
}

/// Keys energy rows by (Country_ID, Date_ID).
///
/// Under [`UnmappedKeyPolicy::Sentinel`] rows with an unmapped key are left
/// out of the join.
pub fn assign_energy_keys(
    energy: &[EnergyRecord],
    dims: &Dimensions,
    policy: UnmappedKeyPolicy,
) -> Result<Vec<KeyedEnergyRow>> {
    let mut resolver = KeyResolver::new(policy);
    assign_energy_rows(energy, dims, &mut resolver)
}

fn fill_sentinel<const N: usize>(values: [Option<f64>; N]) -> [f64; N] {
    values.map(|value| value.unwrap_or(SENTINEL))
}

/// Left-joins energy measures onto fact rows and fills missing values.
///
/// A fact row without a match receives `-1` for every energy measure. Should
/// two energy rows share (Country_ID, Date_ID), the first one wins.
pub fn join_energy(facts: Vec<KeyedAiRow>, energy: &[KeyedEnergyRow]) -> Vec<FactRecord> {
    let mut index: HashMap<(i64, i64), &EnergyMeasures> = HashMap::with_capacity(energy.len());
    let mut duplicates = 0usize;
    for row in energy {
        match index.entry((row.country_id, row.date_id)) {
            Entry::Vacant(slot) => {
                slot.insert(&row.measures);
            }
            Entry::Occupied(_) => duplicates += 1,
        }
    }
    if duplicates > 0 {
        warn!(duplicates, "duplicate energy rows per country and year; first kept");
    }

    facts
        .into_iter()
        .map(|fact| {
            let matched = index.get(&(fact.keys.country_id, fact.keys.date_id));
            let energy_measures = match matched {
                Some(measures) => fill_sentinel(measures.to_array()),
                None => [SENTINEL; ENERGY_MEASURE_COUNT],
            };
            FactRecord {
                keys: fact.keys,
                ai_measures: fill_sentinel(fact.measures.to_array()),
                energy_measures,
                energy_matched: matched.is_some(),
            }
        })
        .collect()
}

/// Orders facts by (Country_ID, Date_ID, Industry_ID). The sort is stable.
pub fn sort_facts(facts: &mut [FactRecord]) {
    facts.sort_by_key(|fact| {
        (
            fact.keys.country_id,
            fact.keys.date_id,
            fact.keys.industry_id,
        )
    });
}

/// Runs foreign-key assignment, the energy join and ordering.
pub fn assemble_facts(
    ai: &[AiContentRecord],
    energy: &[EnergyRecord],
    dims: &Dimensions,
    options: &PipelineOptions,
) -> Result<AssembledFacts> {
    let mut resolver = KeyResolver::new(options.unmapped_keys);
    let keyed_ai = assign_ai_keys(ai, dims, &mut resolver)?;
    let keyed_energy = assign_energy_rows(energy, dims, &mut resolver)?;
    if resolver.unmapped > 0 {
        warn!(
            unmapped = resolver.unmapped,
            "natural keys without a dimension entry written as -1"
        );
    }

    let mut facts = join_energy(keyed_ai, &keyed_energy);
    sort_facts(&mut facts);
    let unmatched_energy = facts.iter().filter(|fact| !fact.energy_matched).count();
    Ok(AssembledFacts {
        facts,
        unmapped_keys: resolver.unmapped,
        unmatched_energy,
    })
}
