//! Typed rows flowing between pipeline stages.

use serde::{Deserialize, Serialize};

use crate::columns::{AI_MEASURE_COUNT, ENERGY_MEASURE_COUNT};

/// Energy statistics for one country and year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyRecord {
    pub country: String,
    pub year: i64,
    pub measures: EnergyMeasures,
}

/// Energy measures of an [`EnergyRecord`]. Null source cells are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyMeasures {
    pub total_consumption_twh: Option<f64>,
    pub per_capita_use_kwh: Option<f64>,
    pub renewable_share_pct: Option<f64>,
    pub fossil_fuel_dependency_pct: Option<f64>,
    pub industrial_use_pct: Option<f64>,
    pub household_use_pct: Option<f64>,
    pub carbon_emissions_mt: Option<f64>,
    pub price_index_usd_kwh: Option<f64>,
}

impl EnergyMeasures {
    /// Measures in [`crate::columns::ENERGY_MEASURES`] order.
    pub fn to_array(&self) -> [Option<f64>; ENERGY_MEASURE_COUNT] {
        [
            self.total_consumption_twh,
            self.per_capita_use_kwh,
            self.renewable_share_pct,
            self.fossil_fuel_dependency_pct,
            self.industrial_use_pct,
            self.household_use_pct,
            self.carbon_emissions_mt,
            self.price_index_usd_kwh,
        ]
    }

    pub fn from_array(values: [Option<f64>; ENERGY_MEASURE_COUNT]) -> Self {
        let [
            total_consumption_twh,
            per_capita_use_kwh,
            renewable_share_pct,
            fossil_fuel_dependency_pct,
            industrial_use_pct,
            household_use_pct,
            carbon_emissions_mt,
            price_index_usd_kwh,
        ] = values;
        Self {
            total_consumption_twh,
            per_capita_use_kwh,
            renewable_share_pct,
            fossil_fuel_dependency_pct,
            industrial_use_pct,
            household_use_pct,
            carbon_emissions_mt,
            price_index_usd_kwh,
        }
    }
}

/// One AI-content survey row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiContentRecord {
    pub country: String,
    pub year: i64,
    pub industry: String,
    pub top_ai_tool: String,
    pub regulation_status: String,
    pub measures: AiMeasures,
}

impl AiContentRecord {
    /// The aggregation key of this row.
    pub fn group_key(&self) -> AiGroupKey {
        AiGroupKey {
            country: self.country.clone(),
            year: self.year,
            industry: self.industry.clone(),
            top_ai_tool: self.top_ai_tool.clone(),
            regulation_status: self.regulation_status.clone(),
        }
    }
}

/// Composite key under which AI-content rows are averaged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AiGroupKey {
    pub country: String,
    pub year: i64,
    pub industry: String,
    pub top_ai_tool: String,
    pub regulation_status: String,
}

/// AI-content measures of an [`AiContentRecord`]. Null source cells are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AiMeasures {
    pub generated_content_volume_tb: Option<f64>,
    pub adoption_rate_pct: Option<f64>,
    pub job_loss_pct: Option<f64>,
    pub revenue_increase_pct: Option<f64>,
    pub consumer_trust_pct: Option<f64>,
    pub market_share_pct: Option<f64>,
}

impl AiMeasures {
    /// Measures in [`crate::columns::AI_MEASURES`] order.
    pub fn to_array(&self) -> [Option<f64>; AI_MEASURE_COUNT] {
        [
            self.generated_content_volume_tb,
            self.adoption_rate_pct,
            self.job_loss_pct,
            self.revenue_increase_pct,
            self.consumer_trust_pct,
            self.market_share_pct,
        ]
    }

    pub fn from_array(values: [Option<f64>; AI_MEASURE_COUNT]) -> Self {
        let [
            generated_content_volume_tb,
            adoption_rate_pct,
            job_loss_pct,
            revenue_increase_pct,
            consumer_trust_pct,
            market_share_pct,
        ] = values;
        Self {
            generated_content_volume_tb,
            adoption_rate_pct,
            job_loss_pct,
            revenue_increase_pct,
            consumer_trust_pct,
            market_share_pct,
        }
    }
}

/// Surrogate foreign keys of a fact row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FactKeys {
    pub country_id: i64,
    pub date_id: i64,
    pub industry_id: i64,
    pub regulation_id: i64,
    pub tool_id: i64,
}

impl FactKeys {
    /// Keys in [`crate::columns::FACT_KEY_COLUMNS`] order.
    pub fn to_array(&self) -> [i64; 5] {
        [
            self.country_id,
            self.date_id,
            self.industry_id,
            self.regulation_id,
            self.tool_id,
        ]
    }
}

/// One row of the fact table. Every numeric field is populated; missing
/// source values hold [`crate::columns::SENTINEL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactRecord {
    pub keys: FactKeys,
    pub ai_measures: [f64; AI_MEASURE_COUNT],
    pub energy_measures: [f64; ENERGY_MEASURE_COUNT],
    /// Whether an energy row matched on (Country_ID, Date_ID).
    pub energy_matched: bool,
}
