//! Source and output column vocabulary.
//!
//! Input columns keep the header names of the published energy and AI-impact
//! datasets. Output columns follow the fact-table vocabulary; the measure
//! arrays below are index-aligned with [`crate::EnergyMeasures`] and
//! [`crate::AiMeasures`].

pub const COUNTRY: &str = "Country";
pub const YEAR: &str = "Year";
pub const INDUSTRY: &str = "Industry";
pub const TOP_AI_TOOL: &str = "Top AI Tools Used";
pub const REGULATION_STATUS: &str = "Regulation Status";

/// Name of the energy input table in error messages and logs.
pub const ENERGY_INPUT: &str = "energy";
/// Name of the AI-content input table in error messages and logs.
pub const AI_CONTENT_INPUT: &str = "ai_content";

/// Name of the fact table.
pub const FACT_TABLE: &str = "fact_final";

/// Value written for every numeric fact field that has no source value.
pub const SENTINEL: f64 = -1.0;

/// Foreign key written for an unmapped natural key under the sentinel policy.
pub const SENTINEL_KEY: i64 = -1;

/// A measure column: where it is read from and what it is called in the fact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureColumn {
    pub source: &'static str,
    pub output: &'static str,
}

const fn measure(source: &'static str, output: &'static str) -> MeasureColumn {
    MeasureColumn { source, output }
}

pub const AI_MEASURE_COUNT: usize = 6;
pub const ENERGY_MEASURE_COUNT: usize = 8;

/// AI-content measures in fact-table order.
pub const AI_MEASURES: [MeasureColumn; AI_MEASURE_COUNT] = [
    measure(
        "AI-Generated Content Volume (TBs per year)",
        "AI_Yearly_Generated_Content_Volume_TB",
    ),
    measure("AI Adoption Rate (%)", "AI_Adoption_Rate"),
    measure("Job Loss Due to AI (%)", "AI_Related_Job_Loss"),
    measure("Revenue Increase Due to AI (%)", "AI_Revenue_Increase"),
    measure("Consumer Trust in AI (%)", "Consumer_Trust_AI"),
    measure("Market Share of AI Companies (%)", "Market_Share_AI_Companies"),
];

/// Energy measures in fact-table order. The first entry drives deduplication.
pub const ENERGY_MEASURES: [MeasureColumn; ENERGY_MEASURE_COUNT] = [
    measure(
        "Total Energy Consumption (TWh)",
        "Country_Energy_Consumption_TWh",
    ),
    measure(
        "Per Capita Energy Use (kWh)",
        "Country_EnergyUsePerCapity_kWH",
    ),
    measure("Renewable Energy Share (%)", "Country_RenewableShare"),
    measure("Fossil Fuel Dependency (%)", "Country_Fossil_Fuel_Dependency"),
    measure("Industrial Energy Use (%)", "Country_Industrial_Energy_Use"),
    measure("Household Energy Use (%)", "Country_Household_Energy_Use"),
    measure(
        "Carbon Emissions (Million Tons)",
        "Country_Carbon_Emissions_Mt",
    ),
    measure(
        "Energy Price Index (USD/kWh)",
        "Country_EnergyPriceIndex_USDkWH",
    ),
];

/// Foreign-key columns of the fact table, in output order.
pub const FACT_KEY_COLUMNS: [&str; 5] = [
    "Country_ID",
    "Date_ID",
    "Industry_ID",
    "Regulation_ID",
    "Tool_ID",
];

/// Every fact-table column in output order.
pub fn fact_columns() -> Vec<&'static str> {
    FACT_KEY_COLUMNS
        .iter()
        .copied()
        .chain(AI_MEASURES.iter().map(|m| m.output))
        .chain(ENERGY_MEASURES.iter().map(|m| m.output))
        .collect()
}
