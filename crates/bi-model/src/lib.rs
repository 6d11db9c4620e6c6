//! Data model for the energy x AI-content star schema.

pub mod columns;
pub mod dimension;
pub mod enums;
pub mod lookup;
pub mod options;
pub mod records;

pub use columns::{
    AI_CONTENT_INPUT, AI_MEASURE_COUNT, AI_MEASURES, ENERGY_INPUT, ENERGY_MEASURE_COUNT,
    ENERGY_MEASURES, FACT_TABLE, MeasureColumn, SENTINEL, SENTINEL_KEY, fact_columns,
};
pub use dimension::{DimensionRow, DimensionTable};
pub use enums::{DimensionKind, Stage, UnmappedKeyPolicy};
pub use lookup::{LookupTables, UNKNOWN};
pub use options::PipelineOptions;
pub use records::{
    AiContentRecord, AiGroupKey, AiMeasures, EnergyMeasures, EnergyRecord, FactKeys, FactRecord,
};
