//! Star-schema transformation for the energy x AI-content model.
//!
//! This crate turns the two input frames into a fact table and five
//! dimension tables:
//!
//! - **Deduplicator**: one energy row per (country, year), AI-content rows
//!   averaged per composite key
//! - **Dimension Builder**: first-seen surrogate keys with region, decade and
//!   tool-type enrichment
//! - **Fact Assembler**: foreign keys, energy join, sentinel fill and ordering
//!
//! [`build_star_schema`] runs every stage; the stage functions are public for
//! callers working on typed records.

pub mod dedupe;
pub mod dimensions;
pub mod error;
pub mod extract;
pub mod facts;
pub mod frame;
pub mod ordered;
pub mod pipeline;

pub use dedupe::{aggregate_ai_content, deduplicate_energy, harmonize_countries, median};
pub use dimensions::{Dimensions, build_dimensions, decade_label};
pub use error::{Result, TransformError};
pub use extract::{Extracted, ai_content_records, energy_records};
pub use facts::{
    AssembledFacts, KeyedAiRow, KeyedEnergyRow, assemble_facts, assign_energy_keys,
    assign_foreign_keys, join_energy, sort_facts,
};
pub use frame::{TableFrame, date_dimension_frame, fact_frame, text_dimension_frame};
pub use ordered::{FirstSeen, group_first_seen};
pub use pipeline::{
    RunStats, StarModel, StarSchema, build_star_schema, run_stages, star_schema_frames,
};
