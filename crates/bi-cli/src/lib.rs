//! CLI library components for the star-schema pipeline.

pub mod logging;
pub mod pipeline;
