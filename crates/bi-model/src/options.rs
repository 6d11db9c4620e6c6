//! Configuration options for a pipeline run.

use serde::{Deserialize, Serialize};

use crate::enums::UnmappedKeyPolicy;

/// Options controlling star-schema construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Handling of fact rows whose natural key is absent from a dimension.
    pub unmapped_keys: UnmappedKeyPolicy,

    /// Fail when an input table has no usable rows instead of producing
    /// empty outputs.
    pub reject_empty_input: bool,
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_unmapped_keys(mut self, policy: UnmappedKeyPolicy) -> Self {
        self.unmapped_keys = policy;
        self
    }

    #[must_use]
    pub fn with_reject_empty_input(mut self, reject: bool) -> Self {
        self.reject_empty_input = reject;
        self
    }
}
