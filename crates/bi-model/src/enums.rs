//! Enumerations for pipeline stages and star-schema dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pipeline stage that can fail, used to give errors context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Reading typed records out of the input frames.
    Extract,
    /// Foreign keys, energy join, projection and ordering.
    Facts,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Extract => "extract",
            Stage::Facts => "facts",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five dimensions of the star schema.
///
/// Each dimension knows its output table name and the columns it is written
/// with: natural key first, surrogate key second, then the optional
/// enrichment attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DimensionKind {
    Country,
    Industry,
    Date,
    RegulationStatus,
    AiTool,
}

impl DimensionKind {
    /// All dimensions in output order.
    pub const ALL: [DimensionKind; 5] = [
        DimensionKind::Country,
        DimensionKind::Industry,
        DimensionKind::Date,
        DimensionKind::RegulationStatus,
        DimensionKind::AiTool,
    ];

    /// Output table name.
    pub fn table_name(&self) -> &'static str {
        match self {
            DimensionKind::Country => "dim_country",
            DimensionKind::Industry => "dim_industry",
            DimensionKind::Date => "dim_date",
            DimensionKind::RegulationStatus => "dim_regulation_status",
            DimensionKind::AiTool => "dim_top_ai_tool",
        }
    }

    /// Column holding the natural key.
    pub fn key_column(&self) -> &'static str {
        match self {
            DimensionKind::Country => "Country",
            DimensionKind::Industry => "Industry",
            DimensionKind::Date => "Year",
            DimensionKind::RegulationStatus => "Status",
            DimensionKind::AiTool => "Tool_Name",
        }
    }

    /// Column holding the surrogate key; also the foreign-key column of the fact table.
    pub fn id_column(&self) -> &'static str {
        match self {
            DimensionKind::Country => "Country_ID",
            DimensionKind::Industry => "Industry_ID",
            DimensionKind::Date => "Date_ID",
            DimensionKind::RegulationStatus => "Regulation_ID",
            DimensionKind::AiTool => "Tool_ID",
        }
    }

    /// Enrichment column, if the dimension carries one.
    pub fn attribute_column(&self) -> Option<&'static str> {
        match self {
            DimensionKind::Country => Some("Region"),
            DimensionKind::Date => Some("Decade"),
            DimensionKind::AiTool => Some("Tool_Type"),
            DimensionKind::Industry | DimensionKind::RegulationStatus => None,
        }
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// What to do when a fact row's natural key has no dimension entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnmappedKeyPolicy {
    /// Abort the run with an unmapped-key error.
    #[default]
    Fail,
    /// Write foreign key `-1` and log a warning.
    Sentinel,
}
