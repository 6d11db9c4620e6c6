//! Static lookup data used for harmonization and enrichment.
//!
//! The defaults cover the countries and tools found in the published energy
//! and AI-impact datasets. A TOML file can replace any of the three tables
//! (see `bi_ingest::load_lookup_tables`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value used when an enrichment table has no entry for a key.
pub const UNKNOWN: &str = "Unknown";

const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("USA", "United States"),
    ("UK", "United Kingdom"),
    ("South Korea", "Korea, South"),
];

const DEFAULT_REGIONS: &[(&str, &str)] = &[
    ("Argentina", "South America"),
    ("Australia", "Oceania"),
    ("Brazil", "South America"),
    ("Canada", "North America"),
    ("China", "Asia"),
    ("France", "Europe"),
    ("Germany", "Europe"),
    ("India", "Asia"),
    ("Indonesia", "Asia"),
    ("Italy", "Europe"),
    ("Japan", "Asia"),
    ("Korea, South", "Asia"),
    ("Mexico", "North America"),
    ("Russia", "Europe"),
    ("Saudi Arabia", "Middle East"),
    ("South Africa", "Africa"),
    ("Spain", "Europe"),
    ("Turkey", "Middle East"),
    ("United Kingdom", "Europe"),
    ("United States", "North America"),
];

const DEFAULT_TOOL_TYPES: &[(&str, &str)] = &[
    ("Bard", "Text Generation"),
    ("ChatGPT", "Text Generation"),
    ("Claude", "Text Generation"),
    ("DALL-E", "Image Generation"),
    ("Gemini", "Text Generation"),
    ("Midjourney", "Image Generation"),
    ("Stable Diffusion", "Image Generation"),
    ("Synthesia", "Video Generation"),
];

fn to_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

/// Alias, region and tool-type tables.
///
/// Lookups are exact and case-sensitive, matching how the values appear in
/// the source files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupTables {
    /// Country alias -> canonical country name.
    pub aliases: BTreeMap<String, String>,
    /// Canonical country name -> region.
    pub regions: BTreeMap<String, String>,
    /// AI tool name -> tool category.
    pub tool_types: BTreeMap<String, String>,
}

impl Default for LookupTables {
    fn default() -> Self {
        Self {
            aliases: to_map(DEFAULT_ALIASES),
            regions: to_map(DEFAULT_REGIONS),
            tool_types: to_map(DEFAULT_TOOL_TYPES),
        }
    }
}

impl LookupTables {
    /// Tables with no entries; every enrichment falls back to [`UNKNOWN`].
    pub fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
            regions: BTreeMap::new(),
            tool_types: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), canonical.into());
        self
    }

    #[must_use]
    pub fn with_region(mut self, country: impl Into<String>, region: impl Into<String>) -> Self {
        self.regions.insert(country.into(), region.into());
        self
    }

    #[must_use]
    pub fn with_tool_type(mut self, tool: impl Into<String>, tool_type: impl Into<String>) -> Self {
        self.tool_types.insert(tool.into(), tool_type.into());
        self
    }

    /// Canonical spelling of a country name. Aliases are not chained.
    pub fn canonical_country<'a>(&'a self, country: &'a str) -> &'a str {
        self.aliases
            .get(country)
            .map(String::as_str)
            .unwrap_or(country)
    }

    pub fn region_of(&self, country: &str) -> &str {
        self.regions
            .get(country)
            .map(String::as_str)
            .unwrap_or(UNKNOWN)
    }

    pub fn tool_type_of(&self, tool: &str) -> &str {
        self.tool_types
            .get(tool)
            .map(String::as_str)
            .unwrap_or(UNKNOWN)
    }
}
