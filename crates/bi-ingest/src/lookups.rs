//! Loading lookup tables from TOML.
//!
//! ```toml
//! [aliases]
//! "USA" = "United States"
//!
//! [regions]
//! "United States" = "North America"
//!
//! [tool_types]
//! "ChatGPT" = "Text Generation"
//! ```
//!
//! A section that is present replaces the built-in table of the same name;
//! an absent section keeps the built-in table.

use std::path::Path;

use bi_model::LookupTables;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Parses lookup tables from TOML text.
pub fn parse_lookup_tables(text: &str, path: &Path) -> Result<LookupTables> {
    toml::from_str(text).map_err(|source| IngestError::LookupParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads lookup tables from a TOML file.
pub fn load_lookup_tables(path: &Path) -> Result<LookupTables> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::open(path, e))?;
    let lookups = parse_lookup_tables(&text, path)?;
    debug!(
        path = %path.display(),
        aliases = lookups.aliases.len(),
        regions = lookups.regions.len(),
        tool_types = lookups.tool_types.len(),
        "loaded lookup tables"
    );
    Ok(lookups)
}
