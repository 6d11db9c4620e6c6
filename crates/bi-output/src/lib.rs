//! Star-schema export.
//!
//! Each table is written to `<name>.csv` in the output directory, followed by
//! a `manifest.json` recording the row count and SHA-256 of every file.

mod common;
mod manifest;
mod table;

use std::path::{Path, PathBuf};

use anyhow::Result;
use bi_transform::StarSchema;
use tracing::{debug, info, info_span};

pub use crate::common::{ensure_output_dir, file_sha256};
pub use crate::manifest::{MANIFEST_FILE, Manifest, ManifestEntry, read_manifest, write_manifest};
pub use crate::table::write_table_csv;

/// Paths and digests produced by [`write_star_schema`].
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub output_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
}

/// Writes every table of the schema plus the manifest into `output_dir`.
///
/// The directory is created if missing. Existing files with the same names
/// are overwritten.
pub fn write_star_schema(output_dir: &Path, schema: &StarSchema) -> Result<ExportResult> {
    let span = info_span!("export", output_dir = %output_dir.display());
    let _guard = span.enter();

    let dir = ensure_output_dir(output_dir)?;
    let mut manifest = Manifest::default();
    for table in schema.tables() {
        let file = table.file_name();
        let path = dir.join(&file);
        write_table_csv(&path, table)?;
        let sha256 = file_sha256(&path)?;
        debug!(table = %table.name, rows = table.record_count(), %sha256, "table written");
        manifest.tables.push(ManifestEntry {
            table: table.name.clone(),
            file,
            rows: table.record_count(),
            sha256,
        });
    }

    let manifest_path = dir.join(MANIFEST_FILE);
    write_manifest(&manifest_path, &manifest)?;
    info!(
        tables = manifest.tables.len(),
        manifest = %manifest_path.display(),
        "export complete"
    );
    Ok(ExportResult {
        output_dir: dir,
        manifest_path,
        manifest,
    })
}
