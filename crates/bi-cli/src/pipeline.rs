//! Pipeline orchestration for a single run: read, transform, export.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use bi_ingest::{load_lookup_tables, read_csv_frame};
use bi_model::{LookupTables, PipelineOptions};
use bi_output::write_star_schema;
use bi_transform::{RunStats, build_star_schema};
use tracing::{info, info_span};

/// Inputs of one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub energy_path: PathBuf,
    pub ai_content_path: PathBuf,
    pub output_dir: PathBuf,
    /// TOML override for the built-in lookup tables.
    pub lookups_path: Option<PathBuf>,
    pub options: PipelineOptions,
    /// Build every table but write nothing.
    pub dry_run: bool,
}

/// Per-table outcome of a run.
#[derive(Debug, Clone)]
pub struct TableSummary {
    pub name: String,
    pub rows: usize,
    /// Written file; `None` on a dry run.
    pub file: Option<PathBuf>,
    pub sha256: Option<String>,
}

/// Outcome of a pipeline run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub output_dir: PathBuf,
    pub manifest_path: Option<PathBuf>,
    pub tables: Vec<TableSummary>,
    pub stats: RunStats,
    pub dry_run: bool,
}

/// Built-in lookup tables, or those from `path` when given.
pub fn load_lookups(path: Option<&Path>) -> Result<LookupTables> {
    match path {
        Some(path) => {
            load_lookup_tables(path).with_context(|| format!("load lookups {}", path.display()))
        }
        None => Ok(LookupTables::default()),
    }
}

/// Runs ingest, the star-schema stages and export.
pub fn run_pipeline(config: &RunConfig) -> Result<RunResult> {
    let run_span = info_span!(
        "run",
        energy = %config.energy_path.display(),
        ai_content = %config.ai_content_path.display(),
        dry_run = config.dry_run
    );
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let lookups = load_lookups(config.lookups_path.as_deref())?;

    let (energy, ai_content) = info_span!("ingest").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let energy = read_csv_frame(&config.energy_path)
            .with_context(|| format!("read {}", config.energy_path.display()))?;
        let ai_content = read_csv_frame(&config.ai_content_path)
            .with_context(|| format!("read {}", config.ai_content_path.display()))?;
        info!(
            energy_rows = energy.height(),
            ai_rows = ai_content.height(),
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok((energy, ai_content))
    })?;

    let schema = build_star_schema(&energy, &ai_content, &lookups, &config.options)
        .context("build star schema")?;

    let (tables, manifest_path): (Vec<TableSummary>, _) = if config.dry_run {
        let tables = schema
            .tables()
            .map(|table| TableSummary {
                name: table.name.clone(),
                rows: table.record_count(),
                file: None,
                sha256: None,
            })
            .collect();
        (tables, None)
    } else {
        let export = write_star_schema(&config.output_dir, &schema)
            .with_context(|| format!("export to {}", config.output_dir.display()))?;
        let tables = export
            .manifest
            .tables
            .into_iter()
            .map(|entry| TableSummary {
                file: Some(export.output_dir.join(&entry.file)),
                name: entry.table,
                rows: entry.rows,
                sha256: Some(entry.sha256),
            })
            .collect();
        (tables, Some(export.manifest_path))
    };

    info!(
        tables = tables.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunResult {
        output_dir: config.output_dir.clone(),
        manifest_path,
        tables,
        stats: schema.stats,
        dry_run: config.dry_run,
    })
}
