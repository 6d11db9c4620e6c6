use anyhow::Result;
use bi_cli::pipeline::{RunConfig, RunResult, load_lookups, run_pipeline};
use bi_model::{LookupTables, PipelineOptions, UnmappedKeyPolicy};

use crate::cli::{LookupsArgs, RunArgs, UnmappedKeysArg};

pub fn run_star_schema(args: &RunArgs) -> Result<RunResult> {
    let policy = match args.unmapped_keys {
        UnmappedKeysArg::Fail => UnmappedKeyPolicy::Fail,
        UnmappedKeysArg::Sentinel => UnmappedKeyPolicy::Sentinel,
    };
    let config = RunConfig {
        energy_path: args.energy.clone(),
        ai_content_path: args.ai_content.clone(),
        output_dir: args.output_dir.clone(),
        lookups_path: args.lookups.clone(),
        options: PipelineOptions::new()
            .with_unmapped_keys(policy)
            .with_reject_empty_input(args.reject_empty),
        dry_run: args.dry_run,
    };
    run_pipeline(&config)
}

pub fn run_lookups(args: &LookupsArgs) -> Result<LookupTables> {
    load_lookups(args.lookups.as_deref())
}
