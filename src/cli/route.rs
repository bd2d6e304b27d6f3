//! CLI route: builds the run configuration and drives the pipeline:
//! build, merge, materialize, emit.

use crate::cli::parse::Cli;
use crate::config::RunConfig;
use crate::error::ScatterError;
use crate::manifest::{merge_prior, ManifestBuilder};
use crate::materialize::{MaterializeMode, Materializer};
use tracing::info;

/// Execute one invocation and return what should be printed to stdout.
///
/// Returns the manifest JSON, or an empty string when it was routed to an
/// output file instead.
pub fn run(cli: &Cli) -> Result<String, ScatterError> {
    let config = run_config(cli);

    let builder = ManifestBuilder::new(&config.base_path, &config.walker_config())?;
    let mut manifest = builder.build()?;
    info!(entries = manifest.len(), "Manifest built");

    if let Some(prior) = &config.merge_path {
        manifest = merge_prior(manifest, prior);
    }

    if config.dry_run {
        info!("Dry run; skipping materialization");
    } else {
        Materializer::new(config.mode, &config.base_path, &config.base_path)
            .materialize(&manifest)?;
        info!(mode = ?config.mode, "Materialized manifest entries");
    }

    let json = manifest.to_json()?;
    match &config.output {
        Some(path) => {
            std::fs::write(path, &json)?;
            Ok(String::new())
        }
        None => Ok(json),
    }
}

fn run_config(cli: &Cli) -> RunConfig {
    let mut config = RunConfig::new(cli.base_path.clone(), cli.globs.clone());
    config.dir_pattern = cli.dir_pattern.clone();
    config.mode = if cli.copy {
        MaterializeMode::Copy
    } else {
        MaterializeMode::Link
    };
    config.dry_run = cli.dry_run;
    config.merge_path = cli.merge.clone();
    config.output = cli.output.clone();
    config
}
