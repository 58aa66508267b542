use anyhow::Result;
use flights_pipeline::run;
use tracing::info;

use super::{SourceArgs, explain};
use crate::output;

pub fn execute(
    sources: &SourceArgs,
    output_path: Option<&str>,
    errors_path: Option<&str>,
    format: &str,
) -> Result<()> {
    let mut config = sources.to_config()?;
    if let Some(path) = output_path {
        config = config.with_output(path);
    }
    if let Some(path) = errors_path {
        config = config.with_errors(path);
    }

    info!("Writing accepted flights to {}", config.output.display());

    let summary = run(&config).map_err(explain)?;

    output::print_run_summary(&summary, format)
}
