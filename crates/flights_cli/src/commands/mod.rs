pub mod check;
pub mod parse;

use anyhow::{Context, Result, anyhow};
use clap::Args;
use flights_pipeline::{PipelineConfig, PipelineError, load_config};
use std::path::Path;
use tracing::debug;

/// Where to read flight schedules from.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Path to a single CSV file
    #[arg(short, long)]
    pub input: Option<String>,

    /// Path to a folder with CSV files
    #[arg(short, long)]
    pub directory: Option<String>,

    /// Pipeline configuration file (TOML or YAML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Extension of source files in the directory
    #[arg(long)]
    pub extension: Option<String>,
}

impl SourceArgs {
    /// Builds the run configuration: file values first, then command-line overrides.
    pub fn to_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(Path::new(path))
                .with_context(|| format!("Failed to load configuration file: {}", path))?,
            None => PipelineConfig::default(),
        };

        if let Some(input) = &self.input {
            config = config.with_input(input);
        }
        if let Some(directory) = &self.directory {
            config = config.with_directory(directory);
        }
        if let Some(extension) = &self.extension {
            config = config.with_extension(extension);
        }

        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }
}

/// Adds command-line hints to pipeline errors.
pub fn explain(error: PipelineError) -> anyhow::Error {
    match error {
        PipelineError::NoSources => anyhow!("No CSV files provided. Use -i or -d arguments."),
        other => anyhow::Error::new(other),
    }
}
