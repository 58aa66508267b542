//! Multi-source aggregation.
//!
//! Sources are processed strictly one after another. The merged result keeps
//! source order first and line order within each source.

use crate::reader::process_source;
use crate::{PipelineConfig, PipelineError, Result};
use flights_core::ValidationResult;
use flights_parser::ReaderOptions;
use flights_validator::RowValidator;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runs the row validator over an ordered list of sources.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    validator: RowValidator,
    options: ReaderOptions,
}

impl Aggregator {
    /// Creates a new aggregator.
    pub fn new(options: ReaderOptions) -> Self {
        Self {
            validator: RowValidator::new(),
            options,
        }
    }

    /// Validates every source in order and concatenates the results.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::NoSources` for an empty source list, and the
    /// first read error of any source. Nothing is returned for the sources
    /// that were processed before the failure.
    pub fn run(&self, sources: &[PathBuf]) -> Result<ValidationResult> {
        if sources.is_empty() {
            return Err(PipelineError::NoSources);
        }

        let mut merged = ValidationResult::new();
        for source in sources {
            merged.extend(process_source(source, self.options, &self.validator)?);
        }

        info!(
            "Validated {} source(s): {} accepted, {} rejected",
            sources.len(),
            merged.accepted_count(),
            merged.rejected_count()
        );

        Ok(merged)
    }
}

/// Resolves the configured sources in processing order.
///
/// The explicit input file comes first. Directory matches follow, sorted by
/// path so that repeated runs over the same directory are identical. A file
/// that is both the explicit input and a directory match is processed twice.
///
/// # Errors
///
/// Returns `PipelineError::NoSources` when nothing resolves, and
/// `PipelineError::DirectoryScan` when the directory cannot be listed.
pub fn resolve_sources(config: &PipelineConfig) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    if let Some(input) = &config.input {
        sources.push(input.clone());
    }

    if let Some(directory) = &config.directory {
        sources.extend(discover_sources(directory, config.source_extension())?);
    }

    if sources.is_empty() {
        return Err(PipelineError::NoSources);
    }

    Ok(sources)
}

/// Lists regular files in `directory` whose extension matches, case-insensitively.
pub fn discover_sources(directory: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(directory).map_err(|e| PipelineError::directory_scan(directory, e))?;

    let mut matches = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| PipelineError::directory_scan(directory, e))?
            .path();

        let extension_matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));

        if extension_matches && path.is_file() {
            matches.push(path);
        }
    }

    matches.sort();
    debug!(
        "Found {} '.{}' file(s) in {}",
        matches.len(),
        extension,
        directory.display()
    );

    Ok(matches)
}
