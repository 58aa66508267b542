//! Pipeline entry points.

use crate::aggregator::{Aggregator, resolve_sources};
use crate::sink::{write_diagnostics, write_flights};
use crate::{PipelineConfig, Result};
use flights_core::ValidationResult;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Number of sources processed
    pub sources: usize,

    /// Number of accepted flights written
    pub accepted: usize,

    /// Number of rejected rows
    pub rejected: usize,

    /// Number of blank, comment and header lines skipped
    pub skipped: usize,

    /// Where the accepted flights were written
    pub output: PathBuf,

    /// Where the diagnostics report was written, if it was
    pub diagnostics: Option<PathBuf>,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}

/// Outcome of a validation-only pass.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Sources in processing order
    pub sources: Vec<PathBuf>,

    /// Merged validation result
    pub result: ValidationResult,
}

/// Resolves sources, validates them, and writes both sinks.
///
/// Every source is read before any sink is written, so a fatal error leaves
/// no partial output behind.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let start = Instant::now();
    let CheckOutcome { sources, result } = check(config)?;

    write_flights(&config.output, &result.accepted)?;
    let diagnostics = write_diagnostics(&config.errors, &result.diagnostics)?
        .then(|| config.errors.clone());

    let summary = RunSummary {
        sources: sources.len(),
        accepted: result.accepted_count(),
        rejected: result.rejected_count(),
        skipped: result.skipped,
        output: config.output.clone(),
        diagnostics,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    info!(
        "Run finished in {}ms: {} accepted, {} rejected",
        summary.duration_ms, summary.accepted, summary.rejected
    );

    Ok(summary)
}

/// Resolves sources and validates them without writing anything.
pub fn check(config: &PipelineConfig) -> Result<CheckOutcome> {
    config.validate()?;
    let sources = resolve_sources(config)?;
    let result = Aggregator::new(config.reader_options()).run(&sources)?;

    Ok(CheckOutcome { sources, result })
}
