//! Sink writers.
//!
//! The two sinks are deliberately asymmetric: the accepted-records document is
//! always written (an empty run yields `[]`), while the diagnostics report is
//! only written when there is something to report. An existing report at the
//! destination is left as it is after a clean run.

use crate::{PipelineError, Result};
use flights_core::{Diagnostic, Flight};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;
use tracing::{info, warn};

const JSON_INDENT: &[u8] = b"    ";

/// Renders flights as an indented JSON array.
pub fn render_flights(flights: &[Flight]) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    flights.serialize(&mut serializer)?;
    buf.push(b'\n');

    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes the accepted-records document, replacing any previous content.
pub fn write_flights(path: &Path, flights: &[Flight]) -> Result<()> {
    if flights.is_empty() {
        warn!("No accepted flights, writing an empty document");
    }

    let content = render_flights(flights)?;
    std::fs::write(path, content).map_err(|e| PipelineError::write(path, e))?;

    info!("Wrote {} flight(s) to {}", flights.len(), path.display());
    Ok(())
}

/// Renders diagnostics as report lines, one per diagnostic.
pub fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics.iter().map(|d| format!("{d}\n")).collect()
}

/// Writes the diagnostics report.
///
/// Returns `false` without touching the filesystem when `diagnostics` is empty.
pub fn write_diagnostics(path: &Path, diagnostics: &[Diagnostic]) -> Result<bool> {
    if diagnostics.is_empty() {
        return Ok(false);
    }

    std::fs::write(path, render_diagnostics(diagnostics))
        .map_err(|e| PipelineError::write(path, e))?;

    info!(
        "Wrote {} diagnostic(s) to {}",
        diagnostics.len(),
        path.display()
    );
    Ok(true)
}
