//! Per-source validation.
//!
//! Feeds every row of one source through the row validator and keeps the
//! results in line order.

use crate::Result;
use flights_core::{Diagnostic, ValidationResult};
use flights_parser::{ReaderOptions, SourceLine, SourceReader};
use flights_validator::RowValidator;
use std::path::Path;
use tracing::{debug, info};

/// Reads and validates one source file.
///
/// The file is closed before this returns, including when a read error
/// aborts the source part-way.
pub fn process_source(
    path: &Path,
    options: ReaderOptions,
    validator: &RowValidator,
) -> Result<ValidationResult> {
    let reader = SourceReader::open(path, options)?;
    let result = validate_lines(reader, validator)?;

    info!(
        "Processed {}: {} accepted, {} rejected, {} skipped",
        path.display(),
        result.accepted_count(),
        result.rejected_count(),
        result.skipped
    );

    Ok(result)
}

/// Validates already-classified source lines.
pub fn validate_lines<I>(lines: I, validator: &RowValidator) -> Result<ValidationResult>
where
    I: IntoIterator<Item = flights_parser::Result<SourceLine>>,
{
    let mut result = ValidationResult::new();

    for line in lines {
        match line? {
            SourceLine::Skipped { .. } => result.record_skip(),
            SourceLine::Row(row) => match validator.validate_fields(&row.fields) {
                Ok(flight) => result.push_flight(flight),
                Err(reasons) => {
                    let diagnostic = Diagnostic::new(row.line, row.text, reasons);
                    debug!("Rejected {}", diagnostic);
                    result.push_diagnostic(diagnostic);
                }
            },
        }
    }

    Ok(result)
}
