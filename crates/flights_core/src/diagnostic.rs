//! Rejected rows and per-run validation results.

use crate::{Flight, ValidationError};
use serde::Serialize;
use std::fmt;

/// A rejected row.
///
/// Holds the 1-based physical line number, the original line text (fields
/// rejoined with the source delimiter and trimmed) and every reason the row
/// failed, in rule order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number in the source file
    pub line: u64,

    /// Original line text
    pub text: String,

    /// Failed rules, never empty
    pub reasons: Vec<ValidationError>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(line: u64, text: impl Into<String>, reasons: Vec<ValidationError>) -> Self {
        debug_assert!(!reasons.is_empty(), "a diagnostic needs at least one reason");
        Self {
            line,
            text: text.into(),
            reasons,
        }
    }

    /// Reason texts in rule order.
    pub fn reason_messages(&self) -> Vec<String> {
        self.reasons.iter().map(|r| r.to_string()).collect()
    }
}

/// Formats as a report line: `Line {n}: {text} -> {reason}; {reason}`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}: {} -> {}",
            self.line,
            self.text,
            self.reason_messages().join("; ")
        )
    }
}

/// Accepted flights and diagnostics of one source or one whole run.
///
/// Both sequences keep processing order: source order first, then line order
/// within a source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Rows that passed every rule
    pub accepted: Vec<Flight>,

    /// Rows that failed at least one rule
    pub diagnostics: Vec<Diagnostic>,

    /// Blank, comment and header lines that were not validated
    pub skipped: usize,
}

impl ValidationResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accepted flight.
    pub fn push_flight(&mut self, flight: Flight) {
        self.accepted.push(flight);
    }

    /// Appends a diagnostic.
    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Counts one skipped line.
    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Appends another result after this one, preserving relative order.
    pub fn extend(&mut self, other: ValidationResult) {
        self.accepted.extend(other.accepted);
        self.diagnostics.extend(other.diagnostics);
        self.skipped += other.skipped;
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Number of rows that reached the row validator.
    pub fn validated_count(&self) -> usize {
        self.accepted_count() + self.rejected_count()
    }

    /// Returns true if no row was rejected.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
