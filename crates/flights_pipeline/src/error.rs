//! Error types for pipeline runs.
//!
//! Everything here is fatal to a run. Row-level problems never surface as a
//! `PipelineError`; they become diagnostics.

use crate::ConfigError;
use flights_parser::ParserError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Neither an input file nor a directory yielded a source
    #[error("No input sources: provide an input file or a directory containing source files")]
    NoSources,

    /// A source could not be opened or decoded
    #[error(transparent)]
    Parser(#[from] ParserError),

    /// The source directory could not be listed
    #[error("Failed to scan directory '{}': {source}", .path.display())]
    DirectoryScan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A sink could not be written
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Accepted records could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The run configuration is unusable
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PipelineError {
    /// Creates a new directory scan error.
    pub fn directory_scan(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryScan {
            path: path.into(),
            source,
        }
    }

    /// Creates a new sink write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
