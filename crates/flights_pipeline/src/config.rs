//! Run configuration.
//!
//! A `PipelineConfig` can be built in code, or loaded from a TOML or YAML
//! file and then overridden field by field (the CLI does the latter).
//!
//! ```toml
//! directory = "data/schedules"
//! output = "out/db.json"
//! errors = "out/errors.txt"
//! extension = "csv"
//! delimiter = ","
//! ```

use flights_parser::ReaderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default destination for accepted records.
pub const DEFAULT_OUTPUT: &str = "db.json";

/// Default destination for the diagnostics report.
pub const DEFAULT_ERRORS: &str = "errors.txt";

/// Default extension of source files in a directory.
pub const DEFAULT_EXTENSION: &str = "csv";

/// Errors that can occur while loading or checking a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// Delimiter cannot separate fields
    #[error("Invalid delimiter {0:?}: must be a single ASCII character other than a quote or line break")]
    InvalidDelimiter(char),

    /// Source extension filter is empty
    #[error("Source extension cannot be empty")]
    EmptySourceExtension,
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Single source file, always processed first
    pub input: Option<PathBuf>,

    /// Directory scanned for source files
    pub directory: Option<PathBuf>,

    /// Destination of the accepted-records document
    pub output: PathBuf,

    /// Destination of the diagnostics report
    pub errors: PathBuf,

    /// Extension of source files in `directory`, without the dot
    pub extension: String,

    /// Field delimiter
    pub delimiter: char,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: None,
            directory: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            errors: PathBuf::from(DEFAULT_ERRORS),
            extension: DEFAULT_EXTENSION.to_string(),
            delimiter: ',',
        }
    }
}

impl PipelineConfig {
    /// Creates a configuration with default settings and no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the single input file.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the directory to scan.
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Sets the accepted-records destination.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the diagnostics report destination.
    pub fn with_errors(mut self, errors: impl Into<PathBuf>) -> Self {
        self.errors = errors.into();
        self
    }

    /// Sets the source file extension filter.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.delimiter.is_ascii() || matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(ConfigError::InvalidDelimiter(self.delimiter));
        }

        if self.source_extension().is_empty() {
            return Err(ConfigError::EmptySourceExtension);
        }

        Ok(())
    }

    /// The extension filter without a leading dot.
    pub fn source_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    /// Reader options derived from this configuration.
    ///
    /// Only meaningful after [`validate`](Self::validate) has accepted the delimiter.
    pub fn reader_options(&self) -> ReaderOptions {
        ReaderOptions::default().with_delimiter(self.delimiter as u8)
    }
}

/// Parse a configuration from a YAML string.
pub fn parse_yaml(content: &str) -> Result<PipelineConfig, ConfigError> {
    let config: PipelineConfig = serde_yaml_ng::from_str(content)?;
    Ok(config)
}

/// Parse a configuration from a TOML string.
pub fn parse_toml(content: &str) -> Result<PipelineConfig, ConfigError> {
    let config: PipelineConfig =
        toml::from_str(content).map_err(|e| ConfigError::TomlError(e.to_string()))?;
    Ok(config)
}

/// Detect the configuration format from a file path based on its extension.
///
/// # Errors
///
/// Returns `ConfigError::InvalidExtension` if the file has no extension.
/// Returns `ConfigError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ConfigFormat, ConfigError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ConfigError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ConfigFormat::Yaml),
        "toml" => Ok(ConfigFormat::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.to_string())),
    }
}

/// Load a configuration file with automatic format detection.
pub fn load_config(path: &Path) -> Result<PipelineConfig, ConfigError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        ConfigFormat::Yaml => parse_yaml(&content),
        ConfigFormat::Toml => parse_toml(&content),
    }
}
