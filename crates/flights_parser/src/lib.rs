//! Streaming reader for delimited flight schedule sources.
//!
//! A source is a delimited text file with one record per line. The reader
//! yields every physical line that carries content, either as a
//! [`SourceRow`] ready for validation or as a skipped line:
//!
//! - lines that are empty once whitespace is removed
//! - comment lines, whose text starts with `#` after trimming
//! - a header on line 1, recognised by `flight_id` in its first field
//!
//! Line numbers are 1-based physical line numbers, so diagnostics point at
//! the right place in the file even when blank lines or comments precede a
//! record.
//!
//! # Example
//!
//! ```rust
//! use flights_parser::{ReaderOptions, SkipReason, SourceLine, SourceReader};
//!
//! let data = "flight_id,origin,destination,departure_datetime,arrival_datetime,price\n\
//!             ## morning departures\n\
//!             AB12,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00\n";
//!
//! let lines: Vec<SourceLine> = SourceReader::from_reader(data.as_bytes(), "inline", ReaderOptions::default())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(lines[0], SourceLine::Skipped { line: 1, reason: SkipReason::Header });
//! assert_eq!(lines[1], SourceLine::Skipped { line: 2, reason: SkipReason::Comment });
//! match &lines[2] {
//!     SourceLine::Row(row) => {
//!         assert_eq!(row.line, 3);
//!         assert_eq!(row.fields[0], "AB12");
//!     }
//!     other => panic!("expected a row, got {other:?}"),
//! }
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Marker that starts a comment line.
pub const COMMENT_MARKER: char = '#';

/// Token that identifies a header line (matched case-insensitively in the first field).
pub const HEADER_TOKEN: &str = "flight_id";

/// Errors that can occur while reading a source.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The source could not be opened or read
    #[error("Failed to read source '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be decoded (e.g. invalid UTF-8)
    #[error("Failed to read source '{}' at line {line}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Options for reading a delimited source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Field delimiter byte
    pub delimiter: u8,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl ReaderOptions {
    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// A line that should be validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    /// 1-based physical line number
    pub line: u64,

    /// Fields as read, not trimmed
    pub fields: Vec<String>,

    /// Fields rejoined with the delimiter, trimmed
    pub text: String,
}

/// Why a line was not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Comment,
    Header,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkipReason::Blank => "blank",
            SkipReason::Comment => "comment",
            SkipReason::Header => "header",
        };
        f.write_str(name)
    }
}

/// One classified line of a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLine {
    Row(SourceRow),
    Skipped { line: u64, reason: SkipReason },
}

/// Streams the lines of one delimited source.
///
/// Physical lines are read one at a time and each is split with its own
/// `csv` reader, so quoting works within a line and line numbers always
/// count every terminator, empty lines included. The underlying handle is
/// owned by the reader and closed when the reader is dropped, whether or not
/// it was read to the end.
pub struct SourceReader<R: Read> {
    input: BufReader<R>,
    buf: Vec<u8>,
    splitter: csv::ReaderBuilder,
    record: csv::StringRecord,
    source: PathBuf,
    delimiter: String,
    line: u64,
}

impl SourceReader<File> {
    /// Opens a source file.
    pub fn open(path: &Path, options: ReaderOptions) -> Result<Self> {
        let file = File::open(path).map_err(|source| ParserError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Reading source: {}", path.display());
        Ok(Self::from_reader(file, path, options))
    }
}

impl<R: Read> SourceReader<R> {
    /// Wraps any byte stream. `source` names it in errors and logs.
    pub fn from_reader(rdr: R, source: impl AsRef<Path>, options: ReaderOptions) -> Self {
        let mut splitter = csv::ReaderBuilder::new();
        splitter
            .has_headers(false)
            .flexible(true)
            .delimiter(options.delimiter);

        Self {
            input: BufReader::new(rdr),
            buf: Vec::new(),
            splitter,
            record: csv::StringRecord::new(),
            source: source.as_ref().to_path_buf(),
            delimiter: char::from(options.delimiter).to_string(),
            line: 0,
        }
    }

    fn classify(&self, line: u64) -> SourceLine {
        let fields: Vec<String> = self.record.iter().map(String::from).collect();
        let text = fields.join(self.delimiter.as_str()).trim().to_string();

        let reason = if text.is_empty() {
            Some(SkipReason::Blank)
        } else if text.starts_with(COMMENT_MARKER) {
            Some(SkipReason::Comment)
        } else if line == 1 && is_header(&fields) {
            Some(SkipReason::Header)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                debug!(
                    "Skipping {} line {} in {}",
                    reason,
                    line,
                    self.source.display()
                );
                SourceLine::Skipped { line, reason }
            }
            None => SourceLine::Row(SourceRow { line, fields, text }),
        }
    }
}

impl<R: Read> Iterator for SourceReader<R> {
    type Item = Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.input.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line += 1,
                Err(source) => {
                    return Some(Err(ParserError::Io {
                        path: self.source.clone(),
                        source,
                    }));
                }
            }

            // Empty lines only advance the line count.
            let content = strip_line_ending(&self.buf);
            if content.is_empty() {
                continue;
            }

            let mut splitter = self.splitter.from_reader(content);
            match splitter.read_record(&mut self.record) {
                Ok(true) => return Some(Ok(self.classify(self.line))),
                Ok(false) => continue,
                Err(source) => {
                    return Some(Err(ParserError::Csv {
                        path: self.source.clone(),
                        line: self.line,
                        source,
                    }));
                }
            }
        }
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn is_header(fields: &[String]) -> bool {
    fields
        .first()
        .is_some_and(|first| first.to_lowercase().contains(HEADER_TOKEN))
}
