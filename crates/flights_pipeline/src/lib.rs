//! # Flights Pipeline
//!
//! Batch validation of flight schedule sources:
//!
//! 1. Resolve sources: an explicit input file first, then matching files in a directory
//! 2. Stream each source, validating every row and keeping line numbers
//! 3. Merge accepted flights and diagnostics across sources in order
//! 4. Write accepted flights as a JSON array and rejected rows as a text report
//!
//! ## Example
//!
//! ```no_run
//! use flights_pipeline::{run, PipelineConfig};
//!
//! let config = PipelineConfig::new()
//!     .with_input("schedules/today.csv")
//!     .with_directory("schedules/archive")
//!     .with_output("db.json");
//!
//! let summary = run(&config).unwrap();
//! println!("Valid flights: {}", summary.accepted);
//! if let Some(path) = &summary.diagnostics {
//!     println!("Errors written to: {}", path.display());
//! }
//! ```

mod aggregator;
mod config;
mod error;
mod reader;
mod runner;
mod sink;

pub use aggregator::*;
pub use config::*;
pub use error::*;
pub use reader::*;
pub use runner::*;
pub use sink::*;
