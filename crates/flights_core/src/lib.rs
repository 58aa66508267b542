//! # Flights Core
//!
//! Core data structures for the flight schedule validation pipeline.
//!
//! A flight schedule source is a delimited text file with one record per line.
//! Every record has the same fixed six-field layout; each one either becomes an
//! accepted [`Flight`] or a rejected [`Diagnostic`] listing every rule it broke.
//!
//! ## Key Concepts
//!
//! - **RawRow**: the six positional text fields of one record, as read from a source
//! - **Flight**: a record that passed every validation rule
//! - **Diagnostic**: a rejected record with its line number, original text and reasons
//! - **ValidationResult**: the ordered accepted and rejected sequences of a run
//!
//! ## Example
//!
//! ```rust
//! use flights_core::{Diagnostic, ValidationError, ValidationResult};
//!
//! let mut result = ValidationResult::new();
//! result.push_diagnostic(Diagnostic::new(
//!     3,
//!     "A,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00",
//!     vec![ValidationError::InvalidIdentifier],
//! ));
//!
//! assert_eq!(result.rejected_count(), 1);
//! assert_eq!(
//!     result.diagnostics[0].to_string(),
//!     "Line 3: A,RIX,JFK,2024-05-01 10:00,2024-05-01 12:00,150.00 -> identifier must be 2-8 alphanumeric characters"
//! );
//! ```

pub mod diagnostic;
pub mod error;
pub mod flight;

pub use diagnostic::*;
pub use error::*;
pub use flight::*;
