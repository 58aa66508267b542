//! Row-level validation errors.
//!
//! Each variant is one failed rule. The `Display` text of a variant is the
//! human-readable reason written to the diagnostics report, so these strings
//! are part of the output format.

use crate::FlightField;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A single reason why a row was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The row does not have exactly six fields
    #[error("missing required fields")]
    MissingFields,

    /// The flight identifier is not 2-8 alphanumeric characters
    #[error("identifier must be 2-8 alphanumeric characters")]
    InvalidIdentifier,

    /// An airport code is not three uppercase letters
    #[error("{field} must be 3 uppercase letters")]
    InvalidAirportCode {
        /// Either `origin` or `destination`
        field: FlightField,
    },

    /// A timestamp does not match `YYYY-MM-DD HH:MM` or names an impossible date
    #[error("{field} has invalid format (expected YYYY-MM-DD HH:MM)")]
    InvalidTimestamp {
        /// Either `departure_datetime` or `arrival_datetime`
        field: FlightField,
    },

    /// The price text is not a finite number
    #[error("price must be a number")]
    PriceNotANumber,

    /// The price is zero or negative
    #[error("price must be positive")]
    PriceNotPositive,

    /// Arrival is not strictly later than departure
    #[error("arrival_datetime must be after departure_datetime")]
    ArrivalNotAfterDeparture,
}

impl ValidationError {
    /// Creates an airport code error for the given field.
    pub fn airport_code(field: FlightField) -> Self {
        Self::InvalidAirportCode { field }
    }

    /// Creates a timestamp format error for the given field.
    pub fn timestamp(field: FlightField) -> Self {
        Self::InvalidTimestamp { field }
    }
}

// Reasons are serialized as their report text.
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
