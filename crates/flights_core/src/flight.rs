//! Flight record types.
//!
//! This module contains the fixed six-field schema, the raw row as read from a
//! source, and the accepted `Flight` record.

use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fields in every flight schedule record.
pub const FIELD_COUNT: usize = 6;

/// The positional fields of a flight schedule record.
///
/// The discriminant order is the column order in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightField {
    /// Flight identifier (e.g. `AB123`)
    FlightId,
    /// Origin airport code
    Origin,
    /// Destination airport code
    Destination,
    /// Departure timestamp text
    DepartureDatetime,
    /// Arrival timestamp text
    ArrivalDatetime,
    /// Ticket price text
    Price,
}

impl FlightField {
    /// All fields in column order.
    pub const ALL: [FlightField; FIELD_COUNT] = [
        FlightField::FlightId,
        FlightField::Origin,
        FlightField::Destination,
        FlightField::DepartureDatetime,
        FlightField::ArrivalDatetime,
        FlightField::Price,
    ];

    /// Canonical name, used as the JSON key and in reason labels.
    pub fn name(self) -> &'static str {
        match self {
            FlightField::FlightId => "flight_id",
            FlightField::Origin => "origin",
            FlightField::Destination => "destination",
            FlightField::DepartureDatetime => "departure_datetime",
            FlightField::ArrivalDatetime => "arrival_datetime",
            FlightField::Price => "price",
        }
    }

    /// Zero-based column position.
    pub fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FlightField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six text fields of one source record, unvalidated.
///
/// A `RawRow` can only hold exactly [`FIELD_COUNT`] fields. Any other field
/// count is rejected at construction with [`ValidationError::MissingFields`],
/// so field-level validation never sees a malformed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    fields: [String; FIELD_COUNT],
}

impl RawRow {
    /// Builds a row from positional fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingFields` unless there are exactly six fields.
    pub fn from_fields<I, S>(fields: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let fields: [String; FIELD_COUNT] = fields
            .try_into()
            .map_err(|_| ValidationError::MissingFields)?;
        Ok(Self { fields })
    }

    /// Returns the text of one field.
    pub fn get(&self, field: FlightField) -> &str {
        &self.fields[field.position()]
    }

    pub fn flight_id(&self) -> &str {
        self.get(FlightField::FlightId)
    }

    pub fn origin(&self) -> &str {
        self.get(FlightField::Origin)
    }

    pub fn destination(&self) -> &str {
        self.get(FlightField::Destination)
    }

    pub fn departure(&self) -> &str {
        self.get(FlightField::DepartureDatetime)
    }

    pub fn arrival(&self) -> &str {
        self.get(FlightField::ArrivalDatetime)
    }

    pub fn price(&self) -> &str {
        self.get(FlightField::Price)
    }
}

/// An accepted flight schedule record.
///
/// Only the row validator creates flights, and only for rows with zero
/// failed rules. Timestamps and airport codes keep their source text; the
/// price is the parsed number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Flight identifier, 2-8 alphanumeric characters
    pub flight_id: String,

    /// Origin airport code, 3 uppercase letters
    pub origin: String,

    /// Destination airport code, 3 uppercase letters
    pub destination: String,

    /// Departure timestamp in `YYYY-MM-DD HH:MM` form
    pub departure_datetime: String,

    /// Arrival timestamp in `YYYY-MM-DD HH:MM` form, strictly after departure
    pub arrival_datetime: String,

    /// Ticket price, always greater than zero
    pub price: f64,
}
