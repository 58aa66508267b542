//! Row validation.
//!
//! Composes the field validators over one six-field record and applies the
//! temporal cross-field rule.

use crate::fields::{parse_price, parse_timestamp, validate_airport_code, validate_flight_id};
use flights_core::{Flight, FlightField, RawRow, ValidationError};
use tracing::trace;

/// Outcome of validating one row: a flight, or every failed rule in order.
pub type RowOutcome = Result<Flight, Vec<ValidationError>>;

/// Validates flight schedule rows against the fixed six-field schema.
///
/// Every field rule runs on every row, so a row with several problems reports
/// all of them.
///
/// # Example
///
/// ```rust
/// use flights_core::ValidationError;
/// use flights_validator::RowValidator;
///
/// let validator = RowValidator::new();
///
/// let flight = validator
///     .validate_fields(&["AB12", "RIX", "JFK", "2024-05-01 10:00", "2024-05-01 12:00", "150.00"])
///     .unwrap();
/// assert_eq!(flight.price, 150.0);
///
/// let errors = validator
///     .validate_fields(&["A", "RIX", "JFK", "2024-05-01 10:00", "2024-05-01 12:00", "0"])
///     .unwrap_err();
/// assert_eq!(
///     errors,
///     vec![ValidationError::InvalidIdentifier, ValidationError::PriceNotPositive]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RowValidator;

impl RowValidator {
    /// Creates a new row validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates raw positional fields.
    ///
    /// A field count other than six yields exactly one reason,
    /// `ValidationError::MissingFields`, without running any field rule.
    pub fn validate_fields<S: AsRef<str>>(&self, fields: &[S]) -> RowOutcome {
        let row = RawRow::from_fields(fields.iter().map(|f| f.as_ref()))
            .map_err(|missing| vec![missing])?;
        self.validate_row(&row)
    }

    /// Validates a six-field row.
    pub fn validate_row(&self, row: &RawRow) -> RowOutcome {
        let mut errors = Vec::new();

        errors.extend(validate_flight_id(row.flight_id()));
        errors.extend(validate_airport_code(row.origin(), FlightField::Origin));
        errors.extend(validate_airport_code(
            row.destination(),
            FlightField::Destination,
        ));

        let departure = parse_timestamp(row.departure(), FlightField::DepartureDatetime);
        let arrival = parse_timestamp(row.arrival(), FlightField::ArrivalDatetime);
        let price = parse_price(row.price());

        if let Err(e) = &departure {
            errors.push(e.clone());
        }
        if let Err(e) = &arrival {
            errors.push(e.clone());
        }
        if let Err(e) = &price {
            errors.push(e.clone());
        }

        // Only meaningful when both timestamps parsed.
        if let (Ok(departure), Ok(arrival)) = (&departure, &arrival) {
            if arrival <= departure {
                errors.push(ValidationError::ArrivalNotAfterDeparture);
            }
        }

        match price {
            Ok(price) if errors.is_empty() => Ok(Flight {
                flight_id: row.flight_id().to_string(),
                origin: row.origin().to_string(),
                destination: row.destination().to_string(),
                departure_datetime: row.departure().to_string(),
                arrival_datetime: row.arrival().to_string(),
                price,
            }),
            _ => {
                trace!("Row {} rejected with {} reason(s)", row.flight_id(), errors.len());
                Err(errors)
            }
        }
    }
}
