//! Field validators.
//!
//! One independent, pure function per field class. None of them looks at any
//! other field, so the row validator can run all of them unconditionally and
//! collect every failure.

use chrono::NaiveDateTime;
use flights_core::{FlightField, ValidationError};
use regex::Regex;
use std::sync::LazyLock;

/// Canonical timestamp format (`YYYY-MM-DD HH:MM`, 24-hour clock, no zone).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Allowed identifier length, in characters.
pub const FLIGHT_ID_LEN: std::ops::RangeInclusive<usize> = 2..=8;

/// Airport code length, in characters.
pub const AIRPORT_CODE_LEN: usize = 3;

// chrono accepts unpadded numbers, so the fixed-width shape is checked first.
static TIMESTAMP_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}$")
        .expect("timestamp shape pattern is valid")
});

/// Checks a flight identifier: 2-8 characters, letters or digits only.
pub fn validate_flight_id(flight_id: &str) -> Option<ValidationError> {
    let len = flight_id.chars().count();
    if !FLIGHT_ID_LEN.contains(&len) || !flight_id.chars().all(char::is_alphanumeric) {
        return Some(ValidationError::InvalidIdentifier);
    }
    None
}

/// Checks an airport code: exactly three uppercase letters.
///
/// `field` labels the reason (`origin` or `destination`).
pub fn validate_airport_code(code: &str, field: FlightField) -> Option<ValidationError> {
    let is_upper_letter = |c: char| c.is_alphabetic() && c.is_uppercase();
    if code.chars().count() != AIRPORT_CODE_LEN || !code.chars().all(is_upper_letter) {
        return Some(ValidationError::airport_code(field));
    }
    None
}

/// Parses a timestamp in the canonical format.
///
/// Day and month are validated against the calendar, leap years included.
/// `field` labels the reason on failure.
pub fn parse_timestamp(text: &str, field: FlightField) -> Result<NaiveDateTime, ValidationError> {
    if !TIMESTAMP_SHAPE.is_match(text) {
        return Err(ValidationError::timestamp(field));
    }
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|_| ValidationError::timestamp(field))
}

/// Parses a price and checks it is strictly positive.
///
/// Surrounding whitespace is ignored. Non-finite values are not numbers.
pub fn parse_price(text: &str) -> Result<f64, ValidationError> {
    let price: f64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::PriceNotANumber)?;

    if !price.is_finite() {
        return Err(ValidationError::PriceNotANumber);
    }
    if price <= 0.0 {
        return Err(ValidationError::PriceNotPositive);
    }
    Ok(price)
}
