//! # Flights Validator
//!
//! Validation rules for flight schedule records:
//!
//! - Field validators: identifier, airport code, timestamp and price
//! - Row validation: all field rules run unconditionally, then the temporal
//!   cross-field rule (arrival strictly after departure)
//!
//! ## Example
//!
//! ```rust
//! use flights_core::{FlightField, ValidationError};
//! use flights_validator::{validate_airport_code, RowValidator};
//!
//! assert_eq!(
//!     validate_airport_code("Rix", FlightField::Origin),
//!     Some(ValidationError::airport_code(FlightField::Origin))
//! );
//!
//! let errors = RowValidator::new()
//!     .validate_fields(&["AB12", "RIX", "JFK", "2024-05-01 10:00", "2024-05-01 08:00", "150.00"])
//!     .unwrap_err();
//! assert_eq!(errors, vec![ValidationError::ArrivalNotAfterDeparture]);
//! ```

mod fields;
mod row;

pub use fields::*;
pub use row::*;
