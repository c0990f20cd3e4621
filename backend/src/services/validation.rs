//! Request validation for school creation and ranked listing.
//!
//! Create input is checked field by field in the order name, address,
//! latitude, longitude; the first failure is reported and nothing after it is
//! examined.

use serde_json::{Number, Value};

use super::error::ServiceError;
use crate::models::{Coordinate, NewSchool};
use crate::routes::schools::{CreateSchoolRequest, ListSchoolsRequest};

pub const NAME_MESSAGE: &str = "Name is required and must be a non-empty string.";
pub const ADDRESS_MESSAGE: &str = "Address is required and must be a non-empty string.";
pub const LATITUDE_MESSAGE: &str = "Latitude is required and must be a number.";
pub const LONGITUDE_MESSAGE: &str = "Longitude is required and must be a number.";
pub const LATITUDE_RANGE_MESSAGE: &str = "Latitude must be between -90 and 90.";
pub const LONGITUDE_RANGE_MESSAGE: &str = "Longitude must be between -180 and 180.";

fn required_text(value: Option<&Value>, message: &str) -> Result<String, ServiceError> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(ServiceError::Validation(message.to_string())),
    }
}

/// Read a JSON number from its literal text.
///
/// Literals beyond the `f64` range come back as infinities instead of being
/// dropped, so they fail the range check rather than the type check.
fn number_value(number: &Number) -> Option<f64> {
    number.to_string().parse::<f64>().ok()
}

fn required_number(
    value: Option<&Value>,
    min: f64,
    max: f64,
    type_message: &str,
    range_message: &str,
) -> Result<f64, ServiceError> {
    let number = match value {
        Some(Value::Number(n)) => number_value(n),
        _ => None,
    }
    .ok_or_else(|| ServiceError::Validation(type_message.to_string()))?;
    if !(min..=max).contains(&number) {
        return Err(ServiceError::Validation(range_message.to_string()));
    }
    Ok(number)
}

/// Validate a create request into a storable [`NewSchool`].
///
/// Only JSON numbers count as coordinates here; `"10.5"` is rejected.
pub fn validate_new_school(request: &CreateSchoolRequest) -> Result<NewSchool, ServiceError> {
    let name = required_text(request.name.as_ref(), NAME_MESSAGE)?;
    let address = required_text(request.address.as_ref(), ADDRESS_MESSAGE)?;
    let latitude = required_number(
        request.latitude.as_ref(),
        -90.0,
        90.0,
        LATITUDE_MESSAGE,
        LATITUDE_RANGE_MESSAGE,
    )?;
    let longitude = required_number(
        request.longitude.as_ref(),
        -180.0,
        180.0,
        LONGITUDE_MESSAGE,
        LONGITUDE_RANGE_MESSAGE,
    )?;

    Ok(NewSchool {
        name,
        address,
        latitude,
        longitude,
    })
}

/// Interpret one query coordinate: a JSON number, or a string that parses as
/// an `f64` after trimming. Either way the value must be finite.
fn query_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => number_value(n),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

/// Parse the query point for a ranked listing.
///
/// Presence of both values is checked before either is parsed, so a missing
/// longitude wins over a malformed latitude.
pub fn parse_query_coordinate(request: &ListSchoolsRequest) -> Result<Coordinate, ServiceError> {
    let (Some(latitude), Some(longitude)) = (request.latitude.as_ref(), request.longitude.as_ref())
    else {
        return Err(ServiceError::MissingQuery);
    };

    match (query_number(latitude), query_number(longitude)) {
        (Some(latitude), Some(longitude)) => Ok(Coordinate::new(latitude, longitude)),
        _ => Err(ServiceError::InvalidQuery),
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;
