//! Argument checks run before any request is built
//!
//! Optional string arguments that are empty count as absent, so only
//! non-empty values are checked.

use crate::error::GisgraphyError;

/// Require a non-empty string; whitespace is left for the server to judge
pub fn require_text(field: &str, value: &str) -> Result<(), GisgraphyError> {
    if value.is_empty() {
        return Err(GisgraphyError::MissingRequiredField(format!(
            "{field} is a required parameter"
        )));
    }
    Ok(())
}

/// Check an optional ISO 3166 alpha-2 country code
pub fn country_code(value: Option<&str>) -> Result<(), GisgraphyError> {
    match non_empty(value) {
        Some(code) if code.chars().count() != 2 => Err(GisgraphyError::InvalidFormat(format!(
            "country '{code}' must be an ISO 3166 alpha-2 code"
        ))),
        _ => Ok(()),
    }
}

/// Check an optional ISO 639 alpha-2 or alpha-3 language code
pub fn language_code(value: Option<&str>) -> Result<(), GisgraphyError> {
    match non_empty(value) {
        Some(code) if !matches!(code.chars().count(), 2 | 3) => {
            Err(GisgraphyError::InvalidFormat(format!(
                "language '{code}' must be an ISO 639 alpha-2 or alpha-3 code"
            )))
        },
        _ => Ok(()),
    }
}

/// Check a latitude lies in [-90, 90]
pub fn latitude(value: f64) -> Result<(), GisgraphyError> {
    if !(-90.0..=90.0).contains(&value) {
        return Err(GisgraphyError::OutOfRange(format!(
            "latitude {value} must be between -90 and 90"
        )));
    }
    Ok(())
}

/// Check a longitude lies in [-180, 180]
pub fn longitude(value: f64) -> Result<(), GisgraphyError> {
    if !(-180.0..=180.0).contains(&value) {
        return Err(GisgraphyError::OutOfRange(format!(
            "longitude {value} must be between -180 and 180"
        )));
    }
    Ok(())
}

/// Check an optional coordinate pair: each value in range, both or neither present
pub fn optional_location(lat: Option<f64>, lng: Option<f64>) -> Result<(), GisgraphyError> {
    if let Some(lat) = lat {
        latitude(lat)?;
    }
    if let Some(lng) = lng {
        longitude(lng)?;
    }
    if lat.is_some() != lng.is_some() {
        return Err(GisgraphyError::MissingRequiredField(
            "latitude and longitude must be provided together".to_string(),
        ));
    }
    Ok(())
}

/// Check a search radius is finite and strictly positive
pub fn radius(value: f64) -> Result<(), GisgraphyError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GisgraphyError::OutOfRange(format!(
            "radius {value} must be a finite number greater than 0"
        )));
    }
    Ok(())
}

/// Treat `Some("")` as absent
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
