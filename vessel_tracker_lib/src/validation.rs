//! Input validation for coordinates and bounding boxes.

use aishub_api::types::BoundingBox;

use crate::error::TrackerError;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Validate a single latitude in decimal degrees.
pub fn validate_latitude(name: &str, value: f64) -> Result<f64, TrackerError> {
    if !value.is_finite() {
        return Err(TrackerError::InvalidInput(format!(
            "{} must be a finite number",
            name
        )));
    }
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&value) {
        return Err(TrackerError::InvalidInput(format!(
            "{} {} is outside {}..={}",
            name, value, MIN_LATITUDE, MAX_LATITUDE
        )));
    }
    Ok(value)
}

/// Validate a single longitude in decimal degrees.
pub fn validate_longitude(name: &str, value: f64) -> Result<f64, TrackerError> {
    if !value.is_finite() {
        return Err(TrackerError::InvalidInput(format!(
            "{} must be a finite number",
            name
        )));
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&value) {
        return Err(TrackerError::InvalidInput(format!(
            "{} {} is outside {}..={}",
            name, value, MIN_LONGITUDE, MAX_LONGITUDE
        )));
    }
    Ok(value)
}

/// Validate a bounding box: every coordinate in range and the minimums
/// not above the maximums. Degenerate (zero-area) boxes are allowed.
pub fn validate_bounds(bounds: &BoundingBox) -> Result<BoundingBox, TrackerError> {
    validate_latitude("min_lat", bounds.min_lat)?;
    validate_latitude("max_lat", bounds.max_lat)?;
    validate_longitude("min_lon", bounds.min_lon)?;
    validate_longitude("max_lon", bounds.max_lon)?;

    if bounds.min_lat > bounds.max_lat {
        return Err(TrackerError::InvalidInput(format!(
            "min_lat {} is greater than max_lat {}",
            bounds.min_lat, bounds.max_lat
        )));
    }
    if bounds.min_lon > bounds.max_lon {
        return Err(TrackerError::InvalidInput(format!(
            "min_lon {} is greater than max_lon {}",
            bounds.min_lon, bounds.max_lon
        )));
    }
    Ok(*bounds)
}
