//! Input checks run before anything is fetched.

use crate::{error::WeatherError, model::Coordinate};

pub fn is_valid_latitude(latitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude)
}

pub fn is_valid_longitude(longitude: f64) -> bool {
    (-180.0..=180.0).contains(&longitude)
}

/// Only emptiness is checked; syntax errors surface when the request is sent.
pub fn is_valid_base_url(base_url: &str) -> bool {
    !base_url.is_empty()
}

/// Validate a request's inputs in the order the endpoints report them.
pub fn validate_request(coordinate: Coordinate, base_url: &str) -> Result<(), WeatherError> {
    if !is_valid_latitude(coordinate.latitude) || !is_valid_longitude(coordinate.longitude) {
        return Err(WeatherError::InvalidCoordinates);
    }

    if !is_valid_base_url(base_url) {
        return Err(WeatherError::InvalidBaseUrl);
    }

    Ok(())
}
