use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::types::{GeoLocation, LocalInstant};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

pub fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ParseError::InvalidDate(s.to_string()))
}

pub fn parse_time(s: &str) -> Result<NaiveTime, ParseError> {
    let formats = ["%H:%M:%S", "%H:%M"];
    for fmt in formats {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Ok(t);
        }
    }
    Err(ParseError::InvalidTime(s.to_string()))
}

pub fn parse_instant(date: &str, time: &str) -> Result<LocalInstant, ParseError> {
    Ok(LocalInstant {
        date: parse_date(date)?,
        time: parse_time(time)?,
    })
}

/// Validate decimal degrees before they reach the math core. Non-finite
/// values fail the range checks.
pub fn parse_location(latitude: f64, longitude: f64) -> Result<GeoLocation, ParseError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ParseError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ParseError::LongitudeOutOfRange(longitude));
    }
    Ok(GeoLocation {
        latitude,
        longitude,
    })
}
