use chrono::{Datelike, Timelike};

use crate::types::{GeoLocation, LocalInstant, SunPosition};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn day_of_year(instant: &LocalInstant) -> i32 {
    instant.date.ordinal() as i32
}

pub fn clock_hours(instant: &LocalInstant) -> f64 {
    instant.time.hour() as f64
        + instant.time.minute() as f64 / 60.0
        + instant.time.second() as f64 / 3600.0
}

/// Simplified declination model, no leap-year or equation-of-time correction.
pub fn solar_declination(day_of_year: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad((360.0 / 365.0) * (day_of_year as f64 - 81.0)).sin()
}

/// The longitude term stands in for the time-zone offset at 15° per hour.
pub fn hour_angle(clock_hours: f64, longitude: f64) -> f64 {
    DEGREES_PER_HOUR * (clock_hours - 12.0) + longitude
}

pub fn solar_elevation(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_elev = lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(sin_elev.clamp(-1.0, 1.0).asin())
}

/// `elevation` is the raw (unclamped) elevation in degrees. Mornings map to
/// [0, 180], afternoons mirror to [180, 360].
pub fn solar_azimuth(latitude: f64, declination: f64, elevation: f64, clock_hours: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let elev_rad = deg_to_rad(elevation);

    let denom = lat_rad.cos() * elev_rad.cos();
    let cos_az = if denom.abs() > 1e-9 {
        (dec_rad.sin() - lat_rad.sin() * elev_rad.sin()) / denom
    } else {
        0.0
    };
    let azimuth = rad_to_deg(cos_az.clamp(-1.0, 1.0).acos());

    if clock_hours > 12.0 {
        360.0 - azimuth
    } else {
        azimuth
    }
}

/// Apparent sun position for a location and local timestamp. Total over all
/// finite inputs: inverse-trig arguments are clamped to [-1, 1] and the
/// output is clamped to azimuth [0, 360], elevation [0, 90].
pub fn sun_position(location: &GeoLocation, instant: &LocalInstant) -> SunPosition {
    let n = day_of_year(instant);
    let hour = clock_hours(instant);
    let declination = solar_declination(n);
    let ha = hour_angle(hour, location.longitude);
    let elevation = solar_elevation(location.latitude, declination, ha);
    let azimuth = solar_azimuth(location.latitude, declination, elevation, hour);

    SunPosition {
        azimuth: azimuth.clamp(0.0, 360.0),
        elevation: elevation.clamp(0.0, 90.0),
    }
}
