pub mod angles;
pub mod efficiency;
pub mod parse;
pub mod profile;
pub mod tracking;
pub mod types;

pub use angles::{
    clock_hours, day_of_year, deg_to_rad, hour_angle, rad_to_deg, solar_azimuth,
    solar_declination, solar_elevation, sun_position, DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use efficiency::alignment_efficiency;

pub use parse::{parse_date, parse_instant, parse_location, parse_time, ParseError};

pub use profile::{
    generate_day_profile, interpolate_angle, intervals_per_day, lookup_profile, minutes_to_time,
    time_to_minutes,
};

pub use tracking::{compute_snapshot, resolve_panel_orientation};

pub use types::{
    DayProfile, GeoLocation, LocalInstant, PanelOrientation, ProfileConfig, ProfileEntry,
    SunPosition, TrackerInputs, TrackerSnapshot, TrackingMode,
};
