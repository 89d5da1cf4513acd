use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrackingMode {
    #[default]
    Manual,
    AutoTrack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self {
            latitude: 45.0,
            longitude: 0.0,
        }
    }
}

/// Local calendar date plus local clock time, no time zone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalInstant {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub azimuth: f64,
    pub elevation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelOrientation {
    pub azimuth: f64,
    pub elevation: f64,
}

impl Default for PanelOrientation {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            elevation: 45.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerInputs {
    pub location: GeoLocation,
    pub instant: LocalInstant,
    pub mode: TrackingMode,
    pub manual_orientation: PanelOrientation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerSnapshot {
    pub sun: SunPosition,
    pub panel: PanelOrientation,
    pub efficiency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileConfig {
    pub location: GeoLocation,
    pub date: NaiveDate,
    pub interval_minutes: i32,
    pub mode: TrackingMode,
    pub manual_orientation: PanelOrientation,
}

impl ProfileConfig {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            location: GeoLocation::default(),
            date,
            interval_minutes: 5,
            mode: TrackingMode::default(),
            manual_orientation: PanelOrientation::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileEntry {
    pub minutes: i32,
    pub sun: SunPosition,
    pub panel: PanelOrientation,
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayProfile {
    pub config: ProfileConfig,
    pub entries: Vec<ProfileEntry>,
}
