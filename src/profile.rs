use chrono::NaiveTime;
use log::debug;

use crate::angles::sun_position;
use crate::efficiency::alignment_efficiency;
use crate::tracking::resolve_panel_orientation;
use crate::types::{
    DayProfile, LocalInstant, PanelOrientation, ProfileConfig, ProfileEntry, SunPosition,
};

pub fn minutes_to_time(total_minutes: i32) -> (i32, i32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn time_to_minutes(time: (i32, i32)) -> i32 {
    time.0 * 60 + time.1
}

pub fn intervals_per_day(interval_minutes: i32) -> i32 {
    1440 / interval_minutes
}

/// Sweep a full civil day at the configured interval, running the full
/// recompute (sun position, panel resolution, efficiency) for every step.
/// Night steps carry a horizon-pinned sun rather than being skipped.
pub fn generate_day_profile(config: &ProfileConfig) -> DayProfile {
    let n_intervals = intervals_per_day(config.interval_minutes);
    let mut entries = Vec::with_capacity(n_intervals as usize);

    for interval in 0..n_intervals {
        let minutes = interval * config.interval_minutes;
        let (hour, minute) = minutes_to_time(minutes);
        // minutes < 1440, so hour/minute are always in range
        let time = NaiveTime::from_hms_opt(hour as u32, minute as u32, 0).unwrap();
        let instant = LocalInstant {
            date: config.date,
            time,
        };

        let sun = sun_position(&config.location, &instant);
        let panel = resolve_panel_orientation(config.mode, config.manual_orientation, &sun);
        let efficiency = alignment_efficiency(&panel, &sun);
        entries.push(ProfileEntry {
            minutes,
            sun,
            panel,
            efficiency,
        });
    }

    debug!(
        "day profile for {}: {} entries at {}-minute steps",
        config.date,
        entries.len(),
        config.interval_minutes
    );

    DayProfile {
        config: *config,
        entries,
    }
}

/// Interpolate between two azimuths along the shorter arc, staying in [0, 360).
pub fn interpolate_angle(a1: f64, a2: f64, fraction: f64) -> f64 {
    let diff = a2 - a1;
    let adjusted_diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    (a1 + adjusted_diff * fraction).rem_euclid(360.0)
}

fn interpolate_linear(v1: f64, v2: f64, fraction: f64) -> f64 {
    v1 + fraction * (v2 - v1)
}

fn find_bracketing_entries(
    entries: &[ProfileEntry],
    interval_minutes: i32,
    minutes: i32,
) -> Option<(&ProfileEntry, Option<&ProfileEntry>, f64)> {
    if entries.is_empty() {
        return None;
    }
    let first_minutes = entries[0].minutes;
    let last_minutes = entries.last().unwrap().minutes;
    if minutes < first_minutes || minutes > last_minutes {
        return None;
    }

    let idx_before =
        ((minutes - first_minutes) / interval_minutes).min(entries.len() as i32 - 1) as usize;
    let entry_before = &entries[idx_before];
    let entry_after = entries.get(idx_before + 1);
    let t0 = entry_before.minutes;

    if entry_after.is_none() || minutes == t0 {
        return Some((entry_before, None, 0.0));
    }

    let t1 = entry_after.unwrap().minutes;
    let fraction = (minutes - t0) as f64 / (t1 - t0) as f64;
    Some((entry_before, entry_after, fraction))
}

/// Resolve an arbitrary minute of day against the profile, interpolating
/// between bracketing entries. Returns `None` outside the table's range.
pub fn lookup_profile(profile: &DayProfile, minutes: i32) -> Option<ProfileEntry> {
    let (before, after, fraction) =
        find_bracketing_entries(&profile.entries, profile.config.interval_minutes, minutes)?;
    match after {
        None => Some(ProfileEntry { minutes, ..*before }),
        Some(after) => {
            let sun = SunPosition {
                azimuth: interpolate_angle(before.sun.azimuth, after.sun.azimuth, fraction),
                elevation: interpolate_linear(before.sun.elevation, after.sun.elevation, fraction),
            };
            let panel = PanelOrientation {
                azimuth: interpolate_angle(before.panel.azimuth, after.panel.azimuth, fraction),
                elevation: interpolate_linear(
                    before.panel.elevation,
                    after.panel.elevation,
                    fraction,
                ),
            };
            let efficiency = interpolate_linear(before.efficiency, after.efficiency, fraction);
            Some(ProfileEntry {
                minutes,
                sun,
                panel,
                efficiency,
            })
        }
    }
}
