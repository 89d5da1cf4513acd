use chrono::NaiveDate;

use heliotrack::profile::*;
use heliotrack::types::{PanelOrientation, ProfileConfig, TrackingMode};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn summer_config() -> ProfileConfig {
    ProfileConfig::for_date(NaiveDate::from_ymd_opt(2026, 6, 21).unwrap())
}

// ── Time utilities ──

#[test]
fn test_time_roundtrip() {
    for m in [0, 1, 59, 60, 61, 120, 719, 720, 721, 1439] {
        assert_eq!(time_to_minutes(minutes_to_time(m)), m, "minutes={}", m);
    }
}

#[test]
fn test_known_time_conversions() {
    assert_eq!(minutes_to_time(0), (0, 0));
    assert_eq!(minutes_to_time(720), (12, 0));
    assert_eq!(minutes_to_time(1439), (23, 59));
    assert_eq!(minutes_to_time(390), (6, 30));
}

#[test]
fn test_intervals_per_day() {
    assert_eq!(intervals_per_day(5), 288);
    assert_eq!(intervals_per_day(15), 96);
    assert_eq!(intervals_per_day(60), 24);
    assert_eq!(intervals_per_day(1), 1440);
}

// ── Generation ──

#[test]
fn test_default_interval_covers_the_day() {
    let profile = generate_day_profile(&summer_config());
    assert_eq!(profile.entries.len(), 288);
    assert_eq!(profile.entries[0].minutes, 0);
    assert_eq!(profile.entries.last().unwrap().minutes, 1435);
}

#[test]
fn test_minutes_strictly_increasing_by_interval() {
    let profile = generate_day_profile(&summer_config());
    for pair in profile.entries.windows(2) {
        assert_eq!(pair[1].minutes - pair[0].minutes, 5);
    }
}

#[test]
fn test_hourly_interval_entry_count() {
    let config = ProfileConfig {
        interval_minutes: 60,
        ..summer_config()
    };
    let profile = generate_day_profile(&config);
    assert_eq!(profile.entries.len(), 24);
    assert_eq!(profile.entries.last().unwrap().minutes, 1380);
}

#[test]
fn test_manual_mode_panel_constant_all_day() {
    let config = ProfileConfig {
        manual_orientation: PanelOrientation {
            azimuth: 200.0,
            elevation: 30.0,
        },
        ..summer_config()
    };
    let profile = generate_day_profile(&config);
    for entry in &profile.entries {
        assert_eq!(entry.panel, config.manual_orientation);
    }
}

#[test]
fn test_auto_track_aligned_in_every_entry() {
    let config = ProfileConfig {
        mode: TrackingMode::AutoTrack,
        ..summer_config()
    };
    let profile = generate_day_profile(&config);
    for entry in &profile.entries {
        assert_eq!(entry.panel.azimuth, entry.sun.azimuth);
        assert_eq!(entry.panel.elevation, entry.sun.elevation);
        assert_approx!(entry.efficiency, 100.0, 1e-9);
    }
}

#[test]
fn test_night_entries_pin_sun_to_horizon() {
    let profile = generate_day_profile(&summer_config());
    assert_eq!(profile.entries[0].sun.elevation, 0.0);
}

#[test]
fn test_noon_entry_has_high_sun() {
    let profile = generate_day_profile(&summer_config());
    let noon = &profile.entries[144];
    assert_eq!(noon.minutes, 720);
    assert!(noon.sun.elevation > 60.0, "elevation={}", noon.sun.elevation);
}

// ── Lookup ──

#[test]
fn test_lookup_on_grid_point_returns_exact_entry() {
    let profile = generate_day_profile(&summer_config());
    let hit = lookup_profile(&profile, 720).unwrap();
    assert_eq!(hit, profile.entries[144]);
}

#[test]
fn test_lookup_last_entry() {
    let profile = generate_day_profile(&summer_config());
    let hit = lookup_profile(&profile, 1435).unwrap();
    assert_eq!(hit, *profile.entries.last().unwrap());
}

#[test]
fn test_lookup_interpolates_between_entries() {
    let profile = generate_day_profile(&summer_config());
    let before = profile.entries[144];
    let after = profile.entries[145];
    let mid = lookup_profile(&profile, 722).unwrap();

    assert_eq!(mid.minutes, 722);
    let lo = before.efficiency.min(after.efficiency);
    let hi = before.efficiency.max(after.efficiency);
    assert!(
        (lo - 1e-9..=hi + 1e-9).contains(&mid.efficiency),
        "efficiency={} not between {} and {}",
        mid.efficiency, lo, hi
    );
    let lo_el = before.sun.elevation.min(after.sun.elevation);
    let hi_el = before.sun.elevation.max(after.sun.elevation);
    assert!((lo_el - 1e-9..=hi_el + 1e-9).contains(&mid.sun.elevation));
}

#[test]
fn test_lookup_outside_table_range() {
    let profile = generate_day_profile(&summer_config());
    assert_eq!(lookup_profile(&profile, -1), None);
    assert_eq!(lookup_profile(&profile, 1436), None);
}

// ── Angle interpolation ──

#[test]
fn test_interpolate_angle_across_north_seam() {
    assert_approx!(interpolate_angle(350.0, 10.0, 0.5), 0.0, 1e-9);
    assert_approx!(interpolate_angle(10.0, 350.0, 0.5), 0.0, 1e-9);
}

#[test]
fn test_interpolate_angle_plain_cases() {
    assert_approx!(interpolate_angle(0.0, 180.0, 0.5), 90.0, 1e-9);
    assert_approx!(interpolate_angle(90.0, 90.0, 0.7), 90.0, 1e-9);
    assert_approx!(interpolate_angle(0.0, 270.0, 0.5), 315.0, 1e-9);
}
