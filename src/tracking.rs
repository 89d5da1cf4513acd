use log::debug;

use crate::angles::sun_position;
use crate::efficiency::alignment_efficiency;
use crate::types::{PanelOrientation, SunPosition, TrackerInputs, TrackerSnapshot, TrackingMode};

/// Manual mode passes the operator orientation through untouched; auto-track
/// snaps the panel to the sun component-wise, with no easing.
pub fn resolve_panel_orientation(
    mode: TrackingMode,
    manual: PanelOrientation,
    sun: &SunPosition,
) -> PanelOrientation {
    match mode {
        TrackingMode::Manual => manual,
        TrackingMode::AutoTrack => PanelOrientation {
            azimuth: sun.azimuth,
            elevation: sun.elevation,
        },
    }
}

/// One full recompute: sun position, then panel resolution, then efficiency.
/// Pure in its inputs; callers re-invoke on any input change.
pub fn compute_snapshot(inputs: &TrackerInputs) -> TrackerSnapshot {
    let sun = sun_position(&inputs.location, &inputs.instant);
    let panel = resolve_panel_orientation(inputs.mode, inputs.manual_orientation, &sun);
    let efficiency = alignment_efficiency(&panel, &sun);
    debug!(
        "snapshot: sun az {:.2} el {:.2}, panel az {:.2} el {:.2}, efficiency {:.1}%",
        sun.azimuth, sun.elevation, panel.azimuth, panel.elevation, efficiency
    );

    TrackerSnapshot {
        sun,
        panel,
        efficiency,
    }
}
