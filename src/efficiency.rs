use crate::angles::deg_to_rad;
use crate::types::{PanelOrientation, SunPosition};

/// Geometric coupling efficiency between panel normal and sun direction,
/// in percent [0, 100]. Azimuth and elevation misalignment attenuate
/// independently as cosine factors; the angle differences are taken
/// directly, without wrapping across the 0°/360° seam.
pub fn alignment_efficiency(panel: &PanelOrientation, sun: &SunPosition) -> f64 {
    let azimuth_diff = (panel.azimuth - sun.azimuth).abs();
    let elevation_diff = (panel.elevation - sun.elevation).abs();

    let azimuth_factor = deg_to_rad(azimuth_diff).cos();
    let elevation_factor = deg_to_rad(elevation_diff).cos();

    (azimuth_factor * elevation_factor * 100.0).clamp(0.0, 100.0)
}
