use chrono::Local;

use heliotrack::{
    compute_snapshot, sun_position, GeoLocation, LocalInstant, PanelOrientation, TrackerInputs,
    TrackingMode,
};

fn main() {
    let location = GeoLocation::default();

    let now = Local::now();
    let instant = LocalInstant {
        date: now.date_naive(),
        time: now.time(),
    };

    let sun = sun_position(&location, &instant);

    let manual = TrackerInputs {
        location,
        instant,
        mode: TrackingMode::Manual,
        manual_orientation: PanelOrientation::default(),
    };
    let manual_snap = compute_snapshot(&manual);

    let auto = TrackerInputs {
        mode: TrackingMode::AutoTrack,
        ..manual
    };
    let auto_snap = compute_snapshot(&auto);

    println!("=== Panel Tracking Example ===");
    println!(
        "Location: ({:.1}°, {:.1}°)",
        location.latitude, location.longitude
    );
    println!(
        "Local time: {} {}",
        instant.date,
        instant.time.format("%H:%M")
    );
    println!();
    println!("--- Sun Position ---");
    println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", sun.azimuth);
    println!("Elevation: {:.2}°", sun.elevation);
    println!();
    println!(
        "--- Manual Panel ({:.0}° az, {:.0}° el) ---",
        manual_snap.panel.azimuth, manual_snap.panel.elevation
    );
    println!("Efficiency: {:.1}%", manual_snap.efficiency);
    println!();
    println!("--- Auto-Track ---");
    println!("Panel azimuth: {:.2}°", auto_snap.panel.azimuth);
    println!("Panel elevation: {:.2}°", auto_snap.panel.elevation);
    println!("Efficiency: {:.1}%", auto_snap.efficiency);
}
