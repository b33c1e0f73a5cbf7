//! CSV record layout for the per-tick telemetry log.
//!
//! The column order is load-bearing: downstream analysis notebooks index
//! these columns by position. The `Ghost Bearing`/`Ghost Alt`/`Ghost Dist`
//! columns carry the host sensor's readouts, not values recomputed from the
//! raw positions.

use crate::state::TickSnapshot;

/// Column headers, one per record field, in write order.
pub const CSV_HEADERS: [&str; 23] = [
    "Time",
    "Attacker Latitude",
    "Attacker Longitude",
    "Attacker Elevation",
    "Attacker Slant",
    "Ghost Latitude",
    "Ghost Longitude",
    "Ghost Elevation",
    "Ghost Speed",
    "Ghost Heading",
    "Ghost Slant",
    "Ghost Bearing",
    "Ghost Alt",
    "Ghost Dist",
    "Target Lat",
    "Target Lon",
    "Target Elevation",
    "Target Speed",
    "Target Heading",
    "Effective Angle",
    "Closing Speed",
    "Attack Valid",
    "RA Triggered",
];

/// The header row, comma-joined, no trailing newline.
pub fn csv_header_line() -> String {
    CSV_HEADERS.join(",")
}

/// One snapshot rendered as its 23 column values, in header order.
///
/// Floats use the shortest round-trip formatting; booleans render as
/// `true`/`false`.
pub fn csv_record_fields(snapshot: &TickSnapshot) -> [String; 23] {
    let geometry = &snapshot.geometry;
    let ghost = &snapshot.ghost;
    let target = &snapshot.target.kinematics;

    [
        format!("{}", snapshot.time.elapsed_secs),
        format!("{}", snapshot.attacker.lat_deg),
        format!("{}", snapshot.attacker.lon_deg),
        format!("{}", snapshot.attacker.elev_m),
        format!("{}", geometry.attacker_slant_m),
        format!("{}", ghost.position.lat_deg),
        format!("{}", ghost.position.lon_deg),
        format!("{}", ghost.position.elev_m),
        format!("{}", ghost.speed_kt),
        format!("{}", ghost.heading_deg),
        format!("{}", geometry.ghost_slant_m),
        format!("{}", geometry.relative_bearing_deg),
        format!("{}", geometry.relative_altitude_m),
        format!("{}", geometry.relative_distance_m),
        format!("{}", target.position.lat_deg),
        format!("{}", target.position.lon_deg),
        format!("{}", target.position.elev_m),
        format!("{}", target.speed_kt),
        format!("{}", target.heading_deg),
        format!("{}", geometry.effective_angle_deg),
        format!("{}", geometry.closing_speed_kt),
        format!("{}", snapshot.status.is_valid()),
        format!("{}", snapshot.ra_observed),
    ]
}

/// One snapshot as a comma-joined record line, no trailing newline.
pub fn csv_record_line(snapshot: &TickSnapshot) -> String {
    csv_record_fields(snapshot).join(",")
}
