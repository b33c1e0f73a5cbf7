//! Spherical-earth geodesy for the attack geometry.
//!
//! Slant ranges use the haversine ground distance composed with the
//! elevation delta. Per-tick movement and the elevation-angle baseline use
//! flat-earth meters-per-degree approximations, which hold for sub-kilometer
//! steps at mid latitudes. None of these functions validate their inputs;
//! callers reject non-finite or out-of-envelope values before calling.

use glam::DVec2;

use crate::constants::*;
use crate::types::GeoPoint;

/// Initial great-circle bearing from `from` to `to`, in degrees clockwise
/// from true north, always in `[0, 360)`. Elevation plays no part.
///
/// Coincident points return `0.0` (the `atan2(0, 0) = 0` convention).
pub fn bearing_deg(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.lat_deg.to_radians();
    let lat2 = to.lat_deg.to_radians();
    let dlon = (to.lon_deg - from.lon_deg).to_radians();

    let x = dlon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    x.atan2(y).to_degrees().rem_euclid(360.0)
}

/// Straight-line distance between two points in meters: haversine ground
/// distance on the mean-radius sphere, composed with the elevation
/// difference by Pythagoras. Symmetric and non-negative.
pub fn slant_range_m(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat_deg.to_radians();
    let lat2 = b.lat_deg.to_radians();
    let dlat = (b.lat_deg - a.lat_deg).to_radians();
    let dlon = (b.lon_deg - a.lon_deg).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    let ground = EARTH_RADIUS_M * c;

    let dz = b.elev_m - a.elev_m;
    (ground * ground + dz * dz).sqrt()
}

/// Move `origin` by `distance_m` along `heading_deg` using the flat-earth
/// dead-reckoning step. Elevation is carried through unchanged.
///
/// The longitude step is scaled by the cosine of the latitude *before* the
/// move. Error grows with step size and latitude; sub-kilometer steps away
/// from the poles stay well under a meter.
pub fn offset_position(origin: &GeoPoint, heading_deg: f64, distance_m: f64) -> GeoPoint {
    let heading = heading_deg.to_radians();
    let dlat = distance_m * heading.cos() / DEAD_RECKON_M_PER_DEG;
    let dlon =
        distance_m * heading.sin() / (DEAD_RECKON_M_PER_DEG * origin.lat_deg.to_radians().cos());

    GeoPoint {
        lat_deg: origin.lat_deg + dlat,
        lon_deg: origin.lon_deg + dlon,
        elev_m: origin.elev_m,
    }
}

/// Dead-reckon one step of `dt_secs` at `speed_kt` along `heading_deg`.
pub fn project_position(
    origin: &GeoPoint,
    speed_kt: f64,
    heading_deg: f64,
    dt_secs: f64,
) -> GeoPoint {
    let distance_m = speed_kt * MPS_PER_KNOT * dt_secs;
    offset_position(origin, heading_deg, distance_m)
}

/// Vertical angle from `p1` to `p2` in degrees, signed (negative when `p2`
/// is below `p1`).
///
/// The horizontal baseline uses per-axis meters-per-degree approximations
/// (longitude scaled by cos of `p1`'s latitude) rather than the haversine.
/// Coincident points return `0.0`.
pub fn elevation_angle_deg(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let baseline = DVec2::new(
        (p2.lat_deg - p1.lat_deg) * ELEVATION_M_PER_DEG_LAT,
        (p2.lon_deg - p1.lon_deg) * ELEVATION_M_PER_DEG_LON * p1.lat_deg.to_radians().cos(),
    )
    .length();

    let dz = p2.elev_m - p1.elev_m;
    dz.atan2(baseline).to_degrees()
}

/// Scalar closure rate of two velocity vectors, in knots.
///
/// This is the magnitude of the velocity difference, not a signed range
/// rate: equal vectors close at zero, reciprocal headings close at the sum
/// of the speeds. Symmetric in its arguments and always non-negative.
pub fn closing_speed_kt(
    speed1_kt: f64,
    heading1_deg: f64,
    speed2_kt: f64,
    heading2_deg: f64,
) -> f64 {
    let v1 = velocity_kmh(speed1_kt, heading1_deg);
    let v2 = velocity_kmh(speed2_kt, heading2_deg);
    (v2 - v1).length() / KMH_PER_KNOT
}

/// North/east velocity components in km/h for a speed in knots and a
/// heading in degrees from true north.
fn velocity_kmh(speed_kt: f64, heading_deg: f64) -> DVec2 {
    let heading = heading_deg.to_radians();
    let speed = speed_kt * KMH_PER_KNOT;
    DVec2::new(speed * heading.cos(), speed * heading.sin())
}
