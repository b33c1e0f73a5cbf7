//! Simulation constants and unit conversions.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 10;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Earth model ---

/// Mean Earth radius in meters (spherical model, used by the haversine).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per degree used by the dead-reckoning step.
/// Applies to both axes; the longitude step is additionally scaled by cos(latitude).
pub const DEAD_RECKON_M_PER_DEG: f64 = 111_139.0;

/// Meters per degree of latitude for the elevation-angle baseline.
pub const ELEVATION_M_PER_DEG_LAT: f64 = 110_574.0;

/// Meters per degree of longitude for the elevation-angle baseline (times cos latitude).
pub const ELEVATION_M_PER_DEG_LON: f64 = 111_320.0;

// --- Unit conversions ---

/// Meters per second in one knot.
pub const MPS_PER_KNOT: f64 = 0.514444;

/// Kilometers per hour in one knot.
pub const KMH_PER_KNOT: f64 = 1.852;

/// Knots in one meter per second.
pub const KNOTS_PER_MPS: f64 = 1.94384;
