//! Fundamental geodetic and simulation types.

use serde::{Deserialize, Serialize};

/// A geodetic point: latitude/longitude in degrees, elevation in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub elev_m: f64,
}

/// A position plus the motion that carries it: speed in knots, heading in
/// degrees clockwise from true north.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub position: GeoPoint,
    pub speed_kt: f64,
    pub heading_deg: f64,
}

/// Target aircraft state as sampled from the world each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetState {
    pub kinematics: KinematicState,
    /// Nose pitch above the horizon (degrees).
    pub pitch_deg: f64,
}

/// Proximity readouts for the ghost as shown by the target's own traffic
/// instrument. Observed values, never derived from raw positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProximityReadout {
    /// Bearing to the contact relative to the target's nose (degrees).
    pub relative_bearing_deg: f64,
    /// Contact altitude minus target altitude (meters).
    pub relative_altitude_m: f64,
    /// Straight-line distance to the contact (meters).
    pub relative_distance_m: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl GeoPoint {
    pub fn new(lat_deg: f64, lon_deg: f64, elev_m: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            elev_m,
        }
    }

    /// True when every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.lat_deg.is_finite() && self.lon_deg.is_finite() && self.elev_m.is_finite()
    }

    /// True when latitude and longitude are inside the geodetic envelope.
    pub fn in_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat_deg) && (-180.0..=180.0).contains(&self.lon_deg)
    }
}

impl SimTime {
    /// Advance by one tick of `dt_secs` simulated seconds.
    pub fn advance(&mut self, dt_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += dt_secs;
    }
}
