//! The seam between the engine and whatever flies the target.
//!
//! The engine never owns the target. Each tick it asks the host for a fresh
//! sample and hands back the ghost's position for display. Hosts that cannot
//! produce a current sample say so; the engine propagates that instead of
//! reusing an old one.

use serde::{Deserialize, Serialize};

use phantom_core::error::EngineError;
use phantom_core::types::{GeoPoint, ProximityReadout, TargetState};

/// One coherent read of the host world: the target's kinematics plus the
/// host sensor's view of the ghost-target pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSample {
    pub target: TargetState,
    pub proximity: ProximityReadout,
}

impl WorldSample {
    /// Reject samples the geometry cannot digest. Out-of-envelope values
    /// are errors, never clamped.
    pub fn validate(&self) -> Result<(), EngineError> {
        let position = &self.target.kinematics.position;
        if !position.is_finite() || !position.in_bounds() {
            return Err(EngineError::InvalidInput(format!(
                "target position out of envelope: ({}, {}, {})",
                position.lat_deg, position.lon_deg, position.elev_m
            )));
        }

        let speed = self.target.kinematics.speed_kt;
        if !speed.is_finite() || speed < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "target ground speed unusable: {speed}"
            )));
        }
        if !self.target.kinematics.heading_deg.is_finite()
            || !self.target.pitch_deg.is_finite()
        {
            return Err(EngineError::InvalidInput(
                "target attitude not finite".into(),
            ));
        }

        if !self.proximity.relative_bearing_deg.is_finite()
            || !self.proximity.relative_altitude_m.is_finite()
            || !self.proximity.relative_distance_m.is_finite()
            || self.proximity.relative_distance_m < 0.0
        {
            return Err(EngineError::InvalidInput(format!(
                "proximity readout unusable: bearing {}, alt {}, dist {}",
                self.proximity.relative_bearing_deg,
                self.proximity.relative_altitude_m,
                self.proximity.relative_distance_m
            )));
        }

        Ok(())
    }
}

/// Host-side world access.
///
/// `read_target` returns an error when the host has no current state to
/// offer. `write_ghost` is display-only: the host renders the ghost where
/// told and never feeds it back into the target's motion.
pub trait WorldState {
    fn read_target(&self) -> Result<WorldSample, EngineError>;
    fn write_ghost(&mut self, position: &GeoPoint);
}
