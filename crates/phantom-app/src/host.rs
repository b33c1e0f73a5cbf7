//! Scripted stand-in for the host flight platform.
//!
//! Flies the target on a fixed speed and track, and answers world reads the
//! way the real host would: target state in host units plus the traffic
//! instrument's view of the last ghost position it was given. The ghost
//! feeds the instrument only through `write_ghost`, never through shared
//! state.

use phantom_core::error::EngineError;
use phantom_core::geo;
use phantom_core::types::{GeoPoint, ProximityReadout, TargetState};
use phantom_sim::world::{WorldSample, WorldState};

use crate::config::ScenarioConfig;

pub struct ScriptedHost {
    target: TargetState,
    last_ghost: Option<GeoPoint>,
    failed: bool,
}

impl ScriptedHost {
    pub fn new(scenario: &ScenarioConfig) -> Self {
        Self {
            target: scenario.target_state(),
            last_ghost: None,
            failed: false,
        }
    }

    /// Advance the target one tick along its scripted track.
    pub fn fly_target(&mut self, dt_secs: f64) {
        let kinematics = &mut self.target.kinematics;
        kinematics.position = geo::project_position(
            &kinematics.position,
            kinematics.speed_kt,
            kinematics.heading_deg,
            dt_secs,
        );
    }

    /// Simulate a host outage: reads fail until cleared.
    pub fn set_failed(&mut self, failed: bool) {
        self.failed = failed;
    }

    pub fn target(&self) -> &TargetState {
        &self.target
    }

    /// What the target's traffic instrument shows for the ghost. Zeros
    /// until a ghost position has been published.
    fn observe_ghost(&self) -> ProximityReadout {
        let Some(ghost) = &self.last_ghost else {
            return ProximityReadout::default();
        };

        let target = &self.target.kinematics;
        let absolute = geo::bearing_deg(&target.position, ghost);
        ProximityReadout {
            relative_bearing_deg: (absolute - target.heading_deg).rem_euclid(360.0),
            relative_altitude_m: ghost.elev_m - target.position.elev_m,
            relative_distance_m: geo::slant_range_m(&target.position, ghost),
        }
    }
}

impl WorldState for ScriptedHost {
    fn read_target(&self) -> Result<WorldSample, EngineError> {
        if self.failed {
            return Err(EngineError::StaleWorldState(
                "host bridge offline".into(),
            ));
        }
        Ok(WorldSample {
            target: self.target,
            proximity: self.observe_ghost(),
        })
    }

    fn write_ghost(&mut self, position: &GeoPoint) {
        self.last_ghost = Some(*position);
    }
}
