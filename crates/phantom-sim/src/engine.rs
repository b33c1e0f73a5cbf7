//! Attack engine, the tick orchestrator.
//!
//! `AttackEngine` owns the ghost track, the validity status, and the clock,
//! and advances them one tick at a time against a host-supplied world.
//! Completely headless (no host dependency), enabling deterministic testing.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use phantom_core::error::EngineError;
use phantom_core::state::{AttackStatus, TickSnapshot};
use phantom_core::types::{GeoPoint, KinematicState, SimTime, TargetState};

use crate::pursuit;
use crate::validity::{self, GeometryContext};
use crate::world::WorldState;

/// Configuration for starting a new attack run. Immutable once the engine
/// is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackConfig {
    /// Transmitter position on the field.
    pub attacker_lat_deg: f64,
    pub attacker_lon_deg: f64,
    pub attacker_elev_m: f64,
    /// Initial ghost offset behind the attacker, meters.
    pub start_distance_m: f64,
    /// Ghost ground speed, knots.
    pub ghost_speed_kt: f64,
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            attacker_lat_deg: 51.4700,
            attacker_lon_deg: -0.4543,
            attacker_elev_m: 25.0,
            start_distance_m: 5_000.0,
            ghost_speed_kt: 350.0,
        }
    }
}

impl AttackConfig {
    pub fn attacker(&self) -> GeoPoint {
        GeoPoint::new(self.attacker_lat_deg, self.attacker_lon_deg, self.attacker_elev_m)
    }

    /// Reject configurations the run cannot start from. Bad values are
    /// errors, never clamped.
    pub fn validate(&self) -> Result<(), EngineError> {
        let attacker = self.attacker();
        if !attacker.is_finite() || !attacker.in_bounds() {
            return Err(EngineError::InvalidInput(format!(
                "attacker position out of envelope: ({}, {}, {})",
                self.attacker_lat_deg, self.attacker_lon_deg, self.attacker_elev_m
            )));
        }
        if !self.start_distance_m.is_finite() || self.start_distance_m <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "start distance must be positive: {}",
                self.start_distance_m
            )));
        }
        if !self.ghost_speed_kt.is_finite() || self.ghost_speed_kt <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "ghost speed must be positive: {}",
                self.ghost_speed_kt
            )));
        }
        Ok(())
    }
}

/// The attack engine. Owns the ghost and all per-run state; the target is
/// read fresh from the world every tick and never written back.
pub struct AttackEngine {
    attacker: GeoPoint,
    ghost: KinematicState,
    target: TargetState,
    status: AttackStatus,
    time: SimTime,
    ra_observed: bool,
}

impl AttackEngine {
    /// Build an engine and seed the ghost behind the attacker, on the
    /// reciprocal of the attacker-to-target bearing. The seeded position is
    /// published immediately so the host shows the ghost before the first
    /// tick.
    pub fn new(config: AttackConfig, world: &mut dyn WorldState) -> Result<Self, EngineError> {
        config.validate()?;

        let sample = world.read_target()?;
        sample.validate()?;

        let attacker = config.attacker();
        let ghost = pursuit::seed_ghost(
            &attacker,
            &sample.target,
            config.start_distance_m,
            config.ghost_speed_kt,
        );
        world.write_ghost(&ghost.position);

        info!(
            "ghost seeded {:.0} m behind attacker at ({:.4}, {:.4}), heading {:.1}°",
            config.start_distance_m,
            ghost.position.lat_deg,
            ghost.position.lon_deg,
            ghost.heading_deg
        );

        Ok(Self {
            attacker,
            ghost,
            target: sample.target,
            status: AttackStatus::default(),
            time: SimTime::default(),
            ra_observed: false,
        })
    }

    /// Advance the attack by one tick of `dt_secs` and return the resulting
    /// snapshot.
    ///
    /// A failed or unusable world read aborts the tick before any state
    /// moves: the clock, the ghost, and the status all stay where they
    /// were, and the error goes to the caller. Ticks keep working after
    /// invalidation; they just stop publishing the ghost.
    pub fn tick(
        &mut self,
        world: &mut dyn WorldState,
        dt_secs: f64,
    ) -> Result<TickSnapshot, EngineError> {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "tick duration unusable: {dt_secs}"
            )));
        }

        // 1. Read the world; a failed read leaves this tick untaken
        let sample = world.read_target()?;
        sample.validate()?;

        // 2. The tick is committed; stamp the clock and adopt the sample
        self.time.advance(dt_secs);
        self.target = sample.target;

        // 3. Integrate the ghost along its entry heading, then re-steer
        pursuit::advance_ghost(&mut self.ghost, &self.target, dt_secs);

        // 4. Publish while the geometry entering this tick still held
        if self.status.is_valid() {
            world.write_ghost(&self.ghost.position);
        }

        // 5. Evaluate validity on the fresh arrangement
        let update = validity::evaluate(&GeometryContext {
            attacker: self.attacker,
            ghost: self.ghost,
            target: self.target,
            proximity: sample.proximity,
            status: self.status,
        });
        if update.status_changed {
            info!(
                "attack geometry invalidated at tick {}: ghost slant {:.1} m inside attacker slant {:.1} m",
                self.time.tick, update.geometry.ghost_slant_m, update.geometry.attacker_slant_m
            );
        }
        self.status = update.status;
        debug!(
            "tick {}: ghost slant {:.1} m, attacker slant {:.1} m, closing {:.1} kt, {:?}",
            self.time.tick,
            update.geometry.ghost_slant_m,
            update.geometry.attacker_slant_m,
            update.geometry.closing_speed_kt,
            self.status
        );

        // 6. Snapshot
        Ok(TickSnapshot {
            time: self.time,
            attacker: self.attacker,
            ghost: self.ghost,
            target: self.target,
            geometry: update.geometry,
            status: self.status,
            ra_observed: self.ra_observed,
        })
    }

    /// Record that the operator saw a resolution advisory on the target's
    /// display. Sticky once set; carried on every later snapshot and never
    /// used in the geometry.
    pub fn observe_ra(&mut self) {
        if !self.ra_observed {
            info!("resolution advisory observed at tick {}", self.time.tick);
        }
        self.ra_observed = true;
    }

    /// Get the current validity status.
    pub fn status(&self) -> AttackStatus {
        self.status
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the ghost's current kinematics.
    pub fn ghost(&self) -> &KinematicState {
        &self.ghost
    }

    /// Get the attacker's fixed position.
    pub fn attacker(&self) -> &GeoPoint {
        &self.attacker
    }

    /// Whether the operator has reported a resolution advisory.
    pub fn ra_observed(&self) -> bool {
        self.ra_observed
    }
}
