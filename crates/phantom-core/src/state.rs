//! Per-tick attack state: the geometry bundle, the validity status, and the
//! immutable snapshot handed to hosts and telemetry.

use serde::{Deserialize, Serialize};

use crate::types::{GeoPoint, KinematicState, SimTime, TargetState};

/// Whether the spoofed track can still plausibly exist.
///
/// `Valid` means the ghost sits farther from the target than the attacker
/// does, so the attacker's transmissions can stand in for it. The transition
/// to `Invalid` is one-way; no later geometry revives the attack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackStatus {
    #[default]
    Valid,
    Invalid,
}

impl AttackStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, AttackStatus::Valid)
    }
}

/// Everything measured about one tick's spatial arrangement.
///
/// `attacker_slant_m` and `ghost_slant_m` are both computed from position,
/// target-relative. The `relative_*` fields are the host sensor's own
/// readouts of the ghost and are recorded as observed, never recomputed
/// from them. `elevation_angle_deg` is taken attacker-to-target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackGeometry {
    pub attacker_slant_m: f64,
    pub ghost_slant_m: f64,
    pub relative_bearing_deg: f64,
    pub relative_altitude_m: f64,
    pub relative_distance_m: f64,
    pub elevation_angle_deg: f64,
    pub effective_angle_deg: f64,
    pub closing_speed_kt: f64,
}

/// Immutable record of one completed tick.
///
/// Snapshots are plain copies: holding one never observes later ticks, and
/// serializing the same tick twice yields identical bytes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub time: SimTime,
    pub attacker: GeoPoint,
    pub ghost: KinematicState,
    pub target: TargetState,
    pub geometry: AttackGeometry,
    pub status: AttackStatus,
    pub ra_observed: bool,
}

impl TickSnapshot {
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }
}
