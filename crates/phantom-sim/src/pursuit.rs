//! Ghost trajectory integration.
//!
//! The ghost flies pure pursuit: every tick it moves along its current
//! heading, then snaps the heading to the fresh line of sight from its new
//! position to the target. There is no turn-rate limit and no smoothing;
//! the track jitters exactly as much as the target does.

use phantom_core::geo;
use phantom_core::types::{GeoPoint, KinematicState, TargetState};

/// Place the ghost on the reciprocal of the attacker-to-target bearing,
/// `start_distance_m` behind the attacker, co-altitude with the target and
/// already pointed at it.
pub fn seed_ghost(
    attacker: &GeoPoint,
    target: &TargetState,
    start_distance_m: f64,
    speed_kt: f64,
) -> KinematicState {
    let inbound = geo::bearing_deg(attacker, &target.kinematics.position);
    let reciprocal = (inbound + 180.0).rem_euclid(360.0);

    let mut position = geo::offset_position(attacker, reciprocal, start_distance_m);
    position.elev_m = target.kinematics.position.elev_m;

    KinematicState {
        position,
        speed_kt,
        heading_deg: inbound,
    }
}

/// Advance the ghost one tick of `dt_secs`.
///
/// Movement uses the heading the ghost entered the tick with; re-steering
/// happens afterwards, from the new position. Elevation is slaved to the
/// target's so the ghost always presents a co-altitude threat.
pub fn advance_ghost(ghost: &mut KinematicState, target: &TargetState, dt_secs: f64) {
    ghost.position =
        geo::project_position(&ghost.position, ghost.speed_kt, ghost.heading_deg, dt_secs);
    ghost.position.elev_m = target.kinematics.position.elev_m;
    ghost.heading_deg = geo::bearing_deg(&ghost.position, &target.kinematics.position);
}
