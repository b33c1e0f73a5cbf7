//! Attack geometry validity state machine.
//!
//! Pure functions that measure one tick's spatial arrangement and decide
//! whether the spoofed track can still be presented. No world access;
//! operates on plain data.

use phantom_core::geo;
use phantom_core::state::{AttackGeometry, AttackStatus};
use phantom_core::types::{GeoPoint, KinematicState, ProximityReadout, TargetState};

/// Input to the validity engine for a single tick.
pub struct GeometryContext {
    pub attacker: GeoPoint,
    pub ghost: KinematicState,
    pub target: TargetState,
    pub proximity: ProximityReadout,
    pub status: AttackStatus,
}

/// Output from the validity engine.
pub struct GeometryUpdate {
    pub status: AttackStatus,
    pub geometry: AttackGeometry,
    pub status_changed: bool,
}

/// Evaluate one tick. The attack stands while the ghost is strictly farther
/// from the target than the attacker is; the tick the ghost's slant range
/// reaches the attacker's, the attack goes invalid and never comes back.
/// The boundary is non-strict: exact equality already invalidates.
pub fn evaluate(ctx: &GeometryContext) -> GeometryUpdate {
    let geometry = measure(ctx);

    // Terminal state, no transitions out
    if ctx.status == AttackStatus::Invalid {
        return GeometryUpdate {
            status: AttackStatus::Invalid,
            geometry,
            status_changed: false,
        };
    }

    if geometry.ghost_slant_m <= geometry.attacker_slant_m {
        return GeometryUpdate {
            status: AttackStatus::Invalid,
            geometry,
            status_changed: true,
        };
    }

    GeometryUpdate {
        status: AttackStatus::Valid,
        geometry,
        status_changed: false,
    }
}

/// Measure the tick's geometry. Slant ranges and angles come from the raw
/// positions; the `relative_*` fields pass the sensor readouts through
/// untouched, even when the two disagree.
fn measure(ctx: &GeometryContext) -> AttackGeometry {
    let target = &ctx.target.kinematics;

    let attacker_slant_m = geo::slant_range_m(&ctx.attacker, &target.position);
    let ghost_slant_m = geo::slant_range_m(&ctx.ghost.position, &target.position);
    let elevation_angle_deg = geo::elevation_angle_deg(&ctx.attacker, &target.position);

    AttackGeometry {
        attacker_slant_m,
        ghost_slant_m,
        relative_bearing_deg: ctx.proximity.relative_bearing_deg,
        relative_altitude_m: ctx.proximity.relative_altitude_m,
        relative_distance_m: ctx.proximity.relative_distance_m,
        elevation_angle_deg,
        effective_angle_deg: ctx.target.pitch_deg + elevation_angle_deg,
        closing_speed_kt: geo::closing_speed_kt(
            ctx.ghost.speed_kt,
            ctx.ghost.heading_deg,
            target.speed_kt,
            target.heading_deg,
        ),
    }
}
