//! Serialization and value-type behavior tests.

use crate::state::{AttackGeometry, AttackStatus, TickSnapshot};
use crate::types::{GeoPoint, KinematicState, ProximityReadout, SimTime, TargetState};

fn sample_snapshot() -> TickSnapshot {
    TickSnapshot {
        time: SimTime {
            tick: 100,
            elapsed_secs: 10.0,
        },
        attacker: GeoPoint::new(51.47, -0.4543, 25.0),
        ghost: KinematicState {
            position: GeoPoint::new(51.425, -0.46, 950.0),
            speed_kt: 350.0,
            heading_deg: 1.25,
        },
        target: TargetState {
            kinematics: KinematicState {
                position: GeoPoint::new(51.62, -0.44, 950.0),
                speed_kt: 280.0,
                heading_deg: 184.0,
            },
            pitch_deg: 2.0,
        },
        geometry: AttackGeometry {
            attacker_slant_m: 16_700.0,
            ghost_slant_m: 21_700.0,
            relative_bearing_deg: 181.0,
            relative_altitude_m: 0.0,
            relative_distance_m: 21.7,
            elevation_angle_deg: 3.1,
            effective_angle_deg: 5.1,
            closing_speed_kt: 630.0,
        },
        status: AttackStatus::Valid,
        ra_observed: false,
    }
}

#[test]
fn test_geo_point_serde_round_trip() {
    let point = GeoPoint::new(51.47, -0.4543, 25.0);
    let json = serde_json::to_string(&point).unwrap();
    let back: GeoPoint = serde_json::from_str(&json).unwrap();
    assert_eq!(point, back);
}

#[test]
fn test_proximity_readout_serde_round_trip() {
    let readout = ProximityReadout {
        relative_bearing_deg: 359.5,
        relative_altitude_m: -120.0,
        relative_distance_m: 4_200.0,
    };
    let json = serde_json::to_string(&readout).unwrap();
    let back: ProximityReadout = serde_json::from_str(&json).unwrap();
    assert_eq!(readout, back);
}

#[test]
fn test_snapshot_serde_round_trip() {
    let snapshot = sample_snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: TickSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, back);
}

#[test]
fn test_snapshot_serialization_is_deterministic() {
    let snapshot = sample_snapshot();
    let first = serde_json::to_string(&snapshot).unwrap();
    let second = serde_json::to_string(&snapshot).unwrap();
    assert_eq!(first, second, "same snapshot must serialize identically");
}

#[test]
fn test_geo_point_bounds() {
    assert!(GeoPoint::new(90.0, 180.0, 0.0).in_bounds());
    assert!(GeoPoint::new(-90.0, -180.0, -400.0).in_bounds());
    assert!(!GeoPoint::new(90.1, 0.0, 0.0).in_bounds());
    assert!(!GeoPoint::new(0.0, -180.5, 0.0).in_bounds());
}

#[test]
fn test_geo_point_finiteness() {
    assert!(GeoPoint::new(51.47, -0.4543, 25.0).is_finite());
    assert!(!GeoPoint::new(f64::NAN, 0.0, 0.0).is_finite());
    assert!(!GeoPoint::new(0.0, f64::INFINITY, 0.0).is_finite());
    assert!(!GeoPoint::new(0.0, 0.0, f64::NEG_INFINITY).is_finite());
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..100 {
        time.advance(0.1);
    }
    assert_eq!(time.tick, 100);
    assert!(
        (time.elapsed_secs - 10.0).abs() < 1e-9,
        "elapsed {:.9}",
        time.elapsed_secs
    );
}
