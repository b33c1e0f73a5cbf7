//! Scenario configuration: a single JSON file covering the engine, the
//! scripted host, and the telemetry log.
//!
//! Every key has a compiled default, so a partial file works and a missing
//! file runs the stock Heathrow approach scenario. A file that exists but
//! does not parse is a startup error, not a silent fallback.

use std::error::Error;
use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use phantom_core::constants::KNOTS_PER_MPS;
use phantom_core::error::EngineError;
use phantom_core::types::{GeoPoint, KinematicState, TargetState};
use phantom_sim::AttackConfig;

/// Initial state and script for the stand-in host world.
///
/// Target speed is meters per second here because that is the host's native
/// unit; the conversion to knots happens when the sample is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub target_lat_deg: f64,
    pub target_lon_deg: f64,
    pub target_elev_m: f64,
    pub target_speed_mps: f64,
    pub target_heading_deg: f64,
    pub target_pitch_deg: f64,
    /// Simulation time at which the scripted operator reports a resolution
    /// advisory. `None` means nobody presses the button.
    pub ra_trigger_secs: Option<f64>,
    /// Give up and report a timeout after this much simulation time.
    pub max_sim_secs: f64,
    /// Pace ticks to wall clock instead of free-running.
    pub realtime: bool,
    /// 24-bit mode S address the ghost squawks, hex.
    pub ghost_mode_s_hex: String,
    /// Flight id shown for the ghost track.
    pub ghost_tail: String,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            target_lat_deg: 51.6000,
            target_lon_deg: -0.4543,
            target_elev_m: 950.0,
            target_speed_mps: 72.0,
            target_heading_deg: 180.0,
            target_pitch_deg: 1.5,
            ra_trigger_secs: None,
            max_sim_secs: 120.0,
            realtime: false,
            ghost_mode_s_hex: "A41B14".into(),
            ghost_tail: "D-EHNR".into(),
        }
    }
}

impl ScenarioConfig {
    /// The target's starting state in engine units.
    pub fn target_state(&self) -> TargetState {
        TargetState {
            kinematics: KinematicState {
                position: GeoPoint::new(self.target_lat_deg, self.target_lon_deg, self.target_elev_m),
                speed_kt: self.target_speed_mps * KNOTS_PER_MPS,
                heading_deg: self.target_heading_deg,
            },
            pitch_deg: self.target_pitch_deg,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let position = GeoPoint::new(self.target_lat_deg, self.target_lon_deg, self.target_elev_m);
        if !position.is_finite() || !position.in_bounds() {
            return Err(EngineError::InvalidInput(format!(
                "scenario target position out of envelope: ({}, {}, {})",
                self.target_lat_deg, self.target_lon_deg, self.target_elev_m
            )));
        }
        if !self.target_speed_mps.is_finite() || self.target_speed_mps < 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "scenario target speed unusable: {}",
                self.target_speed_mps
            )));
        }
        if !self.max_sim_secs.is_finite() || self.max_sim_secs <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "scenario length must be positive: {}",
                self.max_sim_secs
            )));
        }
        Ok(())
    }
}

/// Everything one run needs, in one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhantomConfig {
    pub engine: AttackConfig,
    pub scenario: ScenarioConfig,
    pub log_path: String,
}

impl Default for PhantomConfig {
    fn default() -> Self {
        Self {
            engine: AttackConfig::default(),
            scenario: ScenarioConfig::default(),
            log_path: "tcas_data_log.csv".into(),
        }
    }
}

impl PhantomConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        self.engine.validate()?;
        self.scenario.validate()?;
        if self.log_path.is_empty() {
            return Err(EngineError::InvalidInput("log_path is empty".into()));
        }
        Ok(())
    }
}

/// Load and validate the run configuration.
///
/// A missing file is not an error: the compiled defaults run a complete
/// scenario. A file that exists but fails to parse or validate aborts
/// startup.
pub fn load_config(path: &str) -> Result<PhantomConfig, Box<dyn Error>> {
    if !Path::new(path).exists() {
        warn!("config file {path} not found, using built-in defaults");
        return Ok(PhantomConfig::default());
    }

    let text = fs::read_to_string(path)?;
    let config: PhantomConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_a_runnable_scenario() {
        let config = PhantomConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.engine.attacker_lat_deg, 51.47);
        assert_eq!(config.scenario.ghost_mode_s_hex, "A41B14");
    }

    #[test]
    fn test_empty_log_path_rejected() {
        let mut config = PhantomConfig::default();
        assert_eq!(config.log_path, "tcas_data_log.csv");
        config.log_path.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let text = r#"{ "scenario": { "target_elev_m": 1200.0, "ra_trigger_secs": 8.5 } }"#;
        let config: PhantomConfig = serde_json::from_str(text).unwrap();

        assert_eq!(config.scenario.target_elev_m, 1200.0);
        assert_eq!(config.scenario.ra_trigger_secs, Some(8.5));
        // untouched sections keep their defaults
        assert_eq!(config.scenario.target_lat_deg, 51.6);
        assert_eq!(config.engine.start_distance_m, 5_000.0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let text = r#"{ "engine": { "ghost_speed_kt": "fast" } }"#;
        assert!(serde_json::from_str::<PhantomConfig>(text).is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config("no_such_phantom_config.json").unwrap();
        assert_eq!(config.scenario, ScenarioConfig::default());
    }

    #[test]
    fn test_scenario_validation_rejects_out_of_envelope() {
        let mut config = PhantomConfig::default();
        config.scenario.target_lat_deg = 95.0;
        assert!(config.validate().is_err());

        let mut config = PhantomConfig::default();
        config.scenario.max_sim_secs = 0.0;
        assert!(config.validate().is_err());

        let mut config = PhantomConfig::default();
        config.engine.ghost_speed_kt = -10.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_target_state_converts_to_knots() {
        let scenario = ScenarioConfig::default();
        let target = scenario.target_state();
        // 72 m/s is ~139.96 kt
        assert!((target.kinematics.speed_kt - 72.0 * KNOTS_PER_MPS).abs() < 1e-12);
        assert!((target.kinematics.speed_kt - 139.96).abs() < 0.01);
        assert_eq!(target.pitch_deg, 1.5);
    }
}
