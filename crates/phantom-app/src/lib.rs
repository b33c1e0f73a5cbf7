//! PHANTOM headless application.
//!
//! Wires the attack engine to a scripted flight host, a JSON scenario
//! configuration, and the CSV telemetry log, and drives the whole run at
//! the fixed tick rate.

pub mod config;
pub mod host;
pub mod runner;
pub mod telemetry;

pub use phantom_core as core;
