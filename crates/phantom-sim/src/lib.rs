//! Simulation engine for PHANTOM.
//!
//! Owns the ghost track and its validity state machine, advances one tick
//! at a time against a host-supplied world, and produces TickSnapshots for
//! telemetry and display.

pub mod engine;
pub mod pursuit;
pub mod validity;
pub mod world;

pub use phantom_core as core;
pub use engine::{AttackConfig, AttackEngine};
