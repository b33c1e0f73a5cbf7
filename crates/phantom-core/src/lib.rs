//! Core types and definitions for the PHANTOM ghost-track simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geodetic types, the geodesy math, constants, errors, the per-tick
//! snapshot, and the telemetry record schema. It has no dependency on
//! any host or runtime framework.

pub mod constants;
pub mod error;
pub mod geo;
pub mod state;
pub mod telemetry;
pub mod types;

#[cfg(test)]
mod tests;
