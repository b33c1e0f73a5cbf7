//! Engine error types.

use thiserror::Error;

/// Failures surfaced by the attack engine.
///
/// Nothing is retried inside the engine; retry, if any, belongs to the host
/// scheduler.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A non-finite or out-of-range value reached a geometry boundary.
    /// Rejected rather than clamped.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The world-state read failed for this tick. The tick is abandoned;
    /// no last-known-good substitution happens.
    #[error("stale world state: {0}")]
    StaleWorldState(String),
}
