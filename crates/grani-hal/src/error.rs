//! Error types for the HAL crate.

use thiserror::Error;

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;

/// Errors that can occur in HAL operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// An external simulation call failed.
    #[error("Simulation failed: {0}")]
    SimulationFailed(String),

    /// An external transpilation call failed for a reason other than
    /// routability (those are reported via `TranspileOutcome::Unroutable`).
    #[error("Transpilation failed: {0}")]
    TranspilationFailed(String),

    /// An external call did not complete in time.
    #[error("Timeout waiting for {0}")]
    Timeout(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
