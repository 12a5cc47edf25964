//! Evaluator error types.
//!
//! Propagation policy: metric-level degeneracies ([`EvalError::EmptyDistribution`],
//! [`EvalError::NoIncorrectOutcomes`]) and collaborator failures are local to
//! one (circuit, backend) pair — the orchestrator logs and skips that backend.
//! Only [`EvalError::Profile`] (unrecognized circuit content) is fatal to the
//! whole batch, since it signals a configuration mismatch rather than a data
//! degeneracy.

use thiserror::Error;

/// Result type for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during evaluation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvalError {
    /// A distribution has zero total weight and cannot be normalized.
    #[error("Cannot normalize a distribution with zero total weight")]
    EmptyDistribution,

    /// IST's denominator is undefined: every observed outcome is correct,
    /// so there is no dominant incorrect outcome to divide by.
    #[error("IST undefined: every observed outcome is in the correct-answer set")]
    NoIncorrectOutcomes,

    /// Circuit profiling failed (unsupported instruction or malformed op).
    /// Fatal to the batch.
    #[error("Profiling error: {0}")]
    Profile(#[from] grani_ir::IrError),

    /// An external collaborator call failed.
    #[error("Collaborator error: {0}")]
    Hal(#[from] grani_hal::HalError),

    /// Serialization error.
    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),
}
