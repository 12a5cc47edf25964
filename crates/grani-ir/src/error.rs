//! Error types for the IR crate.

use thiserror::Error;

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

/// Errors that can occur while building IR values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A compiled circuit contains a gate outside the supplied vocabulary.
    ///
    /// This signals a profiling/configuration gap: counting around the
    /// unknown gate would silently produce wrong gate counts, so the
    /// profile is refused instead.
    #[error("Unsupported instruction '{gate}' not in basis gate vocabulary")]
    UnsupportedInstruction {
        /// The unrecognized gate label.
        gate: String,
    },
}
