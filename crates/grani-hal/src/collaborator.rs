//! Async traits for the external simulator and transpiler collaborators.
//!
//! These are the only suspension points in an evaluation: both calls are
//! potentially long-running (simulation cost grows with circuit size), so
//! the orchestrator invokes them through a bounded worker pool. Everything
//! downstream of them is pure computation over immutable values.

use async_trait::async_trait;

use grani_ir::Circuit;

use crate::candidate::BackendCandidate;
use crate::error::HalResult;
use crate::result::Counts;

/// Outcome of transpiling a circuit for a candidate platform.
///
/// `Unroutable` is an explicit, non-fatal variant — callers branch on the
/// tag instead of catching a compiler exception. An unroutable backend is
/// skipped; other backends keep evaluating.
#[derive(Debug, Clone)]
pub enum TranspileOutcome {
    /// Circuit mapped to the platform's basis gates and topology.
    Compiled(Circuit),
    /// The compiler could not map the circuit onto this platform.
    Unroutable {
        /// Compiler-reported reason.
        reason: String,
    },
}

impl TranspileOutcome {
    /// Whether transpilation produced a compiled circuit.
    pub fn is_compiled(&self) -> bool {
        matches!(self, TranspileOutcome::Compiled(_))
    }
}

/// External circuit simulator.
///
/// Implementations are expected to be thread-safe; the orchestrator shares
/// one instance across concurrently evaluated backends.
#[async_trait]
pub trait Simulator: Send + Sync {
    /// Execute the circuit noise-free and return raw outcome counts.
    async fn ideal_counts(&self, circuit: &Circuit) -> HalResult<Counts>;

    /// Execute the circuit under the candidate's noise model and return
    /// raw outcome counts.
    async fn noisy_counts(
        &self,
        circuit: &Circuit,
        candidate: &BackendCandidate,
    ) -> HalResult<Counts>;
}

/// External compiler mapping circuits onto candidate platforms.
#[async_trait]
pub trait Transpiler: Send + Sync {
    /// Map `circuit` onto the candidate's basis gate set and topology,
    /// inserting routing swaps as needed.
    ///
    /// Routability failures are reported via
    /// [`TranspileOutcome::Unroutable`], not as an error.
    async fn transpile(
        &self,
        circuit: &Circuit,
        candidate: &BackendCandidate,
    ) -> HalResult<TranspileOutcome>;
}
