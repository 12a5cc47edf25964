//! Grani Evaluator: noisy-backend fidelity estimation and ranking.
//!
//! This crate is the metrics-and-ranking engine: it consumes outcome
//! distributions and compiled-circuit profiles produced by external
//! collaborators and turns them into a ranked backend recommendation.
//!
//! # Overview
//!
//! For one circuit and a set of candidate platforms, the [`Evaluator`]:
//!
//! - shortlists candidates by qubit capacity (smallest sufficient first),
//! - transpiles and simulates per backend through the HAL collaborator
//!   traits, under a bounded worker pool,
//! - computes divergence metrics (TVD, L2, Hellinger, entropy), success
//!   metrics (PST, IST), the analytic ESP estimate, and the scalar fitness,
//! - returns an [`EvalReport`] sorted descending by fitness.
//!
//! # Architecture
//!
//! ```text
//! [Circuit + candidates] -> BackendSelector shortlist
//!                              |
//!                              v  (bounded worker pool)
//!                  Transpiler -> CircuitProfile (swap count)
//!                  Simulator  -> ideal/noisy Counts
//!                              |
//!                              v
//!            OutcomeDistribution -> divergence + ESP -> fitness
//!                              |
//!                              v
//!                  EvalReport (ranked EvaluationResults)
//! ```
//!
//! Per-backend evaluations are mutually independent: unroutable circuits
//! and failed simulations drop only that backend. Unrecognized circuit
//! content aborts the whole batch — wrong gate counts would poison every
//! downstream label.
//!
//! # Example
//!
//! ```ignore
//! use grani_eval::{EvalConfig, Evaluator};
//!
//! let evaluator = Evaluator::new(EvalConfig::default(), transpiler, simulator);
//! let report = evaluator.evaluate(&circuit, &candidates).await?;
//! if let Some(best) = report.best() {
//!     println!("{} (fitness {:.3})", best.backend, best.fitness);
//! }
//! ```

pub mod distribution;
pub mod divergence;
pub mod error;
pub mod esp;
pub mod fitness;
pub mod report;

pub use distribution::OutcomeDistribution;
pub use error::{EvalError, EvalResult};
pub use fitness::FitnessWeights;
pub use report::{EvalReport, EvaluationResult};

use std::sync::Arc;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use grani_hal::{
    BackendCandidate, BackendSelector, Simulator, Transpiler, TranspileOutcome,
    DEFAULT_CANDIDATE_LIMIT,
};
use grani_ir::{Circuit, CircuitProfile};

/// Evaluation configuration: regularization constants, fitness weights,
/// shortlist size, and worker-pool width.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Fitness denominator weights.
    pub weights: FitnessWeights,
    /// Support-union regularization weight for pairwise metrics.
    pub epsilon: f64,
    /// Regularization added before the entropy log.
    pub entropy_epsilon: f64,
    /// Maximum number of candidates shortlisted per circuit.
    pub candidate_limit: usize,
    /// Maximum concurrently evaluated backends.
    pub max_concurrency: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            weights: FitnessWeights::default(),
            epsilon: divergence::DEFAULT_EPSILON,
            entropy_epsilon: divergence::DEFAULT_ENTROPY_EPSILON,
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            max_concurrency: 4,
        }
    }
}

/// The evaluation orchestrator.
///
/// Owns the external collaborator handles and the configuration; each call
/// to [`Evaluator::evaluate`] is independent and side-effect free apart
/// from the collaborator invocations.
pub struct Evaluator {
    config: EvalConfig,
    transpiler: Arc<dyn Transpiler>,
    simulator: Arc<dyn Simulator>,
}

impl Evaluator {
    /// Create an evaluator with the given configuration and collaborators.
    pub fn new(
        config: EvalConfig,
        transpiler: Arc<dyn Transpiler>,
        simulator: Arc<dyn Simulator>,
    ) -> Self {
        Self {
            config,
            transpiler,
            simulator,
        }
    }

    /// Evaluate one circuit against a set of candidate platforms and return
    /// the ranked report.
    ///
    /// Backends that turn out unroutable, or whose simulation fails, are
    /// dropped from the result set and counted in
    /// [`EvalReport::skipped_backends`]; they never abort the remaining
    /// backends. Unrecognized gates in a compiled circuit are fatal.
    pub async fn evaluate(
        &self,
        circuit: &Circuit,
        candidates: &[BackendCandidate],
    ) -> EvalResult<EvalReport> {
        let started = Instant::now();
        let shortlist = BackendSelector::shortlist(
            circuit.num_qubits(),
            candidates,
            self.config.candidate_limit,
        );

        info!(
            circuit = circuit.name(),
            shortlisted = shortlist.len(),
            "Starting backend evaluation"
        );

        let evaluations: Vec<(String, EvalResult<Option<EvaluationResult>>)> =
            stream::iter(shortlist.iter().map(|candidate| async move {
                (
                    candidate.id.clone(),
                    self.evaluate_backend(circuit, candidate).await,
                )
            }))
            .buffer_unordered(self.config.max_concurrency.max(1))
            .collect()
            .await;

        let mut results = Vec::new();
        let mut skipped = 0usize;
        for (backend, outcome) in evaluations {
            match outcome {
                Ok(Some(result)) => results.push(result),
                Ok(None) => skipped += 1,
                Err(err @ EvalError::Profile(_)) => return Err(err),
                Err(err) => {
                    warn!(%backend, %err, "Backend evaluation failed; skipping");
                    skipped += 1;
                }
            }
        }

        report::sort_ranked(&mut results);

        info!(
            circuit = circuit.name(),
            ranked = results.len(),
            skipped,
            "Evaluation complete"
        );

        Ok(EvalReport {
            schema_version: "0.1.0".into(),
            circuit: circuit.name().to_string(),
            timestamp: chrono::Utc::now(),
            elapsed_seconds: started.elapsed().as_secs_f64(),
            skipped_backends: skipped,
            results,
        })
    }

    /// Evaluate one backend. `Ok(None)` means the backend was skipped
    /// (unroutable); errors are classified by the caller.
    async fn evaluate_backend(
        &self,
        circuit: &Circuit,
        candidate: &BackendCandidate,
    ) -> EvalResult<Option<EvaluationResult>> {
        let compiled = match self.transpiler.transpile(circuit, candidate).await? {
            TranspileOutcome::Compiled(compiled) => compiled,
            TranspileOutcome::Unroutable { reason } => {
                info!(backend = %candidate.id, %reason, "Circuit unroutable; backend skipped");
                return Ok(None);
            }
        };

        // Routed circuits may carry swaps the platform basis does not list.
        let routed_basis = candidate.basis_gates.with_gate("swap");
        let profile = CircuitProfile::from_circuit(&compiled, &routed_basis)?;
        let swaps = profile.swap_count();

        let ideal_counts = self.simulator.ideal_counts(circuit).await?;
        let noisy_counts = self.simulator.noisy_counts(circuit, candidate).await?;
        let ideal = OutcomeDistribution::from_counts(&ideal_counts)?;
        let noisy = OutcomeDistribution::from_counts(&noisy_counts)?;

        let eps = self.config.epsilon;
        let tvd = divergence::tvd(&noisy, &ideal, eps)?;
        let l2 = divergence::l2(&noisy, &ideal, eps)?;
        let hellinger = divergence::hellinger(&noisy, &ideal, eps)?;
        let entropy = divergence::entropy(&noisy, self.config.entropy_epsilon)?;
        let pst = divergence::pst(&noisy, &ideal)?;
        let ist = match divergence::ist(&noisy, &ideal) {
            Ok(value) => Some(value),
            Err(EvalError::NoIncorrectOutcomes) => {
                debug!(backend = %candidate.id, "Every outcome correct; IST recorded as absent");
                None
            }
            Err(err) => return Err(err),
        };

        let esp = esp::estimated_success_probability(&compiled, &candidate.noise);
        let fitness = fitness::fitness(
            pst,
            tvd,
            entropy,
            swaps as f64,
            hellinger,
            l2,
            &self.config.weights,
        );

        Ok(Some(EvaluationResult {
            circuit: circuit.name().to_string(),
            backend: candidate.id.clone(),
            pst,
            ist,
            tvd,
            l2,
            hellinger,
            entropy,
            esp,
            swaps,
            fitness,
        }))
    }
}
