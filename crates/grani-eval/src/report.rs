//! Evaluation results and the per-circuit ranking report.
//!
//! The field set of [`EvaluationResult`] is the contract with the external
//! reporting/CSV layer; renaming or dropping a field is a breaking change
//! for dataset assembly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Computed metrics for one (circuit, backend) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Circuit identifier.
    pub circuit: String,
    /// Backend identifier.
    pub backend: String,
    /// Probability of Successful Trial.
    pub pst: f64,
    /// IST; `None` when every observed outcome was correct (the
    /// denominator — dominant incorrect mass — is undefined).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ist: Option<f64>,
    /// Total variation distance between noisy and ideal distributions.
    pub tvd: f64,
    /// L2 distance.
    pub l2: f64,
    /// Hellinger distance.
    pub hellinger: f64,
    /// Shannon entropy of the noisy distribution.
    pub entropy: f64,
    /// Estimated Success Probability (analytic).
    pub esp: f64,
    /// Routing swaps inserted by the transpiler.
    pub swaps: u64,
    /// Scalar ranking score.
    pub fitness: f64,
}

/// Ranked evaluation results for one circuit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    /// Report schema version.
    pub schema_version: String,
    /// Circuit identifier.
    pub circuit: String,
    /// When the evaluation completed.
    pub timestamp: DateTime<Utc>,
    /// Wall time spent evaluating all backends, in seconds.
    pub elapsed_seconds: f64,
    /// Backends shortlisted but dropped (unroutable or failed).
    pub skipped_backends: usize,
    /// Results sorted descending by fitness (ties by backend id).
    pub results: Vec<EvaluationResult>,
}

impl EvalReport {
    /// The recommended backend: highest fitness, if any backend survived.
    pub fn best(&self) -> Option<&EvaluationResult> {
        self.results.first()
    }
}

/// Sort results into the canonical report order: descending by fitness,
/// ties broken by backend id for determinism.
pub(crate) fn sort_ranked(results: &mut [EvaluationResult]) {
    results.sort_by(|a, b| {
        b.fitness
            .partial_cmp(&a.fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.backend.cmp(&b.backend))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(backend: &str, fitness: f64) -> EvaluationResult {
        EvaluationResult {
            circuit: "qc".into(),
            backend: backend.into(),
            pst: 0.9,
            ist: None,
            tvd: 0.1,
            l2: 0.1,
            hellinger: 0.1,
            entropy: 0.3,
            esp: 0.8,
            swaps: 2,
            fitness,
        }
    }

    #[test]
    fn test_sort_descending_by_fitness() {
        let mut results = vec![result("a", 1.0), result("b", 3.0), result("c", 2.0)];
        sort_ranked(&mut results);
        let order: Vec<_> = results.iter().map(|r| r.backend.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_break_by_backend_id() {
        let mut results = vec![result("zeta", 2.0), result("alpha", 2.0)];
        sort_ranked(&mut results);
        assert_eq!(results[0].backend, "alpha");
    }

    #[test]
    fn test_ist_omitted_from_json_when_absent() {
        let json = serde_json::to_string(&result("a", 1.0)).unwrap();
        assert!(!json.contains("ist"));

        let mut with_ist = result("a", 1.0);
        with_ist.ist = Some(9.0);
        let json = serde_json::to_string(&with_ist).unwrap();
        assert!(json.contains("\"ist\":9.0"));
    }
}
