//! Candidate shortlist selection.

use tracing::debug;

use crate::candidate::BackendCandidate;

/// Default shortlist length.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 10;

/// Filters and orders candidate platforms by qubit capacity.
pub struct BackendSelector;

impl BackendSelector {
    /// Shortlist the candidates able to hold a circuit of `required_qubits`.
    ///
    /// Keeps candidates with capacity ≥ the requirement, sorted ascending
    /// by capacity (the smallest sufficient platform first; capacity ties
    /// break by id for determinism), truncated to `limit`. An empty
    /// shortlist is a valid outcome, not an error.
    pub fn shortlist(
        required_qubits: u32,
        candidates: &[BackendCandidate],
        limit: usize,
    ) -> Vec<BackendCandidate> {
        let mut fitting: Vec<BackendCandidate> = candidates
            .iter()
            .filter(|c| c.fits(required_qubits))
            .cloned()
            .collect();

        fitting.sort_by(|a, b| {
            a.num_qubits
                .cmp(&b.num_qubits)
                .then_with(|| a.id.cmp(&b.id))
        });
        fitting.truncate(limit);

        debug!(
            required_qubits,
            shortlisted = fitting.len(),
            of = candidates.len(),
            "Candidate shortlist built"
        );

        fitting
    }
}
