//! Outcome probability distributions.
//!
//! An [`OutcomeDistribution`] maps measured bitstrings to non-negative
//! weights. Distributions are immutable: normalization and support padding
//! produce new values, so a test fixture can feed several metric calls
//! without being rebuilt.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use grani_hal::Counts;

use crate::error::{EvalError, EvalResult};

/// Floating tolerance used when checking that weights sum to 1.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Bitstring → non-negative weight mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    weights: BTreeMap<String, f64>,
}

impl OutcomeDistribution {
    /// Build a normalized distribution from raw simulator counts.
    ///
    /// Fails with [`EvalError::EmptyDistribution`] when the total count is
    /// zero (empty table or all-zero counts) — dividing by zero here must
    /// be reported, not swallowed.
    pub fn from_counts(counts: &Counts) -> EvalResult<Self> {
        Self::from_weights(counts.iter().map(|(k, v)| (k.to_string(), v as f64))).normalized()
    }

    /// Build a raw (not necessarily normalized) distribution from weights.
    pub fn from_weights(weights: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            weights: weights.into_iter().collect(),
        }
    }

    /// Return a new distribution with weights scaled to sum to 1.
    ///
    /// Normalizing an already-normalized distribution is idempotent.
    pub fn normalized(&self) -> EvalResult<Self> {
        let total = self.total();
        if total == 0.0 {
            return Err(EvalError::EmptyDistribution);
        }
        Ok(Self {
            weights: self
                .weights
                .iter()
                .map(|(k, v)| (k.clone(), v / total))
                .collect(),
        })
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Weight of one outcome; 0 when absent.
    pub fn get(&self, bitstring: &str) -> f64 {
        self.weights.get(bitstring).copied().unwrap_or(0.0)
    }

    /// Whether an outcome is in the support.
    pub fn contains(&self, bitstring: &str) -> bool {
        self.weights.contains_key(bitstring)
    }

    /// Outcomes in the support, sorted.
    pub fn support(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    /// Iterate over (bitstring, weight) pairs, sorted by bitstring.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of outcomes in the support.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the support is empty.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Align two distributions over the union of their supports.
    ///
    /// Any outcome present in one distribution but absent in the other gets
    /// the regularization weight `epsilon` where it is missing. Returns the
    /// two weight sequences in shared sorted-key order — the shape every
    /// pairwise metric consumes. Inputs are left untouched.
    pub fn padded_union(&self, other: &Self, epsilon: f64) -> (Vec<f64>, Vec<f64>) {
        let keys = self
            .weights
            .keys()
            .chain(other.weights.keys())
            .collect::<std::collections::BTreeSet<_>>();

        let mut left = Vec::with_capacity(keys.len());
        let mut right = Vec::with_capacity(keys.len());
        for key in keys {
            left.push(self.weights.get(key).copied().unwrap_or(epsilon));
            right.push(other.weights.get(key).copied().unwrap_or(epsilon));
        }
        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> Counts {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_from_counts_normalizes() {
        let dist = OutcomeDistribution::from_counts(&counts(&[("00", 900), ("01", 100)])).unwrap();
        assert!((dist.total() - 1.0).abs() < NORMALIZATION_TOLERANCE);
        assert!((dist.get("00") - 0.9).abs() < 1e-12);
        assert!((dist.get("01") - 0.1).abs() < 1e-12);
        assert!((dist.get("11") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalization_idempotent() {
        let dist = OutcomeDistribution::from_counts(&counts(&[("0", 3), ("1", 1)])).unwrap();
        let twice = dist.normalized().unwrap();
        assert_eq!(twice, dist);
    }

    #[test]
    fn test_empty_counts_rejected() {
        let err = OutcomeDistribution::from_counts(&Counts::new()).unwrap_err();
        assert!(matches!(err, EvalError::EmptyDistribution));
    }

    #[test]
    fn test_zero_weight_rejected() {
        let dist = OutcomeDistribution::from_weights([("00".to_string(), 0.0)]);
        assert!(matches!(
            dist.normalized(),
            Err(EvalError::EmptyDistribution)
        ));
    }

    #[test]
    fn test_normalized_does_not_mutate_input() {
        let raw = OutcomeDistribution::from_weights([("0".to_string(), 2.0), ("1".to_string(), 2.0)]);
        let _ = raw.normalized().unwrap();
        assert!((raw.get("0") - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_padded_union_disjoint_supports() {
        let p = OutcomeDistribution::from_weights([("00".to_string(), 1.0)]);
        let q = OutcomeDistribution::from_weights([("11".to_string(), 1.0)]);
        let eps = 1e-11;
        let (pv, qv) = p.padded_union(&q, eps);
        // Union keys sorted: 00, 11.
        assert_eq!(pv, vec![1.0, eps]);
        assert_eq!(qv, vec![eps, 1.0]);
    }

    #[test]
    fn test_padded_union_shared_keys_unchanged() {
        let p = OutcomeDistribution::from_weights([("0".to_string(), 0.4), ("1".to_string(), 0.6)]);
        let q = OutcomeDistribution::from_weights([("0".to_string(), 0.5), ("1".to_string(), 0.5)]);
        let (pv, qv) = p.padded_union(&q, 1e-11);
        assert_eq!(pv, vec![0.4, 0.6]);
        assert_eq!(qv, vec![0.5, 0.5]);
    }
}
