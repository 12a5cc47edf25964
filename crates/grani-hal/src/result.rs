//! Raw outcome counts returned by a simulator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome-bitstring → shot-count table.
///
/// Keys are measured bitstring labels; values are non-negative counts.
/// This is the raw shape handed over by the external simulator; the
/// evaluation engine normalizes it into a probability distribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    counts: BTreeMap<String, u64>,
}

impl Counts {
    /// Create an empty count table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add shots to an outcome, builder style.
    pub fn with_outcome(mut self, bitstring: impl Into<String>, shots: u64) -> Self {
        *self.counts.entry(bitstring.into()).or_insert(0) += shots;
        self
    }

    /// Add shots to an outcome in place.
    pub fn record(&mut self, bitstring: impl Into<String>, shots: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += shots;
    }

    /// Count for one outcome; 0 when the outcome was never observed.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Total shots across all outcomes.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct observed outcomes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no outcome was observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (bitstring, count) pairs, sorted by bitstring.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        let mut counts = Counts::new();
        for (k, v) in iter {
            counts.record(k, v);
        }
        counts
    }
}
