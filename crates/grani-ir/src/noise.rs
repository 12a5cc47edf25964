//! Noise profiles reported by a backend's noise-model provider.
//!
//! A [`NoiseProfile`] records, per gate type, the outcome-branch probability
//! table of the error channel acting on each qubit or ordered qubit pair,
//! plus per-qubit readout success probabilities. The evaluation engine
//! treats the maximum branch probability of a channel as its success rate.
//!
//! Gates or qubits with no recorded channel are treated as noiseless
//! (success probability 1). This is a permissive default: ESP estimates are
//! optimistically biased for incompletely specified profiles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Readout error characterization for one qubit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadoutError {
    /// Probability of measuring 0 when the state is 0.
    pub p0_given_0: f64,
    /// Probability of measuring 1 when the state is 1.
    pub p1_given_1: f64,
}

impl ReadoutError {
    /// Readout success rate: average of the two correct-readout probabilities.
    pub fn success_rate(&self) -> f64 {
        (self.p0_given_0 + self.p1_given_1) / 2.0
    }
}

/// Recorded error channel for one gate type on one qubit or qubit pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateChannel {
    /// Qubit operands the channel applies to, ordered. One entry for
    /// single-qubit gates, two for two-qubit gates.
    pub qubits: Vec<u32>,
    /// Outcome-branch probabilities of the channel. The largest entry is
    /// taken as the success branch.
    pub probabilities: Vec<f64>,
}

impl GateChannel {
    /// Success probability: the dominant branch of the channel.
    ///
    /// Returns 1.0 for an empty table (no recorded branches).
    pub fn success_rate(&self) -> f64 {
        self.probabilities
            .iter()
            .copied()
            .reduce(f64::max)
            .unwrap_or(1.0)
    }
}

/// Per-gate/per-qubit noise characterization for one backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoiseProfile {
    /// Error channels keyed by gate-type label.
    #[serde(default)]
    gate_channels: BTreeMap<String, Vec<GateChannel>>,
    /// Readout errors keyed by qubit index.
    #[serde(default)]
    readout: BTreeMap<u32, ReadoutError>,
}

impl NoiseProfile {
    /// Create an empty (noiseless) profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error channel for a gate type, builder style.
    pub fn with_gate_channel(
        mut self,
        gate: impl Into<String>,
        qubits: Vec<u32>,
        probabilities: Vec<f64>,
    ) -> Self {
        self.gate_channels
            .entry(gate.into())
            .or_default()
            .push(GateChannel {
                qubits,
                probabilities,
            });
        self
    }

    /// Record a readout error for a qubit, builder style.
    pub fn with_readout(mut self, qubit: u32, p0_given_0: f64, p1_given_1: f64) -> Self {
        self.readout.insert(
            qubit,
            ReadoutError {
                p0_given_0,
                p1_given_1,
            },
        );
        self
    }

    /// Whether any channel is recorded for a gate type.
    pub fn covers(&self, gate: &str) -> bool {
        self.gate_channels.contains_key(gate)
    }

    /// Channel recorded for a gate type on a specific qubit tuple, if any.
    pub fn channel(&self, gate: &str, qubits: &[u32]) -> Option<&GateChannel> {
        self.gate_channels
            .get(gate)?
            .iter()
            .find(|c| c.qubits == qubits)
    }

    /// Readout error for a qubit, if recorded.
    pub fn readout(&self, qubit: u32) -> Option<&ReadoutError> {
        self.readout.get(&qubit)
    }

    /// Device-average readout success rate; 1.0 when no readout data exists.
    pub fn average_readout_success(&self) -> f64 {
        if self.readout.is_empty() {
            return 1.0;
        }
        let sum: f64 = self.readout.values().map(ReadoutError::success_rate).sum();
        sum / self.readout.len() as f64
    }

    /// Average success rate of one gate type over its recorded channels.
    ///
    /// Returns 1.0 for gates with no recorded channel.
    pub fn average_gate_success(&self, gate: &str) -> f64 {
        match self.gate_channels.get(gate) {
            Some(channels) if !channels.is_empty() => {
                let sum: f64 = channels.iter().map(GateChannel::success_rate).sum();
                sum / channels.len() as f64
            }
            _ => 1.0,
        }
    }

    /// Whether this profile has no noise data at all.
    pub fn is_empty(&self) -> bool {
        self.gate_channels.is_empty() && self.readout.is_empty()
    }
}
