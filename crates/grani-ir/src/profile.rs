//! Compiled-circuit profiling: basis gate vocabularies and gate-count
//! profiles.
//!
//! [`CircuitProfile::from_circuit`] is the routing-overhead probe: the
//! caller extends the platform basis with `swap` before profiling a routed
//! circuit, and reads the inserted-swap count back out of the profile.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};

/// Gate label used for measurement operations.
pub const MEASURE: &str = "measure";

/// Explicit gate vocabulary of a target platform.
///
/// This is always threaded into profiling calls as a value; there is no
/// process-wide gate registry. Labels follow OpenQASM 3 naming (lowercase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasisGates {
    gates: Vec<String>,
}

impl BasisGates {
    /// Create a vocabulary from gate labels.
    pub fn new(gates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            gates: gates.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a gate belongs to the vocabulary.
    pub fn contains(&self, gate: &str) -> bool {
        self.gates.iter().any(|g| g == gate)
    }

    /// Return a copy of this vocabulary extended with `gate`, if absent.
    ///
    /// Used to admit `swap` before profiling a routed circuit.
    pub fn with_gate(&self, gate: &str) -> Self {
        if self.contains(gate) {
            self.clone()
        } else {
            let mut gates = self.gates.clone();
            gates.push(gate.to_string());
            Self { gates }
        }
    }

    /// Iterate over the gate labels.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.gates.iter().map(String::as_str)
    }

    /// Number of gates in the vocabulary.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

/// Per-gate-type instruction counts for a compiled circuit.
///
/// Counts are zero-filled over the supplied vocabulary plus `measure`, so
/// every column the downstream dataset layer expects is present even when a
/// gate never occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitProfile {
    gate_counts: BTreeMap<String, u64>,
    depth: usize,
    num_qubits: u32,
}

impl CircuitProfile {
    /// Profile a compiled circuit against an explicit gate vocabulary.
    ///
    /// Fails with [`IrError::UnsupportedInstruction`] when the circuit
    /// contains a gate outside `basis` ∪ {`measure`}. Measurement is always
    /// admitted.
    pub fn from_circuit(circuit: &Circuit, basis: &BasisGates) -> IrResult<Self> {
        let mut gate_counts: BTreeMap<String, u64> =
            basis.iter().map(|g| (g.to_string(), 0)).collect();
        gate_counts.entry(MEASURE.to_string()).or_insert(0);

        for op in circuit.ops() {
            match gate_counts.get_mut(op.gate.as_str()) {
                Some(count) => *count += 1,
                None => {
                    return Err(IrError::UnsupportedInstruction {
                        gate: op.gate.clone(),
                    });
                }
            }
        }

        Ok(Self {
            gate_counts,
            depth: circuit.depth(),
            num_qubits: circuit.num_qubits(),
        })
    }

    /// Count for one gate type; 0 for vocabulary gates that never occur.
    pub fn count(&self, gate: &str) -> u64 {
        self.gate_counts.get(gate).copied().unwrap_or(0)
    }

    /// Number of inserted routing swaps.
    pub fn swap_count(&self) -> u64 {
        self.count("swap")
    }

    /// Circuit depth after compilation.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Qubit count of the compiled circuit.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// All gate-count columns, sorted by gate label.
    pub fn gate_counts(&self) -> &BTreeMap<String, u64> {
        &self.gate_counts
    }
}
