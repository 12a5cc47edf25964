//! Circuit descriptor: an ordered gate sequence over indexed qubits.
//!
//! A [`Circuit`] is the minimal interchange shape the evaluation engine
//! needs: a name, a qubit count, and an ordered list of [`GateOp`]s. It is
//! produced externally (interchange-format parser or transpiler) and
//! consumed read-only here.

use serde::{Deserialize, Serialize};

/// A single gate operation: a lowercase gate-type label and the qubit
/// index/indices it acts on, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateOp {
    /// Gate-type label (OpenQASM 3 naming convention, lowercase).
    pub gate: String,
    /// Qubit operands, ordered. One entry for single-qubit gates and
    /// measurements, two for two-qubit gates.
    pub qubits: Vec<u32>,
}

impl GateOp {
    /// Create a gate operation.
    pub fn new(gate: impl Into<String>, qubits: Vec<u32>) -> Self {
        Self {
            gate: gate.into(),
            qubits,
        }
    }

    /// Create a single-qubit operation.
    pub fn single(gate: impl Into<String>, qubit: u32) -> Self {
        Self::new(gate, vec![qubit])
    }

    /// Create a two-qubit operation.
    pub fn pair(gate: impl Into<String>, q0: u32, q1: u32) -> Self {
        Self::new(gate, vec![q0, q1])
    }

    /// Create a measurement on one qubit.
    pub fn measure(qubit: u32) -> Self {
        Self::new(crate::profile::MEASURE, vec![qubit])
    }

    /// Whether this operation is a measurement.
    pub fn is_measurement(&self) -> bool {
        self.gate == crate::profile::MEASURE
    }
}

/// An ordered sequence of gate operations with a qubit count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    name: String,
    num_qubits: u32,
    ops: Vec<GateOp>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            ops: Vec::new(),
        }
    }

    /// Append an operation, builder style.
    pub fn with_op(mut self, op: GateOp) -> Self {
        self.ops.push(op);
        self
    }

    /// Append an operation in place.
    pub fn push(&mut self, op: GateOp) {
        self.ops.push(op);
    }

    /// Circuit name (dataset/report key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of qubits the circuit addresses.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Ordered gate operations.
    pub fn ops(&self) -> &[GateOp] {
        &self.ops
    }

    /// Total operation count.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the circuit has no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Circuit depth: the longest per-qubit chain of operations, counting
    /// each multi-qubit gate as one layer on every operand.
    pub fn depth(&self) -> usize {
        let mut frontier = vec![0usize; self.num_qubits as usize];
        for op in &self.ops {
            let layer = op
                .qubits
                .iter()
                .filter_map(|&q| frontier.get(q as usize).copied())
                .max()
                .unwrap_or(0)
                + 1;
            for &q in &op.qubits {
                if let Some(slot) = frontier.get_mut(q as usize) {
                    *slot = layer;
                }
            }
        }
        frontier.into_iter().max().unwrap_or(0)
    }
}
