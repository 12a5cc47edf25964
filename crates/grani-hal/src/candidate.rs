//! Backend candidate descriptors.

use serde::{Deserialize, Serialize};

use grani_ir::{BasisGates, NoiseProfile};

use crate::topology::Topology;

/// Immutable descriptor of one candidate platform.
///
/// One instance exists per platform under consideration. Candidate lists
/// are declared statically by an external loader (hardware/noise-model
/// provider); the core never discovers backends by introspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendCandidate {
    /// Platform identifier (report key).
    pub id: String,
    /// Qubit capacity.
    pub num_qubits: u32,
    /// Native gate vocabulary.
    pub basis_gates: BasisGates,
    /// Qubit coupling graph.
    pub topology: Topology,
    /// Per-gate/per-qubit noise characterization.
    pub noise: NoiseProfile,
}

impl BackendCandidate {
    /// Create a candidate with a noiseless profile.
    pub fn new(
        id: impl Into<String>,
        num_qubits: u32,
        basis_gates: BasisGates,
        topology: Topology,
    ) -> Self {
        Self {
            id: id.into(),
            num_qubits,
            basis_gates,
            topology,
            noise: NoiseProfile::new(),
        }
    }

    /// Attach a noise profile, builder style.
    pub fn with_noise(mut self, noise: NoiseProfile) -> Self {
        self.noise = noise;
        self
    }

    /// Whether this platform can hold a circuit of `required_qubits`.
    pub fn fits(&self, required_qubits: u32) -> bool {
        self.num_qubits >= required_qubits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_fits() {
        let candidate = BackendCandidate::new(
            "fake_lima",
            5,
            BasisGates::new(["rz", "sx", "x", "cx"]),
            Topology::linear(5),
        );
        assert!(candidate.fits(5));
        assert!(candidate.fits(3));
        assert!(!candidate.fits(6));
        assert!(candidate.noise.is_empty());
    }

    #[test]
    fn test_candidate_serialization() {
        let candidate = BackendCandidate::new(
            "fake_quito",
            5,
            BasisGates::new(["cx"]),
            Topology::star(5),
        );
        let json = serde_json::to_string(&candidate).unwrap();
        let decoded: BackendCandidate = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, candidate);
    }
}
