//! Estimated Success Probability: analytic, simulation-free fidelity
//! estimation from per-operation error rates.
//!
//! Walks a compiled gate sequence and accumulates independent per-operation
//! success probabilities into a running product. Measurements contribute the
//! average of the two correct-readout probabilities for their qubit; other
//! covered gates contribute the dominant branch of the channel recorded for
//! that gate/qubit tuple.
//!
//! Operations with no recorded channel are skipped — treated as noiseless.
//! This permissive default means ESP is optimistically biased for
//! incompletely specified noise profiles.

use grani_ir::{Circuit, NoiseProfile};

/// Estimated success probability of a compiled circuit under a noise
/// profile.
///
/// Returns a value in (0, 1]; 1.0 for an empty sequence or one with no
/// covered operations. Appending operations never increases the result,
/// since every factor is a probability.
pub fn estimated_success_probability(circuit: &Circuit, noise: &NoiseProfile) -> f64 {
    let mut esp = 1.0;

    for op in circuit.ops() {
        let success = if op.is_measurement() {
            op.qubits
                .first()
                .and_then(|&q| noise.readout(q))
                .map(|r| r.success_rate())
        } else {
            noise
                .channel(&op.gate, &op.qubits)
                .map(|channel| channel.success_rate())
        };

        if let Some(rate) = success {
            esp *= rate;
        }
    }

    esp
}

#[cfg(test)]
mod tests {
    use super::*;
    use grani_ir::GateOp;

    fn noise() -> NoiseProfile {
        NoiseProfile::new()
            .with_gate_channel("cx", vec![0, 1], vec![0.95, 0.04, 0.01])
            .with_gate_channel("sx", vec![0], vec![0.99, 0.01])
            .with_readout(0, 0.98, 0.96)
    }

    #[test]
    fn test_empty_circuit_is_one() {
        let qc = Circuit::new("empty", 2);
        assert!((estimated_success_probability(&qc, &noise()) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_uncovered_ops_are_noiseless() {
        let qc = Circuit::new("qc", 2)
            .with_op(GateOp::single("rz", 0))
            .with_op(GateOp::pair("cx", 1, 0));
        // rz is uncovered; cx is covered only on (0, 1), not (1, 0).
        assert!((estimated_success_probability(&qc, &noise()) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gate_and_readout_product() {
        let qc = Circuit::new("qc", 2)
            .with_op(GateOp::single("sx", 0))
            .with_op(GateOp::pair("cx", 0, 1))
            .with_op(GateOp::measure(0));
        let esp = estimated_success_probability(&qc, &noise());
        // 0.99 · 0.95 · (0.98 + 0.96)/2
        assert!((esp - 0.99 * 0.95 * 0.97).abs() < 1e-12);
    }

    #[test]
    fn test_monotone_nonincreasing_under_extension() {
        let mut qc = Circuit::new("qc", 2);
        let profile = noise();
        let mut last = estimated_success_probability(&qc, &profile);

        let extensions = [
            GateOp::single("sx", 0),
            GateOp::pair("cx", 0, 1),
            GateOp::single("rz", 1),
            GateOp::pair("cx", 0, 1),
            GateOp::measure(0),
        ];
        for op in extensions {
            qc.push(op);
            let esp = estimated_success_probability(&qc, &profile);
            assert!(esp <= last + f64::EPSILON);
            assert!(esp > 0.0);
            last = esp;
        }
    }

    #[test]
    fn test_measurement_without_readout_data_skipped() {
        let qc = Circuit::new("qc", 2).with_op(GateOp::measure(1));
        assert!((estimated_success_probability(&qc, &noise()) - 1.0).abs() < f64::EPSILON);
    }
}
