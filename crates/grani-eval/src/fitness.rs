//! Scalar fitness aggregation: one ranking number per (circuit, backend)
//! pair.

use serde::{Deserialize, Serialize};

/// Weights applied to the divergence/overhead terms in the fitness
/// denominator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessWeights {
    /// Weight on total variation distance.
    pub tvd: f64,
    /// Weight on Shannon entropy of the noisy distribution.
    pub entropy: f64,
    /// Weight on inserted-swap count.
    pub swaps: f64,
    /// Weight on Hellinger distance.
    pub hellinger: f64,
    /// Weight on L2 distance.
    pub l2: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            tvd: 1.0,
            entropy: 0.1,
            swaps: 0.1,
            hellinger: 1.0,
            l2: 1.0,
        }
    }
}

/// Fitness: `PST / (w·TVD + w·Entropy + w·Swaps + w·Hellinger + w·L2)`.
///
/// Higher is better; this is the sole ranking key. Returns exactly 0.0 when
/// the weighted denominator is 0 — the degenerate perfect-and-trivial
/// execution ranks last by policy instead of dividing by zero.
pub fn fitness(
    pst: f64,
    tvd: f64,
    entropy: f64,
    swaps: f64,
    hellinger: f64,
    l2: f64,
    weights: &FitnessWeights,
) -> f64 {
    let denominator = weights.tvd * tvd
        + weights.entropy * entropy
        + weights.swaps * swaps
        + weights.hellinger * hellinger
        + weights.l2 * l2;

    if denominator == 0.0 {
        0.0
    } else {
        pst / denominator
    }
}
