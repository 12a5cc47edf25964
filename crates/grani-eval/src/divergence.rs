//! Statistical divergence and success metrics over outcome distributions.
//!
//! All pairwise metrics operate on the union of the two supports: outcomes
//! missing on one side get the regularization weight `epsilon` there before
//! the sums are taken (see [`OutcomeDistribution::padded_union`]). This
//! avoids division/log singularities on disjoint supports while keeping the
//! missing-mass contribution negligible.
//!
//! Inputs are normalized internally, so callers can hand in raw count-shaped
//! distributions; the originals are never mutated.

use crate::distribution::OutcomeDistribution;
use crate::error::{EvalError, EvalResult};

/// Support-union regularization weight for pairwise metrics.
pub const DEFAULT_EPSILON: f64 = 1e-11;

/// Regularization added to every probability before the entropy log.
pub const DEFAULT_ENTROPY_EPSILON: f64 = 1e-6;

/// Total variation distance: `½·Σ|pᵢ − qᵢ|`. Symmetric, in [0, 1].
pub fn tvd(p: &OutcomeDistribution, q: &OutcomeDistribution, epsilon: f64) -> EvalResult<f64> {
    let (pv, qv) = padded_normalized(p, q, epsilon)?;
    let sum: f64 = pv.iter().zip(&qv).map(|(a, b)| (a - b).abs()).sum();
    Ok(sum / 2.0)
}

/// Euclidean (L2) distance: `√Σ(pᵢ − qᵢ)²`. Symmetric, ≥ 0.
pub fn l2(p: &OutcomeDistribution, q: &OutcomeDistribution, epsilon: f64) -> EvalResult<f64> {
    let (pv, qv) = padded_normalized(p, q, epsilon)?;
    let sum: f64 = pv.iter().zip(&qv).map(|(a, b)| (a - b).powi(2)).sum();
    Ok(sum.sqrt())
}

/// Hellinger distance: `√Σ(√pᵢ − √qᵢ)²`. Symmetric, in [0, √2].
pub fn hellinger(
    p: &OutcomeDistribution,
    q: &OutcomeDistribution,
    epsilon: f64,
) -> EvalResult<f64> {
    let (pv, qv) = padded_normalized(p, q, epsilon)?;
    let sum: f64 = pv
        .iter()
        .zip(&qv)
        .map(|(a, b)| (a.sqrt() - b.sqrt()).powi(2))
        .sum();
    Ok(sum.sqrt())
}

/// Shannon entropy: `−Σ pᵢ·ln(pᵢ)`, with `epsilon` added to every
/// probability before the log so zero-probability outcomes cannot produce
/// −∞. Zero (within epsilon) for a one-point distribution.
pub fn entropy(p: &OutcomeDistribution, epsilon: f64) -> EvalResult<f64> {
    let normalized = p.normalized()?;
    Ok(normalized
        .iter()
        .map(|(_, w)| {
            let w = w + epsilon;
            -w * w.ln()
        })
        .sum())
}

/// Probability of Successful Trial: the noisy-distribution mass landing on
/// outcomes in the ideal distribution's support. In [0, 1]; 1 iff all noisy
/// mass is on correct outcomes.
pub fn pst(noisy: &OutcomeDistribution, ideal: &OutcomeDistribution) -> EvalResult<f64> {
    let normalized = noisy.normalized()?;
    Ok(normalized
        .iter()
        .filter(|(outcome, _)| ideal.contains(outcome))
        .map(|(_, w)| w)
        .sum())
}

/// IST: PST divided by the largest probability mass among outcomes outside
/// the correct-answer set (the dominant incorrect outcome).
///
/// Fails with [`EvalError::NoIncorrectOutcomes`] when every observed outcome
/// is correct — there is no incorrect mass to divide by. Callers decide the
/// policy for that case; the orchestrator records the metric as absent.
pub fn ist(noisy: &OutcomeDistribution, ideal: &OutcomeDistribution) -> EvalResult<f64> {
    let normalized = noisy.normalized()?;
    let pst = pst(&normalized, ideal)?;

    let dominant_incorrect = normalized
        .iter()
        .filter(|(outcome, _)| !ideal.contains(outcome))
        .map(|(_, w)| w)
        .reduce(f64::max)
        .ok_or(EvalError::NoIncorrectOutcomes)?;

    Ok(pst / dominant_incorrect)
}

/// Normalize both inputs, then align them over the padded support union.
fn padded_normalized(
    p: &OutcomeDistribution,
    q: &OutcomeDistribution,
    epsilon: f64,
) -> EvalResult<(Vec<f64>, Vec<f64>)> {
    let p = p.normalized()?;
    let q = q.normalized()?;
    Ok(p.padded_union(&q, epsilon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dist(pairs: &[(&str, f64)]) -> OutcomeDistribution {
        OutcomeDistribution::from_weights(pairs.iter().map(|&(k, v)| (k.to_string(), v)))
    }

    // End-to-end scenario: ideal {"00": 1.0}, noisy {"00": 0.9, "01": 0.1}.
    fn scenario() -> (OutcomeDistribution, OutcomeDistribution) {
        (dist(&[("00", 0.9), ("01", 0.1)]), dist(&[("00", 1.0)]))
    }

    #[test]
    fn test_tvd_scenario() {
        let (noisy, ideal) = scenario();
        let v = tvd(&noisy, &ideal, DEFAULT_EPSILON).unwrap();
        assert!((v - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_l2_scenario() {
        let (noisy, ideal) = scenario();
        let v = l2(&noisy, &ideal, DEFAULT_EPSILON).unwrap();
        assert!((v - (0.02f64).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_hellinger_scenario() {
        let (noisy, ideal) = scenario();
        let v = hellinger(&noisy, &ideal, DEFAULT_EPSILON).unwrap();
        // (√0.9−1)² + (√0.1−√ε)² ≈ 0.002633 + 0.099998; √ ≈ 0.3203.
        assert!((v - 0.3203).abs() < 1e-3);
    }

    #[test]
    fn test_entropy_scenario() {
        let (noisy, _) = scenario();
        let v = entropy(&noisy, DEFAULT_ENTROPY_EPSILON).unwrap();
        assert!((v - 0.325).abs() < 1e-3);
    }

    #[test]
    fn test_pst_scenario() {
        let (noisy, ideal) = scenario();
        let v = pst(&noisy, &ideal).unwrap();
        assert!((v - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_ist_scenario() {
        let (noisy, ideal) = scenario();
        // PST 0.9 over a dominant incorrect mass of 0.1.
        let v = ist(&noisy, &ideal).unwrap();
        assert!((v - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_ist_undefined_when_all_correct() {
        let noisy = dist(&[("0", 0.5), ("1", 0.5)]);
        let ideal = dist(&[("0", 0.5), ("1", 0.5)]);
        assert!(matches!(
            ist(&noisy, &ideal),
            Err(EvalError::NoIncorrectOutcomes)
        ));
    }

    #[test]
    fn test_identical_distributions() {
        let p = dist(&[("0", 0.5), ("1", 0.5)]);
        assert!(tvd(&p, &p, DEFAULT_EPSILON).unwrap().abs() < 1e-12);
        assert!(l2(&p, &p, DEFAULT_EPSILON).unwrap().abs() < 1e-12);
        assert!(hellinger(&p, &p, DEFAULT_EPSILON).unwrap().abs() < 1e-12);
        assert!((pst(&p, &p).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_supports() {
        let p = dist(&[("00", 1.0)]);
        let q = dist(&[("11", 1.0)]);
        let v = tvd(&p, &q, DEFAULT_EPSILON).unwrap();
        assert!((v - 1.0).abs() < 1e-9);
        assert!((pst(&p, &q).unwrap() - 0.0).abs() < f64::EPSILON);
        let h = hellinger(&p, &q, DEFAULT_EPSILON).unwrap();
        assert!(h <= 2f64.sqrt() + 1e-9);
        assert!((h - 2f64.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_entropy_uniform_exceeds_peaked() {
        let uniform = dist(&[("00", 0.25), ("01", 0.25), ("10", 0.25), ("11", 0.25)]);
        let peaked = dist(&[("00", 0.97), ("01", 0.01), ("10", 0.01), ("11", 0.01)]);
        let hu = entropy(&uniform, DEFAULT_ENTROPY_EPSILON).unwrap();
        let hp = entropy(&peaked, DEFAULT_ENTROPY_EPSILON).unwrap();
        assert!(hu > hp);
        assert!((hu - 4.0f64.ln()).abs() < 1e-4);
    }

    #[test]
    fn test_entropy_point_distribution_near_zero() {
        let point = dist(&[("0", 1.0)]);
        let v = entropy(&point, DEFAULT_ENTROPY_EPSILON).unwrap();
        // Regularization leaves a residual of order ε′.
        assert!(v.abs() < 1e-5);
    }

    #[test]
    fn test_metrics_accept_unnormalized_counts() {
        let noisy = dist(&[("00", 900.0), ("01", 100.0)]);
        let ideal = dist(&[("00", 1024.0)]);
        assert!((tvd(&noisy, &ideal, DEFAULT_EPSILON).unwrap() - 0.1).abs() < 1e-9);
        assert!((pst(&noisy, &ideal).unwrap() - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_empty_distribution_propagates() {
        let empty = OutcomeDistribution::default();
        let p = dist(&[("0", 1.0)]);
        assert!(matches!(
            tvd(&empty, &p, DEFAULT_EPSILON),
            Err(EvalError::EmptyDistribution)
        ));
        assert!(matches!(
            entropy(&empty, DEFAULT_ENTROPY_EPSILON),
            Err(EvalError::EmptyDistribution)
        ));
    }

    prop_compose! {
        /// Random distribution over up to 6 of 8 three-bit outcomes.
        fn arb_dist()(weights in prop::collection::btree_map(
            prop::sample::select(vec!["000", "001", "010", "011", "100", "101", "110", "111"]),
            1u32..1000,
            1..6,
        )) -> OutcomeDistribution {
            OutcomeDistribution::from_weights(
                weights.into_iter().map(|(k, v)| (k.to_string(), f64::from(v))),
            )
        }
    }

    proptest! {
        #[test]
        fn prop_tvd_symmetric_and_bounded(p in arb_dist(), q in arb_dist()) {
            let pq = tvd(&p, &q, DEFAULT_EPSILON).unwrap();
            let qp = tvd(&q, &p, DEFAULT_EPSILON).unwrap();
            prop_assert!((pq - qp).abs() < 1e-12);
            prop_assert!((-1e-12..=1.0 + 1e-9).contains(&pq));
        }

        #[test]
        fn prop_hellinger_symmetric_and_bounded(p in arb_dist(), q in arb_dist()) {
            let pq = hellinger(&p, &q, DEFAULT_EPSILON).unwrap();
            let qp = hellinger(&q, &p, DEFAULT_EPSILON).unwrap();
            prop_assert!((pq - qp).abs() < 1e-12);
            prop_assert!(pq >= 0.0);
            prop_assert!(pq <= 2f64.sqrt() + 1e-9);
        }

        #[test]
        fn prop_l2_symmetric_nonnegative(p in arb_dist(), q in arb_dist()) {
            let pq = l2(&p, &q, DEFAULT_EPSILON).unwrap();
            let qp = l2(&q, &p, DEFAULT_EPSILON).unwrap();
            prop_assert!((pq - qp).abs() < 1e-12);
            prop_assert!(pq >= 0.0);
        }

        #[test]
        fn prop_entropy_nonnegative_within_regularization(p in arb_dist()) {
            let v = entropy(&p, DEFAULT_ENTROPY_EPSILON).unwrap();
            prop_assert!(v > -1e-4);
        }

        #[test]
        fn prop_pst_bounded(p in arb_dist(), q in arb_dist()) {
            let v = pst(&p, &q).unwrap();
            prop_assert!((-1e-12..=1.0 + 1e-9).contains(&v));
        }

        #[test]
        fn prop_self_distance_zero(p in arb_dist()) {
            prop_assert!(tvd(&p, &p, DEFAULT_EPSILON).unwrap().abs() < 1e-12);
            prop_assert!(hellinger(&p, &p, DEFAULT_EPSILON).unwrap().abs() < 1e-12);
        }
    }
}
