//! Seeded RNG construction and weighted sampling.
//!
//! Every stochastic decision in the engine goes through an explicit
//! `Rng` handle created here, so a fixed seed reproduces a run
//! bit-for-bit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded RNG for reproducible runs.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Samples an index proportionally to `weights`.
///
/// Returns `None` only when `weights` is empty. When every weight is
/// zero (or the total is not a positive finite number), falls back to a
/// uniform choice over all indices rather than failing — pheromone
/// values can in principle decay to zero under aggressive evaporation,
/// and a degenerate sampling step must not abort a run.
///
/// Negative or non-finite weights are treated as zero.
pub fn weighted_choice<R: Rng>(weights: &[f64], rng: &mut R) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let total: f64 = weights
        .iter()
        .map(|&w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
        .sum();

    if total <= 0.0 || !total.is_finite() {
        // Uniform fallback over the full candidate set.
        return Some(rng.random_range(0..weights.len()));
    }

    let mut target = rng.random_range(0.0..total);
    let mut last_positive = 0;
    for (i, &w) in weights.iter().enumerate() {
        if !w.is_finite() || w <= 0.0 {
            continue;
        }
        if target < w {
            return Some(i);
        }
        target -= w;
        last_positive = i;
    }

    // Floating-point rounding can leave a sliver past the last bucket.
    Some(last_positive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_weights() {
        let mut rng = create_rng(42);
        assert_eq!(weighted_choice(&[], &mut rng), None);
    }

    #[test]
    fn test_single_weight() {
        let mut rng = create_rng(42);
        assert_eq!(weighted_choice(&[3.5], &mut rng), Some(0));
    }

    #[test]
    fn test_zero_weights_fall_back_to_uniform() {
        let mut rng = create_rng(42);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let i = weighted_choice(&[0.0, 0.0, 0.0], &mut rng).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s), "uniform fallback should reach every index");
    }

    #[test]
    fn test_zero_weight_never_chosen_when_total_positive() {
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let i = weighted_choice(&[0.0, 1.0, 0.0], &mut rng).unwrap();
            assert_eq!(i, 1);
        }
    }

    #[test]
    fn test_proportional_bias() {
        let mut rng = create_rng(42);
        let mut counts = [0usize; 2];
        for _ in 0..10_000 {
            counts[weighted_choice(&[1.0, 9.0], &mut rng).unwrap()] += 1;
        }
        let ratio = counts[1] as f64 / 10_000.0;
        assert!(
            (0.85..0.95).contains(&ratio),
            "expected ~0.9 share for the heavy weight, got {ratio}"
        );
    }

    #[test]
    fn test_non_finite_weights_treated_as_zero() {
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let i = weighted_choice(&[f64::NAN, 2.0, f64::INFINITY], &mut rng).unwrap();
            assert_eq!(i, 1);
        }
    }

    #[test]
    fn test_deterministic_under_seed() {
        let weights = [0.3, 1.2, 0.5, 2.0];
        let a: Vec<_> = {
            let mut rng = create_rng(7);
            (0..50).map(|_| weighted_choice(&weights, &mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = create_rng(7);
            (0..50).map(|_| weighted_choice(&weights, &mut rng)).collect()
        };
        assert_eq!(a, b);
    }
}
