//! Pheromone state and the per-generation update rule.
//!
//! The model owns two stores: a per-node start-desirability vector and
//! an N×N edge-desirability matrix. Both are written only through
//! [`PheromoneModel::apply_generation_update`]; everything else gets
//! read-only access. Edge weights need not be symmetric even though
//! distances are, and the self-weights `p[i][i]` are never read.

use crate::error::AcoError;
use rand::Rng;

/// Owned pheromone state for one search run.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneModel {
    start: Vec<f64>,
    edges: Vec<Vec<f64>>,
}

impl PheromoneModel {
    /// Initializes both stores with uniform random weights in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidDimension`] if `n < 2` — a tour needs
    /// at least two nodes.
    pub fn initialize<R: Rng>(n: usize, rng: &mut R) -> Result<Self, AcoError> {
        if n < 2 {
            return Err(AcoError::InvalidDimension { n });
        }
        let start = (0..n).map(|_| rng.random_range(0.0..1.0)).collect();
        let edges = (0..n)
            .map(|_| (0..n).map(|_| rng.random_range(0.0..1.0)).collect())
            .collect();
        Ok(Self { start, edges })
    }

    /// Problem dimension N.
    pub fn n(&self) -> usize {
        self.start.len()
    }

    /// Start-desirability weights, one per node.
    pub fn start_weights(&self) -> &[f64] {
        &self.start
    }

    /// Edge-desirability weights out of node `from`.
    pub fn edges_from(&self, from: usize) -> &[f64] {
        &self.edges[from]
    }

    /// Commits one generation's deposits: `new = (old + deposit) * rate`,
    /// elementwise over both stores.
    ///
    /// Deposit-then-evaporate, applied uniformly — evaporation hits
    /// freshly deposited and residual pheromone equally. The rate is
    /// validated upstream by the configuration; with a rate in `(0, 1]`
    /// and nonnegative deposits, every weight stays nonnegative.
    pub fn apply_generation_update(&mut self, deposits: &DepositBuffer, evaporation_rate: f64) {
        debug_assert_eq!(deposits.start.len(), self.start.len());
        for (w, &d) in self.start.iter_mut().zip(&deposits.start) {
            *w = (*w + d) * evaporation_rate;
        }
        for (row, dep_row) in self.edges.iter_mut().zip(&deposits.edges) {
            for (w, &d) in row.iter_mut().zip(dep_row) {
                *w = (*w + d) * evaporation_rate;
            }
        }
    }
}

/// Per-generation deposit accumulator, same shape as the live stores.
///
/// Zeroed at the start of each generation, incremented by every ant's
/// contribution, consumed by [`PheromoneModel::apply_generation_update`].
#[derive(Debug, Clone)]
pub struct DepositBuffer {
    start: Vec<f64>,
    edges: Vec<Vec<f64>>,
}

impl DepositBuffer {
    /// Creates a zeroed buffer for an N-node problem.
    pub fn zeroed(n: usize) -> Self {
        Self {
            start: vec![0.0; n],
            edges: vec![vec![0.0; n]; n],
        }
    }

    /// Accumulates one ant's contribution: at the tour's start node and
    /// along every traversed directed edge.
    pub fn record_tour(&mut self, tour: &[usize], contribution: f64) {
        if let Some(&first) = tour.first() {
            self.start[first] += contribution;
        }
        for pair in tour.windows(2) {
            self.edges[pair[0]][pair[1]] += contribution;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_initialize_rejects_small_n() {
        let mut rng = create_rng(42);
        assert_eq!(
            PheromoneModel::initialize(0, &mut rng),
            Err(AcoError::InvalidDimension { n: 0 })
        );
        assert_eq!(
            PheromoneModel::initialize(1, &mut rng),
            Err(AcoError::InvalidDimension { n: 1 })
        );
    }

    #[test]
    fn test_initialize_shapes_and_range() {
        let mut rng = create_rng(42);
        let model = PheromoneModel::initialize(5, &mut rng).unwrap();
        assert_eq!(model.n(), 5);
        assert_eq!(model.start_weights().len(), 5);
        for i in 0..5 {
            assert_eq!(model.edges_from(i).len(), 5);
            for &w in model.edges_from(i) {
                assert!((0.0..1.0).contains(&w));
            }
        }
    }

    #[test]
    fn test_update_identity_at_rate_one_with_zero_deposit() {
        let mut rng = create_rng(42);
        let mut model = PheromoneModel::initialize(4, &mut rng).unwrap();
        let before = model.clone();

        model.apply_generation_update(&DepositBuffer::zeroed(4), 1.0);

        assert_eq!(model.start_weights(), before.start_weights());
        for i in 0..4 {
            assert_eq!(model.edges_from(i), before.edges_from(i));
        }
    }

    #[test]
    fn test_update_deposit_then_evaporate() {
        let mut rng = create_rng(42);
        let mut model = PheromoneModel::initialize(3, &mut rng).unwrap();
        let w0 = model.start_weights()[1];
        let e0 = model.edges_from(1)[2];

        let mut deposits = DepositBuffer::zeroed(3);
        deposits.record_tour(&[1, 2, 0], 0.5);
        model.apply_generation_update(&deposits, 0.8);

        assert!((model.start_weights()[1] - (w0 + 0.5) * 0.8).abs() < 1e-12);
        assert!((model.edges_from(1)[2] - (e0 + 0.5) * 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_evaporation_drives_weights_to_zero() {
        let mut rng = create_rng(42);
        let mut model = PheromoneModel::initialize(3, &mut rng).unwrap();
        let empty = DepositBuffer::zeroed(3);
        for _ in 0..200 {
            model.apply_generation_update(&empty, 0.5);
        }
        for &w in model.start_weights() {
            assert!(w >= 0.0 && w < 1e-30);
        }
        for i in 0..3 {
            for &w in model.edges_from(i) {
                assert!(w >= 0.0 && w < 1e-30);
            }
        }
    }

    #[test]
    fn test_record_tour_hits_start_and_edges_only() {
        let mut deposits = DepositBuffer::zeroed(4);
        deposits.record_tour(&[2, 0, 3, 1], 1.0);

        assert_eq!(deposits.start, vec![0.0, 0.0, 1.0, 0.0]);
        assert_eq!(deposits.edges[2][0], 1.0);
        assert_eq!(deposits.edges[0][3], 1.0);
        assert_eq!(deposits.edges[3][1], 1.0);
        // Reverse direction untouched: the deposit is directed.
        assert_eq!(deposits.edges[0][2], 0.0);
        let total: f64 = deposits.edges.iter().flatten().sum();
        assert_eq!(total, 3.0);
    }
}
