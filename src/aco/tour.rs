//! Tour construction and evaluation.
//!
//! One ant builds one tour by sequential pheromone-weighted random
//! choice: the start node is sampled from the start-desirability vector,
//! then each step samples the next node from the unvisited set weighted
//! by the edge pheromones out of the current node.

use super::pheromone::PheromoneModel;
use crate::matrix::DistanceMatrix;
use crate::random::weighted_choice;
use rand::Rng;

/// Builds one complete tour: a permutation of `0..model.n()`.
///
/// The returned path is open — there is no forced return edge to the
/// start node. When every candidate weight in a sampling step is zero,
/// the step falls back to a uniform choice among the candidates (see
/// [`weighted_choice`]), so construction always completes.
pub fn construct_tour<R: Rng>(model: &PheromoneModel, rng: &mut R) -> Vec<usize> {
    let n = model.n();
    let mut tour = Vec::with_capacity(n);

    let start = weighted_choice(model.start_weights(), rng).unwrap_or(0);
    tour.push(start);

    let mut unvisited: Vec<usize> = (0..n).filter(|&j| j != start).collect();
    let mut current = start;

    while !unvisited.is_empty() {
        let edge_weights = model.edges_from(current);
        let candidate_weights: Vec<f64> = unvisited.iter().map(|&j| edge_weights[j]).collect();

        let Some(pick) = weighted_choice(&candidate_weights, rng) else {
            break;
        };
        let next = unvisited.swap_remove(pick);
        tour.push(next);
        current = next;
    }

    tour
}

/// Total cost of an open tour: the sum of its N−1 consecutive edge
/// distances. Pure, no state.
pub fn tour_cost(tour: &[usize], matrix: &DistanceMatrix) -> f64 {
    tour.windows(2).map(|pair| matrix.get(pair[0], pair[1])).sum()
}
