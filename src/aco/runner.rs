//! Generation loop execution.
//!
//! [`AcoRunner`] orchestrates the full search: per generation, every ant
//! constructs and evaluates a tour and lays its deposit into a private
//! buffer; the buffer is committed to the pheromone model in a single
//! update at the generation boundary. Generations run strictly in order
//! because each depends on the pheromone state committed by the previous
//! one.

use super::config::AcoConfig;
use super::pheromone::{DepositBuffer, PheromoneModel};
use super::tour::{construct_tour, tour_cost};
use crate::error::AcoError;
use crate::matrix::DistanceMatrix;
use crate::random::create_rng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Deposit contribution used in place of `1 / cost` when a tour has
/// zero cost. Large enough to dominate, finite so the stores stay sane.
const MAX_CONTRIBUTION: f64 = 1e12;

/// Outcome of a single generation.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Mean tour cost over the generation's ants, exactly
    /// `Σ cost / ants_per_generation`.
    pub mean_cost: f64,

    /// Cheapest tour constructed this generation.
    pub best_tour: Vec<usize>,

    /// Cost of `best_tour`.
    pub best_cost: f64,

    /// The last tour constructed this generation.
    pub last_tour: Vec<usize>,
}

/// Result of a full Ant System run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Per-generation mean tour cost, one entry per completed
    /// generation — the convergence trace, the run's primary output.
    pub mean_cost_history: Vec<f64>,

    /// Cheapest tour seen across the entire run.
    pub best_tour: Vec<usize>,

    /// Cost of `best_tour`.
    pub best_cost: f64,

    /// The last tour constructed before the run ended.
    pub last_tour: Vec<usize>,

    /// Number of generations completed.
    pub generations: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes the Ant System search.
///
/// # Usage
///
/// ```
/// use ant_system::aco::{AcoConfig, AcoRunner};
/// use ant_system::matrix::DistanceMatrix;
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 10.0, 15.0],
///     vec![10.0, 0.0, 35.0],
///     vec![15.0, 35.0, 0.0],
/// ]).unwrap();
///
/// let config = AcoConfig::default()
///     .with_generations(50)
///     .with_ants_per_generation(20)
///     .with_evaporation_rate(0.7)
///     .with_seed(42);
///
/// let result = AcoRunner::run(&matrix, &config).unwrap();
/// assert_eq!(result.mean_cost_history.len(), 50);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the full multi-generation search.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidParameter`] for an invalid
    /// configuration and [`AcoError::InvalidDimension`] for a matrix
    /// smaller than 2×2 — in both cases before any pheromone state is
    /// created or mutated.
    pub fn run(matrix: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult, AcoError> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs the search with an optional cancellation token, checked at
    /// each generation boundary. A cancelled run returns everything
    /// found so far.
    pub fn run_with_cancel(
        matrix: &DistanceMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult, AcoError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut model = PheromoneModel::initialize(matrix.n(), &mut rng)?;

        let mut mean_cost_history = Vec::with_capacity(config.generations);
        let mut best_tour = Vec::new();
        let mut best_cost = f64::INFINITY;
        let mut last_tour = Vec::new();
        let mut cancelled = false;

        for _ in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            #[cfg(feature = "parallel")]
            let summary = if config.parallel {
                generation_parallel(
                    &mut model,
                    matrix,
                    config.ants_per_generation,
                    config.evaporation_rate,
                    &mut rng,
                )
            } else {
                generation_sequential(
                    &mut model,
                    matrix,
                    config.ants_per_generation,
                    config.evaporation_rate,
                    &mut rng,
                )
            };

            #[cfg(not(feature = "parallel"))]
            let summary = generation_sequential(
                &mut model,
                matrix,
                config.ants_per_generation,
                config.evaporation_rate,
                &mut rng,
            );

            mean_cost_history.push(summary.mean_cost);
            if summary.best_cost < best_cost {
                best_cost = summary.best_cost;
                best_tour = summary.best_tour;
            }
            last_tour = summary.last_tour;
        }

        Ok(AcoResult {
            generations: mean_cost_history.len(),
            mean_cost_history,
            best_tour,
            best_cost,
            last_tour,
            cancelled,
        })
    }

    /// Runs exactly one generation against an externally owned model.
    ///
    /// Building block for callers that want to drive the loop
    /// themselves (early termination, per-generation reporting). The
    /// model is mutated in place by the committed pheromone update.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidParameter`] if `ants_per_generation`
    /// is zero, `evaporation_rate` is outside `(0, 1]`, or the matrix
    /// dimension does not match the model — all checked before any
    /// mutation.
    pub fn run_generation<R: Rng>(
        model: &mut PheromoneModel,
        matrix: &DistanceMatrix,
        ants_per_generation: usize,
        evaporation_rate: f64,
        rng: &mut R,
    ) -> Result<GenerationSummary, AcoError> {
        if ants_per_generation == 0 {
            return Err(AcoError::InvalidParameter(
                "ants_per_generation must be at least 1".into(),
            ));
        }
        if !evaporation_rate.is_finite() || evaporation_rate <= 0.0 || evaporation_rate > 1.0 {
            return Err(AcoError::InvalidParameter(format!(
                "evaporation_rate must be in (0, 1], got {evaporation_rate}"
            )));
        }
        if matrix.n() != model.n() {
            return Err(AcoError::InvalidParameter(format!(
                "distance matrix dimension {} does not match model dimension {}",
                matrix.n(),
                model.n()
            )));
        }

        Ok(generation_sequential(
            model,
            matrix,
            ants_per_generation,
            evaporation_rate,
            rng,
        ))
    }
}

/// Pheromone contribution of one tour: `1 / cost`, clamped to a large
/// finite value for zero-cost tours.
fn contribution(cost: f64) -> f64 {
    let inverse = 1.0 / cost;
    if inverse.is_finite() {
        inverse
    } else {
        MAX_CONTRIBUTION
    }
}

fn generation_sequential<R: Rng>(
    model: &mut PheromoneModel,
    matrix: &DistanceMatrix,
    ants_per_generation: usize,
    evaporation_rate: f64,
    rng: &mut R,
) -> GenerationSummary {
    let mut deposits = DepositBuffer::zeroed(model.n());
    let mut total_cost = 0.0;
    let mut best_tour = Vec::new();
    let mut best_cost = f64::INFINITY;
    let mut last_tour = Vec::new();

    for _ in 0..ants_per_generation {
        let tour = construct_tour(model, rng);
        let cost = tour_cost(&tour, matrix);
        total_cost += cost;
        deposits.record_tour(&tour, contribution(cost));

        if cost < best_cost {
            best_cost = cost;
            best_tour = tour.clone();
        }
        last_tour = tour;
    }

    model.apply_generation_update(&deposits, evaporation_rate);

    GenerationSummary {
        mean_cost: total_cost / ants_per_generation as f64,
        best_tour,
        best_cost,
        last_tour,
    }
}

/// Parallel variant: ants fan out across the rayon pool, each with its
/// own RNG pre-seeded from the master stream, and the deposits are
/// reduced into one buffer before the single-writer update. The
/// generation barrier is unchanged — every ant reads the pheromone
/// state committed at the end of the previous generation.
#[cfg(feature = "parallel")]
fn generation_parallel<R: Rng>(
    model: &mut PheromoneModel,
    matrix: &DistanceMatrix,
    ants_per_generation: usize,
    evaporation_rate: f64,
    rng: &mut R,
) -> GenerationSummary {
    use rayon::prelude::*;

    let seeds: Vec<u64> = (0..ants_per_generation).map(|_| rng.random()).collect();

    let snapshot: &PheromoneModel = model;
    let tours: Vec<(Vec<usize>, f64)> = seeds
        .into_par_iter()
        .map(|seed| {
            let mut ant_rng = create_rng(seed);
            let tour = construct_tour(snapshot, &mut ant_rng);
            let cost = tour_cost(&tour, matrix);
            (tour, cost)
        })
        .collect();

    let mut deposits = DepositBuffer::zeroed(model.n());
    let mut total_cost = 0.0;
    let mut best_cost = f64::INFINITY;
    let mut best_index = 0;
    for (i, (tour, cost)) in tours.iter().enumerate() {
        total_cost += cost;
        deposits.record_tour(tour, contribution(*cost));
        if *cost < best_cost {
            best_cost = *cost;
            best_index = i;
        }
    }

    model.apply_generation_update(&deposits, evaporation_rate);

    let best_tour = tours[best_index].0.clone();
    let last_tour = tours
        .into_iter()
        .next_back()
        .map(|(tour, _)| tour)
        .unwrap_or_default();

    GenerationSummary {
        mean_cost: total_cost / ants_per_generation as f64,
        best_tour,
        best_cost,
        last_tour,
    }
}
