//! Ant System (ACO) search engine for the symmetric Traveling Salesman
//! Problem.
//!
//! Given a symmetric nonnegative distance matrix with zero diagonal,
//! the engine searches for short tours by simulating successive
//! generations of stochastic agents that lay down and follow pheromone
//! trails. Its primary output is the convergence trace: the
//! per-generation mean tour cost.
//!
//! # Components
//!
//! - [`matrix::DistanceMatrix`]: validated read-only problem input.
//! - [`aco::PheromoneModel`]: the two mutable pheromone stores and
//!   their deposit-then-evaporate update rule.
//! - [`aco::construct_tour`] / [`aco::tour_cost`]: one ant's
//!   pheromone-weighted tour construction and its open-path evaluation.
//! - [`aco::AcoRunner`]: the generation loop, returning an
//!   [`aco::AcoResult`] with the convergence trace and the best tour.
//! - [`random`]: seeded RNG construction and the weighted-choice
//!   sampler with its uniform fallback for all-zero weights.
//!
//! Distance-matrix generation beyond the bundled random factory,
//! parameter sweeping, and result plotting are left to consumers.
//!
//! # Example
//!
//! ```
//! use ant_system::aco::{AcoConfig, AcoRunner};
//! use ant_system::matrix::DistanceMatrix;
//! use ant_system::random::create_rng;
//!
//! let mut rng = create_rng(7);
//! let matrix = DistanceMatrix::random(10, 100.0, &mut rng);
//!
//! let config = AcoConfig::default()
//!     .with_generations(100)
//!     .with_ants_per_generation(50)
//!     .with_evaporation_rate(0.9)
//!     .with_seed(42);
//!
//! let result = AcoRunner::run(&matrix, &config).unwrap();
//! assert_eq!(result.mean_cost_history.len(), 100);
//! ```

pub mod aco;
pub mod error;
pub mod matrix;
pub mod random;
