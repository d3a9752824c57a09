//! Ant System search engine.
//!
//! The classic Ant System (AS) variant of Ant Colony Optimization:
//! each generation, a colony of stochastic agents builds tours guided
//! by two pheromone stores (start desirability per node, edge
//! desirability per directed node pair), deposits pheromone in
//! proportion to `1 / cost`, and the stores are updated once per
//! generation with a deposit-then-evaporate rule.
//!
//! Tours are scored as open paths — the walk does not close back to its
//! start node. Downstream consumers depend on the open-path convergence
//! numbers, so the closing edge is deliberately not added.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
mod pheromone;
mod runner;
mod tour;

pub use config::AcoConfig;
pub use pheromone::{DepositBuffer, PheromoneModel};
pub use runner::{AcoResult, AcoRunner, GenerationSummary};
pub use tour::{construct_tour, tour_cost};
