//! Ant System configuration.

use crate::error::AcoError;

/// Configuration for an Ant System search run.
///
/// # Examples
///
/// ```
/// use ant_system::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_generations(500)
///     .with_ants_per_generation(100)
///     .with_evaporation_rate(0.6)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of generations to run.
    pub generations: usize,

    /// Number of ants constructed and evaluated per generation.
    ///
    /// More ants per generation smooth the deposit signal but cost
    /// proportionally more tour constructions.
    pub ants_per_generation: usize,

    /// Multiplicative pheromone retention factor in `(0, 1]`, applied
    /// once per generation after deposits.
    ///
    /// `1.0` disables evaporation; values near zero collapse the
    /// pheromone state rapidly.
    pub evaporation_rate: f64,

    /// Whether to construct and evaluate ants in parallel using rayon.
    ///
    /// Requires the `parallel` feature; ignored otherwise. The
    /// pheromone update stays a single-writer step at the generation
    /// boundary either way.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            generations: 1000,
            ants_per_generation: 300,
            evaporation_rate: 0.9,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_ants_per_generation(mut self, n: usize) -> Self {
        self.ants_per_generation = n;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AcoError::InvalidParameter`] if `generations` or
    /// `ants_per_generation` is zero, or if `evaporation_rate` is
    /// outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.generations == 0 {
            return Err(AcoError::InvalidParameter(
                "generations must be at least 1".into(),
            ));
        }
        if self.ants_per_generation == 0 {
            return Err(AcoError::InvalidParameter(
                "ants_per_generation must be at least 1".into(),
            ));
        }
        if !self.evaporation_rate.is_finite()
            || self.evaporation_rate <= 0.0
            || self.evaporation_rate > 1.0
        {
            return Err(AcoError::InvalidParameter(format!(
                "evaporation_rate must be in (0, 1], got {}",
                self.evaporation_rate
            )));
        }
        Ok(())
    }
}
