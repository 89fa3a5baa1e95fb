//! Genetic strategy configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Parameters of the genetic strategy.
///
/// Defaults follow DeJong & Spears (1990) with a larger population and
/// fewer generations: 500 individuals, 100 generations, 0.6 crossover.
///
/// # Examples
///
/// ```
/// use u_tour::strategy::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(200)
///     .with_generations(50);
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.crossover, 0.6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Minimum population size. The effective size is at least twice the
    /// vertex count.
    pub population_size: usize,
    /// Number of generations to evolve.
    pub generations: usize,
    /// Expected fraction of positions a mutation leaves unmoved, in (0, 1].
    pub crossover: f64,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            generations: 100,
            crossover: 0.6,
        }
    }
}

impl GeneticConfig {
    /// Sets the minimum population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the target crossover fraction.
    pub fn with_crossover(mut self, crossover: f64) -> Self {
        self.crossover = crossover;
        self
    }

    /// Population size used for a graph with `vertices` vertices.
    pub fn effective_population(&self, vertices: usize) -> usize {
        self.population_size.max(vertices.saturating_mul(2))
    }

    /// Checks that the parameters describe a runnable search.
    ///
    /// The population must keep at least one parent (a tenth of it), and the
    /// crossover fraction must lie in (0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 10 {
            return Err(ConfigError::Invalid(format!(
                "population_size must be at least 10, got {}",
                self.population_size
            )));
        }
        if self.generations == 0 {
            return Err(ConfigError::Invalid(
                "generations must be at least 1".to_string(),
            ));
        }
        if !(self.crossover > 0.0 && self.crossover <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "crossover must be in (0, 1], got {}",
                self.crossover
            )));
        }
        Ok(())
    }
}
