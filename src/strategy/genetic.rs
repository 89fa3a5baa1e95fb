//! Genetic search for a low-cost Hamiltonian cycle.
//!
//! # Algorithm
//!
//! Individuals are vertex orderings scored as cycles. The initial population
//! is uniformly random. Each generation keeps the best tenth unchanged as
//! parents and refills the rest with parent clones (round robin) mutated by
//! `S` random index swaps, then re-sorts by cost.
//!
//! `S` is chosen so that a position survives all swaps with probability `F`
//! (the crossover fraction): one swap moves a given position with probability
//! about 2/n, so `(1 - 2/n)^S = F` and `S = ⌈ln F / ln(1 - 2/n)⌉`.
//!
//! Permutation encoding with uniform swap mutation replaces the binary
//! encoding and two-point operators used by De Jong and Spears.
//!
//! # Complexity
//!
//! O(P log P + P·(S + n)) per generation, O(G·P log P) overall.
//!
//! # Reference
//!
//! De Jong, K.A. & Spears, W.M. (1990). "An analysis of the interacting roles
//! of population size and crossover in genetic algorithms", *Parallel Problem
//! Solving from Nature*, 38-47.

use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::{GeneticConfig, OptimizationStrategy};
use crate::error::ConfigError;
use crate::graph::WeightedGraph;
use crate::path::Cycle;

/// Number of random swaps that leave each position of an n-element ordering
/// unmoved with probability `crossover`.
///
/// Zero for fewer than three vertices, where the formula degenerates.
///
/// # Examples
///
/// ```
/// use u_tour::strategy::swap_count;
///
/// assert_eq!(swap_count(10, 0.6), 3);
/// assert_eq!(swap_count(10, 1.0), 0);
/// assert_eq!(swap_count(2, 0.6), 0);
/// ```
pub fn swap_count(n: usize, crossover: f64) -> usize {
    if n < 3 {
        return 0;
    }
    let swaps = (crossover.ln() / (1.0 - 2.0 / n as f64).ln()).ceil();
    swaps.max(0.0) as usize
}

/// Finds a probably-good cycle through a complete graph with a genetic
/// algorithm.
///
/// Every ordered pair of distinct vertices must have a weight; represent
/// missing legs with [`SENTINEL_WEIGHT`](crate::graph::SENTINEL_WEIGHT).
/// The random source is owned by the strategy, so a fixed seed and graph
/// always produce the same cycle.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_tour::graph::MatrixGraph;
/// use u_tour::strategy::{GeneticConfig, GeneticOptimizationStrategy, OptimizationStrategy};
///
/// let g = MatrixGraph::from_weights(
///     [("a", 0), ("b", 1), ("c", 2), ("d", 3)],
///     vec![
///         vec![0, 1, 9, 9],
///         vec![9, 0, 1, 9],
///         vec![9, 9, 0, 1],
///         vec![1, 9, 9, 0],
///     ],
/// )
/// .unwrap();
///
/// let config = GeneticConfig::default().with_generations(20);
/// let mut ga = GeneticOptimizationStrategy::with_config(config, StdRng::seed_from_u64(42)).unwrap();
/// assert_eq!(ga.optimize(&g).cost(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticOptimizationStrategy<R> {
    config: GeneticConfig,
    rng: R,
}

impl<R: Rng> GeneticOptimizationStrategy<R> {
    /// Creates a strategy with the default configuration.
    pub fn new(rng: R) -> Self {
        Self {
            config: GeneticConfig::default(),
            rng,
        }
    }

    /// Creates a strategy with a validated configuration.
    pub fn with_config(config: GeneticConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Consumes the strategy, returning its random source.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<L, R> OptimizationStrategy<L> for GeneticOptimizationStrategy<R>
where
    L: Eq + Hash + Clone,
    R: Rng,
{
    fn optimize<'g, G>(&mut self, graph: &'g G) -> Cycle<'g, G>
    where
        G: WeightedGraph<Label = L>,
    {
        let labels: Vec<L> = graph.nodes().cloned().collect();
        let n = labels.len();
        let population_size = self.config.effective_population(n);
        let num_parents = population_size / 10;
        let swaps = swap_count(n, self.config.crossover);

        info!(
            event = "optimize_start",
            strategy = "genetic",
            vertices = n,
            population = population_size,
            generations = self.config.generations,
            swaps = swaps,
        );

        let mut population: Vec<Cycle<'g, G>> = Vec::with_capacity(population_size);
        for _ in 0..population_size {
            let mut order = labels.clone();
            order.shuffle(&mut self.rng);
            population.push(Cycle::new(graph, order));
        }
        population.sort_by_key(|c| c.cost());

        for generation in 0..self.config.generations {
            for slot in num_parents..population_size {
                let parent = (slot - num_parents) % num_parents;
                let mut order = population[parent].order().to_vec();
                for _ in 0..swaps {
                    let a = self.rng.random_range(0..n);
                    let b = self.rng.random_range(0..n);
                    order.swap(a, b);
                }
                population[slot] = Cycle::new(graph, order);
            }
            population.sort_by_key(|c| c.cost());

            debug!(
                event = "generation_end",
                generation = generation,
                best_cost = population[0].cost(),
            );
        }

        let best = population
            .into_iter()
            .next()
            .expect("population keeps at least one parent");
        info!(
            event = "optimize_end",
            strategy = "genetic",
            cost = best.cost(),
        );
        best
    }
}
