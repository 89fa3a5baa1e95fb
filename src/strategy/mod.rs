//! Hamiltonian cycle optimization strategies.
//!
//! - [`ExhaustiveOptimizationStrategy`] — exact search over every ordering, Θ(n!·n)
//! - [`GeneticOptimizationStrategy`] — elitist swap-mutation GA, O(G·P log P)
//! - [`Strategy`] — closed set of the above behind [`OptimizationStrategy`]

mod config;
mod exhaustive;
mod genetic;

pub use config::GeneticConfig;
pub use exhaustive::ExhaustiveOptimizationStrategy;
pub use genetic::{swap_count, GeneticOptimizationStrategy};

use std::hash::Hash;

use rand::Rng;

use crate::graph::WeightedGraph;
use crate::path::Cycle;

/// Finds a low-cost Hamiltonian cycle through every vertex of a graph.
///
/// The returned cycle is the best the strategy found, which need not be the
/// true optimum. Strategies do not validate the graph: heuristics assume
/// every leg has a weight (real or sentinel).
pub trait OptimizationStrategy<L> {
    /// Returns the best cycle found over all vertices of `graph`.
    fn optimize<'g, G>(&mut self, graph: &'g G) -> Cycle<'g, G>
    where
        G: WeightedGraph<Label = L>;
}

/// The available strategies, dispatched by variant.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_tour::graph::MatrixGraph;
/// use u_tour::strategy::{GeneticOptimizationStrategy, OptimizationStrategy, Strategy};
///
/// let g = MatrixGraph::from_weights(
///     [(0, 0), (1, 1), (2, 2)],
///     vec![vec![0, 1, 5], vec![5, 0, 1], vec![1, 5, 0]],
/// )
/// .unwrap();
///
/// let mut exact: Strategy<StdRng> = Strategy::exhaustive();
/// assert_eq!(exact.optimize(&g).cost(), 3);
///
/// let rng = StdRng::seed_from_u64(7);
/// let mut heuristic = Strategy::from(GeneticOptimizationStrategy::new(rng));
/// assert_eq!(heuristic.optimize(&g).cost(), 3);
/// ```
#[derive(Debug, Clone)]
pub enum Strategy<R> {
    /// Exact search.
    Exhaustive(ExhaustiveOptimizationStrategy),
    /// Genetic heuristic.
    Genetic(GeneticOptimizationStrategy<R>),
}

impl<R> Strategy<R> {
    /// Shorthand for the exhaustive variant.
    pub fn exhaustive() -> Self {
        Self::Exhaustive(ExhaustiveOptimizationStrategy)
    }

    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exhaustive(_) => "exhaustive",
            Self::Genetic(_) => "genetic",
        }
    }
}

impl<R> From<ExhaustiveOptimizationStrategy> for Strategy<R> {
    fn from(strategy: ExhaustiveOptimizationStrategy) -> Self {
        Self::Exhaustive(strategy)
    }
}

impl<R> From<GeneticOptimizationStrategy<R>> for Strategy<R> {
    fn from(strategy: GeneticOptimizationStrategy<R>) -> Self {
        Self::Genetic(strategy)
    }
}

impl<L, R> OptimizationStrategy<L> for Strategy<R>
where
    L: Ord + Hash + Clone,
    R: Rng,
{
    fn optimize<'g, G>(&mut self, graph: &'g G) -> Cycle<'g, G>
    where
        G: WeightedGraph<Label = L>,
    {
        match self {
            Self::Exhaustive(s) => s.optimize(graph),
            Self::Genetic(s) => s.optimize(graph),
        }
    }
}
