//! Cycle finder binding a graph to an optimization strategy.

use tracing::warn;

use crate::graph::WeightedGraph;
use crate::path::Cycle;
use crate::strategy::OptimizationStrategy;

/// Finds a Hamiltonian cycle through a graph using a pluggable strategy.
///
/// Call sites depend only on the finder, so the exhaustive strategy can be
/// used in tests and the genetic one in production without changes.
///
/// # Examples
///
/// ```
/// use u_tour::finder::CycleFinder;
/// use u_tour::graph::MatrixGraph;
/// use u_tour::strategy::ExhaustiveOptimizationStrategy;
///
/// let g = MatrixGraph::from_weights(
///     [("a", 0), ("b", 1), ("c", 2)],
///     vec![vec![0, 2, 7], vec![7, 0, 2], vec![2, 7, 0]],
/// )
/// .unwrap();
///
/// let mut finder = CycleFinder::new(Some(&g), ExhaustiveOptimizationStrategy);
/// let cycle = finder.optimize().unwrap();
/// assert_eq!(cycle.cost(), 6);
/// assert_eq!(cycle.order(), &["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct CycleFinder<'g, G, S> {
    graph: Option<&'g G>,
    strategy: S,
}

impl<'g, G, S> CycleFinder<'g, G, S> {
    /// Creates a finder for `graph` (if any) using `strategy`.
    pub fn new(graph: Option<&'g G>, strategy: S) -> Self {
        Self { graph, strategy }
    }

    /// Runs the strategy on the graph.
    ///
    /// Returns `None` only when the finder was created without a graph.
    pub fn optimize(&mut self) -> Option<Cycle<'g, G>>
    where
        G: WeightedGraph,
        S: OptimizationStrategy<G::Label>,
    {
        let Some(graph) = self.graph else {
            warn!(event = "optimize_skipped", reason = "no graph");
            return None;
        };
        Some(self.strategy.optimize(graph))
    }

    /// The bound graph, if any.
    pub fn graph(&self) -> Option<&'g G> {
        self.graph
    }

    /// The bound strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Mutable access to the bound strategy.
    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    /// Consumes the finder, returning its strategy.
    pub fn into_strategy(self) -> S {
        self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, MatrixGraph};
    use crate::strategy::{
        ExhaustiveOptimizationStrategy, GeneticConfig, GeneticOptimizationStrategy, Strategy,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> MatrixGraph<u8> {
        MatrixGraph::from_weights(
            [(0, 0), (1, 1), (2, 2), (3, 3)],
            vec![
                vec![0, 3, 8, 8],
                vec![8, 0, 3, 8],
                vec![8, 8, 0, 3],
                vec![3, 8, 8, 0],
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_no_graph_no_result() {
        let mut finder: CycleFinder<'_, MatrixGraph<u8>, _> =
            CycleFinder::new(None, ExhaustiveOptimizationStrategy);
        assert!(finder.optimize().is_none());
        assert!(finder.graph().is_none());
    }

    #[test]
    fn test_delegates_to_strategy() {
        let g = square();
        let mut finder = CycleFinder::new(Some(&g), ExhaustiveOptimizationStrategy);
        let cycle = finder.optimize().expect("graph supplied");
        assert_eq!(cycle.cost(), 12);
        assert_eq!(cycle.order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_swapping_strategies_same_call_site() {
        let g = square();
        let strategies: Vec<Strategy<StdRng>> = vec![
            Strategy::exhaustive(),
            GeneticOptimizationStrategy::with_config(
                GeneticConfig::default().with_generations(10),
                StdRng::seed_from_u64(4),
            )
            .expect("valid")
            .into(),
        ];
        for strategy in strategies {
            let mut finder = CycleFinder::new(Some(&g), strategy);
            assert_eq!(finder.optimize().expect("graph").cost(), 12);
        }
    }

    #[test]
    fn test_sparse_backend() {
        let mut g = AdjacencyGraph::new();
        for v in ["x", "y", "z"] {
            g.add_vertex(v);
        }
        for (from, to, w) in [("x", "y", 1), ("y", "z", 1), ("z", "x", 1)] {
            g.set_edge(&from, &to, w);
        }
        for (from, to) in [("y", "x"), ("z", "y"), ("x", "z")] {
            g.set_edge(&from, &to, 10);
        }
        let mut finder = CycleFinder::new(Some(&g), ExhaustiveOptimizationStrategy);
        assert_eq!(finder.optimize().expect("graph").cost(), 3);
    }

    #[test]
    fn test_strategy_accessors() {
        let g = square();
        let rng = StdRng::seed_from_u64(0);
        let mut finder = CycleFinder::new(Some(&g), GeneticOptimizationStrategy::new(rng));
        assert_eq!(finder.strategy().config().generations, 100);
        finder.optimize();
        let _rng = finder.into_strategy().into_rng();
    }
}
