//! Exact search over every vertex ordering.
//!
//! # Algorithm
//!
//! Sort the labels, then walk every lexicographic permutation of them and
//! keep the cheapest cycle. A later ordering replaces the incumbent only if
//! it is strictly cheaper, so ties go to the lexicographically earliest one.
//!
//! # Complexity
//!
//! Θ(n!·n). Only practical for about a dozen vertices; used to validate the
//! heuristic on small graphs.

use std::hash::Hash;

use tracing::info;

use super::OptimizationStrategy;
use crate::graph::WeightedGraph;
use crate::path::Cycle;
use crate::permutation::LexicographicPermutations;

/// Returns the true cheapest Hamiltonian cycle by trying every ordering.
///
/// Requires labels with a total order, used to fix the starting ordering.
///
/// # Examples
///
/// ```
/// use u_tour::graph::MatrixGraph;
/// use u_tour::strategy::{ExhaustiveOptimizationStrategy, OptimizationStrategy};
///
/// let g = MatrixGraph::from_weights(
///     [(0, 0), (1, 1), (2, 2), (3, 3)],
///     vec![
///         vec![0, 1, 9, 9],
///         vec![9, 0, 1, 9],
///         vec![9, 9, 0, 1],
///         vec![1, 9, 9, 0],
///     ],
/// )
/// .unwrap();
/// let cycle = ExhaustiveOptimizationStrategy.optimize(&g);
/// assert_eq!(cycle.cost(), 4);
/// assert_eq!(cycle.order(), &[0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveOptimizationStrategy;

impl<L> OptimizationStrategy<L> for ExhaustiveOptimizationStrategy
where
    L: Ord + Hash + Clone,
{
    fn optimize<'g, G>(&mut self, graph: &'g G) -> Cycle<'g, G>
    where
        G: WeightedGraph<Label = L>,
    {
        let mut labels: Vec<L> = graph.nodes().cloned().collect();
        labels.sort();

        info!(
            event = "optimize_start",
            strategy = "exhaustive",
            vertices = labels.len(),
        );

        let mut evaluated = 0u64;
        let mut best: Option<Cycle<'g, G>> = None;
        for order in LexicographicPermutations::new(labels) {
            evaluated += 1;
            let candidate = Cycle::new(graph, order);
            let improves = best
                .as_ref()
                .map_or(true, |incumbent| candidate.cost() < incumbent.cost());
            if improves {
                best = Some(candidate);
            }
        }

        let best = best.expect("permutations always yield the starting ordering");
        info!(
            event = "optimize_end",
            strategy = "exhaustive",
            permutations = evaluated,
            cost = best.cost(),
        );
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, MatrixGraph, Weight};
    use proptest::prelude::*;

    /// Heap's algorithm, independent of the lexicographic generator.
    fn all_orderings(items: &mut Vec<usize>, k: usize, out: &mut Vec<Vec<usize>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        all_orderings(items, k - 1, out);
        for i in 0..k - 1 {
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
            all_orderings(items, k - 1, out);
        }
    }

    fn brute_force_min(rows: &[Vec<Weight>]) -> Weight {
        let n = rows.len();
        let mut items: Vec<usize> = (0..n).collect();
        let mut orderings = Vec::new();
        all_orderings(&mut items, n, &mut orderings);
        orderings
            .iter()
            .map(|o| (0..n).map(|i| rows[o[i]][o[(i + 1) % n]]).sum::<Weight>())
            .min()
            .expect("at least one ordering")
    }

    fn graph_from(rows: Vec<Vec<Weight>>) -> MatrixGraph<usize> {
        let n = rows.len();
        MatrixGraph::from_weights((0..n).map(|i| (i, i)), rows).expect("square")
    }

    #[test]
    fn test_eight_vertices_against_brute_force() {
        let rows: Vec<Vec<Weight>> = (0..8)
            .map(|i| (0..8).map(|j| ((i * 37 + j * 11) % 23 + 1) as Weight).collect())
            .collect();
        let expected = brute_force_min(&rows);
        let g = graph_from(rows);
        let cycle = ExhaustiveOptimizationStrategy.optimize(&g);
        assert_eq!(cycle.cost(), expected);
        assert_eq!(cycle.len(), 8);
    }

    #[test]
    fn test_ties_keep_earliest_ordering() {
        let g = graph_from(vec![vec![1; 4]; 4]);
        let cycle = ExhaustiveOptimizationStrategy.optimize(&g);
        assert_eq!(cycle.order(), &[0, 1, 2, 3]);
        assert_eq!(cycle.cost(), 4);
    }

    #[test]
    fn test_sorted_start_regardless_of_insertion_order() {
        let mut g = AdjacencyGraph::new();
        for v in ["c", "a", "b"] {
            g.add_vertex(v);
        }
        for from in ["a", "b", "c"] {
            for to in ["a", "b", "c"] {
                if from != to {
                    g.set_edge(&from, &to, 5);
                }
            }
        }
        let cycle = ExhaustiveOptimizationStrategy.optimize(&g);
        assert_eq!(cycle.order(), &["a", "b", "c"]);
    }

    #[test]
    fn test_deterministic() {
        let rows: Vec<Vec<Weight>> = (0..6)
            .map(|i| (0..6).map(|j| ((i * 7 + j * 3) % 10) as Weight).collect())
            .collect();
        let g = graph_from(rows);
        let a = ExhaustiveOptimizationStrategy.optimize(&g);
        let b = ExhaustiveOptimizationStrategy.optimize(&g);
        assert_eq!(a.order(), b.order());
        assert_eq!(a.cost(), b.cost());
    }

    #[test]
    fn test_sentinel_leg_avoided() {
        let g = MatrixGraph::with_sentinel(
            [(0, 0), (1, 1), (2, 2), (3, 3)],
            vec![
                vec![None, None, Some(3), Some(3)],
                vec![Some(3), None, Some(3), Some(3)],
                vec![Some(3), Some(3), None, Some(3)],
                vec![Some(3), Some(3), Some(3), None],
            ],
        )
        .expect("valid");
        let cycle = ExhaustiveOptimizationStrategy.optimize(&g);
        assert_eq!(cycle.cost(), 12);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_no_ordering_is_cheaper(
            rows in (2usize..=6).prop_flat_map(|n| {
                proptest::collection::vec(proptest::collection::vec(0..1000i64, n), n)
            })
        ) {
            let expected = brute_force_min(&rows);
            let g = graph_from(rows);
            let cycle = ExhaustiveOptimizationStrategy.optimize(&g);
            prop_assert_eq!(cycle.cost(), expected);
        }
    }
}
