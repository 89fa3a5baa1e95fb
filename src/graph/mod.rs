//! Weighted directed graphs over labeled vertices.
//!
//! - [`WeightedGraph`] — read-only view used by the cost model and optimizers
//! - [`MatrixGraph`] — dense adjacency matrix with a fixed vertex set
//! - [`AdjacencyGraph`] — sparse adjacency map that grows after construction

mod adjacency;
mod matrix;

use std::hash::Hash;

pub use adjacency::AdjacencyGraph;
pub use matrix::MatrixGraph;

/// Edge weight (distance or duration).
pub type Weight = i64;

/// Weight standing in for a leg with no real connection.
///
/// Large enough that optimizers route around it, small enough that two of
/// them still sum without overflow.
pub const SENTINEL_WEIGHT: Weight = Weight::MAX / 2;

/// A graph with labeled vertices and optionally weighted directed edges.
///
/// Each label identifies exactly one vertex. `weight(a, b)` is `None` when
/// either label is unknown or no edge runs from `a` to `b`.
///
/// # Examples
///
/// ```
/// use u_tour::graph::{AdjacencyGraph, WeightedGraph};
///
/// let mut g = AdjacencyGraph::new();
/// g.add_vertex("a");
/// g.add_vertex("b");
/// g.set_edge(&"a", &"b", 7);
///
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.weight(&"a", &"b"), Some(7));
/// assert_eq!(g.weight(&"b", &"a"), None);
/// ```
pub trait WeightedGraph {
    /// Vertex label type.
    type Label: Eq + Hash;

    /// Returns all vertex labels, in insertion order.
    fn nodes(&self) -> impl Iterator<Item = &Self::Label> + '_;

    /// Number of vertices.
    fn node_count(&self) -> usize;

    /// Returns `true` if `label` is a vertex of this graph.
    fn contains(&self, label: &Self::Label) -> bool;

    /// Weight of the edge from `from` to `to`, if any.
    fn weight(&self, from: &Self::Label, to: &Self::Label) -> Option<Weight>;
}
