//! Open walk.

use std::fmt;

use crate::error::PathError;
use crate::graph::{Weight, WeightedGraph};

/// An ordered walk through a graph, costed over its consecutive legs.
///
/// Borrows the graph it was built from; the cost is computed once at
/// construction.
///
/// # Examples
///
/// ```
/// use u_tour::graph::MatrixGraph;
/// use u_tour::path::Path;
///
/// let g = MatrixGraph::from_weights(
///     [('a', 0), ('b', 1), ('c', 2)],
///     vec![vec![0, 1, 9], vec![9, 0, 2], vec![4, 9, 0]],
/// )
/// .unwrap();
/// let path = Path::new(&g, vec!['a', 'b', 'c']);
/// assert_eq!(path.cost(), 3);
/// ```
pub struct Path<'g, G: WeightedGraph> {
    graph: &'g G,
    order: Vec<G::Label>,
    cost: Weight,
}

impl<'g, G: WeightedGraph> Path<'g, G> {
    /// Creates a path, returning an error if any consecutive leg has no edge.
    pub fn try_new(graph: &'g G, order: Vec<G::Label>) -> Result<Self, PathError> {
        let legs = order.len().saturating_sub(1);
        let cost = super::sum_legs(graph, &order, 0..legs)?;
        Ok(Self { graph, order, cost })
    }

    /// Creates a path.
    ///
    /// # Panics
    ///
    /// Panics if any consecutive leg has no edge. Callers must supply a
    /// weight (real or sentinel) for every leg they walk.
    pub fn new(graph: &'g G, order: Vec<G::Label>) -> Self {
        Self::try_new(graph, order).unwrap_or_else(|e| panic!("invalid path: {e}"))
    }

    /// Sum of the leg weights.
    pub fn cost(&self) -> Weight {
        self.cost
    }

    /// Labels in visiting order.
    pub fn order(&self) -> &[G::Label] {
        &self.order
    }

    /// The graph this path walks.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the path visits no labels.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consumes the path, returning its labels.
    pub fn into_order(self) -> Vec<G::Label> {
        self.order
    }
}

impl<G> Clone for Path<'_, G>
where
    G: WeightedGraph,
    G::Label: Clone,
{
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            order: self.order.clone(),
            cost: self.cost,
        }
    }
}

impl<G> fmt::Debug for Path<'_, G>
where
    G: WeightedGraph,
    G::Label: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("order", &self.order)
            .field("cost", &self.cost)
            .finish()
    }
}
