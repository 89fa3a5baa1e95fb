//! Closed walk (Hamiltonian cycle candidate).

use std::fmt;

use super::Path;
use crate::error::PathError;
use crate::graph::{Weight, WeightedGraph};

/// A closed walk: the order is visited in sequence and then returns to its
/// first label.
///
/// A cycle over n ≥ 2 labels has n legs. With fewer than two labels there is
/// no leg to walk and the cost is zero.
///
/// # Examples
///
/// ```
/// use u_tour::graph::MatrixGraph;
/// use u_tour::path::Cycle;
///
/// let g = MatrixGraph::from_weights(
///     [('a', 0), ('b', 1), ('c', 2)],
///     vec![vec![0, 1, 9], vec![9, 0, 2], vec![4, 9, 0]],
/// )
/// .unwrap();
/// let cycle = Cycle::new(&g, vec!['a', 'b', 'c']);
/// assert_eq!(cycle.cost(), 1 + 2 + 4);
/// ```
pub struct Cycle<'g, G: WeightedGraph> {
    graph: &'g G,
    order: Vec<G::Label>,
    cost: Weight,
}

impl<'g, G: WeightedGraph> Cycle<'g, G> {
    /// Creates a cycle, returning an error if any leg has no edge.
    pub fn try_new(graph: &'g G, order: Vec<G::Label>) -> Result<Self, PathError> {
        let legs = if order.len() < 2 { 0 } else { order.len() };
        let cost = super::sum_legs(graph, &order, 0..legs)?;
        Ok(Self { graph, order, cost })
    }

    /// Creates a cycle.
    ///
    /// # Panics
    ///
    /// Panics if any leg, including the closing one, has no edge.
    pub fn new(graph: &'g G, order: Vec<G::Label>) -> Self {
        Self::try_new(graph, order).unwrap_or_else(|e| panic!("invalid cycle: {e}"))
    }

    /// The same order as an open path, without the closing leg.
    pub fn to_path(&self) -> Path<'g, G>
    where
        G::Label: Clone,
    {
        Path::new(self.graph, self.order.clone())
    }

    /// Sum of all leg weights, closing leg included.
    pub fn cost(&self) -> Weight {
        self.cost
    }

    /// Labels in visiting order, starting label first.
    pub fn order(&self) -> &[G::Label] {
        &self.order
    }

    /// The graph this cycle walks.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the cycle visits no labels.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consumes the cycle, returning its labels.
    pub fn into_order(self) -> Vec<G::Label> {
        self.order
    }
}

impl<G> Clone for Cycle<'_, G>
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

impl<G> fmt::Debug for Cycle<'_, G>
where
    G: WeightedGraph,
    G::Label: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cycle")
            .field("order", &self.order)
            .field("cost", &self.cost)
            .finish()
    }
}
