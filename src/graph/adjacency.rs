//! Sparse adjacency-map graph.

use std::hash::Hash;

use indexmap::IndexMap;

use super::{Weight, WeightedGraph};

/// A graph stored as a map from each vertex to its outgoing edges.
///
/// Uses O(V + E) memory and allows vertices and edges to be added after
/// construction.
///
/// # Examples
///
/// ```
/// use u_tour::graph::{AdjacencyGraph, WeightedGraph};
///
/// let mut g = AdjacencyGraph::new();
/// assert!(g.add_vertex(1).is_none());
/// assert!(g.add_vertex(2).is_none());
///
/// assert_eq!(g.set_edge(&1, &2, 10), None);
/// assert_eq!(g.set_edge(&1, &2, 12), Some(10));
/// assert_eq!(g.set_edge(&1, &3, 5), None); // 3 is not a vertex
/// assert_eq!(g.weight(&1, &2), Some(12));
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<L> {
    edges: IndexMap<L, IndexMap<L, Weight>>,
}

impl<L> Default for AdjacencyGraph<L> {
    fn default() -> Self {
        Self {
            edges: IndexMap::new(),
        }
    }
}

impl<L: Eq + Hash> AdjacencyGraph<L> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex with no outgoing edges.
    ///
    /// If the vertex already exists it is left untouched and its current
    /// adjacency is returned. Returns `None` when a new vertex was added.
    pub fn add_vertex(&mut self, label: L) -> Option<&IndexMap<L, Weight>> {
        match self.edges.entry(label) {
            indexmap::map::Entry::Occupied(entry) => Some(&*entry.into_mut()),
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(IndexMap::new());
                None
            }
        }
    }

    /// Sets the weight of the edge from `from` to `to`.
    ///
    /// Returns the previous weight when overwriting. Returns `None` on first
    /// insertion, and does nothing when either endpoint is not a vertex.
    pub fn set_edge(&mut self, from: &L, to: &L, weight: Weight) -> Option<Weight>
    where
        L: Clone,
    {
        if !self.edges.contains_key(to) {
            return None;
        }
        self.edges
            .get_mut(from)?
            .insert(to.clone(), weight)
    }

    /// Outgoing edges of `label`, if it is a vertex.
    pub fn neighbors(&self, label: &L) -> Option<&IndexMap<L, Weight>> {
        self.edges.get(label)
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(IndexMap::len).sum()
    }
}

impl<L: Eq + Hash> WeightedGraph for AdjacencyGraph<L> {
    type Label = L;

    fn nodes(&self) -> impl Iterator<Item = &L> + '_ {
        self.edges.keys()
    }

    fn node_count(&self) -> usize {
        self.edges.len()
    }

    fn contains(&self, label: &L) -> bool {
        self.edges.contains_key(label)
    }

    fn weight(&self, from: &L, to: &L) -> Option<Weight> {
        if !self.edges.contains_key(to) {
            return None;
        }
        self.edges.get(from)?.get(to).copied()
    }
}
