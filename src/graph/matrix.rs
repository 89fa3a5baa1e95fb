//! Dense adjacency-matrix graph.

use std::hash::Hash;

use indexmap::IndexMap;
use tracing::warn;

use super::{Weight, WeightedGraph, SENTINEL_WEIGHT};
use crate::error::GraphError;

/// A graph stored as an n×n row-major matrix of optional weights.
///
/// Suited to complete or nearly complete graphs. The vertex set is fixed at
/// construction; `matrix[i][j]` is the cost of going from the label at
/// index `i` to the label at index `j`.
///
/// # Examples
///
/// ```
/// use u_tour::graph::{MatrixGraph, WeightedGraph};
///
/// let g = MatrixGraph::from_weights(
///     [("home", 0), ("work", 1)],
///     vec![vec![0, 12], vec![15, 0]],
/// )
/// .unwrap();
/// assert_eq!(g.size(), 2);
/// assert_eq!(g.weight(&"home", &"work"), Some(12));
/// assert_eq!(g.weight(&"home", &"home"), None);
/// ```
#[derive(Debug, Clone)]
pub struct MatrixGraph<L> {
    labels: IndexMap<L, usize>,
    data: Vec<Option<Weight>>,
    size: usize,
}

impl<L: Eq + Hash> MatrixGraph<L> {
    /// Creates a graph from a label→index map and a square matrix.
    ///
    /// The label indices must cover `0..n` exactly, where `n` is the matrix
    /// dimension. Any `Some` entry is an edge, including on the diagonal.
    pub fn try_new<I>(labels: I, matrix: Vec<Vec<Option<Weight>>>) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (L, usize)>,
    {
        let size = matrix.len();
        let labels = index_labels(labels, size)?;

        let mut data = Vec::with_capacity(size * size);
        for (row, cells) in matrix.into_iter().enumerate() {
            if cells.len() != size {
                return Err(GraphError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
            data.extend(cells);
        }

        Ok(Self { labels, data, size })
    }

    /// Creates a graph from a fully populated weight matrix.
    ///
    /// Every off-diagonal entry becomes an edge; the diagonal is ignored.
    pub fn from_weights<I>(labels: I, rows: Vec<Vec<Weight>>) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (L, usize)>,
    {
        let matrix = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(j, w)| (i != j).then_some(w))
                    .collect()
            })
            .collect();
        Self::try_new(labels, matrix)
    }

    /// Creates a complete graph from a matrix with unresolved legs.
    ///
    /// Every missing off-diagonal entry is replaced by [`SENTINEL_WEIGHT`],
    /// so optimizers that assume completeness avoid that leg instead of
    /// failing on it. The diagonal is always left empty.
    pub fn with_sentinel<I>(labels: I, rows: Vec<Vec<Option<Weight>>>) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (L, usize)>,
    {
        let matrix = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(j, w)| match w {
                        _ if i == j => None,
                        Some(w) => Some(w),
                        None => {
                            warn!(event = "leg_unresolved", from = i, to = j, "routing around unresolved leg");
                            Some(SENTINEL_WEIGHT)
                        }
                    })
                    .collect()
            })
            .collect();
        Self::try_new(labels, matrix)
    }

    /// Number of vertices (matrix dimension).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Matrix index of `label`, if present.
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.labels.get(label).copied()
    }
}

fn index_labels<L, I>(labels: I, size: usize) -> Result<IndexMap<L, usize>, GraphError>
where
    L: Eq + Hash,
    I: IntoIterator<Item = (L, usize)>,
{
    let mut seen = vec![false; size];
    let mut map = IndexMap::with_capacity(size);
    for (label, index) in labels {
        if index >= size {
            return Err(GraphError::IndexOutOfRange { index, size });
        }
        if seen[index] {
            return Err(GraphError::DuplicateIndex(index));
        }
        seen[index] = true;
        if map.insert(label, index).is_some() {
            return Err(GraphError::DuplicateLabel(index));
        }
    }
    if map.len() != size {
        return Err(GraphError::LabelCountMismatch {
            labels: map.len(),
            size,
        });
    }
    Ok(map)
}

impl<L: Eq + Hash> WeightedGraph for MatrixGraph<L> {
    type Label = L;

    fn nodes(&self) -> impl Iterator<Item = &L> + '_ {
        self.labels.keys()
    }

    fn node_count(&self) -> usize {
        self.size
    }

    fn contains(&self, label: &L) -> bool {
        self.labels.contains_key(label)
    }

    fn weight(&self, from: &L, to: &L) -> Option<Weight> {
        let i = *self.labels.get(from)?;
        let j = *self.labels.get(to)?;
        self.data[i * self.size + j]
    }
}
