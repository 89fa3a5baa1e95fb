//! # u-tour
//!
//! Hamiltonian cycle optimization over weighted graphs, for finding a short
//! round trip through a set of locations.
//!
//! ## Modules
//!
//! - [`graph`] — Weighted graph trait with dense (matrix) and sparse (adjacency) backends
//! - [`permutation`] — Lexicographic permutation generator
//! - [`path`] — Path and cycle cost model
//! - [`strategy`] — Exhaustive and genetic optimization strategies
//! - [`finder`] — Cycle finder binding a graph to a strategy
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use u_tour::finder::CycleFinder;
//! use u_tour::graph::MatrixGraph;
//! use u_tour::strategy::GeneticOptimizationStrategy;
//!
//! let graph = MatrixGraph::with_sentinel(
//!     [("Boston", 0), ("Albany", 1), ("Hartford", 2)],
//!     vec![
//!         vec![None, Some(272), Some(164)],
//!         vec![Some(272), None, Some(180)],
//!         vec![Some(164), None, None],
//!     ],
//! )
//! .unwrap();
//!
//! let strategy = GeneticOptimizationStrategy::new(StdRng::seed_from_u64(0));
//! let cycle = CycleFinder::new(Some(&graph), strategy).optimize().unwrap();
//! // Hartford → Albany is unresolved, so the tour runs the other way round
//! assert_eq!(cycle.cost(), 272 + 180 + 164);
//! ```

pub mod error;
pub mod finder;
pub mod graph;
pub mod path;
pub mod permutation;
pub mod strategy;
