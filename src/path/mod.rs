//! Walk cost model over a [`WeightedGraph`](crate::graph::WeightedGraph).
//!
//! - [`Path`] — open walk, cost of the n−1 consecutive legs
//! - [`Cycle`] — closed walk, adds the leg from the last label back to the first

mod cycle;
mod open;

pub use cycle::Cycle;
pub use open::Path;

use crate::error::PathError;
use crate::graph::{Weight, WeightedGraph};

/// Sums the weights of `order[i] → order[i + 1]` for each `i` in `starts`,
/// wrapping the successor index around the end of `order`.
///
/// Saturates at `Weight::MAX` so sentinel legs never wrap negative.
fn sum_legs<G: WeightedGraph>(
    graph: &G,
    order: &[G::Label],
    mut starts: impl Iterator<Item = usize>,
) -> Result<Weight, PathError> {
    let n = order.len();
    starts.try_fold(0 as Weight, |total, i| {
        let w = graph
            .weight(&order[i], &order[(i + 1) % n])
            .ok_or(PathError::MissingEdge { position: i })?;
        Ok(total.saturating_add(w))
    })
}
