//! Searching explicit [`petgraph`] graphs through the same engine.

use itertools::Itertools;
use petgraph::graphmap::{NodeTrait, UnGraphMap};

use crate::engine::Space;

/// A [`Space`] over an explicit undirected graph.
///
/// Most callers never materialize their search space, but when a domain already lives in a
/// [`UnGraphMap`] (warp-style connectivity, precomputed adjacency), this adapter lets the same
/// engine search it. Edges already encode the full connectivity, so every enumerated neighbor
/// is a valid move.
///
/// Neighbor order follows the graph's adjacency storage, which for [`UnGraphMap`] is insertion
/// order: deterministic for a deterministically built graph.
pub struct GraphSpace<'a, N, E>
where
    N: NodeTrait,
{
    graph: &'a UnGraphMap<N, E>,
}

impl<'a, N, E> From<&'a UnGraphMap<N, E>> for GraphSpace<'a, N, E>
where
    N: NodeTrait,
{
    fn from(graph: &'a UnGraphMap<N, E>) -> Self {
        Self { graph }
    }
}

impl<N, E> Space for GraphSpace<'_, N, E>
where
    N: NodeTrait,
{
    type State = N;

    fn neighbors(&self, state: N) -> Vec<N> {
        self.graph.neighbors(state).collect_vec()
    }

    fn is_valid(&self, _from: N, _to: N) -> bool {
        true
    }
}
