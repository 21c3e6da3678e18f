/*!
# Graph Representations

Storage backends for simple undirected graphs:

- [`AdjArrayUndir`]: one `Vec<Node>` per vertex,
- [`SparseAdjArrayUndir`]: one inline `SmallVec` per vertex, preferable for sparse graphs,
- [`LabeledGraph`]: an adapter for graphs whose vertices carry arbitrary ordered labels.

Neighbors are kept in insertion order; this order is what algorithms iterate over, which
makes every solve reproducible for a fixed sequence of edge insertions.

[`validate_simple_graph`] checks the preconditions of the matching algorithms (no
self-loops, no parallel edges, symmetric adjacency) on any [`AdjacencyList`].
*/

use crate::{error::*, ops::*, prelude::*};

mod labeled;
mod neighborhood;
mod undirected;

pub use labeled::*;
pub use neighborhood::*;
pub use undirected::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone + Default {
    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns the neighbors in insertion order
    fn as_slice(&self) -> &[Node];

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.as_slice().contains(&v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    /// This might lead to Multi-Edges.
    fn add_neighbor(&mut self, u: Node);
}

/// Checks that `graph` is a simple undirected graph:
/// every neighbor is in range, no vertex is its own neighbor, no neighbor is listed twice
/// and every adjacency `u -> v` is mirrored by `v -> u`.
pub fn validate_simple_graph<G>(graph: &G) -> Result<()>
where
    G: AdjacencyList,
{
    let n = graph.number_of_nodes();
    let mut seen = graph.vertex_bitset_unset();

    for u in graph.vertices() {
        seen.clear_all();
        for v in graph.neighbors_of(u) {
            if v >= n {
                return Err(Error::NodeOutOfRange { node: v, n });
            }
            if v == u {
                return Err(Error::SelfLoop(u));
            }
            if seen.set_bit(v) {
                return Err(Error::ParallelEdge(u.min(v), u.max(v)));
            }
        }

        // `seen` now holds N(u); every neighbor must list `u` in return
        for v in graph.neighbors_of(u) {
            if !graph.neighbors_of(v).any(|w| w == u) {
                return Err(Error::AsymmetricAdjacency(u, v));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_graph() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(validate_simple_graph(&graph), Ok(()));
        assert_eq!(validate_simple_graph(&AdjArrayUndir::new(0)), Ok(()));
    }

    #[test]
    fn rejects_self_loop() {
        let mut graph = AdjArrayUndir::from_edges(3, [(0, 1)]);
        graph.add_edge(2, 2);
        assert_eq!(validate_simple_graph(&graph), Err(Error::SelfLoop(2)));
    }

    #[test]
    fn rejects_parallel_edge() {
        let mut graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        graph.add_edge_unchecked(2, 1);
        assert_eq!(validate_simple_graph(&graph), Err(Error::ParallelEdge(1, 2)));
    }
}
