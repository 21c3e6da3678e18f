/*!
# Integral Matchings

A greedy **maximal matching** serves as a baseline for the fractional solvers: it is
computed in linear time and every maximum fractional matching has at least its size.

A *matching* is a set of edges without shared endpoints.
- A **maximal matching** cannot be extended by adding another edge, but may not be optimal in size.
- A **maximum matching** is the largest possible matching.
*/

use super::*;

/// Greedy matching algorithms on undirected graphs.
pub trait Matching: AdjacencyList {
    /// Computes a **maximal matching** in an undirected graph.
    ///
    /// Each edge `{u, v}` in the matching is returned only once as `(u, v)` with `u <= v`.
    /// The resulting vector is sorted lexicographically.
    fn maximal_undirected_matching(&self) -> Vec<(Node, Node)>;

    /// Returns the greedy maximal matching as an integral [`FractionalMatching`]
    fn maximal_matching_as_fractional(&self) -> FractionalMatching {
        FractionalMatching::from_edges(
            self.maximal_undirected_matching()
                .into_iter()
                .map(|e| (e, EdgeValue::One)),
        )
    }
}

impl<G> Matching for G
where
    G: AdjacencyList,
{
    /// Greedy maximal matching implementation:
    /// - Iterates through vertices in ascending order
    /// - Picks the first available unmatched neighbor
    /// - Marks both endpoints as matched
    fn maximal_undirected_matching(&self) -> Vec<(Node, Node)> {
        let mut matching = Vec::new();
        let mut matched = NodeBitSet::new(self.number_of_nodes());

        for u in self.vertices() {
            if matched.get_bit(u) {
                continue;
            }

            if let Some(v) = self.neighbors_of(u).find(|&v| !matched.get_bit(v)) {
                matched.set_bit(u);
                matched.set_bit(v);
                matching.push((u, v));
            }
        }

        matching
    }
}
