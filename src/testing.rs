//! Shared helpers for the unit tests of this crate

use crate::{algo::*, prelude::*};

/// Builds a graph from edges with 1-indexed endpoints `1..=n`
pub fn graph_from_one_based<I>(n: NumNodes, edges: I) -> AdjArrayUndir
where
    I: IntoIterator<Item = (Node, Node)>,
{
    AdjArrayUndir::from_edges(n, edges.into_iter().map(|(u, v)| Edge(u - 1, v - 1)))
}

/// Builds a matching from edges with 1-indexed endpoints
pub fn matching_from_one_based<I>(edges: I) -> FractionalMatching
where
    I: IntoIterator<Item = ((Node, Node), EdgeValue)>,
{
    FractionalMatching::from_edges(
        edges
            .into_iter()
            .map(|((u, v), x)| (Edge(u - 1, v - 1), x)),
    )
}

/// Asserts that `matching` is a fractional matching of `graph` in canonical form:
/// sorted normalized edges of `graph`, values `1/2` or `1`, loads at most `1`
pub fn assert_canonical_matching<G>(graph: &G, matching: &FractionalMatching)
where
    G: AdjacencyTest,
{
    let edges: Vec<_> = matching.iter().map(|(e, _)| e).collect();
    assert!(edges.windows(2).all(|w| w[0] < w[1]), "edges not sorted");
    assert!(edges.iter().all(|e| e.0 < e.1), "edges not normalized");
    assert!(
        matching.iter().all(|(_, x)| !x.is_zero()),
        "zero value reported"
    );
    assert!(matching.is_feasible_for(graph), "capacity or edge violated");
}
