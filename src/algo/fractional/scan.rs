use super::*;

/// An edge `(u, v)` from a `Plus`-vertex `u` found by [`scan`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanHit {
    /// `v` is labeled `Plus` as well: a path (distinct roots) or a cycle (shared root) closes
    Plus(Node, Node),
    /// `v` is unlabeled and `x(u, v) < 1`: the forest grows or a half-cycle is found
    Unlabeled(Node, Node),
}

/// Searches the next edge to act on.
///
/// Vertices `u` labeled `Plus` are visited in ascending order, their neighbors `v` in
/// adjacency order. `Minus`-neighbors are skipped; the first `v` that is either labeled `Plus`
/// or unlabeled with `x(u, v) < 1` is returned. Returns `None` if no such edge exists, which
/// proves the current matching maximum.
pub fn scan<G>(graph: &G, labeling: &Labeling, state: &MatchingState) -> Option<ScanHit>
where
    G: AdjacencyList,
{
    graph
        .vertices()
        .filter(|&u| labeling.label(u) == Label::Plus)
        .find_map(|u| {
            graph.neighbors_of(u).find_map(|v| match labeling.label(v) {
                Label::Minus => None,
                Label::Plus => Some(ScanHit::Plus(u, v)),
                Label::Unlabeled => {
                    (state.value(u, v) < EdgeValue::One).then_some(ScanHit::Unlabeled(u, v))
                }
            })
        })
}
