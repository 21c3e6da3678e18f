/*!
# Double Cover Oracle

An independent way to compute maximum fractional matchings, used to cross-check the
combinatorial solver.

The *bipartite double cover* of `G` has two copies `u⁺, u⁻` of every vertex and the edges
`(u⁺, v⁻)` and `(v⁺, u⁻)` for every edge `{u, v}`. For a maximum matching `M` of the double cover,
`x(u, v) = ([u⁺v⁻ ∈ M] + [v⁺u⁻ ∈ M]) / 2` is a fractional matching of value `|M| / 2`, which
is the optimum of the fractional matching LP. The bipartite matching is computed with
Hopcroft-Karp.
*/

use std::collections::VecDeque;

use fxhash::FxHashMap;

use super::*;

/// Computes maximum fractional matchings via the bipartite double cover
pub trait DoubleCoverOracle: AdjacencyList {
    /// Returns a maximum fractional matching with values in `{0, 1/2, 1}`.
    ///
    /// The value equals the one of [`MaximumFractionalMatching::maximum_fractional_matching`],
    /// the assignment may differ (e.g. `1/2` on even cycles).
    /// The graph is assumed to be simple.
    fn double_cover_fractional_matching(&self) -> FractionalMatching {
        let partner = double_cover_matching(self);

        let mut values: FxHashMap<Edge, u32> = FxHashMap::default();
        for (u, &v) in partner.iter().enumerate() {
            if v != INVALID_NODE {
                *values.entry(Edge(u as Node, v).normalized()).or_default() += 1;
            }
        }

        FractionalMatching::from_edges(
            values
                .into_iter()
                .filter_map(|(e, halves)| EdgeValue::from_halves(halves).map(|x| (e, x))),
        )
    }
}

impl<G: AdjacencyList> DoubleCoverOracle for G {}

/// Hopcroft-Karp on the double cover: left vertex `u` stands for `u⁺`, right vertex `v` for
/// `v⁻`, and the neighbors of `u⁺` are the neighbors of `u` in `graph`.
///
/// Returns the partner `v` of every `u⁺` or `INVALID_NODE`.
fn double_cover_matching<G: AdjacencyList>(graph: &G) -> Vec<Node> {
    const INF: u32 = u32::MAX / 2;

    let n = graph.len();
    let mut left = vec![INVALID_NODE; n];
    let mut right = vec![INVALID_NODE; n];
    let mut level = vec![INF; n];
    let mut queue = VecDeque::new();

    loop {
        // BFS layering from all free left vertices
        level.fill(INF);
        queue.clear();
        for u in graph.vertices() {
            if left[u as usize] == INVALID_NODE {
                level[u as usize] = 0;
                queue.push_back(u);
            }
        }

        while let Some(u) = queue.pop_front() {
            for v in graph.neighbors_of(u) {
                let w = right[v as usize];
                if w == INVALID_NODE || level[w as usize] != INF {
                    continue;
                }
                level[w as usize] = level[u as usize] + 1;
                queue.push_back(w);
            }
        }

        let mut found_augmenting_path = false;
        for u in graph.vertices() {
            if left[u as usize] == INVALID_NODE
                && augment_from(graph, u, &mut left, &mut right, &mut level)
            {
                found_augmenting_path = true;
            }
        }

        if !found_augmenting_path {
            return left;
        }
    }
}

/// Layered DFS for an augmenting path starting at the free left vertex `root`.
/// The search keeps its own stack, so its depth is not limited by the call stack.
fn augment_from<G: AdjacencyList>(
    graph: &G,
    root: Node,
    left: &mut [Node],
    right: &mut [Node],
    level: &mut [u32],
) -> bool {
    let mut stack = vec![(root, graph.neighbors_of(root))];
    // `via[i]` is the right vertex leading from `stack[i]` to `stack[i + 1]`
    let mut via: Vec<Node> = Vec::new();

    while let Some((u, neighbors)) = stack.last_mut() {
        let u = *u;
        let next = neighbors.find(|&v| {
            let w = right[v as usize];
            w == INVALID_NODE || level[w as usize] == level[u as usize] + 1
        });

        let Some(v) = next else {
            // dead end: exclude `u` from further searches in this round
            level[u as usize] = u32::MAX;
            stack.pop();
            via.pop();
            continue;
        };

        let w = right[v as usize];
        if w != INVALID_NODE {
            via.push(v);
            stack.push((w, graph.neighbors_of(w)));
            continue;
        }

        left[u as usize] = v;
        right[v as usize] = u;
        for (&(x, _), &y) in stack.iter().zip(&via) {
            left[x as usize] = y;
            right[y as usize] = x;
        }
        return true;
    }

    false
}
