use fxhash::FxHashMap;

use super::*;

/// The structure along which a phase increased the matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AugmentationKind {
    /// Type 1: an alternating path between two distinct roots; gains `1`
    Path,
    /// Type 2: a cycle of `1/2`-edges made integral plus the path to it; gains `1/2`
    HalfCycle,
    /// Type 3: an odd alternating cycle through a single root; gains `1/2`
    RootCycle,
}

/// Result of [`label_or_augment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStep {
    /// The forest grew by `minus` and `plus`; scanning continues
    Extended { minus: Node, plus: Node },
    /// The matching was augmented; the phase ends
    Augmented(AugmentationKind),
}

/// Replaces `x` by `1 - x` on every edge of the walk `path`
fn complement_path(state: &mut MatchingState, path: impl IntoIterator<Item = Node>) {
    let mut path = path.into_iter();
    let Some(mut prev) = path.next() else {
        return;
    };
    for next in path {
        state.complement_edge(prev, next);
        prev = next;
    }
}

/// Flips the alternating path `root_u -> ... -> u -> v -> ... -> root_v` where
/// `path_u`/`path_v` run from `u`/`v` to their roots.
fn complement_root_path(state: &mut MatchingState, path_u: &[Node], path_v: &[Node]) {
    complement_path(state, path_u.iter().rev().chain(path_v.iter()).copied());
}

/// Augments along `(u, v)` where both endpoints are labeled `Plus`.
///
/// If the roots of `u` and `v` differ, the path between them is flipped (type 1). Otherwise
/// the odd cycle through `u`, `v` and their lowest common ancestor toggles between `0` and
/// `1/2`, and the path from the ancestor to the root is flipped (type 3).
pub fn augment(
    labeling: &Labeling,
    state: &mut MatchingState,
    u: Node,
    v: Node,
) -> Result<AugmentationKind> {
    let path_u = labeling.path_to_root(u)?;
    let path_v = labeling.path_to_root(v)?;

    if path_u.last() != path_v.last() {
        complement_root_path(state, &path_u, &path_v);
        return Ok(AugmentationKind::Path);
    }

    let position_u: FxHashMap<Node, usize> =
        path_u.iter().enumerate().map(|(i, &x)| (x, i)).collect();

    // both paths end in the same root, so an ancestor is always found
    let Some((idx_v, idx_u)) = path_v
        .iter()
        .enumerate()
        .find_map(|(i, x)| position_u.get(x).map(|&j| (i, j)))
    else {
        return Err(Error::BrokenForest(v));
    };

    // u -> ... -> lca -> ... -> v, closed by (v, u)
    let cycle = path_u[..=idx_u]
        .iter()
        .chain(path_v[..idx_v].iter().rev())
        .copied()
        .chain(std::iter::once(u));
    let mut prev = u;
    for next in cycle.skip(1) {
        state.toggle_half_edge(prev, next);
        prev = next;
    }

    complement_path(state, path_v[idx_v..].iter().copied());

    Ok(AugmentationKind::RootCycle)
}

/// Handles an edge `(u, v)` with `u` labeled `Plus`, `v` unlabeled and `x(u, v) < 1`.
///
/// If `v` has a matched edge `(v, w)` with value `1`, the forest is extended by
/// `u -> v -> w`. Otherwise all value at `v` lies on a cycle of `1/2`-edges: it is made
/// integral by alternating `0` and `1` starting at `v`, which exposes `v`, and then the path
/// from the root of `u` through `(u, v)` is flipped (type 2).
pub fn label_or_augment<G>(
    graph: &G,
    labeling: &mut Labeling,
    state: &mut MatchingState,
    u: Node,
    v: Node,
) -> Result<LabelStep>
where
    G: AdjacencyList,
{
    if let Some(w) = graph
        .neighbors_of(v)
        .find(|&w| state.value(v, w) == EdgeValue::One)
    {
        labeling.extend(u, v, w);
        return Ok(LabelStep::Extended { minus: v, plus: w });
    }

    let cycle = half_cycle_through(graph, state, v)?;

    for (i, &x) in cycle.iter().enumerate() {
        let y = cycle[(i + 1) % cycle.len()];
        let value = if i % 2 == 0 {
            EdgeValue::Zero
        } else {
            EdgeValue::One
        };
        state.set_value(x, y, value);
    }

    let path_u = labeling.path_to_root(u)?;
    complement_root_path(state, &path_u, &[v]);

    Ok(LabelStep::Augmented(AugmentationKind::HalfCycle))
}

/// Traces the cycle of `1/2`-edges through `start` by always moving to the first unvisited
/// neighbor over a `1/2`-edge. Returns the cycle's vertices beginning with `start`.
fn half_cycle_through<G>(graph: &G, state: &MatchingState, start: Node) -> Result<Vec<Node>>
where
    G: AdjacencyList,
{
    let mut visited = graph.vertex_bitset_unset();
    visited.set_bit(start);

    let mut cycle = vec![start];
    let mut current = start;
    while let Some(next) = graph
        .neighbors_of(current)
        .find(|&w| !visited.get_bit(w) && state.value(current, w) == EdgeValue::Half)
    {
        visited.set_bit(next);
        cycle.push(next);
        current = next;
    }

    if cycle.len() < 3 || state.value(current, start) != EdgeValue::Half {
        return Err(Error::MissingHalfCycle(start));
    }

    Ok(cycle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase_start(n: NumNodes, state: &MatchingState) -> Labeling {
        let mut labeling = Labeling::new(n);
        labeling.reset(state);
        labeling
    }

    #[test]
    fn type1_flips_path_between_roots() {
        // 0 - 1 = 2 - 3
        let mut state = MatchingState::new(4);
        state.set_value(1, 2, EdgeValue::One);
        let mut labeling = phase_start(4, &state);
        labeling.extend(0, 1, 2);

        assert_eq!(augment(&labeling, &mut state, 2, 3), Ok(AugmentationKind::Path));
        assert_eq!(
            state.to_matching(),
            FractionalMatching::from_edges([((0, 1), EdgeValue::One), ((2, 3), EdgeValue::One)])
        );
    }

    #[test]
    fn type3_on_triangle_makes_cycle_half() {
        // triangle 0, 1, 2 with (1, 2) matched; root 0
        let mut state = MatchingState::new(3);
        state.set_value(1, 2, EdgeValue::One);
        let mut labeling = phase_start(3, &state);
        labeling.extend(0, 1, 2);

        assert_eq!(augment(&labeling, &mut state, 2, 0), Ok(AugmentationKind::RootCycle));
        assert_eq!(state.total_halves(), 3);
        for (u, v) in [(0, 1), (1, 2), (0, 2)] {
            assert_eq!(state.value(u, v), EdgeValue::Half);
        }
        assert_eq!(state.check_capacity(), Ok(()));
    }

    #[test]
    fn type3_propagates_to_root() {
        // path 0 - 1 = 2 attached to the triangle 2, 3 = 4; root 0
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (2, 4)]);
        let mut state = MatchingState::new(5);
        state.set_value(1, 2, EdgeValue::One);
        state.set_value(3, 4, EdgeValue::One);
        let mut labeling = phase_start(5, &state);
        labeling.extend(0, 1, 2);
        labeling.extend(2, 3, 4);

        assert_eq!(augment(&labeling, &mut state, 4, 2), Ok(AugmentationKind::RootCycle));
        assert_eq!(state.total_halves(), 5);
        assert!(state.to_matching().is_feasible_for(&graph));
        assert_eq!(state.value(0, 1), EdgeValue::One);
        assert_eq!(state.value(2, 3), EdgeValue::Half);
    }

    #[test]
    fn label_extends_over_matched_edge() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        let mut state = MatchingState::new(3);
        state.set_value(1, 2, EdgeValue::One);
        let mut labeling = phase_start(3, &state);

        assert_eq!(
            label_or_augment(&graph, &mut labeling, &mut state, 0, 1),
            Ok(LabelStep::Extended { minus: 1, plus: 2 })
        );
        assert_eq!(labeling.label(2), Label::Plus);
        assert_eq!(labeling.predecessor(1), Some(0));
    }

    #[test]
    fn type2_resolves_half_triangle() {
        // triangle 0, 1, 2 of half-edges and a pendant 3 attached to 0
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (0, 2), (0, 3)]);
        let mut state = MatchingState::new(4);
        for (u, v) in [(0, 1), (1, 2), (0, 2)] {
            state.set_value(u, v, EdgeValue::Half);
        }
        let mut labeling = phase_start(4, &state);

        assert_eq!(
            label_or_augment(&graph, &mut labeling, &mut state, 3, 0),
            Ok(LabelStep::Augmented(AugmentationKind::HalfCycle))
        );
        assert_eq!(
            state.to_matching(),
            FractionalMatching::from_edges([((0, 3), EdgeValue::One), ((1, 2), EdgeValue::One)])
        );
    }

    #[test]
    fn type2_without_cycle_fails() {
        // 1 has a single half-edge; no cycle can close
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
        let mut state = MatchingState::new(3);
        state.set_value(1, 2, EdgeValue::Half);
        let mut labeling = phase_start(3, &state);

        assert_eq!(
            label_or_augment(&graph, &mut labeling, &mut state, 0, 1),
            Err(Error::MissingHalfCycle(1))
        );
    }
}
