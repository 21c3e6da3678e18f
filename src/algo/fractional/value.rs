use std::{collections::BTreeMap, fmt::Display};

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;

/// The value of an edge in a half-integral fractional matching.
///
/// Values are handled in *halves* (`Zero = 0`, `Half = 1`, `One = 2`) so that all arithmetic
/// and comparisons are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum EdgeValue {
    #[default]
    Zero = 0,
    Half = 1,
    One = 2,
}

impl EdgeValue {
    /// Returns the value in multiples of `1/2`
    pub const fn halves(self) -> u32 {
        self as u32
    }

    /// Inverse of [`EdgeValue::halves`]; `None` for anything above `2`
    pub const fn from_halves(halves: u32) -> Option<Self> {
        match halves {
            0 => Some(EdgeValue::Zero),
            1 => Some(EdgeValue::Half),
            2 => Some(EdgeValue::One),
            _ => None,
        }
    }

    pub fn as_f64(self) -> f64 {
        self.halves() as f64 / 2.0
    }

    /// `1 - x`, the flip applied along augmenting paths
    pub const fn complement(self) -> Self {
        match self {
            EdgeValue::Zero => EdgeValue::One,
            EdgeValue::Half => EdgeValue::Half,
            EdgeValue::One => EdgeValue::Zero,
        }
    }

    /// `1/2 -> 0` and everything else `-> 1/2`, the toggle applied along odd cycles
    pub const fn toggle_half(self) -> Self {
        match self {
            EdgeValue::Half => EdgeValue::Zero,
            _ => EdgeValue::Half,
        }
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, EdgeValue::Zero)
    }
}

impl Display for EdgeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeValue::Zero => write!(f, "0"),
            EdgeValue::Half => write!(f, "0.5"),
            EdgeValue::One => write!(f, "1"),
        }
    }
}

impl From<EdgeValue> for f64 {
    fn from(value: EdgeValue) -> Self {
        value.as_f64()
    }
}

/// The mutable matching state of a solver: the value of every edge plus the per-vertex load.
///
/// Values are keyed by the normalized edge, so lookups are symmetric. Zero values are not
/// stored. Loads and the running total are kept in halves and updated on every write; during
/// a single augmentation a load may temporarily exceed `2`, outside of it
/// [`MatchingState::check_capacity`] holds.
#[derive(Debug, Clone, Default)]
pub struct MatchingState {
    values: FxHashMap<Edge, EdgeValue>,
    load: Vec<u32>,
    total: u64,
}

impl MatchingState {
    /// Creates the empty matching for a graph with `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            values: FxHashMap::default(),
            load: vec![0; n as usize],
            total: 0,
        }
    }

    /// Returns the number of nodes the state was created for
    pub fn number_of_nodes(&self) -> NumNodes {
        self.load.len() as NumNodes
    }

    /// Returns the value of edge `{u, v}`; edges never written have value zero
    pub fn value(&self, u: Node, v: Node) -> EdgeValue {
        self.values
            .get(&Edge(u, v).normalized())
            .copied()
            .unwrap_or_default()
    }

    /// Sets the value of edge `{u, v}` and returns the previous value
    /// ** Panics if `u >= n || v >= n` **
    pub fn set_value(&mut self, u: Node, v: Node, value: EdgeValue) -> EdgeValue {
        debug_assert_ne!(u, v);
        let key = Edge(u, v).normalized();
        let old = if value.is_zero() {
            self.values.remove(&key)
        } else {
            self.values.insert(key, value)
        }
        .unwrap_or_default();

        for x in [u, v] {
            let load = &mut self.load[x as usize];
            *load = *load + value.halves() - old.halves();
        }
        self.total = self.total + value.halves() as u64 - old.halves() as u64;

        old
    }

    /// Replaces `x(u, v)` by `1 - x(u, v)`
    pub fn complement_edge(&mut self, u: Node, v: Node) {
        let value = self.value(u, v);
        self.set_value(u, v, value.complement());
    }

    /// Replaces `x(u, v)` by `0` if it is `1/2` and by `1/2` otherwise
    pub fn toggle_half_edge(&mut self, u: Node, v: Node) {
        let value = self.value(u, v);
        self.set_value(u, v, value.toggle_half());
    }

    /// Returns the sum of values incident to `u` in halves
    pub fn load_of(&self, u: Node) -> u32 {
        self.load[u as usize]
    }

    /// Returns *true* if the values incident to `u` sum to (at least) `1`
    pub fn is_saturated(&self, u: Node) -> bool {
        self.load_of(u) >= EdgeValue::One.halves()
    }

    /// Returns the total value of the matching in halves
    pub fn total_halves(&self) -> u64 {
        self.total
    }

    /// Returns the total value of the matching
    pub fn total_value(&self) -> f64 {
        self.total as f64 / 2.0
    }

    /// Returns the number of edges with value `1/2`
    pub fn num_half_edges(&self) -> usize {
        self.values
            .values()
            .filter(|&&x| x == EdgeValue::Half)
            .count()
    }

    /// Verifies the capacity invariant: every vertex has load at most `1`
    pub fn check_capacity(&self) -> Result<()> {
        match self
            .load
            .iter()
            .find_position(|&&l| l > EdgeValue::One.halves())
        {
            Some((node, &halves)) => Err(Error::CapacityExceeded {
                node: node as Node,
                halves,
            }),
            None => Ok(()),
        }
    }

    /// Extracts the canonical, sorted result
    pub fn to_matching(&self) -> FractionalMatching {
        FractionalMatching::from_sorted_unchecked(
            self.values
                .iter()
                .map(|(&e, &x)| (e, x))
                .sorted_unstable()
                .collect(),
        )
    }
}

/// A half-integral fractional matching in canonical form.
///
/// Holds every edge `(u, v)` with `u < v` and non-zero value exactly once, sorted by edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FractionalMatching {
    edges: Vec<(Edge, EdgeValue)>,
}

impl FractionalMatching {
    /// Builds a matching from arbitrary `(edge, value)` pairs: edges are normalized, zero
    /// values dropped and the result sorted. If an edge occurs more than once, the last
    /// occurrence wins.
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = (E, EdgeValue)>,
        E: Into<Edge>,
    {
        let map: BTreeMap<Edge, EdgeValue> = edges
            .into_iter()
            .map(|(e, x)| (e.into().normalized(), x))
            .collect();

        Self::from_sorted_unchecked(map.into_iter().filter(|(_, x)| !x.is_zero()).collect())
    }

    fn from_sorted_unchecked(edges: Vec<(Edge, EdgeValue)>) -> Self {
        debug_assert!(edges.iter().all(|(e, x)| e.0 < e.1 && !x.is_zero()));
        debug_assert!(edges.is_sorted_by(|a, b| a.0 < b.0));
        Self { edges }
    }

    /// Iterates over all edges with non-zero value in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (Edge, EdgeValue)> + '_ {
        self.edges.iter().copied()
    }

    /// Returns the number of edges with non-zero value
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the value of edge `{u, v}`
    pub fn value_of(&self, u: Node, v: Node) -> EdgeValue {
        let key = Edge(u, v).normalized();
        self.edges
            .binary_search_by_key(&key, |&(e, _)| e)
            .map_or(EdgeValue::Zero, |i| self.edges[i].1)
    }

    /// Returns the total value in halves
    pub fn total_halves(&self) -> u64 {
        self.edges.iter().map(|(_, x)| x.halves() as u64).sum()
    }

    /// Returns the total value
    pub fn total_value(&self) -> f64 {
        self.total_halves() as f64 / 2.0
    }

    /// Returns the number of edges with value `1/2`
    pub fn num_half_edges(&self) -> usize {
        self.edges
            .iter()
            .filter(|(_, x)| *x == EdgeValue::Half)
            .count()
    }

    /// Returns the number of edges with value `1`
    pub fn num_full_edges(&self) -> usize {
        self.len() - self.num_half_edges()
    }

    /// Returns the sum of values incident to `u` in halves
    pub fn load_of(&self, u: Node) -> u32 {
        self.iter()
            .filter(|(Edge(a, b), _)| *a == u || *b == u)
            .map(|(_, x)| x.halves())
            .sum()
    }

    /// Returns the load (in halves) of every vertex `0..n`.
    /// ** Panics if an endpoint is `>= n` **
    pub fn loads(&self, n: NumNodes) -> Vec<u32> {
        let mut loads = vec![0; n as usize];
        for (Edge(u, v), x) in self.iter() {
            loads[u as usize] += x.halves();
            loads[v as usize] += x.halves();
        }
        loads
    }

    /// Returns *true* if every edge exists in `graph` and no vertex has load above `1`
    pub fn is_feasible_for<G>(&self, graph: &G) -> bool
    where
        G: AdjacencyTest,
    {
        let n = graph.number_of_nodes();
        self.iter()
            .all(|(Edge(u, v), _)| u < n && v < n && graph.has_edge(u, v))
            && self
                .loads(n)
                .into_iter()
                .all(|l| l <= EdgeValue::One.halves())
    }

    pub fn to_btree_map(&self) -> BTreeMap<Edge, EdgeValue> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_value_arithmetic() {
        use EdgeValue::*;

        assert_eq!([Zero, Half, One].map(EdgeValue::complement), [One, Half, Zero]);
        assert_eq!([Zero, Half, One].map(EdgeValue::toggle_half), [Half, Zero, Half]);
        assert_eq!([Zero, Half, One].map(EdgeValue::as_f64), [0.0, 0.5, 1.0]);
        assert_eq!(EdgeValue::from_halves(3), None);
        assert_eq!(Half.to_string(), "0.5");
    }

    #[test]
    fn state_tracks_loads_and_total() {
        let mut state = MatchingState::new(4);
        state.set_value(0, 1, EdgeValue::One);
        state.set_value(2, 1, EdgeValue::Zero);
        state.set_value(3, 2, EdgeValue::Half);

        assert_eq!(state.value(1, 0), EdgeValue::One);
        assert_eq!(state.value(2, 3), EdgeValue::Half);
        assert_eq!(state.value(0, 3), EdgeValue::Zero);
        assert_eq!(state.total_halves(), 3);
        assert_eq!((0..4).map(|u| state.load_of(u)).collect_vec(), vec![2, 2, 1, 1]);
        assert!(state.is_saturated(0) && !state.is_saturated(3));

        state.complement_edge(1, 0);
        state.toggle_half_edge(2, 3);
        assert_eq!(state.total_halves(), 0);
        assert!(state.to_matching().is_empty());
        assert_eq!(state.check_capacity(), Ok(()));
    }

    #[test]
    fn capacity_violation_is_reported() {
        let mut state = MatchingState::new(3);
        state.set_value(0, 1, EdgeValue::One);
        state.set_value(1, 2, EdgeValue::Half);
        assert_eq!(
            state.check_capacity(),
            Err(Error::CapacityExceeded { node: 1, halves: 3 })
        );
    }

    #[test]
    fn canonical_matching() {
        let matching = FractionalMatching::from_edges([
            ((3, 1), EdgeValue::Half),
            ((0, 2), EdgeValue::Zero),
            ((1, 2), EdgeValue::Half),
            ((0, 4), EdgeValue::One),
        ]);

        assert_eq!(
            matching.iter().collect_vec(),
            vec![
                (Edge(0, 4), EdgeValue::One),
                (Edge(1, 2), EdgeValue::Half),
                (Edge(1, 3), EdgeValue::Half)
            ]
        );
        assert_eq!(matching.value_of(4, 0), EdgeValue::One);
        assert_eq!(matching.value_of(0, 2), EdgeValue::Zero);
        assert_eq!(matching.total_value(), 2.0);
        assert_eq!(matching.num_half_edges(), 2);
        assert_eq!(matching.num_full_edges(), 1);
        assert_eq!(matching.loads(5), vec![2, 2, 1, 1, 2]);
        assert_eq!(matching.load_of(1), 2);
    }
}
