use std::{collections::BTreeMap, fmt::Debug};

use itertools::Itertools;

use super::*;
use crate::algo::{EdgeValue, MaximumFractionalMatching};

/// A simple undirected graph whose vertices carry arbitrary ordered labels.
///
/// Labels are mapped onto dense ids by rank, i.e. the id order coincides with the
/// label order. Hence canonical edges `(a, b)` with `a < b` are preserved when results are
/// translated back, and vertices are scanned in label order.
#[derive(Clone, Debug)]
pub struct LabeledGraph<V> {
    labels: Vec<V>,
    graph: AdjArrayUndir,
}

impl<V> LabeledGraph<V>
where
    V: Ord + Clone + Debug,
{
    /// Builds the graph from labeled edges. Neighbor order follows the order of `edges`.
    /// Self-loops and parallel edges are rejected.
    pub fn try_from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        Self::try_from_vertices_and_edges(std::iter::empty(), edges)
    }

    /// Like [`LabeledGraph::try_from_edges`] but additionally registers (possibly isolated)
    /// vertices.
    pub fn try_from_vertices_and_edges<N, I>(vertices: N, edges: I) -> Result<Self>
    where
        N: IntoIterator<Item = V>,
        I: IntoIterator<Item = (V, V)>,
    {
        let edges = edges.into_iter().collect_vec();
        let labels = vertices
            .into_iter()
            .chain(edges.iter().flat_map(|(a, b)| [a.clone(), b.clone()]))
            .sorted()
            .dedup()
            .collect_vec();

        let mut result = Self {
            graph: AdjArrayUndir::new(labels.len() as NumNodes),
            labels,
        };

        for (a, b) in &edges {
            let (u, v) = (result.try_node_of(a)?, result.try_node_of(b)?);
            if u == v {
                return Err(Error::SelfLoop(u));
            }
            if result.graph.try_add_edge(u, v) {
                return Err(Error::ParallelEdge(u.min(v), u.max(v)));
            }
        }

        Ok(result)
    }

    /// Returns the id assigned to `label`
    pub fn try_node_of(&self, label: &V) -> Result<Node> {
        self.labels
            .binary_search(label)
            .map(|i| i as Node)
            .map_err(|_| Error::UnknownLabel(format!("{label:?}")))
    }

    /// Returns the label of node `u`
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &V {
        &self.labels[u as usize]
    }

    /// Returns the underlying dense graph
    pub fn graph(&self) -> &AdjArrayUndir {
        &self.graph
    }

    /// Computes a maximum fractional matching and reports it in terms of labels.
    /// Every key `(a, b)` satisfies `a < b`; only edges with non-zero value are included.
    pub fn maximum_fractional_matching(&self) -> Result<BTreeMap<(V, V), EdgeValue>> {
        Ok(self
            .graph
            .maximum_fractional_matching()?
            .iter()
            .map(|(Edge(u, v), value)| {
                ((self.label_of(u).clone(), self.label_of(v).clone()), value)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_label_order() {
        let graph = LabeledGraph::try_from_edges([("d", "b"), ("a", "c")]).unwrap();
        assert_eq!(graph.try_node_of(&"a"), Ok(0));
        assert_eq!(graph.try_node_of(&"d"), Ok(3));
        assert_eq!(*graph.label_of(1), "b");
        assert!(graph.try_node_of(&"z").is_err());
        assert_eq!(graph.graph().number_of_edges(), 2);
    }

    #[test]
    fn rejects_malformed_edges() {
        assert_eq!(
            LabeledGraph::try_from_edges([(1, 2), (2, 1)]).unwrap_err(),
            Error::ParallelEdge(0, 1)
        );
        assert_eq!(
            LabeledGraph::try_from_edges([(1, 2), (3, 3)]).unwrap_err(),
            Error::SelfLoop(2)
        );
    }

    #[test]
    fn matching_reported_in_labels() {
        let graph =
            LabeledGraph::try_from_edges([("x", "y"), ("x", "z"), ("y", "z"), ("z", "w")]).unwrap();
        let matching = graph.maximum_fractional_matching().unwrap();

        let total: f64 = matching.values().map(|x| x.as_f64()).sum();
        assert_eq!(total, 2.0);
        assert!(matching.keys().all(|(a, b)| a < b));
    }

    #[test]
    fn isolated_vertices_are_kept() {
        let graph = LabeledGraph::try_from_vertices_and_edges([10, 5], [(1, 2)]).unwrap();
        assert_eq!(graph.graph().number_of_nodes(), 4);
        assert_eq!(graph.try_node_of(&10), Ok(3));
        assert_eq!(graph.maximum_fractional_matching().unwrap().len(), 1);
    }
}
