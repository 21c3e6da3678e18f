use super::*;

/// An undirected graph representation
#[derive(Clone, Debug)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

impl<Nbs: Neighborhood> UndirectedGraph<Nbs> {
    /// Creates a graph from a list of edges and verifies that it is simple.
    ///
    /// In contrast to [`GraphFromScratch::from_edges`], duplicates and self-loops are not
    /// silently skipped but rejected, and endpoints out of range yield an error instead of
    /// a panic.
    pub fn try_from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        let mut graph = Self::new(n);
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            if let Some(node) = [u, v].into_iter().find(|&x| x >= n) {
                return Err(Error::NodeOutOfRange { node, n });
            }
            if u == v {
                return Err(Error::SelfLoop(u));
            }
            if graph.try_add_edge(u, v) {
                return Err(Error::ParallelEdge(u.min(v), u.max(v)));
            }
        }
        Ok(graph)
    }

    /// Adds the edge `{u, v}` without checking whether it exists already.
    /// Adding an existing edge creates a parallel edge, which the solver rejects.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_edge_unchecked(&mut self, u: Node, v: Node) {
        self.nbs[u as usize].add_neighbor(v);
        if u != v {
            self.nbs[v as usize].add_neighbor(u);
        }
        self.num_edges += 1;
    }

    /// Returns the neighborhood of `u` as a slice in insertion order
    /// ** Panics if `u >= n` **
    pub fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.nbs[u as usize].as_slice()
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::default(); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].as_slice().iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.nbs[u as usize].try_add_neighbor(v) {
            if u != v {
                assert!(!self.nbs[v as usize].try_add_neighbor(u));
            }
            self.num_edges += 1;
            false
        } else {
            true
        }
    }
}
