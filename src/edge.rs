/*!
# Edge Representation

An [`Edge`] is a pair of endpoints. All graphs of this crate are undirected, so
`Edge(u, v)` and `Edge(v, u)` denote the same edge; the *normalized* form `u < v` is the
canonical key under which matchings store and report edge values.
*/

use std::fmt::{Debug, Display};

use crate::node::Node;

/// An edge is defined by two nodes/endpoints.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns the endpoint opposite to `u`.
    /// ** Panics (in debug builds) if `u` is not an endpoint **
    pub fn other(&self, u: Node) -> Node {
        debug_assert!(self.0 == u || self.1 == u);
        if self.0 == u { self.1 } else { self.0 }
    }

    /// Simple bijection from `0..(n choose 2)` to all loop-free normalized edges of `n` nodes.
    ///
    /// Every node `u` is assigned the next `(n - 1)/2` nodes modulo `n` as neighbors (rounded
    /// up for the upper half of nodes if `n` is even); the resulting edge is normalized.
    pub fn from_u64_undir(mut x: u64, n: u64) -> Self {
        debug_assert!(x < n * (n - 1) / 2);

        let mut num_neighbors = (n - 1) / 2;
        if n & 1 == 1 {
            let u = x / num_neighbors;
            let v = (u + 1 + (x % num_neighbors)) % n;

            Edge(u as Node, v as Node).normalized()
        } else {
            let half_n = n / 2;
            let lower_half = num_neighbors * half_n;

            // lower half: `floor((n - 1) / 2)` neighbors per node, never wraps around
            if x < lower_half {
                let u = x / num_neighbors;
                let v = (u + 1 + (x % num_neighbors)) % n;

                return Edge(u as Node, v as Node);
            }

            // upper half: `ceil((n - 1) / 2)` neighbors per node
            x -= lower_half;
            num_neighbors += 1;

            let u = (x / num_neighbors) + half_n;
            let v = (u + 1 + (x % num_neighbors)) % n;

            Edge(u as Node, v as Node).normalized()
        }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

impl From<Edge> for (Node, Node) {
    fn from(value: Edge) -> Self {
        (value.0, value.1)
    }
}
