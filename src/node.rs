/*!
# Node Representation

Vertices are dense `u32` ids `0..n`. Their integer order is the total order used to
canonicalize edges (`u < v`) and to walk vertices deterministically while solving.
Graphs with arbitrary labels are mapped onto this range by [`LabeledGraph`](crate::repr::LabeledGraph).
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// A niche-packed `Option<Node>`: `Option<OptionalNodeImpl<N>>` occupies exactly 4 bytes.
///
/// Used for per-vertex pointers such as the predecessor forest of the solver where one
/// entry per vertex is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// `INVALID_NODE` is never a valid vertex and serves as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}
