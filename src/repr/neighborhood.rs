use smallvec::{Array, SmallVec};

use super::*;

/// Neighborhood stored as a plain vector
#[derive(Default, Clone, Debug)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn as_slice(&self) -> &[Node] {
        &self.0
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }
}

/// Like `ArrNeighborhood` but uses `SmallVec<[Node; N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Default, Clone, Debug)]
pub struct SparseNeighborhood<const N: usize = 8>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn as_slice(&self) -> &[Node] {
        &self.0
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }
}
