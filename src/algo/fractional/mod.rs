/*!
# Maximum Fractional Matchings

A *fractional matching* assigns every edge a value `x(e) >= 0` such that the values incident
to any vertex sum to at most `1`. There always is a maximum fractional matching with values in
`{0, 1/2, 1}` whose `1/2`-edges form vertex-disjoint odd cycles; this module computes one.

The solver works in phases. Each phase
1. labels every unsaturated vertex as a `Plus`-root,
2. grows an alternating forest: a `Plus`-vertex reaches an unlabeled vertex `v` over an edge
   with value `< 1`, and `v` in turn reaches its partner `w` over an edge of value `1`,
3. stops at the first augmenting structure:
    - **type 1**: an edge between two trees, an augmenting path between two roots (`+1`),
    - **type 2**: an unlabeled vertex without a partner, lying on a cycle of `1/2`-edges,
      which is rounded to an integral matching before the path to it is flipped (`+1/2`),
    - **type 3**: an edge closing an odd cycle in one tree, which becomes a `1/2`-cycle
      while the path to its root is flipped (`+1/2`).

A phase without augmentation proves the matching maximum. Each augmentation increases the
value by at least `1/2` and the value is at most `n/2`, so there are at most `n` augmenting
phases, each costing `O(n * (n + m))`.

```
use fracmatch::{algo::*, prelude::*};

// triangle with a pendant vertex
let graph = AdjArrayUndir::from_edges(4, [(0, 1), (0, 2), (1, 2), (2, 3)]);
let matching = graph.maximum_fractional_matching().unwrap();

assert_eq!(matching.total_value(), 2.0);
assert_eq!(matching.value_of(2, 3), EdgeValue::One);
```
*/

use crate::{error::*, prelude::*};

mod augment;
mod events;
mod labels;
mod scan;
mod solver;
mod value;

pub use augment::*;
pub use events::*;
pub use labels::*;
pub use scan::*;
pub use solver::*;
pub use value::*;

/// Computes maximum fractional matchings directly on a graph
pub trait MaximumFractionalMatching: AdjacencyList {
    /// Returns a maximum half-integral fractional matching.
    /// Progress is reported to the `log` facade.
    ///
    /// Fails if the graph is not simple or an internal invariant is violated.
    fn maximum_fractional_matching(&self) -> Result<FractionalMatching> {
        FractionalMatchingSolver::new(self).solve()
    }
}

impl<G: AdjacencyList> MaximumFractionalMatching for G {}
