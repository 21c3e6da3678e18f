/*!
`fracmatch` computes **maximum fractional matchings** of simple undirected graphs.

A fractional matching assigns every edge a value in `[0, 1]` such that the values incident to
any vertex sum to at most `1`. Some maximum fractional matching only uses the values
`{0, 1/2, 1}`; this crate finds one with a combinatorial primal-dual algorithm that grows
alternating forests and augments along paths and odd cycles. No LP solver is involved.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; as all graphs are undirected,
`Edge(u, v)` and `Edge(v, u)` denote the same edge and results always report the normalized
form `u < v`.

Edge values are exact: [`EdgeValue`](crate::algo::EdgeValue) is one of `Zero`, `Half`, `One`
and totals are counted in halves.

Graphs with arbitrary (ordered) vertex labels are supported through
[`LabeledGraph`](crate::repr::LabeledGraph).

# Design

Algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before running them on a provided graph.
The most common functionality is also implemented via traits on the graph itself:

```rust
use fracmatch::{prelude::*, algo::*};

let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
let matching = graph.maximum_fractional_matching().unwrap();

assert_eq!(matching.total_value(), 1.5);
assert_eq!(matching.value_of(0, 2), EdgeValue::Half);
```

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all graph representations,
- [`algo`] includes the fractional matching solver, an independent bipartite double cover oracle and a greedy baseline,
- [`gens`] includes random graph generators and deterministic substructures such as paths/cycles/cliques,
- [`io`] includes handlers for reading graphs and writing/reading matchings.

Errors are reported via [`error::Error`]; IO keeps `std::io::Error`.
Solver progress is forwarded to the [`log`](https://docs.rs/log) facade by default.

In most use-cases, `use fracmatch::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

/// `fracmatch::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
