/*!
# Graph Algorithms

Matching algorithms built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use fracmatch::algo::*;
```

- [`fractional`]: the combinatorial solver for maximum half-integral fractional matchings,
  available as `graph.maximum_fractional_matching()` or configurable via
  [`FractionalMatchingSolver`],
- [`DoubleCoverOracle`]: the same optimum computed through a bipartite matching, used for
  cross-validation,
- [`Matching`]: a greedy maximal (integral) matching as baseline.
*/

pub mod fractional;
mod matching;
mod oracle;

use crate::prelude::*;

pub use fractional::*;
pub use matching::*;
pub use oracle::*;
