/*!
# Graph Generators

Random and deterministic graph builders, mainly used to produce test and benchmark instances
for the matching algorithms.

Generators follow a builder pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

The [`RandomGraph`] trait wraps this into constructors for every graph implementing
[`GraphFromScratch`], and [`GeneratorSubstructures`] adds paths, cycles and cliques to an
existing graph.

All generated graphs are simple: no self-loops and no parallel edges.
*/

use num::{One, Zero};
use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    /// ** Panics if `p` is not in `[0, 1]` **
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates a random `G(n,p)` graph with `p = avg_deg / (n - 1)`.
    /// ** Panics if the resulting probability is not in `[0, 1]` **
    fn gnp_avg_deg<R>(rng: &mut R, n: NumNodes, avg_deg: f64) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).prob(p).stream(rng))
    }

    fn gnp_avg_deg<R>(rng: &mut R, n: NumNodes, avg_deg: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).avg_deg(avg_deg).stream(rng))
    }
}

/// Values that can be checked to be valid probabilities
pub trait Probability {
    /// Returns *true* if the value lies in `[0, 1]`
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
