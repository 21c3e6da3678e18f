use itertools::Either;
use rand_distr::Geometric;

use super::*;

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every one of the `n(n-1)/2` possible edges independently with
/// probability `p`.
///
/// Instead of a coin flip per pair, the generator draws geometrically distributed gaps between
/// consecutive chosen pair indices and maps indices onto edges via [`Edge::from_u64_undir`].
/// Edges are thus normalized, loop-free and unique.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: u64,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = GnpType::Prob(prob);
        self
    }

    fn resolve_prob(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = if self.n < 2 {
                    0.0
                } else {
                    d / (self.n - 1) as f64
                };
                assert!(
                    p.is_valid_probability(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/(n - 1)`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let p = self.resolve_prob();
        let n = self.n;
        let num_pairs = n * n.saturating_sub(1) / 2;
        let to_edge = move |x: u64| Edge::from_u64_undir(x, n);

        if p >= 1.0 {
            return Either::Left(Either::Left((0..num_pairs).map(to_edge)));
        }

        match Geometric::new(p) {
            Ok(distr) if p > 0.0 => Either::Right(
                GeometricJumps {
                    distr,
                    rng,
                    next: 0,
                    stop: num_pairs,
                }
                .map(to_edge),
            ),
            _ => Either::Left(Either::Right(std::iter::empty())),
        }
    }
}

/// Iterates over the indices `0..stop` that are hit with probability `p` each by jumping
/// geometrically distributed gaps
struct GeometricJumps<'a, R> {
    distr: Geometric,
    rng: &'a mut R,
    next: u64,
    stop: u64,
}

impl<R: Rng> Iterator for GeometricJumps<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.stop {
            return None;
        }

        // number of indices skipped before the next hit
        let gap = self.rng.sample(self.distr);
        match self.next.checked_add(gap) {
            Some(x) if x < self.stop => {
                self.next = x + 1;
                Some(x)
            }
            _ => {
                self.next = self.stop;
                None
            }
        }
    }
}
