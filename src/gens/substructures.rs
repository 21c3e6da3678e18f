/*!
# Substructure Generators

Adds **paths**, **cycles** and **cliques** to an existing graph. Odd cycles and cliques are the
structures on which fractional matchings take value `1/2`, which makes them the natural
building blocks for tests and benchmark instances.

# Example

```rust
use fracmatch::{prelude::*, gens::*};

let mut g = AdjArrayUndir::new(6);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique([0, 4, 5]);

assert_eq!(
    g.ordered_edges(true),
    vec![Edge(0, 1), Edge(0, 4), Edge(0, 5), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4), Edge(4, 5)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    /// ** Panics if an edge of the path already exists **
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
    /// node is connected back to the first.
    /// ** Panics if an edge of the cycle already exists **
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique**; edges that already exist are skipped.
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // avoids cloning the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur);
                prev = cur;
            }

            self.add_edge(prev, first);
        }
    }

    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().unique().collect_vec();
        for (u, v) in nodes.into_iter().tuple_combinations() {
            self.try_add_edge(u, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_and_cycle() {
        let mut g = AdjArrayUndir::new(5);
        g.connect_path([0, 1, 2]);
        g.connect_cycle([2, 3, 4]);

        assert_eq!(g.number_of_edges(), 5);
        assert!(g.has_edge(4, 2));
        assert_eq!(g.neighbors_of(2).collect::<Vec<_>>(), vec![1, 3, 4]);
    }

    #[test]
    fn clique_skips_existing_edges() {
        let mut g = AdjArrayUndir::new(4);
        g.connect_path([0, 1]);
        g.connect_clique([0, 1, 2, 3, 2]);

        assert_eq!(g.number_of_edges(), 6);
        assert_eq!(g.max_degree(), 3);
    }

    #[test]
    fn clique_from_single_pass_iterator() {
        let mut g = AdjArrayUndir::new(5);
        let mut next = 0;
        g.connect_clique(std::iter::from_fn(|| {
            next += 1;
            (next <= 6).then_some(next % 4)
        }));

        // yields 1, 2, 3, 0, 1, 2
        assert_eq!(g.number_of_edges(), 6);
        assert_eq!(g.degree_of(4), 0);
        assert!(g.has_edge(0, 3));
    }
}
