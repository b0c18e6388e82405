/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

It allows adding common motifs such as:

- **Paths**
- **Cycles**
- **Cliques**
- **Bicliques**

These methods are useful when enriching a graph with specific structures for
testing algorithms or modeling networks with known sub-components.

# Example

```rust
use matchings::{prelude::*, gens::*};

let mut g = AdjArrayUndir::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert_eq!(g.number_of_edges(), 5);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques,
/// bicliques) inside an already existing graph.
///
/// Implemented for all graphs that support edge insertion.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    ///
    /// # Example
    /// ```rust
    /// use matchings::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(4);
    /// g.connect_path([0, 1, 2, 3]);
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    ///
    /// ** Panics if the iterator yields exactly one node (a self-loop) **
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph).
    /// Each unordered node pair is connected by exactly one edge.
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
        C::IntoIter: Clone;

    /// Connects every node of `left` with every node of `right` into a
    /// **biclique** (complete bipartite subgraph).
    ///
    /// The two node collections must be disjoint.
    fn connect_biclique<A, B>(&mut self, left: A, right: B)
    where
        A: IntoIterator<Item = Node>,
        B: IntoIterator<Item = Node>,
        B::IntoIter: Clone;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeInsertion,
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

        // we use a rather tedious implementation to avoid needing to clone the iterator
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
        C::IntoIter: Clone,
    {
        for (u, v) in nodes.into_iter().tuple_combinations() {
            self.add_edge(u, v);
        }
    }

    fn connect_biclique<A, B>(&mut self, left: A, right: B)
    where
        A: IntoIterator<Item = Node>,
        B: IntoIterator<Item = Node>,
        B::IntoIter: Clone,
    {
        for (u, v) in left.into_iter().cartesian_product(right) {
            self.add_edge(u, v);
        }
    }
}
