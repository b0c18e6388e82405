/*!
# Graph Generators

This module provides constructors for the deterministic graph families used
throughout this crate, plus substructure generators to enrich existing graphs
with common motifs (paths, cycles, cliques, bicliques).

The typical usage is to build a whole graph via [`ClassicGraphs`]:

```rust
use matchings::{prelude::*, gens::*};

let g = AdjArrayUndir::complete_bipartite(2, 3);
assert_eq!(g.number_of_edges(), 6);
```

or to connect nodes of an already existing graph via
[`GeneratorSubstructures`].
*/

use crate::prelude::*;

mod substructures;

pub use substructures::*;

/// Trait for building the classic deterministic graph families.
///
/// Implemented for all graph types that support construction from scratch.
pub trait ClassicGraphs: Sized {
    /// Creates a path on `n` vertices (`n - 1` edges, in vertex order).
    fn path(n: NumNodes) -> Self;

    /// Creates a cycle on `n` vertices: a path plus the closing edge.
    ///
    /// ** Panics if `n == 1` (the closing edge would be a self-loop) **
    fn cycle(n: NumNodes) -> Self;

    /// Creates a complete graph on `n` vertices.
    fn complete(n: NumNodes) -> Self;

    /// Creates a complete bipartite graph whose classes have sizes `a` and
    /// `b`: vertices `0..a` form one class, `a..a + b` the other, and every
    /// cross pair is connected.
    fn complete_bipartite(a: NumNodes, b: NumNodes) -> Self;
}

impl<G> ClassicGraphs for G
where
    G: GraphNew + GraphEdgeInsertion,
{
    fn path(n: NumNodes) -> Self {
        let mut graph = Self::new(n);
        graph.connect_path(0..n);
        graph
    }

    fn cycle(n: NumNodes) -> Self {
        let mut graph = Self::new(n);
        graph.connect_cycle(0..n);
        graph
    }

    fn complete(n: NumNodes) -> Self {
        let mut graph = Self::new(n);
        graph.connect_clique(0..n);
        graph
    }

    fn complete_bipartite(a: NumNodes, b: NumNodes) -> Self {
        let mut graph = Self::new(a + b);
        graph.connect_biclique(0..a, a..a + b);
        graph
    }
}
