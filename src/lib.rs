/*!
`matchings` is a library for computing **maximum-cardinality matchings** in
undirected graphs that are
- **unlabelled** : Nodes are numbered `0` to `n - 1`
- **unweighted** : Neither nodes nor edges have a weight attached to them
- **bipartite** : The matching engine handles bipartite graphs; non-bipartite
  inputs are detected and reported as unsupported rather than answered
  incorrectly

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of
nodes in the graph. As most common graphs do not exceed `2^32` nodes, this
should normally suffice and save space as compared to `u64/usize`. For
**edges**, we use a simple tuple-struct `Edge(Node, Node)`.

Graphs are stored in a single representation,
[`AdjArrayUndir`](crate::repr::AdjArrayUndir): an adjacency array with one
neighbor list per vertex, kept symmetric on every insertion. The vertex count
is fixed at construction and edges are only ever added, which matches the
read-mostly access pattern of the matching algorithms.

# Design

Commonly used functionality is implemented via traits on the graph itself,
making it usable without configuring anything beforehand:

- [`algo::BipartiteTest`] answers `graph.is_bipartite()` and computes a
  two-coloring as a plain return value (`graph.compute_bipartition()`), so
  there is no cached labeling to go stale when edges are added later.
- [`algo::Matching`] computes a maximum matching into a caller-owned
  [`MateMap`](crate::algo::MateMap) by repeatedly finding shortest augmenting
  paths (Berge's theorem guarantees maximality once none is left). Only the
  bipartite engine exists: for non-bipartite graphs the driver returns
  [`MatchingError`](crate::error::MatchingError) instead of a
  quietly-incomplete matching.
- [`algo::Traversal`] provides the underlying BFS/DFS iterators.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations,
  the graph representation, and the error type,
- [`algo`] includes algorithm traits implemented on graphs itself such as BFS
  (`graph.bfs(start_node)`), the bipartiteness test, and the matching driver,
- [`gens`] includes generators for deterministic graph families
  (paths/cycles/cliques/bicliques) at runtime,
- [`io`] includes handlers for reading and writing the edge-list format.

In most use-cases, `use matchings::{prelude::*, algo::*};` suffices for your
needs:

```rust
use matchings::{prelude::*, algo::*, gens::*};

let g = AdjArrayUndir::complete_bipartite(3, 12);
assert!(g.is_bipartite());

let mut mate = MateMap::new_unmatched(g.number_of_nodes());
g.maximum_cardinality_matching(&mut mate).unwrap();
assert_eq!(mate.cardinality(), 3);
```

# When to use

You should only use this library if your graphs are unlabelled and unweighted
and you need bipartiteness classification or bipartite maximum matchings with
minimal overhead. For general-graph matchings (blossom contraction) or a more
extensive algorithm collection, check out
[petgraph](https://crates.io/crates/petgraph).
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;

/// `matchings::prelude` includes definitions for nodes and edges, all basic
/// graph operation traits, the graph representation, and the error type.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
