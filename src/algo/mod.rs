/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph
representation in this crate. All algorithms are re-exported at the top level
of this module, so you can simply do:
```rust
use matchings::algo::*;
```
and gain access to traversal, bipartiteness and matching routines, all
implemented as traits directly on the graph types.
*/

mod bipartite;
mod matching;
mod traversal;

use crate::prelude::*;

pub use bipartite::*;
pub use matching::*;
pub use traversal::*;
