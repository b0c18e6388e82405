/*!
# Graph Representation

A single storage backend is provided: [`AdjArrayUndir`], an undirected graph
backed by an adjacency array (one `Vec<Node>` per vertex).

The representation is tuned for the access pattern of the matching algorithms:
read-mostly traversal with O(1) amortized neighbor iteration, incremental edge
insertion, and no removal. The neighbor lists of `u` and `v` are always kept
symmetric: `v` appears in the list of `u` iff `u` appears in the list of `v`.
*/

use crate::{edge::*, node::*, ops::*};

/// An undirected graph stored as an adjacency array.
///
/// Vertices are the dense range `0..n` fixed at construction. Self-loops are
/// rejected at insertion; parallel edges are stored as-is.
#[derive(Clone)]
pub struct AdjArrayUndir {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl GraphNodeOrder for AdjArrayUndir {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArrayUndir {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArrayUndir {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjArrayUndir {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.nbs[u as usize].contains(&v)
    }
}

impl GraphNew for AdjArrayUndir {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeInsertion for AdjArrayUndir {
    fn add_edge(&mut self, u: Node, v: Node) {
        let n = self.number_of_nodes();
        assert!(u < n && v < n, "invalid vertex in edge ({u},{v})");
        assert_ne!(u, v, "self-loop at vertex {u}");

        self.nbs[u as usize].push(v);
        self.nbs[v as usize].push(u);
        self.num_edges += 1;
    }
}
