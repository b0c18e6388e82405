use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    /// As the vertex set is always the dense range `0..n`, this does not borrow the graph.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered,
    /// i.e. every undirected edge is reported exactly once.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> {
        let mut edges = self.edges(only_normalized).collect_vec();
        edges.sort();
        edges.into_iter()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges.
///
/// Graphs in this crate are insert-only: edges are added over the lifetime of
/// the graph and never removed. Parallel edges are not deduplicated; callers
/// that require a simple graph must not insert an edge twice.
pub trait GraphEdgeInsertion: GraphNew {
    /// Adds the undirected edge *{u,v}* to the graph.
    /// ** Panics if `u >= n || v >= n || u == v` **
    fn add_edge(&mut self, u: Node, v: Node);

    /// Adds all edges in the collection
    /// ** Panics if any edge violates the `add_edge` contract **
    fn add_edges(&mut self, edges: impl Iterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges(n: NumNodes, edges: impl Iterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeInsertion> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl Iterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}

/// Trait for combining two graphs into their disjoint union.
pub trait DisjointUnion: Sized {
    /// Returns the disjoint union of `self` and `other`: the vertices of
    /// `other` are relabelled by adding `self.number_of_nodes()`, edges within
    /// each operand are preserved, and no edges between the operands exist.
    fn disjoint_union(&self, other: &Self) -> Self;
}

impl<G> DisjointUnion for G
where
    G: AdjacencyList + GraphEdgeInsertion,
{
    fn disjoint_union(&self, other: &Self) -> Self {
        let n = self.number_of_nodes();
        let mut res = Self::new(n + other.number_of_nodes());
        res.add_edges(self.edges(true));
        res.add_edges(other.edges(true).map(|Edge(u, v)| Edge(u + n, v + n)));
        res
    }
}
