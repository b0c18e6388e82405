/*!
# Bipartite Graph Algorithms

This module provides the bipartiteness oracle of the crate:
- Testing whether a graph is bipartite
- Computing a valid bipartition if one exists
- Validating a candidate bipartition

A bipartition is returned as a plain value rather than cached on the graph, so
there is no stale labeling to invalidate when edges are added later; callers
that mutate the graph simply recompute.
*/

use super::{traversal::*, *};

/// A two-coloring of the node set.
///
/// - Nodes in the side set are considered to be on the **right** (1) side
/// - Nodes not in the set are considered to be on the **left** (0) side
///
/// Disconnected components are colored independently; only the relative
/// coloring within each component is meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct Bipartition {
    side: NodeBitSet,
}

impl Bipartition {
    fn new(n: NumNodes) -> Self {
        Self {
            side: NodeBitSet::new(n),
        }
    }

    fn assign_right_side(&mut self, u: Node) {
        self.side.set_bit(u);
    }

    /// Returns `true` if the node is on the left (0) side of the partition.
    pub fn is_on_left_side(&self, u: Node) -> bool {
        !self.side.get_bit(u)
    }

    /// Returns `true` if the node is on the right (1) side of the partition.
    pub fn is_on_right_side(&self, u: Node) -> bool {
        self.side.get_bit(u)
    }

    /// Returns an iterator over all nodes on the right (1) side.
    pub fn right_side(&self) -> impl Iterator<Item = Node> + '_ {
        self.side.iter_set_bits()
    }

    /// Returns the number of nodes on the right (1) side.
    pub fn number_on_right_side(&self) -> NumNodes {
        self.side.cardinality()
    }
}

/// A trait for testing and computing bipartitions in graphs.
///
/// Provides methods to:
/// - Verify whether a given bipartition is valid
/// - Compute a bipartition of the graph, if one exists
/// - Test whether the graph is bipartite
pub trait BipartiteTest: AdjacencyList {
    /// Tests whether the given candidate partition is a valid bipartition,
    /// i.e. whether every edge has its endpoints on opposite sides.
    fn is_bipartition(&self, bipartition: &Bipartition) -> bool {
        self.edges(false)
            .all(|Edge(u, v)| bipartition.is_on_left_side(u) != bipartition.is_on_left_side(v))
    }

    /// Computes a valid bipartition of the graph, if one exists.
    /// Returns `None` if the graph is not bipartite.
    ///
    /// The result is recomputed from scratch on every invocation and is only
    /// valid for the graph as it was at the time of the call.
    ///
    /// # Examples
    /// ```
    /// use matchings::{prelude::*, algo::*, gens::*};
    ///
    /// let g = AdjArrayUndir::path(10);
    ///
    /// let bip = g.compute_bipartition().unwrap();
    /// assert_eq!(bip.number_on_right_side(), 5);
    /// ```
    fn compute_bipartition(&self) -> Option<Bipartition> {
        let bipartition = propose_possibly_illegal_bipartition(self);
        self.is_bipartition(&bipartition).then_some(bipartition)
    }

    /// Tests whether the graph is bipartite.
    ///
    /// # Examples
    /// ```
    /// use matchings::{prelude::*, algo::*, gens::*};
    ///
    /// assert!(AdjArrayUndir::path(10).is_bipartite());
    /// assert!(!AdjArrayUndir::complete(3).is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList {}

/// Computes a candidate bipartition of the graph using BFS traversal.
///
/// Every traversal root is placed on the right side and each discovered node
/// on the side opposite to its predecessor; the traversal restarts until all
/// components (including isolated nodes) are colored.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition may be invalid
///
/// Used internally as a proposal before validation.
fn propose_possibly_illegal_bipartition<G>(graph: &G) -> Bipartition
where
    G: AdjacencyList,
{
    let mut bipartition = Bipartition::new(graph.number_of_nodes());
    if graph.is_empty() {
        return bipartition;
    }

    let mut bfs = graph.bfs_with_predecessor(0);

    loop {
        for item in bfs.by_ref() {
            match item.predecessor() {
                None => bipartition.assign_right_side(item.item()),
                Some(pred) => {
                    if bipartition.is_on_left_side(pred) {
                        bipartition.assign_right_side(item.item());
                    }
                }
            }
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    bipartition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;

    #[test]
    fn path() {
        for n in 1..10 {
            let mut graph = AdjArrayUndir::new(n);
            for u in 0..n - 1 {
                graph.add_edge(u, u + 1);
            }

            assert!(graph.is_bipartite());

            if n > 2 {
                let mut graph = graph.clone();
                graph.add_edge(1 - (n % 2), n - 1);
                assert!(!graph.is_bipartite());
            }
        }
    }

    #[test]
    fn cycle_parity() {
        for n in 3..30 {
            assert_eq!(AdjArrayUndir::cycle(n).is_bipartite(), n % 2 == 0);
        }
    }

    #[test]
    fn complete_graphs() {
        assert!(AdjArrayUndir::complete(1).is_bipartite());
        assert!(AdjArrayUndir::complete(2).is_bipartite());
        for n in 3..10 {
            assert!(!AdjArrayUndir::complete(n).is_bipartite());
        }
    }

    #[test]
    fn complete_bipartite_sides() {
        let graph = AdjArrayUndir::complete_bipartite(3, 12);
        let bip = graph.compute_bipartition().unwrap();

        // all of 0..3 on one side, all of 3..15 on the other
        assert!((0..3).map(|u| bip.is_on_right_side(u)).all_equal());
        assert!((3..15).map(|u| bip.is_on_right_side(u)).all_equal());
        assert_ne!(bip.is_on_right_side(0), bip.is_on_right_side(3));

        assert_eq!(
            bip.right_side().count() as NumNodes,
            bip.number_on_right_side()
        );
        assert!(bip.right_side().all(|u| bip.is_on_right_side(u)));
    }

    #[test]
    fn isolated_nodes_are_trivially_colorable() {
        let graph = AdjArrayUndir::new(5);
        let bip = graph.compute_bipartition().unwrap();
        assert_eq!(bip.number_on_right_side(), 5);

        let empty = AdjArrayUndir::new(0);
        assert!(empty.is_bipartite());
    }

    #[test]
    fn disconnected_components_are_colored_independently() {
        let graph = AdjArrayUndir::path(4)
            .disjoint_union(&AdjArrayUndir::cycle(6))
            .disjoint_union(&AdjArrayUndir::new(2));
        assert!(graph.is_bipartite());

        let with_odd = graph.disjoint_union(&AdjArrayUndir::cycle(5));
        assert!(!with_odd.is_bipartite());
    }

    #[test]
    fn recomputation_is_deterministic() {
        let graph = AdjArrayUndir::path(7).disjoint_union(&AdjArrayUndir::complete_bipartite(2, 4));

        let first = graph.compute_bipartition().unwrap();
        let second = graph.compute_bipartition().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn validator_accepts_and_rejects() {
        let graph = AdjArrayUndir::path(4);
        let bip = graph.compute_bipartition().unwrap();
        assert!(graph.is_bipartition(&bip));

        // the all-left coloring puts both endpoints of every edge on one side
        assert!(!graph.is_bipartition(&Bipartition::new(4)));
    }

    #[test]
    fn parallel_edges_do_not_affect_bipartiteness() {
        let graph = AdjArrayUndir::from_edges(2, [(0, 1), (0, 1)].into_iter());
        assert!(graph.is_bipartite());
    }
}
