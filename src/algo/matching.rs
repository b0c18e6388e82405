/*!
# Matching Algorithms

This module computes **maximum-cardinality matchings** in bipartite graphs.

A *matching* is a set of edges without shared endpoints; a **maximum**
matching is one of largest possible size. The driver follows the classical
augmenting-path scheme: starting from the empty matching, it repeatedly finds
a shortest augmenting path and flips it, growing the matching by one edge per
round. By Berge's theorem the matching is maximum exactly when no augmenting
path remains, so the loop terminates with an optimal result after at most
`n / 2` rounds.

For non-bipartite graphs no algorithm is implemented (that would require
blossom contraction); the driver reports
[`MatchingError::UnsupportedGraphClass`] instead of returning a
quietly-incomplete matching.
*/

use std::collections::VecDeque;

use super::{bipartite::*, *};
use crate::error::MatchingError;
use itertools::Itertools;

/// The mate mapping of a matching: one slot per vertex holding the current
/// partner, or `None` for exposed (unmatched) vertices.
///
/// The mapping is symmetric by construction: partners are only ever assigned
/// in pairs, so `mate_of(v) == Some(w)` implies `mate_of(w) == Some(v)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MateMap {
    mates: Vec<Option<OptionalNode>>,
}

impl MateMap {
    /// Creates a mate mapping for `n` vertices with every vertex exposed.
    pub fn new_unmatched(n: NumNodes) -> Self {
        Self {
            mates: vec![None; n as usize],
        }
    }

    /// Returns the number of vertex slots.
    pub fn number_of_nodes(&self) -> NumNodes {
        self.mates.len() as NumNodes
    }

    /// Returns the current partner of `u`, or `None` if `u` is exposed.
    /// ** Panics if `u >= n` **
    pub fn mate_of(&self, u: Node) -> Option<Node> {
        self.mates[u as usize].map(|m| m.get())
    }

    /// Returns *true* if `u` has no partner.
    /// ** Panics if `u >= n` **
    pub fn is_exposed(&self, u: Node) -> bool {
        self.mates[u as usize].is_none()
    }

    /// Returns the number of edges in the matching.
    pub fn cardinality(&self) -> NumNodes {
        (self.mates.iter().filter(|m| m.is_some()).count() / 2) as NumNodes
    }

    /// Returns an iterator over the matching edges, each reported once in
    /// normalized orientation.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.mates.iter().enumerate().filter_map(|(u, m)| {
            let u = u as Node;
            let v = (*m)?.get();
            (u < v).then_some(Edge(u, v))
        })
    }

    /// Makes `u` and `v` partners of each other, overwriting both slots.
    fn match_pair(&mut self, u: Node, v: Node) {
        debug_assert_ne!(u, v);
        self.mates[u as usize] = OptionalNode::new(v);
        self.mates[v as usize] = OptionalNode::new(u);
    }
}

/// Discovery state of a vertex during the alternating BFS.
///
/// Keeps "root of the search" distinct from "undiscovered" without reusing
/// sentinel node values across unrelated roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    Undiscovered,
    Root,
    DiscoveredFrom(Node),
}

/// Strategy for finding augmenting paths, selected once per driver run by
/// classifying the graph.
///
/// Only the bipartite strategy is implemented; the non-bipartite variant
/// reports its absence as an error instead of pretending that no augmenting
/// path exists.
pub enum AugmentingPathFinder {
    /// Layered alternating BFS over a valid two-coloring.
    Bipartite(Bipartition),
    /// Placeholder for general graphs (blossom contraction is not implemented).
    NonBipartite,
}

impl AugmentingPathFinder {
    /// Classifies the graph by running the bipartiteness oracle once.
    pub fn classify<G: AdjacencyList>(graph: &G) -> Self {
        match graph.compute_bipartition() {
            Some(bipartition) => Self::Bipartite(bipartition),
            None => Self::NonBipartite,
        }
    }

    /// Searches for one augmenting path with respect to `mate`.
    ///
    /// Returns `Ok(Some(path))` with a shortest augmenting path, `Ok(None)` if
    /// the matching admits none (and is therefore maximum), or
    /// [`MatchingError::UnsupportedGraphClass`] for the non-bipartite variant.
    pub fn find_augmenting_path<G: AdjacencyList>(
        &self,
        graph: &G,
        mate: &MateMap,
    ) -> Result<Option<Vec<Node>>, MatchingError> {
        match self {
            Self::Bipartite(bipartition) => {
                Ok(bipartite_augmenting_path(graph, bipartition, mate))
            }
            Self::NonBipartite => Err(MatchingError::UnsupportedGraphClass),
        }
    }
}

/// Finds a shortest augmenting path in a bipartite graph via layered BFS.
///
/// The search starts simultaneously from all exposed right-side vertices and
/// alternates strictly: from a right-side vertex every neighbor except the
/// current partner is explored (an unmatched edge), from a matched left-side
/// vertex the only continuation is the forced step to its partner (the
/// matched edge). An exposed left-side vertex is a terminal; the path is
/// reconstructed by walking predecessor links back to a root.
///
/// Returns the path in root-to-terminal order (even length, alternating
/// unmatched/matched edges, both endpoints exposed), or `None` if no
/// augmenting path exists.
fn bipartite_augmenting_path<G>(
    graph: &G,
    bipartition: &Bipartition,
    mate: &MateMap,
) -> Option<Vec<Node>>
where
    G: AdjacencyList,
{
    let mut queue: VecDeque<Node> = graph
        .vertices()
        .filter(|&u| bipartition.is_on_right_side(u) && mate.is_exposed(u))
        .collect();

    let mut state = vec![SearchState::Undiscovered; graph.len()];
    for &root in &queue {
        state[root as usize] = SearchState::Root;
    }

    while let Some(v) = queue.pop_front() {
        if bipartition.is_on_right_side(v) {
            for w in graph.neighbors_of(v) {
                if mate.mate_of(v) == Some(w) {
                    continue;
                }
                if state[w as usize] == SearchState::Undiscovered {
                    state[w as usize] = SearchState::DiscoveredFrom(v);
                    queue.push_back(w);
                }
            }
        } else if let Some(w) = mate.mate_of(v) {
            if state[w as usize] == SearchState::Undiscovered {
                state[w as usize] = SearchState::DiscoveredFrom(v);
                queue.push_back(w);
            }
        }
    }

    let terminal = graph.vertices().find(|&u| {
        bipartition.is_on_left_side(u)
            && mate.is_exposed(u)
            && state[u as usize] != SearchState::Undiscovered
    })?;

    let mut path = Vec::new();
    let mut cur = terminal;
    loop {
        path.push(cur);
        match state[cur as usize] {
            SearchState::DiscoveredFrom(pred) => cur = pred,
            SearchState::Root => break,
            // every vertex on the path was discovered by the BFS
            SearchState::Undiscovered => unreachable!(),
        }
    }
    path.reverse();

    Some(path)
}

/// Applies an augmenting path to the matching: pairing up consecutive path
/// vertices simultaneously removes the path's matched edges and inserts its
/// unmatched edges, growing the matching by exactly one.
fn augment(path: &[Node], mate: &mut MateMap) {
    debug_assert!(path.len() % 2 == 0);
    for (u, v) in path.iter().copied().tuples() {
        mate.match_pair(u, v);
    }
}

/// A trait providing maximum matching computation on undirected graphs.
pub trait Matching: AdjacencyList {
    /// Computes a **maximum-cardinality matching** in place.
    ///
    /// `mate` must hold one slot per vertex, all exposed; on success it
    /// encodes a maximum matching of the graph. For non-bipartite graphs the
    /// driver reports [`MatchingError::UnsupportedGraphClass`] and leaves
    /// `mate` untouched.
    ///
    /// ** Panics if `mate` does not have exactly one slot per vertex or is
    /// not all-exposed **
    ///
    /// # Examples
    /// ```
    /// use matchings::{prelude::*, algo::*, gens::*};
    ///
    /// let g = AdjArrayUndir::complete_bipartite(2, 3);
    ///
    /// let mut mate = MateMap::new_unmatched(g.number_of_nodes());
    /// g.maximum_cardinality_matching(&mut mate).unwrap();
    /// assert_eq!(mate.cardinality(), 2);
    /// ```
    fn maximum_cardinality_matching(&self, mate: &mut MateMap) -> Result<(), MatchingError> {
        assert_eq!(mate.number_of_nodes(), self.number_of_nodes());
        assert!(self.vertices().all(|u| mate.is_exposed(u)));

        let finder = AugmentingPathFinder::classify(self);
        while let Some(path) = finder.find_augmenting_path(self, mate)? {
            augment(&path, mate);
        }

        Ok(())
    }
}

impl<G> Matching for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    fn matching_of<G: Matching>(graph: &G) -> Result<MateMap, MatchingError> {
        let mut mate = MateMap::new_unmatched(graph.number_of_nodes());
        graph.maximum_cardinality_matching(&mut mate)?;
        Ok(mate)
    }

    fn assert_valid_matching<G: AdjacencyList + AdjacencyTest>(graph: &G, mate: &MateMap) {
        for u in graph.vertices() {
            if let Some(v) = mate.mate_of(u) {
                assert_eq!(mate.mate_of(v), Some(u));
                assert!(graph.has_edge(u, v));
            }
        }
    }

    #[test]
    fn complete_bipartite_matchings() {
        for a in 1..12 {
            for b in 1..12 {
                let graph = AdjArrayUndir::complete_bipartite(a, b);
                let mate = matching_of(&graph).unwrap();

                assert_eq!(mate.cardinality(), a.min(b));
                assert_valid_matching(&graph, &mate);
            }
        }
    }

    #[test]
    fn complete_bipartite_3_12() {
        let graph = AdjArrayUndir::complete_bipartite(3, 12);
        assert!(graph.is_bipartite());
        assert_eq!(matching_of(&graph).unwrap().cardinality(), 3);
    }

    #[test]
    fn paths_have_perfect_matchings_for_even_n() {
        let mate = matching_of(&AdjArrayUndir::path(12)).unwrap();
        assert_eq!(mate.cardinality(), 6);

        for n in 1..20 {
            let mate = matching_of(&AdjArrayUndir::path(n)).unwrap();
            assert_eq!(mate.cardinality(), n / 2);
        }
    }

    #[test]
    fn even_cycles_have_perfect_matchings() {
        for n in (4..40).step_by(2) {
            let graph = AdjArrayUndir::cycle(n);
            let mate = matching_of(&graph).unwrap();

            assert_eq!(mate.cardinality(), n / 2);
            assert_valid_matching(&graph, &mate);
        }
    }

    #[test]
    fn large_even_cycle() {
        let graph = AdjArrayUndir::cycle(20000);
        assert!(graph.is_bipartite());
        assert_eq!(matching_of(&graph).unwrap().cardinality(), 10000);
    }

    #[test]
    fn triangle_is_unsupported() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (0, 2), (1, 2)].into_iter());
        assert!(!graph.is_bipartite());

        let mut mate = MateMap::new_unmatched(3);
        assert_eq!(
            graph.maximum_cardinality_matching(&mut mate),
            Err(MatchingError::UnsupportedGraphClass)
        );
        // the maximum matching of a triangle has one edge; nothing is computed
        assert_eq!(mate.cardinality(), 0);
    }

    #[test]
    fn complete_graphs_are_unsupported() {
        for n in 3..8 {
            let graph = AdjArrayUndir::complete(n);
            assert_eq!(
                matching_of(&graph),
                Err(MatchingError::UnsupportedGraphClass)
            );
        }
    }

    #[test]
    fn matching_sizes_add_up_under_disjoint_union() {
        let g1 = AdjArrayUndir::complete_bipartite(3, 4);
        let g2 = AdjArrayUndir::path(5);
        let union = g1.disjoint_union(&g2);

        assert!(union.is_bipartite());
        let mate = matching_of(&union).unwrap();
        assert_eq!(mate.cardinality(), 3 + 2);
        assert_valid_matching(&union, &mate);
    }

    #[test]
    fn star_graphs_have_one_matching_edge() {
        let mate = matching_of(&AdjArrayUndir::complete_bipartite(1, 5)).unwrap();
        assert_eq!(mate.cardinality(), 1);
    }

    #[test]
    fn trivial_graphs() {
        assert_eq!(matching_of(&AdjArrayUndir::new(0)).unwrap().cardinality(), 0);
        assert_eq!(matching_of(&AdjArrayUndir::new(1)).unwrap().cardinality(), 0);
        assert_eq!(matching_of(&AdjArrayUndir::new(7)).unwrap().cardinality(), 0);
    }

    #[test]
    fn augmentation_flips_an_alternating_path() {
        // 0 - 1 - 2 - 3: greedy matching {1,2} must be rebuilt to {0,1},{2,3}
        let graph = AdjArrayUndir::path(4);
        let mate = matching_of(&graph).unwrap();

        assert_eq!(mate.cardinality(), 2);
        assert_eq!(mate.mate_of(0), Some(1));
        assert_eq!(mate.mate_of(2), Some(3));
    }

    #[test]
    fn mate_map_edges_are_normalized() {
        let graph = AdjArrayUndir::path(4);
        let mate = matching_of(&graph).unwrap();

        let edges: Vec<_> = mate.edges().collect();
        assert_eq!(edges, vec![Edge(0, 1), Edge(2, 3)]);
    }

    #[test]
    fn random_bipartite_graphs_yield_symmetric_matchings() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..20 {
            let n: NumNodes = rng.random_range(2..60);

            // random side assignment, edges only across sides
            let mut nodes = (0..n).collect::<Vec<_>>();
            nodes.shuffle(rng);
            let (left, right) = nodes.split_at(rng.random_range(1..n as usize));

            let mut graph = AdjArrayUndir::new(n);
            for &u in left {
                for &v in right {
                    if rng.random_bool(0.3) {
                        graph.add_edge(u, v);
                    }
                }
            }

            let mate = matching_of(&graph).unwrap();
            assert_valid_matching(&graph, &mate);

            // matched edges cross the computed bipartition
            if let Some(bip) = graph.compute_bipartition() {
                for Edge(u, v) in mate.edges() {
                    assert_ne!(bip.is_on_right_side(u), bip.is_on_right_side(v));
                }
            }
        }
    }

    #[test]
    fn matched_count_is_monotone_in_edges() {
        // adding an edge can never shrink the maximum matching
        let mut sizes = Vec::new();
        for m in 0..6 {
            let mut graph = AdjArrayUndir::new(12);
            for u in 0..m {
                graph.add_edge(u, u + 1 + m);
            }
            sizes.push(matching_of(&graph).unwrap().cardinality());
        }
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn finder_returns_shortest_alternating_paths() {
        let graph = AdjArrayUndir::path(6);
        let finder = AugmentingPathFinder::classify(&graph);
        let mut mate = MateMap::new_unmatched(6);

        // with everything exposed, the shortest augmenting path is one edge
        let path = finder.find_augmenting_path(&graph, &mate).unwrap().unwrap();
        assert_eq!(path.len(), 2);
        augment(&path, &mut mate);

        // every following path alternates unmatched/matched edges and grows
        // the matching by one
        while let Some(path) = finder.find_augmenting_path(&graph, &mate).unwrap() {
            assert_eq!(path.len() % 2, 0);
            for (i, (&u, &v)) in path.iter().tuple_windows::<(_, _)>().enumerate() {
                assert!(graph.has_edge(u, v));
                assert_eq!(mate.mate_of(u) == Some(v), i % 2 == 1);
            }

            let before = mate.cardinality();
            augment(&path, &mut mate);
            assert_eq!(mate.cardinality(), before + 1);
        }

        assert_eq!(mate.cardinality(), 3);
    }

    #[test]
    fn finder_refuses_non_bipartite_graphs() {
        let graph = AdjArrayUndir::cycle(5);
        let finder = AugmentingPathFinder::classify(&graph);
        let mate = MateMap::new_unmatched(5);

        assert_eq!(
            finder.find_augmenting_path(&graph, &mate),
            Err(MatchingError::UnsupportedGraphClass)
        );
    }

    #[test]
    #[should_panic]
    fn driver_rejects_malformed_mate_map() {
        let graph = AdjArrayUndir::path(4);
        let mut mate = MateMap::new_unmatched(3);
        let _ = graph.maximum_cardinality_matching(&mut mate);
    }
}
