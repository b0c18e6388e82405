//! Error types for matching computations

use thiserror::Error;

/// Errors reported by the matching driver.
///
/// Contract violations (invalid vertex indices, self-loops, malformed mate
/// mappings) are programmer errors and panic instead; see the respective
/// `** Panics ... **` notes. I/O failures are reported as [`std::io::Error`]
/// by the [`io`](crate::io) module.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchingError {
    /// The graph is not bipartite. Finding maximum matchings in general graphs
    /// requires blossom contraction, which this crate does not implement; the
    /// driver reports the unsupported input instead of silently returning an
    /// incomplete matching.
    #[error("graph is not bipartite; general-graph maximum matching is not implemented")]
    UnsupportedGraphClass,
}
