/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space compared to `usize`/`u64` and (2) directly manipulate
node values without abstracting over them.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need a `Vec<Option<Node>>` (one slot per vertex, e.g. the
/// mate mapping of a matching). This instead uses the `NonZero`-Wrapper with
/// `INVALID_NODE` as the niche so that `Option<OptionalNode>` stays at 4 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNode(NonZero<Node>);

impl OptionalNode {
    /// Returns `Some(OptionalNode)` if `n != INVALID_NODE` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ INVALID_NODE) {
            Some(inner) => Some(OptionalNode(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ INVALID_NODE
    }
}
