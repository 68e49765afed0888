//! Strongly-typed identifiers and the [`NeighbourList`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Identifies a cell (node) within a navigation grid.
///
/// Nodes are owned by the grid and addressed by stable arena index.
/// A `NodeId` is only meaningful for the grid that produced it; the
/// pathfinder uses [`index`](NodeId::index) to address its per-query
/// scratch arrays, never holding references into the grid itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The node's position in the grid's arena, for parallel-array indexing.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a mobile agent across assignment requests.
///
/// The coordinator keys its retained last-assignment map by `AgentId`,
/// so identities must be stable for as long as stability bias should
/// apply to an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AgentId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies an assignment target across assignment requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TargetId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Neighbour set of a grid node.
///
/// Uses `SmallVec<[NodeId; 8]>` to avoid heap allocation for common
/// lattices (8 covers a square grid with diagonal connectivity).
pub type NeighbourList = SmallVec<[NodeId; 8]>;
