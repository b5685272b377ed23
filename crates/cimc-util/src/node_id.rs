//! NodeId - identity for scope-opening AST nodes.

use crate::index_vec::Idx;

/// Unique identifier stamped on every scope-opening AST node (function
/// declarations, blocks, and `for` statements) at parse time.
///
/// The scope analyzer stores each child scope under the `NodeId` of the node
/// that opened it, which lets the type checker re-enter exactly the scopes
/// the analyzer built instead of walking the tree a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Reserved id for synthesized nodes in tests.
    pub const DUMMY: NodeId = NodeId(u32::MAX);

    pub fn is_dummy(self) -> bool {
        self == Self::DUMMY
    }
}

impl Idx for NodeId {
    fn from_usize(idx: usize) -> Self {
        NodeId(idx as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}
