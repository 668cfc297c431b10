//! Handles into a [`Tree`](crate::Tree).

/// Handle to any node in a tree.
///
/// Handles compare by identity: two blocks with the same name are different
/// nodes with different handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Handle to a block node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub(crate) NodeId);

/// Handle to an element node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) NodeId);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl From<BlockId> for NodeId {
    fn from(id: BlockId) -> Self {
        id.0
    }
}

impl From<ElementId> for NodeId {
    fn from(id: ElementId) -> Self {
        id.0
    }
}
