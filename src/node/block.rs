//! Blocks: root entities named after themselves.

use super::id::{BlockId, ElementId};
use super::node::{Node, NodeKind};
use super::ResolveBaseClass;
use crate::tree::Tree;

impl ResolveBaseClass for BlockId {
    fn resolve_base_class(&self, tree: &Tree) -> String {
        tree[*self].name().to_string()
    }
}

impl Tree {
    /// Creates a block and returns its handle.
    pub fn block(&mut self, name: impl Into<String>) -> BlockId {
        BlockId(self.insert(Node::new(name, NodeKind::Block)))
    }

    /// Shorthand for [`block`](Self::block).
    pub fn b(&mut self, name: impl Into<String>) -> BlockId {
        self.block(name)
    }

    /// Creates an element owned by `block`.
    ///
    /// The element keeps a handle to its block; the block does not track
    /// its elements.
    pub fn create_element(&mut self, block: BlockId, name: impl Into<String>) -> ElementId {
        ElementId(self.insert(Node::new(name, NodeKind::Element(block))))
    }

    /// Shorthand for [`create_element`](Self::create_element).
    pub fn e(&mut self, block: BlockId, name: impl Into<String>) -> ElementId {
        self.create_element(block, name)
    }
}
