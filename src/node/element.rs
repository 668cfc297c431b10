//! Elements: children scoped to a block.

use super::id::{BlockId, ElementId};
use super::node::NodeKind;
use super::ResolveBaseClass;
use crate::tree::Tree;

impl ResolveBaseClass for ElementId {
    fn resolve_base_class(&self, tree: &Tree) -> String {
        let block = tree.block_of(*self);
        tree.naming().element_class(tree[block].name(), tree[*self].name())
    }
}

impl Tree {
    /// Returns the block that owns `element`.
    pub fn block_of(&self, element: ElementId) -> BlockId {
        match self[element].kind() {
            NodeKind::Element(block) => block,
            // ElementId is only minted for element nodes
            NodeKind::Block => unreachable!("element handle points at a block"),
        }
    }
}
