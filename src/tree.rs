//! The node arena.

use std::ops::{Index, IndexMut};

use crate::naming::Naming;
use crate::node::{Node, NodeId};

/// Arena that owns every block and element, plus the naming convention used
/// to spell their classes.
///
/// Nodes are created through [`Tree::block`] and [`Tree::create_element`]
/// and reached through `tree[id]`. Handles stay valid for the life of the
/// tree; nodes are never removed.
///
/// Indexing with a handle minted by a different tree may panic or return an
/// unrelated node, the same way indexing a slice out of range does.
///
/// # Example
///
/// ```rust
/// use standout_bem::Tree;
///
/// let mut tree = Tree::new();
/// let test = tree.block("test");
/// let node_a = tree.block("node_a");
///
/// tree[test].add_mix(node_a).add_modifier("color", "red").add_class("js");
///
/// assert_eq!(
///     tree.resolve_classes(test).unwrap(),
///     vec!["test", "test--color_red", "node_a", "js"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    naming: Naming,
}

impl Tree {
    /// Creates an empty tree with the default BEM naming convention.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree with a custom naming convention.
    pub fn with_naming(naming: Naming) -> Self {
        Self {
            nodes: Vec::new(),
            naming,
        }
    }

    pub fn naming(&self) -> &Naming {
        &self.naming
    }

    /// Returns the node for `id`, or `None` if the handle is out of range.
    pub fn get(&self, id: impl Into<NodeId>) -> Option<&Node> {
        self.nodes.get(id.into().index())
    }

    pub fn get_mut(&mut self, id: impl Into<NodeId>) -> Option<&mut Node> {
        self.nodes.get_mut(id.into().index())
    }

    /// Iterates over all node handles in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

impl<I: Into<NodeId>> Index<I> for Tree {
    type Output = Node;

    fn index(&self, id: I) -> &Node {
        &self.nodes[id.into().index()]
    }
}

impl<I: Into<NodeId>> IndexMut<I> for Tree {
    fn index_mut(&mut self, id: I) -> &mut Node {
        &mut self.nodes[id.into().index()]
    }
}
