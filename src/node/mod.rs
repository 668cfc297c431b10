//! Naming entities: blocks, elements and their shared state.
//!
//! This module provides:
//!
//! - [`Node`]: the state every entity carries (name, modifiers, mixes, raw
//!   classes) and the chainable mutators over it
//! - [`NodeId`], [`BlockId`], [`ElementId`]: copyable handles into a
//!   [`Tree`](crate::Tree)
//! - [`ResolveBaseClass`]: the naming rule each entity kind supplies
//!
//! Blocks name themselves; elements derive their base class from the block
//! that owns them.

mod block;
mod element;
mod id;
#[allow(clippy::module_inception)]
mod node;

pub use id::{BlockId, ElementId, NodeId};
pub use node::{Modifier, Node, NodeKind};

use crate::tree::Tree;

/// The naming rule of an entity kind.
///
/// Every kind of entity decides how its base class is spelled. The rest of
/// the resolution algorithm (modifiers, mixes, raw classes) is shared and
/// lives on [`Tree`].
pub trait ResolveBaseClass {
    /// Returns the base class, the first class of every resolved list.
    fn resolve_base_class(&self, tree: &Tree) -> String;
}

impl ResolveBaseClass for NodeId {
    fn resolve_base_class(&self, tree: &Tree) -> String {
        match tree[*self].kind() {
            NodeKind::Block => BlockId(*self).resolve_base_class(tree),
            NodeKind::Element(_) => ElementId(*self).resolve_base_class(tree),
        }
    }
}
