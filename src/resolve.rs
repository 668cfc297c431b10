//! Class resolution for nodes in a [`Tree`].
//!
//! A node resolves to its base class, then its own modifier classes, then the
//! complete resolved list of every mix (recursively), then its raw classes.
//! Repeats are dropped across the whole list, keeping the first position.
//!
//! Mixes are followed live: changing a shared mix changes every node that
//! mixes it in. Resolution keeps the chain of nodes it is currently inside;
//! re-entering one of them is a cycle and fails with
//! [`ResolveError::CycleDetected`]. Nodes reached more than once through
//! different paths (a diamond) are fine.

use std::collections::HashSet;
use std::fmt;

use crate::error::ResolveError;
use crate::node::{NodeId, ResolveBaseClass};
use crate::tree::Tree;
use crate::util::unique_in_order;

impl Tree {
    /// Returns the base class of a node: `block` for blocks and
    /// `block__element` for elements.
    pub fn resolve_base_class<I: ResolveBaseClass>(&self, id: I) -> String {
        id.resolve_base_class(self)
    }

    /// Returns the classes contributed by a node's own modifiers.
    ///
    /// Modifiers are visited in insertion order. `true` flags produce
    /// `base--name`, text and numbers produce `base--name_value`, and
    /// `false` flags or nulls produce nothing.
    pub fn resolve_modifiers_classes(&self, id: impl Into<NodeId>) -> Vec<String> {
        let id = id.into();
        let base = self.resolve_base_class(id);
        let naming = self.naming();

        self[id]
            .modifiers()
            .iter()
            .filter(|modifier| modifier.value.is_active())
            .map(|modifier| {
                let suffix = modifier.value.suffix();
                naming.modifier_class(&base, &modifier.name, suffix.as_deref())
            })
            .collect()
    }

    /// Returns the classes of every mixed-in node, in mix order.
    ///
    /// Each mix contributes its complete resolved list (base, modifiers, its
    /// own mixes, raw classes) before the next mix is considered.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::CycleDetected`] if the mix graph reachable from
    /// `id` contains a cycle.
    pub fn resolve_mixes_classes(
        &self,
        id: impl Into<NodeId>,
    ) -> Result<Vec<String>, ResolveError> {
        let id = id.into();
        let mut chain = vec![id];
        self.resolve_mixes_impl(id, &mut chain)
    }

    /// Returns the full, ordered, duplicate-free class list of a node.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::CycleDetected`] if the mix graph reachable from
    /// `id` contains a cycle.
    pub fn resolve_classes(&self, id: impl Into<NodeId>) -> Result<Vec<String>, ResolveError> {
        let mut chain = Vec::new();
        self.resolve_classes_impl(id.into(), &mut chain)
    }

    /// Returns the resolved classes joined by single spaces, ready for a
    /// `class` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::CycleDetected`] if the mix graph reachable from
    /// `id` contains a cycle.
    pub fn build_classes(&self, id: impl Into<NodeId>) -> Result<String, ResolveError> {
        Ok(self.resolve_classes(id)?.join(" "))
    }

    /// Returns a [`Display`](fmt::Display) adapter that writes
    /// [`build_classes`](Self::build_classes).
    pub fn display(&self, id: impl Into<NodeId>) -> NodeDisplay<'_> {
        NodeDisplay {
            tree: self,
            id: id.into(),
        }
    }

    /// Checks that no node in the tree mixes itself in.
    ///
    /// Resolution detects cycles on its own; this reports them up front,
    /// before any class string is built.
    pub fn validate(&self) -> Result<(), ResolveError> {
        let mut checked = HashSet::new();
        for id in self.ids() {
            let mut chain = Vec::new();
            self.check_mixes(id, &mut checked, &mut chain)?;
        }
        Ok(())
    }

    fn resolve_classes_impl(
        &self,
        id: NodeId,
        chain: &mut Vec<NodeId>,
    ) -> Result<Vec<String>, ResolveError> {
        if chain.contains(&id) {
            return Err(self.cycle_error(chain, id));
        }
        chain.push(id);

        let mut classes = vec![self.resolve_base_class(id)];
        classes.extend(self.resolve_modifiers_classes(id));
        classes.extend(self.resolve_mixes_impl(id, chain)?);
        classes.extend(self[id].classes().iter().cloned());

        chain.pop();

        let classes = unique_in_order(classes);
        log::trace!("resolved '{}' to [{}]", classes[0], classes.join(" "));
        Ok(classes)
    }

    fn resolve_mixes_impl(
        &self,
        id: NodeId,
        chain: &mut Vec<NodeId>,
    ) -> Result<Vec<String>, ResolveError> {
        let mut classes = Vec::new();
        for &mix in self[id].mixes() {
            classes.extend(self.resolve_classes_impl(mix, chain)?);
        }
        Ok(unique_in_order(classes))
    }

    fn check_mixes(
        &self,
        id: NodeId,
        checked: &mut HashSet<NodeId>,
        chain: &mut Vec<NodeId>,
    ) -> Result<(), ResolveError> {
        if checked.contains(&id) {
            return Ok(());
        }
        if chain.contains(&id) {
            return Err(self.cycle_error(chain, id));
        }

        chain.push(id);
        for &mix in self[id].mixes() {
            self.check_mixes(mix, checked, chain)?;
        }
        chain.pop();

        checked.insert(id);
        Ok(())
    }

    /// Builds the error for re-entering `id`, naming the nodes on the cycle.
    fn cycle_error(&self, chain: &[NodeId], id: NodeId) -> ResolveError {
        let start = chain.iter().position(|&n| n == id).unwrap_or(0);
        let path: Vec<String> = chain[start..]
            .iter()
            .chain(std::iter::once(&id))
            .map(|&n| self.resolve_base_class(n))
            .collect();

        log::debug!("cycle detected in mixes: {}", path.join(" -> "));
        ResolveError::CycleDetected { path }
    }
}

/// Writes a node's class string.
///
/// Created by [`Tree::display`]. The output is exactly
/// [`Tree::build_classes`]. A node whose mixes form a cycle has no class
/// string; formatting it returns [`fmt::Error`], so check with
/// [`Tree::validate`] or use [`Tree::build_classes`] when the tree may
/// contain cycles.
#[derive(Debug, Clone, Copy)]
pub struct NodeDisplay<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl fmt::Display for NodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classes = self.tree.build_classes(self.id).map_err(|_| fmt::Error)?;
        f.write_str(&classes)
    }
}
