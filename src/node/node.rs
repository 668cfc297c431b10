//! Node state and its chainable mutators.

use serde::{Deserialize, Serialize};

use super::id::{BlockId, NodeId};
use crate::util::unique_in_order;
use crate::value::ModifierValue;

/// A named modifier attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub name: String,
    pub value: ModifierValue,
}

impl Modifier {
    /// Creates a modifier from any value convertible to [`ModifierValue`].
    pub fn new(name: impl Into<String>, value: impl Into<ModifierValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// What kind of entity a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A root entity; its base class is its own name.
    Block,
    /// A child of the given block; its base class is `block__element`.
    Element(BlockId),
}

/// A naming entity: a name decorated with modifiers, mixes and raw classes.
///
/// Nodes live inside a [`Tree`](crate::Tree) and are reached through
/// `tree[id]`. All mutators return `&mut Self` so calls can be chained:
///
/// ```rust
/// use standout_bem::Tree;
///
/// let mut tree = Tree::new();
/// let button = tree.block("button");
/// let icon = tree.block("icon");
///
/// tree[button]
///     .add_flag("primary")
///     .m("size", "l")
///     .mix(icon)
///     .add_class("js-button");
///
/// assert!(tree[button].has_modifier("size"));
/// assert!(tree[button].has_mix(icon));
/// ```
///
/// Every collection keeps insertion order and rejects duplicates on
/// insertion: modifiers are unique by name, mixes by handle, raw classes by
/// value. Adding an existing modifier does not overwrite it; remove it first.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    kind: NodeKind,
    classes: Vec<String>,
    modifiers: Vec<Modifier>,
    mixes: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            classes: Vec::new(),
            modifiers: Vec::new(),
            mixes: Vec::new(),
        }
    }

    /// Returns the identity name given at creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether this node is a block or an element.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns `true` for block nodes.
    pub fn is_block(&self) -> bool {
        matches!(self.kind, NodeKind::Block)
    }

    /// Returns `true` for element nodes.
    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element(_))
    }

    /// Returns the value of the named modifier, if present.
    pub fn get_modifier(&self, name: &str) -> Option<&ModifierValue> {
        self.modifiers
            .iter()
            .find(|modifier| modifier.name == name)
            .map(|modifier| &modifier.value)
    }

    /// Adds a modifier unless one with the same name already exists.
    ///
    /// The first value written for a name wins until the modifier is removed.
    pub fn add_modifier(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ModifierValue>,
    ) -> &mut Self {
        let name = name.into();
        if !self.has_modifier(&name) {
            self.modifiers.push(Modifier {
                name,
                value: value.into(),
            });
        }
        self
    }

    /// Shorthand for [`add_modifier`](Self::add_modifier).
    pub fn m(&mut self, name: impl Into<String>, value: impl Into<ModifierValue>) -> &mut Self {
        self.add_modifier(name, value)
    }

    /// Adds a boolean modifier set to `true`.
    pub fn add_flag(&mut self, name: impl Into<String>) -> &mut Self {
        self.add_modifier(name, true)
    }

    /// Removes the named modifier; does nothing if it is absent.
    pub fn remove_modifier(&mut self, name: &str) -> &mut Self {
        if let Some(i) = self.modifiers.iter().position(|m| m.name == name) {
            self.modifiers.remove(i);
        }
        self
    }

    /// Returns `true` if a modifier with this name exists.
    pub fn has_modifier(&self, name: &str) -> bool {
        self.modifiers.iter().any(|modifier| modifier.name == name)
    }

    /// Returns the modifiers in insertion order.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Mixes another node into this one, unless it is already mixed in.
    ///
    /// The mixed node is not owned: later changes to it show up whenever this
    /// node is resolved.
    pub fn add_mix(&mut self, node: impl Into<NodeId>) -> &mut Self {
        let node = node.into();
        if !self.has_mix(node) {
            self.mixes.push(node);
        }
        self
    }

    /// Shorthand for [`add_mix`](Self::add_mix).
    pub fn mix(&mut self, node: impl Into<NodeId>) -> &mut Self {
        self.add_mix(node)
    }

    /// Removes a mixed-in node; does nothing if it is not mixed in.
    pub fn remove_mix(&mut self, node: impl Into<NodeId>) -> &mut Self {
        let node = node.into();
        if let Some(i) = self.mixes.iter().position(|&mix| mix == node) {
            self.mixes.remove(i);
        }
        self
    }

    /// Returns `true` if the node is mixed in, compared by handle.
    pub fn has_mix(&self, node: impl Into<NodeId>) -> bool {
        self.mixes.contains(&node.into())
    }

    /// Returns the mixed-in handles in insertion order.
    pub fn mixes(&self) -> &[NodeId] {
        &self.mixes
    }

    /// Appends a raw class unless it is already present.
    pub fn add_class(&mut self, class: impl Into<String>) -> &mut Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Replaces all raw classes, dropping repeats but keeping first positions.
    pub fn set_classes<I, S>(&mut self, classes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = unique_in_order(classes.into_iter().map(Into::into));
        self
    }

    /// Removes a raw class; does nothing if it is absent.
    pub fn remove_class(&mut self, class: &str) -> &mut Self {
        if let Some(i) = self.classes.iter().position(|c| c == class) {
            self.classes.remove(i);
        }
        self
    }

    /// Returns `true` if the raw class is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns the raw classes in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
