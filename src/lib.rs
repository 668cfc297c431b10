//! # Standout BEM - Block-Element-Modifier class names
//!
//! `standout-bem` builds CSS class strings following the BEM naming
//! convention. Blocks and elements are decorated with modifiers, other
//! nodes can be mixed in, and raw classes can be appended. Resolution turns
//! that tree into a deterministic, duplicate-free class list.
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_bem::Tree;
//!
//! let mut tree = Tree::new();
//! let card = tree.block("card");
//! let title = tree.create_element(card, "title");
//! let hidden = tree.block("node-a");
//!
//! tree[hidden].add_flag("hidden");
//! tree[card]
//!     .add_class("js")
//!     .add_modifier("color", "red")
//!     .add_mix(hidden);
//! tree[title].add_modifier("size", 2);
//!
//! assert_eq!(
//!     tree.build_classes(card).unwrap(),
//!     "card card--color_red node-a node-a--hidden js"
//! );
//! assert_eq!(tree.display(title).to_string(), "card__title card__title--size_2");
//! ```
//!
//! ## Resolution order
//!
//! A node resolves to, in this order:
//!
//! 1. its base class (`block` or `block__element`)
//! 2. its own modifier classes, in the order the modifiers were added
//! 3. the full resolved class list of each mix, in the order mixes were added
//! 4. its raw extra classes
//!
//! Duplicates are removed globally, keeping the position of the first
//! occurrence.
//!
//! ## Modifier values
//!
//! | Value              | Class                |
//! |--------------------|----------------------|
//! | `true`             | `base--name`         |
//! | `false` / `None`   | (nothing)            |
//! | `"red"` / `3`      | `base--name_red`     |
//!
//! ## Mix cycles
//!
//! Mixes are non-owning references and may form a graph. A node that mixes
//! itself, directly or through other nodes, cannot be resolved:
//! [`Tree::resolve_classes`] returns [`ResolveError::CycleDetected`] and
//! [`Tree::validate`] reports the same error up front.
//!
//! ## Templates
//!
//! [`register_bem_functions`] adds a `bem` function to a MiniJinja
//! environment, so templates can produce class attributes directly:
//!
//! ```rust
//! use minijinja::Environment;
//! use standout_bem::register_bem_functions;
//!
//! let mut env = Environment::new();
//! register_bem_functions(&mut env);
//! let out = env
//!     .render_str(r#"<li class="{{ bem("menu", "item", active=true) }}">"#, ())
//!     .unwrap();
//! assert_eq!(out, r#"<li class="menu__item menu__item--active">"#);
//! ```

mod error;
mod naming;
mod node;
mod resolve;
mod template;
mod tree;
mod util;
mod value;

pub use error::ResolveError;
pub use naming::Naming;
pub use node::{BlockId, ElementId, Modifier, Node, NodeId, NodeKind, ResolveBaseClass};
pub use resolve::NodeDisplay;
pub use template::{register_bem_functions, register_bem_functions_with};
pub use tree::Tree;
pub use value::{ModifierValue, Number};
