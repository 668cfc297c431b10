//! MiniJinja integration.
//!
//! Registers a `bem` function so templates can build class attributes
//! without a [`Tree`] in the render context:
//!
//! ```text
//! {{ bem("card") }}                                  -> card
//! {{ bem("card", "title", size="l", hidden=true) }}  -> card__title card__title--size_l card__title--hidden
//! {{ bem("card", none, muted=false) }}               -> card
//! ```
//!
//! Keyword arguments become modifiers in call order. Booleans, strings,
//! numbers and `none` map to the matching [`ModifierValue`]; any other value
//! is an error.

use minijinja::value::{Kwargs, ValueKind};
use minijinja::{Environment, Error, ErrorKind, Value};

use crate::naming::Naming;
use crate::node::NodeId;
use crate::tree::Tree;
use crate::value::{ModifierValue, Number};

/// Registers the `bem` function with the default naming convention.
pub fn register_bem_functions(env: &mut Environment<'_>) {
    register_bem_functions_with(env, Naming::default());
}

/// Registers the `bem` function with a custom naming convention.
///
/// # Example
///
/// ```rust
/// use minijinja::Environment;
/// use standout_bem::{register_bem_functions_with, Naming};
///
/// let mut env = Environment::new();
/// register_bem_functions_with(&mut env, Naming::new().with_element_separator("-"));
///
/// let out = env.render_str(r#"{{ bem("nav", "link") }}"#, ()).unwrap();
/// assert_eq!(out, "nav-link");
/// ```
pub fn register_bem_functions_with(env: &mut Environment<'_>, naming: Naming) {
    log::debug!("registering bem template function");
    env.add_function(
        "bem",
        move |block: String, element: Option<String>, kwargs: Kwargs| -> Result<String, Error> {
            bem(&naming, &block, element.as_deref(), &kwargs)
        },
    );
}

fn bem(
    naming: &Naming,
    block: &str,
    element: Option<&str>,
    kwargs: &Kwargs,
) -> Result<String, Error> {
    let mut tree = Tree::with_naming(naming.clone());
    let block = tree.block(block);
    let target: NodeId = match element {
        Some(element) => tree.create_element(block, element).into(),
        None => block.into(),
    };

    for name in kwargs.args() {
        let value: Value = kwargs.get(name)?;
        tree[target].add_modifier(name, modifier_value(name, &value)?);
    }
    kwargs.assert_all_used()?;

    tree.build_classes(target)
        .map_err(|err| Error::new(ErrorKind::InvalidOperation, err.to_string()))
}

/// Converts a template value into a modifier value.
fn modifier_value(name: &str, value: &Value) -> Result<ModifierValue, Error> {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => Ok(ModifierValue::Null),
        ValueKind::Bool => Ok(ModifierValue::Flag(value.is_true())),
        ValueKind::String => Ok(ModifierValue::Text(value.to_string())),
        ValueKind::Number => {
            if let Ok(n) = i64::try_from(value.clone()) {
                Ok(ModifierValue::Number(Number::Int(n)))
            } else {
                let n = f64::try_from(value.clone())?;
                Ok(ModifierValue::Number(Number::Float(n)))
            }
        }
        kind => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("modifier '{}' cannot take a value of type {}", name, kind),
        )),
    }
}
