//! Naming convention: the separators used to build class names.
//!
//! The default convention is classic BEM:
//!
//! | Part                  | Default | Example               |
//! |-----------------------|---------|-----------------------|
//! | element separator     | `__`    | `card__title`         |
//! | modifier separator    | `--`    | `card--hidden`        |
//! | value separator       | `_`     | `card--color_red`     |
//!
//! A [`Naming`] can be built fluently or deserialized from a config section,
//! where missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

const DEFAULT_ELEMENT_SEPARATOR: &str = "__";
const DEFAULT_MODIFIER_SEPARATOR: &str = "--";
const DEFAULT_VALUE_SEPARATOR: &str = "_";

/// Separators used when composing block, element and modifier classes.
///
/// # Example
///
/// ```rust
/// use standout_bem::{Naming, Tree};
///
/// let naming = Naming::new()
///     .with_element_separator("-")
///     .with_modifier_separator("_")
///     .with_value_separator("_");
///
/// let mut tree = Tree::with_naming(naming);
/// let card = tree.block("card");
/// let title = tree.create_element(card, "title");
/// tree[title].add_modifier("size", "l");
///
/// assert_eq!(tree.build_classes(title).unwrap(), "card-title card-title_size_l");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Naming {
    element_separator: String,
    modifier_separator: String,
    value_separator: String,
}

impl Naming {
    /// Creates the default BEM naming convention.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator between a block and an element name.
    pub fn with_element_separator(mut self, separator: impl Into<String>) -> Self {
        self.element_separator = separator.into();
        self
    }

    /// Sets the separator between a base class and a modifier name.
    pub fn with_modifier_separator(mut self, separator: impl Into<String>) -> Self {
        self.modifier_separator = separator.into();
        self
    }

    /// Sets the separator between a modifier name and its value.
    pub fn with_value_separator(mut self, separator: impl Into<String>) -> Self {
        self.value_separator = separator.into();
        self
    }

    pub fn element_separator(&self) -> &str {
        &self.element_separator
    }

    pub fn modifier_separator(&self) -> &str {
        &self.modifier_separator
    }

    pub fn value_separator(&self) -> &str {
        &self.value_separator
    }

    /// Composes an element's base class from its block and element names.
    pub fn element_class(&self, block: &str, element: &str) -> String {
        format!("{}{}{}", block, self.element_separator, element)
    }

    /// Composes a modifier class, with an optional value suffix.
    pub fn modifier_class(&self, base: &str, modifier: &str, value: Option<&str>) -> String {
        match value {
            Some(value) => format!(
                "{}{}{}{}{}",
                base, self.modifier_separator, modifier, self.value_separator, value
            ),
            None => format!("{}{}{}", base, self.modifier_separator, modifier),
        }
    }
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            element_separator: DEFAULT_ELEMENT_SEPARATOR.to_string(),
            modifier_separator: DEFAULT_MODIFIER_SEPARATOR.to_string(),
            value_separator: DEFAULT_VALUE_SEPARATOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separators() {
        let naming = Naming::default();
        assert_eq!(naming.element_separator(), "__");
        assert_eq!(naming.modifier_separator(), "--");
        assert_eq!(naming.value_separator(), "_");
    }

    #[test]
    fn test_element_class() {
        assert_eq!(Naming::new().element_class("test", "elem"), "test__elem");
    }

    #[test]
    fn test_modifier_class() {
        let naming = Naming::new();
        assert_eq!(naming.modifier_class("test", "hidden", None), "test--hidden");
        assert_eq!(
            naming.modifier_class("test", "color", Some("red")),
            "test--color_red"
        );
    }

    #[test]
    fn test_builder_overrides() {
        let naming = Naming::new()
            .with_element_separator("-")
            .with_modifier_separator("_")
            .with_value_separator("-");
        assert_eq!(naming.element_class("a", "b"), "a-b");
        assert_eq!(naming.modifier_class("a", "m", Some("v")), "a_m-v");
    }

    #[test]
    fn test_deserialize_partial_json() {
        let naming: Naming = serde_json::from_str(r#"{"element_separator": "-"}"#).unwrap();
        assert_eq!(naming.element_separator(), "-");
        assert_eq!(naming.modifier_separator(), "--");
        assert_eq!(naming.value_separator(), "_");
    }

    #[test]
    fn test_deserialize_yaml() {
        let yaml = "modifier_separator: '_'\nvalue_separator: '-'\n";
        let naming: Naming = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(naming.element_separator(), "__");
        assert_eq!(naming.modifier_class("btn", "size", Some("l")), "btn_size-l");
    }

    #[test]
    fn test_deserialize_empty_is_default() {
        let naming: Naming = serde_json::from_str("{}").unwrap();
        assert_eq!(naming, Naming::default());
    }
}
