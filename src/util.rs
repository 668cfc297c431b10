//! Small helpers shared by the node and resolution code.

use std::collections::HashSet;

/// Removes duplicate strings, keeping the first occurrence of each.
pub(crate) fn unique_in_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unique_in_order_keeps_first_position() {
        let result = unique_in_order(strings(&["a", "b", "a", "c", "b"]));
        assert_eq!(result, strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_unique_in_order_empty() {
        assert!(unique_in_order(Vec::new()).is_empty());
    }

    #[test]
    fn test_unique_in_order_no_duplicates_unchanged() {
        let input = strings(&["z", "y", "x"]);
        assert_eq!(unique_in_order(input.clone()), input);
    }
}
