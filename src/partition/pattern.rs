//! Partitioning by at-rule key pattern.

use super::Partition;
use crate::tree::{StyleTree, StyleValue};

/// A typed at-rule marker matched against style keys, e.g. `@media`.
///
/// A key matches when it starts with the marker; renaming strips the marker
/// and any whitespace after it, so `@media screen and (min-width: 500px)`
/// becomes `screen and (min-width: 500px)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPattern {
    marker: String,
}

impl KeyPattern {
    /// Creates a pattern for the given at-rule marker.
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.to_string(),
        }
    }

    /// Whether `key` matches this pattern.
    pub fn matches(&self, key: &str) -> bool {
        key.starts_with(&self.marker)
    }

    /// Strips the marker from a matching key, or returns `None`.
    pub fn rename(&self, key: &str) -> Option<String> {
        key.strip_prefix(&self.marker)
            .map(|rest| rest.trim_start().to_string())
    }
}

/// Splits `tree` into the entries that always apply and the entries gated
/// behind keys matching `pattern`.
///
/// A matching key is renamed (marker stripped) and its full value, nesting
/// preserved, goes under the renamed key in the pruned result; nothing goes
/// to base for that entry. Nested entries recurse, and a child result that
/// comes back empty is dropped from its side instead of re-nested. This
/// empty-branch pruning is deliberately different from
/// [`partition_by_key`](super::partition_by_key), which keeps empty branches.
///
/// # Example
///
/// ```rust
/// use restyle::{partition_by_pattern, KeyPattern, StyleTree};
///
/// let styles = StyleTree::new().with(
///     "box",
///     StyleTree::new().with("@media screen", StyleTree::new().with("color", "yellow")),
/// );
///
/// let parts = partition_by_pattern(&styles, &KeyPattern::new("@media"));
/// assert!(parts.base.is_empty());
/// assert_eq!(
///     parts.pruned,
///     StyleTree::new().with(
///         "box",
///         StyleTree::new().with("screen", StyleTree::new().with("color", "yellow")),
///     ),
/// );
/// ```
pub fn partition_by_pattern(tree: &StyleTree, pattern: &KeyPattern) -> Partition {
    let mut base = StyleTree::new();
    let mut pruned = StyleTree::new();

    for (name, value) in tree.iter() {
        if let Some(renamed) = pattern.rename(name) {
            pruned.insert(renamed, value.clone());
            continue;
        }

        match value {
            StyleValue::Tree(child) => {
                let parts = partition_by_pattern(child, pattern);
                if !parts.base.is_empty() {
                    base.insert(name.clone(), parts.base);
                }
                if !parts.pruned.is_empty() {
                    pruned.insert(name.clone(), parts.pruned);
                }
            }
            scalar => base.insert(name.clone(), scalar.clone()),
        }
    }

    Partition { base, pruned }
}
