//! The style tree container.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::StyleValue;

/// A hierarchical style configuration: an ordered mapping from string keys to
/// scalar leaves or nested trees.
///
/// Keys are either property keys (ordinary style attributes) or condition
/// keys: an exact pseudo-state marker such as `:hover`, or an at-rule prefix
/// such as `@media screen and (min-width: 500px)`. Entries keep their
/// authoring order; the breakpoint evaluator's later-overrides-earlier rule
/// depends on it.
///
/// # Example
///
/// ```rust
/// use restyle::StyleTree;
///
/// let styles = StyleTree::new()
///     .with("color", "black")
///     .with(":hover", StyleTree::new().with("color", "blue"));
///
/// assert_eq!(styles.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleTree {
    entries: IndexMap<String, StyleValue>,
}

impl StyleTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds an entry, returning the updated tree for chaining.
    pub fn with<V: Into<StyleValue>>(mut self, key: &str, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an entry. An existing key keeps its position and takes the new
    /// value.
    pub fn insert<K: Into<String>, V: Into<StyleValue>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    /// Looks up an entry by key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Whether the tree has an entry under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.entries.iter()
    }

    /// Number of direct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
