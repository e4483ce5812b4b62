//! Leaf and branch values of a style tree.

use serde::{Deserialize, Serialize};

use super::tree::StyleTree;

/// A single value in a style tree: a scalar leaf or a nested tree.
///
/// The shape is closed: partitioning and merging match on this
/// enum instead of sniffing runtime types. Untagged serde keeps the external
/// representation plain: numbers and strings stay leaves, maps become trees.
///
/// # Example
///
/// ```rust
/// use restyle::{StyleTree, StyleValue};
///
/// let tree = StyleTree::new()
///     .with("width", 100)
///     .with("cursor", "pointer");
///
/// assert_eq!(tree.get("width"), Some(&StyleValue::Number(100.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A numeric leaf, e.g. a pixel size.
    Number(f64),
    /// A textual leaf, e.g. a color name.
    Text(String),
    /// A nested style tree, e.g. a property group or condition branch.
    Tree(StyleTree),
}

impl StyleValue {
    /// Returns the nested tree, if this value is one.
    pub fn as_tree(&self) -> Option<&StyleTree> {
        match self {
            StyleValue::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    /// Whether this value is a nested tree.
    pub fn is_tree(&self) -> bool {
        matches!(self, StyleValue::Tree(_))
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(value.into())
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Number(value.into())
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<StyleTree> for StyleValue {
    fn from(tree: StyleTree) -> Self {
        StyleValue::Tree(tree)
    }
}
