//! Right-biased deep merge.

use super::tree::StyleTree;
use super::value::StyleValue;

/// Deep-merges two style trees; `overlay` wins.
///
/// For a shared key, two nested trees merge recursively; any other pairing
/// takes the overlay's value, including a scalar on one side and a tree on
/// the other. Neither input is mutated, so `base` and `overlay` may be reused
/// across renders of sibling layers.
///
/// # Example
///
/// ```rust
/// use restyle::{merge, StyleTree};
///
/// let base = StyleTree::new().with("color", "black").with("width", 100);
/// let overlay = StyleTree::new().with("color", "blue");
///
/// let resolved = merge(&base, &overlay);
/// assert_eq!(resolved, StyleTree::new().with("color", "blue").with("width", 100));
/// ```
pub fn merge(base: &StyleTree, overlay: &StyleTree) -> StyleTree {
    let mut merged = base.clone();
    for (key, value) in overlay.iter() {
        let next = match (merged.get(key), value) {
            (Some(StyleValue::Tree(current)), StyleValue::Tree(incoming)) => {
                StyleValue::Tree(merge(current, incoming))
            }
            (_, incoming) => incoming.clone(),
        };
        merged.insert(key.clone(), next);
    }
    merged
}
