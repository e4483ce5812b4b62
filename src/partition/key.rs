//! Partitioning by exact condition key.

use super::Partition;
use crate::tree::{StyleTree, StyleValue};

/// Splits `tree` into the entries that always apply and the entries gated
/// behind the exact condition key `key` (e.g. `:hover`).
///
/// An entry whose key equals `key` has its children hoisted directly into the
/// pruned result at the current nesting level; the condition key itself is
/// discarded, not kept as a nesting layer. Other nested entries recurse, with
/// the child's base and pruned re-nested under the entry key on their
/// respective sides whether or not they came back empty. Scalars go to base
/// unchanged. A tree without `key` anywhere partitions to an empty pruned
/// side.
///
/// # Example
///
/// ```rust
/// use restyle::{partition_by_key, StyleTree};
///
/// let styles = StyleTree::new()
///     .with("color", "black")
///     .with(":hover", StyleTree::new().with("color", "blue"));
///
/// let parts = partition_by_key(&styles, ":hover");
/// assert_eq!(parts.base, StyleTree::new().with("color", "black"));
/// assert_eq!(parts.pruned, StyleTree::new().with("color", "blue"));
/// ```
pub fn partition_by_key(tree: &StyleTree, key: &str) -> Partition {
    let mut base = StyleTree::new();
    let mut pruned = StyleTree::new();

    for (name, value) in tree.iter() {
        if name == key {
            // Hoist the matched subtree's children to this level. A scalar
            // under the condition key has no children to hoist.
            if let StyleValue::Tree(children) = value {
                for (child, child_value) in children.iter() {
                    pruned.insert(child.clone(), child_value.clone());
                }
            }
            continue;
        }

        match value {
            StyleValue::Tree(child) => {
                let parts = partition_by_key(child, key);
                base.insert(name.clone(), parts.base);
                pruned.insert(name.clone(), parts.pruned);
            }
            scalar => base.insert(name.clone(), scalar.clone()),
        }
    }

    Partition { base, pruned }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles() -> StyleTree {
        serde_json::from_value(serde_json::json!({
            "box": {
                "color": "black",
                ":hover": { "color": "blue" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_hover_partition() {
        let parts = partition_by_key(styles().get("box").unwrap().as_tree().unwrap(), ":hover");

        assert_eq!(parts.base, StyleTree::new().with("color", "black"));
        assert_eq!(parts.pruned, StyleTree::new().with("color", "blue"));
    }

    #[test]
    fn test_nested_match_hoists_into_parent_level() {
        let parts = partition_by_key(&styles(), ":hover");

        // The condition key is discarded; its children land inside `box` on
        // the pruned side, next to nothing else.
        assert_eq!(
            parts.pruned,
            StyleTree::new().with("box", StyleTree::new().with("color", "blue"))
        );
        assert_eq!(
            parts.base,
            StyleTree::new().with("box", StyleTree::new().with("color", "black"))
        );
    }

    #[test]
    fn test_absent_key_leaves_base_intact() {
        let tree: StyleTree = serde_json::from_value(serde_json::json!({
            "width": 100,
            "box": { "color": "black" }
        }))
        .unwrap();

        let parts = partition_by_key(&tree, ":focus");
        assert_eq!(parts.base, tree);
        // Empty branches are kept on the pruned side, mirroring base's shape.
        assert_eq!(
            parts.pruned,
            StyleTree::new().with("box", StyleTree::new())
        );
    }

    #[test]
    fn test_empty_branches_are_not_dropped() {
        let tree: StyleTree = serde_json::from_value(serde_json::json!({
            ":hover": { "color": "blue" },
            "label": {}
        }))
        .unwrap();

        let parts = partition_by_key(&tree, ":hover");
        assert_eq!(parts.base, StyleTree::new().with("label", StyleTree::new()));
        assert_eq!(
            parts.pruned,
            StyleTree::new()
                .with("color", "blue")
                .with("label", StyleTree::new())
        );
    }

    #[test]
    fn test_every_leaf_lands_on_exactly_one_side() {
        let tree: StyleTree = serde_json::from_value(serde_json::json!({
            "width": 100,
            "inner": {
                "height": 50,
                ":hover": { "cursor": "pointer", "depth": { "z": 3 } }
            }
        }))
        .unwrap();

        let parts = partition_by_key(&tree, ":hover");

        fn leaves(tree: &StyleTree, out: &mut Vec<StyleValue>) {
            for (_, value) in tree.iter() {
                match value {
                    StyleValue::Tree(child) => leaves(child, out),
                    scalar => out.push(scalar.clone()),
                }
            }
        }

        let mut base_leaves = Vec::new();
        let mut pruned_leaves = Vec::new();
        leaves(&parts.base, &mut base_leaves);
        leaves(&parts.pruned, &mut pruned_leaves);

        assert_eq!(
            base_leaves,
            vec![StyleValue::Number(100.0), StyleValue::Number(50.0)]
        );
        assert_eq!(
            pruned_leaves,
            vec![StyleValue::Text("pointer".into()), StyleValue::Number(3.0)]
        );
    }
}
