//! Compiled breakpoint evaluation.

use super::environment::Environment;
use super::query::MediaQuery;
use crate::error::ConfigurationError;
use crate::tree::{merge, StyleTree, StyleValue};

#[derive(Debug, Clone)]
struct RuleGroup {
    key: String,
    rules: Vec<(MediaQuery, StyleTree)>,
}

/// The breakpoint branches of a pruned style tree, compiled for evaluation.
///
/// Each top-level key of the pruned tree is a target group; its entries map
/// descriptors to style fragments. Compiling parses every descriptor up
/// front, so a malformed tree fails configuration before any evaluation
/// happens.
#[derive(Debug, Clone, Default)]
pub struct MediaRules {
    groups: Vec<RuleGroup>,
}

impl MediaRules {
    /// Compiles the pruned side of a pattern partition.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::MissingDescriptor`] when a group holds a
    ///   scalar or nothing at all where at least one descriptor is required
    /// - [`ConfigurationError::MalformedDescriptor`] when a descriptor fails
    ///   to parse, or maps to a scalar instead of a style block
    pub fn compile(pruned: &StyleTree) -> Result<Self, ConfigurationError> {
        let mut groups = Vec::new();
        for (key, value) in pruned.iter() {
            let entries = match value {
                StyleValue::Tree(tree) if !tree.is_empty() => tree,
                _ => {
                    return Err(ConfigurationError::MissingDescriptor { group: key.clone() });
                }
            };

            let mut rules = Vec::new();
            for (descriptor, fragment) in entries.iter() {
                let query = MediaQuery::parse(descriptor)?;
                let fragment = match fragment {
                    StyleValue::Tree(tree) => tree.clone(),
                    _ => {
                        return Err(ConfigurationError::MalformedDescriptor {
                            descriptor: descriptor.clone(),
                            reason: "descriptor must map to a style block".to_string(),
                        });
                    }
                };
                rules.push((query, fragment));
            }
            groups.push(RuleGroup {
                key: key.clone(),
                rules,
            });
        }
        Ok(Self { groups })
    }

    /// Unions the fragments of all descriptors satisfied by `env`.
    ///
    /// Fragments merge in authoring order, later matches overriding earlier
    /// ones on leaf conflicts, and each group's merged fragment is applied
    /// keyed by the group, never flattened into it. A group with no matching
    /// descriptor contributes an empty fragment under its key.
    pub fn active_fragment(&self, env: &Environment) -> StyleTree {
        let mut active = StyleTree::new();
        for group in &self.groups {
            let mut fragment = StyleTree::new();
            for (query, styles) in &group.rules {
                if query.matches(env) {
                    fragment = merge(&fragment, styles);
                }
            }
            active.insert(group.key.clone(), fragment);
        }
        active
    }

    /// Whether the style input had any breakpoint branches at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Evaluates a pruned breakpoint tree against `env` in one step.
///
/// Convenience for [`MediaRules::compile`] followed by
/// [`MediaRules::active_fragment`]; layers keep the compiled form around
/// instead, re-evaluating it on every resize.
pub fn evaluate(pruned: &StyleTree, env: &Environment) -> Result<StyleTree, ConfigurationError> {
    Ok(MediaRules::compile(pruned)?.active_fragment(env))
}
