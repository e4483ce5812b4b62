//! Pointer-hover condition layer.

use super::ConditionLayer;
use crate::error::ConfigurationError;
use crate::event::{Bindings, Event};
use crate::partition::{partition_by_key, Partition};
use crate::tree::{merge, StyleTree};
use crate::viewport::Viewport;

/// Applies the [`:hover`](Self::KEY) branches of its style input while the
/// pointer is over the element.
///
/// # Example
///
/// ```rust
/// use restyle::{ConditionLayer, Event, Hover, StyleTree};
///
/// let styles = StyleTree::new()
///     .with("color", "black")
///     .with(":hover", StyleTree::new().with("color", "blue"));
///
/// let mut hover = Hover::new();
/// hover.restyle(&styles).unwrap();
/// assert_eq!(hover.resolved(), StyleTree::new().with("color", "black"));
///
/// hover.handle(&Event::PointerEnter);
/// assert_eq!(hover.resolved(), StyleTree::new().with("color", "blue"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hover {
    parts: Partition,
    hovered: bool,
}

impl Hover {
    /// The exact condition key this layer partitions on.
    pub const KEY: &'static str = ":hover";

    /// Creates a layer with the pointer outside.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer is currently over the element.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

/// Next hover state for an incoming event.
fn transition(hovered: bool, event: &Event) -> bool {
    match event {
        Event::PointerEnter => true,
        Event::PointerLeave => false,
        _ => hovered,
    }
}

impl ConditionLayer for Hover {
    fn restyle(&mut self, styles: &StyleTree) -> Result<(), ConfigurationError> {
        self.parts = partition_by_key(styles, Self::KEY);
        Ok(())
    }

    fn handle(&mut self, event: &Event) -> bool {
        let next = transition(self.hovered, event);
        let changed = next != self.hovered;
        self.hovered = next;
        changed
    }

    fn resolved(&self) -> StyleTree {
        if self.hovered {
            merge(&self.parts.base, &self.parts.pruned)
        } else {
            self.parts.base.clone()
        }
    }

    fn bindings(&self) -> Bindings {
        Bindings::POINTER
    }

    fn on_mount(&mut self, _viewport: &Viewport) {}

    fn on_unmount(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        assert!(transition(false, &Event::PointerEnter));
        assert!(!transition(true, &Event::PointerLeave));
        assert!(transition(true, &Event::PointerEnter));
        assert!(!transition(false, &Event::PointerLeave));
        // Unrelated events leave the state alone.
        assert!(transition(true, &Event::FocusGained));
        assert!(!transition(false, &Event::Resize { width: 100 }));
    }

    #[test]
    fn test_hover_round_trip() {
        let styles: StyleTree = serde_json::from_value(serde_json::json!({
            "color": "black",
            ":hover": { "color": "blue" }
        }))
        .unwrap();

        let mut hover = Hover::new();
        hover.restyle(&styles).unwrap();
        assert_eq!(hover.resolved(), StyleTree::new().with("color", "black"));

        assert!(hover.handle(&Event::PointerEnter));
        assert!(hover.is_hovered());
        assert_eq!(hover.resolved(), StyleTree::new().with("color", "blue"));

        assert!(hover.handle(&Event::PointerLeave));
        assert_eq!(hover.resolved(), StyleTree::new().with("color", "black"));
    }

    #[test]
    fn test_repeated_enter_reports_no_change() {
        let mut hover = Hover::new();
        assert!(hover.handle(&Event::PointerEnter));
        assert!(!hover.handle(&Event::PointerEnter));
    }

    #[test]
    fn test_unbound_event_is_ignored() {
        let mut hover = Hover::new();
        assert!(!hover.handle(&Event::FocusGained));
        assert!(!hover.is_hovered());
        assert!(!hover.bindings().intersects(Bindings::FOCUS));
    }

    #[test]
    fn test_restyle_replaces_partition() {
        let mut hover = Hover::new();
        hover
            .restyle(&StyleTree::new().with("color", "black"))
            .unwrap();
        hover.handle(&Event::PointerEnter);

        let styles = StyleTree::new()
            .with("color", "gray")
            .with(":hover", StyleTree::new().with("color", "teal"));
        hover.restyle(&styles).unwrap();

        // Hover state survives a style change; the new branches apply.
        assert_eq!(hover.resolved(), StyleTree::new().with("color", "teal"));
    }
}
