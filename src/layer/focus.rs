//! Input-focus condition layer.

use super::ConditionLayer;
use crate::error::ConfigurationError;
use crate::event::{Bindings, Event};
use crate::partition::{partition_by_key, Partition};
use crate::tree::{merge, StyleTree};
use crate::viewport::Viewport;

/// Applies the [`:focus`](Self::KEY) branches of its style input while the
/// element holds input focus.
#[derive(Debug, Clone, Default)]
pub struct Focus {
    parts: Partition,
    focused: bool,
}

impl Focus {
    /// The exact condition key this layer partitions on.
    pub const KEY: &'static str = ":focus";

    /// Creates a blurred layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the element currently holds focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

/// Next focus state for an incoming event.
fn transition(focused: bool, event: &Event) -> bool {
    match event {
        Event::FocusGained => true,
        Event::FocusLost => false,
        _ => focused,
    }
}

impl ConditionLayer for Focus {
    fn restyle(&mut self, styles: &StyleTree) -> Result<(), ConfigurationError> {
        self.parts = partition_by_key(styles, Self::KEY);
        Ok(())
    }

    fn handle(&mut self, event: &Event) -> bool {
        let next = transition(self.focused, event);
        let changed = next != self.focused;
        self.focused = next;
        changed
    }

    fn resolved(&self) -> StyleTree {
        if self.focused {
            merge(&self.parts.base, &self.parts.pruned)
        } else {
            self.parts.base.clone()
        }
    }

    fn bindings(&self) -> Bindings {
        Bindings::FOCUS
    }

    fn on_mount(&mut self, _viewport: &Viewport) {}

    fn on_unmount(&mut self) {}
}
