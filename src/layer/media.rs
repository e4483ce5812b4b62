//! Viewport-breakpoint condition layer.

use super::ConditionLayer;
use crate::error::ConfigurationError;
use crate::event::{Bindings, Event};
use crate::media::{Environment, MediaRules, DEFAULT_WIDTH};
use crate::partition::{partition_by_pattern, KeyPattern};
use crate::tree::{merge, StyleTree};
use crate::viewport::{ResizeSubscription, Viewport};

/// Applies the [`@media`](Self::MARKER) branches of its style input whose
/// descriptors match the current viewport width.
///
/// Descriptors are compiled when the style input changes; resizes only
/// re-evaluate the compiled predicates. The layer assumes
/// [`DEFAULT_WIDTH`] until it mounts, then reads the viewport's measurement
/// and holds a scoped resize subscription until unmounted.
pub struct Media {
    pattern: KeyPattern,
    base: StyleTree,
    rules: MediaRules,
    width: u32,
    subscription: Option<ResizeSubscription>,
}

impl Media {
    /// The at-rule marker this layer partitions on.
    pub const MARKER: &'static str = "@media";

    /// Creates an unmounted layer at the pre-measurement width.
    pub fn new() -> Self {
        Self {
            pattern: KeyPattern::new(Self::MARKER),
            base: StyleTree::new(),
            rules: MediaRules::default(),
            width: DEFAULT_WIDTH,
            subscription: None,
        }
    }

    /// The viewport width the layer currently evaluates against.
    pub fn width(&self) -> u32 {
        self.width
    }

    fn environment(&self) -> Environment {
        Environment::screen(self.width)
    }
}

impl Default for Media {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionLayer for Media {
    fn restyle(&mut self, styles: &StyleTree) -> Result<(), ConfigurationError> {
        let parts = partition_by_pattern(styles, &self.pattern);
        self.rules = MediaRules::compile(&parts.pruned)?;
        self.base = parts.base;
        Ok(())
    }

    fn handle(&mut self, event: &Event) -> bool {
        match *event {
            Event::Resize { width } if width != self.width => {
                self.width = width;
                true
            }
            _ => false,
        }
    }

    fn resolved(&self) -> StyleTree {
        merge(&self.base, &self.rules.active_fragment(&self.environment()))
    }

    fn bindings(&self) -> Bindings {
        Bindings::RESIZE
    }

    fn on_mount(&mut self, viewport: &Viewport) {
        self.width = viewport.current().width;
        self.subscription = Some(viewport.subscribe());
    }

    fn on_unmount(&mut self) {
        self.subscription = None;
    }
}
