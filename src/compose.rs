//! Layer composition: chaining condition layers around one element.

use crate::error::ConfigurationError;
use crate::event::{Bindings, Event};
use crate::layer::{ConditionLayer, Focus, Hover, Media};
use crate::tree::StyleTree;
use crate::viewport::Viewport;

/// The condition kinds a [`Composer`] can chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Hover,
    Focus,
    Media,
}

impl LayerKind {
    fn build(self) -> Box<dyn ConditionLayer> {
        match self {
            LayerKind::Hover => Box::new(Hover::new()),
            LayerKind::Focus => Box::new(Focus::new()),
            LayerKind::Media => Box::new(Media::new()),
        }
    }
}

/// An ordered recipe of condition layers.
///
/// The first added layer becomes the outermost wrapper; later layers wrap
/// progressively inward, terminating at the element. Every layer partitions
/// the one author-supplied tree along its own condition dimension; the chain
/// is not a pipeline of unrelated transforms.
///
/// # Example
///
/// ```rust
/// use restyle::{Composer, LayerKind, StyleTree};
///
/// let recipe = Composer::new()
///     .layer(LayerKind::Media)
///     .layer(LayerKind::Hover);
///
/// let stack = recipe.wrap(StyleTree::new().with("color", "black")).unwrap();
/// assert_eq!(stack.resolved(), &StyleTree::new().with("color", "black"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Composer {
    kinds: Vec<LayerKind>,
}

impl Composer {
    /// An empty recipe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the next layer inward, returning the recipe for chaining.
    pub fn layer(mut self, kind: LayerKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// Builds a [`Stack`] over the author's style tree.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] when a condition branch in `styles`
    /// is malformed, surfaced here at configuration time rather than at first
    /// match.
    pub fn wrap(&self, styles: StyleTree) -> Result<Stack, ConfigurationError> {
        Stack::new(self.kinds.iter().map(|kind| kind.build()).collect(), styles)
    }
}

/// The canonical chain: breakpoints outermost, then focus, then hover.
pub fn css() -> Composer {
    Composer::new()
        .layer(LayerKind::Media)
        .layer(LayerKind::Focus)
        .layer(LayerKind::Hover)
}

/// An element's condition layers, chained outermost-first.
///
/// The author tree feeds the outermost layer; each layer's resolved output is
/// the next layer's style input; the innermost output is what the element
/// renders with. Layers own disjoint state and trigger independently.
pub struct Stack {
    styles: StyleTree,
    layers: Vec<Box<dyn ConditionLayer>>,
    resolved: StyleTree,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stack")
            .field("styles", &self.styles)
            .field("layers", &self.layers.len())
            .field("resolved", &self.resolved)
            .finish()
    }
}

impl Stack {
    fn new(
        layers: Vec<Box<dyn ConditionLayer>>,
        styles: StyleTree,
    ) -> Result<Self, ConfigurationError> {
        let mut stack = Self {
            styles,
            layers,
            resolved: StyleTree::new(),
        };
        stack.thread_all()?;
        Ok(stack)
    }

    /// Threads the author tree through every layer, re-partitioning each.
    fn thread_all(&mut self) -> Result<(), ConfigurationError> {
        let mut input = self.styles.clone();
        for layer in &mut self.layers {
            layer.restyle(&input)?;
            input = layer.resolved();
        }
        self.resolved = input;
        Ok(())
    }

    /// Re-threads downstream of the layer at `index`. That layer's partition
    /// is still valid (only its condition state changed), so partitioning
    /// restarts at the first layer whose input actually changed.
    fn refresh_from(&mut self, index: usize) -> Result<(), ConfigurationError> {
        let mut input = self.layers[index].resolved();
        for layer in &mut self.layers[index + 1..] {
            layer.restyle(&input)?;
            input = layer.resolved();
        }
        self.resolved = input;
        Ok(())
    }

    /// Replaces the author style tree and re-partitions every layer.
    pub fn set_styles(&mut self, styles: StyleTree) -> Result<(), ConfigurationError> {
        self.styles = styles;
        self.thread_all()
    }

    /// Routes one trigger event to the layers bound to it.
    ///
    /// Returns whether any layer's state changed (and the resolved style was
    /// recomputed).
    pub fn dispatch(&mut self, event: &Event) -> Result<bool, ConfigurationError> {
        let mut outermost_changed = None;
        for (index, layer) in self.layers.iter_mut().enumerate() {
            if layer.bindings().intersects(event.binding()) && layer.handle(event) {
                outermost_changed.get_or_insert(index);
            }
        }
        match outermost_changed {
            Some(index) => {
                self.refresh_from(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The innermost layer's output: the style the element renders with.
    pub fn resolved(&self) -> &StyleTree {
        &self.resolved
    }

    /// Union of the layers' event bindings, re-collected on every call.
    pub fn bindings(&self) -> Bindings {
        self.layers
            .iter()
            .fold(Bindings::empty(), |all, layer| all | layer.bindings())
    }

    /// Mounts every layer against the host viewport and re-threads with the
    /// measured environment.
    pub fn mount(&mut self, viewport: &Viewport) -> Result<(), ConfigurationError> {
        for layer in &mut self.layers {
            layer.on_mount(viewport);
        }
        self.thread_all()
    }

    /// Unmounts every layer, synchronously releasing their subscriptions.
    /// Dropping the stack releases them as well.
    pub fn unmount(&mut self) {
        for layer in &mut self.layers {
            layer.on_unmount();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::Environment;
    use crate::tree::StyleValue;

    fn box_styles() -> StyleTree {
        serde_json::from_value(serde_json::json!({
            "box": {
                "backgroundColor": "black",
                ":hover": { "backgroundColor": "blue" },
                ":focus": { "backgroundColor": "green" }
            }
        }))
        .unwrap()
    }

    fn background(stack: &Stack) -> StyleValue {
        stack
            .resolved()
            .get("box")
            .unwrap()
            .as_tree()
            .unwrap()
            .get("backgroundColor")
            .unwrap()
            .clone()
    }

    #[test]
    fn test_wrap_resolves_base_styles() {
        let stack = css().wrap(box_styles()).unwrap();
        assert_eq!(background(&stack), StyleValue::Text("black".into()));
    }

    #[test]
    fn test_hover_and_focus_layers_trigger_independently() {
        let mut stack = css().wrap(box_styles()).unwrap();

        assert!(stack.dispatch(&Event::FocusGained).unwrap());
        assert_eq!(background(&stack), StyleValue::Text("green".into()));

        // Hover wraps inside focus, so its branch wins while both are active.
        assert!(stack.dispatch(&Event::PointerEnter).unwrap());
        assert_eq!(background(&stack), StyleValue::Text("blue".into()));

        assert!(stack.dispatch(&Event::PointerLeave).unwrap());
        assert_eq!(background(&stack), StyleValue::Text("green".into()));

        assert!(stack.dispatch(&Event::FocusLost).unwrap());
        assert_eq!(background(&stack), StyleValue::Text("black".into()));
    }

    #[test]
    fn test_dispatch_without_bound_layer_reports_no_change() {
        let mut stack = Composer::new()
            .layer(LayerKind::Hover)
            .wrap(box_styles())
            .unwrap();

        assert!(!stack.dispatch(&Event::Resize { width: 400 }).unwrap());
        assert!(!stack.dispatch(&Event::PointerLeave).unwrap());
    }

    #[test]
    fn test_bindings_union_all_layers() {
        let stack = css().wrap(StyleTree::new()).unwrap();
        assert_eq!(
            stack.bindings(),
            Bindings::POINTER | Bindings::FOCUS | Bindings::RESIZE
        );

        let hover_only = Composer::new()
            .layer(LayerKind::Hover)
            .wrap(StyleTree::new())
            .unwrap();
        assert_eq!(hover_only.bindings(), Bindings::POINTER);
    }

    #[test]
    fn test_set_styles_rethreads() {
        let mut stack = css().wrap(box_styles()).unwrap();
        stack.dispatch(&Event::PointerEnter).unwrap();
        assert_eq!(background(&stack), StyleValue::Text("blue".into()));

        let restyled: StyleTree = serde_json::from_value(serde_json::json!({
            "box": {
                "backgroundColor": "white",
                ":hover": { "backgroundColor": "crimson" }
            }
        }))
        .unwrap();
        stack.set_styles(restyled).unwrap();
        assert_eq!(background(&stack), StyleValue::Text("crimson".into()));
    }

    #[test]
    fn test_wrap_rejects_malformed_breakpoints() {
        let styles: StyleTree = serde_json::from_value(serde_json::json!({
            "box": {
                "@media screen and (min-depth: 3px)": { "width": 1 }
            }
        }))
        .unwrap();

        assert!(matches!(
            css().wrap(styles),
            Err(ConfigurationError::MalformedDescriptor { .. })
        ));
    }

    #[test]
    fn test_mount_and_unmount_manage_subscriptions() {
        let viewport = Viewport::new(Environment::screen(800));
        let mut stack = css().wrap(box_styles()).unwrap();

        stack.mount(&viewport).unwrap();
        assert_eq!(viewport.subscriber_count(), 1);

        stack.unmount();
        assert_eq!(viewport.subscriber_count(), 0);
    }

    #[test]
    fn test_drop_releases_subscriptions() {
        let viewport = Viewport::new(Environment::screen(800));
        let mut stack = css().wrap(box_styles()).unwrap();
        stack.mount(&viewport).unwrap();

        drop(stack);
        assert_eq!(viewport.subscriber_count(), 0);
    }

    #[test]
    fn test_sibling_stacks_share_nothing() {
        let mut first = css().wrap(box_styles()).unwrap();
        let mut second = css().wrap(box_styles()).unwrap();

        first.dispatch(&Event::PointerEnter).unwrap();
        second.dispatch(&Event::FocusGained).unwrap();

        assert_eq!(background(&first), StyleValue::Text("blue".into()));
        assert_eq!(background(&second), StyleValue::Text("green".into()));
    }

    #[test]
    fn test_empty_composer_passes_styles_through() {
        let stack = Composer::new().wrap(box_styles()).unwrap();
        assert_eq!(stack.resolved(), &box_styles());
    }
}
