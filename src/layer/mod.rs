//! Condition layers: one explicit state holder per condition kind.
//!
//! A layer owns one piece of condition state, partitions its style input into
//! always-applied and gated parts, and resolves the two back into a single
//! tree whenever its condition changes:
//!
//! - [`Hover`]: `:hover` branches while the pointer is over the element
//! - [`Focus`]: `:focus` branches while the element holds input focus
//! - [`Media`]: `@media` branches matching the current viewport
//!
//! All three implement [`ConditionLayer`], the seam the
//! [`Stack`](crate::Stack) composes over.

mod focus;
mod hover;
mod media;

pub use focus::Focus;
pub use hover::Hover;
pub use media::Media;

use crate::error::ConfigurationError;
use crate::event::{Bindings, Event};
use crate::tree::StyleTree;
use crate::viewport::Viewport;

/// One conditional-styling dimension wrapped around an element.
///
/// Lifecycle: [`restyle`](Self::restyle) on every style input change,
/// [`handle`](Self::handle) on every trigger event,
/// [`resolved`](Self::resolved) whenever the wrapped element renders.
/// [`on_mount`](Self::on_mount) / [`on_unmount`](Self::on_unmount) bracket
/// the layer's time in the tree, acquiring and releasing its event
/// subscription.
pub trait ConditionLayer {
    /// Re-partitions (and for breakpoints, re-compiles) a new style input.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] when the input's condition branches
    /// are malformed; the caller propagates it instead of rendering an empty
    /// style silently.
    fn restyle(&mut self, styles: &StyleTree) -> Result<(), ConfigurationError>;

    /// Feeds one trigger event through the layer's transition, returning
    /// whether the condition state changed.
    fn handle(&mut self, event: &Event) -> bool;

    /// The resolved style for the current condition state: the base tree
    /// merged with the active fragment.
    fn resolved(&self) -> StyleTree;

    /// The trigger events this layer wants forwarded, re-declared
    /// unconditionally on every render.
    fn bindings(&self) -> Bindings;

    /// Acquires the layer's event subscription and initial measurement.
    fn on_mount(&mut self, viewport: &Viewport);

    /// Synchronously releases the layer's event subscription; no event may
    /// fire against the layer afterwards. Dropping the layer releases it
    /// too.
    fn on_unmount(&mut self);
}
