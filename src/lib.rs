//! Conditional style resolution for UI elements.
//!
//! One style tree describes an element's default appearance plus override
//! branches gated behind conditions: `:hover` and `:focus` pseudo-states and
//! `@media` viewport breakpoints. Condition layers partition the tree into
//! always-applied and gated parts, watch their trigger signal, and merge the
//! active parts back in, so a single element reacts to several independent
//! condition sources at once.
//!
//! The crate is the data-transformation core: it takes trigger events in and
//! hands one resolved style tree out per render. Rendering the element and
//! wiring platform listeners stay with the host.
//!
//! # Example
//!
//! ```rust
//! use restyle::{css, Event, StyleTree, Viewport};
//!
//! let styles = StyleTree::new().with(
//!     "box",
//!     StyleTree::new()
//!         .with("backgroundColor", "black")
//!         .with(":hover", StyleTree::new().with("backgroundColor", "blue")),
//! );
//!
//! let mut stack = css().wrap(styles).unwrap();
//! let viewport = Viewport::measure();
//! stack.mount(&viewport).unwrap();
//!
//! stack.dispatch(&Event::PointerEnter).unwrap();
//! let hovered = stack.resolved();
//! let box_style = hovered.get("box").unwrap().as_tree().unwrap();
//! assert_eq!(
//!     box_style.get("backgroundColor"),
//!     Some(&restyle::StyleValue::Text("blue".into()))
//! );
//! ```
//!
//! The pieces compose from the bottom up:
//!
//! - [`StyleTree`] / [`StyleValue`] / [`merge`]: the tree model and its deep
//!   merge
//! - [`partition_by_key`] / [`partition_by_pattern`]: splitting a tree into
//!   base and condition-gated parts
//! - [`MediaQuery`] / [`MediaRules`]: typed breakpoint descriptors, compiled
//!   once and evaluated per resize
//! - [`Hover`] / [`Focus`] / [`Media`]: the condition layers
//! - [`Composer`] / [`Stack`]: chaining layers around one element, with
//!   [`css`] as the canonical Media → Focus → Hover chain

mod compose;
mod error;
mod event;
mod layer;
mod media;
mod partition;
mod tree;
mod viewport;

pub use compose::{css, Composer, LayerKind, Stack};
pub use error::ConfigurationError;
pub use event::{Bindings, Event};
pub use layer::{ConditionLayer, Focus, Hover, Media};
pub use media::{
    evaluate, set_viewport_probe, Environment, MediaQuery, MediaRules, MediaType, DEFAULT_WIDTH,
};
pub use partition::{partition_by_key, partition_by_pattern, KeyPattern, Partition};
pub use tree::{merge, StyleTree, StyleValue};
pub use viewport::{ResizeSubscription, Viewport};
