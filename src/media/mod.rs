//! Breakpoint conditions: viewport environment, descriptors, evaluation.
//!
//! This module provides everything behind the media condition:
//!
//! - [`Environment`] / [`MediaType`]: The viewport snapshot descriptors are
//!   matched against, plus the swappable initial-measurement probe
//! - [`MediaQuery`]: A breakpoint descriptor parsed into a typed predicate
//! - [`MediaRules`]: The pruned breakpoint branches of a style tree, compiled
//!   once and evaluated per resize

mod environment;
mod evaluate;
mod query;

pub use environment::{set_viewport_probe, Environment, MediaType, DEFAULT_WIDTH};
pub(crate) use environment::probe_viewport;
pub use evaluate::{evaluate, MediaRules};
pub use query::MediaQuery;
