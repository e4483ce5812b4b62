//! Configuration errors.

/// Error returned when a style tree's condition branches are malformed.
///
/// These are configuration errors: they are detected while a layer compiles
/// its style input, surface synchronously to the caller that supplied the
/// tree, and are never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A breakpoint branch contains no descriptors to evaluate.
    MissingDescriptor { group: String },
    /// A breakpoint descriptor could not be parsed.
    MalformedDescriptor { descriptor: String, reason: String },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::MissingDescriptor { group } => {
                write!(f, "breakpoint branch '{}' contains no descriptors", group)
            }
            ConfigurationError::MalformedDescriptor { descriptor, reason } => {
                write!(f, "malformed breakpoint descriptor '{}': {}", descriptor, reason)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
