//! Error types for the prune crate.

use thiserror::Error;

/// Errors that can occur when pruning a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PruneError {
    /// The value handed to the filter is not a sequence or a mapping.
    ///
    /// Only a root value can trigger this: children are classified before
    /// the filter recurses into them.
    #[error("unsupported type '{kind}': {repr}")]
    UnsupportedType {
        /// Node kind of the offending value (`"number"`, `"string"`, ...).
        kind: &'static str,
        /// Textual rendering of the offending value.
        repr: String,
    },
}

/// Result type for prune operations.
pub type Result<T> = std::result::Result<T, PruneError>;
