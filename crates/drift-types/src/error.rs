//! Error types for hierarchy construction.

use thiserror::Error;

/// Errors raised while building a tracked-node hierarchy.
///
/// All of these are construction-time failures: a malformed hierarchy is
/// rejected eagerly, never silently folded into a wrong location string.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A node key was empty.
    #[error("node key must not be empty")]
    EmptyKey,

    /// A node key contained the location separator.
    #[error("node key {key:?} must not contain the separator {separator:?}")]
    SeparatorInKey { key: String, separator: char },

    /// Two siblings shared the same key.
    #[error("duplicate key among siblings: {key:?}")]
    DuplicateKey { key: String },
}

/// Convenience alias for hierarchy construction results.
pub type TreeResult<T> = Result<T, TreeError>;
