//! Error types for store operations.

/// Errors from capture-store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored content was not valid UTF-8 text.
    #[error("stored content at {location:?} is not valid UTF-8")]
    NotText { location: String },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
