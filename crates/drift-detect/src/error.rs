//! Error types for detection runs.

/// Errors that abort a detection run.
///
/// There is no partial-success reporting here: a failed read or write means
/// the comparison result for that node cannot be trusted as recorded, so the
/// error propagates and the run stops.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// A capture read or document write failed.
    #[error("store error: {0}")]
    Store(#[from] drift_store::StoreError),

    /// The rendered document could not be serialized.
    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias for detection results.
pub type DetectResult<T> = Result<T, DetectError>;
