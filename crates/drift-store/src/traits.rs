use drift_types::Location;

use crate::error::StoreResult;

/// Source of captured text for tracked locations.
///
/// All implementations must satisfy these invariants:
/// - A location that has never been captured reads as `Ok(None)` — absence
///   is not an error, it means "no capture yet".
/// - Reads are side-effect free and repeatable within a run.
/// - All I/O errors are propagated, never silently ignored.
pub trait ContentSource: Send + Sync {
    /// The text recorded at the last run, if any.
    ///
    /// Returns `Ok(None)` if the location has no prior capture.
    /// Returns `Err` on I/O failure.
    fn prior_text(&self, location: &Location) -> StoreResult<Option<String>>;

    /// The freshly captured text, if any.
    ///
    /// Returns `Ok(None)` if the location has no current capture.
    /// Returns `Err` on I/O failure.
    fn current_text(&self, location: &Location) -> StoreResult<Option<String>>;
}

/// Sink for rendered diff documents.
pub trait DocumentSink: Send + Sync {
    /// Write the rendered document for a location, overwriting any prior
    /// value. Implementations ensure the destination's parent path exists.
    ///
    /// An empty `document` is a valid write: it records "no difference"
    /// and clears any stale document from an earlier run.
    fn write_document(&self, location: &Location, document: &str) -> StoreResult<()>;
}
