//! Per-location difference recording.

use drift_adf::{render_diff, AdfNode};
use drift_diff::{compute_edit_script, group_changes};
use drift_store::{ContentSource, DocumentSink};
use drift_types::Location;
use tracing::debug;

use crate::error::DetectResult;

/// Diff two texts and render the result, without any I/O.
///
/// Returns `None` when the texts do not differ in any rendered way — the
/// "no difference" signal.
pub fn diff_document(prior: &str, current: &str) -> Option<AdfNode> {
    let script = compute_edit_script(prior, current);
    let groups = group_changes(&script);
    render_diff(&groups)
}

/// Records differences for single locations against a capture store.
///
/// Reads both captures (a missing capture reads as the empty string), runs
/// the diff pipeline, and persists the rendered document. The sink always
/// receives a write, empty when nothing changed, so a stale document from an
/// earlier run never survives.
pub struct DiffRecorder<'a> {
    source: &'a dyn ContentSource,
    sink: &'a dyn DocumentSink,
}

impl<'a> DiffRecorder<'a> {
    /// Create a recorder over the given collaborators.
    pub fn new(source: &'a dyn ContentSource, sink: &'a dyn DocumentSink) -> Self {
        Self { source, sink }
    }

    /// Compare the captures at `location`, persist the rendered document,
    /// and return whether a difference was found.
    ///
    /// I/O failures on either read or the write are fatal for the node and
    /// propagate to the caller.
    pub fn record(&self, location: &Location) -> DetectResult<bool> {
        let prior = self.source.prior_text(location)?.unwrap_or_default();
        let current = self.source.current_text(location)?.unwrap_or_default();

        let document = diff_document(&prior, &current);
        let has_difference = document.is_some();

        let serialized = match &document {
            Some(node) => serde_json::to_string(node)?,
            None => String::new(),
        };
        self.sink.write_document(location, &serialized)?;

        debug!(location = %location, has_difference, "location compared");
        Ok(has_difference)
    }
}
