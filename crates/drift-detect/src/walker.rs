//! Depth-first traversal of the tracked-node hierarchy.

use std::collections::BTreeMap;

use drift_types::{Location, NodeKind, TrackedNode};
use tracing::debug;

use crate::error::DetectResult;
use crate::recorder::DiffRecorder;

/// Per-node outcome of a detection run.
///
/// Every visited node has an entry, keyed by its location: content leaves
/// carry their comparison result, containers the OR of their children, and
/// `Done` nodes always `false`. Keys are unique among siblings and
/// separator-free by construction, so locations identify nodes uniquely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffReport {
    /// Location → "had a difference", for every visited node.
    pub entries: BTreeMap<Location, bool>,
}

impl DiffReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the node at `location` had a difference. `None` if the node
    /// was not visited.
    pub fn did_change(&self, location: &Location) -> Option<bool> {
        self.entries.get(location).copied()
    }

    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no nodes were visited.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of nodes that had a difference.
    pub fn changed_count(&self) -> usize {
        self.entries.values().filter(|changed| **changed).count()
    }

    /// Locations that had a difference, in location order.
    pub fn changed_locations(&self) -> impl Iterator<Item = &Location> {
        self.entries
            .iter()
            .filter(|(_, changed)| **changed)
            .map(|(location, _)| location)
    }
}

/// Walk the hierarchy rooted at `root`, comparing every open content leaf.
///
/// Per-node behaviour:
/// - `Done` nodes record `false` and are not descended into; their contents
///   are never compared.
/// - Containers recurse into their children in order and record the OR of
///   the child results.
/// - Content leaves invoke the recorder at their location and record its
///   result.
///
/// The first store failure aborts the walk; the report accumulated so far
/// is discarded with it.
pub fn detect_differences(
    root: &TrackedNode,
    recorder: &DiffRecorder<'_>,
) -> DetectResult<DiffReport> {
    let mut report = DiffReport::new();
    walk(root, &Location::root(), recorder, &mut report)?;
    Ok(report)
}

fn walk(
    node: &TrackedNode,
    parent: &Location,
    recorder: &DiffRecorder<'_>,
    report: &mut DiffReport,
) -> DetectResult<bool> {
    let location = parent.child(node.key());

    if node.is_done() {
        debug!(location = %location, "skipping Done subtree");
        report.entries.insert(location, false);
        return Ok(false);
    }

    let changed = match node.kind() {
        NodeKind::Container { children } => {
            let mut any = false;
            for child in children {
                any = walk(child, &location, recorder, report)? || any;
            }
            any
        }
        NodeKind::Content { .. } => recorder.record(&location)?,
    };

    report.entries.insert(location, changed);
    Ok(changed)
}
