//! Context-bounded change groups.
//!
//! Rendering an entire unchanged region would drown the actual edits, so the
//! flat edit script is cut into groups that carry each edit plus the single
//! unchanged boundary line on either side. The first line break inside an
//! Equal run after an edit is the natural cut point: everything beyond it is
//! unchanged text nobody needs to see.

use crate::engine::DiffOp;

/// An ordered subsequence of the edit script selected for rendering.
///
/// A group always starts and ends on an operation that contributes rendered
/// output; its boundary Equal ops provide the context lines around the edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeGroup {
    /// The operations in this group, in script order.
    pub ops: Vec<DiffOp>,
}

impl ChangeGroup {
    /// Returns `true` if the group holds no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of operations in the group.
    pub fn len(&self) -> usize {
        self.ops.len()
    }
}

/// Coalesce an edit script into context-bounded change groups.
///
/// Single left-to-right scan with at most one open group:
///
/// - Delete/Insert: if no group is open and the preceding script op was
///   Equal, seed the group with that Equal (context before the edit); then
///   append the current op.
/// - Equal: if a group is open, append it (context after the edit); if its
///   text contains a line break, the group is flushed and a new one started.
/// - End of input flushes any open group.
///
/// Pure equality contributes nothing: leading Equal runs never open a group
/// and an editless script produces no groups at all.
pub fn group_changes(script: &[DiffOp]) -> Vec<ChangeGroup> {
    let mut groups: Vec<ChangeGroup> = Vec::new();
    let mut current: Vec<DiffOp> = Vec::new();
    let mut previous: Option<&DiffOp> = None;

    for op in script {
        match op {
            DiffOp::Delete(_) | DiffOp::Insert(_) => {
                if current.is_empty() {
                    if let Some(prev) = previous {
                        if prev.is_equal() {
                            current.push(prev.clone());
                        }
                    }
                }
                current.push(op.clone());
            }
            DiffOp::Equal(text) => {
                if !current.is_empty() {
                    current.push(op.clone());
                    if contains_line_break(text) {
                        groups.push(ChangeGroup {
                            ops: std::mem::take(&mut current),
                        });
                    }
                }
            }
        }
        previous = Some(op);
    }

    if !current.is_empty() {
        groups.push(ChangeGroup { ops: current });
    }
    groups
}

fn contains_line_break(text: &str) -> bool {
    text.contains(&['\n', '\r'][..])
}
