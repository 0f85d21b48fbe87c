//! Line-level edit scripts.
//!
//! Uses the `similar` crate (Myers diff algorithm) over lines, then merges
//! adjacent operations of the same kind so the returned script is minimal.

use similar::{ChangeTag, TextDiff};

/// A single operation in an edit script.
///
/// The carried span keeps its line terminators, so concatenating the spans
/// of Equal + Delete ops reconstructs the source text exactly, and
/// Equal + Insert ops reconstruct the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffOp {
    /// Text present in both source and target.
    Equal(String),
    /// Text present only in the target.
    Insert(String),
    /// Text present only in the source.
    Delete(String),
}

impl DiffOp {
    /// The text span this operation carries.
    pub fn text(&self) -> &str {
        match self {
            DiffOp::Equal(t) | DiffOp::Insert(t) | DiffOp::Delete(t) => t,
        }
    }

    /// Returns `true` for Equal operations.
    pub fn is_equal(&self) -> bool {
        matches!(self, DiffOp::Equal(_))
    }
}

/// Compute a line-granularity edit script between two texts.
///
/// A missing capture is represented by the caller as `""`; it is not an
/// error. Adjacent operations of the same kind are merged, so the script is
/// minimal: no two neighbouring ops share a kind. Identical inputs yield a
/// single Equal op spanning the whole text, or the empty script when both
/// inputs are empty. Repeated calls on identical inputs return
/// byte-identical scripts.
pub fn compute_edit_script(source: &str, target: &str) -> Vec<DiffOp> {
    if source == target {
        if source.is_empty() {
            return Vec::new();
        }
        return vec![DiffOp::Equal(source.to_string())];
    }

    let diff = TextDiff::from_lines(source, target);

    let mut script: Vec<DiffOp> = Vec::new();
    for change in diff.iter_all_changes() {
        let text = change.value();
        let op = match change.tag() {
            ChangeTag::Equal => DiffOp::Equal(text.to_string()),
            ChangeTag::Insert => DiffOp::Insert(text.to_string()),
            ChangeTag::Delete => DiffOp::Delete(text.to_string()),
        };
        push_merged(&mut script, op);
    }
    script
}

/// Append an op, merging it into the previous one when the kinds match.
fn push_merged(script: &mut Vec<DiffOp>, op: DiffOp) {
    match (script.last_mut(), op) {
        (Some(DiffOp::Equal(acc)), DiffOp::Equal(text)) => acc.push_str(&text),
        (Some(DiffOp::Insert(acc)), DiffOp::Insert(text)) => acc.push_str(&text),
        (Some(DiffOp::Delete(acc)), DiffOp::Delete(text)) => acc.push_str(&text),
        (_, op) => script.push(op),
    }
}

/// Concatenate the Equal + Delete spans of a script (the source text).
pub fn reconstruct_source(script: &[DiffOp]) -> String {
    script
        .iter()
        .filter_map(|op| match op {
            DiffOp::Equal(t) | DiffOp::Delete(t) => Some(t.as_str()),
            DiffOp::Insert(_) => None,
        })
        .collect()
}

/// Concatenate the Equal + Insert spans of a script (the target text).
pub fn reconstruct_target(script: &[DiffOp]) -> String {
    script
        .iter()
        .filter_map(|op| match op {
            DiffOp::Equal(t) | DiffOp::Insert(t) => Some(t.as_str()),
            DiffOp::Delete(_) => None,
        })
        .collect()
}
