//! The document node tree.

use serde::{Deserialize, Serialize};

/// A style mark attached to a text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    /// Deletion styling (struck-through text).
    Strike,
    /// Insertion styling (underlined text).
    Underline,
}

/// One node of a structured-document fragment.
///
/// Serializes to the ADF JSON shape: a `type` tag plus `text`/`marks` for
/// runs or `content` for the structural wrappers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AdfNode {
    /// A text run, optionally styled with marks.
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },
    /// An explicit line break within a paragraph.
    HardBreak,
    /// A paragraph of inline nodes.
    Paragraph { content: Vec<AdfNode> },
    /// One cell of a table row.
    TableCell { content: Vec<AdfNode> },
    /// One row of a table.
    TableRow { content: Vec<AdfNode> },
    /// The assembled diff table.
    Table { content: Vec<AdfNode> },
}
