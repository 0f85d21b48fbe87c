//! Stateless constructors for document fragments.
//!
//! Pure functions over the four primitives and four wrappers; the renderer
//! composes these, nothing here carries state.

use crate::node::{AdfNode, Mark};

/// A plain, unstyled text run.
pub fn plain_text(text: impl Into<String>) -> AdfNode {
    AdfNode::Text {
        text: text.into(),
        marks: Vec::new(),
    }
}

/// A deletion-styled text run.
pub fn deleted_text(text: impl Into<String>) -> AdfNode {
    AdfNode::Text {
        text: text.into(),
        marks: vec![Mark::Strike],
    }
}

/// An insertion-styled text run.
pub fn inserted_text(text: impl Into<String>) -> AdfNode {
    AdfNode::Text {
        text: text.into(),
        marks: vec![Mark::Underline],
    }
}

/// An explicit hard line break.
pub fn hard_break() -> AdfNode {
    AdfNode::HardBreak
}

/// A paragraph wrapping inline nodes.
pub fn paragraph(content: Vec<AdfNode>) -> AdfNode {
    AdfNode::Paragraph { content }
}

/// A table cell wrapping block nodes.
pub fn table_cell(content: Vec<AdfNode>) -> AdfNode {
    AdfNode::TableCell { content }
}

/// A table row wrapping cells.
pub fn table_row(content: Vec<AdfNode>) -> AdfNode {
    AdfNode::TableRow { content }
}

/// A table wrapping rows.
pub fn table(content: Vec<AdfNode>) -> AdfNode {
    AdfNode::Table { content }
}
