//! Rendering change groups into the two-column diff table.
//!
//! Each group becomes one table row with a removed cell and an added cell.
//! Delete ops feed the removed stream, Insert ops the added stream, and
//! boundary Equal ops contribute the single context line adjacent to the
//! edit to both.

use drift_diff::{ChangeGroup, DiffOp};
use tracing::warn;

use crate::builder::{
    deleted_text, hard_break, inserted_text, paragraph, plain_text, table, table_cell, table_row,
};
use crate::node::AdfNode;

/// Render change groups into one diff table.
///
/// Returns `None` for zero groups — the "no difference" signal — never an
/// empty table.
pub fn render_diff(groups: &[ChangeGroup]) -> Option<AdfNode> {
    if groups.is_empty() {
        return None;
    }
    let rows = groups.iter().map(render_group).collect();
    Some(table(rows))
}

fn render_group(group: &ChangeGroup) -> AdfNode {
    let mut removed: Vec<AdfNode> = Vec::new();
    let mut added: Vec<AdfNode> = Vec::new();
    let last = group.ops.len().saturating_sub(1);

    for (i, op) in group.ops.iter().enumerate() {
        match op {
            DiffOp::Delete(text) => removed.extend(styled_runs(text, deleted_text)),
            DiffOp::Insert(text) => added.extend(styled_runs(text, inserted_text)),
            DiffOp::Equal(text) => {
                let runs: Vec<AdfNode> = if i == 0 {
                    // Only the line immediately preceding the first edit.
                    last_line(text).map(plain_text).into_iter().collect()
                } else if i == last {
                    // Only the line immediately following the last edit.
                    first_line(text).map(plain_text).into_iter().collect()
                } else {
                    // An interior Equal cannot survive grouping: a group is
                    // flushed at the first line-breaking Equal, and a
                    // non-breaking Equal holds a single line. If this fires,
                    // the grouper regressed.
                    debug_assert!(false, "interior Equal op in change group");
                    warn!("interior Equal op in change group, rendering it in full");
                    styled_runs(text, plain_text)
                };
                removed.extend(runs.clone());
                added.extend(runs);
            }
        }
    }

    table_row(vec![
        table_cell(vec![paragraph(removed)]),
        table_cell(vec![paragraph(added)]),
    ])
}

/// One styled run per line, lines joined by explicit hard breaks.
fn styled_runs<'a>(text: &'a str, style: impl Fn(&'a str) -> AdfNode) -> Vec<AdfNode> {
    let mut runs = Vec::new();
    for line in split_lines(text) {
        if !runs.is_empty() {
            runs.push(hard_break());
        }
        runs.push(style(line));
    }
    runs
}

fn first_line(text: &str) -> Option<&str> {
    split_lines(text).first().copied()
}

fn last_line(text: &str) -> Option<&str> {
    split_lines(text).last().copied()
}

/// Split on `\r\n`, `\r`, or `\n`, dropping trailing empty fragments.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if i < bytes.len() && bytes[i] == b'\n' {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_diff::{compute_edit_script, group_changes};

    fn render_texts(prior: &str, current: &str) -> Option<AdfNode> {
        let script = compute_edit_script(prior, current);
        render_diff(&group_changes(&script))
    }

    fn row_cells(row: &AdfNode) -> (&[AdfNode], &[AdfNode]) {
        let AdfNode::TableRow { content } = row else {
            panic!("expected TableRow, got {row:?}");
        };
        let [AdfNode::TableCell { content: removed }, AdfNode::TableCell { content: added }] =
            content.as_slice()
        else {
            panic!("expected two cells, got {content:?}");
        };
        let (AdfNode::Paragraph { content: removed }, AdfNode::Paragraph { content: added }) =
            (&removed[0], &added[0])
        else {
            panic!("expected paragraphs");
        };
        (removed, added)
    }

    fn table_rows(doc: &AdfNode) -> &[AdfNode] {
        let AdfNode::Table { content } = doc else {
            panic!("expected Table, got {doc:?}");
        };
        content
    }

    // -----------------------------------------------------------------------
    // Empty input
    // -----------------------------------------------------------------------

    #[test]
    fn no_groups_renders_nothing() {
        assert!(render_diff(&[]).is_none());
        assert!(render_texts("same\ntext\n", "same\ntext\n").is_none());
        assert!(render_texts("", "").is_none());
    }

    // -----------------------------------------------------------------------
    // Single change group
    // -----------------------------------------------------------------------

    #[test]
    fn changed_line_renders_two_columns_with_context() {
        let doc = render_texts("line1\nline2\nline3", "line1\nCHANGED\nline3").unwrap();
        let rows = table_rows(&doc);
        assert_eq!(rows.len(), 1);

        let (removed, added) = row_cells(&rows[0]);
        assert_eq!(
            removed,
            &[
                plain_text("line1"),
                deleted_text("line2"),
                plain_text("line3"),
            ]
        );
        assert_eq!(
            added,
            &[
                plain_text("line1"),
                inserted_text("CHANGED"),
                plain_text("line3"),
            ]
        );
    }

    #[test]
    fn pure_insertion_fills_only_the_added_column() {
        let doc = render_texts("", "brand new\n").unwrap();
        let rows = table_rows(&doc);
        assert_eq!(rows.len(), 1);

        let (removed, added) = row_cells(&rows[0]);
        assert!(removed.is_empty());
        assert_eq!(added, &[inserted_text("brand new")]);
    }

    #[test]
    fn multi_line_op_joins_runs_with_hard_breaks() {
        let doc = render_texts("a\nb\nc\n", "").unwrap();
        let (removed, added) = row_cells(&table_rows(&doc)[0]);
        assert!(added.is_empty());
        assert_eq!(
            removed,
            &[
                deleted_text("a"),
                hard_break(),
                deleted_text("b"),
                hard_break(),
                deleted_text("c"),
            ]
        );
    }

    #[test]
    fn boundary_equals_abbreviate_to_one_line() {
        // The seeding Equal spans two lines; only the one next to the edit
        // shows. Same for the closing Equal.
        let doc = render_texts("a\nb\nc\nd\ne\n", "a\nb\nX\nd\ne\n").unwrap();
        let (removed, _) = row_cells(&table_rows(&doc)[0]);
        assert_eq!(
            removed,
            &[plain_text("b"), deleted_text("c"), plain_text("d")]
        );
    }

    // -----------------------------------------------------------------------
    // Multiple change groups
    // -----------------------------------------------------------------------

    #[test]
    fn separated_edits_render_separate_rows() {
        let doc = render_texts("a\nb\nc\nd\ne\nf", "a\nX\nc\nd\nY\nf").unwrap();
        let rows = table_rows(&doc);
        assert_eq!(rows.len(), 2);

        let (removed_first, added_first) = row_cells(&rows[0]);
        assert_eq!(
            removed_first,
            &[plain_text("a"), deleted_text("b"), plain_text("c")]
        );
        assert_eq!(
            added_first,
            &[plain_text("a"), inserted_text("X"), plain_text("c")]
        );

        let (removed_second, added_second) = row_cells(&rows[1]);
        assert_eq!(
            removed_second,
            &[plain_text("d"), deleted_text("e"), plain_text("f")]
        );
        assert_eq!(
            added_second,
            &[plain_text("d"), inserted_text("Y"), plain_text("f")]
        );
    }

    // -----------------------------------------------------------------------
    // Line splitting
    // -----------------------------------------------------------------------

    #[test]
    fn split_lines_handles_all_terminators() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn split_lines_drops_trailing_empties() {
        assert_eq!(split_lines("a\n\nb\n\n"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n").is_empty());
    }
}
