//! Parent/child structure derived from row indent levels
//!
//! The tree is never stored. A row is the parent of the contiguous run of
//! rows directly below it whose indent is greater than its own; both the
//! parent set and the visible-row projection are recomputed from the flat
//! row list with a single stack pass.

use std::collections::HashSet;

use crate::model::{Row, RowId};

/// Indices of rows that have at least one descendant
pub fn compute_parents(rows: &[Row]) -> HashSet<usize> {
    let mut parents = HashSet::new();
    let mut stack: Vec<(usize, usize)> = Vec::new(); // (index, indent)

    for (index, row) in rows.iter().enumerate() {
        while stack.last().is_some_and(|&(_, indent)| indent >= row.indent) {
            stack.pop();
        }
        if let Some(&(parent, _)) = stack.last() {
            parents.insert(parent);
        }
        stack.push((index, row.indent));
    }

    parents
}

/// Ordered indices of rows not hidden by a collapsed ancestor
pub fn compute_visible(
    rows: &[Row],
    parents: &HashSet<usize>,
    collapsed: &HashSet<RowId>,
) -> Vec<usize> {
    let mut visible = Vec::with_capacity(rows.len());
    let mut stack: Vec<(usize, bool)> = Vec::new(); // (indent, collapsed)

    for (index, row) in rows.iter().enumerate() {
        while stack.last().is_some_and(|&(indent, _)| indent >= row.indent) {
            stack.pop();
        }
        if !stack.iter().any(|&(_, hidden)| hidden) {
            visible.push(index);
        }
        if parents.contains(&index) {
            stack.push((row.indent, collapsed.contains(&row.id)));
        }
    }

    visible
}

/// Exclusive end of the descendant run that starts after `index`
pub fn subtree_end(rows: &[Row], index: usize) -> usize {
    let Some(row) = rows.get(index) else {
        return index;
    };
    rows[index + 1..]
        .iter()
        .position(|r| r.indent <= row.indent)
        .map_or(rows.len(), |offset| index + 1 + offset)
}

/// Highest indent `index` may take: one deeper than the row above
pub fn max_indent(rows: &[Row], index: usize) -> usize {
    match index {
        0 => 0,
        i => rows.get(i - 1).map_or(0, |prev| prev.indent + 1),
    }
}

/// Indent `index` and its descendants one level. Returns `false` when the
/// row is already as deep as the row above allows.
pub fn indent_row(rows: &mut [Row], index: usize) -> bool {
    if index >= rows.len() || rows[index].indent + 1 > max_indent(rows, index) {
        return false;
    }
    let end = subtree_end(rows, index);
    for row in &mut rows[index..end] {
        row.indent += 1;
    }
    true
}

/// Outdent `index` and its descendants one level. Returns `false` at indent 0.
pub fn outdent_row(rows: &mut [Row], index: usize) -> bool {
    if rows.get(index).map_or(true, |row| row.indent == 0) {
        return false;
    }
    let end = subtree_end(rows, index);
    for row in &mut rows[index..end] {
        row.indent = row.indent.saturating_sub(1);
    }
    true
}

/// Clamp every indent into `[0, previous + 1]`; the first row becomes 0
pub fn normalize_indents(rows: &mut [Row]) -> bool {
    let mut changed = false;
    for index in 0..rows.len() {
        let max = max_indent(rows, index);
        if rows[index].indent > max {
            rows[index].indent = max;
            changed = true;
        }
    }
    changed
}
