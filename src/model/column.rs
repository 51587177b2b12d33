//! Column definitions and the reorder/resize operations on them
//!
//! Operations are value-like: they take the current ordering and return a
//! new one. Selection column indices follow a column through a reorder by
//! its key, not its position.

use serde::{Deserialize, Serialize};

use crate::selection::{CellRange, Selection};

/// Narrowest width a resize may produce (display units)
pub const MIN_COLUMN_WIDTH: u32 = 60;
/// Widest width a resize may produce (display units)
pub const MAX_COLUMN_WIDTH: u32 = 1000;

/// Semantic type of a column, drives value coercion on commit and paste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
    #[default]
    Text,
    Number,
    Date,
    DateTime,
}

impl ColumnKind {
    pub fn is_date(self) -> bool {
        matches!(self, ColumnKind::Date | ColumnKind::DateTime)
    }
}

/// Whether a date column marks the start or end of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRole {
    Start,
    End,
}

/// A column definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Unique key into `Row::cells`
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub kind: ColumnKind,
    /// Advisory layout width; never affects cell values
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub is_title: bool,
    #[serde(default)]
    pub summarizable: bool,
    #[serde(default)]
    pub date_role: Option<DateRole>,
}

impl Column {
    pub fn new(key: &str, title: &str, kind: ColumnKind) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            kind,
            width: None,
            is_title: false,
            summarizable: false,
            date_role: None,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn title_column(mut self) -> Self {
        self.is_title = true;
        self
    }

    pub fn summarizable(mut self) -> Self {
        self.summarizable = true;
        self
    }

    pub fn with_date_role(mut self, role: DateRole) -> Self {
        self.date_role = Some(role);
        self
    }
}

/// Move the column at `from` to `to` (remove, then insert).
///
/// Out-of-range `from` returns the columns unchanged; `to` is clamped to
/// the last position.
pub fn reorder(columns: &[Column], from: usize, to: usize) -> Vec<Column> {
    let mut next = columns.to_vec();
    if from >= next.len() {
        tracing::warn!(from, len = next.len(), "column reorder source out of range");
        return next;
    }
    let moved = next.remove(from);
    let to = to.min(next.len());
    next.insert(to, moved);
    next
}

/// Set one column's width, clamped to `[MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH]`
pub fn resize(columns: &[Column], index: usize, width: u32) -> Vec<Column> {
    let mut next = columns.to_vec();
    match next.get_mut(index) {
        Some(column) => column.width = Some(clamp_width(width)),
        None => tracing::warn!(index, "column resize out of range"),
    }
    next
}

pub fn clamp_width(width: u32) -> u32 {
    width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
}

/// Position of `key` in `columns`
pub fn index_of(columns: &[Column], key: &str) -> Option<usize> {
    columns.iter().position(|c| c.key == key)
}

/// Carry a selection's column bounds across a column reordering.
///
/// Each edge is looked up independently by the key of the column it pointed
/// at; the result is re-normalised so `col_start <= col_end`. An edge whose
/// key vanished is clamped into the new bounds.
pub fn remap_selection(old: &[Column], new: &[Column], selection: Selection) -> Selection {
    let Some(range) = selection.range() else {
        return Selection::Empty;
    };
    if new.is_empty() {
        return Selection::Empty;
    }

    let last = new.len() - 1;
    let remap = |col: usize| -> usize {
        old.get(col)
            .and_then(|column| index_of(new, &column.key))
            .unwrap_or(col.min(last))
    };

    let a = remap(range.col_start);
    let b = remap(range.col_end);
    Selection::Active(CellRange {
        col_start: a.min(b),
        col_end: a.max(b),
        ..range
    })
}
