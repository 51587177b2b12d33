//! Collapse state, row indentation and column layout

use super::Grid;
use crate::commands::GridCmd;
use crate::hierarchy;
use crate::host::GridHost;
use crate::model::column::{self, Column};
use crate::model::RowId;
use crate::selection::CellPosition;

/// An in-progress drag on a column's resize handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnResizeDrag {
    pub col: usize,
    pub start_x: f32,
    pub start_width: u32,
}

impl<H: GridHost> Grid<H> {
    // === Collapse ===

    /// Flip a parent row between collapsed and expanded. Non-parent ids are
    /// ignored.
    pub fn toggle_collapse(&mut self, id: &RowId) -> bool {
        let Some(index) = self.rows.iter().position(|row| &row.id == id) else {
            tracing::warn!(%id, "toggle_collapse: unknown row");
            return false;
        };
        if !self.parents.contains(&index) {
            return false;
        }

        if !self.collapsed.remove(id) {
            self.collapsed.insert(id.clone());
        }
        tracing::debug!(%id, collapsed = self.collapsed.contains(id), "collapse toggled");
        self.refresh_visible();
        self.reveal_selection();
        true
    }

    pub fn collapse_all(&mut self) -> bool {
        let ids: Vec<RowId> = self
            .parents
            .iter()
            .map(|&index| self.rows[index].id.clone())
            .collect();
        let before = self.collapsed.len();
        self.collapsed.extend(ids);
        if self.collapsed.len() == before {
            return false;
        }
        self.refresh_visible();
        self.reveal_selection();
        true
    }

    pub fn expand_all(&mut self) -> bool {
        if self.collapsed.is_empty() {
            return false;
        }
        self.collapsed.clear();
        self.refresh_visible();
        true
    }

    /// After a collapse, pull the selection and any edit out of hidden rows.
    /// A hidden selection moves to the nearest visible ancestor.
    pub(super) fn reveal_selection(&mut self) {
        if let Some(session) = &self.editing {
            if !self.is_row_visible(session.position.row) {
                self.cancel_edit();
            }
        }

        let Some(primary) = self.selection.primary() else {
            return;
        };
        if self.is_row_visible(primary.row) {
            return;
        }
        let Some(pos) = self.visible_position(primary.row) else {
            self.clear_selection();
            return;
        };
        let row = self.visible[pos];
        self.select_single(CellPosition::new(row, primary.col));
    }

    // === Indentation ===

    /// Indent a row (and its subtree) under the row above
    pub fn indent_row(&mut self, index: usize) -> bool {
        let mut rows = self.rows.clone();
        if !hierarchy::indent_row(&mut rows, index) {
            return false;
        }
        tracing::debug!(row = index, "row indented");
        self.replace_rows(rows);
        self.reveal_selection();
        true
    }

    pub fn outdent_row(&mut self, index: usize) -> bool {
        let mut rows = self.rows.clone();
        if !hierarchy::outdent_row(&mut rows, index) {
            return false;
        }
        tracing::debug!(row = index, "row outdented");
        self.replace_rows(rows);
        true
    }

    /// Repair indents that jump more than one level. Hosts call this after
    /// loading rows from an untrusted source.
    pub fn normalize_indents(&mut self) -> bool {
        let mut rows = self.rows.clone();
        if !hierarchy::normalize_indents(&mut rows) {
            return false;
        }
        self.replace_rows(rows);
        true
    }

    // === Columns ===

    /// Move a column and carry the selection (and an open edit) with it
    pub fn reorder_columns(&mut self, from: usize, to: usize) -> bool {
        if from >= self.columns.len() || from == to.min(self.columns.len() - 1) {
            return false;
        }
        let next = column::reorder(&self.columns, from, to);
        let selection = column::remap_selection(&self.columns, &next, self.selection);

        let old = &self.columns;
        let remap_col = |col: usize| {
            old.get(col)
                .and_then(|column| column::index_of(&next, &column.key))
        };
        if let Some(session) = self.editing.as_mut() {
            if let Some(col) = remap_col(session.position.col) {
                session.position.col = col;
            }
        }
        let remap_corner =
            |cell: CellPosition| remap_col(cell.col).map(|col| CellPosition::new(cell.row, col));
        self.anchor = self.anchor.and_then(remap_corner);
        self.focus = self.focus.and_then(remap_corner);

        tracing::debug!(from, to, "columns reordered");
        self.commit_columns(next);
        self.set_selection(selection);
        true
    }

    pub fn resize_column(&mut self, index: usize, width: u32) -> bool {
        let Some(current) = self.columns.get(index) else {
            return false;
        };
        let width = column::clamp_width(width);
        if current.width == Some(width) {
            return false;
        }
        let next = column::resize(&self.columns, index, width);
        self.commit_columns(next);
        true
    }

    /// Effective width of a column, falling back to the configured default
    pub fn column_width(&self, index: usize) -> Option<u32> {
        let column = self.columns.get(index)?;
        Some(column.width.unwrap_or(self.config.default_column_width))
    }

    pub fn begin_column_drag(&mut self, col: usize) -> bool {
        if col >= self.columns.len() {
            return false;
        }
        self.column_drag = Some(col);
        true
    }

    /// Drop a dragged header onto `target`
    pub fn drop_column(&mut self, target: usize) -> bool {
        match self.column_drag.take() {
            Some(from) => self.reorder_columns(from, target),
            None => false,
        }
    }

    pub fn begin_column_resize(&mut self, col: usize, x: f32) -> bool {
        let Some(start_width) = self.column_width(col) else {
            return false;
        };
        self.column_resize = Some(ColumnResizeDrag {
            col,
            start_x: x,
            start_width,
        });
        true
    }

    pub fn drag_column_resize(&mut self, x: f32) -> Option<GridCmd> {
        let drag = self.column_resize?;
        let width = (drag.start_width as f32 + (x - drag.start_x)).round().max(0.0) as u32;
        self.resize_column(drag.col, width).then(GridCmd::redraw)
    }

    pub fn end_column_resize(&mut self) -> bool {
        self.column_resize.take().is_some()
    }

    pub fn is_resizing_column(&self) -> bool {
        self.column_resize.is_some()
    }

    fn commit_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        self.host.columns_changed(self.columns.clone());
    }
}
