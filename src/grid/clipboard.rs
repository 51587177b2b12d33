//! Copy, cut, paste and clear over the selected rectangle
//!
//! Only visible rows take part: copying a range that spans a collapsed
//! subtree skips the hidden rows, and a pasted block fills successive
//! visible rows starting at the selection's top-left cell.

use super::Grid;
use crate::clipboard::{self, Block, ClipboardBackend};
use crate::coerce;
use crate::error::Result;
use crate::host::{CellChange, GridHost};
use crate::model::CellValue;
use crate::selection::{CellPosition, CellRange, Selection};

impl<H: GridHost> Grid<H> {
    /// Display text of the selected rectangle, tab/newline separated
    pub fn copy_text(&self) -> Option<String> {
        let range = self.selection.range()?;
        let block: Block = self
            .visible_in(range)
            .map(|row| {
                (range.col_start..=range.col_end)
                    .map(|col| self.display_value(row, col))
                    .collect()
            })
            .collect();
        if block.is_empty() {
            return None;
        }
        tracing::debug!(rows = block.len(), cols = range.width(), "copied selection");
        Some(clipboard::serialize(&block))
    }

    /// Copy, then empty the copied cells
    pub fn cut_text(&mut self) -> Option<String> {
        let text = self.copy_text()?;
        self.clear_selected_cells();
        Some(text)
    }

    /// Empty every visible cell in the selection. Returns the number of
    /// cells written.
    pub fn clear_selected_cells(&mut self) -> usize {
        let Some(range) = self.selection.range() else {
            return 0;
        };
        let targets: Vec<CellPosition> = self
            .visible_in(range)
            .flat_map(|row| {
                (range.col_start..=range.col_end).map(move |col| CellPosition::new(row, col))
            })
            .collect();

        let writes = targets
            .into_iter()
            .map(|position| (position, CellValue::Empty))
            .collect();
        self.apply_writes(writes)
    }

    /// Paste clipboard text.
    ///
    /// While editing, the text goes into the session buffer. Otherwise the
    /// block is laid out from the selection's top-left cell; cells falling
    /// past the last visible row or last column are dropped. Returns the
    /// number of cells written.
    pub fn paste_text(&mut self, text: &str) -> usize {
        if let Some(session) = self.editing.as_mut() {
            session.insert_text(text);
            return 0;
        }

        let block = clipboard::deserialize(text);
        if block.is_empty() {
            return 0;
        }
        let Some(start) = self.selection.primary() else {
            return 0;
        };
        let Some(first_pos) = self.visible_position(start.row) else {
            return 0;
        };

        let mut writes = Vec::new();
        let mut last_row = start.row;
        let mut last_col = start.col;
        for (offset, cells) in block.iter().enumerate() {
            let Some(&row) = self.visible.get(first_pos + offset) else {
                break;
            };
            for (col_offset, raw) in cells.iter().enumerate() {
                let col = start.col + col_offset;
                let Some(column) = self.columns.get(col) else {
                    break;
                };
                let value = coerce::coerce(column.kind, raw, &self.config.date_pattern);
                writes.push((CellPosition::new(row, col), value));
                last_row = last_row.max(row);
                last_col = last_col.max(col);
            }
        }
        if writes.is_empty() {
            return 0;
        }

        let count = self.apply_writes(writes);
        let end = CellPosition::new(last_row, last_col);
        self.anchor = Some(start);
        self.focus = Some(end);
        self.set_selection(Selection::Active(CellRange::spanning(start, end)));
        tracing::debug!(cells = count, "pasted block");
        count
    }

    /// Copy the selection to `backend`. Returns `false` when nothing is selected.
    pub fn copy_to(&self, backend: &mut impl ClipboardBackend) -> Result<bool> {
        match self.copy_text() {
            Some(text) => {
                backend.set_text(&text)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn cut_to(&mut self, backend: &mut impl ClipboardBackend) -> Result<bool> {
        let Some(text) = self.copy_text() else {
            return Ok(false);
        };
        backend.set_text(&text)?;
        self.clear_selected_cells();
        Ok(true)
    }

    pub fn paste_from(&mut self, backend: &mut impl ClipboardBackend) -> Result<usize> {
        let text = backend.get_text()?;
        Ok(self.paste_text(&text))
    }

    /// Visible data rows inside `range`, in order
    fn visible_in(&self, range: CellRange) -> impl Iterator<Item = usize> + '_ {
        self.visible
            .iter()
            .copied()
            .filter(move |row| (range.row_start..=range.row_end).contains(row))
    }

    /// Write several pre-coerced values in one row replacement, then report
    /// each change in order
    fn apply_writes(&mut self, writes: Vec<(CellPosition, CellValue)>) -> usize {
        if writes.is_empty() {
            return 0;
        }
        let mut rows = self.rows.clone();
        let mut changes = Vec::with_capacity(writes.len());
        for (position, value) in writes {
            let Some(column) = self.columns.get(position.col) else {
                continue;
            };
            let Some(row) = rows.get_mut(position.row) else {
                continue;
            };
            let previous = row.get(&column.key).cloned();
            row.set(&column.key, value.clone());
            changes.push(CellChange {
                row: position.row,
                col: position.col,
                column_key: column.key.clone(),
                previous,
                next: value,
            });
        }

        self.replace_rows(rows);
        for change in &changes {
            self.host.cell_committed(change);
        }
        changes.len()
    }
}
