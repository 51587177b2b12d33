//! Keyboard navigation
//!
//! Vertical movement walks the visible-row projection, so collapsed
//! subtrees are skipped. Arrow keys clamp at the edges; Tab and Enter wrap
//! between rows.

use super::Grid;
use crate::commands::GridCmd;
use crate::host::GridHost;
use crate::input::{KeyCode, Keystroke};
use crate::messages::Direction;
use crate::selection::{CellPosition, CellRange, Selection};

impl<H: GridHost> Grid<H> {
    /// Handle a key while no edit session is open
    pub(crate) fn handle_navigation_key(&mut self, key: Keystroke) -> Option<GridCmd> {
        let mods = key.mods;

        if mods.has_command() {
            return match key.key {
                KeyCode::Char(c) => match c.to_ascii_lowercase() {
                    'c' => self.copy_text().map(GridCmd::WriteClipboard),
                    'x' => self.cut_text().map(GridCmd::WriteClipboard),
                    'a' => self.select_all().then(GridCmd::redraw),
                    _ => None,
                },
                KeyCode::Home => self.move_to_first_cell().then(GridCmd::redraw),
                KeyCode::End => self.move_to_last_cell().then(GridCmd::redraw),
                _ => None,
            };
        }

        if mods.alt() && !mods.shift() {
            let row = self.selection.primary()?.row;
            return match key.key {
                KeyCode::Left => self.outdent_row(row).then(GridCmd::redraw),
                KeyCode::Right => self.indent_row(row).then(GridCmd::redraw),
                _ => None,
            };
        }

        let moved = match key.key {
            KeyCode::Up => self.arrow(Direction::Up, mods.shift()),
            KeyCode::Down => self.arrow(Direction::Down, mods.shift()),
            KeyCode::Left => self.arrow(Direction::Left, mods.shift()),
            KeyCode::Right => self.arrow(Direction::Right, mods.shift()),
            KeyCode::Tab if mods.shift() => self.move_to_prev_cell(),
            KeyCode::Tab => self.move_to_next_cell(),
            KeyCode::Enter => self.move_enter(!mods.shift()),
            KeyCode::Home => self.move_to_row_start(),
            KeyCode::End => self.move_to_row_end(),
            KeyCode::F(2) => return self.start_editing_caret_end(),
            KeyCode::Delete | KeyCode::Backspace => self.clear_selected_cells() > 0,
            KeyCode::Char(_) => {
                let ch = key.printable_char()?;
                return self.start_editing_with_char(ch);
            }
            _ => false,
        };

        moved.then(GridCmd::redraw)
    }

    fn arrow(&mut self, direction: Direction, extend: bool) -> bool {
        if extend {
            self.extend_selection(direction)
        } else {
            self.move_selection(direction)
        }
    }

    /// Cell one step from `cell`; vertical steps use the visible projection
    fn step(&self, cell: CellPosition, direction: Direction) -> Option<CellPosition> {
        let last_col = self.columns.len().checked_sub(1)?;
        let pos = self.visible_position(cell.row)?;
        let last_pos = self.visible.len() - 1;

        let next = match direction {
            Direction::Up => CellPosition::new(self.visible[pos.saturating_sub(1)], cell.col),
            Direction::Down => CellPosition::new(self.visible[(pos + 1).min(last_pos)], cell.col),
            Direction::Left => CellPosition::new(cell.row, cell.col.saturating_sub(1)),
            Direction::Right => CellPosition::new(cell.row, (cell.col + 1).min(last_col)),
        };
        Some(next)
    }

    /// Move the single-cell selection one step (arrow keys)
    pub fn move_selection(&mut self, direction: Direction) -> bool {
        let Some(primary) = self.selection.primary() else {
            return false;
        };
        match self.step(primary, direction) {
            Some(next) => self.select_single(next),
            None => false,
        }
    }

    /// Grow/shrink the rectangle by moving its focus corner (Shift+arrow)
    pub fn extend_selection(&mut self, direction: Direction) -> bool {
        let Some(primary) = self.selection.primary() else {
            return false;
        };
        let anchor = self.anchor.unwrap_or(primary);
        let focus = self.focus.unwrap_or(anchor);
        let Some(next) = self.step(focus, direction) else {
            return false;
        };
        self.anchor = Some(anchor);
        self.focus = Some(next);
        self.set_selection(Selection::Active(CellRange::spanning(anchor, next)))
    }

    /// Tab: next column, wrapping to the first column of the next visible row
    pub fn move_to_next_cell(&mut self) -> bool {
        let Some(cell) = self.selection.primary() else {
            return false;
        };
        let Some(pos) = self.visible_position(cell.row) else {
            return false;
        };
        let last_col = self.columns.len().saturating_sub(1);

        let next = if cell.col < last_col {
            CellPosition::new(cell.row, cell.col + 1)
        } else if let Some(&row) = self.visible.get(pos + 1) {
            CellPosition::new(row, 0)
        } else {
            return false;
        };
        self.select_single(next)
    }

    /// Shift+Tab: previous column, wrapping to the last column of the
    /// previous visible row
    pub fn move_to_prev_cell(&mut self) -> bool {
        let Some(cell) = self.selection.primary() else {
            return false;
        };
        let Some(pos) = self.visible_position(cell.row) else {
            return false;
        };

        let next = if cell.col > 0 {
            CellPosition::new(cell.row, cell.col - 1)
        } else if pos > 0 {
            CellPosition::new(self.visible[pos - 1], self.columns.len().saturating_sub(1))
        } else {
            return false;
        };
        self.select_single(next)
    }

    /// Enter / Shift+Enter: next or previous visible row, same column
    pub fn move_enter(&mut self, forward: bool) -> bool {
        let Some(cell) = self.selection.primary() else {
            return false;
        };
        let Some(pos) = self.visible_position(cell.row) else {
            return false;
        };

        let target = if forward {
            self.visible.get(pos + 1)
        } else {
            pos.checked_sub(1).and_then(|p| self.visible.get(p))
        };
        match target {
            Some(&row) => self.select_single(CellPosition::new(row, cell.col)),
            None => false,
        }
    }

    pub fn move_to_row_start(&mut self) -> bool {
        match self.selection.primary() {
            Some(cell) => self.select_single(CellPosition::new(cell.row, 0)),
            None => false,
        }
    }

    pub fn move_to_row_end(&mut self) -> bool {
        match (self.selection.primary(), self.columns.len().checked_sub(1)) {
            (Some(cell), Some(last)) => self.select_single(CellPosition::new(cell.row, last)),
            _ => false,
        }
    }

    pub fn move_to_first_cell(&mut self) -> bool {
        match (self.selection.is_empty(), self.visible.first()) {
            (false, Some(&row)) => self.select_single(CellPosition::new(row, 0)),
            _ => false,
        }
    }

    pub fn move_to_last_cell(&mut self) -> bool {
        match (
            self.selection.is_empty(),
            self.visible.last(),
            self.columns.len().checked_sub(1),
        ) {
            (false, Some(&row), Some(col)) => self.select_single(CellPosition::new(row, col)),
            _ => false,
        }
    }

    /// Select every cell (Ctrl/Cmd+A)
    pub fn select_all(&mut self) -> bool {
        if self.rows.is_empty() || self.columns.is_empty() {
            return false;
        }
        let first = CellPosition::new(0, 0);
        let last = CellPosition::new(self.rows.len() - 1, self.columns.len() - 1);
        self.anchor = Some(first);
        self.focus = Some(last);
        self.set_selection(Selection::Active(CellRange::spanning(first, last)))
    }

    /// Select one cell directly (host-driven, e.g. after a search hit)
    pub fn select_cell(&mut self, row: usize, col: usize) -> bool {
        if row >= self.rows.len() || col >= self.columns.len() {
            tracing::warn!(row, col, "select_cell out of range");
            return false;
        }
        self.select_single(CellPosition::new(row, col))
    }

    /// Select a rectangle directly; out-of-range edges are clamped
    pub fn select_range(&mut self, range: CellRange) -> bool {
        let clamped = Selection::Active(range).clamped(self.rows.len(), self.columns.len());
        if let Some(r) = clamped.range() {
            self.anchor = Some(r.primary());
            self.focus = Some(CellPosition::new(r.row_end, r.col_end));
        }
        self.set_selection(clamped)
    }

    pub fn clear_selection(&mut self) -> bool {
        self.anchor = None;
        self.focus = None;
        self.set_selection(Selection::Empty)
    }
}
