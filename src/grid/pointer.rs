//! Pointer press, drag-select, release and click handling

use super::Grid;
use crate::commands::GridCmd;
use crate::host::GridHost;
use crate::selection::{CellPosition, CellRange, DragState, Selection};

impl<H: GridHost> Grid<H> {
    /// Press over a cell: select it and start a drag candidate.
    ///
    /// An open edit session is committed first, as the editor loses focus.
    pub fn pointer_down(&mut self, cell: CellPosition, x: f32, y: f32, shift: bool) -> Option<GridCmd> {
        if cell.row >= self.rows.len() || cell.col >= self.columns.len() {
            return None;
        }
        if self.editing.is_some() {
            self.commit_edit();
        }

        let origin = match (shift, self.anchor) {
            (true, Some(anchor)) => {
                self.focus = Some(cell);
                self.set_selection(Selection::Active(CellRange::spanning(anchor, cell)));
                anchor
            }
            _ => {
                self.select_single(cell);
                cell
            }
        };
        self.drag = Some(DragState::new(origin, x, y));
        Some(GridCmd::redraw())
    }

    /// Extend the rectangle once the pointer has travelled past the threshold
    pub fn pointer_move(&mut self, cell: Option<CellPosition>, x: f32, y: f32) -> Option<GridCmd> {
        let threshold = self.config.drag_threshold_px;
        let drag = self.drag.as_mut()?;

        if !drag.dragging {
            if !drag.exceeds_threshold(x, y, threshold) {
                return None;
            }
            drag.dragging = true;
            tracing::trace!(origin = ?drag.origin, "drag started");
        }

        let origin = drag.origin;
        let cell = cell.filter(|c| c.row < self.rows.len() && c.col < self.columns.len())?;
        self.anchor = Some(origin);
        self.focus = Some(cell);
        self.set_selection(Selection::Active(CellRange::spanning(origin, cell)))
            .then(GridCmd::redraw)
    }

    /// End the drag; a real drag arms the one-shot click suppression
    pub fn pointer_up(&mut self) -> Option<GridCmd> {
        let drag = self.drag.take()?;
        if drag.dragging {
            self.suppress_next_click = true;
            return Some(GridCmd::redraw());
        }
        None
    }

    /// Read and clear the post-drag click suppression
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_next_click)
    }

    /// Plain click; selection already happened on press.
    ///
    /// A click never opens an editor (double-click is the only pointer path
    /// into editing), but it is the first click evaluation after a drag, so
    /// it consumes the suppression and a later double-click edits normally.
    pub fn click(&mut self, _cell: CellPosition) -> Option<GridCmd> {
        self.take_click_suppression();
        None
    }

    /// Double-click: open a select-all edit, or hand off to the date picker
    pub fn double_click(&mut self, cell: CellPosition) -> Option<GridCmd> {
        if self.take_click_suppression() {
            tracing::trace!("double-click after drag ignored");
            return None;
        }
        if cell.row >= self.rows.len() || cell.col >= self.columns.len() {
            return None;
        }
        if self.selection.primary() != Some(cell) || !self.selection.is_single_cell() {
            self.select_single(cell);
        }
        self.start_editing_from_double_click(cell)
    }
}
