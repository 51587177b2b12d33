//! Grid state holder
//!
//! `Grid` owns the working mirror of rows and columns, the derived
//! hierarchy views, the collapse set, the selection and the edit session.
//! Behaviour is split by concern:
//!
//! ```text
//! Grid<H: GridHost>
//! ├── navigation.rs  keyboard movement over the visible-row projection
//! ├── pointer.rs     press / drag / release / click
//! ├── editing.rs     edit sessions, commit guard, date pickers
//! ├── clipboard.rs   copy / cut / paste / clear
//! └── structure.rs   collapse, indent, column reorder / resize
//! ```
//!
//! Derived state (`parents`, `visible`) is recomputed whenever rows or the
//! collapse set change.

mod clipboard;
mod editing;
mod navigation;
mod pointer;
mod structure;

use std::collections::HashSet;

use crate::coerce;
use crate::config::GridConfig;
use crate::edit::{EditSession, SessionId};
use crate::hierarchy;
use crate::host::{EditingState, GridHost};
use crate::model::{CellValue, Column, Row, RowId};
use crate::selection::{CellPosition, DragState, Selection};

pub use structure::ColumnResizeDrag;

pub struct Grid<H: GridHost> {
    host: H,
    config: GridConfig,
    columns: Vec<Column>,
    rows: Vec<Row>,
    /// Rows with at least one descendant
    parents: HashSet<usize>,
    /// Row indices not hidden by a collapsed ancestor, in order
    visible: Vec<usize>,
    collapsed: HashSet<RowId>,
    selection: Selection,
    /// Fixed corner for Shift+click / Shift+arrow extension
    anchor: Option<CellPosition>,
    /// Moving corner for Shift+arrow extension
    focus: Option<CellPosition>,
    drag: Option<DragState>,
    suppress_next_click: bool,
    editing: Option<EditSession>,
    session_counter: u64,
    last_committed: Option<SessionId>,
    column_drag: Option<usize>,
    column_resize: Option<ColumnResizeDrag>,
}

impl<H: GridHost> Grid<H> {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>, config: GridConfig, host: H) -> Self {
        let mut grid = Self {
            host,
            config,
            columns,
            rows,
            parents: HashSet::new(),
            visible: Vec::new(),
            collapsed: HashSet::new(),
            selection: Selection::Empty,
            anchor: None,
            focus: None,
            drag: None,
            suppress_next_click: false,
            editing: None,
            session_counter: 0,
            last_committed: None,
            column_drag: None,
            column_resize: None,
        };
        grid.refresh_hierarchy();
        grid
    }

    // === Accessors ===

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Visible-row projection (data row indices)
    pub fn visible_rows(&self) -> &[usize] {
        &self.visible
    }

    pub fn is_parent(&self, row: usize) -> bool {
        self.parents.contains(&row)
    }

    pub fn is_collapsed(&self, id: &RowId) -> bool {
        self.collapsed.contains(id)
    }

    pub fn is_row_visible(&self, row: usize) -> bool {
        self.visible.binary_search(&row).is_ok()
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// A pointer drag passed the threshold; hosts suppress text selection chrome
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|d| d.dragging)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        let column = self.columns.get(col)?;
        self.rows.get(row)?.get(&column.key)
    }

    /// Text shown for a cell; date columns are re-formatted with the pattern
    pub fn display_value(&self, row: usize, col: usize) -> String {
        match self.columns.get(col) {
            Some(column) => coerce::display(column.kind, self.cell(row, col), &self.config.date_pattern),
            None => String::new(),
        }
    }

    // === Host sync ===

    /// Resynchronise the row mirror from a host-supplied collection.
    ///
    /// The collapse set is kept; ids that reappear stay collapsed, and a
    /// selection that ends up hidden moves to its visible ancestor.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.refresh_hierarchy();
        self.after_bounds_change();
        self.reveal_selection();
    }

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        self.after_bounds_change();
    }

    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
    }

    fn after_bounds_change(&mut self) {
        let (rows, cols) = (self.rows.len(), self.columns.len());
        if let Some(session) = &self.editing {
            if session.position.row >= rows || session.position.col >= cols {
                tracing::debug!(session = session.id.0, "edit target vanished, cancelling");
                self.cancel_edit();
            }
        }
        self.anchor = self.anchor.filter(|c| c.row < rows && c.col < cols);
        self.focus = self.focus.filter(|c| c.row < rows && c.col < cols);
        self.set_selection(self.selection.clamped(rows, cols));
    }

    // === Internal helpers ===

    /// Recompute parent set and visible projection
    fn refresh_hierarchy(&mut self) {
        self.parents = hierarchy::compute_parents(&self.rows);
        self.refresh_visible();
    }

    fn refresh_visible(&mut self) {
        self.visible = hierarchy::compute_visible(&self.rows, &self.parents, &self.collapsed);
    }

    /// Adopt a new row collection and hand a copy to the host
    fn replace_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.refresh_hierarchy();
        self.host.rows_changed(self.rows.clone());
    }

    /// Update selection, notifying the host when it actually changed
    fn set_selection(&mut self, selection: Selection) -> bool {
        if self.selection == selection {
            return false;
        }
        tracing::trace!(?selection, "selection changed");
        self.selection = selection;
        self.host.selection_changed(selection);
        true
    }

    /// Collapse to a single cell, resetting the extension corners
    fn select_single(&mut self, cell: CellPosition) -> bool {
        self.anchor = Some(cell);
        self.focus = Some(cell);
        self.set_selection(Selection::single(cell))
    }

    fn notify_editing(&mut self) {
        let state = match &self.editing {
            Some(session) => EditingState::Open {
                position: session.position,
                mode: session.mode,
            },
            None => EditingState::Closed,
        };
        self.host.editing_changed(state);
    }

    /// Position of `row` in the visible projection. A hidden row maps to
    /// the nearest visible row above it (its collapsed ancestor).
    fn visible_position(&self, row: usize) -> Option<usize> {
        match self.visible.binary_search(&row) {
            Ok(pos) => Some(pos),
            Err(0) => (!self.visible.is_empty()).then_some(0),
            Err(pos) => Some(pos - 1),
        }
    }
}
