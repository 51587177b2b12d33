//! The boundary between the grid and the application embedding it
//!
//! The grid never keeps the host's collections. Every mutation produces a
//! fresh row (or column) vector that is handed over through `GridHost`.

use crate::model::{CellValue, Column, Row};
use crate::selection::{CellPosition, Selection};
use crate::edit::EditMode;

/// A committed cell value change.
///
/// Emitted for every commit, including ones where `previous == next`; hosts
/// detect no-op commits by comparing the two.
#[derive(Debug, Clone, PartialEq)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    pub column_key: String,
    pub previous: Option<CellValue>,
    pub next: CellValue,
}

impl CellChange {
    pub fn is_noop(&self) -> bool {
        self.previous.as_ref() == Some(&self.next)
    }
}

/// Whether an edit session is open, and where
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingState {
    Open {
        position: CellPosition,
        mode: EditMode,
    },
    Closed,
}

/// Why the grid asks for a date picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPurpose {
    /// Double-click on a date cell, instead of opening a text edit
    Edit,
    /// Quick-pick on a selected cell without editing it
    View,
}

/// A request for the host's own date picker
#[derive(Debug, Clone, PartialEq)]
pub struct DatePickerRequest {
    pub position: CellPosition,
    pub column_key: String,
    pub current: Option<CellValue>,
    pub purpose: PickerPurpose,
}

/// Callbacks the grid uses to talk to its host
pub trait GridHost {
    /// The full replacement row collection after any mutation
    fn rows_changed(&mut self, rows: Vec<Row>);

    /// The full replacement column list after a reorder or resize
    fn columns_changed(&mut self, _columns: Vec<Column>) {}

    fn cell_committed(&mut self, _change: &CellChange) {}

    fn selection_changed(&mut self, _selection: Selection) {}

    fn editing_changed(&mut self, _state: EditingState) {}

    /// Return `true` to take over date picking. When this returns `false`
    /// the grid falls back to the native picker affordance.
    fn date_picker_requested(&mut self, _request: &DatePickerRequest) -> bool {
        false
    }
}
