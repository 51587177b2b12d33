//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use grid_core::host::{CellChange, DatePickerRequest, EditingState, GridHost};
use grid_core::input::{KeyCode, Keystroke, Modifiers};
use grid_core::model::{Column, ColumnKind, Row};
use grid_core::selection::{CellPosition, Selection};
use grid_core::{Grid, GridConfig};

/// Host that records every callback
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub rows: Vec<Vec<Row>>,
    pub columns: Vec<Vec<Column>>,
    pub changes: Vec<CellChange>,
    pub selections: Vec<Selection>,
    pub editing: Vec<EditingState>,
    pub picker_requests: Vec<DatePickerRequest>,
    /// Answer for `date_picker_requested`
    pub handles_picker: bool,
}

impl RecordingHost {
    pub fn with_picker() -> Self {
        Self {
            handles_picker: true,
            ..Self::default()
        }
    }

    /// Most recent row collection handed over
    pub fn last_rows(&self) -> Option<&[Row]> {
        self.rows.last().map(Vec::as_slice)
    }
}

impl GridHost for RecordingHost {
    fn rows_changed(&mut self, rows: Vec<Row>) {
        self.rows.push(rows);
    }

    fn columns_changed(&mut self, columns: Vec<Column>) {
        self.columns.push(columns);
    }

    fn cell_committed(&mut self, change: &CellChange) {
        self.changes.push(change.clone());
    }

    fn selection_changed(&mut self, selection: Selection) {
        self.selections.push(selection);
    }

    fn editing_changed(&mut self, state: EditingState) {
        self.editing.push(state);
    }

    fn date_picker_requested(&mut self, request: &DatePickerRequest) -> bool {
        self.picker_requests.push(request.clone());
        self.handles_picker
    }
}

/// name (text, title) | qty (number) | due (date)
pub fn test_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name", ColumnKind::Text).title_column(),
        Column::new("qty", "Qty", ColumnKind::Number).summarizable(),
        Column::new("due", "Due", ColumnKind::Date),
    ]
}

/// Flat rows r0..rN with name/qty filled
pub fn flat_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            Row::new(format!("r{}", i), 0)
                .with("name", format!("Row {}", i).as_str())
                .with("qty", i as f64)
        })
        .collect()
}

/// Rows with the given indents, ids r0..rN
pub fn tree_rows(indents: &[usize]) -> Vec<Row> {
    indents
        .iter()
        .enumerate()
        .map(|(i, &indent)| {
            Row::new(format!("r{}", i), indent).with("name", format!("Row {}", i).as_str())
        })
        .collect()
}

pub fn test_grid(rows: Vec<Row>) -> Grid<RecordingHost> {
    Grid::new(test_columns(), rows, GridConfig::default(), RecordingHost::default())
}

pub fn test_grid_with_host(rows: Vec<Row>, host: RecordingHost) -> Grid<RecordingHost> {
    Grid::new(test_columns(), rows, GridConfig::default(), host)
}

/// Grid with one cell selected
pub fn grid_at(rows: Vec<Row>, row: usize, col: usize) -> Grid<RecordingHost> {
    let mut grid = test_grid(rows);
    grid.select_cell(row, col);
    grid
}

pub fn cell(row: usize, col: usize) -> CellPosition {
    CellPosition::new(row, col)
}

pub fn key(code: KeyCode) -> Keystroke {
    Keystroke::key(code)
}

pub fn shift(code: KeyCode) -> Keystroke {
    Keystroke::new(code, Modifiers::SHIFT)
}

pub fn ctrl(c: char) -> Keystroke {
    Keystroke::new(KeyCode::Char(c), Modifiers::CTRL)
}

pub fn alt(code: KeyCode) -> Keystroke {
    Keystroke::new(code, Modifiers::ALT)
}

pub fn typed(c: char) -> Keystroke {
    Keystroke::char(c)
}
