//! Message types for the Elm-style architecture
//!
//! All grid state changes flow through these messages (see `update`).

use chrono::NaiveDateTime;

use crate::edit::SessionId;
use crate::input::Keystroke;
use crate::model::{Column, Row, RowId};
use crate::selection::CellPosition;

/// Direction for selection movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub enum GridMsg {
    // === Pointer ===
    /// Button pressed over a cell; Shift extends from the anchor
    PointerDown {
        cell: CellPosition,
        x: f32,
        y: f32,
        shift: bool,
    },
    /// Pointer moved; `cell` is whatever cell is under it, if any
    PointerMove {
        cell: Option<CellPosition>,
        x: f32,
        y: f32,
    },
    PointerUp,
    Click { cell: CellPosition },
    DoubleClick { cell: CellPosition },

    // === Keyboard ===
    Key(Keystroke),

    // === In-place editor ===
    /// Host editor widget replaced its text (IME, native input)
    EditorText(String),
    /// Host editor widget lost focus
    EditorBlur(SessionId),

    // === Clipboard ===
    Copy,
    Cut,
    /// Text read from the system clipboard
    Paste(String),

    // === Date picking ===
    /// Picker button on the editor, or quick-pick on a selected date cell
    OpenDatePicker,
    /// Native picker returned a value
    DatePicked {
        position: CellPosition,
        value: NaiveDateTime,
    },

    // === Structure ===
    ToggleCollapse(RowId),
    CollapseAll,
    ExpandAll,
    IndentRow(usize),
    OutdentRow(usize),
    ColumnDragStart(usize),
    ColumnDrop(usize),
    ColumnResizeStart { col: usize, x: f32 },
    ColumnResizeMove { x: f32 },
    ColumnResizeEnd,

    // === Host sync ===
    SetRows(Vec<Row>),
    SetColumns(Vec<Column>),
}
