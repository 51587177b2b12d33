//! Command types for the Elm-style architecture
//!
//! Commands are side effects the host performs after an update. None of
//! them touch row data.

use crate::edit::CaretPlacement;
use crate::selection::CellPosition;

#[derive(Debug, Clone, PartialEq)]
pub enum GridCmd {
    /// Repaint the grid
    Redraw,
    /// Focus the in-place editor on the next animation frame, once the host
    /// has rendered it, and place the caret
    FocusEditor {
        position: CellPosition,
        caret: CaretPlacement,
    },
    /// Put text on the system clipboard
    WriteClipboard(String),
    /// Show the built-in date picker for a cell
    OpenNativeDatePicker { position: CellPosition },
}

impl GridCmd {
    pub fn redraw() -> Self {
        GridCmd::Redraw
    }
}
