//! Update function for the Elm-style architecture
//!
//! All grid state transformations flow through `update`.

use crate::commands::GridCmd;
use crate::host::GridHost;
use crate::grid::Grid;
use crate::messages::GridMsg;

/// Main update function - dispatches to the grid's concern handlers
pub fn update<H: GridHost>(grid: &mut Grid<H>, msg: GridMsg) -> Option<GridCmd> {
    match msg {
        // === Pointer ===
        GridMsg::PointerDown { cell, x, y, shift } => grid.pointer_down(cell, x, y, shift),
        GridMsg::PointerMove { cell, x, y } => grid.pointer_move(cell, x, y),
        GridMsg::PointerUp => grid.pointer_up(),
        GridMsg::Click { cell } => grid.click(cell),
        GridMsg::DoubleClick { cell } => grid.double_click(cell),

        // === Keyboard ===
        GridMsg::Key(key) => {
            if grid.is_editing() {
                grid.handle_editing_key(key)
            } else {
                grid.handle_navigation_key(key)
            }
        }

        // === In-place editor ===
        GridMsg::EditorText(text) => grid.set_editor_text(&text).then(GridCmd::redraw),
        GridMsg::EditorBlur(id) => grid.editor_blur(id).map(|_| GridCmd::Redraw),

        // === Clipboard ===
        GridMsg::Copy => grid.copy_text().map(GridCmd::WriteClipboard),
        GridMsg::Cut => grid.cut_text().map(GridCmd::WriteClipboard),
        GridMsg::Paste(text) => {
            let editing = grid.is_editing();
            let written = grid.paste_text(&text);
            (editing || written > 0).then(GridCmd::redraw)
        }

        // === Date picking ===
        GridMsg::OpenDatePicker => grid.open_date_picker(),
        GridMsg::DatePicked { position, value } => grid
            .apply_picked_date(position, value)
            .map(|_| GridCmd::Redraw),

        // === Structure ===
        GridMsg::ToggleCollapse(id) => grid.toggle_collapse(&id).then(GridCmd::redraw),
        GridMsg::CollapseAll => grid.collapse_all().then(GridCmd::redraw),
        GridMsg::ExpandAll => grid.expand_all().then(GridCmd::redraw),
        GridMsg::IndentRow(row) => grid.indent_row(row).then(GridCmd::redraw),
        GridMsg::OutdentRow(row) => grid.outdent_row(row).then(GridCmd::redraw),
        GridMsg::ColumnDragStart(col) => {
            grid.begin_column_drag(col);
            None
        }
        GridMsg::ColumnDrop(target) => grid.drop_column(target).then(GridCmd::redraw),
        GridMsg::ColumnResizeStart { col, x } => {
            grid.begin_column_resize(col, x);
            None
        }
        GridMsg::ColumnResizeMove { x } => grid.drag_column_resize(x),
        GridMsg::ColumnResizeEnd => {
            grid.end_column_resize();
            None
        }

        // === Host sync ===
        GridMsg::SetRows(rows) => {
            grid.set_rows(rows);
            Some(GridCmd::Redraw)
        }
        GridMsg::SetColumns(columns) => {
            grid.set_columns(columns);
            Some(GridCmd::Redraw)
        }
    }
}
