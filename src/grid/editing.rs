//! Edit session lifecycle: idle -> editing(mode) -> committed | cancelled -> idle
//!
//! Every session gets a fresh id. A commit records the id it applied, and
//! any later commit attempt for the same (or an older) id is dropped, so a
//! blur and an Enter racing for one session apply the edit once.

use chrono::NaiveDateTime;

use super::Grid;
use crate::coerce;
use crate::commands::GridCmd;
use crate::date;
use crate::edit::{EditMode, EditSession, SessionId};
use crate::host::{CellChange, DatePickerRequest, GridHost, PickerPurpose};
use crate::input::{KeyCode, Keystroke};
use crate::model::ColumnKind;
use crate::selection::CellPosition;

impl<H: GridHost> Grid<H> {
    /// Open a session at `position`. Any open session loses its commit rights.
    pub fn start_editing(
        &mut self,
        position: CellPosition,
        mode: EditMode,
        seed: Option<char>,
    ) -> Option<GridCmd> {
        if position.row >= self.rows.len() || position.col >= self.columns.len() {
            tracing::warn!(?position, "edit target out of range");
            return None;
        }
        if let Some(previous) = self.editing.take() {
            tracing::debug!(session = previous.id.0, "session superseded without commit");
        }

        self.session_counter += 1;
        let id = SessionId(self.session_counter);
        let original = self.stored_text(position);
        let session = match (mode, seed) {
            (EditMode::Replace, Some(ch)) => EditSession::with_char(id, position, original, ch),
            _ => {
                let mut session = EditSession::new(id, position, mode, original);
                if mode == EditMode::Replace {
                    session.set_text("");
                }
                session
            }
        };

        tracing::debug!(session = id.0, ?position, ?mode, "edit session opened");
        let caret = session.caret_placement();
        self.editing = Some(session);
        self.notify_editing();

        Some(GridCmd::FocusEditor { position, caret })
    }

    /// F2 on the selected cell
    pub fn start_editing_caret_end(&mut self) -> Option<GridCmd> {
        let cell = self.selection.primary()?;
        self.start_editing(cell, EditMode::CaretEnd, None)
    }

    /// A printable key typed over a single-cell selection
    pub fn start_editing_with_char(&mut self, ch: char) -> Option<GridCmd> {
        if !self.selection.is_single_cell() {
            return None;
        }
        let cell = self.selection.primary()?;
        self.start_editing(cell, EditMode::Replace, Some(ch))
    }

    /// Double-click: the host's date picker takes precedence on date columns
    pub(crate) fn start_editing_from_double_click(&mut self, cell: CellPosition) -> Option<GridCmd> {
        let column = self.columns.get(cell.col)?;
        if column.kind.is_date() {
            let request = DatePickerRequest {
                position: cell,
                column_key: column.key.clone(),
                current: self.cell(cell.row, cell.col).cloned(),
                purpose: PickerPurpose::Edit,
            };
            if self.host.date_picker_requested(&request) {
                tracing::debug!(?cell, "date edit handed to host picker");
                return None;
            }
        }
        self.start_editing(cell, EditMode::SelectAll, None)
    }

    /// Commit the open session, if it still holds commit rights
    pub fn commit_edit(&mut self) -> Option<CellChange> {
        let session = self.editing.take()?;
        if self.last_committed.is_some_and(|last| last >= session.id) {
            tracing::debug!(session = session.id.0, "duplicate commit suppressed");
            self.notify_editing();
            return None;
        }
        self.last_committed = Some(session.id);

        tracing::debug!(session = session.id.0, position = ?session.position, "edit committed");
        let change = self.write_cell(session.position, session.text());
        self.notify_editing();
        change
    }

    /// Commit on behalf of a specific session (e.g. a blur handler bound to
    /// an editor widget). Stale or already-committed sessions are ignored.
    pub fn commit_edit_for(&mut self, id: SessionId) -> Option<CellChange> {
        if self.last_committed.is_some_and(|last| last >= id) {
            tracing::debug!(session = id.0, "duplicate commit suppressed");
            return None;
        }
        if self.editing.as_ref().map(|s| s.id) != Some(id) {
            tracing::debug!(session = id.0, "commit for stale session ignored");
            return None;
        }
        self.commit_edit()
    }

    /// Discard the open session without touching data
    pub fn cancel_edit(&mut self) -> bool {
        match self.editing.take() {
            Some(session) => {
                tracing::debug!(session = session.id.0, "edit cancelled");
                self.notify_editing();
                true
            }
            None => false,
        }
    }

    /// Editor lost focus. Swallowed once after the native picker opened.
    pub fn editor_blur(&mut self, id: SessionId) -> Option<CellChange> {
        if let Some(session) = self.editing.as_mut().filter(|s| s.id == id) {
            if std::mem::take(&mut session.suppress_next_blur) {
                tracing::trace!(session = id.0, "blur suppressed for date picker");
                return None;
            }
        }
        self.commit_edit_for(id)
    }

    /// Host editor widget replaced its content
    pub fn set_editor_text(&mut self, text: &str) -> bool {
        match self.editing.as_mut() {
            Some(session) => {
                session.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Handle a key while a session is open
    pub(crate) fn handle_editing_key(&mut self, key: Keystroke) -> Option<GridCmd> {
        let mods = key.mods;
        match key.key {
            KeyCode::Escape => return self.cancel_edit().then(GridCmd::redraw),
            KeyCode::Enter => {
                self.commit_edit();
                self.move_enter(!mods.shift());
                return Some(GridCmd::redraw());
            }
            KeyCode::Tab => {
                self.commit_edit();
                if mods.shift() {
                    self.move_to_prev_cell();
                } else {
                    self.move_to_next_cell();
                }
                return Some(GridCmd::redraw());
            }
            _ => {}
        }

        let session = self.editing.as_mut()?;
        match key.key {
            KeyCode::Char(c) if mods.has_command() && c.eq_ignore_ascii_case(&'a') => {
                session.select_all()
            }
            KeyCode::Char(_) => session.insert_char(key.printable_char()?),
            KeyCode::Backspace => session.delete_backward(),
            KeyCode::Delete => session.delete_forward(),
            KeyCode::Left => session.cursor_left(),
            KeyCode::Right => session.cursor_right(),
            KeyCode::Home => session.cursor_home(),
            KeyCode::End => session.cursor_end(),
            _ => return None,
        }
        Some(GridCmd::redraw())
    }

    /// Date picker request from the editor's picker button, or a quick-pick
    /// on a selected date cell while not editing.
    ///
    /// A host that handles the request replaces the native picker entirely.
    pub fn open_date_picker(&mut self) -> Option<GridCmd> {
        let (position, purpose) = match &self.editing {
            Some(session) => (session.position, PickerPurpose::Edit),
            None if self.selection.is_single_cell() => {
                (self.selection.primary()?, PickerPurpose::View)
            }
            None => return None,
        };
        let column = self.columns.get(position.col)?;
        if !column.kind.is_date() {
            return None;
        }

        let request = DatePickerRequest {
            position,
            column_key: column.key.clone(),
            current: self.cell(position.row, position.col).cloned(),
            purpose,
        };
        if self.host.date_picker_requested(&request) {
            return None;
        }

        // The picker takes focus from the text editor; that blur must not commit
        if let Some(session) = self.editing.as_mut() {
            session.suppress_next_blur = true;
        }
        Some(GridCmd::OpenNativeDatePicker { position })
    }

    /// A picker produced a value. Inside a session this commits immediately
    /// and ends the session; otherwise the value is written directly.
    pub fn apply_picked_date(
        &mut self,
        position: CellPosition,
        value: NaiveDateTime,
    ) -> Option<CellChange> {
        let kind = self.columns.get(position.col)?.kind;
        let text = match kind {
            ColumnKind::DateTime => date::format_date_time(&value, &self.config.date_pattern),
            _ => date::format_date(&value, &self.config.date_pattern),
        };

        if let Some(session) = self.editing.as_mut().filter(|s| s.position == position) {
            session.set_text(&text);
            session.suppress_next_blur = false;
            return self.commit_edit();
        }
        self.write_cell(position, &text)
    }

    /// Stored value as editable text (numbers unformatted, dates verbatim)
    fn stored_text(&self, position: CellPosition) -> String {
        self.cell(position.row, position.col)
            .map(|value| value.to_display())
            .unwrap_or_default()
    }

    /// Coerce `raw` for the target column, write it into a new row
    /// collection, hand that to the host and report the change.
    pub(crate) fn write_cell(&mut self, position: CellPosition, raw: &str) -> Option<CellChange> {
        let column = self.columns.get(position.col)?;
        if position.row >= self.rows.len() {
            tracing::warn!(?position, "commit target row vanished");
            return None;
        }
        let key = column.key.clone();
        let next_value = coerce::coerce(column.kind, raw, &self.config.date_pattern);

        let mut rows = self.rows.clone();
        let row = &mut rows[position.row];
        let previous = row.get(&key).cloned();
        row.set(&key, next_value.clone());

        let change = CellChange {
            row: position.row,
            col: position.col,
            column_key: key,
            previous,
            next: next_value,
        };
        self.replace_rows(rows);
        self.host.cell_committed(&change);
        Some(change)
    }
}
