//! In-place cell edit session
//!
//! A session owns the text being typed into one cell: a single-line buffer,
//! a caret, and a select-all flag. Opening, committing and cancelling
//! sessions is handled by the grid (see `grid::editing`).

use crate::selection::CellPosition;

/// How a session was seeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Typed character replaces the stored value
    Replace,
    /// Stored value, caret at the end (F2)
    CaretEnd,
    /// Stored value, fully selected (double-click)
    SelectAll,
}

/// Monotonic session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub u64);

/// Where the host should put the caret when it focuses the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretPlacement {
    End,
    SelectAll,
}

/// State of a single open cell edit
#[derive(Debug, Clone)]
pub struct EditSession {
    pub id: SessionId,
    pub position: CellPosition,
    pub mode: EditMode,
    /// Character that opened a `Replace` session
    pub seed: Option<char>,
    /// Display value of the cell when the session opened
    pub original: String,
    text: String,
    /// Caret as a char index into `text`
    caret: usize,
    all_selected: bool,
    /// Set when the native date picker is activated; swallows the next blur
    pub suppress_next_blur: bool,
}

impl EditSession {
    /// Open a session seeded from the stored value
    pub fn new(id: SessionId, position: CellPosition, mode: EditMode, original: String) -> Self {
        let caret = original.chars().count();
        Self {
            id,
            position,
            mode,
            seed: None,
            text: original.clone(),
            original,
            caret,
            all_selected: mode == EditMode::SelectAll,
            suppress_next_blur: false,
        }
    }

    /// Open a `Replace` session whose content is just the typed character
    pub fn with_char(id: SessionId, position: CellPosition, original: String, ch: char) -> Self {
        Self {
            id,
            position,
            mode: EditMode::Replace,
            seed: Some(ch),
            text: ch.to_string(),
            original,
            caret: 1,
            all_selected: false,
            suppress_next_blur: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn has_selection(&self) -> bool {
        self.all_selected && !self.text.is_empty()
    }

    pub fn caret_placement(&self) -> CaretPlacement {
        match self.mode {
            EditMode::SelectAll => CaretPlacement::SelectAll,
            EditMode::Replace | EditMode::CaretEnd => CaretPlacement::End,
        }
    }

    pub fn is_modified(&self) -> bool {
        self.text != self.original
    }

    /// Replace the whole buffer (host-side editor sync)
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.text.chars().count();
        self.all_selected = false;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.delete_selection();
        let at = self.byte_offset(self.caret);
        self.text.insert(at, ch);
        self.caret += 1;
    }

    /// Insert pasted text; line breaks are dropped since cells are single-line
    pub fn insert_text(&mut self, text: &str) {
        for ch in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(ch);
        }
    }

    pub fn delete_backward(&mut self) {
        if self.delete_selection() || self.caret == 0 {
            return;
        }
        let at = self.byte_offset(self.caret - 1);
        self.text.remove(at);
        self.caret -= 1;
    }

    pub fn delete_forward(&mut self) {
        if self.delete_selection() || self.caret >= self.char_len() {
            return;
        }
        let at = self.byte_offset(self.caret);
        self.text.remove(at);
    }

    pub fn cursor_left(&mut self) {
        if self.all_selected {
            self.all_selected = false;
            self.caret = 0;
        } else {
            self.caret = self.caret.saturating_sub(1);
        }
    }

    pub fn cursor_right(&mut self) {
        if self.all_selected {
            self.all_selected = false;
            self.caret = self.char_len();
        } else {
            self.caret = (self.caret + 1).min(self.char_len());
        }
    }

    pub fn cursor_home(&mut self) {
        self.all_selected = false;
        self.caret = 0;
    }

    pub fn cursor_end(&mut self) {
        self.all_selected = false;
        self.caret = self.char_len();
    }

    pub fn select_all(&mut self) {
        self.all_selected = true;
        self.caret = self.char_len();
    }

    fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            self.all_selected = false;
            return false;
        }
        self.text.clear();
        self.caret = 0;
        self.all_selected = false;
        true
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(mode: EditMode, value: &str) -> EditSession {
        EditSession::new(SessionId(1), CellPosition::new(0, 0), mode, value.to_string())
    }

    #[test]
    fn test_caret_end_seed() {
        let edit = session(EditMode::CaretEnd, "hello");
        assert_eq!(edit.text(), "hello");
        assert_eq!(edit.caret(), 5);
        assert!(!edit.has_selection());
        assert!(!edit.is_modified());
        assert_eq!(edit.caret_placement(), CaretPlacement::End);
    }

    #[test]
    fn test_replace_seed() {
        let edit = EditSession::with_char(SessionId(2), CellPosition::new(1, 2), "old".into(), 'x');
        assert_eq!(edit.text(), "x");
        assert_eq!(edit.caret(), 1);
        assert_eq!(edit.seed, Some('x'));
        assert_eq!(edit.original, "old");
        assert!(edit.is_modified());
    }

    #[test]
    fn test_select_all_then_type_replaces() {
        let mut edit = session(EditMode::SelectAll, "12");
        assert!(edit.has_selection());
        assert_eq!(edit.caret_placement(), CaretPlacement::SelectAll);
        edit.insert_char('7');
        assert_eq!(edit.text(), "7");
        assert!(!edit.has_selection());
    }

    #[test]
    fn test_insert_and_delete_mid_text() {
        let mut edit = session(EditMode::CaretEnd, "abc");
        edit.cursor_left();
        edit.insert_char('X');
        assert_eq!(edit.text(), "abXc");
        edit.delete_backward();
        assert_eq!(edit.text(), "abc");
        edit.cursor_home();
        edit.delete_forward();
        assert_eq!(edit.text(), "bc");
        assert_eq!(edit.caret(), 0);
    }

    #[test]
    fn test_multibyte_text() {
        let mut edit = session(EditMode::CaretEnd, "Größe");
        edit.cursor_left();
        edit.delete_backward();
        assert_eq!(edit.text(), "Gröe");
        assert_eq!(edit.caret(), 3);
    }

    #[test]
    fn test_insert_text_strips_newlines() {
        let mut edit = session(EditMode::CaretEnd, "");
        edit.insert_text("a\r\nb");
        assert_eq!(edit.text(), "ab");
    }

    #[test]
    fn test_select_all_then_arrow_collapses() {
        let mut edit = session(EditMode::SelectAll, "abc");
        edit.cursor_left();
        assert!(!edit.has_selection());
        assert_eq!(edit.caret(), 0);
        edit.delete_backward();
        assert_eq!(edit.text(), "abc");
    }
}
