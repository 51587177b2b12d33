//! Tab/newline clipboard codec and clipboard backends
//!
//! The text format is the one spreadsheet applications exchange through the
//! system clipboard: rows separated by newlines, cells by a horizontal tab.

use crate::error::{GridError, Result};

/// A rectangular block of cell texts, row-major
pub type Block = Vec<Vec<String>>;

/// Join cells with tabs and rows with newlines
pub fn serialize(block: &[Vec<String>]) -> String {
    block
        .iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split clipboard text into rows of cells.
///
/// Empty input gives an empty block. `\r\n` line endings are accepted and a
/// single trailing `\r\n` (spreadsheet apps append one) is ignored. A bare
/// trailing `\n` starts an empty last row, so `serialize` output always
/// splits back into the same block. Empty cells, including trailing ones,
/// are kept.
pub fn deserialize(text: &str) -> Block {
    if text.is_empty() {
        return Vec::new();
    }

    let body = text.strip_suffix("\r\n").unwrap_or(text);

    body.split('\n')
        .map(|line| {
            line.strip_suffix('\r')
                .unwrap_or(line)
                .split('\t')
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// Plain-text clipboard the grid copies to and pastes from
pub trait ClipboardBackend {
    fn get_text(&mut self) -> Result<String>;
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| GridError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardBackend for SystemClipboard {
    fn get_text(&mut self) -> Result<String> {
        self.inner
            .get_text()
            .map_err(|e| GridError::Clipboard(e.to_string()))
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .map_err(|e| GridError::Clipboard(e.to_string()))
    }
}

/// Process-local clipboard, for tests and headless hosts
#[derive(Debug, Clone, Default)]
pub struct InMemoryClipboard {
    pub text: String,
}

impl ClipboardBackend for InMemoryClipboard {
    fn get_text(&mut self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.text = text.to_string();
        Ok(())
    }
}
