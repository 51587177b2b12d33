//! Rows and cell values

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable row identifier supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub String);

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        RowId(id.to_string())
    }
}

impl From<String> for RowId {
    fn from(id: String) -> Self {
        RowId(id)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value stored in a cell
///
/// `Empty` is an explicit "cleared" value (a committed empty number cell),
/// distinct from the key being absent from the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Plain display text (no date re-formatting)
    pub fn to_display(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Text(text) => text.is_empty(),
            CellValue::Number(_) => false,
            CellValue::Empty => true,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// Render integral values without a fractional part (`15`, not `15.0`)
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// A single grid row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    /// Depth annotation; rows of greater indent directly below are descendants
    #[serde(default)]
    pub indent: usize,
    #[serde(default)]
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(id: impl Into<RowId>, indent: usize) -> Self {
        Self {
            id: id.into(),
            indent,
            cells: BTreeMap::new(),
        }
    }

    /// Builder-style cell assignment
    pub fn with(mut self, key: &str, value: impl Into<CellValue>) -> Self {
        self.cells.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }

    pub fn set(&mut self, key: &str, value: CellValue) {
        self.cells.insert(key.to_string(), value);
    }
}
