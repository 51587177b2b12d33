//! Grid data model: columns, rows and cell values
//!
//! The host owns the authoritative rows and columns. The grid keeps a
//! working mirror and hands back whole replacement collections on every
//! mutation.

pub mod column;
pub mod row;

pub use column::{Column, ColumnKind, DateRole, MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
pub use row::{CellValue, Row, RowId};
