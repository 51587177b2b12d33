//! grid-core - headless spreadsheet-style data grid
//!
//! This crate provides the interaction core of an editable, hierarchical
//! data grid: rectangular selection, keyboard navigation, in-place edit
//! sessions, tab/newline clipboard exchange, collapsible indent hierarchy
//! and column reorder/resize. Rendering is left to the host, which drives
//! the grid with `GridMsg` values through `update` and receives data
//! changes through the `GridHost` trait.

pub mod clipboard;
pub mod coerce;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod date;
pub mod edit;
pub mod error;
pub mod grid;
pub mod hierarchy;
pub mod host;
pub mod input;
pub mod logging;
pub mod messages;
pub mod model;
pub mod selection;
pub mod update;

// Re-export commonly used types
pub use commands::GridCmd;
pub use config::GridConfig;
pub use error::{GridError, Result};
pub use grid::Grid;
pub use host::{CellChange, GridHost};
pub use messages::GridMsg;
pub use model::{CellValue, Column, ColumnKind, Row, RowId};
pub use selection::{CellPosition, CellRange, Selection};
pub use update::update;
