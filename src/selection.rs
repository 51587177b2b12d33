//! Rectangular cell selection
//!
//! Rows are *data* indices into the row collection, not visual positions;
//! columns are positional indices into the current column order.

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Inclusive rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl CellRange {
    /// Build a range, normalising so start <= end on both axes
    pub fn new(row_a: usize, row_b: usize, col_a: usize, col_b: usize) -> Self {
        Self {
            row_start: row_a.min(row_b),
            row_end: row_a.max(row_b),
            col_start: col_a.min(col_b),
            col_end: col_a.max(col_b),
        }
    }

    pub fn single(cell: CellPosition) -> Self {
        Self::new(cell.row, cell.row, cell.col, cell.col)
    }

    /// Smallest range covering both cells
    pub fn spanning(a: CellPosition, b: CellPosition) -> Self {
        Self::new(a.row, b.row, a.col, b.col)
    }

    /// Top-left cell, which keyboard movement and editing act on
    pub fn primary(&self) -> CellPosition {
        CellPosition::new(self.row_start, self.col_start)
    }

    pub fn is_single_cell(&self) -> bool {
        self.row_start == self.row_end && self.col_start == self.col_end
    }

    pub fn contains(&self, cell: CellPosition) -> bool {
        (self.row_start..=self.row_end).contains(&cell.row)
            && (self.col_start..=self.col_end).contains(&cell.col)
    }

    pub fn width(&self) -> usize {
        self.col_end - self.col_start + 1
    }

    pub fn height(&self) -> usize {
        self.row_end - self.row_start + 1
    }
}

/// Selection state: nothing, or one active rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    Empty,
    Active(CellRange),
}

impl Selection {
    pub fn single(cell: CellPosition) -> Self {
        Selection::Active(CellRange::single(cell))
    }

    pub fn range(&self) -> Option<CellRange> {
        match self {
            Selection::Empty => None,
            Selection::Active(range) => Some(*range),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }

    pub fn primary(&self) -> Option<CellPosition> {
        self.range().map(|r| r.primary())
    }

    pub fn is_single_cell(&self) -> bool {
        self.range().is_some_and(|r| r.is_single_cell())
    }

    pub fn contains(&self, cell: CellPosition) -> bool {
        self.range().is_some_and(|r| r.contains(cell))
    }

    /// Clamp into a grid of `rows` x `cols`; an empty grid empties the selection
    pub fn clamped(self, rows: usize, cols: usize) -> Selection {
        let Some(range) = self.range() else {
            return self;
        };
        if rows == 0 || cols == 0 {
            return Selection::Empty;
        }
        let (max_row, max_col) = (rows - 1, cols - 1);
        Selection::Active(CellRange::new(
            range.row_start.min(max_row),
            range.row_end.min(max_row),
            range.col_start.min(max_col),
            range.col_end.min(max_col),
        ))
    }
}

/// Pointer press that may turn into a rectangle drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Cell under the pointer at press time
    pub origin: CellPosition,
    /// Pointer coordinates at press time
    pub press_point: (f32, f32),
    /// Set once the pointer travelled past the drag threshold
    pub dragging: bool,
}

impl DragState {
    pub fn new(origin: CellPosition, x: f32, y: f32) -> Self {
        Self {
            origin,
            press_point: (x, y),
            dragging: false,
        }
    }

    /// Whether `(x, y)` is farther than `threshold` from the press point.
    /// Compared squared, so no square root.
    pub fn exceeds_threshold(&self, x: f32, y: f32, threshold: f32) -> bool {
        let dx = x - self.press_point.0;
        let dy = y - self.press_point.1;
        dx * dx + dy * dy > threshold * threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_normalises() {
        let r = CellRange::new(4, 2, 3, 1);
        assert_eq!((r.row_start, r.row_end, r.col_start, r.col_end), (2, 4, 1, 3));
        assert_eq!(r.primary(), CellPosition::new(2, 1));
        assert_eq!((r.height(), r.width()), (3, 3));
    }

    #[test]
    fn test_range_contains() {
        let r = CellRange::new(1, 2, 1, 2);
        assert!(r.contains(CellPosition::new(1, 1)));
        assert!(r.contains(CellPosition::new(2, 2)));
        assert!(!r.contains(CellPosition::new(3, 1)));
        assert!(!r.contains(CellPosition::new(1, 0)));
    }

    #[test]
    fn test_empty_selection() {
        let sel = Selection::Empty;
        assert!(sel.is_empty());
        assert!(sel.primary().is_none());
        assert!(!sel.is_single_cell());
        assert!(!sel.contains(CellPosition::new(0, 0)));
    }

    #[test]
    fn test_clamped() {
        let sel = Selection::Active(CellRange::new(3, 9, 1, 7));
        let clamped = sel.clamped(5, 3).range().unwrap();
        assert_eq!(clamped, CellRange::new(3, 4, 1, 2));
        assert_eq!(sel.clamped(0, 3), Selection::Empty);
    }

    #[test]
    fn test_drag_threshold_is_squared_distance() {
        let drag = DragState::new(CellPosition::new(0, 0), 10.0, 10.0);
        assert!(!drag.exceeds_threshold(13.0, 10.0, 4.0));
        assert!(!drag.exceeds_threshold(14.0, 10.0, 4.0));
        assert!(drag.exceeds_threshold(13.0, 13.0, 4.0));
    }
}
