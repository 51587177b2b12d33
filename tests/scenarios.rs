//! End-to-end interaction scenarios

mod common;

use common::{cell, key, test_grid, typed, RecordingHost};
use grid_core::input::KeyCode;
use grid_core::messages::GridMsg;
use grid_core::model::{CellValue, Column, ColumnKind, Row, RowId};
use grid_core::selection::{CellRange, Selection};
use grid_core::update::update;
use grid_core::{Grid, GridConfig};

fn project_columns() -> Vec<Column> {
    vec![
        Column::new("title", "Title", ColumnKind::Text).title_column(),
        Column::new("value", "Value", ColumnKind::Number),
        Column::new("start", "Start", ColumnKind::Date),
    ]
}

fn project_grid(rows: Vec<Row>) -> Grid<RecordingHost> {
    Grid::new(
        project_columns(),
        rows,
        GridConfig::default(),
        RecordingHost::default(),
    )
}

fn commit_typed(grid: &mut Grid<RecordingHost>, text: &str) {
    for ch in text.chars() {
        update(grid, GridMsg::Key(typed(ch)));
    }
    update(grid, GridMsg::Key(key(KeyCode::Enter)));
}

fn assert_indent_invariant(rows: &[Row]) {
    if let Some(first) = rows.first() {
        assert_eq!(first.indent, 0);
    }
    for pair in rows.windows(2) {
        assert!(
            pair[1].indent <= pair[0].indent + 1,
            "{} jumps from indent {} to {}",
            pair[1].id,
            pair[0].indent,
            pair[1].indent
        );
    }
}

#[test]
fn test_numeric_commit_replaces_text_value() {
    let rows = vec![Row::new("a", 0).with("value", "12")];
    let mut grid = project_grid(rows);
    grid.select_cell(0, 1);

    commit_typed(&mut grid, "15");

    assert_eq!(grid.cell(0, 1), Some(&CellValue::Number(15.0)));
    let change = &grid.host().changes[0];
    assert_eq!((change.row, change.col), (0, 1));
    assert_eq!(change.previous.as_ref().map(CellValue::to_display).as_deref(), Some("12"));
    assert_eq!(change.next, CellValue::Number(15.0));
    assert!(!change.is_noop());
}

#[test]
fn test_date_commit_into_empty_cell() {
    let mut grid = project_grid(vec![Row::new("a", 0)]);
    grid.select_cell(0, 2);

    commit_typed(&mut grid, "05.01.2026");

    assert_eq!(grid.cell(0, 2), Some(&CellValue::from("05.01.2026")));
    assert_eq!(grid.display_value(0, 2), "05.01.2026");
    assert_eq!(grid.host().changes[0].previous, None);
}

#[test]
fn test_unparseable_date_is_kept() {
    let mut grid = project_grid(vec![Row::new("a", 0)]);
    grid.select_cell(0, 2);

    commit_typed(&mut grid, "soon");

    assert_eq!(grid.cell(0, 2), Some(&CellValue::from("soon")));
}

#[test]
fn test_paste_lands_in_visible_rows_past_collapsed_subtree() {
    // r5 owns r6 and r7
    let indents = [0, 0, 0, 0, 0, 0, 1, 1, 0, 0];
    let rows: Vec<Row> = indents
        .iter()
        .enumerate()
        .map(|(i, &indent)| {
            Row::new(format!("r{}", i), indent)
                .with("title", format!("Task {}", i).as_str())
                .with("value", (i * 10) as f64)
                .with("start", format!("{:02}.03.2026", i + 1).as_str())
        })
        .collect();
    let mut grid = project_grid(rows);
    grid.toggle_collapse(&RowId::from("r5"));

    grid.select_range(CellRange::new(2, 4, 1, 2));
    let copied = grid.copy_text().unwrap();
    assert_eq!(copied, "20\t03.03.2026\n30\t04.03.2026\n40\t05.03.2026");

    grid.select_cell(5, 1);
    assert_eq!(grid.paste_text(&copied), 6);

    assert_eq!(grid.cell(5, 1), Some(&CellValue::Number(20.0)));
    assert_eq!(grid.cell(8, 1), Some(&CellValue::Number(30.0)));
    assert_eq!(grid.cell(9, 1), Some(&CellValue::Number(40.0)));
    assert_eq!(grid.cell(9, 2), Some(&CellValue::from("05.03.2026")));

    // Hidden rows untouched
    assert_eq!(grid.cell(6, 1), Some(&CellValue::Number(60.0)));
    assert_eq!(grid.cell(7, 1), Some(&CellValue::Number(70.0)));

    assert_eq!(
        grid.selection(),
        Selection::Active(CellRange::new(5, 9, 1, 2))
    );
}

#[test]
fn test_copy_paste_in_place_preserves_values() {
    let rows = vec![
        Row::new("a", 0).with("value", 1.5).with("start", "2026-01-05"),
        Row::new("b", 0).with("value", 42.0).with("start", "05.01.2026"),
    ];
    let mut grid = project_grid(rows);
    grid.select_range(CellRange::new(0, 1, 1, 2));
    let copied = grid.copy_text().unwrap();

    grid.paste_text(&copied);

    assert_eq!(grid.cell(0, 1), Some(&CellValue::Number(1.5)));
    assert_eq!(grid.cell(1, 1), Some(&CellValue::Number(42.0)));
    // Dates come back in the configured pattern
    assert_eq!(grid.cell(0, 2), Some(&CellValue::from("05.01.2026")));
    assert_eq!(grid.cell(1, 2), Some(&CellValue::from("05.01.2026")));
}

#[test]
fn test_indent_invariant_holds_across_operations() {
    let rows: Vec<Row> = (0..6).map(|i| Row::new(format!("r{}", i), 0)).collect();
    let mut grid = project_grid(rows);

    let ops: &[(bool, usize)] = &[
        (true, 1),
        (true, 2),
        (true, 2),
        (true, 3),
        (true, 5),
        (false, 1),
        (true, 0),
        (false, 0),
        (true, 4),
        (true, 4),
        (false, 2),
    ];
    for &(indent, row) in ops {
        if indent {
            grid.indent_row(row);
        } else {
            grid.outdent_row(row);
        }
        assert_indent_invariant(grid.rows());
    }
}

#[test]
fn test_collapse_then_expand_restores_visible_set() {
    let rows: Vec<Row> = [0, 1, 2, 1, 0, 1]
        .iter()
        .enumerate()
        .map(|(i, &indent)| Row::new(format!("r{}", i), indent))
        .collect();
    let mut grid = project_grid(rows);
    let before = grid.visible_rows().to_vec();

    grid.toggle_collapse(&RowId::from("r1"));
    assert_eq!(grid.visible_rows(), &[0, 1, 3, 4, 5]);
    grid.toggle_collapse(&RowId::from("r1"));

    assert_eq!(grid.visible_rows(), before.as_slice());
}

#[test]
fn test_blur_racing_enter_applies_once() {
    let mut grid = test_grid(common::flat_rows(2));
    grid.select_cell(0, 1);
    update(&mut grid, GridMsg::Key(typed('9')));
    let id = grid.editing().unwrap().id;

    // Blur arrives first, then the Enter that caused it
    update(&mut grid, GridMsg::EditorBlur(id));
    update(&mut grid, GridMsg::Key(key(KeyCode::Enter)));

    assert_eq!(grid.host().changes.len(), 1);
    assert_eq!(grid.cell(0, 1), Some(&CellValue::Number(9.0)));
    // Enter without a session is plain navigation
    assert_eq!(grid.selection(), Selection::single(cell(1, 1)));
}

#[test]
fn test_host_receives_fresh_collection_each_mutation() {
    let mut grid = project_grid(vec![Row::new("a", 0), Row::new("b", 0)]);
    grid.select_cell(0, 0);
    commit_typed(&mut grid, "x");
    grid.indent_row(1);

    let host = grid.host();
    assert_eq!(host.rows.len(), 2);
    assert_eq!(host.rows[0][0].get("title"), Some(&CellValue::from("x")));
    assert_eq!(host.rows[0][1].indent, 0);
    assert_eq!(host.rows[1][1].indent, 1);
}
