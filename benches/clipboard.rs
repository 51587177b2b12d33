//! Benchmarks for clipboard exchange
//!
//! Run with: cargo bench --bench clipboard

use grid_core::clipboard;
use grid_core::model::{Column, ColumnKind, Row};
use grid_core::selection::CellRange;
use grid_core::{Grid, GridConfig, GridHost};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

struct NullHost;

impl GridHost for NullHost {
    fn rows_changed(&mut self, rows: Vec<Row>) {
        divan::black_box(rows);
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name", ColumnKind::Text),
        Column::new("qty", "Qty", ColumnKind::Number),
        Column::new("due", "Due", ColumnKind::Date),
    ]
}

fn rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            Row::new(format!("r{}", i), 0)
                .with("name", format!("Row {}", i).as_str())
                .with("qty", i as f64)
                .with("due", format!("{:02}.03.2026", i % 28 + 1).as_str())
        })
        .collect()
}

fn text_block(rows: usize) -> String {
    (0..rows)
        .map(|i| format!("Item {}\t{}\t2026-03-{:02}", i, i * 3, i % 28 + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Codec
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn deserialize(bencher: divan::Bencher, rows: usize) {
    let text = text_block(rows);
    bencher.bench(|| clipboard::deserialize(divan::black_box(&text)));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn serialize(bencher: divan::Bencher, rows: usize) {
    let block = clipboard::deserialize(&text_block(rows));
    bencher.bench(|| clipboard::serialize(divan::black_box(&block)));
}

// ============================================================================
// Grid copy / paste (display formatting and coercion included)
// ============================================================================

#[divan::bench(args = [100, 1_000])]
fn copy_selection(bencher: divan::Bencher, count: usize) {
    let mut grid = Grid::new(columns(), rows(count), GridConfig::default(), NullHost);
    grid.select_range(CellRange::new(0, count - 1, 0, 2));
    bencher.bench_local(|| grid.copy_text());
}

#[divan::bench(args = [100, 1_000])]
fn paste_block(bencher: divan::Bencher, count: usize) {
    let text = text_block(count);
    bencher
        .with_inputs(|| {
            let mut grid = Grid::new(columns(), rows(count), GridConfig::default(), NullHost);
            grid.select_cell(0, 0);
            grid
        })
        .bench_local_values(|mut grid| {
            grid.paste_text(&text);
            grid
        });
}
