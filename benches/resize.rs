//! Benchmarks for drag gestures and layout rebuilding.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_precision_loss)]

use colresize::{
    Column, ColumnLayout, ColumnResizeTable, HeadlessHost, PointerEvent, ResizeConfig, TableModel,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn wide_table(columns: usize) -> ColumnResizeTable {
    let columns = (0..columns)
        .map(|i| Column::new(format!("col{i}"), 80.0))
        .collect();
    let model = TableModel::new(columns, Vec::new()).expect("valid table");
    ColumnResizeTable::new(model, HeadlessHost, ResizeConfig::default()).expect("valid config")
}

/// One long drag: pointer-down, 1000 moves, pointer-up
fn bench_drag_gesture(c: &mut Criterion) {
    let mut gesture = vec![PointerEvent::Down {
        index: 0,
        pointer_x: 80.0,
        column_left_edge_x: 0.0,
    }];
    gesture.extend((0..1000).map(|i| PointerEvent::Move {
        pointer_x: (i % 400) as f32,
    }));
    gesture.push(PointerEvent::Up);

    let mut group = c.benchmark_group("drag");
    group.throughput(Throughput::Elements(gesture.len() as u64));
    group.bench_function("1000_moves", |b| {
        b.iter(|| {
            let mut table = wide_table(10);
            table.replay(black_box(gesture.iter().copied()))
        })
    });
    group.finish();
}

/// Layout rebuild + handle hit test at different column counts
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for count in [10_usize, 100, 1000] {
        let table = wide_table(count);
        let columns = table.model().columns().to_vec();
        group.bench_with_input(BenchmarkId::new("handle_at", count), &columns, |b, columns| {
            b.iter(|| {
                let layout = ColumnLayout::from_columns(black_box(columns));
                layout.handle_at(black_box(400.0), 8.0)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drag_gesture, bench_layout);

criterion_main!(benches);
