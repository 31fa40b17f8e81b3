//! Benchmarks for cursor transitions, visible-grid assembly and input dispatch.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use memgrid_core::config::GridConfig;
use memgrid_core::input::{Button, InputEvent};
use memgrid_core::{GridLayout, GridView, InputRouter, MountedGrid, NavCommand, VisibleGrid};

fn layout_with_items(items: usize) -> GridLayout {
    let config = GridConfig {
        items_per_category: items,
        initial_item: 0,
        ..GridConfig::default()
    };
    GridLayout::from_config(&config).expect("bench config is valid")
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigator_apply");

    for items in [20, 200, 2_000] {
        let layout = layout_with_items(items);
        let commands = [
            NavCommand::NextItem,
            NavCommand::NextCategory,
            NavCommand::PrevItem,
            NavCommand::JumpToItem(items as i64 / 2),
            NavCommand::PrevCategory,
        ];
        let label = format!("{items}");

        group.bench_function(BenchmarkId::new("cycle", &label), |b| {
            b.iter(|| {
                let mut cursor = layout.initial_cursor();
                for _ in 0..100 {
                    for cmd in commands {
                        cursor = layout.apply(cursor, cmd);
                    }
                }
                cursor
            });
        });
    }

    group.finish();
}

fn bench_visible_grid(c: &mut Criterion) {
    let layout = layout_with_items(20);
    let cursor = layout.initial_cursor();

    c.bench_function("visible_grid_compute", |b| {
        b.iter(|| VisibleGrid::compute(&layout, cursor));
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("router_dispatch");

    for n in [1_000, 10_000] {
        let events: Vec<InputEvent> = (0..n)
            .map(|i| match i % 3 {
                0 => InputEvent::Wheel {
                    dx: 0.0,
                    dy: 12.0,
                    timestamp_ms: i as u64 * 8,
                },
                1 => InputEvent::Tick {
                    now_ms: i as u64 * 8,
                },
                _ => InputEvent::ButtonPress(Button::Right),
            })
            .collect();
        let label = format!("{n}");

        group.bench_function(BenchmarkId::new("mixed", &label), |b| {
            b.iter_batched(
                || {
                    let router = InputRouter::new();
                    let mounted = MountedGrid::mount(&router, GridView::new(layout_with_items(20)));
                    (router, mounted)
                },
                |(router, _mounted)| {
                    for event in &events {
                        router.dispatch(event);
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_apply, bench_visible_grid, bench_dispatch);
criterion_main!(benches);
