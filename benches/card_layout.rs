// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the card stack layout math.
//!
//! The layout functions run for every card on every frame while animating,
//! so they should stay trivially cheap even for large stacks.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tabdeck::ui::components::animated_counter;
use tabdeck::ui::switcher::layout::{self, CardContext, CardTransform};
use tabdeck::ui::switcher::ViewMode;

fn stack_contexts(count: usize) -> Vec<CardContext> {
    (0..count)
        .map(|index| CardContext {
            index,
            mode: ViewMode::Normal,
            tapped: index == count / 2,
            settled: false,
            scroll_offset: -120.0,
            viewport_height: 760.0,
        })
        .collect()
}

fn bench_card_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_layout");

    let contexts = stack_contexts(100);
    group.bench_function("transform_100_cards", |b| {
        b.iter(|| {
            for ctx in &contexts {
                black_box(layout::card_transform(black_box(ctx)));
            }
        });
    });

    group.finish();
}

fn bench_stack_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_layout");

    let transforms: Vec<CardTransform> = stack_contexts(100)
        .iter()
        .map(layout::card_transform)
        .collect();
    group.bench_function("positions_100_cards", |b| {
        b.iter(|| {
            black_box(layout::stack_positions(
                black_box(&transforms),
                layout::NORMAL_STACK_SPACING,
            ));
        });
    });

    group.finish();
}

fn bench_counter_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("animated_counter");

    group.bench_function("step_values", |b| {
        b.iter(|| {
            black_box(animated_counter::step_values(
                black_box(1_399_986),
                animated_counter::COUNTER_STEPS,
            ));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_card_transform,
    bench_stack_positions,
    bench_counter_steps
);
criterion_main!(benches);
