//! Benchmark for the zipper's comonad operations.
//!
//! Verifies that `duplicate`/`extend` scale linearly (each view is derived
//! from its predecessor in O(1)) by comparing against a naive rebuild that
//! reconstructs every view from the flattened sequence.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use focal::zipper::Zipper;
use std::hint::black_box;

fn build_zipper(size: usize) -> Zipper<i64> {
    let elements: Vec<i64> = (0..size as i64).collect();
    Zipper::from_vec(elements).expect("size is non-zero")
}

// =============================================================================
// Navigation Benchmark
// =============================================================================

fn benchmark_navigation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("navigation");

    for size in [100, 1000, 10000] {
        let zipper = build_zipper(size);

        group.bench_with_input(
            BenchmarkId::new("walk_right_to_end", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut cursor = zipper.clone();
                    while let Some(next) = cursor.try_right() {
                        cursor = next;
                    }
                    black_box(cursor)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// duplicate Benchmark
// =============================================================================

fn benchmark_duplicate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("duplicate");

    for size in [100, 1000, 10000] {
        let zipper = build_zipper(size);

        // Incremental duplicate (O(n))
        group.bench_with_input(
            BenchmarkId::new("incremental", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(zipper.duplicate()));
            },
        );

        // Naive rebuild of every view from the flattened sequence (O(n^2))
        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bencher, _| {
            bencher.iter(|| {
                let elements = zipper.to_vec();
                let views: Vec<Zipper<i64>> = (0..elements.len())
                    .map(|position| {
                        Zipper::new(
                            elements[..position].to_vec(),
                            elements[position],
                            elements[position + 1..].to_vec(),
                        )
                    })
                    .collect();
                black_box(views)
            });
        });
    }

    group.finish();
}

// =============================================================================
// extend Benchmark
// =============================================================================

fn benchmark_extend(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("extend");

    for size in [100, 1000, 10000] {
        let zipper = build_zipper(size);

        // Immediate-neighbor average through the comonadic interface
        group.bench_with_input(
            BenchmarkId::new("neighbor_average", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let smoothed = zipper.extend(|view| {
                        let left = view.peek_left().copied().unwrap_or(0);
                        let right = view.peek_right().copied().unwrap_or(0);
                        (left + *view.focus() + right) / 3
                    });
                    black_box(smoothed)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_navigation,
    benchmark_duplicate,
    benchmark_extend
);
criterion_main!(benches);
