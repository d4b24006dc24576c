//! Benchmark suite for the task file codec and store.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Save baseline for comparison
//! cargo bench -- --save-baseline main
//!
//! # Compare against baseline
//! cargo bench -- --baseline main
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tasklist::codec::{self, RecordLayout};
use tasklist::{Task, TaskStore};
use tempfile::TempDir;

fn make_tasks(count: usize) -> Vec<Task> {
    (0..count)
        .map(|i| Task::with_status(format!("Task number {i}"), i % 3 == 0))
        .collect()
}

// ============================================================================
// Codec Benchmarks
// ============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [10, 100, 1000] {
        let mut text = codec::encode(&make_tasks(size), RecordLayout::Spaced);
        // sprinkle in a malformed line so the diagnostics path is exercised
        text.push_str("garbage-no-colon\n");

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(codec::decode(black_box(text))));
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [10, 100, 1000] {
        let tasks = make_tasks(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tasks, |b, tasks| {
            b.iter(|| black_box(codec::encode(black_box(tasks), RecordLayout::Compact)));
        });
    }

    group.finish();
}

// ============================================================================
// Store Benchmarks
// ============================================================================

fn bench_store_roundtrip(c: &mut Criterion) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let store = TaskStore::new(temp_dir.path().join("Task List"));
    let tasks = make_tasks(100);

    c.bench_function("store_save_load_100", |b| {
        b.iter(|| {
            store.save(black_box(&tasks)).expect("save");
            black_box(store.load().expect("load"))
        });
    });
}

criterion_group!(benches, bench_decode, bench_encode, bench_store_roundtrip);
criterion_main!(benches);
