//! Criterion benchmarks for full runs through the visualizer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sortvis_bench::{NoWait, NullSurface};
use sortvis_core::AlgorithmId;
use sortvis_engine::{Visualizer, VisualizerConfig};

fn bench_single_run(c: &mut Criterion) {
    let mut vis =
        Visualizer::new(VisualizerConfig::default(), NullSurface::default(), NoWait).unwrap();
    c.bench_function("single_run_bubble_20", |b| {
        b.iter(|| {
            vis.reset();
            let report = vis.run(AlgorithmId::Bubble).unwrap();
            black_box(&report);
        });
    });
}

fn bench_comparison_run(c: &mut Criterion) {
    let config = VisualizerConfig {
        compare_mode: true,
        ..Default::default()
    };
    let mut vis = Visualizer::new(config, NullSurface::default(), NoWait).unwrap();
    c.bench_function("comparison_run_bubble_vs_insertion_20", |b| {
        b.iter(|| {
            vis.reset();
            let report = vis.run_comparison().unwrap();
            black_box(&report);
        });
    });
}

criterion_group!(benches, bench_single_run, bench_comparison_run);
criterion_main!(benches);
