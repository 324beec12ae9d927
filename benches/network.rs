//! Performance benchmarks for eigenear

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use eigenear::{Network, NetworkConfig, SourceConfig, SyntheticSource};

fn benchmark_network_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_step");

    for n_units in [10, 32, 64].iter() {
        let config = NetworkConfig {
            n_units: *n_units,
            synapse_count: 40,
            learning_rate: 1e-2,
            forget_rate: 1e-5,
        };
        let mut network = Network::new_with_seed(config, 42).unwrap();
        let frame = vec![0.5f32; 512];

        // Warm up
        for _ in 0..10 {
            network.step(&frame).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("units", n_units), n_units, |b, _| {
            b.iter(|| {
                network.step(black_box(&frame)).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_wide_window(c: &mut Criterion) {
    let config = NetworkConfig {
        n_units: 10,
        synapse_count: 256,
        learning_rate: 1e-2,
        forget_rate: 1e-5,
    };
    let mut network = Network::new_with_seed(config, 42).unwrap();
    let frame = vec![0.5f32; 1024];

    c.bench_function("network_step_wide_window", |b| {
        b.iter(|| {
            network.step(black_box(&frame)).unwrap();
        });
    });
}

fn benchmark_synthetic_source(c: &mut Criterion) {
    let mut source = SyntheticSource::new(SourceConfig::default(), 42);

    c.bench_function("synthetic_source_frame", |b| {
        b.iter(|| {
            black_box(source.next_frame());
        });
    });
}

criterion_group!(
    benches,
    benchmark_network_step,
    benchmark_wide_window,
    benchmark_synthetic_source
);
criterion_main!(benches);
