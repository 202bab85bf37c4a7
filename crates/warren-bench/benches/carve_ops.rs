//! Criterion micro-benchmarks for carving algorithms.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warren_bench::{mixed_profiles, reference_profile, stress_profile};
use warren_carve::Algorithm;

/// Benchmark: carve the 10K-cell torus with every algorithm.
fn bench_reference_all_algorithms(c: &mut Criterion) {
    let template = reference_profile().unwrap();

    for algorithm in Algorithm::ALL {
        c.bench_function(&format!("carve_torus_10k_{algorithm}"), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| {
                let maze = algorithm.generate(&template, &mut rng).unwrap();
                black_box(&maze);
            });
        });
    }
}

/// Benchmark: carve the ~100K-cell grid with DFS and sidewinder.
fn bench_stress(c: &mut Criterion) {
    let template = stress_profile().unwrap();
    let mut group = c.benchmark_group("stress_100k");
    group.sample_size(10);

    for algorithm in [
        Algorithm::Dfs,
        Algorithm::Sidewinder { probability: 0.5 },
    ] {
        group.bench_function(algorithm.name(), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| {
                let maze = algorithm.generate(&template, &mut rng).unwrap();
                black_box(&maze);
            });
        });
    }
    group.finish();
}

/// Benchmark: DFS across one template of each tessellation.
fn bench_mixed_tessellations(c: &mut Criterion) {
    for (label, topology) in mixed_profiles() {
        let template = topology.build().unwrap();
        c.bench_function(&format!("carve_dfs_{label}"), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            b.iter(|| {
                let maze = Algorithm::Dfs.generate(&template, &mut rng).unwrap();
                black_box(&maze);
            });
        });
    }
}

criterion_group!(
    benches,
    bench_reference_all_algorithms,
    bench_stress,
    bench_mixed_tessellations
);
criterion_main!(benches);
