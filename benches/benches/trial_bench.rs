//! # Trial Benchmarks
//!
//! Measures full swap trials and single link attempts on the ideal
//! state-vector backend.
//!
//! Run: `cargo bench --bench trial_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use herald_core::QuantumBackend;
use herald_orchestration::{
    DetectorConfig, LinkConfig, LinkGenerator, RetryPolicy, SwapConfig, SwapOrchestrator,
};
use herald_quantum::StateVectorBackend;

/// Benchmark one heralded link (generate → detect → herald → retry)
fn bench_link(c: &mut Criterion) {
    let mut group = c.benchmark_group("link");

    for alpha in [0.1, 0.2, 0.4] {
        group.bench_with_input(BenchmarkId::new("establish", alpha), &alpha, |b, &alpha| {
            let mut backend = StateVectorBackend::seeded(1);
            let mut link = LinkGenerator::new(
                "AB",
                alpha,
                &LinkConfig::default(),
                &DetectorConfig::default(),
                RetryPolicy::Unbounded,
            );
            b.iter(|| {
                if let Ok(entangled) = link.establish(&mut backend) {
                    let _ = backend.discard(entangled.left);
                    let _ = backend.discard(entangled.right);
                    black_box(entangled.attempts);
                }
            })
        });
    }

    group.finish();
}

/// Benchmark complete swap trials
fn bench_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_trial");

    group.bench_function("run_trial", |b| {
        let config = SwapConfig {
            seed: Some(1),
            ..SwapConfig::default()
        };
        let backend = StateVectorBackend::seeded(1);
        let Ok(mut orch) = SwapOrchestrator::new(backend, config) else {
            return;
        };
        b.iter(|| black_box(orch.run_trial().ok()))
    });

    group.finish();
}

criterion_group!(benches, bench_link, bench_trial);
criterion_main!(benches);
