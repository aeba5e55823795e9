//! # Algebra Benchmarks
//!
//! Measures the classical decision path: click classification, heralding
//! and Bell-state composition.
//!
//! Run: `cargo bench --bench algebra_bench`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use herald_bell::{compose, correction_for, label_from_bits, swapped_state};
use herald_core::{BellState, SwapMeasurement};
use herald_photonic::{classify, herald};

/// Benchmark classification + heralding of every raw code
fn bench_heralding(c: &mut Criterion) {
    let mut group = c.benchmark_group("heralding");

    group.bench_function("classify_all_codes", |b| {
        b.iter(|| {
            for code in 0..6u8 {
                black_box(classify(black_box(code)).ok());
            }
        })
    });

    group.bench_function("classify_and_herald", |b| {
        b.iter(|| {
            let mut successes = 0;
            for code in 0..6u8 {
                if let Ok(outcome) = classify(black_box(code)) {
                    if herald(outcome).is_success() {
                        successes += 1;
                    }
                }
            }
            black_box(successes)
        })
    });

    group.finish();
}

/// Benchmark Klein-group composition and correction lookup
fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("bell_algebra");

    group.bench_function("compose_table", |b| {
        b.iter(|| {
            for x in BellState::ALL {
                for y in BellState::ALL {
                    black_box(compose(black_box(x), black_box(y)));
                }
            }
        })
    });

    group.bench_function("label_from_bits", |b| {
        b.iter(|| black_box(label_from_bits(black_box(1), black_box(0))))
    });

    group.bench_function("swap_and_correct_64", |b| {
        b.iter(|| {
            for ab in BellState::ALL {
                for cd in BellState::ALL {
                    for bits in [(0, 0), (0, 1), (1, 0), (1, 1)] {
                        let bsm = SwapMeasurement::from(bits);
                        if let Ok(outer) = swapped_state(ab, bsm, cd) {
                            black_box(correction_for(outer));
                        }
                    }
                }
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_heralding, bench_algebra);
criterion_main!(benches);
