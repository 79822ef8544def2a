//! Criterion benchmarks for pricer_models analytical formulas.
//!
//! Measures scalar pricing and Greeks, and sweep throughput across grid sizes
//! to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::{OptionParameters, OptionType};
use pricer_models::analytical::{BlackScholes, Greeks, SweepParameter, SweepSpec};

fn atm() -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 0.2, 1.0, 0.05).unwrap()
}

/// Benchmark single call/put prices and the full Greeks set.
fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes_scalar");
    let bs = BlackScholes::new(atm());

    group.bench_function("price_call", |b| b.iter(|| black_box(&bs).price_call()));
    group.bench_function("price_put", |b| b.iter(|| black_box(&bs).price_put()));
    group.bench_function("greeks_call", |b| {
        b.iter(|| Greeks::compute(black_box(&atm()), OptionType::Call))
    });

    group.finish();
}

/// Benchmark spot sweeps of increasing length.
fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("spot_sweep");
    let base = atm();

    for points in [100, 1_000, 10_000] {
        let step = 100.0 / points as f64;
        let spec = SweepSpec::new(SweepParameter::Spot, 50.0, 150.0, step);
        group.bench_with_input(BenchmarkId::new("run", points), &spec, |b, spec| {
            b.iter(|| spec.run(black_box(&base)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scalar, bench_sweep);
criterion_main!(benches);
