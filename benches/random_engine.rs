//! Criterion benchmarks for counter-based random fills.
//!
//! Benchmarks cover:
//! - Raw mixer throughput (one block per call)
//! - Uniform fills per engine and dtype
//! - Normal fills per engine
//! - Serial vs parallel fills around the parallel threshold

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use ctrand::engine::{BlockMixer, Philox4x32, Threefry2x32};
use ctrand::prelude::*;

const ENGINES: [RandomEngineType; 2] = [RandomEngineType::Philox, RandomEngineType::Threefry];

// ---------------------------------------------------------------------------
// Group 1: Mixer blocks
// ---------------------------------------------------------------------------

fn bench_mixers(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixer_block");

    group.bench_function("philox4x32_10", |b| {
        let key = [0xa4093822, 0x299f31d0];
        let mut ctr = [0u32; 4];
        b.iter(|| {
            ctr[0] = ctr[0].wrapping_add(1);
            black_box(Philox4x32::mix(&key, black_box(&ctr)))
        });
    });

    group.bench_function("threefry2x32_20", |b| {
        let key = [0x13198a2e, 0x03707344];
        let mut ctr = [0u32; 2];
        b.iter(|| {
            ctr[0] = ctr[0].wrapping_add(1);
            black_box(Threefry2x32::mix(&key, black_box(&ctr)))
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Group 2: Uniform fills
// ---------------------------------------------------------------------------

fn bench_uniform<T: RandomElement + Default>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("uniform_{name}"));

    for n in [1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(n as u64));
        for engine in ENGINES {
            group.bench_with_input(BenchmarkId::new(engine.name(), n), &n, |b, &n| {
                let mut out = vec![T::default(); n];
                let mut counter = 0u64;
                b.iter(|| {
                    fill_uniform(&mut out, engine, 42, counter);
                    counter = counter.wrapping_add(n as u64);
                    black_box(&out);
                });
            });
        }
    }

    group.finish();
}

fn bench_uniform_dtypes(c: &mut Criterion) {
    bench_uniform::<f32>(c, "f32");
    bench_uniform::<f64>(c, "f64");
    bench_uniform::<u32>(c, "u32");
    bench_uniform::<u8>(c, "u8");
}

// ---------------------------------------------------------------------------
// Group 3: Normal fills
// ---------------------------------------------------------------------------

fn bench_normal(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_f64");

    for n in [1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(n as u64));
        for engine in ENGINES {
            group.bench_with_input(BenchmarkId::new(engine.name(), n), &n, |b, &n| {
                let mut rng = Generator::new(engine, 42);
                let mut out = vec![0.0f64; n];
                b.iter(|| {
                    rng.normal(&mut out);
                    black_box(&out);
                });
            });
        }
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Group 4: Around the parallel threshold
// ---------------------------------------------------------------------------

fn bench_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_threshold_f32");

    // 1 << 16 elements is where fills switch to rayon
    for n in [(1usize << 16) - 4, 1 << 16, 1 << 17] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut out = vec![0.0f32; n];
            b.iter(|| {
                fill_uniform(&mut out, RandomEngineType::Philox, 7, 0);
                black_box(&out);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mixers,
    bench_uniform_dtypes,
    bench_normal,
    bench_threshold
);
criterion_main!(benches);
