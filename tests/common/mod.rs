//! Common test utilities
#![allow(dead_code)]

use ctrand::prelude::*;

/// Both engines, for tests that must hold for each
pub const ENGINES: [RandomEngineType; 2] = [RandomEngineType::Philox, RandomEngineType::Threefry];

/// Sample mean and (population) variance, computed in f64
pub fn mean_variance<T: Element>(data: &[T]) -> (f64, f64) {
    let n = data.len() as f64;
    let mean = data.iter().map(|&x| x.to_f64()).sum::<f64>() / n;
    let variance = data
        .iter()
        .map(|&x| (x.to_f64() - mean).powi(2))
        .sum::<f64>()
        / n;
    (mean, variance)
}

/// Uniform fill into a fresh vector
pub fn uniform_vec<T: RandomElement + Default>(
    n: usize,
    engine: RandomEngineType,
    seed: u64,
    counter: u64,
) -> Vec<T> {
    let mut out = vec![T::default(); n];
    fill_uniform(&mut out, engine, seed, counter);
    out
}

/// Normal fill into a fresh vector
pub fn normal_vec<T: NormalElement + Default>(
    n: usize,
    engine: RandomEngineType,
    seed: u64,
    counter: u64,
) -> Vec<T> {
    let mut out = vec![T::default(); n];
    fill_normal(&mut out, engine, seed, counter);
    out
}

/// Block capacity of `T` for `engine` on the uniform path
pub fn uniform_capacity<T>(engine: RandomEngineType) -> usize {
    let block_bytes = match engine {
        RandomEngineType::Philox => 16,
        RandomEngineType::Threefry => 8,
    };
    block_bytes / std::mem::size_of::<T>()
}
