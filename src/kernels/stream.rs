//! Block loop driving a [`BlockStream`] into an output slice
//!
//! The output is walked in strides of one block capacity. Each stride costs
//! exactly one mixer block (uniform) or one four-word step (normal), and the
//! last stride writes only the elements that remain.
//!
//! Performance characteristics:
//! - Parallelization threshold: 65536 elements
//! - Chunks are whole multiples of the block capacity, and each chunk skips
//!   its stream ahead to its first block, so parallel output is identical to
//!   serial output

use super::transform::{NormalElement, RandomElement, block_capacity};
use super::{QUAD_BYTES, normalize};
use crate::engine::BlockStream;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Parallelization threshold: skip Rayon for small fills (overhead > benefit)
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Blocks (or normal steps) per parallel chunk
#[cfg(feature = "rayon")]
const CHUNK_BLOCKS: usize = 1024;

/// Fill `out` with uniform values drawn from `stream`
///
/// Leaves `stream` positioned after the last block consumed.
#[inline]
pub fn uniform_kernel<T: RandomElement, S: BlockStream>(out: &mut [T], stream: &mut S) {
    let reset = block_capacity::<T>(S::BLOCK_BYTES);

    for chunk in out.chunks_mut(reset) {
        let block = stream.next_block();
        let words = block.as_ref();
        for (j, o) in chunk.iter_mut().enumerate() {
            *o = T::from_block(words, j);
        }
    }
}

/// Fill `out` with standard normal values drawn from `stream`
///
/// Leaves `stream` positioned after the last block consumed.
#[inline]
pub fn normal_kernel<T: NormalElement, S: BlockStream>(out: &mut [T], stream: &mut S) {
    let reset = block_capacity::<T>(QUAD_BYTES);
    let mut temp = [T::zero(); 4];

    for chunk in out.chunks_mut(reset) {
        let quad = stream.next_quad();
        normalize(&quad, &mut temp[..reset]);
        chunk.copy_from_slice(&temp[..chunk.len()]);
    }
}

/// Uniform fill of `out` from a fresh stream at `(seed, counter)`
pub fn uniform_fill<T: RandomElement, S: BlockStream>(out: &mut [T], seed: u64, counter: u64) {
    let stream = S::from_seed(seed, counter);

    #[cfg(feature = "rayon")]
    if out.len() >= PARALLEL_THRESHOLD {
        let chunk_len = CHUNK_BLOCKS * block_capacity::<T>(S::BLOCK_BYTES);
        out.par_chunks_mut(chunk_len)
            .enumerate()
            .for_each(|(c, chunk)| {
                let mut local = stream.clone();
                local.skip((c * CHUNK_BLOCKS) as u64);
                uniform_kernel(chunk, &mut local);
            });
        return;
    }

    let mut stream = stream;
    uniform_kernel(out, &mut stream);
}

/// Normal fill of `out` from a fresh stream at `(seed, counter)`
pub fn normal_fill<T: NormalElement, S: BlockStream>(out: &mut [T], seed: u64, counter: u64) {
    let stream = S::from_seed(seed, counter);

    #[cfg(feature = "rayon")]
    if out.len() >= PARALLEL_THRESHOLD {
        let chunk_len = CHUNK_BLOCKS * block_capacity::<T>(QUAD_BYTES);
        out.par_chunks_mut(chunk_len)
            .enumerate()
            .for_each(|(c, chunk)| {
                let mut local = stream.clone();
                local.skip((c * CHUNK_BLOCKS) as u64 * S::BLOCKS_PER_QUAD);
                normal_kernel(chunk, &mut local);
            });
        return;
    }

    let mut stream = stream;
    normal_kernel(out, &mut stream);
}
