//! Philox4x32-10 block mixer
//!
//! 10-round Feistel cipher from Salmon et al. "Parallel Random Numbers: As Easy as 1, 2, 3" (2011)

use super::{BlockMixer, BlockStream, split_u64};

const PHILOX_M4X32_0: u32 = 0xD2511F53;
const PHILOX_M4X32_1: u32 = 0xCD9E8D57;
const PHILOX_W32_0: u32 = 0x9E3779B9;
const PHILOX_W32_1: u32 = 0xBB67AE85;
const PHILOX_ROUNDS: usize = 10;

/// Philox4x32 round function
#[inline(always)]
fn philox_round(ctr: [u32; 4], key: [u32; 2]) -> [u32; 4] {
    let prod0 = (ctr[0] as u64).wrapping_mul(PHILOX_M4X32_0 as u64);
    let prod1 = (ctr[2] as u64).wrapping_mul(PHILOX_M4X32_1 as u64);

    [
        ((prod1 >> 32) as u32) ^ ctr[1] ^ key[0],
        prod1 as u32,
        ((prod0 >> 32) as u32) ^ ctr[3] ^ key[1],
        prod0 as u32,
    ]
}

/// Philox4x32-10 mixer: 2-word key, 4-word counter, 4-word block
#[derive(Copy, Clone, Debug, Default)]
pub struct Philox4x32;

impl BlockMixer for Philox4x32 {
    type Key = [u32; 2];
    type Counter = [u32; 4];
    type Block = [u32; 4];

    #[inline(always)]
    fn mix(key: &[u32; 2], ctr: &[u32; 4]) -> [u32; 4] {
        let mut c = *ctr;
        let mut k = *key;

        c = philox_round(c, k);
        for _ in 1..PHILOX_ROUNDS {
            k[0] = k[0].wrapping_add(PHILOX_W32_0);
            k[1] = k[1].wrapping_add(PHILOX_W32_1);
            c = philox_round(c, k);
        }

        c
    }
}

/// Philox stream state
///
/// Layout derived from `(seed, counter)`:
/// - key: `{lo(counter), hi(seed)}`
/// - ctr: `{lo(counter), 0, 0, lo(seed)}`
///
/// The key never changes. After each block only `ctr[0]` is incremented,
/// wrapping at 32 bits without carrying into `ctr[1]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PhiloxStream {
    key: [u32; 2],
    ctr: [u32; 4],
}

impl PhiloxStream {
    /// Current key words
    pub fn key(&self) -> [u32; 2] {
        self.key
    }

    /// Current counter words
    pub fn counter(&self) -> [u32; 4] {
        self.ctr
    }
}

impl BlockStream for PhiloxStream {
    const BLOCK_WORDS: usize = 4;
    const BLOCKS_PER_QUAD: u64 = 1;

    type Block = [u32; 4];

    fn from_seed(seed: u64, counter: u64) -> Self {
        let (hi, lo) = split_u64(seed);
        let (_, ctr_lo) = split_u64(counter);
        Self {
            key: [ctr_lo, hi],
            ctr: [ctr_lo, 0, 0, lo],
        }
    }

    #[inline(always)]
    fn next_block(&mut self) -> [u32; 4] {
        let block = Philox4x32::mix(&self.key, &self.ctr);
        self.skip(1);
        block
    }

    #[inline(always)]
    fn next_quad(&mut self) -> [u32; 4] {
        self.next_block()
    }

    #[inline]
    fn skip(&mut self, blocks: u64) {
        // truncation keeps the skip exact modulo 2^32
        self.ctr[0] = self.ctr[0].wrapping_add(blocks as u32);
    }
}
