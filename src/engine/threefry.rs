//! Threefry2x32-20 block mixer
//!
//! 20-round Threefish-based cipher from Salmon et al. "Parallel Random Numbers: As Easy as 1, 2, 3" (2011)

use super::{BlockMixer, BlockStream, split_u64};

const THREEFRY_ROTATION: [u32; 8] = [13, 15, 26, 6, 17, 29, 16, 24];
const THREEFRY_PARITY32: u32 = 0x1BD11BDA;
const THREEFRY_ROUNDS: usize = 20;

/// Threefry2x32-20 mixer: 2-word key, 2-word counter, 2-word block
#[derive(Copy, Clone, Debug, Default)]
pub struct Threefry2x32;

impl BlockMixer for Threefry2x32 {
    type Key = [u32; 2];
    type Counter = [u32; 2];
    type Block = [u32; 2];

    #[inline(always)]
    fn mix(key: &[u32; 2], ctr: &[u32; 2]) -> [u32; 2] {
        // Extend key with parity
        let ks = [key[0], key[1], key[0] ^ key[1] ^ THREEFRY_PARITY32];

        let mut x = [ctr[0].wrapping_add(ks[0]), ctr[1].wrapping_add(ks[1])];

        for r in 0..THREEFRY_ROUNDS {
            // MIX: add + rotate
            x[0] = x[0].wrapping_add(x[1]);
            x[1] = x[1].rotate_left(THREEFRY_ROTATION[r % 8]) ^ x[0];

            // Inject round key every 4 rounds
            if (r + 1).is_multiple_of(4) {
                let s = (r + 1) / 4;
                x[0] = x[0].wrapping_add(ks[s % 3]);
                x[1] = x[1].wrapping_add(ks[(s + 1) % 3]).wrapping_add(s as u32);
            }
        }

        x
    }
}

/// Threefry stream state
///
/// Layout derived from `(seed, counter)`:
/// - key: `{lo(counter), hi(seed)}`
/// - ctr: `{lo(counter), lo(seed)}`
///
/// After each block both `key[0]` and `ctr[0]` are incremented (wrapping).
/// Advancing the key along with the counter is part of the stream
/// definition and must be kept for bit-compatibility.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ThreefryStream {
    key: [u32; 2],
    ctr: [u32; 2],
}

impl ThreefryStream {
    /// Current key words
    pub fn key(&self) -> [u32; 2] {
        self.key
    }

    /// Current counter words
    pub fn counter(&self) -> [u32; 2] {
        self.ctr
    }
}

impl BlockStream for ThreefryStream {
    const BLOCK_WORDS: usize = 2;
    const BLOCKS_PER_QUAD: u64 = 2;

    type Block = [u32; 2];

    fn from_seed(seed: u64, counter: u64) -> Self {
        let (hi, lo) = split_u64(seed);
        let (_, ctr_lo) = split_u64(counter);
        Self {
            key: [ctr_lo, hi],
            ctr: [ctr_lo, lo],
        }
    }

    #[inline(always)]
    fn next_block(&mut self) -> [u32; 2] {
        let block = Threefry2x32::mix(&self.key, &self.ctr);
        self.skip(1);
        block
    }

    #[inline(always)]
    fn next_quad(&mut self) -> [u32; 4] {
        let [a, b] = self.next_block();
        let [c, d] = self.next_block();
        [a, b, c, d]
    }

    #[inline]
    fn skip(&mut self, blocks: u64) {
        // Both words are 32-bit counters, so only the low half of `blocks` matters
        let step = blocks as u32;
        self.ctr[0] = self.ctr[0].wrapping_add(step);
        self.key[0] = self.key[0].wrapping_add(step);
    }
}
