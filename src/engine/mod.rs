//! Block-mixing engines for counter-based generation
//!
//! A counter-based engine is split in two layers:
//!
//! - [`BlockMixer`]: a pure bijection `(key, counter) -> block` of 32-bit words.
//! - [`BlockStream`]: the key/counter state derived from a 64-bit seed and a
//!   64-bit stream counter, and the rule that advances it between blocks.
//!
//! # Algorithms
//!
//! - `philox`: Philox4x32-10 (Salmon et al. 2011), 4-word blocks
//! - `threefry`: Threefry2x32-20 (Salmon et al. 2011), 2-word blocks

mod philox;
mod threefry;

pub use philox::{Philox4x32, PhiloxStream};
pub use threefry::{Threefry2x32, ThreefryStream};

use crate::error::{Error, Result};
use std::fmt;

/// Engine selector for random fills
///
/// The discriminants are the stable raw selector values accepted by
/// [`RandomEngineType::try_from`] and [`crate::ops::generate_bytes`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum RandomEngineType {
    /// Philox4x32-10
    #[default]
    Philox = 100,
    /// Threefry2x32-20
    Threefry = 200,
}

impl RandomEngineType {
    /// Raw selector value
    #[inline]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Short name for display
    pub const fn name(self) -> &'static str {
        match self {
            Self::Philox => "philox",
            Self::Threefry => "threefry",
        }
    }
}

impl TryFrom<u32> for RandomEngineType {
    type Error = Error;

    fn try_from(engine: u32) -> Result<Self> {
        match engine {
            100 => Ok(Self::Philox),
            200 => Ok(Self::Threefry),
            other => Err(Error::unsupported_engine(other)),
        }
    }
}

impl fmt::Display for RandomEngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pure block-mixing primitive
///
/// Implementations must be deterministic and side-effect free: the block is
/// a function of `(key, ctr)` only.
pub trait BlockMixer {
    /// Key words
    type Key: Copy;
    /// Counter words
    type Counter: Copy;
    /// Output words
    type Block: Copy + AsRef<[u32]>;

    /// Produce one block of pseudorandom words
    fn mix(key: &Self::Key, ctr: &Self::Counter) -> Self::Block;
}

/// Key/counter state of one engine, advanced block by block
///
/// Every block the stream hands out is produced by exactly one mixer
/// invocation, and the state moves on afterwards. `skip(n)` lands on the
/// same state as `n` calls to [`BlockStream::next_block`], which is what lets
/// a fill be split across threads without changing its output.
pub trait BlockStream: Clone + Send + Sync {
    /// Words in one mixer block
    const BLOCK_WORDS: usize;

    /// Mixer blocks consumed by one [`BlockStream::next_quad`]
    const BLOCKS_PER_QUAD: u64;

    /// Bytes in one mixer block
    const BLOCK_BYTES: usize = Self::BLOCK_WORDS * std::mem::size_of::<u32>();

    /// One mixer block
    type Block: Copy + AsRef<[u32]>;

    /// Derive the initial state from a seed and a stream counter
    fn from_seed(seed: u64, counter: u64) -> Self;

    /// Produce the next block and advance the state
    fn next_block(&mut self) -> Self::Block;

    /// Produce the next four words, invoking the mixer as often as needed
    fn next_quad(&mut self) -> [u32; 4];

    /// Advance the state as if `blocks` blocks had been produced
    fn skip(&mut self, blocks: u64);
}

/// Split a 64-bit value into its (high, low) 32-bit halves
#[inline(always)]
pub(crate) const fn split_u64(v: u64) -> (u32, u32) {
    ((v >> 32) as u32, v as u32)
}
