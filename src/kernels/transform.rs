//! Bit packing from mixer blocks to output elements
//!
//! A block is a slice of 32-bit words. Element `index` of type `T` is taken
//! from the block with a fixed, type-specific addressing rule so that a given
//! `(seed, counter)` yields the same bits on every platform:
//!
//! | Type | Source bits |
//! |------|-------------|
//! | `i8` | bit 0 of byte `index` (0 or 1) |
//! | `u8` | byte `index` |
//! | `u16`, `i16` | half-word `index` |
//! | `u32`, `i32` | word `index` |
//! | `u64`, `i64` | word `2*index` (high) and `2*index+1` (low) |
//! | `f32` | word `index` / 2^32 |
//! | `f64` | 64-bit value `index` / 2^64 |
//!
//! Bytes are addressed as word `index >> 2` shifted right by `8 * (index & 3)`,
//! half-words as word `index >> 1` shifted right by `16 * (index & 1)`.

use crate::dtype::Element;
use num_traits::{Float, FloatConst};

/// 2^32 in single precision
const U32_RANGE_F32: f32 = 4294967296.0;

/// 2^64 in double precision
const U64_RANGE_F64: f64 = 4294967296.0 * 4294967296.0;

/// Elements that can be unpacked from a block of random words
pub trait RandomElement: Element {
    /// Element `index` of `words`, per the packing rule of `Self`
    ///
    /// `index` must be below the block capacity for `Self`.
    fn from_block(words: &[u32], index: usize) -> Self;
}

/// Floating point elements that support the normal distribution
pub trait NormalElement: RandomElement + Float + FloatConst {}

impl NormalElement for f32 {}
impl NormalElement for f64 {}

/// Number of `T` values one block of `block_bytes` bytes yields
#[inline(always)]
pub const fn block_capacity<T>(block_bytes: usize) -> usize {
    block_bytes / std::mem::size_of::<T>()
}

#[inline(always)]
fn byte_at(words: &[u32], index: usize) -> u8 {
    (words[index >> 2] >> (8 * (index & 3))) as u8
}

#[inline(always)]
fn half_at(words: &[u32], index: usize) -> u16 {
    (words[index >> 1] >> (16 * (index & 1))) as u16
}

#[inline(always)]
fn wide_at(words: &[u32], index: usize) -> u64 {
    ((words[index << 1] as u64) << 32) | words[(index << 1) + 1] as u64
}

impl RandomElement for i8 {
    #[inline(always)]
    fn from_block(words: &[u32], index: usize) -> Self {
        (byte_at(words, index) & 0x1) as i8
    }
}

impl RandomElement for u8 {
    #[inline(always)]
    fn from_block(words: &[u32], index: usize) -> Self {
        byte_at(words, index)
    }
}

impl RandomElement for u16 {
    #[inline(always)]
    fn from_block(words: &[u32], index: usize) -> Self {
        half_at(words, index)
    }
}

impl RandomElement for i16 {
    #[inline(always)]
    fn from_block(words: &[u32], index: usize) -> Self {
        half_at(words, index) as i16
    }
}

impl RandomElement for u32 {
    #[inline(always)]
    fn from_block(words: &[u32], index: usize) -> Self {
        words[index]
    }
}

impl RandomElement for i32 {
    #[inline(always)]
    fn from_block(words: &[u32], index: usize) -> Self {
        words[index] as i32
    }
}

impl RandomElement for u64 {
    #[inline(always)]
    fn from_block(words: &[u32], index: usize) -> Self {
        wide_at(words, index)
    }
}

impl RandomElement for i64 {
    #[inline(always)]
    fn from_block(words: &[u32], index: usize) -> Self {
        wide_at(words, index) as i64
    }
}

impl RandomElement for f32 {
    #[inline(always)]
    fn from_block(words: &[u32], index: usize) -> Self {
        words[index] as f32 / U32_RANGE_F32
    }
}

impl RandomElement for f64 {
    #[inline(always)]
    fn from_block(words: &[u32], index: usize) -> Self {
        wide_at(words, index) as f64 / U64_RANGE_F64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: [u32; 4] = [0x8070_6051, 0xfffe_0001, 0x0000_0000, 0xffff_ffff];

    #[test]
    fn test_capacity() {
        assert_eq!(block_capacity::<i8>(16), 16);
        assert_eq!(block_capacity::<u16>(16), 8);
        assert_eq!(block_capacity::<f32>(16), 4);
        assert_eq!(block_capacity::<f64>(16), 2);
        assert_eq!(block_capacity::<u64>(8), 1);
        assert_eq!(block_capacity::<u8>(8), 8);
    }

    #[test]
    fn test_bool_like_takes_bit_zero_of_each_byte() {
        let got: Vec<i8> = (0..16).map(|i| i8::from_block(&BLOCK, i)).collect();
        // bytes of word 0, low to high: 0x51, 0x60, 0x70, 0x80
        assert_eq!(&got[..4], &[1, 0, 0, 0]);
        // bytes of word 1: 0x01, 0x00, 0xfe, 0xff
        assert_eq!(&got[4..8], &[1, 0, 0, 1]);
        assert_eq!(&got[8..12], &[0, 0, 0, 0]);
        assert_eq!(&got[12..], &[1, 1, 1, 1]);
    }

    #[test]
    fn test_u8_takes_bytes_low_to_high() {
        let got: Vec<u8> = (0..8).map(|i| u8::from_block(&BLOCK, i)).collect();
        assert_eq!(got, vec![0x51, 0x60, 0x70, 0x80, 0x01, 0x00, 0xfe, 0xff]);
    }

    #[test]
    fn test_half_words() {
        let got: Vec<u16> = (0..4).map(|i| u16::from_block(&BLOCK, i)).collect();
        assert_eq!(got, vec![0x6051, 0x8070, 0x0001, 0xfffe]);
        assert_eq!(i16::from_block(&BLOCK, 1), 0x8070u16 as i16);
        assert_eq!(i16::from_block(&BLOCK, 3), -2);
    }

    #[test]
    fn test_words() {
        assert_eq!(u32::from_block(&BLOCK, 1), 0xfffe_0001);
        assert_eq!(i32::from_block(&BLOCK, 3), -1);
        assert_eq!(i32::from_block(&BLOCK, 2), 0);
    }

    #[test]
    fn test_wide_words_high_first() {
        assert_eq!(u64::from_block(&BLOCK, 0), 0x8070_6051_fffe_0001);
        assert_eq!(u64::from_block(&BLOCK, 1), 0x0000_0000_ffff_ffff);
        assert_eq!(i64::from_block(&BLOCK, 0), 0x8070_6051_fffe_0001u64 as i64);
        assert!(i64::from_block(&BLOCK, 0) < 0);
    }

    #[test]
    fn test_floats() {
        assert_eq!(f32::from_block(&[0, 0x8000_0000], 0), 0.0);
        assert_eq!(f32::from_block(&[0, 0x8000_0000], 1), 0.5);
        assert_eq!(f64::from_block(&[0x4000_0000, 0], 0), 0.25);
        assert_eq!(f64::from_block(&BLOCK, 1), u32::MAX as f64 / U64_RANGE_F64);
    }
}
