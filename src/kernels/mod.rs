//! Random fill kernels for CPU
//!
//! - `transform`: packing of mixer words into output elements
//! - `stream`: the block loop driving an engine into an output slice
//!
//! Kernels operate on caller-owned slices and allocate nothing.

pub mod stream;
pub mod transform;

pub use stream::{normal_fill, normal_kernel, uniform_fill, uniform_kernel};
pub use transform::{NormalElement, RandomElement, block_capacity};

use num_traits::{Float, FloatConst};

/// Bytes consumed by one normal-distribution step (four 32-bit words)
pub const QUAD_BYTES: usize = 4 * std::mem::size_of::<u32>();

/// Box-Muller transform: convert two uniform values to two standard normal values
///
/// Computed in `T`'s own precision. `r1` is not clamped: `r1 == 0` yields an
/// infinite radius and therefore infinite or NaN outputs.
#[inline(always)]
pub fn box_muller<T: Float + FloatConst>(r1: T, r2: T) -> (T, T) {
    let two = T::one() + T::one();
    let radius = (-two * r1.ln()).sqrt();
    let theta = two * T::PI() * r2;

    (radius * theta.sin(), radius * theta.cos())
}

/// Turn the four words of one normal step into `temp.len()` normal values
///
/// `temp` holds the step capacity for `T` (2 for `f64`, 4 for `f32`); each
/// consecutive pair of uniforms becomes one Box-Muller pair.
#[inline(always)]
pub(crate) fn normalize<T: NormalElement>(quad: &[u32; 4], temp: &mut [T]) {
    for p in (0..temp.len()).step_by(2) {
        let (z0, z1) = box_muller(T::from_block(quad, p), T::from_block(quad, p + 1));
        temp[p] = z0;
        temp[p + 1] = z1;
    }
}
