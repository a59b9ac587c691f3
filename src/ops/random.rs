//! Engine dispatch for random fills
//!
//! Every entry point resolves `(engine, distribution)` once, then runs a
//! single monomorphised block loop over the whole output.
//!
//! # Reproducibility
//!
//! Same `(engine, seed, counter)` → identical output, for any buffer length.
//! Philox and Threefry streams are unrelated to each other.
//!
//! # Example
//!
//! ```
//! use ctrand::ops::{fill_normal, fill_uniform};
//! use ctrand::engine::RandomEngineType;
//!
//! let mut u = vec![0.0f32; 1000];
//! fill_uniform(&mut u, RandomEngineType::Philox, 42, 0);
//! assert!(u.iter().all(|&x| (0.0..=1.0).contains(&x)));
//!
//! let mut z = vec![0.0f64; 1000];
//! fill_normal(&mut z, RandomEngineType::Threefry, 42, 0);
//! ```

use crate::dtype::DType;
use crate::engine::{PhiloxStream, RandomEngineType, ThreefryStream};
use crate::error::{Error, Result};
use crate::kernels::{NormalElement, RandomElement, normal_fill, uniform_fill};
use std::fmt;
use tracing::{debug, trace};

/// Distribution a fill draws from
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distribution {
    /// Uniform on [0, 1) for floats, full bit range for integers
    #[default]
    Uniform,
    /// Standard normal N(0, 1), floats only
    Normal,
}

impl Distribution {
    /// Short name for display
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fill `out` with uniformly distributed values.
///
/// Floats land in [0, 1); integers take the raw bits of the engine's blocks
/// (see [`crate::kernels::transform`]).
pub fn fill_uniform<T: RandomElement>(
    out: &mut [T],
    engine: RandomEngineType,
    seed: u64,
    counter: u64,
) {
    trace!(%engine, dtype = %T::DTYPE, elements = out.len(), seed, counter, "uniform fill");

    match engine {
        RandomEngineType::Philox => uniform_fill::<T, PhiloxStream>(out, seed, counter),
        RandomEngineType::Threefry => uniform_fill::<T, ThreefryStream>(out, seed, counter),
    }
}

/// Fill `out` with standard normal values (Box-Muller over uniform pairs).
pub fn fill_normal<T: NormalElement>(
    out: &mut [T],
    engine: RandomEngineType,
    seed: u64,
    counter: u64,
) {
    trace!(%engine, dtype = %T::DTYPE, elements = out.len(), seed, counter, "normal fill");

    match engine {
        RandomEngineType::Philox => normal_fill::<T, PhiloxStream>(out, seed, counter),
        RandomEngineType::Threefry => normal_fill::<T, ThreefryStream>(out, seed, counter),
    }
}

/// Fill a float buffer from the requested distribution.
pub fn generate<T: NormalElement>(
    out: &mut [T],
    distribution: Distribution,
    engine: RandomEngineType,
    seed: u64,
    counter: u64,
) {
    match distribution {
        Distribution::Uniform => fill_uniform(out, engine, seed, counter),
        Distribution::Normal => fill_normal(out, engine, seed, counter),
    }
}

/// Fill a raw byte buffer holding elements of `dtype`.
///
/// This is the runtime-typed entry point: the engine arrives as its raw
/// selector value and the element type as a [`DType`]. Nothing is written
/// unless every check passes.
///
/// # Errors
///
/// - [`Error::UnsupportedEngine`] if `engine` is not a known selector
/// - [`Error::UnsupportedDType`] if `distribution` is normal and `dtype` is
///   not a float type
/// - [`Error::InvalidArgument`] if `out` is not a whole number of elements
///   or is misaligned for `dtype`
pub fn generate_bytes(
    out: &mut [u8],
    dtype: DType,
    distribution: Distribution,
    engine: u32,
    seed: u64,
    counter: u64,
) -> Result<()> {
    let engine = RandomEngineType::try_from(engine).inspect_err(|e| {
        debug!(engine, error = %e, "rejected random fill");
    })?;

    let size = dtype.size_in_bytes();
    if out.len() % size != 0 {
        return Err(Error::invalid_argument(
            "out",
            format!(
                "length {} is not a multiple of the {} element size {}",
                out.len(),
                dtype,
                size
            ),
        ));
    }

    match distribution {
        Distribution::Uniform => crate::dispatch_dtype!(dtype, T => {
            fill_uniform(cast_output::<T>(out)?, engine, seed, counter);
            Ok(())
        }),
        Distribution::Normal => crate::dispatch_float_dtype!(dtype, T => {
            fill_normal(cast_output::<T>(out)?, engine, seed, counter);
            Ok(())
        }, "normal"),
    }
}

fn cast_output<T: RandomElement>(out: &mut [u8]) -> Result<&mut [T]> {
    bytemuck::try_cast_slice_mut(out).map_err(|e| {
        debug!(dtype = %T::DTYPE, error = ?e, "rejected output buffer");
        Error::invalid_argument("out", format!("cannot view buffer as {}: {:?}", T::DTYPE, e))
    })
}
