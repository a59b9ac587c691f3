//! # ctrand
//!
//! **Counter-based random fills for numeric buffers.**
//!
//! ctrand fills caller-owned buffers with uniform or standard normal values
//! from a 64-bit seed and a 64-bit stream counter, using one of two
//! counter-based engines:
//!
//! - **Philox4x32-10**: 4-word blocks, counter advanced per block
//! - **Threefry2x32-20**: 2-word blocks, key and counter advanced per block
//!
//! Output is a pure function of `(engine, seed, counter, length)` and is
//! bit-reproducible across platforms.
//!
//! ## Quick Start
//!
//! ```
//! use ctrand::prelude::*;
//!
//! let mut u = vec![0u32; 8];
//! fill_uniform(&mut u, RandomEngineType::Philox, 0, 0);
//! assert_eq!(u[0], 0x6627e8d5);
//!
//! let mut z = vec![0.0f64; 1024];
//! fill_normal(&mut z, RandomEngineType::Threefry, 42, 0);
//!
//! let mut raw = vec![0u8; 64];
//! generate_bytes(&mut raw, DType::Bool, Distribution::Uniform, 200, 42, 0)?;
//! # Ok::<(), ctrand::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded fills for large buffers
//! - `serde`: Serialize/Deserialize for `DType`, `RandomEngineType`,
//!   `Distribution` and `Generator`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod engine;
pub mod error;
mod generator;
pub mod kernels;
pub mod ops;

pub use generator::Generator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::Generator;
    pub use crate::dtype::{DType, Element};
    pub use crate::engine::RandomEngineType;
    pub use crate::error::{Error, Result};
    pub use crate::kernels::{NormalElement, RandomElement};
    pub use crate::ops::{Distribution, fill_normal, fill_uniform, generate, generate_bytes};
}
