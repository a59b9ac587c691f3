//! Random fill operations
//!
//! ```text
//! caller
//!   └── fill_uniform / fill_normal / generate / generate_bytes
//!         └── engine × distribution, resolved once per call
//!               └── kernels::{uniform_fill, normal_fill}
//!                     └── BlockStream (Philox | Threefry) → transform → out
//! ```
//!
//! The typed entry points take `&mut [T]` and cannot fail: the element type
//! is checked by trait bounds and the engine by the `RandomEngineType` enum.
//! [`generate_bytes`] is the runtime-typed form and reports unknown engines,
//! unsupported dtypes and malformed buffers as errors.

#[macro_use]
mod dispatch;
mod random;

pub use random::{Distribution, fill_normal, fill_uniform, generate, generate_bytes};
