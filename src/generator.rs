//! Stateful generator handle
//!
//! [`Generator`] remembers an engine, a seed and a stream counter between
//! fills. Each fill starts at the current counter and then moves it forward by
//! the number of elements written, so consecutive calls do not repeat each
//! other's output.

use crate::dtype::DType;
use crate::engine::RandomEngineType;
use crate::error::Result;
use crate::kernels::{NormalElement, RandomElement};
use crate::ops::{self, Distribution};

/// Engine, seed and counter for a sequence of random fills
///
/// ```
/// use ctrand::Generator;
/// use ctrand::engine::RandomEngineType;
///
/// let mut rng = Generator::new(RandomEngineType::Threefry, 7);
/// let mut a = [0.0f32; 16];
/// rng.uniform(&mut a);
/// assert_eq!(rng.counter(), 16);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generator {
    engine: RandomEngineType,
    seed: u64,
    counter: u64,
}

impl Generator {
    /// Create a generator at counter 0
    pub fn new(engine: RandomEngineType, seed: u64) -> Self {
        Self {
            engine,
            seed,
            counter: 0,
        }
    }

    /// Use a different engine, keeping seed and counter
    pub fn with_engine(mut self, engine: RandomEngineType) -> Self {
        self.engine = engine;
        self
    }

    /// Use a different seed, keeping engine and counter
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Start from a given stream counter
    pub fn with_counter(mut self, counter: u64) -> Self {
        self.counter = counter;
        self
    }

    /// Engine used for fills
    pub fn engine(&self) -> RandomEngineType {
        self.engine
    }

    /// Current seed
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Counter the next fill starts from
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Reseed and rewind the counter to 0
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.counter = 0;
    }

    /// Uniform fill; advances the counter by `out.len()`
    pub fn uniform<T: RandomElement>(&mut self, out: &mut [T]) {
        ops::fill_uniform(out, self.engine, self.seed, self.counter);
        self.advance(out.len());
    }

    /// Standard normal fill; advances the counter by `out.len()`
    pub fn normal<T: NormalElement>(&mut self, out: &mut [T]) {
        ops::fill_normal(out, self.engine, self.seed, self.counter);
        self.advance(out.len());
    }

    /// Fill a raw buffer of `dtype` elements; advances the counter by the
    /// element count on success and leaves it alone on error
    pub fn generate_bytes(
        &mut self,
        out: &mut [u8],
        dtype: DType,
        distribution: Distribution,
    ) -> Result<()> {
        ops::generate_bytes(
            out,
            dtype,
            distribution,
            self.engine.id(),
            self.seed,
            self.counter,
        )?;
        self.advance(out.len() / dtype.size_in_bytes());
        Ok(())
    }

    #[inline]
    fn advance(&mut self, elements: usize) {
        self.counter = self.counter.wrapping_add(elements as u64);
    }
}
