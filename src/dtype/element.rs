//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use std::fmt::Debug;

/// Trait for types that can be written by a random fill
///
/// This trait connects Rust's type system to the runtime dtype system.
/// It's implemented for all primitive numeric types in [`DType`].
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe reinterpretation of byte buffers (bytemuck)
/// - `PartialEq + Debug` - Comparison in reproducibility checks
pub trait Element: Copy + Send + Sync + Pod + Zeroable + PartialEq + Debug + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for statistics and diagnostics
    fn to_f64(self) -> f64;
}

macro_rules! impl_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_element! {
    f64 => F64,
    f32 => F32,
    i64 => I64,
    i32 => I32,
    i16 => I16,
    i8 => I8,
    u64 => U64,
    u32 => U32,
    u16 => U16,
    u8 => U8,
}

// Note: bool doesn't implement Pod, so DType::Bool buffers are u8 storage
// written through the i8 packing rule.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_dtype() {
        assert_eq!(f64::DTYPE, DType::F64);
        assert_eq!(f32::DTYPE, DType::F32);
        assert_eq!(i32::DTYPE, DType::I32);
        assert_eq!(u8::DTYPE, DType::U8);
        assert_eq!(i8::DTYPE, DType::I8);
    }

    #[test]
    fn test_element_size_matches_dtype() {
        fn check<T: Element>() {
            assert_eq!(std::mem::size_of::<T>(), T::DTYPE.size_in_bytes());
        }
        check::<f64>();
        check::<f32>();
        check::<i64>();
        check::<i16>();
        check::<u64>();
        check::<u8>();
    }
}
