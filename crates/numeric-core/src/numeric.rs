//! Capability implementations for the primitive numeric types
//!
//! The primitives split into three squaring policies:
//!
//! - **Signed integers**: `(x - c) * (x - c)`, no float round-trip
//! - **Unsigned integers**: `|x - c| * |x - c|`, so the difference cannot underflow
//! - **Floats**: `(x - c).powi(2)`
//!
//! Division by a count converts the count into the element type first. For
//! integers whose range cannot hold the count the quotient is zero.

use crate::capability::{Divisible, SquaredDeviation};
use num_traits::{Float, NumCast};

/// Squaring policy a [`SquaredDeviation`] implementation follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericCategory {
    /// Integral types, squared by direct multiplication
    Integral,
    /// IEEE floating-point types, squared through `powi`
    Floating,
    /// User-defined types with their own squaring
    Custom,
}

impl NumericCategory {
    /// Whether this category squares without leaving the integers
    pub fn is_integral(self) -> bool {
        matches!(self, NumericCategory::Integral)
    }
}

macro_rules! impl_signed_capabilities {
    ($($type:ty),* $(,)?) => {$(
        impl Divisible for $type {
            #[inline]
            fn div_count(self, count: usize) -> Self {
                match <$type as NumCast>::from(count) {
                    Some(n) => self / n,
                    None => 0,
                }
            }
        }

        impl SquaredDeviation for $type {
            const CATEGORY: NumericCategory = NumericCategory::Integral;

            #[inline]
            fn squared_deviation(&self, center: &Self) -> Self {
                let diff = *self - *center;
                diff * diff
            }
        }
    )*};
}

macro_rules! impl_unsigned_capabilities {
    ($($type:ty),* $(,)?) => {$(
        impl Divisible for $type {
            #[inline]
            fn div_count(self, count: usize) -> Self {
                match <$type as NumCast>::from(count) {
                    Some(n) => self / n,
                    None => 0,
                }
            }
        }

        impl SquaredDeviation for $type {
            const CATEGORY: NumericCategory = NumericCategory::Integral;

            #[inline]
            fn squared_deviation(&self, center: &Self) -> Self {
                let diff = self.abs_diff(*center);
                diff * diff
            }
        }
    )*};
}

macro_rules! impl_float_capabilities {
    ($($type:ty),* $(,)?) => {$(
        impl Divisible for $type {
            #[inline]
            fn div_count(self, count: usize) -> Self {
                self / count as $type
            }
        }

        impl SquaredDeviation for $type {
            const CATEGORY: NumericCategory = NumericCategory::Floating;

            #[inline]
            fn squared_deviation(&self, center: &Self) -> Self {
                Float::powi(*self - *center, 2)
            }
        }
    )*};
}

impl_signed_capabilities!(i8, i16, i32, i64, i128, isize);
impl_unsigned_capabilities!(u8, u16, u32, u64, u128, usize);
impl_float_capabilities!(f32, f64);

// =============================================================================
// Tests
// =============================================================================
