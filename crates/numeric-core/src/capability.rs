//! Element-type capabilities
//!
//! Each trait names one operation an aggregate needs from its element type.
//! Algorithms combine them as trait bounds, so an element type that lacks a
//! capability is rejected where the algorithm is instantiated.
//!
//! `Addable` and `Comparable` are blanket-implemented from the standard
//! operator traits: any type with the right operator qualifies without opting
//! in. `Divisible` and `SquaredDeviation` cannot be derived that way (the
//! primitive floats have no `Div<usize>`), so they are implemented for the
//! primitives in [`crate::numeric`] and by hand for user types.

use crate::numeric::NumericCategory;
use std::ops::Add;

/// Values that combine under `+` into a value of exactly the same type.
///
/// # Contract
///
/// `Self::default()` must be the additive identity: `x + Self::default() == x`
/// for every `x`. Aggregates use it as the accumulator seed and as the result
/// for empty input. The primitive numeric types satisfy this; user types must
/// make sure their `Default` is their zero.
///
/// `Clone` is required because aggregates read their input by reference and
/// `Add` consumes its operands.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not Addable: `{Self} + {Self}` must produce a `{Self}`",
    label = "this element type cannot be summed",
    note = "Addable needs `Add<Output = Self>`, `Clone`, and a `Default` that is the additive identity"
)]
pub trait Addable: Add<Output = Self> + Default + Clone {}

impl<T> Addable for T where T: Add<Output = T> + Default + Clone {}

/// Values that can be divided by an unsigned element count.
///
/// Integral implementations truncate toward zero. A count too large for the
/// integer type yields zero, which is the exact truncated quotient. Dividing
/// by a zero count is the caller's responsibility; the aggregates never do it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not Divisible: it has no division by an element count",
    label = "this element type cannot be averaged",
    note = "implement `numeric_core::Divisible` for `{Self}` to divide it by a `usize` count"
)]
pub trait Divisible: Sized {
    /// Divide `self` by `count`, producing the same type.
    fn div_count(self, count: usize) -> Self;
}

/// Values with a strict greater-than ordering.
///
/// Blanket-implemented for every `PartialOrd` type. Incomparable pairs are
/// never "greater", so a partial order keeps the earlier value wherever the
/// aggregates break ties.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not Comparable: it has no strict `>` ordering",
    label = "this element type cannot be ranked",
    note = "implement `PartialOrd` for `{Self}` to make it Comparable"
)]
pub trait Comparable {
    /// `true` iff `self` is strictly greater than `other`.
    fn greater_than(&self, other: &Self) -> bool;
}

impl<T: PartialOrd + ?Sized> Comparable for T {
    #[inline]
    fn greater_than(&self, other: &Self) -> bool {
        self > other
    }
}

/// Squared distance from a center, in the element type itself.
///
/// This is the squaring policy of `variance`. Integral types square by direct
/// multiplication, floating types through `powi(2)`, and user types however
/// their own subtraction and multiplication define it (componentwise for a
/// vector type). `CATEGORY` records which policy an implementation follows.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no squared deviation: variance cannot square its differences",
    label = "this element type has no variance",
    note = "implement `numeric_core::SquaredDeviation` for `{Self}`"
)]
pub trait SquaredDeviation: Sized {
    /// Squaring policy used by this implementation.
    const CATEGORY: NumericCategory = NumericCategory::Custom;

    /// `(self - center)^2`
    fn squared_deviation(&self, center: &Self) -> Self;
}
