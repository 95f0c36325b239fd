//! Core capability traits for generic numeric aggregates
//!
//! This crate provides the type-level foundation that the aggregate algorithms
//! in `numeric-algorithms` are gated on. Nothing here computes a statistic; it
//! only states which operations an element type (or a container of them) must
//! support.
//!
//! # Capabilities
//!
//! | Trait | Meaning | How it is provided |
//! |-------|---------|--------------------|
//! | [`Iterable`] | forward traversal by reference, length, emptiness | impls for std sequences |
//! | [`Addable`] | `T + T -> T`, `Default` is the additive identity | blanket impl |
//! | [`Divisible`] | `T / count -> T` for an unsigned count | primitives + user impls |
//! | [`Comparable`] | strict `>` yielding `bool` | blanket impl over `PartialOrd` |
//! | [`SquaredDeviation`] | `(x - c)^2 -> T` with a numeric category | primitives + user impls |
//!
//! An algorithm that names a capability the element type lacks is rejected
//! when the call site is compiled, with a diagnostic naming the missing
//! capability. There is no runtime capability check.
//!
//! # Example
//!
//! ```rust
//! use numeric_core::{Addable, Divisible, Iterable};
//!
//! fn total<C>(seq: &C) -> C::Element
//! where
//!     C: Iterable + ?Sized,
//!     C::Element: Addable,
//! {
//!     seq.elements().cloned().fold(C::Element::default(), |acc, x| acc + x)
//! }
//!
//! let data = vec![1.0, 2.0, 3.0];
//! assert_eq!(total(&data), 6.0);
//! assert_eq!(total(&data).div_count(data.len()), 2.0);
//! ```

pub mod capability;
pub mod config;
pub mod error;
pub mod numeric;
pub mod sequence;

// Re-export core types
pub use error::{Error, Result};

pub use capability::{Addable, Comparable, Divisible, SquaredDeviation};
pub use config::{AggregationConfig, VarianceDivisor};
pub use numeric::NumericCategory;
pub use sequence::Iterable;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Addable, AggregationConfig, Comparable, Divisible, Iterable, NumericCategory, Result,
        SquaredDeviation, VarianceDivisor,
    };

    pub use crate::error::Error;
}
