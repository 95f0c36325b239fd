//! Generic aggregates gated on numeric capabilities
//!
//! This crate provides the algorithms that sit on top of the capability
//! traits in `numeric-core`:
//!
//! - **Container aggregates** ([`container`]): [`sum`], [`mean`], [`variance`],
//!   [`max`], [`min`], [`transform_reduce`] over any [`Iterable`] sequence,
//!   plus the checked [`try_max`], [`try_min`] and [`variance_with`].
//! - **Variadic aggregates** ([`variadic`]): [`sum_variadic!`],
//!   [`mean_variadic!`], [`variance_variadic!`], [`max_variadic!`],
//!   [`min_variadic!`] over a fixed argument list.
//! - **Configured aggregation** ([`aggregator`]): an [`Aggregator`] that
//!   applies an [`AggregationConfig`].
//!
//! | Aggregate | Needs | Empty input |
//! |-----------|-------|-------------|
//! | `sum` | Addable | `T::default()` |
//! | `mean` | Addable + Divisible | `T::default()` |
//! | `variance` | Addable + Divisible + SquaredDeviation | `T::default()` |
//! | `max` / `min` | Comparable | `T::default()` |
//! | `transform_reduce` | Addable | `T::default()` |
//! | `*_variadic!` | as above | does not compile |
//!
//! # Example
//!
//! ```rust
//! use numeric_algorithms::{max, mean, sum, transform_reduce, variance};
//! use numeric_algorithms::{max_variadic, mean_variadic, sum_variadic};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! assert_eq!(sum(&data), 15.0);
//! assert_eq!(mean(&data), 3.0);
//! assert_eq!(variance(&data), 2.0);
//! assert_eq!(max(&data), 5.0);
//! assert_eq!(transform_reduce(&data, |x| x * x), 55.0);
//!
//! assert_eq!(sum_variadic!(1, 2, 3, 4), 10);
//! assert_eq!(mean_variadic!(1.0, 2.0, 3.0), 2.0);
//! assert_eq!(max_variadic!(10, 5, 20, 1), 20);
//! ```
//!
//! # Rejected at compile time
//!
//! A string sequence is neither Addable nor Divisible:
//!
//! ```compile_fail
//! let words = vec![String::from("hello"), String::from("world")];
//! let _ = numeric_algorithms::mean(&words);
//! ```
//!
//! A type with `+` but no division by a count is not Divisible:
//!
//! ```compile_fail
//! #[derive(Clone, Default)]
//! struct Tally(i32);
//!
//! impl std::ops::Add for Tally {
//!     type Output = Tally;
//!     fn add(self, rhs: Tally) -> Tally {
//!         Tally(self.0 + rhs.0)
//!     }
//! }
//!
//! let tallies = vec![Tally(1), Tally(2)];
//! let _ = numeric_algorithms::mean(&tallies);
//! ```
//!
//! The same type cannot be averaged as a variadic list either:
//!
//! ```compile_fail
//! #[derive(Clone, Default)]
//! struct Tally(i32);
//!
//! impl std::ops::Add for Tally {
//!     type Output = Tally;
//!     fn add(self, rhs: Tally) -> Tally {
//!         Tally(self.0 + rhs.0)
//!     }
//! }
//!
//! let _ = numeric_algorithms::mean_variadic!(Tally(1), Tally(2));
//! ```
//!
//! Variance divides by the count too, so it rejects the same type:
//!
//! ```compile_fail
//! #[derive(Clone, Default)]
//! struct Tally(i32);
//!
//! impl std::ops::Add for Tally {
//!     type Output = Tally;
//!     fn add(self, rhs: Tally) -> Tally {
//!         Tally(self.0 + rhs.0)
//!     }
//! }
//!
//! let tallies = vec![Tally(1), Tally(2)];
//! let _ = numeric_algorithms::variance(&tallies);
//! ```
//!
//! ```compile_fail
//! #[derive(Clone, Default)]
//! struct Tally(i32);
//!
//! impl std::ops::Add for Tally {
//!     type Output = Tally;
//!     fn add(self, rhs: Tally) -> Tally {
//!         Tally(self.0 + rhs.0)
//!     }
//! }
//!
//! let _ = numeric_algorithms::variance_variadic!(Tally(1), Tally(2));
//! ```
//!
//! A type without an ordering is not Comparable:
//!
//! ```compile_fail
//! #[derive(Clone, Default)]
//! struct Opaque(i32);
//!
//! let items = vec![Opaque(1), Opaque(2)];
//! let _ = numeric_algorithms::max(&items);
//! ```
//!
//! ```compile_fail
//! struct Opaque(i32);
//!
//! let _ = numeric_algorithms::max_variadic!(Opaque(1), Opaque(2));
//! ```
//!
//! An empty argument list has no variadic sum:
//!
//! ```compile_fail
//! let _: i32 = numeric_algorithms::sum_variadic!();
//! ```
//!
//! ```compile_fail
//! let _: i32 = numeric_algorithms::variadic::sum_variadic::<i32, 0>([]);
//! ```

pub mod aggregator;
pub mod container;
pub mod variadic;

pub use aggregator::{Aggregator, Summary};
pub use container::{
    max, mean, min, sum, transform_reduce, try_max, try_min, variance, variance_with,
};
pub use variadic::{max_variadic, mean_variadic, min_variadic, sum_variadic, variance_variadic};

pub use numeric_core::{
    Addable, AggregationConfig, Comparable, Divisible, Error, Iterable, Result, SquaredDeviation,
    VarianceDivisor,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        max, mean, min, sum, transform_reduce, try_max, try_min, variance, variance_with,
        Aggregator, Summary,
    };
    pub use crate::{max_variadic, mean_variadic, min_variadic, sum_variadic, variance_variadic};

    pub use numeric_core::prelude::*;
}
