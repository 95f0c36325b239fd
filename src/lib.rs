//! Capability-gated generic aggregates
//!
//! Umbrella crate re-exporting the workspace:
//!
//! - [`numeric_core`]: the capability traits (`Iterable`, `Addable`,
//!   `Divisible`, `Comparable`, `SquaredDeviation`), the error type and the
//!   aggregation configuration
//! - [`numeric_algorithms`]: container aggregates, variadic aggregates and
//!   the configured [`Aggregator`](numeric_algorithms::Aggregator)
//!
//! # Example
//!
//! ```rust
//! use generic_numeric::prelude::*;
//!
//! let samples = [3, 1, 4, 1, 5, 9, 2, 6];
//! assert_eq!(max(&samples), 9);
//! assert_eq!(sum_variadic!(1, 2, 3, 4), 10);
//!
//! let sample = Aggregator::new(AggregationConfig::sample());
//! assert_eq!(sample.variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 2.5);
//! ```

pub use numeric_algorithms;
pub use numeric_core;

pub use numeric_algorithms::{
    max, max_variadic, mean, mean_variadic, min, min_variadic, sum, sum_variadic,
    transform_reduce, try_max, try_min, variance, variance_variadic, variance_with, Aggregator,
    Summary,
};
pub use numeric_core::{
    Addable, AggregationConfig, Comparable, Divisible, Error, Iterable, NumericCategory, Result,
    SquaredDeviation, VarianceDivisor,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use numeric_algorithms::prelude::*;
}
