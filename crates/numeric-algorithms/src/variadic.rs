//! Aggregates over a fixed, compile-time-sized argument list
//!
//! The argument list is a `[T; N]`. The macros at the crate root
//! (`sum_variadic!`, `mean_variadic!`, ...) build that array from a plain
//! argument list, so call sites read `sum_variadic!(1, 2, 3, 4)`.
//!
//! Accumulation runs left to right with the same tie-breaking as the
//! container aggregates, so both call styles agree on equivalent input.
//! An empty list is rejected at build time: the functions assert `N > 0`
//! during monomorphization, and the macros require at least one argument.

use crate::container;
use numeric_core::{Addable, Comparable, Divisible, SquaredDeviation};

/// Compile-time guard: instantiating `OK` with `N == 0` fails the build.
struct NonEmpty<const N: usize>;

impl<const N: usize> NonEmpty<N> {
    const OK: () = assert!(N > 0, "variadic aggregates need at least one argument");
}

/// First argument plus an iterator over the rest.
fn split_first<T, const N: usize>(args: [T; N]) -> (T, std::array::IntoIter<T, N>) {
    let () = NonEmpty::<N>::OK;
    let mut rest = args.into_iter();
    match rest.next() {
        Some(first) => (first, rest),
        None => unreachable!("argument count is checked at compile time"),
    }
}

/// Left-to-right sum of every argument.
///
/// Starts from the first argument, not from the additive identity.
pub fn sum_variadic<T, const N: usize>(args: [T; N]) -> T
where
    T: Addable,
{
    let (first, rest) = split_first(args);
    rest.fold(first, |acc, value| acc + value)
}

/// Sum of the arguments divided by their count.
pub fn mean_variadic<T, const N: usize>(args: [T; N]) -> T
where
    T: Addable + Divisible,
{
    sum_variadic(args).div_count(N)
}

/// Population variance of the arguments.
///
/// Variance needs two passes, so the arguments are kept as an ordered
/// sequence and handed to [`container::variance`].
pub fn variance_variadic<T, const N: usize>(args: [T; N]) -> T
where
    T: Addable + Divisible + SquaredDeviation,
{
    let () = NonEmpty::<N>::OK;
    container::variance(&args)
}

/// Largest argument; ties keep the earliest.
pub fn max_variadic<T, const N: usize>(args: [T; N]) -> T
where
    T: Comparable,
{
    let (first, rest) = split_first(args);
    rest.fold(first, |best, value| {
        if value.greater_than(&best) {
            value
        } else {
            best
        }
    })
}

/// Smallest argument; ties keep the earliest.
pub fn min_variadic<T, const N: usize>(args: [T; N]) -> T
where
    T: Comparable,
{
    let (first, rest) = split_first(args);
    rest.fold(first, |best, value| {
        if best.greater_than(&value) {
            value
        } else {
            best
        }
    })
}

/// `sum_variadic!(a, b, ...)`: sum of one or more same-typed arguments.
///
/// ```rust
/// use numeric_algorithms::sum_variadic;
///
/// assert_eq!(sum_variadic!(1, 2, 3, 4), 10);
/// ```
#[macro_export]
macro_rules! sum_variadic {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::variadic::sum_variadic([$first $(, $rest)*])
    };
}

/// `mean_variadic!(a, b, ...)`: mean of one or more same-typed arguments.
///
/// ```rust
/// use numeric_algorithms::mean_variadic;
///
/// assert_eq!(mean_variadic!(1.0, 2.0, 3.0), 2.0);
/// ```
#[macro_export]
macro_rules! mean_variadic {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::variadic::mean_variadic([$first $(, $rest)*])
    };
}

/// `variance_variadic!(first, rest...)`: population variance of the arguments.
///
/// ```rust
/// use numeric_algorithms::variance_variadic;
///
/// assert_eq!(variance_variadic!(1.0, 2.0, 3.0, 4.0, 5.0), 2.0);
/// ```
#[macro_export]
macro_rules! variance_variadic {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::variadic::variance_variadic([$first $(, $rest)*])
    };
}

/// `max_variadic!(first, rest...)`: largest argument, earliest on ties.
///
/// ```rust
/// use numeric_algorithms::max_variadic;
///
/// assert_eq!(max_variadic!(10, 5, 20, 1), 20);
/// ```
#[macro_export]
macro_rules! max_variadic {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::variadic::max_variadic([$first $(, $rest)*])
    };
}

/// `min_variadic!(first, rest...)`: smallest argument, earliest on ties.
///
/// ```rust
/// use numeric_algorithms::min_variadic;
///
/// assert_eq!(min_variadic!(10, 5, 20, 1), 1);
/// ```
#[macro_export]
macro_rules! min_variadic {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::variadic::min_variadic([$first $(, $rest)*])
    };
}
