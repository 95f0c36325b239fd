//! Aggregates over a borrowed sequence
//!
//! Every function takes `&C` with `C: Iterable`, reads the elements in order,
//! and returns a freshly computed value. The element type's `Default` is the
//! result for empty input wherever the function returns a bare `T`; the
//! `try_*`/`*_with` variants report empty or short input as an [`Error`].

use numeric_core::{
    Addable, Comparable, Divisible, Error, Iterable, Result, SquaredDeviation, VarianceDivisor,
};

/// Sum of all elements, seeded with the additive identity.
///
/// Elements are added left to right. Empty input yields `T::default()`.
///
/// # Examples
///
/// ```rust
/// use numeric_algorithms::sum;
///
/// assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0, 5.0]), 15.0);
/// assert_eq!(sum(&Vec::<i32>::new()), 0);
/// ```
pub fn sum<C>(seq: &C) -> C::Element
where
    C: Iterable + ?Sized,
    C::Element: Addable,
{
    seq.elements()
        .fold(C::Element::default(), |acc, value| acc + value.clone())
}

/// Arithmetic mean: `sum / len`.
///
/// Empty input yields `T::default()` rather than dividing by zero. Integral
/// element types truncate toward zero.
///
/// # Examples
///
/// ```rust
/// use numeric_algorithms::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert_eq!(mean(&[1, 2]), 1);
/// ```
pub fn mean<C>(seq: &C) -> C::Element
where
    C: Iterable + ?Sized,
    C::Element: Addable + Divisible,
{
    let n = seq.len();
    if n == 0 {
        log::trace!("mean: empty input, returning the additive identity");
        return C::Element::default();
    }
    sum(seq).div_count(n)
}

/// Population variance: mean squared deviation from the mean.
///
/// Two passes: the first computes [`mean`], the second accumulates
/// squared deviations, which are then divided by `len`. Integral element
/// types square by multiplication and stay integral throughout; see
/// [`SquaredDeviation`]. Empty input yields `T::default()`.
///
/// Squared deviations are accumulated in `T` before the division, so a
/// fixed-width integer sum of squares can overflow (a debug-build panic)
/// even when the variance itself fits: `[0i32, 50_000, 0, 50_000]` has
/// variance `625_000_000` but a sum of squares of `2_500_000_000`. Widen
/// the element type (`i64`, `f64`) for such data.
///
/// # Examples
///
/// ```rust
/// use numeric_algorithms::variance;
///
/// assert_eq!(variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.0);
/// assert_eq!(variance(&[7, 7, 7]), 0);
/// ```
pub fn variance<C>(seq: &C) -> C::Element
where
    C: Iterable + ?Sized,
    C::Element: Addable + Divisible + SquaredDeviation,
{
    let n = seq.len();
    if n == 0 {
        log::trace!("variance: empty input, returning the additive identity");
        return C::Element::default();
    }
    let center = mean(seq);
    sum_squared_deviations(seq, &center).div_count(n)
}

/// Variance with an explicit divisor.
///
/// `VarianceDivisor::Population` matches [`variance`], including `Ok` with
/// the additive identity for empty input. `VarianceDivisor::Sample` divides
/// by `len - 1` and needs at least two elements.
///
/// # Errors
///
/// [`Error::InsufficientData`] when a sample variance is requested for fewer
/// than two elements.
///
/// # Examples
///
/// ```rust
/// use numeric_algorithms::variance_with;
/// use numeric_core::VarianceDivisor;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(variance_with(&data, VarianceDivisor::Sample).unwrap(), 2.5);
/// assert!(variance_with(&[1.0], VarianceDivisor::Sample).is_err());
/// ```
pub fn variance_with<C>(seq: &C, divisor: VarianceDivisor) -> Result<C::Element>
where
    C: Iterable + ?Sized,
    C::Element: Addable + Divisible + SquaredDeviation,
{
    let n = seq.len();
    if n == 0 && divisor == VarianceDivisor::Population {
        return Ok(C::Element::default());
    }
    let denominator = divisor
        .denominator(n)
        .ok_or_else(|| Error::insufficient(divisor.min_samples(), n))?;
    log::trace!(
        "variance: {n} elements, {divisor:?} divisor, {:?} squaring",
        <C::Element as SquaredDeviation>::CATEGORY
    );
    let center = mean(seq);
    Ok(sum_squared_deviations(seq, &center).div_count(denominator))
}

/// Largest element; ties keep the earliest.
///
/// The running maximum starts at the first element and is replaced only by
/// a strictly greater one. Empty input yields `T::default()`, which is a
/// placeholder and not a lower bound for arbitrary `T`; use [`try_max`] to
/// tell the two apart.
///
/// # Examples
///
/// ```rust
/// use numeric_algorithms::max;
///
/// assert_eq!(max(&[3, 1, 4, 1, 5, 9, 2, 6]), 9);
/// assert_eq!(max(&[0u8; 0]), 0);
/// ```
pub fn max<C>(seq: &C) -> C::Element
where
    C: Iterable + ?Sized,
    C::Element: Comparable + Clone + Default,
{
    extreme(seq, |candidate, best| candidate.greater_than(best)).unwrap_or_else(|| {
        log::trace!("max: empty input, returning the default value");
        C::Element::default()
    })
}

/// Largest element, or [`Error::EmptyInput`] for an empty sequence.
pub fn try_max<C>(seq: &C) -> Result<C::Element>
where
    C: Iterable + ?Sized,
    C::Element: Comparable + Clone,
{
    extreme(seq, |candidate, best| candidate.greater_than(best))
        .ok_or_else(|| Error::empty_input("max"))
}

/// Smallest element; ties keep the earliest.
///
/// Mirror of [`max`]: the running minimum is replaced only when it is
/// strictly greater than a later element. Empty input yields `T::default()`.
pub fn min<C>(seq: &C) -> C::Element
where
    C: Iterable + ?Sized,
    C::Element: Comparable + Clone + Default,
{
    extreme(seq, |candidate, best| best.greater_than(candidate)).unwrap_or_else(|| {
        log::trace!("min: empty input, returning the default value");
        C::Element::default()
    })
}

/// Smallest element, or [`Error::EmptyInput`] for an empty sequence.
pub fn try_min<C>(seq: &C) -> Result<C::Element>
where
    C: Iterable + ?Sized,
    C::Element: Comparable + Clone,
{
    extreme(seq, |candidate, best| best.greater_than(candidate))
        .ok_or_else(|| Error::empty_input("min"))
}

/// Map every element, then sum the results.
///
/// The map must produce the element type, which is accumulated under the
/// same contract as [`sum`]. Empty input yields `T::default()`.
///
/// # Examples
///
/// ```rust
/// use numeric_algorithms::transform_reduce;
///
/// let squares = transform_reduce(&[1.0, 2.0, 3.0, 4.0, 5.0], |x| x * x);
/// assert_eq!(squares, 55.0);
/// ```
pub fn transform_reduce<C, F>(seq: &C, mut transform: F) -> C::Element
where
    C: Iterable + ?Sized,
    C::Element: Addable,
    F: FnMut(&C::Element) -> C::Element,
{
    seq.elements()
        .fold(C::Element::default(), |acc, value| acc + transform(value))
}

/// Second pass of variance: Σ (x - center)^2
fn sum_squared_deviations<C>(seq: &C, center: &C::Element) -> C::Element
where
    C: Iterable + ?Sized,
    C::Element: Addable + SquaredDeviation,
{
    seq.elements().fold(C::Element::default(), |acc, value| {
        acc + value.squared_deviation(center)
    })
}

/// Single scan keeping the running best; `replaces(candidate, best)` decides.
fn extreme<C, F>(seq: &C, replaces: F) -> Option<C::Element>
where
    C: Iterable + ?Sized,
    C::Element: Clone,
    F: Fn(&C::Element, &C::Element) -> bool,
{
    let mut iter = seq.elements();
    let mut best = iter.next()?;
    for candidate in iter {
        if replaces(candidate, best) {
            best = candidate;
        }
    }
    Some(best.clone())
}
