//! Configured aggregation
//!
//! [`Aggregator`] carries an [`AggregationConfig`] so callers that want a
//! non-default variance divisor set it once instead of threading it through
//! every call.

use crate::container;
use numeric_core::{
    Addable, AggregationConfig, Comparable, Divisible, Iterable, Result, SquaredDeviation,
    VarianceDivisor,
};

/// All container aggregates of one sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<T> {
    pub count: usize,
    pub sum: T,
    pub mean: T,
    pub variance: T,
    pub min: T,
    pub max: T,
}

/// Aggregates under a fixed configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggregator {
    config: AggregationConfig,
}

impl Aggregator {
    pub fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    pub fn divisor(&self) -> VarianceDivisor {
        self.config.divisor
    }

    /// Variance under the configured divisor
    pub fn variance<C>(&self, seq: &C) -> Result<C::Element>
    where
        C: Iterable + ?Sized,
        C::Element: Addable + Divisible + SquaredDeviation,
    {
        container::variance_with(seq, self.config.divisor)
    }

    /// Variance of a fixed argument list under the configured divisor
    pub fn variance_of<T, const N: usize>(&self, args: [T; N]) -> Result<T>
    where
        T: Addable + Divisible + SquaredDeviation,
    {
        container::variance_with(&args, self.config.divisor)
    }

    /// Every aggregate of `seq` in one call.
    ///
    /// Empty input follows each aggregate's own rule, except that a sample
    /// divisor on fewer than two elements is an error.
    pub fn summarize<C>(&self, seq: &C) -> Result<Summary<C::Element>>
    where
        C: Iterable + ?Sized,
        C::Element: Addable + Divisible + SquaredDeviation + Comparable,
    {
        Ok(Summary {
            count: seq.len(),
            sum: container::sum(seq),
            mean: container::mean(seq),
            variance: self.variance(seq)?,
            min: container::min(seq),
            max: container::max(seq),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numeric_core::Error;

    #[test]
    fn test_default_aggregator_is_population() {
        let aggregator = Aggregator::default();
        assert_eq!(aggregator.divisor(), VarianceDivisor::Population);
        assert_eq!(aggregator.variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_sample_aggregator() {
        let aggregator = Aggregator::new(AggregationConfig::sample());
        assert_eq!(aggregator.config(), &AggregationConfig::sample());
        assert_eq!(aggregator.variance(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 2.5);
        assert_eq!(aggregator.variance_of([2.0, 4.0]).unwrap(), 2.0);
        assert!(matches!(
            aggregator.variance_of([2.0]),
            Err(Error::InsufficientData { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_summarize() {
        let summary = Aggregator::default()
            .summarize(&vec![3, 1, 4, 1, 5, 9, 2, 6])
            .unwrap();
        assert_eq!(
            summary,
            Summary {
                count: 8,
                sum: 31,
                mean: 3,
                variance: 7,
                min: 1,
                max: 9,
            }
        );
    }

    #[test]
    fn test_summarize_empty() {
        let empty: Vec<f64> = Vec::new();
        let summary = Aggregator::default().summarize(&empty).unwrap();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.sum, 0.0);
        assert_eq!(summary.max, 0.0);

        assert!(Aggregator::new(AggregationConfig::sample())
            .summarize(&empty)
            .is_err());
    }
}
