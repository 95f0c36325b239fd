//! Aggregation configuration
//!
//! The only tunable is the variance divisor. Population variance (divide by
//! `n`) is the default everywhere; sample variance (divide by `n - 1`) is an
//! explicit opt-in.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Denominator applied to the summed squared deviations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceDivisor {
    /// Divide by `n`
    #[default]
    Population,
    /// Divide by `n - 1` (Bessel's correction)
    Sample,
}

impl VarianceDivisor {
    /// Smallest sequence length this divisor is defined for
    pub fn min_samples(self) -> usize {
        match self {
            VarianceDivisor::Population => 1,
            VarianceDivisor::Sample => 2,
        }
    }

    /// Denominator for a sequence of `len` elements, if defined
    pub fn denominator(self, len: usize) -> Option<usize> {
        if len < self.min_samples() {
            return None;
        }
        match self {
            VarianceDivisor::Population => Some(len),
            VarianceDivisor::Sample => Some(len - 1),
        }
    }
}

/// Settings shared by configured aggregations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Variance denominator
    pub divisor: VarianceDivisor,
}

impl AggregationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Population variance (the default)
    pub fn population() -> Self {
        Self::new().with_divisor(VarianceDivisor::Population)
    }

    /// Sample variance
    pub fn sample() -> Self {
        Self::new().with_divisor(VarianceDivisor::Sample)
    }

    pub fn with_divisor(mut self, divisor: VarianceDivisor) -> Self {
        self.divisor = divisor;
        self
    }

    /// Load from a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!("Loaded aggregation config: {config:?}");
        Ok(config)
    }

    /// Serialize to a JSON document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
