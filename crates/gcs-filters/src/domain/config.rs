//! Filter parameters and cost-model calibration
//!
//! Both the domain-scale constant and the operation cost weights are
//! configuration, not compiled-in constants: the domain scale is set by the
//! target false-positive rate of each filter, and the weights are empirical
//! measurements that differ per deployment hardware. The calibration
//! benchmarks in the test suite re-derive the weights for a target machine.

use crate::error::FilterError;
use serde::{Deserialize, Serialize};

/// Default Golomb-Rice parameter (power-of-two remainder width).
pub const DEFAULT_P: u8 = 19;

/// Default domain-scale constant M. False-positive rate ≈ 1/M.
pub const DEFAULT_M: u64 = 784_931;

/// Golomb-Coded Set filter parameters.
///
/// `m` scales the filter's value space relative to its element count and
/// must be identical between the side that builds a filter and the side
/// that matches against it; a mismatch silently produces wrong answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Golomb-Rice parameter: remainder width in bits
    pub p: u8,
    /// Domain-scale constant: value-space slots per element
    pub m: u64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            p: DEFAULT_P,
            m: DEFAULT_M,
        }
    }
}

impl FilterParams {
    /// Create parameters with validation
    pub fn new(p: u8, m: u64) -> Result<Self, FilterError> {
        let params = Self { p, m };
        params.validate()?;
        Ok(params)
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.p == 0 || self.p > 32 {
            return Err(FilterError::InvalidParameters(format!(
                "rice parameter {} out of range 1..=32",
                self.p
            )));
        }
        if self.m == 0 {
            return Err(FilterError::InvalidParameters(
                "domain scale cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Expected false-positive rate with these parameters.
    pub fn false_positive_rate(&self) -> f64 {
        1.0 / self.m as f64
    }
}

/// Relative CPU cost of the primitive operations behind each matching
/// strategy, in units of one merge-walk comparison.
///
/// The defaults were measured on commodity x86-64; they are relative
/// weights, not absolute timings, and should be recalibrated against target
/// hardware with the calibration benchmarks before being trusted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostWeights {
    /// Per-element cost of sorting the reduced query list
    pub sort: f64,
    /// Cost of decoding one entry from the filter stream
    pub read: f64,
    /// Cost of inserting one entry into the probe set
    pub insert: f64,
    /// Cost of probing the set for one query value
    pub lookup: f64,
    /// Cost of one merge-walk comparison
    pub compare: f64,
    /// Cost of deriving one reduced value from a raw item
    pub key: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            sort: 130.0,
            read: 30.0,
            insert: 45.0,
            lookup: 30.0,
            compare: 1.0,
            key: 3.0,
        }
    }
}

impl CostWeights {
    /// Validate that every weight is finite and positive
    pub fn validate(&self) -> Result<(), FilterError> {
        let named = [
            ("sort", self.sort),
            ("read", self.read),
            ("insert", self.insert),
            ("lookup", self.lookup),
            ("compare", self.compare),
            ("key", self.key),
        ];
        for (name, value) in named {
            if !value.is_finite() || value <= 0.0 {
                return Err(FilterError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Aggregate matcher configuration: filter parameters plus cost calibration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct MatcherConfig {
    pub params: FilterParams,
    pub weights: CostWeights,
}

impl MatcherConfig {
    /// Create a configuration with validation
    pub fn new(params: FilterParams, weights: CostWeights) -> Result<Self, FilterError> {
        let config = Self { params, weights };
        config.validate()?;
        Ok(config)
    }

    /// Validate both halves of the configuration
    pub fn validate(&self) -> Result<(), FilterError> {
        self.params.validate()?;
        self.weights.validate()
    }
}

/// Builder for `MatcherConfig` with validation
///
/// Every calibration value is independently settable; unset values fall
/// back to the defaults.
///
/// # Example
///
/// ```ignore
/// let config = MatcherConfigBuilder::new()
///     .domain_scale(524_288)
///     .rice_parameter(19)
///     .sort_weight(110.0)
///     .build()?;
/// ```
#[derive(Default)]
pub struct MatcherConfigBuilder {
    p: Option<u8>,
    m: Option<u64>,
    sort: Option<f64>,
    read: Option<f64>,
    insert: Option<f64>,
    lookup: Option<f64>,
    compare: Option<f64>,
    key: Option<f64>,
}

impl MatcherConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Golomb-Rice parameter (1 to 32)
    pub fn rice_parameter(mut self, p: u8) -> Self {
        self.p = Some(p);
        self
    }

    /// Set the domain-scale constant M
    pub fn domain_scale(mut self, m: u64) -> Self {
        self.m = Some(m);
        self
    }

    /// Set the query-sort weight
    pub fn sort_weight(mut self, weight: f64) -> Self {
        self.sort = Some(weight);
        self
    }

    /// Set the stream-read weight
    pub fn read_weight(mut self, weight: f64) -> Self {
        self.read = Some(weight);
        self
    }

    /// Set the set-insert weight
    pub fn insert_weight(mut self, weight: f64) -> Self {
        self.insert = Some(weight);
        self
    }

    /// Set the set-lookup weight
    pub fn lookup_weight(mut self, weight: f64) -> Self {
        self.lookup = Some(weight);
        self
    }

    /// Set the pairwise-compare weight
    pub fn compare_weight(mut self, weight: f64) -> Self {
        self.compare = Some(weight);
        self
    }

    /// Set the key-derivation weight
    pub fn key_weight(mut self, weight: f64) -> Self {
        self.key = Some(weight);
        self
    }

    /// Build the configuration, validating all values
    pub fn build(self) -> Result<MatcherConfig, FilterError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation (for internal use only)
    pub fn build_unchecked(self) -> MatcherConfig {
        let params = FilterParams::default();
        let weights = CostWeights::default();

        MatcherConfig {
            params: FilterParams {
                p: self.p.unwrap_or(params.p),
                m: self.m.unwrap_or(params.m),
            },
            weights: CostWeights {
                sort: self.sort.unwrap_or(weights.sort),
                read: self.read.unwrap_or(weights.read),
                insert: self.insert.unwrap_or(weights.insert),
                lookup: self.lookup.unwrap_or(weights.lookup),
                compare: self.compare.unwrap_or(weights.compare),
                key: self.key.unwrap_or(weights.key),
            },
        }
    }
}
