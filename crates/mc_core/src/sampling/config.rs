//! Sample generator configuration.
//!
//! This module provides [`GeneratorConfig`] and its builder. Every field has
//! a default, so `GeneratorConfig::default()` reproduces the reference run:
//! seed 12345, 10000 values, xi = 1.0.

use super::error::ConfigError;
use crate::rng::DEFAULT_SEED;

/// Default number of generated values.
pub const DEFAULT_NUM_VALUES: usize = 10_000;

/// Default exponential rate parameter (the mean of the distribution).
pub const DEFAULT_XI: f64 = 1.0;

/// Maximum number of values in one pass.
pub const MAX_NUM_VALUES: usize = 100_000_000;

/// Immutable configuration of one generation pass.
///
/// Use [`GeneratorConfigBuilder`] to construct non-default instances.
///
/// # Examples
///
/// ```rust
/// use mc_core::sampling::GeneratorConfig;
///
/// let config = GeneratorConfig::builder()
///     .seed(42)
///     .num_values(1_000)
///     .xi(2.0)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.num_values(), 1_000);
/// assert_eq!(config.xi(), 2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Seed of the uniform source.
    seed: u64,
    /// Number of paired observations.
    num_values: usize,
    /// Mean of the exponential distribution.
    xi: f64,
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Returns the seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of values per pass.
    #[inline]
    pub fn num_values(&self) -> usize {
        self.num_values
    }

    /// Returns the exponential rate parameter.
    #[inline]
    pub fn xi(&self) -> f64 {
        self.xi
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `num_values` is 0 or greater than 100,000,000
    /// - `xi` is not finite or not strictly positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_values == 0 || self.num_values > MAX_NUM_VALUES {
            return Err(ConfigError::InvalidValueCount(self.num_values));
        }
        validate_xi(self.xi)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            num_values: DEFAULT_NUM_VALUES,
            xi: DEFAULT_XI,
        }
    }
}

pub(crate) fn validate_xi(xi: f64) -> Result<(), ConfigError> {
    if xi.is_finite() && xi > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRate(xi))
    }
}

/// Builder for [`GeneratorConfig`].
///
/// Unset fields fall back to the defaults; validation happens in
/// [`build`](GeneratorConfigBuilder::build).
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfigBuilder {
    seed: Option<u64>,
    num_values: Option<usize>,
    xi: Option<f64>,
}

impl GeneratorConfigBuilder {
    /// Sets the seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of values, in [1, 100_000_000].
    #[inline]
    pub fn num_values(mut self, num_values: usize) -> Self {
        self.num_values = Some(num_values);
        self
    }

    /// Sets the exponential rate parameter (positive, finite).
    #[inline]
    pub fn xi(mut self, xi: f64) -> Self {
        self.xi = Some(xi);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any value is out of range.
    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        let config = GeneratorConfig {
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            num_values: self.num_values.unwrap_or(DEFAULT_NUM_VALUES),
            xi: self.xi.unwrap_or(DEFAULT_XI),
        };

        config.validate()?;
        Ok(config)
    }
}
