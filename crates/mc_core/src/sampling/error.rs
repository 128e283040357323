//! Error types for the sample generator.
//!
//! [`ConfigError`] is raised while building a [`GeneratorConfig`](super::GeneratorConfig);
//! [`SamplingError`] is raised while a generation pass runs.

use thiserror::Error;

use crate::histogram::HistogramError;

/// Configuration error for the sample generator.
///
/// These errors occur at build time when invalid parameters are provided.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Sample count outside the valid range [1, 100_000_000].
    #[error("Invalid value count {0}: must be in range [1, 100_000_000]")]
    InvalidValueCount(usize),

    /// Exponential rate parameter that is not a positive finite number.
    #[error("Invalid xi {0}: must be a positive finite number")]
    InvalidRate(f64),
}

/// Runtime error raised during a generation pass.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SamplingError {
    /// The random source kept returning values outside (0, 1].
    ///
    /// Isolated invalid draws are resampled; this is only raised once
    /// `attempts` consecutive draws have failed.
    #[error("Uniform source produced {attempts} consecutive invalid draws (last value {last_value})")]
    InvalidSample {
        /// The last rejected draw.
        last_value: f64,
        /// Number of consecutive rejected draws.
        attempts: u32,
    },

    /// A value outside (0, 1] was passed to the inverse-CDF transform.
    #[error("Uniform variate {0} outside (0, 1]: cannot apply inverse CDF")]
    OutOfDomain(f64),

    /// The output histograms could not be booked.
    #[error("Histogram booking failed: {0}")]
    Histogram(#[from] HistogramError),
}
