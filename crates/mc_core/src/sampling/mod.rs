//! # Sample Generation
//!
//! Draws uniform variates, maps them to exponential variates by inverse CDF
//! and accumulates both into fixed-range histograms.
//!
//! ## Architecture
//!
//! ```text
//! SampleGenerator
//! ├── GeneratorConfig        (seed, num_values, xi)
//! ├── UniformSource          (SampleRng by default)
//! ├── ExponentialInverseCdf  (x = -xi * ln(r))
//! └── SampleStream           (exactly num_values samples)
//!     └── SampleHistograms   (h_Uni over [0, 1), h_Exp over [0, 5))
//! ```
//!
//! ## Invalid Draws
//!
//! A uniform draw of exactly zero would send `ln(r)` to negative infinity.
//! [`SampleRng`](crate::rng::SampleRng) never produces zero, but the stream
//! checks every draw regardless and resamples anything outside (0, 1]. A
//! source that keeps failing ends the pass with
//! [`SamplingError::InvalidSample`].
//!
//! ## Example
//!
//! ```rust
//! use mc_core::sampling::{GeneratorConfig, HistogramId, SampleGenerator};
//!
//! let config = GeneratorConfig::builder()
//!     .seed(12345)
//!     .num_values(10_000)
//!     .xi(1.0)
//!     .build()
//!     .unwrap();
//!
//! let hists = SampleGenerator::new(config).run().unwrap();
//! let exp = hists.get(HistogramId::Exponential);
//! assert_eq!(exp.integral() + exp.overflow(), 10_000);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod histograms;
pub mod transform;

pub use config::{
    GeneratorConfig, GeneratorConfigBuilder, DEFAULT_NUM_VALUES, DEFAULT_XI, MAX_NUM_VALUES,
};
pub use error::{ConfigError, SamplingError};
pub use generator::{generate, Sample, SampleGenerator, SampleStream, MAX_RESAMPLE_ATTEMPTS};
pub use histograms::{HistogramId, SampleHistograms, UnknownHistogram, SAMPLE_BINS};
pub use transform::{is_valid_uniform, ExponentialInverseCdf};
