//! # Random Number Generation
//!
//! Seeded pseudo-random source for the sample generator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is created from an explicit seed;
//!   there is no process-wide generator object
//! - **Open-closed interval**: uniform draws lie in (0, 1], so zero is
//!   excluded at the source and `ln(r)` is always finite
//! - **Static dispatch**: the generator is generic over [`UniformSource`],
//!   so tests can inject a scripted source without `Box<dyn Trait>`
//!
//! ## Module Structure
//!
//! - [`prng`]: seeded PRNG wrapper
//! - [`source`]: the [`UniformSource`] trait consumed by the sampler
//!
//! ## Usage Example
//!
//! ```rust
//! use mc_core::rng::{SampleRng, UniformSource};
//!
//! let mut rng = SampleRng::from_seed(12345);
//! let r = rng.next_uniform();
//! assert!(r > 0.0 && r <= 1.0);
//! ```

mod prng;
mod source;

pub use prng::{SampleRng, DEFAULT_SEED};
pub use source::UniformSource;

#[cfg(test)]
mod tests;
