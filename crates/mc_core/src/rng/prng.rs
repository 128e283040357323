//! Pseudo-random number generator wrapper for the sample generator.
//!
//! [`SampleRng`] wraps `rand::rngs::StdRng` and draws from the open-closed
//! unit interval (0, 1].

use rand::distributions::OpenClosed01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::source::UniformSource;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 12345;

/// Seeded uniform random number generator.
///
/// The same seed always produces the same sequence, so two generation
/// passes with equal seeds fill identical histograms.
///
/// # Examples
///
/// ```rust
/// use mc_core::rng::SampleRng;
///
/// let mut rng1 = SampleRng::from_seed(42);
/// let mut rng2 = SampleRng::from_seed(42);
/// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
/// ```
#[derive(Clone, Debug)]
pub struct SampleRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (kept for logging).
    seed: u64,
}

impl SampleRng {
    /// Creates a new generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    ///
    /// ```rust
    /// use mc_core::rng::SampleRng;
    ///
    /// let rng = SampleRng::from_seed(7);
    /// assert_eq!(rng.seed(), 7);
    /// ```
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform value in the half-open interval (0, 1].
    ///
    /// Zero is never returned; 1.0 can be.
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.sample(OpenClosed01)
    }

    /// Fills the buffer with uniform values in (0, 1].
    ///
    /// Zero-allocation; empty buffers are a no-op.
    ///
    /// ```rust
    /// use mc_core::rng::SampleRng;
    ///
    /// let mut rng = SampleRng::from_seed(42);
    /// let mut buffer = vec![0.0; 256];
    /// rng.fill_uniform(&mut buffer);
    /// assert!(buffer.iter().all(|&r| r > 0.0 && r <= 1.0));
    /// ```
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.sample(OpenClosed01);
        }
    }
}

impl Default for SampleRng {
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

impl UniformSource for SampleRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.gen_uniform()
    }
}
