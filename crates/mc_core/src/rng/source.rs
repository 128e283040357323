//! The uniform-variate seam between the random source and the sampler.

/// A source of uniform variates in (0, 1].
///
/// [`SampleRng`](super::SampleRng) is the production implementation. The
/// sampler does not trust the contract blindly: a value of zero, a value
/// outside (0, 1] or a non-finite value is treated as an invalid draw and
/// resampled.
pub trait UniformSource {
    /// Returns the next uniform variate.
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
