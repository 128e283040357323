//! The sample generator: uniform draws, inverse-CDF transform, histogram fills.

use std::iter::FusedIterator;

use tracing::{debug, info, warn};

use super::config::GeneratorConfig;
use super::error::SamplingError;
use super::histograms::SampleHistograms;
use super::transform::{is_valid_uniform, ExponentialInverseCdf};
use crate::rng::{SampleRng, UniformSource};

/// Consecutive invalid uniform draws tolerated before a pass fails.
pub const MAX_RESAMPLE_ATTEMPTS: u32 = 64;

/// One paired observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Uniform variate in (0, 1].
    pub uniform: f64,
    /// `-xi * ln(uniform)`, always `>= 0`.
    pub exponential: f64,
}

/// Draws `num_values` samples and accumulates them into two histograms.
///
/// The generator owns its random source. It is consumed by
/// [`stream`](SampleGenerator::stream) or [`run`](SampleGenerator::run), so a
/// pass cannot be restarted part-way; build a new generator with the same
/// seed to reproduce it.
///
/// # Examples
///
/// ```rust
/// use mc_core::sampling::{GeneratorConfig, SampleGenerator};
///
/// let config = GeneratorConfig::builder().num_values(500).build().unwrap();
/// let hists = SampleGenerator::new(config).run().unwrap();
///
/// assert_eq!(hists.uniform.entries(), 500);
/// assert_eq!(hists.exponential.entries(), 500);
/// assert_eq!(hists.exponential.underflow(), 0);
/// ```
#[derive(Debug)]
pub struct SampleGenerator<S = SampleRng> {
    config: GeneratorConfig,
    source: S,
    transform: ExponentialInverseCdf,
}

impl SampleGenerator<SampleRng> {
    /// Creates a generator drawing from a [`SampleRng`] seeded with `config.seed()`.
    pub fn new(config: GeneratorConfig) -> Self {
        let source = SampleRng::from_seed(config.seed());
        Self::with_source(config, source)
    }
}

impl<S: UniformSource> SampleGenerator<S> {
    /// Creates a generator drawing from an arbitrary uniform source.
    ///
    /// The seed in `config` is ignored; the source is used as given.
    pub fn with_source(config: GeneratorConfig, source: S) -> Self {
        // GeneratorConfig can only be built with a validated xi.
        let transform = ExponentialInverseCdf::from_validated(config.xi());
        Self {
            config,
            source,
            transform,
        }
    }

    /// Returns the configuration of this pass.
    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Turns the generator into a stream of exactly `num_values` samples.
    pub fn stream(self) -> SampleStream<S> {
        SampleStream {
            source: self.source,
            transform: self.transform,
            remaining: self.config.num_values(),
            resampled: 0,
        }
    }

    /// Runs the full pass and returns the filled histograms.
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidSample`] if the source produces
    /// [`MAX_RESAMPLE_ATTEMPTS`] invalid draws in a row.
    pub fn run(self) -> Result<SampleHistograms, SamplingError> {
        let seed = self.config.seed();
        let num_values = self.config.num_values();
        let xi = self.config.xi();
        debug!(seed, num_values, xi, "Booking histograms");

        let mut hists = SampleHistograms::book()?;
        let mut stream = self.stream();

        for sample in stream.by_ref() {
            let sample = sample?;
            hists.uniform.fill(sample.uniform);
            hists.exponential.fill(sample.exponential);
        }

        info!(
            seed,
            num_values,
            xi,
            resampled = stream.resampled(),
            exp_overflow = hists.exponential.overflow(),
            "Generation pass complete"
        );

        Ok(hists)
    }
}

/// Runs one pass with the seeded default source.
///
/// ```rust
/// use mc_core::sampling::{generate, GeneratorConfig};
///
/// let hists = generate(GeneratorConfig::default()).unwrap();
/// assert_eq!(hists.uniform.entries(), 10_000);
/// ```
pub fn generate(config: GeneratorConfig) -> Result<SampleHistograms, SamplingError> {
    SampleGenerator::new(config).run()
}

/// Finite, non-restartable stream of samples.
///
/// Yields exactly `num_values` items unless the source fails, in which case
/// the error is yielded once and the stream ends.
#[derive(Debug)]
pub struct SampleStream<S> {
    source: S,
    transform: ExponentialInverseCdf,
    remaining: usize,
    resampled: u64,
}

impl<S: UniformSource> SampleStream<S> {
    /// Number of invalid draws that were discarded and redrawn so far.
    #[inline]
    pub fn resampled(&self) -> u64 {
        self.resampled
    }

    /// Draws until the source yields a value in (0, 1].
    fn draw_valid(&mut self) -> Result<f64, SamplingError> {
        let mut last_value = f64::NAN;
        for attempt in 1..=MAX_RESAMPLE_ATTEMPTS {
            let r = self.source.next_uniform();
            if is_valid_uniform(r) {
                return Ok(r);
            }
            warn!(value = r, attempt, "Invalid uniform draw, resampling");
            self.resampled += 1;
            last_value = r;
        }
        Err(SamplingError::InvalidSample {
            last_value,
            attempts: MAX_RESAMPLE_ATTEMPTS,
        })
    }
}

impl<S: UniformSource> Iterator for SampleStream<S> {
    type Item = Result<Sample, SamplingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        match self.draw_valid() {
            Ok(uniform) => {
                self.remaining -= 1;
                Some(Ok(Sample {
                    uniform,
                    exponential: self.transform.apply(uniform),
                }))
            }
            Err(err) => {
                self.remaining = 0;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<S: UniformSource> FusedIterator for SampleStream<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::HistogramId;

    /// Replays a fixed script of draws, then repeats the last one.
    struct ScriptedSource {
        values: Vec<f64>,
        position: usize,
    }

    impl ScriptedSource {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                position: 0,
            }
        }
    }

    impl UniformSource for ScriptedSource {
        fn next_uniform(&mut self) -> f64 {
            let value = self.values[self.position.min(self.values.len() - 1)];
            self.position += 1;
            value
        }
    }

    fn config(num_values: usize) -> GeneratorConfig {
        GeneratorConfig::builder()
            .num_values(num_values)
            .build()
            .unwrap()
    }

    #[test]
    fn test_stream_yields_exactly_num_values() {
        let stream = SampleGenerator::new(config(250)).stream();
        assert_eq!(stream.count(), 250);
    }

    #[test]
    fn test_stream_applies_transform() {
        let mut stream = SampleGenerator::new(config(100)).stream();
        while let Some(sample) = stream.next() {
            let sample = sample.unwrap();
            assert!(sample.uniform > 0.0 && sample.uniform <= 1.0);
            assert_eq!(sample.exponential, -sample.uniform.ln());
        }
        assert_eq!(stream.resampled(), 0);
    }

    #[test]
    fn test_zero_draw_is_resampled() {
        let source = ScriptedSource::new(&[0.5, 0.0, 0.25]);
        let samples: Vec<_> = SampleGenerator::with_source(config(2), source)
            .stream()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].uniform, 0.5);
        assert_eq!(samples[1].uniform, 0.25);
        assert!(samples.iter().all(|s| s.exponential.is_finite()));
    }

    #[test]
    fn test_resample_count_is_tracked() {
        let source = ScriptedSource::new(&[0.0, f64::NAN, 1.5, 0.75]);
        let mut stream = SampleGenerator::with_source(config(1), source).stream();

        let sample = stream.next().unwrap().unwrap();
        assert_eq!(sample.uniform, 0.75);
        assert_eq!(stream.resampled(), 3);
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_draw_of_one_is_valid() {
        let source = ScriptedSource::new(&[1.0]);
        let hists = SampleGenerator::with_source(config(3), source)
            .run()
            .unwrap();

        // r = 1.0 overflows [0, 1) but is still an entry; x = 0 lands in bin 0.
        assert_eq!(hists.uniform.entries(), 3);
        assert_eq!(hists.uniform.overflow(), 3);
        assert_eq!(hists.exponential.bin_content(0), Some(3));
    }

    #[test]
    fn test_stuck_source_fails_after_max_attempts() {
        let source = ScriptedSource::new(&[0.0]);
        let mut stream = SampleGenerator::with_source(config(5), source).stream();

        let err = stream.next().unwrap().unwrap_err();
        assert_eq!(
            err,
            SamplingError::InvalidSample {
                last_value: 0.0,
                attempts: MAX_RESAMPLE_ATTEMPTS,
            }
        );
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_run_propagates_stuck_source() {
        let source = ScriptedSource::new(&[0.3, 0.0]);
        let result = SampleGenerator::with_source(config(2), source).run();
        assert!(matches!(result, Err(SamplingError::InvalidSample { .. })));
    }

    #[test]
    fn test_run_fills_both_histograms() {
        let hists = SampleGenerator::new(config(1_000)).run().unwrap();
        for id in HistogramId::ALL {
            assert_eq!(hists.get(id).entries(), 1_000);
        }
        assert_eq!(hists.uniform.underflow(), 0);
        assert_eq!(hists.exponential.underflow(), 0);
    }

    #[test]
    fn test_run_is_deterministic() {
        let a = SampleGenerator::new(config(2_000)).run().unwrap();
        let b = SampleGenerator::new(config(2_000)).run().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_source_by_mutable_reference() {
        let mut rng = SampleRng::from_seed(12345);
        let borrowed = SampleGenerator::with_source(config(10), &mut rng)
            .run()
            .unwrap();
        let owned = SampleGenerator::new(config(10)).run().unwrap();
        assert_eq!(borrowed, owned);
    }
}
